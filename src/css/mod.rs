// CSS module: values, declarations and shorthand expansion
mod config;
mod shorthands;
mod stylesheet;
mod values;

pub use self::config::{ConfigError, ShorthandConfig};
pub use self::shorthands::{
    margin::{expand_margin, substitute_auto, zero_margin, ShorthandMarginExpander},
    PropertyDeclarationFactory,
};
pub use self::stylesheet::{Declaration, Origin};
pub use self::values::{Color, CssValue, Length, PrimitiveType, Unit};

use std::fmt;

use serde::{Deserialize, Serialize};

/// CSS property names
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyName {
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Unknown(String),
}

impl PropertyName {
    /// The property name as written in a stylesheet
    pub fn as_str(&self) -> &str {
        match self {
            PropertyName::Margin => "margin",
            PropertyName::MarginTop => "margin-top",
            PropertyName::MarginRight => "margin-right",
            PropertyName::MarginBottom => "margin-bottom",
            PropertyName::MarginLeft => "margin-left",
            PropertyName::Unknown(name) => name.as_str(),
        }
    }

    pub fn is_shorthand(&self) -> bool {
        matches!(self, PropertyName::Margin)
    }
}

impl From<&str> for PropertyName {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "margin" => PropertyName::Margin,
            "margin-top" => PropertyName::MarginTop,
            "margin-right" => PropertyName::MarginRight,
            "margin-bottom" => PropertyName::MarginBottom,
            "margin-left" => PropertyName::MarginLeft,
            _ => PropertyName::Unknown(s.to_string()),
        }
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_names_round_trip_through_css_text() {
        for name in ["margin", "margin-top", "margin-right", "margin-bottom", "margin-left"] {
            assert_eq!(PropertyName::from(name).as_str(), name);
        }
        assert_eq!(PropertyName::from("MARGIN-Left"), PropertyName::MarginLeft);
        assert_eq!(
            PropertyName::from("padding"),
            PropertyName::Unknown("padding".to_string())
        );
    }

    #[test]
    fn only_margin_is_a_shorthand() {
        assert!(PropertyName::Margin.is_shorthand());
        assert!(!PropertyName::MarginTop.is_shorthand());
    }
}
