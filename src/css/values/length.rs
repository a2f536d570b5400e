// CSS length units and values
use std::fmt;

use serde::{Deserialize, Serialize};

/// CSS length units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Unit {
    Px,
    Pt,
    Em,
    Rem,
    Percent,
}

impl Unit {
    /// Unit suffix as written in a stylesheet
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Pt => "pt",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Percent => "%",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS length value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f32,
    pub unit: Unit,
}

impl Length {
    pub fn px(value: f32) -> Self {
        Self { value, unit: Unit::Px }
    }

    pub fn pt(value: f32) -> Self {
        Self { value, unit: Unit::Pt }
    }

    pub fn em(value: f32) -> Self {
        Self { value, unit: Unit::Em }
    }

    pub fn rem(value: f32) -> Self {
        Self { value, unit: Unit::Rem }
    }

    pub fn percent(value: f32) -> Self {
        Self { value, unit: Unit::Percent }
    }

    /// Parse a single length token such as `10px`, `1.5em` or `50%`
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        // "rem" has to be checked before "em"
        let (number, unit) = if let Some(number) = value.strip_suffix("rem") {
            (number, Unit::Rem)
        } else if let Some(number) = value.strip_suffix("px") {
            (number, Unit::Px)
        } else if let Some(number) = value.strip_suffix("em") {
            (number, Unit::Em)
        } else if let Some(number) = value.strip_suffix("pt") {
            (number, Unit::Pt)
        } else if let Some(number) = value.strip_suffix('%') {
            (number, Unit::Percent)
        } else {
            return None;
        };

        number.parse::<f32>().ok().map(|value| Self { value, unit })
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::px(0.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}
