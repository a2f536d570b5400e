// CSS declarations and stylesheet origins
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::shorthands::margin::ShorthandMarginExpander;
use super::{CssValue, PropertyName};

/// Where a stylesheet came from; used by the cascade to rank declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Origin {
    UserAgent,
    User,
    #[default]
    Author,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Origin::UserAgent => write!(f, "user-agent"),
            Origin::User => write!(f, "user"),
            Origin::Author => write!(f, "author"),
        }
    }
}

/// A CSS declaration (property: value)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: PropertyName,
    pub value: Arc<CssValue>,
    pub important: bool,
    pub origin: Origin,
}

impl Declaration {
    pub fn new(property: PropertyName, value: Arc<CssValue>) -> Self {
        Self {
            property,
            value,
            important: false,
            origin: Origin::default(),
        }
    }

    pub fn with_important(property: PropertyName, value: Arc<CssValue>, important: bool) -> Self {
        Self {
            property,
            value,
            important,
            origin: Origin::default(),
        }
    }

    pub fn with_origin(
        property: PropertyName,
        value: Arc<CssValue>,
        important: bool,
        origin: Origin,
    ) -> Self {
        Self {
            property,
            value,
            important,
            origin,
        }
    }

    /// Replace a shorthand declaration with its longhands.
    /// Longhand declarations come back unchanged.
    pub fn expand_shorthand(&self) -> Vec<Declaration> {
        match self.property {
            PropertyName::Margin => ShorthandMarginExpander::instance().build_declarations_from_value(
                &self.value,
                self.important,
                self.origin,
            ),
            _ => vec![self.clone()],
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;
        if self.important {
            write!(f, " !important")?;
        }
        Ok(())
    }
}
