// CSS value types and parsing - organized module structure

pub mod color;
pub mod length;

// Re-export commonly used types
pub use color::Color;
pub use length::{Length, Unit};

use std::fmt;

use serde::{Deserialize, Serialize};

/// CSS property values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CssValue {
    Length(Length),
    Color(Color),
    Number(f32),
    String(String),
    Keyword(String),
    Auto,
    /// Literal scalar zero; stands in for values the engine cannot lay out yet
    Zero,
    MultipleValues(Vec<CssValue>), // For shorthand properties like "5em auto"
}

/// Category of a primitive value, as reported to style consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Integer,
    Number,
    Length,
    Percentage,
    Color,
    String,
    Ident,
    List,
}

impl CssValue {
    /// Parse a CSS value from a string
    pub fn parse(value: &str) -> Self {
        let value = value.trim();

        // Check if this contains multiple space-separated values (shorthand syntax)
        let parts: Vec<&str> = value.split_whitespace().collect();
        if parts.len() > 1 {
            let parsed_values: Vec<CssValue> = parts.iter()
                .map(|part| Self::parse_single_value(part))
                .collect();
            return CssValue::MultipleValues(parsed_values);
        }

        // Single value
        Self::parse_single_value(value)
    }

    /// Parse a single CSS value (no spaces)
    fn parse_single_value(value: &str) -> Self {
        let value = value.trim();

        if value.eq_ignore_ascii_case("auto") {
            return CssValue::Auto;
        }

        if value.starts_with('#') {
            return CssValue::Color(Color::Hex(value.to_string()));
        }

        if value.starts_with("rgb(") || value.starts_with("rgba(") {
            return match Color::parse_rgb(value) {
                Some(color) => CssValue::Color(color),
                None => CssValue::Keyword(value.to_string()),
            };
        }

        if Color::is_named_color(value) {
            return CssValue::Color(Color::Named(value.to_string()));
        }

        if let Some(length) = Length::parse(value) {
            return CssValue::Length(length);
        }

        if let Ok(num) = value.parse::<f32>() {
            return CssValue::Number(num);
        }

        // Check for quoted strings
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            return CssValue::String(value[1..value.len() - 1].to_string());
        }

        // Default to keyword
        CssValue::Keyword(value.to_string())
    }

    /// Normalized textual form of the value
    pub fn css_text(&self) -> String {
        self.to_string()
    }

    /// True when the textual form is the `auto` keyword, ignoring case and
    /// surrounding whitespace
    pub fn is_auto(&self) -> bool {
        match self {
            CssValue::Auto => true,
            _ => self.css_text().trim().to_lowercase() == "auto",
        }
    }

    pub fn primitive_type(&self) -> PrimitiveType {
        match self {
            CssValue::Zero => PrimitiveType::Integer,
            CssValue::Number(_) => PrimitiveType::Number,
            CssValue::Length(length) if length.unit == Unit::Percent => PrimitiveType::Percentage,
            CssValue::Length(_) => PrimitiveType::Length,
            CssValue::Color(_) => PrimitiveType::Color,
            CssValue::String(_) => PrimitiveType::String,
            CssValue::Keyword(_) | CssValue::Auto => PrimitiveType::Ident,
            CssValue::MultipleValues(_) => PrimitiveType::List,
        }
    }

    /// Numeric part of the value, if it has one
    pub fn float_value(&self) -> Option<f32> {
        match self {
            CssValue::Zero => Some(0.0),
            CssValue::Number(n) => Some(*n),
            CssValue::Length(length) => Some(length.value),
            _ => None,
        }
    }

    pub fn as_length(&self) -> Option<&Length> {
        match self {
            CssValue::Length(length) => Some(length),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&Color> {
        match self {
            CssValue::Color(color) => Some(color),
            _ => None,
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CssValue::Color(color) => write!(f, "{}", color),
            CssValue::Length(length) => write!(f, "{}", length),
            CssValue::String(s) => write!(f, "{}", s),
            CssValue::Number(n) => write!(f, "{}", n),
            CssValue::Keyword(k) => write!(f, "{}", k),
            CssValue::Auto => write!(f, "auto"),
            CssValue::Zero => write!(f, "0"),
            CssValue::MultipleValues(values) => {
                let mut iter = values.iter();
                if let Some(first) = iter.next() {
                    write!(f, "{}", first)?;
                    for value in iter {
                        write!(f, " {}", value)?;
                    }
                }
                Ok(())
            },
        }
    }
}
