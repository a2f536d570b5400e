// CSS color representation
use std::fmt;

use serde::{Deserialize, Serialize};

/// CSS color representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Named(String),
    Hex(String),
}

impl Color {
    /// Parse `rgb(...)` / `rgba(...)` functional notation
    pub fn parse_rgb(value: &str) -> Option<Self> {
        let content = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))?
            .strip_suffix(')')?;

        let parts: Vec<&str> = content.split(',').map(|s| s.trim()).collect();
        if parts.len() < 3 {
            return None;
        }

        let (Ok(r), Ok(g), Ok(b)) = (
            parts[0].parse::<u8>(),
            parts[1].parse::<u8>(),
            parts[2].parse::<u8>(),
        ) else {
            return None;
        };

        if let Some(alpha) = parts.get(3) {
            let a = alpha.parse::<f32>().ok()?;
            return Some(Color::Rgba { r, g, b, a });
        }
        Some(Color::Rgb { r, g, b })
    }

    pub fn is_named_color(value: &str) -> bool {
        matches!(value.to_lowercase().as_str(),
            "black" | "white" | "red" | "green" | "blue" | "yellow" |
            "cyan" | "magenta" | "gray" | "grey" | "orange" | "purple" |
            "brown" | "pink" | "lime" | "navy" | "teal" | "silver" |
            "maroon" | "olive" | "aqua" | "fuchsia"
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Rgb { r, g, b } => write!(f, "rgb({}, {}, {})", r, g, b),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Color::Named(name) => write!(f, "{}", name),
            Color::Hex(hex) => write!(f, "{}", hex),
        }
    }
}
