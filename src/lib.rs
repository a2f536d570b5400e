//! CSS shorthand expansion for the stokes style engine.
//!
//! The `margin` shorthand is expanded into its four longhands following the
//! CSS2 box model rules. `auto` margins are not supported by layout yet and
//! are replaced with a shared zero value.

pub mod css;

pub use css::{
    expand_margin, substitute_auto, zero_margin, Color, ConfigError, CssValue, Declaration,
    Length, Origin, PrimitiveType, PropertyDeclarationFactory, PropertyName, ShorthandConfig,
    ShorthandMarginExpander, Unit,
};
