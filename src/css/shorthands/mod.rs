// Shorthand property expansion
pub mod margin;

use std::sync::Arc;

use tracing::trace;

use super::{CssValue, Declaration, Origin, PropertyName};

/// Turns the values of one shorthand property into longhand declarations
pub trait PropertyDeclarationFactory {
    /// The shorthand this factory expands
    fn shorthand(&self) -> PropertyName;

    /// Expand `values` given for `property`.
    /// Returns nothing if `property` is not the shorthand this factory handles.
    fn build_declarations(
        &self,
        values: &[Arc<CssValue>],
        important: bool,
        property: &PropertyName,
        origin: Origin,
    ) -> Vec<Declaration> {
        if *property != self.shorthand() {
            trace!("{} factory asked to expand {}, ignoring", self.shorthand(), property);
            return Vec::new();
        }
        self.do_build_declarations(values, important, origin)
    }

    fn do_build_declarations(
        &self,
        values: &[Arc<CssValue>],
        important: bool,
        origin: Origin,
    ) -> Vec<Declaration>;
}
