// CSS2 "margin" shorthand expansion
use std::sync::Arc;

use lazy_static::lazy_static;
use tracing::{trace, warn};

use super::PropertyDeclarationFactory;
use crate::css::{CssValue, Declaration, Origin, PropertyName, ShorthandConfig};

lazy_static! {
    /// Replacement for `auto`, which margins don't support yet
    static ref ZERO_MARGIN: Arc<CssValue> = Arc::new(CssValue::Zero);

    static ref INSTANCE: ShorthandMarginExpander = ShorthandMarginExpander::default();
}

/// The shared zero placeholder. Every call returns the same allocation.
pub fn zero_margin() -> Arc<CssValue> {
    Arc::clone(&ZERO_MARGIN)
}

// TODO: drop once layout resolves auto margins
/// If the margin is `auto`, replace it with the zero placeholder; otherwise
/// hand back the same value.
pub fn substitute_auto(margin: &Arc<CssValue>) -> Arc<CssValue> {
    if margin.is_auto() {
        zero_margin()
    } else {
        Arc::clone(margin)
    }
}

/// Pair each longhand with its value for the given value count.
///
/// 1: all four sides; 2: vertical, horizontal; 3: top, horizontal, bottom;
/// 4: top, right, bottom, left. Each input is substituted once before it is
/// shared between sides. The emission order of the 2 and 3 value forms is not
/// clockwise and must stay that way.
fn margin_sides(values: &[Arc<CssValue>]) -> Option<[(PropertyName, Arc<CssValue>); 4]> {
    let sides = match values {
        [all] => {
            let all = substitute_auto(all);
            [
                (PropertyName::MarginTop, all.clone()),
                (PropertyName::MarginRight, all.clone()),
                (PropertyName::MarginBottom, all.clone()),
                (PropertyName::MarginLeft, all),
            ]
        }
        [vertical, horizontal] => {
            let vertical = substitute_auto(vertical);
            let horizontal = substitute_auto(horizontal);
            [
                (PropertyName::MarginTop, vertical.clone()),
                (PropertyName::MarginBottom, vertical),
                (PropertyName::MarginRight, horizontal.clone()),
                (PropertyName::MarginLeft, horizontal),
            ]
        }
        [top, horizontal, bottom] => {
            let horizontal = substitute_auto(horizontal);
            [
                (PropertyName::MarginTop, substitute_auto(top)),
                (PropertyName::MarginRight, horizontal.clone()),
                (PropertyName::MarginLeft, horizontal),
                (PropertyName::MarginBottom, substitute_auto(bottom)),
            ]
        }
        [top, right, bottom, left] => [
            (PropertyName::MarginTop, substitute_auto(top)),
            (PropertyName::MarginRight, substitute_auto(right)),
            (PropertyName::MarginBottom, substitute_auto(bottom)),
            (PropertyName::MarginLeft, substitute_auto(left)),
        ],
        _ => return None,
    };
    Some(sides)
}

/// Expands `margin` into `margin-top`, `margin-right`, `margin-bottom` and
/// `margin-left`
#[derive(Clone, Debug, Default)]
pub struct ShorthandMarginExpander {
    config: ShorthandConfig,
}

impl ShorthandMarginExpander {
    pub fn new(config: ShorthandConfig) -> Self {
        Self { config }
    }

    /// Process-wide expander using the default configuration
    pub fn instance() -> &'static ShorthandMarginExpander {
        &INSTANCE
    }

    pub fn config(&self) -> &ShorthandConfig {
        &self.config
    }

    /// Expand 1-4 margin values into four longhand declarations.
    /// Any other number of values yields no declarations.
    pub fn expand(&self, values: &[Arc<CssValue>], important: bool, origin: Origin) -> Vec<Declaration> {
        self.expand_with(values, important, origin, Declaration::with_origin)
    }

    /// Like [`expand`](Self::expand), building each declaration with `build`
    pub fn expand_with<D, F>(
        &self,
        values: &[Arc<CssValue>],
        important: bool,
        origin: Origin,
        mut build: F,
    ) -> Vec<D>
    where
        F: FnMut(PropertyName, Arc<CssValue>, bool, Origin) -> D,
    {
        let Some(sides) = margin_sides(values) else {
            if self.config.warn_on_invalid_arity {
                warn!("margin takes 1 to 4 values, got {}; declaration dropped", values.len());
            }
            return Vec::new();
        };

        trace!("expanding margin with {} value(s), origin {}", values.len(), origin);
        sides
            .into_iter()
            .map(|(property, value)| build(property, value, important, origin))
            .collect()
    }

    /// Expand a single, possibly space-separated, margin value
    pub fn build_declarations_from_value(
        &self,
        value: &Arc<CssValue>,
        important: bool,
        origin: Origin,
    ) -> Vec<Declaration> {
        match value.as_ref() {
            CssValue::MultipleValues(parts) => {
                let parts: Vec<Arc<CssValue>> = parts.iter().cloned().map(Arc::new).collect();
                self.expand(&parts, important, origin)
            }
            _ => self.expand(std::slice::from_ref(value), important, origin),
        }
    }
}

impl PropertyDeclarationFactory for ShorthandMarginExpander {
    fn shorthand(&self) -> PropertyName {
        PropertyName::Margin
    }

    fn do_build_declarations(
        &self,
        values: &[Arc<CssValue>],
        important: bool,
        origin: Origin,
    ) -> Vec<Declaration> {
        self.expand(values, important, origin)
    }
}

/// Expand the `margin` shorthand with the shared expander
pub fn expand_margin(values: &[Arc<CssValue>], important: bool, origin: Origin) -> Vec<Declaration> {
    ShorthandMarginExpander::instance().expand(values, important, origin)
}
