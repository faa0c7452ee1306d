//! Sequence Expander
//!
//! Repeats a per-component template once per component, in ascending
//! component order, and joins the pieces. Parameter lists, initializers,
//! per-axis expressions, equality conjunctions and hash argument lists are
//! all built this way.

use crate::error::EmitError;
use crate::format::Formatter;
use crate::kind::Component;

/// Default separator for argument and parameter lists.
pub const COMMA: &str = ", ";

impl Formatter<'_> {
    /// Expand `template` once per component of the plan's own dimension.
    pub fn sequence(
        &self,
        template: &str,
        separator: &str,
        overrides: &[(&str, &str)],
    ) -> Result<String, EmitError> {
        self.sequence_n(template, separator, self.dim().get(), overrides)
    }

    /// Expand `template` for the first `count` components.
    ///
    /// `count` may differ from the plan's dimension, e.g. when a type
    /// refers to a smaller or larger sub-vector.
    pub fn sequence_n(
        &self,
        template: &str,
        separator: &str,
        count: usize,
        overrides: &[(&str, &str)],
    ) -> Result<String, EmitError> {
        let pieces = (0..count)
            .map(|index| {
                let component = Component::new(index)?;
                self.format_at(template, component, overrides)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(pieces.join(separator))
    }

    /// Component names joined by `separator`.
    pub fn names(&self, separator: &str) -> Result<String, EmitError> {
        self.sequence("{L}", separator, &[])
    }

    /// Fold a binary function over the components: `f(x, f(y, z))`.
    ///
    /// The first component is the outermost argument.
    pub fn nested_call(&self, function: &str) -> Result<String, EmitError> {
        let mut components = self.dim().components().rev();
        let last = components
            .next()
            .ok_or(EmitError::ComponentOutOfRange(0))?;
        Ok(components.fold(last.name().to_string(), |inner, component| {
            format!("{function}({}, {inner})", component.name())
        }))
    }
}
