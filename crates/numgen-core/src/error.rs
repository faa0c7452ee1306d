//! Generation error types.

use thiserror::Error;

/// Contract violations detected while generating source.
///
/// Every variant indicates a bug in a generation plan or an invalid
/// descriptor, never bad user input. Callers are expected to abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// A `{NAME}` placeholder had no binding.
    #[error("unresolved placeholder `{name}` in template: {template}")]
    UnresolvedPlaceholder { name: String, template: String },

    /// Unterminated `{` or stray `}` in a template.
    #[error("malformed template at byte {position}: {template}")]
    MalformedTemplate { template: String, position: usize },

    /// Dimension outside the supported range.
    #[error("dimension {0} is outside the supported range 2..=5")]
    DimensionOutOfRange(usize),

    /// Component index beyond the last named component.
    #[error("component index {0} has no name")]
    ComponentOutOfRange(usize),

    /// Unindent requested at depth zero.
    #[error("unindent below depth zero")]
    IndentUnderflow,

    /// Blocks still open when the buffer was finalized.
    #[error("unbalanced indentation: {0} level(s) left open")]
    UnbalancedIndent(usize),

    /// A region was opened while another one is still open.
    #[error("region `{requested}` opened while `{open}` is still open")]
    NestedRegion { open: String, requested: String },

    /// A region was closed, or the buffer finalized, in the wrong state.
    #[error("no region is open")]
    NoOpenRegion,

    /// Region left open when the buffer was finalized.
    #[error("region `{0}` was never closed")]
    UnclosedRegion(String),

    /// The operation is undefined for the kind.
    #[error("{operation} is not defined for kind {kind}")]
    UnsupportedKind {
        kind: &'static str,
        operation: &'static str,
    },
}

impl EmitError {
    /// Check if this error concerns template text rather than writer state.
    pub fn is_template_error(&self) -> bool {
        matches!(
            self,
            EmitError::UnresolvedPlaceholder { .. } | EmitError::MalformedTemplate { .. }
        )
    }
}
