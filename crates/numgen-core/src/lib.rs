//! Generation engine for numeric vector value types.
//!
//! Produces the C# source of one struct per (kind, dimension) pair:
//! `Int2` .. `Double5` with arithmetic, comparisons, swizzles, equality and
//! conversions, and `Bool2` .. `Bool5` as reduced predicate carriers.
//!
//! # Architecture
//!
//! ```text
//! VectorType ──► generate() ──► NumericPlan / BooleanPlan ──► String
//!                                     │
//!                                     ├── Formatter        ({T}, {NT}, {L} ... placeholders)
//!                                     ├── sequence / names (per-component expansion)
//!                                     ├── Member           (expression-bodied declarations)
//!                                     └── SourceWriter     (indentation + #region bookkeeping)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use numgen_core::{generate, Dimension, EmitOptions, NumericKind, VectorType};
//!
//! let target = VectorType::new(NumericKind::Float, Dimension::new(3)?);
//! let source = generate(target, &EmitOptions::default())?;
//! assert!(source.contains("public struct Float3"));
//! ```

mod error;
mod format;
mod kind;
mod member;
mod options;
mod plan;
mod sequence;
mod writer;

pub use error::EmitError;
pub use format::{render, Formatter, TemplateContext};
pub use kind::{Component, Dimension, NumericKind, VectorType, AXIS_LETTERS, COMPONENT_NAMES};
pub use member::{Member, HIDDEN_HINT, INLINE_HINT};
pub use options::{ArgumentNames, ComparisonMask, EmitOptions};
pub use plan::{
    conversions, engine_vector, generate, BooleanPlan, Conversion, GenerationPlan, NumericPlan,
    RoundingMode, Section, ROUNDING_MODES,
};
pub use sequence::COMMA;
pub use writer::SourceWriter;
