//! Vector type descriptors
//!
//! A generated type is identified by its element kind and its dimension.
//! Kind-specific behaviour is keyed on the [`NumericKind`] variant rather
//! than on positions in a list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EmitError;

/// Element category of a vector type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    Int,
    Float,
    Double,
    Bool,
}

impl NumericKind {
    /// Kinds that get the full numeric plan, in generation order.
    pub const NUMERIC: [NumericKind; 3] =
        [NumericKind::Int, NumericKind::Float, NumericKind::Double];

    pub const ALL: [NumericKind; 4] = [
        NumericKind::Int,
        NumericKind::Float,
        NumericKind::Double,
        NumericKind::Bool,
    ];

    /// Lowercase element type name (`int`, `float`, ...).
    pub fn element_type(self) -> &'static str {
        match self {
            NumericKind::Int => "int",
            NumericKind::Float => "float",
            NumericKind::Double => "double",
            NumericKind::Bool => "bool",
        }
    }

    /// Capitalized fragment used to build composite type names.
    pub fn type_fragment(self) -> &'static str {
        match self {
            NumericKind::Int => "Int",
            NumericKind::Float => "Float",
            NumericKind::Double => "Double",
            NumericKind::Bool => "Bool",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, NumericKind::Bool)
    }

    pub fn is_floating(self) -> bool {
        matches!(self, NumericKind::Float | NumericKind::Double)
    }

    /// Literal used as the default constructor argument.
    pub fn default_literal(self) -> &'static str {
        match self {
            NumericKind::Bool => "false",
            _ => "0",
        }
    }

    /// Square root routine used by `Magnitude` and `Distance`.
    pub fn sqrt_function(self) -> Result<&'static str, EmitError> {
        match self {
            NumericKind::Int => Ok("Toolbox.ISqrt"),
            NumericKind::Float | NumericKind::Double => Ok("Mathf.Sqrt"),
            NumericKind::Bool => Err(EmitError::UnsupportedKind {
                kind: self.element_type(),
                operation: "square root",
            }),
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_type())
    }
}

/// Field names by component position. Only the first four are axis letters.
pub const COMPONENT_NAMES: [&str; 5] = ["x", "y", "z", "w", "c4"];

/// Number of components that have an axis letter.
pub const AXIS_LETTERS: usize = 4;

/// One component position of a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Component(usize);

impl Component {
    pub fn new(index: usize) -> Result<Self, EmitError> {
        if index < COMPONENT_NAMES.len() {
            Ok(Self(index))
        } else {
            Err(EmitError::ComponentOutOfRange(index))
        }
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Field name in the generated struct.
    pub fn name(self) -> &'static str {
        COMPONENT_NAMES[self.0]
    }

    /// Axis letter, if this position has one.
    pub fn letter(self) -> Option<char> {
        if self.0 < AXIS_LETTERS {
            self.name().chars().next()
        } else {
            None
        }
    }

    /// Field name as spelled by the engine's own vector types (`X`, `Y`, ...).
    pub fn engine_name(self) -> Result<String, EmitError> {
        self.letter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .ok_or(EmitError::ComponentOutOfRange(self.0))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Component count of a vector type, always in `2..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Dimension(usize);

impl Dimension {
    pub const MIN: usize = 2;
    pub const MAX: usize = 5;

    pub const ALL: [Dimension; 4] = [Dimension(2), Dimension(3), Dimension(4), Dimension(5)];

    pub fn new(size: usize) -> Result<Self, EmitError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(EmitError::DimensionOutOfRange(size))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Components in ascending order.
    pub fn components(self) -> impl DoubleEndedIterator<Item = Component> + ExactSizeIterator {
        (0..self.0).map(Component)
    }
}

impl TryFrom<usize> for Dimension {
    type Error = EmitError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Dimension::new(size)
    }
}

impl From<Dimension> for usize {
    fn from(dim: Dimension) -> usize {
        dim.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// (kind, dimension) pair naming exactly one generated type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VectorType {
    pub kind: NumericKind,
    pub dim: Dimension,
}

impl VectorType {
    pub fn new(kind: NumericKind, dim: Dimension) -> Self {
        Self { kind, dim }
    }

    /// Canonical type name, e.g. `Float3`.
    pub fn name(self) -> String {
        format!("{}{}", self.kind.type_fragment(), self.dim)
    }

    pub fn with_kind(self, kind: NumericKind) -> Self {
        Self { kind, ..self }
    }

    pub fn with_dim(self, dim: Dimension) -> Self {
        Self { dim, ..self }
    }

    /// Every type the driver generates, in driver order.
    pub fn all() -> Vec<VectorType> {
        // NumericKind::ALL lists the numeric kinds first, then Bool.
        Dimension::ALL
            .into_iter()
            .flat_map(|dim| {
                NumericKind::ALL
                    .into_iter()
                    .map(move |kind| VectorType::new(kind, dim))
            })
            .collect()
    }
}

impl fmt::Display for VectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.type_fragment(), self.dim)
    }
}
