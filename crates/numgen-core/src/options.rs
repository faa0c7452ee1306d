//! Emission options.

use serde::{Deserialize, Serialize};

use crate::kind::{Dimension, VectorType};

/// Conventional argument names used by generated members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgumentNames {
    /// First operand of binary operators (`{VA1}`).
    pub first: String,
    /// Second operand of binary operators (`{VA2}`).
    pub second: String,
    /// Single vector argument (`{VA}`).
    pub single: String,
    /// Scalar argument (`{NA}`).
    pub scalar: String,
}

impl Default for ArgumentNames {
    fn default() -> Self {
        Self {
            first: "v1".to_string(),
            second: "v2".to_string(),
            single: "v".to_string(),
            scalar: "n".to_string(),
        }
    }
}

impl ArgumentNames {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [&self.first, &self.second, &self.single, &self.scalar]
            .into_iter()
            .map(String::as_str)
    }
}

/// Dimension of the boolean vector returned by comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMask {
    /// Always the three-component boolean vector.
    #[default]
    Fixed3,
    /// Boolean vector with the operand's own dimension.
    Operand,
}

impl ComparisonMask {
    /// Boolean vector type returned when comparing two `operand` values.
    pub fn mask_type(self, operand: VectorType) -> VectorType {
        let mask = operand.with_kind(crate::kind::NumericKind::Bool);
        match self {
            ComparisonMask::Fixed3 => mask.with_dim(Dimension::ALL[1]),
            ComparisonMask::Operand => mask,
        }
    }
}

/// Options controlling the text of every emitted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// File-scoped namespace declared by every file.
    pub namespace: String,
    /// `using` directives at the top of every file.
    pub usings: Vec<String>,
    /// One indentation level.
    pub indent: String,
    /// Line terminator.
    pub newline: String,
    pub arguments: ArgumentNames,
    pub comparison_mask: ComparisonMask,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            namespace: "Support.Numerics".to_string(),
            usings: vec![
                "Godot".to_string(),
                "System".to_string(),
                "System.Diagnostics".to_string(),
                "System.Runtime.CompilerServices".to_string(),
            ],
            indent: "    ".to_string(),
            newline: "\n".to_string(),
            arguments: ArgumentNames::default(),
            comparison_mask: ComparisonMask::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::NumericKind;

    #[test]
    fn fixed_mask_ignores_operand_dimension() {
        let int4 = VectorType::new(NumericKind::Int, Dimension::new(4).unwrap());
        assert_eq!(ComparisonMask::Fixed3.mask_type(int4).name(), "Bool3");
        assert_eq!(ComparisonMask::Operand.mask_type(int4).name(), "Bool4");
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let options: EmitOptions = serde_yaml::from_str(
            r#"
namespace: Game.Math
comparison_mask: operand
arguments:
  scalar: s
"#,
        )
        .unwrap();

        assert_eq!(options.namespace, "Game.Math");
        assert_eq!(options.comparison_mask, ComparisonMask::Operand);
        assert_eq!(options.arguments.scalar, "s");
        assert_eq!(options.arguments.first, "v1");
        assert_eq!(options.indent, "    ");
        assert_eq!(options.usings.len(), 4);
    }
}
