//! Conversion dispatch table
//!
//! Which conversions a type gets is decided here, per kind. Directions not
//! listed are intentionally absent: each cross-kind conversion is declared
//! on exactly one of the two types involved.
//!
//! | Kind   | Rounding to Int | Engine vector                | From other kinds                    |
//! |--------|-----------------|------------------------------|-------------------------------------|
//! | Int    | -               | `Vector{D}I`, implicit both  | Float, Double (explicit, `(int)`)   |
//! | Float  | Round/Ceil/Floor| `Vector{D}`, implicit to,    | Double (explicit, `(float)`),       |
//! |        |                 | explicit from                | Int (implicit)                      |
//! | Double | Round/Ceil/Floor| none                         | Float, Int (implicit)               |
//!
//! Engine vectors exist for dimensions 2 to 4 only.

use crate::error::EmitError;
use crate::format::Formatter;
use crate::kind::{NumericKind, VectorType};
use crate::member::Member;
use crate::sequence::COMMA;
use crate::writer::SourceWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    Round,
    Ceil,
    Floor,
}

impl RoundingMode {
    /// Method name prefix, e.g. `Round` in `RoundToInt`.
    pub fn prefix(self) -> &'static str {
        match self {
            RoundingMode::Round => "Round",
            RoundingMode::Ceil => "Ceil",
            RoundingMode::Floor => "Floor",
        }
    }
}

pub const ROUNDING_MODES: [RoundingMode; 3] =
    [RoundingMode::Round, RoundingMode::Ceil, RoundingMode::Floor];

/// One conversion emitted on a vector type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Method returning the integer vector of the same dimension.
    Rounding(RoundingMode),
    /// This type to the engine's vector type.
    ToEngine { engine: String, implicit: bool },
    /// The engine's vector type to this type.
    FromEngine { engine: String, implicit: bool },
    /// Another kind of the same dimension to this type.
    FromKind {
        source: NumericKind,
        implicit: bool,
        cast: bool,
    },
}

/// The engine vector type matching `target`, if the engine has one.
pub fn engine_vector(target: VectorType) -> Option<String> {
    let dim = target.dim.get();
    if dim > 4 {
        return None;
    }
    match target.kind {
        NumericKind::Int => Some(format!("Vector{dim}I")),
        NumericKind::Float => Some(format!("Vector{dim}")),
        NumericKind::Double | NumericKind::Bool => None,
    }
}

/// Every conversion `target` declares, in emission order.
pub fn conversions(target: VectorType) -> Vec<Conversion> {
    let mut table = Vec::new();

    if target.kind.is_floating() {
        table.extend(ROUNDING_MODES.map(Conversion::Rounding));
    }

    if let Some(engine) = engine_vector(target) {
        table.push(Conversion::ToEngine {
            engine: engine.clone(),
            implicit: true,
        });
        table.push(Conversion::FromEngine {
            engine,
            implicit: target.kind == NumericKind::Int,
        });
    }

    let from = |source: NumericKind, implicit: bool| Conversion::FromKind {
        source,
        implicit,
        cast: !implicit,
    };
    match target.kind {
        NumericKind::Int => {
            table.push(from(NumericKind::Float, false));
            table.push(from(NumericKind::Double, false));
        }
        NumericKind::Float => {
            table.push(from(NumericKind::Double, false));
            table.push(from(NumericKind::Int, true));
        }
        NumericKind::Double => {
            table.push(from(NumericKind::Float, true));
            table.push(from(NumericKind::Int, true));
        }
        NumericKind::Bool => {}
    }

    table
}

pub(super) fn write_conversion(
    fmt: &Formatter<'_>,
    w: &mut SourceWriter,
    conversion: &Conversion,
) -> Result<(), EmitError> {
    let type_name = fmt.type_name();
    match conversion {
        Conversion::Rounding(mode) => {
            let int_type = fmt.related(Some(NumericKind::Int), None).name();
            let body = fmt.sequence("Mathf.{MODE}ToInt({L})", COMMA, &[("MODE", mode.prefix())])?;
            Member::method(format!("{}ToInt", mode.prefix()), int_type)
                .body(format!("new({body})"))
                .write(w);
        }
        Conversion::ToEngine { engine, implicit } => {
            Member::conversion(engine, *implicit)
                .args(fmt.format("in {T} {VA}", &[])?)
                .body(format!("new({})", fmt.sequence("{VA}.{L}", COMMA, &[])?))
                .write(w);
        }
        Conversion::FromEngine { engine, implicit } => {
            let single = &fmt.options().arguments.single;
            let fields = fmt
                .dim()
                .components()
                .map(|c| Ok(format!("{single}.{}", c.engine_name()?)))
                .collect::<Result<Vec<_>, EmitError>>()?;
            Member::conversion(type_name, *implicit)
                .args(fmt.format("in {SOURCE} {VA}", &[("SOURCE", engine.as_str())])?)
                .body(format!("new({})", fields.join(COMMA)))
                .write(w);
        }
        Conversion::FromKind {
            source,
            implicit,
            cast,
        } => {
            let source_type = fmt.related(Some(*source), None).name();
            let cast = if *cast {
                format!("({})", fmt.element_type())
            } else {
                String::new()
            };
            Member::conversion(type_name, *implicit)
                .args(fmt.format("in {SOURCE} {VA}", &[("SOURCE", source_type.as_str())])?)
                .body(format!(
                    "new({})",
                    fmt.sequence("{CAST}{VA}.{L}", COMMA, &[("CAST", cast.as_str())])?
                ))
                .write(w);
        }
    }
    Ok(())
}
