//! Generation plans
//!
//! A plan is an ordered list of sections. [`GenerationPlan::render`] writes
//! the file preamble, opens the struct, then writes every section once, in
//! order, each inside its own region.

mod boolean;
mod conversions;
mod numeric;

pub use boolean::BooleanPlan;
pub use conversions::{conversions, engine_vector, Conversion, RoundingMode, ROUNDING_MODES};
pub use numeric::NumericPlan;

use tracing::debug;

use crate::error::EmitError;
use crate::format::Formatter;
use crate::kind::{NumericKind, VectorType};
use crate::member::Member;
use crate::options::EmitOptions;
use crate::sequence::COMMA;
use crate::writer::SourceWriter;

/// One region of a generated struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Properties,
    Swizzles,
    Constructors,
    MathOperators,
    LogicalOperators,
    ObjectOperators,
    Functions,
    Converters,
}

impl Section {
    /// Region marker name.
    pub fn region(self) -> &'static str {
        match self {
            Section::Properties => "PROPERTIES",
            Section::Swizzles => "SWIZZLES",
            Section::Constructors => "CONSTRUCTORS",
            Section::MathOperators => "MATH_OPERATORS",
            Section::LogicalOperators => "LOGICAL_OPERATORS",
            Section::ObjectOperators => "OBJECT_OPERATORS",
            Section::Functions => "FUNCTIONS",
            Section::Converters => "CONVERTERS",
        }
    }
}

pub trait GenerationPlan {
    /// Sections in emission order.
    const SECTIONS: &'static [Section];

    fn formatter(&self) -> &Formatter<'_>;

    fn write_section(&self, section: Section, w: &mut SourceWriter) -> Result<(), EmitError>;

    /// Produce the complete file text.
    fn render(&self) -> Result<String, EmitError> {
        let fmt = self.formatter();
        let options = fmt.options();
        let mut w = SourceWriter::new(options.indent.as_str(), options.newline.as_str());

        write_preamble(&mut w, options);
        w.write(&fmt.format("public struct {T} : IEquatable<{T}>", &[])?);
        w.block("", |w| {
            for &section in Self::SECTIONS {
                debug!(vector_type = %fmt.target(), region = section.region(), "writing section");
                w.region(section.region(), |w| self.write_section(section, w))?;
            }
            Ok(())
        })?;

        w.finish()
    }
}

/// Render the file for `target` with the plan matching its kind.
pub fn generate(target: VectorType, options: &EmitOptions) -> Result<String, EmitError> {
    match target.kind {
        NumericKind::Bool => BooleanPlan::new(target.dim, options).render(),
        _ => NumericPlan::new(target, options)?.render(),
    }
}

fn write_preamble(w: &mut SourceWriter, options: &EmitOptions) {
    if let Some((last, rest)) = options.usings.split_last() {
        for using in rest {
            w.write(&format!("using {using};"));
        }
        w.write_with_newlines(&format!("using {last};"), 2);
    }
    w.write_with_newlines(&format!("namespace {};", options.namespace), 2);
}

/// Broadcast and per-component constructors.
fn write_constructors(fmt: &Formatter<'_>, w: &mut SourceWriter) -> Result<(), EmitError> {
    let broadcast = fmt.sequence("{L} = {NA};", " ", &[])?;
    w.write(&fmt.format("public {T}({NT} {NA}) {{ {BODY} }}", &[("BODY", broadcast.as_str())])?);

    let default = fmt.target().kind.default_literal();
    let params = fmt.sequence("{NT} {L} = {DEFAULT}", COMMA, &[("DEFAULT", default)])?;
    let body = fmt.sequence("this.{L} = {L};", " ", &[])?;
    w.write(&fmt.format(
        "public {T}({PARAMS}) {{ {BODY} }}",
        &[("PARAMS", params.as_str()), ("BODY", body.as_str())],
    )?);
    Ok(())
}

/// `Equals`, `GetHashCode` and `ToString`.
fn write_value_equality(fmt: &Formatter<'_>, w: &mut SourceWriter) -> Result<(), EmitError> {
    Member::method("Equals", "bool")
        .args("object obj")
        .body(fmt.format("obj is {T} {VA} && Equals({VA})", &[])?)
        .overriding()
        .inline()
        .write(w);
    Member::method("Equals", "bool")
        .args(fmt.format("{T} {VA}", &[])?)
        .body(fmt.sequence("{L} == {VA}.{L}", " && ", &[])?)
        .inline()
        .write(w);
    Member::method("GetHashCode", "int")
        .body(format!("HashCode.Combine({})", fmt.names(COMMA)?))
        .overriding()
        .inline()
        .write(w);

    let fields = fmt.sequence("{{{L}}}", COMMA, &[])?;
    Member::method("ToString", "string")
        .body(fmt.format("$\"{T}({FIELDS})\"", &[("FIELDS", fields.as_str())])?)
        .overriding()
        .write(w);
    Ok(())
}
