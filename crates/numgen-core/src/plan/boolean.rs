//! Plan for the Bool vector types.
//!
//! Boolean vectors only carry predicate results: fields, four derived
//! properties, the constructors and value equality. No arithmetic, no
//! swizzles, no conversions.

use crate::error::EmitError;
use crate::format::Formatter;
use crate::kind::{Dimension, NumericKind, VectorType};
use crate::member::Member;
use crate::options::EmitOptions;
use crate::sequence::COMMA;
use crate::writer::SourceWriter;

use super::{write_constructors, write_value_equality, GenerationPlan, Section};

#[derive(Debug, Clone)]
pub struct BooleanPlan<'o> {
    fmt: Formatter<'o>,
}

impl<'o> BooleanPlan<'o> {
    pub fn new(dim: Dimension, options: &'o EmitOptions) -> Self {
        Self {
            fmt: Formatter::new(VectorType::new(NumericKind::Bool, dim), options),
        }
    }

    fn write_properties(&self, w: &mut SourceWriter) -> Result<(), EmitError> {
        let fmt = &self.fmt;
        let fields = fmt.names(COMMA)?;
        w.write(&fmt.format("public {NT} {FIELDS};", &[("FIELDS", fields.as_str())])?);

        Member::property("AllTrue", "bool")
            .body(fmt.names(" && ")?)
            .write(w);
        Member::property("AnyTrue", "bool")
            .body(fmt.names(" || ")?)
            .write(w);

        // Adjacent pairs: x == y && y == z && ...
        let names: Vec<_> = fmt.dim().components().map(|c| c.name()).collect();
        let all_equal = names
            .windows(2)
            .map(|pair| format!("{} == {}", pair[0], pair[1]))
            .collect::<Vec<_>>()
            .join(" && ");
        Member::property("AllEqual", "bool").body(all_equal).write(w);

        Member::property("TrueCount", "int")
            .body(fmt.sequence("({L} ? 1 : 0)", " + ", &[])?)
            .write(w);
        Ok(())
    }

    fn write_logical_operators(&self, w: &mut SourceWriter) -> Result<(), EmitError> {
        let fmt = &self.fmt;
        let args = fmt.format("in {T} {VA1}, in {T} {VA2}", &[])?;
        Member::operator("==", "bool")
            .args(args.as_str())
            .body(fmt.sequence("{VA1}.{L} == {VA2}.{L}", " && ", &[])?)
            .inline()
            .write(w);
        Member::operator("!=", "bool")
            .args(args)
            .body(fmt.sequence("{VA1}.{L} != {VA2}.{L}", " || ", &[])?)
            .inline()
            .write(w);
        Ok(())
    }
}

impl GenerationPlan for BooleanPlan<'_> {
    const SECTIONS: &'static [Section] = &[
        Section::Properties,
        Section::Constructors,
        Section::LogicalOperators,
        Section::ObjectOperators,
    ];

    fn formatter(&self) -> &Formatter<'_> {
        &self.fmt
    }

    fn write_section(&self, section: Section, w: &mut SourceWriter) -> Result<(), EmitError> {
        match section {
            Section::Properties => self.write_properties(w),
            Section::Constructors => write_constructors(&self.fmt, w),
            Section::LogicalOperators => self.write_logical_operators(w),
            Section::ObjectOperators => write_value_equality(&self.fmt, w),
            other => Err(EmitError::UnsupportedKind {
                kind: NumericKind::Bool.element_type(),
                operation: other.region(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(dim: usize) -> String {
        let options = EmitOptions::default();
        BooleanPlan::new(Dimension::new(dim).unwrap(), &options)
            .render()
            .unwrap()
    }

    #[test]
    fn derived_properties() {
        let text = render(3);
        assert!(text.contains("public bool x, y, z;"));
        assert!(text.contains("public readonly bool AllTrue => x && y && z;"));
        assert!(text.contains("public readonly bool AnyTrue => x || y || z;"));
        assert!(text.contains("public readonly bool AllEqual => x == y && y == z;"));
        assert!(text.contains("public readonly int TrueCount => (x ? 1 : 0) + (y ? 1 : 0) + (z ? 1 : 0);"));
    }

    #[test]
    fn equality_operators() {
        let text = render(2);
        assert!(text.contains(
            "public static bool operator ==(in Bool2 v1, in Bool2 v2) => v1.x == v2.x && v1.y == v2.y;"
        ));
        assert!(text.contains(
            "public static bool operator !=(in Bool2 v1, in Bool2 v2) => v1.x != v2.x || v1.y != v2.y;"
        ));
    }

    #[test]
    fn only_predicate_sections_are_written() {
        let text = render(5);
        let regions: Vec<_> = text
            .lines()
            .filter_map(|l| l.trim().strip_prefix("#region "))
            .collect();
        assert_eq!(
            regions,
            vec!["PROPERTIES", "CONSTRUCTORS", "LOGICAL_OPERATORS", "OBJECT_OPERATORS"]
        );
        assert!(!text.contains("operator +"));
        assert!(!text.contains("this[int ix]"));
        assert!(!text.contains("implicit operator"));
        assert!(text.contains("public readonly bool AllEqual => x == y && y == z && z == w && w == c4;"));
    }

    #[test]
    fn unsupported_section_is_an_error() {
        let options = EmitOptions::default();
        let plan = BooleanPlan::new(Dimension::new(2).unwrap(), &options);
        let mut w = SourceWriter::default();
        assert!(matches!(
            plan.write_section(Section::Swizzles, &mut w),
            Err(EmitError::UnsupportedKind { .. })
        ));
    }
}
