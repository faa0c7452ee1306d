//! Plan for the Int, Float and Double vector types.

use crate::error::EmitError;
use crate::format::Formatter;
use crate::kind::{Dimension, VectorType};
use crate::member::{Member, HIDDEN_HINT};
use crate::options::EmitOptions;
use crate::sequence::COMMA;
use crate::writer::SourceWriter;

use super::conversions::{conversions, write_conversion};
use super::{write_constructors, write_value_equality, GenerationPlan, Section};

/// Named constants. Only the first two components are set, whatever the
/// dimension; the remaining ones keep the constructor default.
const NAMED_CONSTANTS: [(&str, i32, i32); 6] = [
    ("Zero", 0, 0),
    ("One", 1, 1),
    ("Up", 0, 1),
    ("Down", 0, -1),
    ("Left", -1, 0),
    ("Right", 1, 0),
];

/// Sub-vector sizes that get a swizzle indexer.
const SWIZZLE_SIZES: [usize; 3] = [2, 3, 4];

const ARITHMETIC_OPERATORS: [&str; 5] = ["+", "-", "*", "/", "%"];

const COMPARISON_OPERATORS: [&str; 6] = [">", ">=", "<", "<=", "==", "!="];

#[derive(Debug, Clone)]
pub struct NumericPlan<'o> {
    fmt: Formatter<'o>,
}

impl<'o> NumericPlan<'o> {
    pub fn new(target: VectorType, options: &'o EmitOptions) -> Result<Self, EmitError> {
        if !target.kind.is_numeric() {
            return Err(EmitError::UnsupportedKind {
                kind: target.kind.element_type(),
                operation: "the numeric plan",
            });
        }
        Ok(Self {
            fmt: Formatter::new(target, options),
        })
    }

    fn write_properties(&self, w: &mut SourceWriter) -> Result<(), EmitError> {
        for (name, x, y) in NAMED_CONSTANTS {
            let (x, y) = (x.to_string(), y.to_string());
            w.write(&self.fmt.format(
                "public static readonly {T} {NAME} = new({X}, {Y});",
                &[("NAME", name), ("X", x.as_str()), ("Y", y.as_str())],
            )?);
        }
        let fields = self.fmt.names(COMMA)?;
        w.write(&self.fmt.format("public {NT} {FIELDS};", &[("FIELDS", fields.as_str())])?);
        Ok(())
    }

    fn write_swizzles(&self, w: &mut SourceWriter) -> Result<(), EmitError> {
        let dim = self.fmt.dim();
        let guard = format!(
            "throw new ArgumentOutOfRangeException(nameof(ix), ix, \"{} component index must be in [0, {}]\")",
            self.fmt.type_name(),
            dim.get() - 1
        );

        w.write(HIDDEN_HINT);
        w.write(&self.fmt.format("public {NT} this[int ix]", &[])?);
        w.block("", |w| {
            w.write("readonly get");
            w.block("", |w| {
                w.write("return ix switch");
                w.block(";", |w| {
                    for c in dim.components() {
                        w.write(&format!("{} => {},", c.index(), c.name()));
                    }
                    w.write(&format!("_ => {guard}"));
                    Ok(())
                })
            })?;
            w.write("set");
            w.block("", |w| {
                w.write("switch (ix)");
                w.block("", |w| {
                    for c in dim.components() {
                        w.write(&format!("case {}: {} = value; break;", c.index(), c.name()));
                    }
                    w.write(&format!("default: {guard};"));
                    Ok(())
                })
            })
        })?;

        for size in SWIZZLE_SIZES {
            self.write_swizzle(w, size)?;
        }
        Ok(())
    }

    /// Indexer reading (and, when it fits, writing) a `size`-component
    /// sub-vector at arbitrary component positions.
    fn write_swizzle(&self, w: &mut SourceWriter, size: usize) -> Result<(), EmitError> {
        let sub = self.fmt.related(None, Some(Dimension::new(size)?)).name();
        let params = self.fmt.sequence_n("int i{L}", COMMA, size, &[])?;
        let getter = self.fmt.sequence_n("this[i{L}]", COMMA, size, &[])?;

        w.write(HIDDEN_HINT);
        if size <= self.fmt.dim().get() {
            let setter = self.fmt.sequence_n("this[i{L}] = value.{L};", " ", size, &[])?;
            w.write(&format!("public {sub} this[{params}]"));
            w.block("", |w| {
                w.write(&format!("readonly get => new({getter});"));
                w.write(&format!("set {{ {setter} }}"));
                Ok(())
            })
        } else {
            // Getter only: the extra components have nowhere to be stored.
            w.write(&format!("public readonly {sub} this[{params}] => new({getter});"));
            Ok(())
        }
    }

    fn write_math_operators(&self, w: &mut SourceWriter) -> Result<(), EmitError> {
        let fmt = &self.fmt;
        let type_name = fmt.type_name();

        for op in ARITHMETIC_OPERATORS {
            let body = fmt.sequence("{VA1}.{L} {S} {VA2}.{L}", COMMA, &[("S", op)])?;
            Member::operator(op, type_name)
                .args(fmt.format("in {T} {VA1}, in {T} {VA2}", &[])?)
                .body(format!("new({body})"))
                .inline()
                .write(w);
        }
        for op in ARITHMETIC_OPERATORS {
            let body = fmt.sequence("{VA}.{L} {S} {NA}", COMMA, &[("S", op)])?;
            Member::operator(op, type_name)
                .args(fmt.format("in {T} {VA}, {NT} {NA}", &[])?)
                .body(format!("new({body})"))
                .inline()
                .write(w);
        }
        Member::operator("-", type_name)
            .args(fmt.format("in {T} {VA}", &[])?)
            .body(format!("new({})", fmt.sequence("-{VA}.{L}", COMMA, &[])?))
            .inline()
            .write(w);
        Ok(())
    }

    /// Comparisons build the mask type, so only as many components as the
    /// mask holds are compared. Missing mask components take the constructor
    /// default.
    fn write_logical_operators(&self, w: &mut SourceWriter) -> Result<(), EmitError> {
        let fmt = &self.fmt;
        let mask = fmt.options().comparison_mask.mask_type(fmt.target());
        let compared = fmt.dim().get().min(mask.dim.get());
        let mask = mask.name();
        for op in COMPARISON_OPERATORS {
            let body = fmt.sequence_n("{VA1}.{L} {S} {VA2}.{L}", COMMA, compared, &[("S", op)])?;
            Member::operator(op, mask.as_str())
                .args(fmt.format("in {T} {VA1}, in {T} {VA2}", &[])?)
                .body(format!("new({body})"))
                .inline()
                .write(w);
        }
        Ok(())
    }

    fn write_functions(&self, w: &mut SourceWriter) -> Result<(), EmitError> {
        let fmt = &self.fmt;
        let element = fmt.element_type();
        let type_name = fmt.type_name();
        let sqrt = fmt.target().kind.sqrt_function()?;

        Member::method("SqrMagnitude", element)
            .body(fmt.sequence("{L} * {L}", " + ", &[])?)
            .inline()
            .write(w);
        Member::method("Magnitude", element)
            .body(format!("{sqrt}(SqrMagnitude())"))
            .inline()
            .write(w);
        Member::method("Normalized", type_name)
            .body("this / Magnitude()")
            .inline()
            .write(w);
        Member::method("Abs", type_name)
            .body(format!("new({})", fmt.sequence("Mathf.Abs({L})", COMMA, &[])?))
            .inline()
            .write(w);
        Member::method("MinValue", element)
            .body(fmt.nested_call("Mathf.Min")?)
            .inline()
            .write(w);
        Member::method("MaxValue", element)
            .body(fmt.nested_call("Mathf.Max")?)
            .inline()
            .write(w);
        Member::method("SqrDistance", element)
            .args(fmt.format("in {T} other", &[])?)
            .body("(other - this).SqrMagnitude()")
            .inline()
            .write(w);
        Member::method("Distance", element)
            .args(fmt.format("in {T} {VA}", &[])?)
            .body(fmt.format("{SQRT}(SqrDistance({VA}))", &[("SQRT", sqrt)])?)
            .inline()
            .write(w);

        let single = fmt.format("in {T} {VA}", &[])?;
        self.write_componentwise(w, "Min", &single, "Mathf.Min({L}, {VA}.{L})")?;
        self.write_componentwise(w, "Max", &single, "Mathf.Max({L}, {VA}.{L})")?;
        self.write_componentwise(
            w,
            "Clamp",
            &fmt.format("in {T} min, in {T} max", &[])?,
            "Mathf.Clamp({L}, min.{L}, max.{L})",
        )
    }

    /// A method building a new vector with one line per component.
    fn write_componentwise(
        &self,
        w: &mut SourceWriter,
        name: &str,
        args: &str,
        piece: &str,
    ) -> Result<(), EmitError> {
        let items = self
            .fmt
            .dim()
            .components()
            .map(|c| self.fmt.format_at(piece, c, &[]))
            .collect::<Result<Vec<_>, _>>()?;
        Member::method(name, self.fmt.type_name())
            .args(args)
            .body("new(")
            .inline()
            .write_spread(w, &items)
    }

    fn write_converters(&self, w: &mut SourceWriter) -> Result<(), EmitError> {
        for conversion in conversions(self.fmt.target()) {
            write_conversion(&self.fmt, w, &conversion)?;
        }
        Ok(())
    }
}

impl GenerationPlan for NumericPlan<'_> {
    const SECTIONS: &'static [Section] = &[
        Section::Properties,
        Section::Swizzles,
        Section::Constructors,
        Section::MathOperators,
        Section::LogicalOperators,
        Section::ObjectOperators,
        Section::Functions,
        Section::Converters,
    ];

    fn formatter(&self) -> &Formatter<'_> {
        &self.fmt
    }

    fn write_section(&self, section: Section, w: &mut SourceWriter) -> Result<(), EmitError> {
        match section {
            Section::Properties => self.write_properties(w),
            Section::Swizzles => self.write_swizzles(w),
            Section::Constructors => write_constructors(&self.fmt, w),
            Section::MathOperators => self.write_math_operators(w),
            Section::LogicalOperators => self.write_logical_operators(w),
            Section::ObjectOperators => write_value_equality(&self.fmt, w),
            Section::Functions => self.write_functions(w),
            Section::Converters => self.write_converters(w),
        }
    }
}
