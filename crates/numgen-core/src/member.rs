//! Expression-bodied member declarations.

use crate::error::EmitError;
use crate::writer::SourceWriter;

/// Attribute asking the JIT to inline a member.
pub const INLINE_HINT: &str = "[MethodImpl(MethodImplOptions.AggressiveInlining)]";

/// Attribute hiding a member from the debugger's variable view.
pub const HIDDEN_HINT: &str = "[DebuggerBrowsable(DebuggerBrowsableState.Never)]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Method,
    Property,
}

/// One `public ... => body;` member.
#[derive(Debug, Clone)]
pub struct Member {
    shape: Shape,
    name: String,
    returns: String,
    args: String,
    body: String,
    is_static: bool,
    is_override: bool,
    readonly: bool,
    inline: bool,
}

impl Member {
    /// Readonly instance method.
    pub fn method(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            shape: Shape::Method,
            name: name.into(),
            returns: returns.into(),
            args: String::new(),
            body: String::new(),
            is_static: false,
            is_override: false,
            readonly: true,
            inline: false,
        }
    }

    /// Readonly computed property.
    pub fn property(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            shape: Shape::Property,
            ..Self::method(name, returns)
        }
    }

    /// Static operator overload, e.g. `operator +`.
    pub fn operator(symbol: &str, returns: impl Into<String>) -> Self {
        Self {
            is_static: true,
            readonly: false,
            ..Self::method(format!("operator {symbol}"), returns)
        }
    }

    /// User-defined conversion to `target`.
    pub fn conversion(target: &str, implicit: bool) -> Self {
        let keyword = if implicit { "implicit" } else { "explicit" };
        Self::operator(target, keyword)
    }

    pub fn args(mut self, args: impl Into<String>) -> Self {
        self.args = args.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }

    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Declaration up to, not including, the `=>`.
    pub fn signature(&self) -> String {
        let mut sig = String::from("public ");
        if self.is_static {
            sig.push_str("static ");
        }
        if self.is_override {
            sig.push_str("override ");
        }
        if self.readonly {
            sig.push_str("readonly ");
        }
        sig.push_str(&self.returns);
        sig.push(' ');
        sig.push_str(&self.name);
        if self.shape == Shape::Method {
            sig.push('(');
            sig.push_str(&self.args);
            sig.push(')');
        }
        sig
    }

    /// The full single-line declaration.
    pub fn line(&self) -> String {
        format!("{} => {};", self.signature(), self.body)
    }

    pub fn write(&self, w: &mut SourceWriter) {
        if self.inline {
            w.write(INLINE_HINT);
        }
        w.write(&self.line());
    }

    /// Write the member with its body as a call spread over several lines.
    ///
    /// The body set with [`Member::body`] is the opening (`new(`); each item
    /// gets its own line, one level deeper, and the last one closes the call.
    pub fn write_spread(&self, w: &mut SourceWriter, items: &[String]) -> Result<(), EmitError> {
        if self.inline {
            w.write(INLINE_HINT);
        }
        w.write(&format!("{} => {}", self.signature(), self.body));
        w.indented(|w| {
            for (i, item) in items.iter().enumerate() {
                let terminator = if i + 1 < items.len() { "," } else { ");" };
                w.write(&format!("{item}{terminator}"));
            }
            Ok(())
        })
    }
}
