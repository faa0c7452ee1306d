//! Source Writer
//!
//! Accumulates indented lines for one generated file. Indentation is
//! tracked as a depth counter; regions are `#region`/`#endregion` marker
//! pairs and at most one can be open at a time.
//!
//! Prefer the scoped helpers ([`SourceWriter::block`],
//! [`SourceWriter::indented`], [`SourceWriter::region`]): they restore the
//! depth and close the region on every path out of the closure.

use tracing::trace;

use crate::error::EmitError;

#[derive(Debug, Clone)]
pub struct SourceWriter {
    buffer: String,
    depth: usize,
    indent_unit: String,
    newline: String,
    region: Option<String>,
}

impl SourceWriter {
    pub fn new(indent_unit: impl Into<String>, newline: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            indent_unit: indent_unit.into(),
            newline: newline.into(),
            region: None,
        }
    }

    /// Append one indented line.
    pub fn write(&mut self, line: &str) {
        self.write_with_newlines(line, 1);
    }

    /// Append one indented line followed by `newlines` line terminators.
    pub fn write_with_newlines(&mut self, line: &str, newlines: usize) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.indent_unit);
        }
        self.buffer.push_str(line);
        for _ in 0..newlines {
            self.buffer.push_str(&self.newline);
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn unindent(&mut self) -> Result<(), EmitError> {
        self.depth = self.depth.checked_sub(1).ok_or(EmitError::IndentUnderflow)?;
        Ok(())
    }

    /// Run `body` one level deeper.
    pub fn indented<F>(&mut self, body: F) -> Result<(), EmitError>
    where
        F: FnOnce(&mut Self) -> Result<(), EmitError>,
    {
        let depth = self.depth;
        self.depth += 1;
        let result = body(self);
        self.depth = depth;
        result
    }

    /// Write `{`, run `body` one level deeper, then write `}` + `suffix`.
    pub fn block<F>(&mut self, suffix: &str, body: F) -> Result<(), EmitError>
    where
        F: FnOnce(&mut Self) -> Result<(), EmitError>,
    {
        self.write("{");
        self.indented(body)?;
        self.write(&format!("}}{suffix}"));
        Ok(())
    }

    pub fn open_region(&mut self, name: &str) -> Result<(), EmitError> {
        if let Some(open) = &self.region {
            return Err(EmitError::NestedRegion {
                open: open.clone(),
                requested: name.to_string(),
            });
        }
        trace!(region = name, "open region");
        self.write(&format!("#region {name}"));
        self.region = Some(name.to_string());
        Ok(())
    }

    pub fn close_region(&mut self) -> Result<(), EmitError> {
        let name = self.region.take().ok_or(EmitError::NoOpenRegion)?;
        self.write(&format!("#endregion {name}"));
        Ok(())
    }

    /// Bracket `body` with a region named `name`.
    pub fn region<F>(&mut self, name: &str, body: F) -> Result<(), EmitError>
    where
        F: FnOnce(&mut Self) -> Result<(), EmitError>,
    {
        self.open_region(name)?;
        let result = body(self);
        // Close even on error so the writer stays consistent.
        let closed = self.close_region();
        result?;
        closed
    }

    pub fn open_region_name(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer, checking that every level and region was closed.
    pub fn finish(self) -> Result<String, EmitError> {
        if self.depth != 0 {
            return Err(EmitError::UnbalancedIndent(self.depth));
        }
        if let Some(open) = self.region {
            return Err(EmitError::UnclosedRegion(open));
        }
        Ok(self.buffer)
    }
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new("    ", "\n")
    }
}
