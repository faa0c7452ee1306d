//! Placeholder Formatter
//!
//! Templates reference a fixed vocabulary of `{NAME}` placeholders plus any
//! ad-hoc names the caller supplies for a single call. `{{` and `}}` emit
//! literal braces. A placeholder that nothing binds is a plan bug and fails
//! the call.
//!
//! | Placeholder | Binding                                            |
//! |-------------|----------------------------------------------------|
//! | `{T}`       | current vector type name (`Float3`)                |
//! | `{BT}`      | boolean vector type returned by comparisons        |
//! | `{NT}`      | element type name (`float`)                        |
//! | `{L}`       | active component name (only inside a sequence)     |
//! | `{VA1}`     | first vector argument                              |
//! | `{VA2}`     | second vector argument                             |
//! | `{VA}`      | single vector argument                             |
//! | `{NA}`      | scalar argument                                    |
//! | `{NL}`      | line terminator                                    |

use crate::error::EmitError;
use crate::kind::{Component, Dimension, NumericKind, VectorType};
use crate::options::{ArgumentNames, EmitOptions};

/// Bindings active during one formatting call.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub vector_type: &'a str,
    pub mask_type: &'a str,
    pub element_type: &'a str,
    pub component: Option<Component>,
    pub arguments: &'a ArgumentNames,
    pub newline: &'a str,
    /// Call-site bindings; these shadow the reserved names.
    pub overrides: &'a [(&'a str, &'a str)],
}

impl<'a> TemplateContext<'a> {
    /// Look up a placeholder name.
    pub fn resolve(&self, name: &str) -> Option<&'a str> {
        if let Some((_, value)) = self.overrides.iter().rev().find(|(key, _)| *key == name) {
            return Some(*value);
        }
        match name {
            "T" => Some(self.vector_type),
            "BT" => Some(self.mask_type),
            "NT" => Some(self.element_type),
            "L" => self.component.map(Component::name),
            "VA1" => Some(self.arguments.first.as_str()),
            "VA2" => Some(self.arguments.second.as_str()),
            "VA" => Some(self.arguments.single.as_str()),
            "NA" => Some(self.arguments.scalar.as_str()),
            "NL" => Some(self.newline),
            _ => None,
        }
    }
}

/// Substitute every placeholder in `template`.
pub fn render(template: &str, ctx: &TemplateContext<'_>) -> Result<String, EmitError> {
    let malformed = |position: usize| EmitError::MalformedTemplate {
        template: template.to_string(),
        position,
    };

    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let start = pos + 1;
                let end = template[start..]
                    .find('}')
                    .map(|offset| start + offset)
                    .ok_or_else(|| malformed(pos))?;
                let name = &template[start..end];
                let well_formed = !name.is_empty()
                    && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
                if !well_formed {
                    return Err(malformed(pos));
                }
                let value = ctx
                    .resolve(name)
                    .ok_or_else(|| EmitError::UnresolvedPlaceholder {
                        name: name.to_string(),
                        template: template.to_string(),
                    })?;
                out.push_str(value);
                // Skip past the closing brace.
                while let Some((p, _)) = chars.peek() {
                    if *p > end {
                        break;
                    }
                    chars.next();
                }
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(malformed(pos));
                }
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

/// Formatter bound to one plan's vector type.
#[derive(Debug, Clone)]
pub struct Formatter<'o> {
    target: VectorType,
    options: &'o EmitOptions,
    type_name: String,
    mask_name: String,
}

impl<'o> Formatter<'o> {
    pub fn new(target: VectorType, options: &'o EmitOptions) -> Self {
        Self {
            target,
            options,
            type_name: target.name(),
            mask_name: options.comparison_mask.mask_type(target).name(),
        }
    }

    pub fn target(&self) -> VectorType {
        self.target
    }

    pub fn options(&self) -> &'o EmitOptions {
        self.options
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn element_type(&self) -> &'static str {
        self.target.kind.element_type()
    }

    pub fn dim(&self) -> Dimension {
        self.target.dim
    }

    /// A related vector type. `None` keeps the plan's own kind or dimension.
    pub fn related(&self, kind: Option<NumericKind>, dim: Option<Dimension>) -> VectorType {
        VectorType::new(kind.unwrap_or(self.target.kind), dim.unwrap_or(self.target.dim))
    }

    /// Format a template with no active component.
    pub fn format(&self, template: &str, overrides: &[(&str, &str)]) -> Result<String, EmitError> {
        render(template, &self.context(None, overrides))
    }

    /// Format a template with `{L}` bound to `component`.
    pub fn format_at(
        &self,
        template: &str,
        component: Component,
        overrides: &[(&str, &str)],
    ) -> Result<String, EmitError> {
        render(template, &self.context(Some(component), overrides))
    }

    fn context<'a>(
        &'a self,
        component: Option<Component>,
        overrides: &'a [(&'a str, &'a str)],
    ) -> TemplateContext<'a> {
        TemplateContext {
            vector_type: &self.type_name,
            mask_type: &self.mask_name,
            element_type: self.element_type(),
            component,
            arguments: &self.options.arguments,
            newline: &self.options.newline,
            overrides,
        }
    }
}
