//! Generator configuration
//!
//! Loads and validates the optional YAML file. Every field has a default, so
//! an empty file (or no file) regenerates the standard set of types.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use numgen_core::{EmitOptions, COMPONENT_NAMES};

/// Parameter names the plans already use for their own members.
const RESERVED_PARAMETERS: [&str; 6] = ["min", "max", "other", "obj", "ix", "value"];

/// C# reserved keywords; none of them can name a parameter.
const CSHARP_KEYWORDS: [&str; 77] = [
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("file extension must not be empty")]
    EmptyExtension,

    #[error("indent unit must not be empty")]
    EmptyIndent,

    #[error("line terminator must not be empty")]
    EmptyNewline,

    #[error("namespace must not be empty")]
    EmptyNamespace,

    #[error("`{0}` is not a valid argument name")]
    InvalidIdentifier(String),

    #[error("argument name `{0}` is a C# keyword")]
    KeywordArgument(String),

    #[error("argument name `{0}` is used more than once")]
    DuplicateArgument(String),

    #[error("argument name `{0}` collides with a component or member parameter")]
    ReservedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory receiving one file per generated type.
    pub output_dir: PathBuf,
    /// File extension, without the dot.
    pub extension: String,
    pub emit: EmitOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("generated"),
            extension: "cs".to_string(),
            emit: EmitOptions::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load config from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        info!(
            path = %path.display(),
            output_dir = %config.output_dir.display(),
            namespace = %config.emit.namespace,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Parse and validate YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }
        if self.emit.indent.is_empty() {
            return Err(ConfigError::EmptyIndent);
        }
        if self.emit.newline.is_empty() {
            return Err(ConfigError::EmptyNewline);
        }
        if self.emit.namespace.trim().is_empty() {
            return Err(ConfigError::EmptyNamespace);
        }

        let mut seen = HashSet::new();
        for name in self.emit.arguments.iter() {
            if !is_identifier(name) {
                return Err(ConfigError::InvalidIdentifier(name.to_string()));
            }
            if CSHARP_KEYWORDS.iter().any(|keyword| *keyword == name) {
                return Err(ConfigError::KeywordArgument(name.to_string()));
            }
            if COMPONENT_NAMES
                .iter()
                .chain(RESERVED_PARAMETERS.iter())
                .any(|reserved| *reserved == name)
            {
                return Err(ConfigError::ReservedArgument(name.to_string()));
            }
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateArgument(name.to_string()));
            }
        }
        Ok(())
    }

    /// File name for a generated type, e.g. `Float3.cs`.
    pub fn file_name(&self, type_name: &str) -> String {
        format!("{type_name}.{}", self.extension)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
