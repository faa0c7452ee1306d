//! Numeric vector type generator.
//!
//! Drives the `numgen-core` engine over every supported (kind, dimension)
//! pair and writes one C# source file per type.
//!
//! ```text
//! GeneratorConfig ──► Driver ──► numgen_core::generate ──► <Type>.cs
//!                        │
//!                        └── OutputManifest (blake3 per file, used by --check)
//! ```

pub mod config;
pub mod digest;
pub mod driver;

pub use config::{ConfigError, GeneratorConfig};
pub use digest::{digest_hex, OutputManifest};
pub use driver::{DriftReport, Driver, GeneratedFile};
