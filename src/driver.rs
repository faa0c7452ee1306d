//! Generation driver
//!
//! Walks every (dimension, kind) pair in output order, renders the file with
//! the core engine and either writes it or compares it with what is on disk.
//! The first failure aborts the run; files already written stay written.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use numgen_core::{generate, VectorType};

use crate::config::GeneratorConfig;
use crate::digest::{digest_hex, OutputManifest};

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub vector_type: VectorType,
    pub type_name: String,
    pub file_name: String,
    pub contents: String,
    pub digest: String,
}

/// Outcome of comparing rendered output with an existing directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriftReport {
    pub checked: usize,
    pub missing: Vec<PathBuf>,
    pub changed: Vec<PathBuf>,
}

impl DriftReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.changed.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Driver {
    config: GeneratorConfig,
}

impl Driver {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// Render a single type.
    pub fn render(&self, target: VectorType) -> Result<GeneratedFile> {
        let type_name = target.name();
        let contents = generate(target, &self.config.emit)
            .with_context(|| format!("Failed to generate {type_name}"))?;
        Ok(GeneratedFile {
            vector_type: target,
            file_name: self.config.file_name(&type_name),
            digest: digest_hex(contents.as_bytes()),
            type_name,
            contents,
        })
    }

    /// Render every type in memory, in output order.
    pub fn render_all(&self) -> Result<Vec<GeneratedFile>> {
        VectorType::all()
            .into_iter()
            .map(|target| self.render(target))
            .collect()
    }

    /// Regenerate every file, overwriting whatever is there.
    pub fn write_all(&self) -> Result<OutputManifest> {
        let dir = self.output_dir();
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

        let mut manifest = OutputManifest::new();
        for target in VectorType::all() {
            let file = self.render(target)?;
            let path = dir.join(&file.file_name);
            fs::write(&path, file.contents.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;

            info!(
                vector_type = %file.type_name,
                path = %path.display(),
                bytes = file.contents.len(),
                "Wrote file"
            );
            manifest.insert(file.type_name, file.digest);
        }

        for (type_name, digest) in manifest.iter() {
            debug!(vector_type = type_name, digest, "Manifest entry");
        }
        Ok(manifest)
    }

    /// Compare rendered output with the files on disk without writing.
    pub fn check(&self) -> Result<DriftReport> {
        let mut report = DriftReport::default();
        for file in self.render_all()? {
            let path = self.output_dir().join(&file.file_name);
            report.checked += 1;

            if !path.exists() {
                warn!(path = %path.display(), "Missing generated file");
                report.missing.push(path);
                continue;
            }
            let on_disk =
                fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
            if digest_hex(&on_disk) != file.digest {
                warn!(path = %path.display(), "Generated file has drifted");
                report.changed.push(path);
            }
        }
        Ok(report)
    }

    /// Digests of the files currently on disk, keyed by type name.
    pub fn disk_manifest(&self) -> Result<OutputManifest> {
        let mut manifest = OutputManifest::new();
        for target in VectorType::all() {
            let type_name = target.name();
            let path = self.output_dir().join(self.config.file_name(&type_name));
            if path.exists() {
                let bytes =
                    fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
                manifest.insert(type_name, digest_hex(&bytes));
            }
        }
        Ok(manifest)
    }
}
