//! Output digests
//!
//! A manifest maps every generated type to the blake3 digest of its file
//! bytes. Two runs with unchanged code must produce equal manifests.

use std::collections::BTreeMap;

/// Hex blake3 digest of `bytes`.
pub fn digest_hex(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputManifest {
    entries: BTreeMap<String, String>,
}

impl OutputManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, type_name: impl Into<String>, digest: impl Into<String>) {
        self.entries.insert(type_name.into(), digest.into());
    }

    pub fn get(&self, type_name: &str) -> Option<&str> {
        self.entries.get(type_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by type name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Type names whose digest differs or that only one side has.
    pub fn differences(&self, other: &OutputManifest) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .iter()
            .filter(|(name, digest)| other.get(name) != Some(digest.as_str()))
            .map(|(name, _)| name.clone())
            .collect();
        names.extend(
            other
                .entries
                .keys()
                .filter(|name| !self.entries.contains_key(*name))
                .cloned(),
        );
        names.sort();
        names
    }
}
