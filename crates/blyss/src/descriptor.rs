// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Blyss contributors

//! Package descriptor parsing.
//!
//! The preset sources its version and URLs from the package's own manifest
//! at load time. Required fields are validated here so a corrupted or
//! misinstalled package fails loudly instead of shipping empty metadata.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Raw manifest shape, only the parts the preset cares about.
#[derive(Deserialize)]
struct Manifest {
    package: Option<PackageSection>,
}

#[derive(Deserialize)]
struct PackageSection {
    name: Option<String>,
    version: Option<String>,
    homepage: Option<String>,
    #[serde(default)]
    metadata: MetadataSection,
}

#[derive(Default, Deserialize)]
struct MetadataSection {
    bugs: Option<BugsSection>,
}

#[derive(Deserialize)]
struct BugsSection {
    url: Option<String>,
}

/// Validated package descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// Package name.
    pub name: String,

    /// Semantic version string, verbatim from the manifest.
    pub version: String,

    /// Homepage URL.
    pub homepage: String,

    /// Bug-report URL, from `[package.metadata.bugs]`.
    pub bugs_url: String,
}

/// Load and validate the descriptor from a manifest path.
pub fn load(path: &Path) -> Result<Descriptor> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let descriptor = parse(&content, path)?;
    debug!(name = %descriptor.name, version = %descriptor.version, "loaded descriptor");
    Ok(descriptor)
}

/// Parse a descriptor from manifest content.
pub fn parse(content: &str, path: &Path) -> Result<Descriptor> {
    let manifest: Manifest = toml::from_str(content).map_err(|e| Error::Descriptor {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let package = manifest.package.ok_or_else(|| missing("package", path))?;

    Ok(Descriptor {
        name: package.name.ok_or_else(|| missing("package.name", path))?,
        version: package
            .version
            .ok_or_else(|| missing("package.version", path))?,
        homepage: package
            .homepage
            .ok_or_else(|| missing("package.homepage", path))?,
        bugs_url: package
            .metadata
            .bugs
            .and_then(|b| b.url)
            .ok_or_else(|| missing("package.metadata.bugs.url", path))?,
    })
}

fn missing(key: &str, path: &Path) -> Error {
    Error::Descriptor {
        message: format!("missing required field: {key}"),
        path: Some(path.to_path_buf()),
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
