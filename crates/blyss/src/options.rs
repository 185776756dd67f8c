// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Blyss contributors

//! Option set construction.
//!
//! A [`StylePreset`] names the four things that distinguish one style
//! package from another: command name, tagline, package root, and rule-file
//! name. [`StylePreset::options`] turns that plus an engine into a complete
//! [`Options`] record, sourcing version and URLs from the package manifest.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::descriptor;
use crate::engine::{EngineConfig, LinterEngine};
use crate::error::{Error, Result};

/// The configuration record handed to the linter factory.
///
/// Fully populated on construction and never mutated afterward. `Clone` is
/// cheap: the engine is shared behind an `Arc`.
#[derive(Clone)]
pub struct Options {
    /// Command name the surrounding harness invokes itself as.
    pub cmd: String,

    /// Version string, verbatim from the package descriptor.
    pub version: String,

    /// Homepage URL.
    pub homepage: String,

    /// Bug-report URL.
    pub bugs: String,

    /// One-line description shown in help output.
    pub tagline: String,

    /// The engine that will build the linter.
    pub engine: Arc<dyn LinterEngine>,

    /// Configuration handed to that engine.
    pub engine_config: EngineConfig,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("cmd", &self.cmd)
            .field("version", &self.version)
            .field("homepage", &self.homepage)
            .field("bugs", &self.bugs)
            .field("tagline", &self.tagline)
            .field("engine", &self.engine.name())
            .field("engine_config", &self.engine_config)
            .finish()
    }
}

/// A style preset: everything that varies between style packages built on
/// the same engine contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePreset {
    cmd: &'static str,
    tagline: &'static str,
    root: PathBuf,
    rules_file: &'static str,
}

impl StylePreset {
    /// Define a preset rooted at a package directory.
    pub fn new(
        cmd: &'static str,
        tagline: &'static str,
        root: impl Into<PathBuf>,
        rules_file: &'static str,
    ) -> Self {
        Self {
            cmd,
            tagline,
            root: root.into(),
            rules_file,
        }
    }

    /// Command name.
    pub fn cmd(&self) -> &str {
        self.cmd
    }

    /// Package root the manifest and rule file are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Build the full options record for a given engine.
    ///
    /// Reads `<root>/Cargo.toml` for version and URLs and resolves the rule
    /// file against the package root, so the record is independent of the
    /// caller's working directory. Fails if the manifest lacks required
    /// fields or the rule file is absent.
    pub fn options(&self, engine: Arc<dyn LinterEngine>) -> Result<Options> {
        let descriptor = descriptor::load(&self.root.join("Cargo.toml"))?;

        // Pin the path down before anyone changes directory.
        let config_file =
            std::path::absolute(self.root.join(self.rules_file)).map_err(|e| Error::Io {
                path: self.root.clone(),
                source: e,
            })?;
        if !config_file.is_file() {
            return Err(Error::Options {
                message: format!("rule-configuration file not found: {}", self.rules_file),
                path: Some(config_file),
            });
        }

        debug!(cmd = self.cmd, config_file = %config_file.display(), "built options");
        Ok(Options {
            cmd: self.cmd.to_string(),
            version: descriptor.version,
            homepage: descriptor.homepage,
            bugs: descriptor.bugs_url,
            tagline: self.tagline.to_string(),
            engine,
            engine_config: EngineConfig { config_file },
        })
    }
}

/// The blyss preset: this package, its bundled `blyss.toml` rule file.
pub fn preset() -> StylePreset {
    StylePreset::new(
        "blyss",
        "Blyss Style",
        env!("CARGO_MANIFEST_DIR"),
        "blyss.toml",
    )
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
