// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Blyss contributors

//! Linter factory.
//!
//! Pass-through instantiation: the options record names an engine, the
//! factory asks it for a linter, and the result is handed back in a
//! caller-owned [`ConfiguredLinter`]. There is deliberately no module-level
//! singleton; callers decide where the instance lives, and tests can hold
//! several configurations side by side.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::engine::style::StyleEngine;
use crate::engine::{LintReport, Linter};
use crate::error::Result;
use crate::options::{self, Options};

/// A linter bound to one options record.
pub struct ConfiguredLinter {
    options: Options,
    linter: Box<dyn Linter>,
}

impl fmt::Debug for ConfiguredLinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredLinter")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ConfiguredLinter {
    /// Construct a linter from a fully-populated options record.
    ///
    /// Engine construction errors propagate unchanged. Each call yields an
    /// independent instance, even for equivalent records.
    pub fn new(options: Options) -> Result<Self> {
        let linter = options.engine.linter(&options.engine_config)?;
        debug!(cmd = %options.cmd, engine = options.engine.name(), "constructed linter");
        Ok(Self { options, linter })
    }

    /// Lint a source string with the configured engine.
    pub fn lint_text(&self, source: &str) -> Result<LintReport> {
        Ok(self.linter.lint_text(source)?)
    }

    /// The options record this instance was built from.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Command name, as the surrounding harness should present it.
    pub fn cmd(&self) -> &str {
        &self.options.cmd
    }

    /// Version string from the package descriptor.
    pub fn version(&self) -> &str {
        &self.options.version
    }
}

/// Build the blyss preset with the stock engine.
///
/// Call once at process startup and keep the result wherever suits the
/// caller; nothing is cached behind the scenes.
pub fn init() -> Result<ConfiguredLinter> {
    ConfiguredLinter::new(options::preset().options(Arc::new(StyleEngine))?)
}

#[cfg(test)]
#[path = "linter_tests.rs"]
mod tests;
