// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Blyss contributors

//! Stock text-style engine.
//!
//! A deliberately small engine with a closed rule catalog, driven by the
//! `[rules]` table of the configured rule file. It exists so the preset has
//! a working default; richer engines plug in through [`LinterEngine`]
//! without touching the preset.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, trace};

use super::{
    EngineConfig, EngineError, EngineResult, LintMessage, LintReport, Linter, LinterEngine,
    Severity,
};

/// Longest line accepted by the `max-line-length` rule, in characters.
pub const MAX_LINE_LENGTH: usize = 100;

/// Rule catalog, in reporting order.
pub const RULE_NAMES: &[&str] = &[
    "no-trailing-whitespace",
    "no-tabs",
    "max-line-length",
    "final-newline",
];

/// Per-rule level: error, warn, or off.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Error,
    Warn,
    #[default]
    Off,
}

impl RuleLevel {
    fn severity(self) -> Option<Severity> {
        match self {
            RuleLevel::Error => Some(Severity::Error),
            RuleLevel::Warn => Some(Severity::Warn),
            RuleLevel::Off => None,
        }
    }
}

/// Parsed rule-configuration file.
#[derive(Debug, Default, Deserialize)]
struct RulesFile {
    #[serde(default)]
    rules: BTreeMap<String, RuleLevel>,
}

/// The stock engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct StyleEngine;

impl LinterEngine for StyleEngine {
    fn name(&self) -> &'static str {
        "style"
    }

    fn linter(&self, config: &EngineConfig) -> EngineResult<Box<dyn Linter>> {
        debug!(config_file = %config.config_file.display(), "configuring style engine");
        Ok(Box::new(StyleLinter {
            config_file: config.config_file.clone(),
        }))
    }
}

/// Linter produced by [`StyleEngine`]. Rule levels are re-read from the
/// configured file on every run, so edits take effect without rebuilding.
struct StyleLinter {
    config_file: PathBuf,
}

impl Linter for StyleLinter {
    fn lint_text(&self, source: &str) -> EngineResult<LintReport> {
        let rules = load_rules(&self.config_file)?;
        trace!(rules = rules.len(), "linting text");

        let mut messages = Vec::new();
        for (number, line) in source.lines().enumerate() {
            let number = (number + 1) as u32;

            if let Some(severity) = rules.get("no-trailing-whitespace").copied().flatten()
                && line != line.trim_end()
            {
                messages.push(LintMessage::at_line(
                    "no-trailing-whitespace",
                    severity,
                    number,
                    "Trailing whitespace.",
                ));
            }

            if let Some(severity) = rules.get("no-tabs").copied().flatten()
                && line.contains('\t')
            {
                messages.push(LintMessage::at_line(
                    "no-tabs",
                    severity,
                    number,
                    "Hard tab character.",
                ));
            }

            if let Some(severity) = rules.get("max-line-length").copied().flatten()
                && line.chars().count() > MAX_LINE_LENGTH
            {
                messages.push(LintMessage::at_line(
                    "max-line-length",
                    severity,
                    number,
                    format!("Line longer than {MAX_LINE_LENGTH} characters."),
                ));
            }
        }

        if let Some(severity) = rules.get("final-newline").copied().flatten()
            && !source.is_empty()
            && !source.ends_with('\n')
        {
            messages.push(LintMessage::whole_input(
                "final-newline",
                severity,
                "Missing newline at end of input.",
            ));
        }

        Ok(LintReport::from_messages(messages))
    }
}

/// Load the `[rules]` table, resolving each catalog rule to its severity
/// (None = off or unconfigured). Unknown rule names are rejected.
fn load_rules(path: &Path) -> EngineResult<BTreeMap<&'static str, Option<Severity>>> {
    let content = std::fs::read_to_string(path).map_err(|e| EngineError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_rules(&content, path)
}

/// Parse rule-file content (split out for tests, no I/O).
fn parse_rules(
    content: &str,
    path: &Path,
) -> EngineResult<BTreeMap<&'static str, Option<Severity>>> {
    let file: RulesFile = toml::from_str(content).map_err(|e| EngineError::Rules {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let mut resolved = BTreeMap::new();
    for (name, level) in &file.rules {
        let known = RULE_NAMES
            .iter()
            .find(|known| **known == name.as_str())
            .ok_or_else(|| EngineError::Rules {
                message: format!("unknown rule: {name}"),
                path: Some(path.to_path_buf()),
            })?;
        resolved.insert(*known, level.severity());
    }

    Ok(resolved)
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
