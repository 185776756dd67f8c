// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Blyss contributors

//! The linter-engine capability.
//!
//! Blyss itself contains no linting logic: it hands an [`EngineConfig`] to
//! whichever [`LinterEngine`] the options name, and exposes the [`Linter`]
//! the engine builds. `StyleEngine` in [`style`] is the stock engine; any
//! other implementation of the trait slots in unchanged.

use std::path::PathBuf;

use serde::Serialize;

pub mod style;

/// Errors raised on the engine side of the boundary.
///
/// These pass through blyss untranslated (`Error::Engine`).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Rule-configuration file missing, unreadable, or malformed.
    #[error("rules error: {message}")]
    Rules {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error inside the engine.
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for engine-side operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Configuration handed to an engine when constructing a linter.
///
/// The engine owns the rule file's format and loads it at lint time, not at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Absolute path to the rule-configuration file.
    pub config_file: PathBuf,
}

/// A linter engine that can be configured into a working linter.
///
/// This is the substitution point: the options record names one engine, and
/// swapping it for another implementation is the only change required.
/// Object-safe to allow dynamic dispatch behind `Arc<dyn LinterEngine>`.
pub trait LinterEngine: Send + Sync {
    /// Unique identifier for this engine (e.g., "style").
    fn name(&self) -> &'static str;

    /// Construct a linter bound to the given configuration.
    ///
    /// Implementations may validate the configuration shape here, but rule
    /// file contents are loaded lazily by the returned linter.
    fn linter(&self, config: &EngineConfig) -> EngineResult<Box<dyn Linter>>;
}

/// The capability an engine hands back: lint source text, report findings.
pub trait Linter: Send + Sync {
    /// Lint a source string and return the findings.
    fn lint_text(&self, source: &str) -> EngineResult<LintReport>;
}

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warn,
    Error,
}

/// A single finding within a lint run.
#[derive(Debug, Clone, Serialize)]
pub struct LintMessage {
    /// Rule that produced the finding (engine-specific).
    pub rule: String,

    /// Finding severity.
    pub severity: Severity,

    /// 1-based line number (None for whole-input findings).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    /// Human-readable description.
    pub message: String,
}

impl LintMessage {
    /// Finding anchored to a line.
    pub fn at_line(
        rule: impl Into<String>,
        severity: Severity,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            severity,
            line: Some(line),
            message: message.into(),
        }
    }

    /// Finding about the input as a whole.
    pub fn whole_input(
        rule: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            severity,
            line: None,
            message: message.into(),
        }
    }
}

/// Result of linting one piece of source text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
    /// Findings in source order.
    pub messages: Vec<LintMessage>,

    /// Number of error-severity findings.
    pub error_count: usize,

    /// Number of warn-severity findings.
    pub warning_count: usize,
}

impl LintReport {
    /// Build a report from findings, deriving the severity counts.
    pub fn from_messages(messages: Vec<LintMessage>) -> Self {
        let error_count = messages
            .iter()
            .filter(|m| m.severity == Severity::Error)
            .count();
        let warning_count = messages.len() - error_count;
        Self {
            messages,
            error_count,
            warning_count,
        }
    }

    /// True when the run produced no findings at all.
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }

    /// Render the report as JSON, the shape a harness's formatter consumes.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
