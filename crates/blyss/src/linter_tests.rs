// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Blyss contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::engine::{EngineConfig, EngineError, EngineResult, LintMessage, LinterEngine, Severity};
use crate::error::Error;

/// Engine that flags every input with a single fixed finding.
struct FixedEngine;

struct FixedLinter;

impl LinterEngine for FixedEngine {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn linter(&self, _config: &EngineConfig) -> EngineResult<Box<dyn Linter>> {
        Ok(Box::new(FixedLinter))
    }
}

impl Linter for FixedLinter {
    fn lint_text(&self, _source: &str) -> EngineResult<LintReport> {
        Ok(LintReport::from_messages(vec![LintMessage::whole_input(
            "fixed",
            Severity::Error,
            "Always wrong.",
        )]))
    }
}

/// Engine whose construction always fails.
struct BrokenEngine;

impl LinterEngine for BrokenEngine {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn linter(&self, config: &EngineConfig) -> EngineResult<Box<dyn Linter>> {
        Err(EngineError::Rules {
            message: "engine refused".into(),
            path: Some(config.config_file.clone()),
        })
    }
}

#[test]
fn init_yields_working_linter() {
    let linter = init().unwrap();
    assert_eq!(linter.cmd(), "blyss");
    assert_eq!(linter.version(), env!("CARGO_PKG_VERSION"));

    let report = linter.lint_text("fn main() {}\n").unwrap();
    assert!(report.is_clean());
}

#[test]
fn equivalent_records_yield_independent_instances() {
    let options = options::preset().options(Arc::new(StyleEngine)).unwrap();

    let first = ConfiguredLinter::new(options.clone()).unwrap();
    let second = ConfiguredLinter::new(options).unwrap();

    // No singleton aliasing: dropping one leaves the other working.
    drop(first);
    assert!(second.lint_text("ok\n").unwrap().is_clean());
}

#[test]
fn engine_reference_is_a_substitution_point() {
    let mut options = options::preset().options(Arc::new(StyleEngine)).unwrap();
    options.engine = Arc::new(FixedEngine);

    let linter = ConfiguredLinter::new(options).unwrap();
    let report = linter.lint_text("anything").unwrap();
    assert_eq!(report.error_count, 1);
    assert_eq!(report.messages[0].rule, "fixed");
}

#[test]
fn construction_failure_propagates_engine_error() {
    let mut options = options::preset().options(Arc::new(StyleEngine)).unwrap();
    options.engine = Arc::new(BrokenEngine);

    let err = ConfiguredLinter::new(options).unwrap_err();
    assert!(matches!(err, Error::Engine(_)));
    assert!(err.to_string().contains("engine refused"));
}

#[test]
fn options_accessor_exposes_the_record() {
    let linter = init().unwrap();
    assert_eq!(linter.options().cmd, "blyss");
    assert_eq!(linter.options().tagline, "Blyss Style");
    assert!(!linter.options().homepage.is_empty());
    assert!(!linter.options().bugs.is_empty());
}
