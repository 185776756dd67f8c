//! Blyss Style: a preconfigured linter.
//!
//! This crate is a style preset, not a linting engine. It assembles an
//! [`Options`] record (command name, package metadata, tagline, engine
//! reference, rule-file path) and hands it to the engine named in the
//! record. [`init`] does the whole dance for the stock configuration:
//!
//! ```no_run
//! let linter = blyss::init()?;
//! let report = linter.lint_text("fn main() {}\n")?;
//! assert!(report.is_clean());
//! # Ok::<(), blyss::Error>(())
//! ```

pub mod descriptor;
pub mod engine;
pub mod error;
pub mod linter;
pub mod options;

pub use descriptor::Descriptor;
pub use engine::style::StyleEngine;
pub use engine::{
    EngineConfig, EngineError, EngineResult, LintMessage, LintReport, Linter, LinterEngine,
    Severity,
};
pub use error::{Error, Result};
pub use linter::{ConfiguredLinter, init};
pub use options::{Options, StylePreset, preset};
