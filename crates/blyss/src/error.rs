// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Blyss contributors

use std::path::PathBuf;

use crate::engine::EngineError;

/// Blyss error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Package descriptor missing or malformed.
    #[error("descriptor error: {message}")]
    Descriptor {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration record could not be assembled.
    #[error("options error: {message}")]
    Options {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error.
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error raised by the linter engine, passed through unchanged.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl Error {
    /// True for errors in the configuration class: the package is corrupted
    /// or misinstalled and no usable linter can be produced from it.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Descriptor { .. } | Error::Options { .. })
    }
}

/// Result type using blyss Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
