// Dweve CfgTree - Comment-Preserving Configuration Trees
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for the cfgtree CLI.
//!
//! All commands return `Result<(), CliError>`; `main` prints the error and
//! exits non-zero.

use cfgtree_core::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cfgtree CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read or write, stdout).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Loading or saving the config document failed.
    #[error("{0}")]
    Config(String),

    /// No value (or no node, for `kill`) at the requested key.
    #[error("Key '{key}' not found")]
    KeyNotFound {
        /// The dotted key path
        key: String,
    },

    /// The key path is empty or has a segment that is not a valid key.
    #[error("Invalid key '{key}': segments must be non-empty and free of ':', '#' and surrounding spaces")]
    InvalidKey {
        /// The dotted key path
        key: String,
    },

    /// The value would not load back unchanged.
    #[error("Invalid value '{value}': must be non-empty and free of ':', '#' and surrounding spaces")]
    InvalidValue {
        /// The rejected value
        value: String,
    },

    /// File is not in canonical form (`format --check`).
    #[error("File '{path}' is not in canonical form")]
    NotCanonical {
        /// The checked file
        path: PathBuf,
    },

    /// JSON serialization error.
    #[error("JSON format error: {0}")]
    Json(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a key-not-found error.
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create an invalid-key error.
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    /// Create an invalid-value error.
    pub fn invalid_value(value: impl Into<String>) -> Self {
        Self::InvalidValue {
            value: value.into(),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
