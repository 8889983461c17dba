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

//! Error types for loading and saving config documents.
//!
//! Parse-time errors are always fatal to the `load` call that raised them.
//! Lookups and mutations on a missing path are *not* errors; they return
//! `None` instead.
//!
//! # Examples
//!
//! ```rust
//! use cfgtree_core::{ConfigError, ConfigErrorKind, Document};
//!
//! let mut doc = Document::new();
//! let err = doc.load_from_text("key: value: extra").unwrap_err();
//! assert_eq!(err.kind(), ConfigErrorKind::Structural);
//! assert_eq!(err.line(), Some(1));
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The kind of error, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// A required argument was empty.
    Usage,
    /// A line matched none of key-value, comment or blank.
    Structural,
    /// Input exceeded a configured limit.
    LimitExceeded,
    /// The underlying stream failed.
    Io,
    /// A named source file does not exist.
    NotFound,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => write!(f, "UsageError"),
            Self::Structural => write!(f, "StructuralError"),
            Self::LimitExceeded => write!(f, "LimitError"),
            Self::Io => write!(f, "IOError"),
            Self::NotFound => write!(f, "NotFoundError"),
        }
    }
}

/// Errors raised by [`Document`](crate::Document) I/O entry points.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Null or empty required argument.
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// Malformed line; aborts the whole load.
    #[error("Structural error at line {line}: {message}")]
    Structural { line: usize, message: String },

    /// Input exceeded one of the configured [`Limits`](crate::Limits).
    #[error("Limit exceeded at line {line}: {message}")]
    LimitExceeded { line: usize, message: String },

    /// Whole input larger than [`Limits::max_file_size`](crate::Limits::max_file_size).
    #[error("Limit exceeded: input larger than {limit} bytes")]
    InputTooLarge { limit: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source file does not exist.
    #[error("File {} could not be found", path.display())]
    NotFound { path: PathBuf },
}

impl ConfigError {
    /// Create a usage error.
    #[inline]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a structural error for a 1-based line number.
    #[inline]
    pub fn structural(line: usize, message: impl Into<String>) -> Self {
        Self::Structural {
            line,
            message: message.into(),
        }
    }

    /// Create a limit error for a 1-based line number.
    #[inline]
    pub fn limit_exceeded(line: usize, message: impl Into<String>) -> Self {
        Self::LimitExceeded {
            line,
            message: message.into(),
        }
    }

    /// Create an error for input over the file size limit.
    #[inline]
    pub fn input_too_large(limit: usize) -> Self {
        Self::InputTooLarge { limit }
    }

    /// Create a not-found error.
    #[inline]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Get the line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Structural { line, .. } | Self::LimitExceeded { line, .. } => Some(*line),
            Self::Usage { .. }
            | Self::InputTooLarge { .. }
            | Self::Io(_)
            | Self::NotFound { .. } => None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            Self::Usage { .. } => ConfigErrorKind::Usage,
            Self::Structural { .. } => ConfigErrorKind::Structural,
            Self::LimitExceeded { .. } | Self::InputTooLarge { .. } => {
                ConfigErrorKind::LimitExceeded
            }
            Self::Io(_) => ConfigErrorKind::Io,
            Self::NotFound { .. } => ConfigErrorKind::NotFound,
        }
    }
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
