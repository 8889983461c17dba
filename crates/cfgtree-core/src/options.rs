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

//! Document options.
//!
//! # Examples
//!
//! ```
//! use cfgtree_core::{ConfigOptions, Document};
//!
//! let opts = ConfigOptions::builder()
//!     .spaces_per_indent(4)
//!     .max_line_length(64 * 1024)
//!     .build();
//!
//! let mut doc = Document::with_options(opts);
//! doc.put("server.port", "8080");
//! assert_eq!(doc.save_to_text(), "server:\n    port: 8080");
//! ```

use crate::limits::Limits;

/// Default number of spaces per indentation level when serializing.
pub const DEFAULT_SPACES_PER_INDENT: usize = 2;

/// Options controlling how a [`Document`](crate::Document) loads and saves.
///
/// `spaces_per_indent` only affects serialization of key lines and
/// `add_comment`/`add_blank_lines`. Parsing always reads the indentation
/// widths actually present in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOptions {
    /// Spaces written per nesting level (default: 2, minimum: 1).
    pub spaces_per_indent: usize,
    /// Resource limits applied while loading.
    pub limits: Limits,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            spaces_per_indent: DEFAULT_SPACES_PER_INDENT,
            limits: Limits::default(),
        }
    }
}

impl ConfigOptions {
    /// Create a new builder for ConfigOptions.
    pub fn builder() -> ConfigOptionsBuilder {
        ConfigOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of [`ConfigOptions`].
#[derive(Debug, Clone)]
pub struct ConfigOptionsBuilder {
    spaces_per_indent: usize,
    limits: Limits,
}

impl ConfigOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            spaces_per_indent: DEFAULT_SPACES_PER_INDENT,
            limits: Limits::default(),
        }
    }

    /// Set the number of spaces written per nesting level. Zero is raised to
    /// one.
    pub fn spaces_per_indent(mut self, spaces: usize) -> Self {
        self.spaces_per_indent = spaces.max(1);
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the maximum input size in bytes.
    pub fn max_file_size(mut self, size: usize) -> Self {
        self.limits.max_file_size = size;
        self
    }

    /// Set the maximum line length in bytes.
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.limits.max_line_length = length;
        self
    }

    /// Set the maximum number of nested key ancestors.
    pub fn max_indent_depth(mut self, depth: usize) -> Self {
        self.limits.max_indent_depth = depth;
        self
    }

    /// Build the ConfigOptions.
    pub fn build(self) -> ConfigOptions {
        ConfigOptions {
            spaces_per_indent: self.spaces_per_indent,
            limits: self.limits,
        }
    }
}

impl Default for ConfigOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
