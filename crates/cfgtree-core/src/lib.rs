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

//! Round-trip parser and serializer for indented `key: value` config files.
//!
//! A [`Document`] keeps two views of the same data:
//!
//! - an ordered tree of key, comment and blank-line nodes, so that saving a
//!   loaded file reproduces its comments, blank lines and spacing
//! - a flat index from dotted paths (`server.http.port`) to values, for
//!   lookups and edits
//!
//! Nesting is expressed purely by indentation. There are no lists, quoting,
//! escapes or multi-line values; `:` may not appear in a value.
//!
//! # Lexical Analysis
//!
//! The [`lex`] module classifies single lines and is usable on its own.
//!
//! # Examples
//!
//! ```
//! use cfgtree_core::Document;
//!
//! let mut doc = Document::new();
//! doc.load_from_text("db:\n  # primary\n  host: a.local\n  port: 5432").unwrap();
//!
//! doc.put("db.user", "admin");
//! doc.kill("db.port");
//!
//! assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["db.host", "db.user"]);
//! assert_eq!(
//!     doc.save_to_text(),
//!     "db:\n  # primary\n  host: a.local\n  user: admin"
//! );
//! ```

mod document;
mod error;
mod io;
pub mod lex;
mod limits;
mod node;
mod options;
mod parser;
pub mod path;
mod preprocess;
mod tree;
mod writer;

pub use document::Document;
pub use error::{ConfigError, ConfigErrorKind, ConfigResult};
pub use limits::Limits;
pub use node::{BlankNode, CommentNode, KeyNode, Node, NodeId};
pub use options::{ConfigOptions, ConfigOptionsBuilder, DEFAULT_SPACES_PER_INDENT};
pub use tree::Tree;
