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

//! Lexical analysis: stateless, one line at a time.
//!
//! - [`comment`] - Trailing comment extraction
//! - [`line`] - Key / comment / blank classification
//!
//! # Examples
//!
//! ```
//! use cfgtree_core::lex::{classify_line, Line};
//!
//! assert!(matches!(classify_line("a: 1", 1).unwrap(), Line::Key(_)));
//! assert!(matches!(classify_line("# c", 2).unwrap(), Line::Comment(_)));
//! assert!(matches!(classify_line("   ", 3).unwrap(), Line::Blank { indent: 3 }));
//! ```

pub mod comment;
pub mod line;

pub use comment::split_comment;
pub use line::{classify_line, is_valid_key, is_valid_value, KeyLine, Line};
