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

//! Dotted key paths.

use crate::lex::is_valid_key;

/// Separator between key names in a path.
pub const PATH_SEPARATOR: char = '.';

/// Split a dotted path into key names.
///
/// Returns `None` for an empty path, one with an empty segment
/// (`"a..b"`, `".a"`, `"a."`), or one with a segment that is not a valid
/// key (see [`is_valid_key`]); such paths cannot name a node.
///
/// # Examples
///
/// ```
/// use cfgtree_core::path::split_path;
///
/// assert_eq!(split_path("db.primary.host"), Some(vec!["db", "primary", "host"]));
/// assert_eq!(split_path("a..b"), None);
/// assert_eq!(split_path(""), None);
/// assert_eq!(split_path("a#b.c"), None);
/// ```
pub fn split_path(path: &str) -> Option<Vec<&str>> {
    if path.is_empty() {
        return None;
    }
    let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    if !segments.iter().all(|s| is_valid_key(s)) {
        return None;
    }
    Some(segments)
}

/// Append a key name to a parent path. An empty prefix denotes the root.
///
/// # Examples
///
/// ```
/// use cfgtree_core::path::join_path;
///
/// assert_eq!(join_path("", "db"), "db");
/// assert_eq!(join_path("db", "host"), "db.host");
/// ```
pub fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        return key.to_string();
    }
    let mut path = String::with_capacity(prefix.len() + 1 + key.len());
    path.push_str(prefix);
    path.push(PATH_SEPARATOR);
    path.push_str(key);
    path
}
