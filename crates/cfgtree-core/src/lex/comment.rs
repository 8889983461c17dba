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

//! Trailing comment extraction.

use memchr::memchr;

/// Split a line at its first `#`.
///
/// Returns the text before the comment and, if a `#` was found, the comment
/// itself. The comment keeps the run of spaces that preceded the `#` so the
/// exact spacing can be written back out. There is no quoting, so a `#`
/// always starts a comment.
///
/// # Examples
///
/// ```
/// use cfgtree_core::lex::split_comment;
///
/// assert_eq!(split_comment("port: 80   # http"), ("port: 80", Some("   # http")));
/// assert_eq!(split_comment("  # note"), ("", Some("  # note")));
/// assert_eq!(split_comment("port: 80"), ("port: 80", None));
/// ```
#[inline]
pub fn split_comment(line: &str) -> (&str, Option<&str>) {
    let bytes = line.as_bytes();
    match memchr(b'#', bytes) {
        Some(hash) => {
            let mut start = hash;
            while start > 0 && bytes[start - 1] == b' ' {
                start -= 1;
            }
            (&line[..start], Some(&line[start..]))
        }
        None => (line, None),
    }
}
