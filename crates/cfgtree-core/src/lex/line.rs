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

//! Line classification.
//!
//! Each input line is one of three shapes:
//!
//! ```text
//! blank_line   ::= (whitespace)*
//! comment_line ::= (spaces)* '#' anything
//! key_line     ::= spaces key ':' spaces value? trailing_comment?
//! ```
//!
//! A key never starts with a space or a colon and never contains a colon;
//! the value never contains a colon. Anything else is a structural error.

use super::comment::split_comment;
use crate::error::{ConfigError, ConfigResult};
use memchr::memchr;

/// A `key: value` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLine<'a> {
    /// Number of leading spaces.
    pub indent: usize,
    /// Trimmed key.
    pub key: &'a str,
    /// Spaces between the colon and the value.
    pub colon_space: usize,
    /// Trimmed value, empty for a section header.
    pub value: &'a str,
    /// Trailing comment including the spaces before `#`.
    pub comment: Option<&'a str>,
}

/// A classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Key line, possibly with a trailing comment.
    Key(KeyLine<'a>),
    /// Standalone comment; the text is the whole line, leading whitespace included.
    Comment(&'a str),
    /// Whitespace-only line; `indent` is the full width of the line.
    Blank { indent: usize },
}

/// Classify one line of input.
///
/// `line_num` is 1-based and only used for the error.
///
/// # Examples
///
/// ```
/// use cfgtree_core::lex::{classify_line, Line};
///
/// match classify_line("  port: 8080 # http", 3).unwrap() {
///     Line::Key(kl) => {
///         assert_eq!(kl.indent, 2);
///         assert_eq!(kl.key, "port");
///         assert_eq!(kl.value, "8080");
///         assert_eq!(kl.comment, Some(" # http"));
///     }
///     other => panic!("unexpected {:?}", other),
/// }
///
/// assert!(classify_line("a: b: c", 7).is_err());
/// ```
pub fn classify_line(line: &str, line_num: usize) -> ConfigResult<Line<'_>> {
    let (content, comment) = split_comment(line);

    if let Some(key_line) = match_key_value(content, comment) {
        return Ok(Line::Key(key_line));
    }

    if comment.is_some() {
        // Only spaces may precede a standalone comment
        if !content.bytes().all(|b| b == b' ') {
            return Err(invalid_sequence(line, line_num));
        }
        return Ok(Line::Comment(line));
    }

    if content.trim().is_empty() {
        return Ok(Line::Blank {
            indent: content.chars().count(),
        });
    }

    Err(invalid_sequence(line, line_num))
}

fn match_key_value<'a>(content: &'a str, comment: Option<&'a str>) -> Option<KeyLine<'a>> {
    let bytes = content.as_bytes();
    let indent = bytes.iter().take_while(|&&b| b == b' ').count();
    let rest = &content[indent..];

    // Key must start with something other than ':' (leading spaces are indent)
    if rest.is_empty() || rest.as_bytes()[0] == b':' {
        return None;
    }

    let colon = memchr(b':', rest.as_bytes())?;
    let after = &rest[colon + 1..];
    if memchr(b':', after.as_bytes()).is_some() {
        return None;
    }

    let colon_space = after.bytes().take_while(|&b| b == b' ').count();

    Some(KeyLine {
        indent,
        key: rest[..colon].trim(),
        colon_space,
        value: after[colon_space..].trim(),
        comment,
    })
}

/// Check whether `key` would be read back unchanged as the key of a line.
///
/// A key is non-empty, has no surrounding whitespace and contains none of
/// `:`, `#` or a line break.
///
/// # Examples
///
/// ```
/// use cfgtree_core::lex::is_valid_key;
///
/// assert!(is_valid_key("my key"));
/// assert!(!is_valid_key("a#b"));
/// assert!(!is_valid_key(" a"));
/// ```
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.trim() == key && !key.contains([':', '#', '\n', '\r'])
}

/// Check whether `value` would be read back unchanged as the value of a line.
///
/// The same rules as [`is_valid_key`] apply: an empty value reads back as a
/// section header, and surrounding whitespace is trimmed on load.
pub fn is_valid_value(value: &str) -> bool {
    is_valid_key(value)
}

fn invalid_sequence(line: &str, line_num: usize) -> ConfigError {
    ConfigError::structural(line_num, format!("invalid sequence: {}", line))
}
