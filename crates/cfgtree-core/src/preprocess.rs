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

//! Input preprocessing: size checks and line splitting.

use crate::error::{ConfigError, ConfigResult};
use crate::limits::Limits;

/// Split text into `(line_number, line)` pairs.
///
/// This handles:
/// - BOM skipping
/// - CRLF line endings (one trailing `\r` is dropped per line)
/// - Size and line length limits
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line, so
/// text that ends in `\n` reloads to a trailing blank run and serializes back
/// to the same bytes.
pub fn preprocess<'a>(text: &'a str, limits: &Limits) -> ConfigResult<Vec<(usize, &'a str)>> {
    // Don't echo the input size back
    if text.len() > limits.max_file_size {
        return Err(ConfigError::input_too_large(limits.max_file_size));
    }

    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    let estimated_lines = memchr::memchr_iter(b'\n', text.as_bytes()).count() + 1;
    let mut lines = Vec::with_capacity(estimated_lines);

    for (idx, raw) in text.split('\n').enumerate() {
        let line_num = idx + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.len() > limits.max_line_length {
            return Err(ConfigError::limit_exceeded(
                line_num,
                format!(
                    "line too long: exceeds limit of {} bytes",
                    limits.max_line_length
                ),
            ));
        }
        lines.push((line_num, line));
    }

    Ok(lines)
}
