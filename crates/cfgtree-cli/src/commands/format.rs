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

//! Format command - re-indentation to canonical form

use super::{load_document_with, write_output};
use crate::error::CliError;
use cfgtree_core::ConfigOptions;
use std::fs;
use std::path::PathBuf;

/// Re-serialize a config file with `indent` spaces per level.
///
/// Key lines are re-indented and colon spacing kept; comments and blank
/// lines are written as found. With `check` set nothing is written and the
/// command fails when the file differs from its formatted form.
///
/// # Examples
///
/// ```no_run
/// use cfgtree_cli::commands::format;
///
/// # fn main() -> Result<(), cfgtree_cli::error::CliError> {
/// // Format to stdout
/// format("app.yml", None, false, 2)?;
///
/// // Check only
/// format("app.yml", None, true, 4)?;
/// # Ok(())
/// # }
/// ```
pub fn format(file: &str, output: Option<&str>, check: bool, indent: usize) -> Result<(), CliError> {
    let options = ConfigOptions::builder().spaces_per_indent(indent).build();
    let doc = load_document_with(file, options)?;
    let formatted = doc.save_to_text();

    if check {
        let content = fs::read_to_string(file).map_err(|e| CliError::io_error(file, e))?;
        let original = content.strip_prefix('\u{FEFF}').unwrap_or(&content);
        if original.replace("\r\n", "\n") != formatted {
            return Err(CliError::NotCanonical {
                path: PathBuf::from(file),
            });
        }
        println!("File is in canonical form");
        Ok(())
    } else {
        write_output(&formatted, output)
    }
}
