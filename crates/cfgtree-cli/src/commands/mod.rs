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

//! CLI command implementations

mod edit;
mod format;
mod query;
mod validate;

pub use edit::{kill, remove, set};
pub use format::format;
pub use query::{entries, get, keys};
pub use validate::validate;

use crate::error::CliError;
use cfgtree_core::{ConfigOptions, Document};
use std::fs;
use std::io::{self, Write};

/// Load a config file with default options.
pub fn load_document(file: &str) -> Result<Document, CliError> {
    load_document_with(file, ConfigOptions::default())
}

/// Load a config file with the given options.
pub fn load_document_with(file: &str, options: ConfigOptions) -> Result<Document, CliError> {
    let mut doc = Document::with_options(options);
    doc.load_file(file)?;
    Ok(doc)
}

/// Save an edited document to `output`, or back to `file` when absent.
pub fn save_document(doc: &Document, file: &str, output: Option<&str>) -> Result<(), CliError> {
    doc.save_file(output.unwrap_or(file))?;
    Ok(())
}

/// Write content to a file or stdout.
///
/// # Examples
///
/// ```no_run
/// use cfgtree_cli::commands::write_output;
///
/// # fn main() -> Result<(), cfgtree_cli::error::CliError> {
/// write_output("a: 1\n", None)?;
/// write_output("a: 1\n", Some("out.yml"))?;
/// # Ok(())
/// # }
/// ```
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| {
                    if content.ends_with('\n') || content.is_empty() {
                        Ok(())
                    } else {
                        stdout.write_all(b"\n")
                    }
                })
                .map_err(|e| CliError::io_error("<stdout>", e))
        }
    }
}
