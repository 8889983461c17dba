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

//! Validate command - config file structure validation

use super::load_document;
use crate::error::CliError;
use colored::Colorize;

/// Validate a config file.
///
/// Loads the file and prints a short summary. On failure the file is marked
/// with `✗` on stdout and the load error is returned.
///
/// # Examples
///
/// ```no_run
/// use cfgtree_cli::commands::validate;
///
/// # fn main() -> Result<(), cfgtree_cli::error::CliError> {
/// validate("app.yml")?;
/// # Ok(())
/// # }
/// ```
pub fn validate(file: &str) -> Result<(), CliError> {
    match load_document(file) {
        Ok(doc) => {
            println!("{} {}", "✓".green().bold(), file);
            println!("  Values: {}", doc.len());
            println!("  Nodes: {}", doc.tree().len());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(e)
        }
    }
}
