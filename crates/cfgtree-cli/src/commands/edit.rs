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

//! Editing commands: set, remove, kill
//!
//! Each command loads the file, applies one mutation and saves the result in
//! place, or to `output` when given. Comments and layout are kept.

use super::{load_document, save_document};
use crate::error::CliError;
use cfgtree_core::lex::is_valid_value;
use cfgtree_core::path::split_path;
use tracing::debug;

fn check_key(key: &str) -> Result<(), CliError> {
    split_path(key)
        .map(|_| ())
        .ok_or_else(|| CliError::invalid_key(key))
}

/// Set the value at a dotted key, creating missing sections.
///
/// # Examples
///
/// ```no_run
/// use cfgtree_cli::commands::set;
///
/// # fn main() -> Result<(), cfgtree_cli::error::CliError> {
/// set("app.yml", "server.port", "8080", Some("changed"), None)?;
/// # Ok(())
/// # }
/// ```
pub fn set(
    file: &str,
    key: &str,
    value: &str,
    comment: Option<&str>,
    output: Option<&str>,
) -> Result<(), CliError> {
    check_key(key)?;
    if !is_valid_value(value) {
        return Err(CliError::invalid_value(value));
    }
    let mut doc = load_document(file)?;
    let previous = doc.put_with_comment(key, value, comment);
    debug!(key, ?previous, "value set");
    save_document(&doc, file, output)
}

/// Clear the value at a dotted key. Nested keys are kept.
pub fn remove(file: &str, key: &str, output: Option<&str>) -> Result<(), CliError> {
    check_key(key)?;
    let mut doc = load_document(file)?;
    if !doc.contains_key(key) {
        return Err(CliError::key_not_found(key));
    }
    doc.remove(key);
    save_document(&doc, file, output)
}

/// Delete a key with everything nested below it.
pub fn kill(file: &str, key: &str, output: Option<&str>) -> Result<(), CliError> {
    check_key(key)?;
    let mut doc = load_document(file)?;
    if doc.node_at(key).is_none() {
        return Err(CliError::key_not_found(key));
    }
    let before = doc.len();
    doc.kill(key);
    debug!(key, purged = before - doc.len(), "key killed");
    save_document(&doc, file, output)
}
