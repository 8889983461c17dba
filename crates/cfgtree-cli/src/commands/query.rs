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

//! Read-only commands: get, keys, entries

use super::load_document;
use crate::error::CliError;

/// Print the value stored at a dotted key.
pub fn get(file: &str, key: &str) -> Result<(), CliError> {
    let doc = load_document(file)?;
    let value = doc.get(key).ok_or_else(|| CliError::key_not_found(key))?;
    println!("{}", value);
    Ok(())
}

/// Print every dotted key path, one per line, in sorted order.
pub fn keys(file: &str) -> Result<(), CliError> {
    let doc = load_document(file)?;
    for key in doc.keys() {
        println!("{}", key);
    }
    Ok(())
}

/// Print every `key = value` pair, or a JSON object with `json` set.
pub fn entries(file: &str, json: bool) -> Result<(), CliError> {
    let doc = load_document(file)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        for (key, value) in doc.entries() {
            println!("{} = {}", key, value);
        }
    }
    Ok(())
}
