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

//! Read-only commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Commands that inspect a config file without changing it.
#[derive(Subcommand)]
pub enum QueryCommands {
    /// Validate a config file
    ///
    /// Loads the file and reports the number of values and nodes, or the
    /// first malformed line.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Print the value at a dotted key
    Get {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Dotted key path, e.g. server.http.port
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// List every dotted key that holds a value
    Keys {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Print all key/value pairs
    Entries {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Print a JSON object instead of `key = value` lines
        #[arg(long)]
        json: bool,
    },
}

impl QueryCommands {
    /// Execute the query command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            QueryCommands::Validate { file } => commands::validate(&file),
            QueryCommands::Get { file, key } => commands::get(&file, &key),
            QueryCommands::Keys { file } => commands::keys(&file),
            QueryCommands::Entries { file, json } => commands::entries(&file, json),
        }
    }
}
