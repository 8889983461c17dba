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

//! Commands that produce a modified file.

use crate::commands;
use crate::error::CliError;
use cfgtree_core::DEFAULT_SPACES_PER_INDENT;
use clap::Subcommand;

/// Commands that rewrite a config file.
///
/// `set`, `remove` and `kill` save in place unless `--output` is given;
/// `format` prints to stdout unless `--output` is given.
#[derive(Subcommand)]
pub enum EditCommands {
    /// Set a value, creating missing sections
    Set {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Dotted key path
        #[arg(value_name = "KEY")]
        key: String,

        /// New value
        #[arg(value_name = "VALUE")]
        value: String,

        /// Trailing comment for the key line
        #[arg(short, long)]
        comment: Option<String>,

        /// Output file path (defaults to rewriting FILE)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Clear a value, keeping nested keys
    Remove {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Dotted key path
        #[arg(value_name = "KEY")]
        key: String,

        /// Output file path (defaults to rewriting FILE)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Delete a key and everything nested below it
    Kill {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Dotted key path
        #[arg(value_name = "KEY")]
        key: String,

        /// Output file path (defaults to rewriting FILE)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Re-indent a config file
    ///
    /// Comments and blank lines are kept exactly; key lines are re-indented
    /// with the given number of spaces per level.
    Format {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Check only (exit 1 if not canonical)
        #[arg(short, long)]
        check: bool,

        /// Spaces per indentation level (at least 1)
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_SPACES_PER_INDENT as u16,
            value_parser = clap::value_parser!(u16).range(1..)
        )]
        indent: u16,
    },
}

impl EditCommands {
    /// Execute the edit command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            EditCommands::Set {
                file,
                key,
                value,
                comment,
                output,
            } => commands::set(&file, &key, &value, comment.as_deref(), output.as_deref()),
            EditCommands::Remove { file, key, output } => {
                commands::remove(&file, &key, output.as_deref())
            }
            EditCommands::Kill { file, key, output } => {
                commands::kill(&file, &key, output.as_deref())
            }
            EditCommands::Format {
                file,
                output,
                check,
                indent,
            } => commands::format(&file, output.as_deref(), check, usize::from(indent)),
        }
    }
}
