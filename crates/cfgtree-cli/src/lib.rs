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

//! cfgtree CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **validate**: Check that a file loads
//! - **get** / **keys** / **entries**: Query values by dotted path
//! - **set** / **remove** / **kill**: Edit a file while keeping its comments
//! - **format**: Re-indent key lines
//!
//! # Examples
//!
//! ```no_run
//! use cfgtree_cli::commands::{get, set};
//!
//! # fn main() -> Result<(), cfgtree_cli::error::CliError> {
//! set("app.yml", "server.port", "8080", None, None)?;
//! get("app.yml", "server.port")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
