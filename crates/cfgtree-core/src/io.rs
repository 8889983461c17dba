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

//! Load and save entry points.
//!
//! A load replaces the whole document. It either succeeds completely or
//! leaves the previous tree and index untouched.

use crate::document::Document;
use crate::error::{ConfigError, ConfigResult};
use crate::parser::parse_lines;
use crate::preprocess::preprocess;
use crate::writer::Writer;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, warn};

impl Document {
    /// Replace the document with the contents of a reader.
    ///
    /// The reader is consumed to the end and must yield UTF-8.
    pub fn load<R: Read>(&mut self, reader: R) -> ConfigResult<()> {
        let max = self.options.limits.max_file_size;
        let mut text = String::new();
        reader
            .take(max.saturating_add(1) as u64)
            .read_to_string(&mut text)?;
        self.load_str(&text)
    }

    /// Replace the document with the contents of a file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ConfigError::usage("file name must not be empty"));
        }
        if !path.is_file() {
            return Err(ConfigError::not_found(path));
        }
        debug!(path = %path.display(), "loading config file");
        self.load(File::open(path)?)
    }

    /// Replace the document with parsed text.
    ///
    /// Empty text is rejected; use [`clear`](Self::clear) for an empty document.
    pub fn load_from_text(&mut self, text: &str) -> ConfigResult<()> {
        if text.is_empty() {
            return Err(ConfigError::usage("text must not be empty"));
        }
        self.load_str(text)
    }

    fn load_str(&mut self, text: &str) -> ConfigResult<()> {
        let parsed = preprocess(text, &self.options.limits)
            .and_then(|lines| parse_lines(&lines, &self.options.limits));

        match parsed {
            Ok(parsed) => {
                debug!(
                    lines = parsed.line_count,
                    values = parsed.index.len(),
                    "config loaded"
                );
                self.tree = parsed.tree;
                self.index = parsed.index;
                Ok(())
            }
            Err(err) => {
                warn!(
                    line = ?err.line(),
                    kind = %err.kind(),
                    "config load aborted, keeping previous contents"
                );
                Err(err)
            }
        }
    }

    /// Write the serialized document to a writer.
    pub fn save<W: Write>(&self, mut writer: W) -> ConfigResult<()> {
        let text = self.save_to_text();
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        debug!(bytes = text.len(), "config saved");
        Ok(())
    }

    /// Write the serialized document to a file, creating parent directories.
    pub fn save_file(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ConfigError::usage("file name must not be empty"));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        debug!(path = %path.display(), "saving config file");
        self.save(File::create(path)?)
    }

    /// Serialize the document.
    ///
    /// Lines are joined with `\n`; there is no newline after the last line.
    pub fn save_to_text(&self) -> String {
        Writer::new(self.options.spaces_per_indent).write_tree(&self.tree)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ConfigErrorKind;
    use crate::{ConfigOptions, Document};

    #[test]
    fn test_load_from_text_round_trip() {
        let text = "# header\n\nserver:\n  host: localhost # dev\n\n  port:   80\n";
        let mut doc = Document::new();
        doc.load_from_text(text).unwrap();
        assert_eq!(doc.save_to_text(), text);
    }

    #[test]
    fn test_load_from_text_empty_is_usage_error() {
        let err = Document::new().load_from_text("").unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::Usage);
    }

    #[test]
    fn test_failed_load_keeps_previous_state() {
        let mut doc = Document::new();
        doc.load_from_text("a: 1").unwrap();
        assert!(doc.load_from_text("b: 2\nc: 3: 4").is_err());
        assert_eq!(doc.get("a"), Some("1"));
        assert_eq!(doc.get("b"), None);
        assert_eq!(doc.save_to_text(), "a: 1");
    }

    #[test]
    fn test_load_replaces_previous_state() {
        let mut doc = Document::new();
        doc.load_from_text("a: 1").unwrap();
        doc.load_from_text("b: 2").unwrap();
        assert_eq!(doc.get("a"), None);
        assert_eq!(doc.save_to_text(), "b: 2");
    }

    #[test]
    fn test_load_reader() {
        let mut doc = Document::new();
        doc.load("a:\n  b: c".as_bytes()).unwrap();
        assert_eq!(doc.get("a.b"), Some("c"));
    }

    #[test]
    fn test_load_reader_rejects_oversize() {
        let opts = ConfigOptions::builder().max_file_size(4).build();
        let mut doc = Document::with_options(opts);
        let err = doc.load("a: 12345".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::LimitExceeded);
    }

    #[test]
    fn test_load_reader_invalid_utf8() {
        let mut doc = Document::new();
        let err = doc.load(&[0x61, 0x3a, 0x20, 0xff][..]).unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::Io);
    }

    #[test]
    fn test_save_to_writer() {
        let mut doc = Document::new();
        doc.put("a", "1");
        let mut out = Vec::new();
        doc.save(&mut out).unwrap();
        assert_eq!(out, b"a: 1");
    }

    #[test]
    fn test_empty_paths_are_usage_errors() {
        let mut doc = Document::new();
        assert_eq!(doc.load_file("").unwrap_err().kind(), ConfigErrorKind::Usage);
        assert_eq!(doc.save_file("").unwrap_err().kind(), ConfigErrorKind::Usage);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = Document::new()
            .load_file("/nonexistent/dir/config.yml")
            .unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::NotFound);
    }
}
