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

//! Tree serializer.
//!
//! Emits nodes in document order. Key lines are re-indented at
//! `depth * spaces_per_indent`, followed by the key, the colon, the recorded
//! colon spacing and the value. Comment and blank lines are written with the indentation they were
//! read or created with. Lines are joined with `\n` and no newline follows the
//! last one.

use crate::node::{KeyNode, Node, NodeId};
use crate::tree::Tree;

/// Initial output capacity; most config files fit.
const INITIAL_OUTPUT_BUFFER_CAPACITY: usize = 4096;

/// Serializes a [`Tree`] to text.
pub(crate) struct Writer {
    spaces_per_indent: usize,
    output: String,
    /// No line written yet; suppresses the separator before the first one.
    at_start: bool,
}

impl Writer {
    pub(crate) fn new(spaces_per_indent: usize) -> Self {
        Self {
            // Zero would flatten nesting
            spaces_per_indent: spaces_per_indent.max(1),
            output: String::with_capacity(INITIAL_OUTPUT_BUFFER_CAPACITY),
            at_start: true,
        }
    }

    /// Write every node below the root.
    pub(crate) fn write_tree(mut self, tree: &Tree) -> String {
        // Iterative pre-order walk: (node, key depth)
        let mut pending: Vec<(NodeId, usize)> = tree
            .children(Tree::ROOT)
            .iter()
            .rev()
            .map(|&id| (id, 0))
            .collect();

        while let Some((id, depth)) = pending.pop() {
            match tree.get(id) {
                Some(Node::Key(key)) => {
                    self.write_key(key, depth);
                    pending.extend(key.children().iter().rev().map(|&c| (c, depth + 1)));
                }
                Some(Node::Comment(comment)) => self.write_line(comment.text()),
                Some(Node::Blank(blank)) => {
                    let line = " ".repeat(blank.indent());
                    for _ in 0..blank.count() {
                        self.write_line(&line);
                    }
                }
                None => {}
            }
        }

        self.output
    }

    fn write_key(&mut self, key: &KeyNode, depth: usize) {
        self.begin_line();
        push_spaces(&mut self.output, depth * self.spaces_per_indent);
        self.output.push_str(key.key());
        self.output.push(':');
        push_spaces(&mut self.output, key.colon_space());
        if let Some(value) = key.value() {
            self.output.push_str(value);
        }
        if let Some(comment) = key.comment() {
            self.output.push_str(comment);
        }
    }

    fn write_line(&mut self, line: &str) {
        self.begin_line();
        self.output.push_str(line);
    }

    fn begin_line(&mut self) {
        if self.at_start {
            self.at_start = false;
        } else {
            self.output.push('\n');
        }
    }
}

fn push_spaces(output: &mut String, count: usize) {
    output.extend(std::iter::repeat(' ').take(count));
}
