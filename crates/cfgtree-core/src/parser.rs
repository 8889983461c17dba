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

//! Indentation resolver: classified lines in, tree and flat index out.
//!
//! Structure is recovered purely from leading-space counts. The resolver keeps
//! a stack of ancestor frames, each recording the indent of the line *before*
//! the ancestor's first child. For every key line:
//!
//! - deeper than the previous line: the previous key becomes an ancestor
//! - shallower: frames are popped while the line is not deeper than their
//!   recorded indent, possibly several at once
//! - equal: sibling of the previous line
//!
//! Comment and blank lines take over the previous line's indent, so they never
//! open or close a level. They are held back until the next key line has been
//! placed and then attached just before it, under the same parent; this keeps
//! a comment between a section header and its first child inside the section.
//! Consecutive comment lines collapse into one node, as do consecutive blank
//! lines of equal width.
//!
//! A key whose own name contains a `.` can reach the same dotted path as a
//! nested key. Two different valued nodes on one path are a structural error.

use crate::document::FlatIndex;
use crate::error::{ConfigError, ConfigResult};
use crate::lex::{classify_line, KeyLine, Line};
use crate::limits::Limits;
use crate::node::{BlankNode, CommentNode, KeyNode, Node, NodeId};
use crate::path::join_path;
use crate::tree::Tree;
use tracing::trace;

/// Result of a successful parse.
#[derive(Debug)]
pub(crate) struct Parsed {
    pub tree: Tree,
    pub index: FlatIndex,
    pub line_count: usize,
}

// --- Context Stack ---

#[derive(Debug)]
struct Frame {
    /// Indent of the line preceding this ancestor's first child.
    threshold: usize,
    node: NodeId,
    /// Dotted path of `node`; empty for the root.
    path: String,
}

struct Resolver<'l> {
    limits: &'l Limits,
    tree: Tree,
    index: FlatIndex,
    /// Root frame first; it is never popped.
    stack: Vec<Frame>,
    prev_indent: usize,
    /// Most recent key node and its path, the candidate next ancestor.
    prev_key: Option<(NodeId, String)>,
    /// Comment and blank runs waiting for the next key line.
    pending: Vec<Node>,
}

/// Build a tree and flat index from preprocessed lines.
///
/// Any malformed line aborts the parse; nothing partial is returned.
pub(crate) fn parse_lines(lines: &[(usize, &str)], limits: &Limits) -> ConfigResult<Parsed> {
    let mut resolver = Resolver::new(limits);

    for &(line_num, line) in lines {
        match classify_line(line, line_num)? {
            Line::Key(key_line) => resolver.key_line(key_line, line_num)?,
            Line::Comment(text) => resolver.comment_line(text),
            Line::Blank { indent } => resolver.blank_line(indent),
        }
    }

    // Trailing runs stay under the innermost open section
    let parent = resolver.current().node;
    resolver.flush_pending(parent);

    Ok(Parsed {
        tree: resolver.tree,
        index: resolver.index,
        line_count: lines.len(),
    })
}

impl<'l> Resolver<'l> {
    fn new(limits: &'l Limits) -> Self {
        Self {
            limits,
            tree: Tree::new(),
            index: FlatIndex::new(),
            stack: vec![Frame {
                threshold: 0,
                node: Tree::ROOT,
                path: String::new(),
            }],
            prev_indent: 0,
            prev_key: None,
            pending: Vec::new(),
        }
    }

    fn current(&self) -> &Frame {
        // The root frame is never popped
        &self.stack[self.stack.len() - 1]
    }

    fn key_line(&mut self, line: KeyLine<'_>, line_num: usize) -> ConfigResult<()> {
        self.resolve_structure(line.indent);

        let depth = self.stack.len() - 1;
        if depth > self.limits.max_indent_depth {
            return Err(ConfigError::limit_exceeded(
                line_num,
                format!(
                    "nesting depth {} exceeds limit {}",
                    depth, self.limits.max_indent_depth
                ),
            ));
        }

        let parent = self.current().node;
        let path = join_path(&self.current().path, line.key);
        let value = (!line.value.is_empty()).then(|| line.value.to_string());
        self.flush_pending(parent);

        let id = match self.tree.child_by_key(parent, line.key) {
            // Duplicate sibling: the later line updates the existing node
            Some(existing) => {
                if let Some(node) = self.tree.key_node_mut(existing) {
                    node.colon_space = line.colon_space;
                    node.comment = line.comment.map(str::to_string);
                    node.value = value.clone();
                }
                existing
            }
            None => {
                let mut node = KeyNode::new(line.key);
                node.colon_space = line.colon_space;
                node.comment = line.comment.map(str::to_string);
                node.value = value.clone();
                self.tree.push(parent, Node::Key(node))
            }
        };

        let owner = self.index.get(&path).copied();
        match owner {
            // `a.b: 1` and `a:\n  b: 2` both claim the path `a.b`
            Some(owner) if owner != id && value.is_some() => {
                return Err(ConfigError::structural(
                    line_num,
                    format!("duplicate path: {}", path),
                ));
            }
            Some(owner) if owner == id && value.is_none() => {
                self.index.remove(&path);
            }
            _ if value.is_some() => {
                self.index.insert(path.clone(), id);
            }
            _ => {}
        }

        self.prev_indent = line.indent;
        self.prev_key = Some((id, path));
        Ok(())
    }

    fn comment_line(&mut self, text: &str) {
        if let Some(Node::Comment(run)) = self.pending.last_mut() {
            run.append_line(text);
            return;
        }
        self.pending.push(Node::Comment(CommentNode::new(text)));
    }

    fn blank_line(&mut self, indent: usize) {
        if let Some(Node::Blank(run)) = self.pending.last_mut() {
            if run.indent == indent {
                run.count += 1;
                return;
            }
        }
        self.pending.push(Node::Blank(BlankNode::new(1, indent)));
    }

    fn flush_pending(&mut self, parent: NodeId) {
        for node in self.pending.drain(..) {
            self.tree.push(parent, node);
        }
    }

    fn resolve_structure(&mut self, indent: usize) {
        if indent > self.prev_indent {
            // Without an earlier key the line nests under the current ancestor
            let (node, path) = match &self.prev_key {
                Some((id, path)) => (*id, path.clone()),
                None => (self.current().node, self.current().path.clone()),
            };
            trace!(indent, threshold = self.prev_indent, path = %path, "push ancestor");
            self.stack.push(Frame {
                threshold: self.prev_indent,
                node,
                path,
            });
        } else if indent < self.prev_indent {
            while self.stack.len() > 1 && indent <= self.current().threshold {
                let frame = self.stack.pop();
                trace!(indent, path = ?frame.map(|f| f.path), "pop ancestor");
            }
        }
    }
}
