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

//! The config document: ordered tree plus flat dotted-path index.
//!
//! The tree drives serialization; the index answers lookups. Every mutation
//! updates both before returning, so for each indexed path there is exactly
//! one reachable key node holding that value, and every value-bearing key
//! node is indexed under its path.

use crate::lex::is_valid_value;
use crate::node::{BlankNode, CommentNode, KeyNode, Node, NodeId};
use crate::options::ConfigOptions;
use crate::path::{join_path, split_path};
use crate::tree::Tree;
use std::collections::BTreeMap;

/// Dotted path -> value-bearing key node.
pub(crate) type FlatIndex = BTreeMap<String, NodeId>;

/// A parsed config file.
///
/// # Examples
///
/// ```
/// use cfgtree_core::Document;
///
/// let mut doc = Document::new();
/// doc.load_from_text("# service\nserver:\n  host: localhost # dev\n  port: 80").unwrap();
///
/// assert_eq!(doc.get("server.port"), Some("80"));
/// assert_eq!(doc.put("server.port", "8080"), Some("80".to_string()));
///
/// assert_eq!(
///     doc.save_to_text(),
///     "# service\nserver:\n  host: localhost # dev\n  port: 8080"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub(crate) tree: Tree,
    pub(crate) index: FlatIndex,
    pub(crate) options: ConfigOptions,
}

impl Document {
    /// Create an empty document with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with the given options.
    pub fn with_options(options: ConfigOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The options in effect.
    pub fn options(&self) -> &ConfigOptions {
        &self.options
    }

    /// Spaces written per nesting level.
    pub fn spaces_per_indent(&self) -> usize {
        self.options.spaces_per_indent
    }

    /// Change the spaces written per nesting level. Existing comments and
    /// blank runs keep their literal indentation.
    ///
    /// Zero would write every key at column 0 and flatten the document, so it
    /// is raised to one.
    pub fn set_spaces_per_indent(&mut self, spaces: usize) {
        self.options.spaces_per_indent = spaces.max(1);
    }

    /// The underlying tree, for structural inspection.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    // ==================== Read accessors ====================

    /// Look up the value at a dotted path. The path is an opaque index key.
    pub fn get(&self, path: &str) -> Option<&str> {
        let id = self.index.get(path)?;
        self.tree.key_node(*id)?.value()
    }

    /// Look up a value, falling back to `default`.
    pub fn get_or_default<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
        self.get(path).unwrap_or(default)
    }

    /// Check if a value is stored at the path.
    pub fn contains_key(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Check if any path holds this value.
    pub fn contains_value(&self, value: &str) -> bool {
        self.values().any(|v| v == value)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if no values are stored. Comments and blank lines don't count.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All value paths, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.keys().map(String::as_str)
    }

    /// All values, ordered by path.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries().map(|(_, v)| v)
    }

    /// All `(path, value)` pairs, in sorted path order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.index.iter().filter_map(|(path, id)| {
            let value = self.tree.key_node(*id)?.value()?;
            Some((path.as_str(), value))
        })
    }

    /// Owned snapshot of every `(path, value)` pair.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// The key node a path resolves to, valued or not.
    pub fn node_at(&self, path: &str) -> Option<&KeyNode> {
        let id = match self.index.get(path) {
            Some(id) => *id,
            None => self.tree.resolve(&split_path(path)?)?,
        };
        self.tree.key_node(id)
    }

    // ==================== Mutation API ====================

    /// Set the value at a dotted path, creating missing section nodes.
    ///
    /// Returns the previous value. Nothing changes and `None` is returned
    /// when the path is empty, has an empty segment such as `"a..b"`, or has
    /// a segment that could not be read back as a key; unlike
    /// [`load_from_text`](Self::load_from_text) this is not an error.
    ///
    /// The same applies to a value that would not load back unchanged: an
    /// empty value, one with surrounding whitespace, or one containing `:`,
    /// `#` or a line break. See [`is_valid_value`](crate::lex::is_valid_value).
    pub fn put(&mut self, path: &str, value: impl Into<String>) -> Option<String> {
        self.put_with_comment(path, value, None)
    }

    /// Like [`put`](Self::put), also setting a trailing comment.
    ///
    /// A comment starting with `#` (after optional spaces) is kept as is,
    /// with one space added in front if it has none. Any other text is
    /// written as ` # text`. `None`, an empty string or text with a line
    /// break leaves an existing comment untouched.
    pub fn put_with_comment(
        &mut self,
        path: &str,
        value: impl Into<String>,
        comment: Option<&str>,
    ) -> Option<String> {
        let value = value.into();
        if !is_valid_value(&value) {
            return None;
        }
        let id = match self.index.get(path) {
            Some(id) => *id,
            None => self.ensure_path(path)?,
        };

        let node = self.tree.key_node_mut(id)?;
        // A bare `key:` header gains the usual single space once it holds a value
        if node.value.is_none() && node.colon_space == 0 {
            node.colon_space = 1;
        }
        let previous = node.value.replace(value);
        let comment = comment.filter(|c| !c.is_empty() && !c.contains(['\n', '\r']));
        if let Some(comment) = comment {
            node.comment = Some(normalize_comment(comment));
        }
        self.index.insert(path.to_string(), id);
        previous
    }

    /// Insert every pair, in iteration order.
    pub fn put_all<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (path, value) in entries {
            self.put(path.as_ref(), value);
        }
    }

    /// Clear the value at a path, keeping the node and all of its children.
    ///
    /// Child values stay reachable under their own paths, and the line is
    /// written as a bare `key:` from then on. Returns the previous value; a
    /// missing path or an empty one is a no-op.
    pub fn remove(&mut self, path: &str) -> Option<String> {
        split_path(path)?;
        let id = self.index.remove(path)?;
        let node = self.tree.key_node_mut(id)?;
        node.colon_space = 0;
        node.value.take()
    }

    /// Delete the node at a path together with its whole subtree.
    ///
    /// Every value below the node leaves the index as well. Returns the value
    /// that was at `path`; a missing path or an empty one is a no-op.
    pub fn kill(&mut self, path: &str) -> Option<String> {
        let segments = split_path(path)?;
        let target = self
            .tree
            .resolve(&segments)
            .or_else(|| self.index.get(path).copied())?;
        let previous = self.tree.key_node(target)?.value.clone();

        self.purge_index(target, path);
        self.tree.remove_subtree(target);
        previous
    }

    /// Append a standalone comment line at the end of the document.
    ///
    /// The text is written after `indent_level * spaces_per_indent` spaces and
    /// a `#`; include any space wanted after the `#` in `text`.
    pub fn add_comment(&mut self, text: &str, indent_level: usize) {
        let indent = " ".repeat(indent_level * self.options.spaces_per_indent);
        let line = format!("{}#{}", indent, text);
        self.tree
            .push(Tree::ROOT, Node::Comment(CommentNode::new(line)));
    }

    /// Append `count` blank lines at the end of the document, each holding
    /// `indent_level * spaces_per_indent` spaces. A count of zero is a no-op.
    pub fn add_blank_lines(&mut self, count: usize, indent_level: usize) {
        if count == 0 {
            return;
        }
        let indent = indent_level * self.options.spaces_per_indent;
        self.tree
            .push(Tree::ROOT, Node::Blank(BlankNode::new(count, indent)));
    }

    /// Remove every key, comment and blank line.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.index.clear();
    }

    /// Walk the path from the root, creating bare `key:` nodes as needed.
    fn ensure_path(&mut self, path: &str) -> Option<NodeId> {
        let segments = split_path(path)?;
        let mut current = Tree::ROOT;
        for segment in segments {
            current = match self.tree.child_by_key(current, segment) {
                Some(id) => id,
                None => self
                    .tree
                    .push(current, Node::Key(KeyNode::new(segment))),
            };
        }
        Some(current)
    }

    /// Drop index entries for `root` and every key node below it.
    fn purge_index(&mut self, root: NodeId, root_path: &str) {
        let mut pending = vec![(root, root_path.to_string())];
        while let Some((id, path)) = pending.pop() {
            let Some(node) = self.tree.key_node(id) else {
                continue;
            };
            if self.index.get(&path) == Some(&id) {
                self.index.remove(&path);
            }
            for &child in node.children() {
                if let Some(child_node) = self.tree.key_node(child) {
                    pending.push((child, join_path(&path, child_node.key())));
                }
            }
        }
    }
}

fn normalize_comment(comment: &str) -> String {
    if comment.trim_start_matches(' ').starts_with('#') {
        if comment.starts_with(' ') {
            comment.to_string()
        } else {
            format!(" {}", comment)
        }
    } else {
        format!(" # {}", comment)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Document {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (path, value) in self.entries() {
            map.serialize_entry(path, value)?;
        }
        map.end()
    }
}
