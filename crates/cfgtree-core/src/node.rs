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

//! Node types for the config tree.

use std::collections::HashMap;

/// Stable handle to a node stored in a [`Tree`](crate::Tree).
///
/// Handles are only meaningful for the tree that issued them and become
/// stale once the node is killed or the document is reloaded or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// One structural unit of a config file.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `key: value` line plus nested children.
    Key(KeyNode),
    /// Run of standalone comment lines.
    Comment(CommentNode),
    /// Run of blank lines.
    Blank(BlankNode),
}

impl Node {
    /// Get as key node if this is one.
    pub fn as_key(&self) -> Option<&KeyNode> {
        match self {
            Self::Key(k) => Some(k),
            _ => None,
        }
    }

    pub(crate) fn as_key_mut(&mut self) -> Option<&mut KeyNode> {
        match self {
            Self::Key(k) => Some(k),
            _ => None,
        }
    }

    /// Get as comment node if this is one.
    pub fn as_comment(&self) -> Option<&CommentNode> {
        match self {
            Self::Comment(c) => Some(c),
            _ => None,
        }
    }

    /// Get as blank node if this is one.
    pub fn as_blank(&self) -> Option<&BlankNode> {
        match self {
            Self::Blank(b) => Some(b),
            _ => None,
        }
    }

    /// Check if this is a key node.
    pub fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }
}

/// A key with an optional value, trailing comment and children.
///
/// The root of every tree is a key node with an empty key and no value; it is
/// never written out, only its children are.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyNode {
    pub(crate) key: String,
    pub(crate) value: Option<String>,
    pub(crate) comment: Option<String>,
    pub(crate) colon_space: usize,
    pub(crate) children: Vec<NodeId>,
    /// Local key name -> child, for every key child in `children`.
    pub(crate) key_children: HashMap<String, NodeId>,
}

impl KeyNode {
    /// Create a valueless key node written as a bare `key:`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// The local key name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value, or `None` for a section header.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The trailing comment, including the spaces before `#`.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Number of spaces written between the colon and the value.
    pub fn colon_space(&self) -> usize {
        self.colon_space
    }

    /// Children in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Look up a direct key child by its local name.
    pub fn child(&self, key: &str) -> Option<NodeId> {
        self.key_children.get(key).copied()
    }

    /// Check if this node carries a value.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

/// One or more consecutive standalone comment lines, newline-joined.
///
/// The text is stored verbatim, including the indentation in front of each `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    pub(crate) text: String,
}

impl CommentNode {
    /// Create a comment node from its literal text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The literal comment text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of lines this node renders to.
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    pub(crate) fn append_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }
}

/// A run of blank lines sharing one indentation width.
///
/// Two runs are equal only when both the count and the width match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankNode {
    pub(crate) count: usize,
    pub(crate) indent: usize,
}

impl BlankNode {
    /// Create a blank run.
    pub fn new(count: usize, indent: usize) -> Self {
        Self { count, indent }
    }

    /// Number of blank lines in the run.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of spaces written on each line.
    pub fn indent(&self) -> usize {
        self.indent
    }
}
