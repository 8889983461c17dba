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

//! Arena storage for the ordered config tree.
//!
//! Nodes live in a slot vector and refer to each other by [`NodeId`]. Slot 0
//! always holds the root. Detached subtrees give their slots back to a free
//! list so repeated put/kill cycles don't grow the arena.

use crate::node::{KeyNode, Node, NodeId};

#[derive(Debug, Clone)]
struct Slot {
    node: Node,
    parent: Option<NodeId>,
}

/// Ordered tree of config nodes.
#[derive(Debug, Clone)]
pub struct Tree {
    slots: Vec<Option<Slot>>,
    free: Vec<usize>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// The root node handle.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a tree holding only the root.
    pub fn new() -> Self {
        Self {
            slots: vec![Some(Slot {
                node: Node::Key(KeyNode::root()),
                parent: None,
            })],
            free: Vec::new(),
        }
    }

    /// The root node handle.
    #[inline]
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Get a node by handle.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0)?.as_ref().map(|slot| &slot.node)
    }

    /// Get a key node by handle.
    #[inline]
    pub fn key_node(&self, id: NodeId) -> Option<&KeyNode> {
        self.get(id)?.as_key()
    }

    pub(crate) fn key_node_mut(&mut self, id: NodeId) -> Option<&mut KeyNode> {
        self.get_mut(id)?.as_key_mut()
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0)?.as_mut().map(|slot| &mut slot.node)
    }

    /// Parent of a node; `None` for the root or a stale handle.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0)?.as_ref()?.parent
    }

    /// Children of a node in document order. Only key nodes have children.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.key_node(id).map(KeyNode::children).unwrap_or(&[])
    }

    /// Look up a direct key child by its local name.
    pub fn child_by_key(&self, parent: NodeId, key: &str) -> Option<NodeId> {
        self.key_node(parent)?.child(key)
    }

    /// Follow a chain of key names from the root.
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Option<NodeId> {
        segments
            .iter()
            .try_fold(Self::ROOT, |node, seg| self.child_by_key(node, seg.as_ref()))
    }

    /// Number of live nodes, root excluded.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len() - 1
    }

    /// Check if the root has no children.
    pub fn is_empty(&self) -> bool {
        self.children(Self::ROOT).is_empty()
    }

    /// Store a node without attaching it.
    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        let slot = Some(Slot { node, parent: None });
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = slot;
                NodeId(idx)
            }
            None => {
                self.slots.push(slot);
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// Key children are also registered in the parent's keyed index. Callers
    /// check for an existing child with the same key first.
    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let key = self.key_node(child).map(|k| k.key.clone());
        if let Some(slot) = self.slots.get_mut(child.0).and_then(Option::as_mut) {
            slot.parent = Some(parent);
        }
        if let Some(parent_node) = self.key_node_mut(parent) {
            parent_node.children.push(child);
            if let Some(key) = key {
                parent_node.key_children.insert(key, child);
            }
        }
    }

    /// Allocate `node` and append it under `parent`.
    pub(crate) fn push(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.alloc(node);
        self.append_child(parent, id);
        id
    }

    /// Unlink `child` from its parent and release its whole subtree.
    pub(crate) fn remove_subtree(&mut self, child: NodeId) {
        if child == Self::ROOT {
            return;
        }
        if let Some(parent) = self.parent(child) {
            let key = self.key_node(child).map(|k| k.key.clone());
            if let Some(parent_node) = self.key_node_mut(parent) {
                parent_node.children.retain(|&c| c != child);
                if let Some(key) = key {
                    if parent_node.key_children.get(&key) == Some(&child) {
                        parent_node.key_children.remove(&key);
                    }
                }
            }
        }

        let mut pending = vec![child];
        while let Some(id) = pending.pop() {
            if let Some(slot) = self.slots.get_mut(id.0).and_then(Option::take) {
                if let Node::Key(k) = slot.node {
                    pending.extend(k.children);
                }
                self.free.push(id.0);
            }
        }
    }

    /// Drop every node except the root.
    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{BlankNode, CommentNode};

    fn key(name: &str) -> Node {
        Node::Key(KeyNode::new(name))
    }

    #[test]
    fn test_new_tree_has_only_root() {
        let tree = Tree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.parent(Tree::ROOT), None);
        assert_eq!(tree.key_node(Tree::ROOT).map(KeyNode::key), Some(""));
    }

    #[test]
    fn test_push_registers_key_child() {
        let mut tree = Tree::new();
        let a = tree.push(Tree::ROOT, key("a"));
        assert_eq!(tree.children(Tree::ROOT), &[a]);
        assert_eq!(tree.child_by_key(Tree::ROOT, "a"), Some(a));
        assert_eq!(tree.parent(a), Some(Tree::ROOT));
    }

    #[test]
    fn test_non_key_children_are_not_indexed() {
        let mut tree = Tree::new();
        let c = tree.push(Tree::ROOT, Node::Comment(CommentNode::new("# x")));
        tree.push(Tree::ROOT, Node::Blank(BlankNode::new(1, 0)));
        assert_eq!(tree.children(Tree::ROOT).len(), 2);
        assert_eq!(tree.child_by_key(Tree::ROOT, "# x"), None);
        assert!(tree.children(c).is_empty());
    }

    #[test]
    fn test_resolve_follows_keys() {
        let mut tree = Tree::new();
        let a = tree.push(Tree::ROOT, key("a"));
        let b = tree.push(a, key("b"));
        assert_eq!(tree.resolve(&["a", "b"]), Some(b));
        assert_eq!(tree.resolve(&["a", "c"]), None);
        assert_eq!(tree.resolve::<&str>(&[]), Some(Tree::ROOT));
    }

    #[test]
    fn test_remove_subtree_unlinks_and_frees() {
        let mut tree = Tree::new();
        let a = tree.push(Tree::ROOT, key("a"));
        let b = tree.push(a, key("b"));
        tree.push(b, key("c"));
        let d = tree.push(Tree::ROOT, key("d"));
        assert_eq!(tree.len(), 4);

        tree.remove_subtree(a);
        assert_eq!(tree.children(Tree::ROOT), &[d]);
        assert_eq!(tree.child_by_key(Tree::ROOT, "a"), None);
        assert!(tree.get(a).is_none());
        assert!(tree.get(b).is_none());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut tree = Tree::new();
        let a = tree.push(Tree::ROOT, key("a"));
        tree.remove_subtree(a);
        let b = tree.push(Tree::ROOT, key("b"));
        assert_eq!(a, b);
        assert_eq!(tree.key_node(b).map(KeyNode::key), Some("b"));
    }

    #[test]
    fn test_remove_root_is_noop() {
        let mut tree = Tree::new();
        tree.push(Tree::ROOT, key("a"));
        tree.remove_subtree(Tree::ROOT);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_clear_resets() {
        let mut tree = Tree::new();
        tree.push(Tree::ROOT, key("a"));
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }
}
