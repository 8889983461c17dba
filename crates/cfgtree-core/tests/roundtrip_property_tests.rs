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

//! Property-based tests for round-tripping and tree/index consistency.

use cfgtree_core::{Document, NodeId, Tree};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ==================== Generators ====================

/// One generated source line, before layout.
#[derive(Debug, Clone)]
enum GenLine {
    /// Key with depth step (clamped later), optional value and trailing comment.
    Key {
        name: String,
        step: i8,
        colon_space: usize,
        value: Option<String>,
        comment: Option<String>,
    },
    Comment {
        indent: usize,
        text: String,
    },
    Blank {
        width: usize,
    },
}

fn gen_line() -> impl Strategy<Value = GenLine> {
    prop_oneof![
        6 => (
            "[a-z][a-z0-9_]{0,6}",
            -3i8..=1,
            0usize..3,
            proptest::option::of("[A-Za-z0-9_./-]{1,10}"),
            proptest::option::of("[a-z ]{0,8}"),
        )
            .prop_map(|(name, step, colon_space, value, comment)| GenLine::Key {
                name,
                step,
                colon_space,
                value,
                comment,
            }),
        2 => (0usize..8, "[a-z ]{0,12}").prop_map(|(indent, text)| GenLine::Comment { indent, text }),
        1 => (0usize..5).prop_map(|width| GenLine::Blank { width }),
    ]
}

/// Lay lines out as text with `indent_width` spaces per level.
///
/// Key names get a `-<line>` suffix so siblings never collide. With
/// `canonical` set, colon spacing before a value is normalized to one space.
fn layout(lines: &[GenLine], indent_width: usize, canonical: bool) -> String {
    let mut out = Vec::with_capacity(lines.len());
    let mut depth: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        match line {
            GenLine::Key {
                name,
                step,
                colon_space,
                value,
                comment,
            } => {
                let next = match depth {
                    None => 0,
                    Some(d) => (d as i64 + *step as i64).clamp(0, d as i64 + 1) as usize,
                };
                depth = Some(next);

                let mut text = format!("{}{}-{}:", " ".repeat(next * indent_width), name, i);
                match value {
                    Some(value) => {
                        let spaces = if canonical { 1 } else { *colon_space };
                        text.push_str(&" ".repeat(spaces));
                        text.push_str(value);
                    }
                    // Header spacing is kept as read
                    None => text.push_str(&" ".repeat(*colon_space)),
                }
                if let Some(comment) = comment {
                    text.push_str(" # ");
                    text.push_str(comment);
                }
                out.push(text);
            }
            GenLine::Comment { indent, text } => {
                out.push(format!("{}#{}", " ".repeat(*indent), text));
            }
            GenLine::Blank { width } => out.push(" ".repeat(*width)),
        }
    }

    out.join("\n")
}

/// Collect `(path, value)` for every valued key node by walking the tree.
fn walk_values(tree: &Tree) -> BTreeMap<String, String> {
    fn visit(tree: &Tree, id: NodeId, prefix: &str, out: &mut BTreeMap<String, String>) {
        for &child in tree.children(id) {
            if let Some(node) = tree.key_node(child) {
                let path = if prefix.is_empty() {
                    node.key().to_string()
                } else {
                    format!("{}.{}", prefix, node.key())
                };
                if let Some(value) = node.value() {
                    out.insert(path.clone(), value.to_string());
                }
                visit(tree, child, &path, out);
            }
        }
    }

    let mut out = BTreeMap::new();
    visit(tree, Tree::ROOT, "", &mut out);
    out
}

#[derive(Debug, Clone)]
enum Op {
    Put(String, String),
    Remove(String),
    Kill(String),
}

fn gen_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-c]", 1..4).prop_map(|segments| segments.join("."))
}

fn gen_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (gen_path(), "[a-z0-9]{1,6}").prop_map(|(p, v)| Op::Put(p, v)),
        1 => gen_path().prop_map(Op::Remove),
        1 => gen_path().prop_map(Op::Kill),
    ]
}

// ==================== Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: canonical text reproduces byte for byte.
    #[test]
    fn prop_canonical_text_round_trips(lines in prop::collection::vec(gen_line(), 1..40)) {
        let text = layout(&lines, 2, true);
        prop_assume!(!text.is_empty());

        let mut doc = Document::new();
        prop_assert!(doc.load_from_text(&text).is_ok(), "failed to load {:?}", text);
        prop_assert_eq!(doc.save_to_text(), text);
    }

    /// Property: after one save, save(load(text)) is a fixed point.
    #[test]
    fn prop_serialization_is_fixed_point(
        lines in prop::collection::vec(gen_line(), 1..40),
        indent_width in 1usize..6,
    ) {
        let text = layout(&lines, indent_width, false);
        prop_assume!(!text.is_empty());

        let mut doc = Document::new();
        doc.load_from_text(&text).unwrap();
        let first = doc.save_to_text();
        prop_assume!(!first.is_empty());

        let mut again = Document::new();
        again.load_from_text(&first).unwrap();
        prop_assert_eq!(again.save_to_text(), first.clone());
        prop_assert_eq!(again.to_map(), doc.to_map());
    }

    /// Property: the flat index and the tree always agree.
    #[test]
    fn prop_index_matches_tree_after_mutations(
        lines in prop::collection::vec(gen_line(), 1..20),
        ops in prop::collection::vec(gen_op(), 0..30),
    ) {
        let text = layout(&lines, 2, true);
        prop_assume!(!text.is_empty());

        let mut doc = Document::new();
        doc.load_from_text(&text).unwrap();
        prop_assert_eq!(walk_values(doc.tree()), doc.to_map());

        for op in &ops {
            match op {
                Op::Put(path, value) => {
                    let before = doc.get(path).map(str::to_string);
                    prop_assert_eq!(doc.put(path, value.as_str()), before);
                    prop_assert_eq!(doc.get(path), Some(value.as_str()));
                }
                Op::Remove(path) => {
                    doc.remove(path);
                    prop_assert_eq!(doc.get(path), None);
                }
                Op::Kill(path) => {
                    doc.kill(path);
                    let prefix = format!("{}.", path);
                    prop_assert!(doc.keys().all(|k| k != path.as_str() && !k.starts_with(&prefix)));
                }
            }
            prop_assert_eq!(walk_values(doc.tree()), doc.to_map());
        }

        let saved = doc.save_to_text();
        if !saved.is_empty() {
            let mut reloaded = Document::new();
            reloaded.load_from_text(&saved).unwrap();
            prop_assert_eq!(reloaded.to_map(), doc.to_map());
        }
    }
}
