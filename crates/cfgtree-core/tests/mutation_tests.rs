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

//! Mutation API tests: put, remove, kill, comments and blank lines.

use cfgtree_core::{ConfigOptions, Document, Tree};

fn load(text: &str) -> Document {
    let mut doc = Document::new();
    doc.load_from_text(text).unwrap();
    doc
}

// ==================== put ====================

#[test]
fn test_put_into_loaded_section_appends_at_end() {
    let mut doc = load("server:\n  # bind address\n  host: localhost\n\nother: x");
    doc.put("server.port", "80");
    assert_eq!(
        doc.save_to_text(),
        "server:\n  # bind address\n  host: localhost\n  port: 80\n\nother: x"
    );
}

#[test]
fn test_put_new_top_level_key_goes_last() {
    let mut doc = load("a: 1\n# trailing");
    doc.put("b", "2");
    assert_eq!(doc.save_to_text(), "a: 1\n# trailing\nb: 2");
}

#[test]
fn test_put_keeps_existing_trailing_comment_and_spacing() {
    let mut doc = load("port:   80   # http");
    assert_eq!(doc.put("port", "8080"), Some("80".to_string()));
    assert_eq!(doc.save_to_text(), "port:   8080   # http");
}

#[test]
fn test_put_value_on_bare_header_adds_single_space() {
    let mut doc = load("a:\n  b: 1");
    doc.put("a", "x");
    assert_eq!(doc.save_to_text(), "a: x\n  b: 1");
    assert_eq!(doc.len(), 2);
}

#[test]
fn test_put_with_comment_variants() {
    let mut doc = Document::new();
    doc.put_with_comment("a", "1", Some("plain text"));
    doc.put_with_comment("b", "2", Some("#tight"));
    doc.put_with_comment("c", "3", Some("    # spaced"));
    assert_eq!(
        doc.save_to_text(),
        "a: 1 # plain text\nb: 2 #tight\nc: 3    # spaced"
    );
}

#[test]
fn test_put_replaces_comment() {
    let mut doc = load("a: 1 # old");
    doc.put_with_comment("a", "2", Some("new"));
    assert_eq!(doc.save_to_text(), "a: 2 # new");
}

#[test]
fn test_put_ignores_invalid_paths() {
    let mut doc = load("a: 1");
    for path in ["", ".", "a.", ".a", "a..b"] {
        assert_eq!(doc.put(path, "x"), None, "path {:?}", path);
    }
    assert_eq!(doc.save_to_text(), "a: 1");
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_put_uses_configured_indent() {
    let opts = ConfigOptions::builder().spaces_per_indent(3).build();
    let mut doc = Document::with_options(opts);
    doc.put("a.b.c", "1");
    assert_eq!(doc.save_to_text(), "a:\n   b:\n      c: 1");
}

#[test]
fn test_put_then_reload_matches() {
    let mut doc = Document::new();
    doc.put("db.host", "localhost");
    doc.put("db.port", "5432");
    doc.put("name", "svc");
    let text = doc.save_to_text();

    let reloaded = load(&text);
    assert_eq!(reloaded.to_map(), doc.to_map());
    assert_eq!(reloaded.save_to_text(), text);
}

#[test]
fn test_put_rejects_what_would_not_reload() {
    let mut doc = Document::new();
    assert_eq!(doc.put("a", ""), None);
    assert_eq!(doc.put("b", "1"), None);
    assert_eq!(doc.put("c", " padded "), None);
    assert_eq!(doc.put("a#b", "1"), None);
    assert_eq!(doc.put("x.y:z", "1"), None);
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["b"]);

    let text = doc.save_to_text();
    assert_eq!(text, "b: 1");
    let reloaded = load(&text);
    assert_eq!(reloaded.to_map(), doc.to_map());
    assert_eq!(reloaded.save_to_text(), text);
}

#[test]
fn test_zero_indent_option_keeps_nesting() {
    let mut doc = load("a:\n  b: 1");
    doc.set_spaces_per_indent(0);
    let reloaded = load(&doc.save_to_text());
    assert_eq!(reloaded.keys().collect::<Vec<_>>(), vec!["a.b"]);
}

// ==================== remove ====================

#[test]
fn test_remove_keeps_line_and_comment() {
    let mut doc = load("a: 1 # note\nb: 2");
    assert_eq!(doc.remove("a"), Some("1".to_string()));
    assert!(!doc.contains_key("a"));
    assert_eq!(doc.save_to_text(), "a: # note\nb: 2");
}

#[test]
fn test_remove_missing_segment_is_noop() {
    let mut doc = load("a:\n  b: 1");
    assert_eq!(doc.remove("a.c"), None);
    assert_eq!(doc.remove("x.y.z"), None);
    assert_eq!(doc.get("a.b"), Some("1"));
}

#[test]
fn test_remove_twice() {
    let mut doc = load("a: 1");
    assert_eq!(doc.remove("a"), Some("1".to_string()));
    assert_eq!(doc.remove("a"), None);
}

// ==================== kill ====================

#[test]
fn test_kill_removes_lines_and_nested_comments() {
    let mut doc = load("keep: 1\ndrop:\n  # inner\n  x: 1\n  y:\n    z: 2\nalso: 3");
    assert_eq!(doc.kill("drop"), None);
    assert_eq!(doc.save_to_text(), "keep: 1\nalso: 3");
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["also", "keep"]);
}

#[test]
fn test_kill_leaf_keeps_siblings() {
    let mut doc = load("a:\n  b: 1\n  c: 2");
    assert_eq!(doc.kill("a.b"), Some("1".to_string()));
    assert_eq!(doc.save_to_text(), "a:\n  c: 2");
}

#[test]
fn test_kill_dotted_literal_key() {
    let mut doc = load("a.b: 1\nc: 2");
    assert_eq!(doc.kill("a.b"), Some("1".to_string()));
    assert_eq!(doc.save_to_text(), "c: 2");
    assert!(!doc.contains_key("a.b"));
}

#[test]
fn test_kill_frees_tree_nodes() {
    let mut doc = load("a:\n  b:\n    c: 1\nd: 2");
    let before = doc.tree().len();
    doc.kill("a");
    assert_eq!(doc.tree().len(), before - 3);
    doc.put("a.b.c", "1");
    assert_eq!(doc.tree().len(), before);
}

#[test]
fn test_kill_invalid_path_is_noop() {
    let mut doc = load("a: 1");
    assert_eq!(doc.kill("a..b"), None);
    assert_eq!(doc.kill("missing"), None);
    assert_eq!(doc.len(), 1);
}

// ==================== comments and blank lines ====================

#[test]
fn test_add_comment_and_blank_lines_build_a_file() {
    let mut doc = Document::new();
    doc.add_comment(" generated", 0);
    doc.add_blank_lines(1, 0);
    doc.put("a.b", "1");
    doc.add_blank_lines(2, 0);
    doc.add_comment(" end", 0);

    let text = doc.save_to_text();
    assert_eq!(text, "# generated\n\na:\n  b: 1\n\n\n# end");
    assert_eq!(load(&text).save_to_text(), text);
}

#[test]
fn test_added_comment_is_not_a_value() {
    let mut doc = Document::new();
    doc.add_comment(" note", 1);
    assert!(doc.is_empty());
    assert!(!doc.tree().is_empty());
    assert_eq!(doc.tree().children(Tree::ROOT).len(), 1);
}

#[test]
fn test_clear_then_reuse() {
    let mut doc = load("# c\na:\n  b: 1");
    doc.clear();
    assert_eq!(doc.save_to_text(), "");
    doc.put("x", "1");
    assert_eq!(doc.save_to_text(), "x: 1");
}

// ==================== read accessors ====================

#[test]
fn test_map_views_follow_mutations() {
    let mut doc = load("a: 1\nb:\n  c: 2");
    doc.put("d", "1");
    doc.remove("a");

    assert_eq!(doc.len(), 2);
    assert!(doc.contains_value("1"));
    assert_eq!(
        doc.entries().collect::<Vec<_>>(),
        vec![("b.c", "2"), ("d", "1")]
    );
    assert_eq!(doc.get_or_default("a", "none"), "none");
}
