// projtree - Project Tree Notation
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

//! Tests for notation output, driven from parsed documents.

use projtree_core::{parse, TreeNode};
use projtree_writer::{write, write_with_config, WriterConfig, WriterOptions};

const GUID: &str = "41F80260-959C-4556-852C-F7D1B31DD201";

fn three_levels() -> TreeNode {
    TreeNode::new("Root").with_child(TreeNode::new("Parent1").with_child(TreeNode::new("Child")))
}

// =============================================================================
// Tagged Output
// =============================================================================

#[test]
fn test_tagged_flags() {
    let tree = parse("Root (flags: {A B})").unwrap();
    assert_eq!(
        write(&tree, WriterOptions::TAGS | WriterOptions::FLAGS),
        "Root[caption] (flags: {A[capability] B[capability]})"
    );
}

#[test]
fn test_tagged_indentation() {
    assert_eq!(
        write(&three_levels(), WriterOptions::TAGS),
        "Root[caption]\n    [indent]Parent1[caption]\n    [indent]    [indent]Child[caption]"
    );
}

#[test]
fn test_tags_alone_write_no_properties() {
    let tree = parse("Root (visibility: invisible, flags: {A}), ItemType: x").unwrap();
    assert_eq!(write(&tree, WriterOptions::TAGS), "Root[caption]");
}

// =============================================================================
// Facet Selection
// =============================================================================

#[test]
fn test_no_facets_writes_captions() {
    let tree = parse(&format!(
        "Root (visibility: invisible), FilePath: \"x\", Icon: {{{GUID} 1}}\n    Child, SubType: y"
    ))
    .unwrap();
    assert_eq!(write(&tree, WriterOptions::NONE), "Root\n    Child");
}

#[test]
fn test_each_facet_alone() {
    let input = format!(
        "Root (visibility: invisible, flags: {{A}}), FilePath: \"C:\\x\", ItemType: T, SubType: S, \
         Icon: {{{GUID} 1}}, ExpandedIcon: {{{GUID} 2}}"
    );
    let tree = parse(&input).unwrap();

    let cases = [
        (WriterOptions::VISIBILITY, "Root (visibility: invisible)".to_string()),
        (WriterOptions::FLAGS, "Root (flags: {A})".to_string()),
        (WriterOptions::FILE_PATH, "Root, FilePath: \"C:\\x\"".to_string()),
        (WriterOptions::ITEM_TYPE, "Root, ItemType: T".to_string()),
        (WriterOptions::SUB_TYPE, "Root, SubType: S".to_string()),
        (
            WriterOptions::ICONS,
            format!("Root, Icon: {{{GUID} 1}}, ExpandedIcon: {{{GUID} 2}}"),
        ),
    ];
    for (options, expected) in cases {
        assert_eq!(write(&tree, options), expected, "options: {options:?}");
    }
}

#[test]
fn test_all_facets_reproduces_full_line() {
    let input = format!(
        "Root (visibility: invisible, flags: {{A B}}), FilePath: \"C:\\x\", ItemType: T, SubType: S, \
         Icon: {{{GUID} 1}}, ExpandedIcon: {{}}"
    );
    let tree = parse(&input).unwrap();
    assert_eq!(write(&tree, WriterOptions::all_facets()), input);
}

#[test]
fn test_guid_written_uppercase() {
    let tree = parse(&format!("Root, Icon: {{{} 3}}", GUID.to_lowercase())).unwrap();
    assert_eq!(
        write(&tree, WriterOptions::ICONS),
        format!("Root, Icon: {{{GUID} 3}}, ExpandedIcon: {{}}")
    );
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_write_with_config_indent() {
    let config = WriterConfig::builder()
        .facet(WriterOptions::TAGS)
        .indent_width(2)
        .build();
    assert_eq!(
        write_with_config(&three_levels(), &config),
        "Root[caption]\n  [indent]Parent1[caption]\n  [indent]  [indent]Child[caption]"
    );
}

#[test]
fn test_write_is_pure() {
    let tree = three_levels();
    let options = WriterOptions::all_facets();
    assert_eq!(write(&tree, options), write(&tree, options));
}

fn deep_chain(depth: usize) -> TreeNode {
    let mut tree = TreeNode::new("N").with_capability("Leaf");
    for _ in 0..depth {
        tree = TreeNode::new("N").with_capability("Folder").with_child(tree);
    }
    tree
}

/// Release a chain iteratively so the drop does not recurse.
fn dismantle(tree: TreeNode) {
    let mut next = Some(tree);
    while let Some(mut node) = next {
        next = node.children.pop();
    }
}

#[test]
fn test_deep_tree_does_not_overflow() {
    let tree = deep_chain(10_000);
    let text = write(&tree, WriterOptions::NONE);
    assert_eq!(text.lines().count(), 10_001);
    dismantle(tree);
}

#[test]
fn test_deep_tree_projection_does_not_overflow() {
    let tree = deep_chain(50_000);
    assert_eq!(tree.descendant_count(), 50_000);

    let projected = WriterOptions::ITEM_TYPE.project(&tree);
    assert_eq!(projected.descendant_count(), 50_000);
    assert!(projected.walk().all(|(_, node)| node.capabilities.is_empty()));
    let (depth, leaf) = projected.walk().last().unwrap();
    assert_eq!((depth, leaf.caption.as_str()), (50_000, "N"));

    dismantle(projected);
    dismantle(tree);
}
