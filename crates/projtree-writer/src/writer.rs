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

//! Tree notation writer.
//!
//! Nodes are written in pre-order, one per line. The tree is traversed with
//! [`TreeNode::walk`], so writing does not recurse and arbitrarily deep trees
//! are safe.

use projtree_core::{IconMoniker, TreeNode};
use tracing::trace;

use crate::config::WriterConfig;
use crate::options::WriterOptions;

// ==================== Buffer Capacity Constants ====================

/// Initial buffer capacity for output string.
const INITIAL_OUTPUT_BUFFER_CAPACITY: usize = 1024;

// ==================== Tag Constants ====================

const TAG_INDENT: &str = "[indent]";
const TAG_CAPTION: &str = "[caption]";
const TAG_VISIBILITY: &str = "[visibility]";
const TAG_CAPABILITY: &str = "[capability]";
const TAG_FILE_PATH: &str = "[filepath]";
const TAG_ITEM_TYPE: &str = "[itemtype]";
const TAG_SUB_TYPE: &str = "[subtype]";
const TAG_ICON: &str = "[icon]";

/// Separator before each property.
const PROPERTY_SEPARATOR: &str = ", ";

/// Writer for tree notation.
///
/// A writer can be reused; each call to [`TreeWriter::write_tree`] starts
/// from an empty buffer.
///
/// # Examples
///
/// ```
/// use projtree_core::TreeNode;
/// use projtree_writer::{TreeWriter, WriterConfig, WriterOptions};
///
/// let tree = TreeNode::new("Root").with_child(TreeNode::new("Child").with_item_type("Compile"));
/// let mut writer = TreeWriter::new(WriterConfig::from(WriterOptions::ITEM_TYPE));
/// assert_eq!(writer.write_tree(&tree), "Root\n    Child, ItemType: Compile");
/// ```
#[derive(Debug)]
pub struct TreeWriter {
    config: WriterConfig,
    indent_unit: String,
    output: String,
}

impl TreeWriter {
    /// Creates a new writer with the given configuration.
    pub fn new(config: WriterConfig) -> Self {
        let indent_unit = " ".repeat(config.indent_width.max(1));
        Self {
            config,
            indent_unit,
            output: String::with_capacity(INITIAL_OUTPUT_BUFFER_CAPACITY),
        }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Writes `tree` and returns the notation.
    pub fn write_tree(&mut self, tree: &TreeNode) -> String {
        self.output.clear();
        let mut nodes = 0usize;
        for (depth, node) in tree.walk() {
            if depth > 0 {
                self.output.push('\n');
            }
            self.write_node(node, depth);
            nodes += 1;
        }
        trace!(nodes, bytes = self.output.len(), "wrote project tree");
        std::mem::take(&mut self.output)
    }

    /// Write one node line, without a trailing line break.
    fn write_node(&mut self, node: &TreeNode, depth: usize) {
        let options = self.config.options;

        for _ in 0..depth {
            self.output.push_str(&self.indent_unit);
            self.tag(TAG_INDENT);
        }

        self.output.push_str(&node.caption);
        self.tag(TAG_CAPTION);

        if options.has_paren_properties() {
            self.write_paren_properties(node, options);
        }

        if options.file_path {
            if let Some(path) = &node.file_path {
                self.output.push_str(PROPERTY_SEPARATOR);
                self.output.push_str("FilePath: \"");
                self.output.push_str(path);
                self.output.push('"');
                self.tag(TAG_FILE_PATH);
            }
        }

        if options.item_type {
            if let Some(item_type) = &node.item_type {
                self.write_item_property("ItemType", item_type, TAG_ITEM_TYPE);
            }
        }

        if options.sub_type {
            if let Some(sub_type) = &node.sub_type {
                self.write_item_property("SubType", sub_type, TAG_SUB_TYPE);
            }
        }

        if options.icons {
            self.write_icon("Icon", node.icon);
            self.write_icon("ExpandedIcon", node.expanded_icon);
        }
    }

    /// ` (visibility: x, flags: {A B})`, with only the requested entries.
    fn write_paren_properties(&mut self, node: &TreeNode, options: WriterOptions) {
        self.output.push_str(" (");

        if options.visibility {
            self.output.push_str("visibility: ");
            self.output.push_str(node.visibility.as_str());
            self.tag(TAG_VISIBILITY);
        }

        if options.flags {
            if options.visibility {
                self.output.push_str(PROPERTY_SEPARATOR);
            }
            self.output.push_str("flags: {");
            for (i, capability) in node.capabilities.iter().enumerate() {
                if i > 0 {
                    self.output.push(' ');
                }
                self.output.push_str(capability);
                self.tag(TAG_CAPABILITY);
            }
            self.output.push('}');
        }

        self.output.push(')');
    }

    fn write_item_property(&mut self, name: &str, value: &str, tag: &str) {
        self.output.push_str(PROPERTY_SEPARATOR);
        self.output.push_str(name);
        self.output.push_str(": ");
        self.output.push_str(value);
        self.tag(tag);
    }

    /// `Icon: {GUID N}`, or `Icon: {}` when absent.
    fn write_icon(&mut self, name: &str, icon: Option<IconMoniker>) {
        self.output.push_str(PROPERTY_SEPARATOR);
        self.output.push_str(name);
        self.output.push_str(": {");
        if let Some(icon) = icon {
            self.output.push_str(&icon.to_string());
        }
        self.output.push('}');
        self.tag(TAG_ICON);
    }

    #[inline]
    fn tag(&mut self, tag: &str) {
        if self.config.options.tags {
            self.output.push_str(tag);
        }
    }
}
