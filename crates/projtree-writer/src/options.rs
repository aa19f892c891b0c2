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

//! Writer facets.
//!
//! A facet is one group of node fields the writer can emit. Facets are
//! independent; any combination is valid.

use std::ops::{BitOr, BitOrAssign};

use projtree_core::{TreeNode, Visibility};

/// The set of facets to include in written notation.
///
/// # Examples
///
/// ```
/// use projtree_writer::WriterOptions;
///
/// let options = WriterOptions::FLAGS | WriterOptions::FILE_PATH;
/// assert!(options.flags);
/// assert!(options.file_path);
/// assert!(!options.visibility);
/// assert!(WriterOptions::NONE.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WriterOptions {
    /// Append diagnostic `[tag]` markers after each emitted element. The
    /// result is for inspection only and does not parse back.
    pub tags: bool,
    pub visibility: bool,
    /// Capabilities, written as `flags: {...}`.
    pub flags: bool,
    pub file_path: bool,
    /// Both `Icon` and `ExpandedIcon`.
    pub icons: bool,
    pub item_type: bool,
    pub sub_type: bool,
}

impl WriterOptions {
    /// Captions and indentation only.
    pub const NONE: Self = Self {
        tags: false,
        visibility: false,
        flags: false,
        file_path: false,
        icons: false,
        item_type: false,
        sub_type: false,
    };

    pub const TAGS: Self = Self { tags: true, ..Self::NONE };
    pub const VISIBILITY: Self = Self { visibility: true, ..Self::NONE };
    pub const FLAGS: Self = Self { flags: true, ..Self::NONE };
    pub const FILE_PATH: Self = Self { file_path: true, ..Self::NONE };
    pub const ICONS: Self = Self { icons: true, ..Self::NONE };
    pub const ITEM_TYPE: Self = Self { item_type: true, ..Self::NONE };
    pub const SUB_TYPE: Self = Self { sub_type: true, ..Self::NONE };

    /// Every field facet. Tags are not included.
    pub const fn all_facets() -> Self {
        Self {
            tags: false,
            visibility: true,
            flags: true,
            file_path: true,
            icons: true,
            item_type: true,
            sub_type: true,
        }
    }

    /// Returns `true` if no facet is selected.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if every facet in `other` is also in `self`.
    pub fn contains(&self, other: Self) -> bool {
        (*self | other) == *self
    }

    /// Returns `true` if the `( ... )` block is written.
    pub fn has_paren_properties(&self) -> bool {
        self.visibility || self.flags
    }

    /// A copy of `tree` holding only what these facets write.
    ///
    /// Unselected fields are reset to their defaults, throughout the tree.
    /// Writing a tree and parsing the output yields exactly this projection
    /// when `tags` is off. The tree is rebuilt from [`TreeNode::walk`], so
    /// depth is bounded only by memory.
    pub fn project(&self, tree: &TreeNode) -> TreeNode {
        let mut root = self.project_fields(tree);
        // Open copies below the root; `stack[i]` is at depth `i + 1`.
        let mut stack: Vec<TreeNode> = Vec::new();

        for (depth, node) in tree.walk().skip(1) {
            close_to_depth(&mut root, &mut stack, depth);
            stack.push(self.project_fields(node));
        }
        close_to_depth(&mut root, &mut stack, 1);
        root
    }

    /// The projected fields of one node, without its children.
    fn project_fields(&self, node: &TreeNode) -> TreeNode {
        TreeNode {
            caption: node.caption.clone(),
            visibility: if self.visibility { node.visibility } else { Visibility::default() },
            capabilities: if self.flags { node.capabilities.clone() } else { Vec::new() },
            file_path: node.file_path.clone().filter(|_| self.file_path),
            icon: node.icon.filter(|_| self.icons),
            expanded_icon: node.expanded_icon.filter(|_| self.icons),
            item_type: node.item_type.clone().filter(|_| self.item_type),
            sub_type: node.sub_type.clone().filter(|_| self.sub_type),
            children: Vec::new(),
        }
    }
}

/// Attach every open copy at `depth` or deeper to its parent.
fn close_to_depth(root: &mut TreeNode, stack: &mut Vec<TreeNode>, depth: usize) {
    while stack.len() >= depth {
        let Some(node) = stack.pop() else { break };
        match stack.last_mut() {
            Some(parent) => parent.add_child(node),
            None => root.add_child(node),
        }
    }
}

impl BitOr for WriterOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            tags: self.tags || rhs.tags,
            visibility: self.visibility || rhs.visibility,
            flags: self.flags || rhs.flags,
            file_path: self.file_path || rhs.file_path,
            icons: self.icons || rhs.icons,
            item_type: self.item_type || rhs.item_type,
            sub_type: self.sub_type || rhs.sub_type,
        }
    }
}

impl BitOrAssign for WriterOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}
