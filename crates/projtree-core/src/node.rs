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

//! Tree structure for parsed project trees.

use std::fmt;
use uuid::Uuid;

/// Whether a node is shown in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Shown (the default).
    #[default]
    Visible,
    /// Hidden.
    Invisible,
}

impl Visibility {
    /// The notation keyword for this visibility.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Invisible => "invisible",
        }
    }

    /// Parse a notation keyword. Matching is exact and case-sensitive.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "visible" => Some(Self::Visible),
            "invisible" => Some(Self::Invisible),
            _ => None,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image reference: a GUID naming an image catalog plus an index into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IconMoniker {
    /// The catalog GUID.
    pub guid: Uuid,
    /// The image index within the catalog.
    pub index: u32,
}

impl IconMoniker {
    /// Create a new moniker.
    pub fn new(guid: Uuid, index: u32) -> Self {
        Self { guid, index }
    }
}

impl fmt::Display for IconMoniker {
    /// Formats as the notation body without braces: `GUID INDEX`, GUID in
    /// uppercase hyphenated form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X} {}", self.guid.hyphenated(), self.index)
    }
}

/// A node in a project tree.
///
/// There is no `Default`: every node needs a caption. Use [`TreeNode::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    /// The node's caption (its identifier in the notation).
    pub caption: String,
    /// Visibility, `Visible` unless stated.
    pub visibility: Visibility,
    /// Capability flags in textual order; duplicates are kept.
    pub capabilities: Vec<String>,
    /// File path. `Some("")` is distinct from `None`.
    pub file_path: Option<String>,
    /// Collapsed icon.
    pub icon: Option<IconMoniker>,
    /// Expanded icon.
    pub expanded_icon: Option<IconMoniker>,
    /// Item type.
    pub item_type: Option<String>,
    /// Item subtype.
    pub sub_type: Option<String>,
    /// Child nodes in textual order.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a new visible node with no properties and no children.
    ///
    /// The caption must be non-empty and carry no surrounding whitespace; the
    /// parser never produces any other kind of caption.
    pub fn new(caption: impl Into<String>) -> Self {
        let caption = caption.into();
        debug_assert!(
            !caption.is_empty() && caption.trim() == caption,
            "caption must be non-empty and trimmed: {caption:?}"
        );
        Self {
            caption,
            visibility: Visibility::Visible,
            capabilities: Vec::new(),
            file_path: None,
            icon: None,
            expanded_icon: None,
            item_type: None,
            sub_type: None,
            children: Vec::new(),
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }

    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities.extend(capabilities.into_iter().map(Into::into));
        self
    }

    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_icon(mut self, icon: IconMoniker) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_expanded_icon(mut self, icon: IconMoniker) -> Self {
        self.expanded_icon = Some(icon);
        self
    }

    pub fn with_item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = Some(sub_type.into());
        self
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add a child node after the existing children.
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Returns `true` if any capability equals `capability` exactly.
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability)
    }

    /// Find a direct child by caption.
    pub fn child(&self, caption: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.caption == caption)
    }

    /// Number of nodes below this one (not counting itself).
    pub fn descendant_count(&self) -> usize {
        self.walk().count() - 1
    }

    /// Depth-first, pre-order iteration over this node and its descendants.
    ///
    /// Each item is paired with its depth relative to `self` (0 for `self`).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }
}

/// Iterator returned by [`TreeNode::walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a TreeNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reversed so the first child is visited first.
        self.stack
            .extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
