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

//! Project tree notation writer.
//!
//! Turns a [`TreeNode`] back into notation text, emitting only the facets the
//! caller selects. Output written without tags parses back to the same tree
//! restricted to those facets:
//!
//! ```
//! use projtree_core::parse;
//! use projtree_writer::{write, WriterOptions};
//!
//! let tree = parse("Root (flags: {A B}), ItemType: Project\n    Child").unwrap();
//! let options = WriterOptions::FLAGS;
//! let text = write(&tree, options);
//! assert_eq!(text, "Root (flags: {A B})\n    Child");
//! assert_eq!(parse(&text).unwrap(), options.project(&tree));
//! ```
//!
//! # Tags
//!
//! [`WriterOptions::TAGS`] appends a `[kind]` marker after each element
//! (`[indent]`, `[caption]`, `[visibility]`, `[capability]`, `[filepath]`,
//! `[itemtype]`, `[subtype]`, `[icon]`) so tests can check which part of a
//! line came from which field.
//!
//! ```
//! use projtree_core::parse;
//! use projtree_writer::{write, WriterOptions};
//!
//! let tree = parse("Root (flags: {A B})").unwrap();
//! assert_eq!(
//!     write(&tree, WriterOptions::TAGS | WriterOptions::FLAGS),
//!     "Root[caption] (flags: {A[capability] B[capability]})"
//! );
//! ```

mod config;
mod options;
mod writer;

pub use config::{WriterConfig, WriterConfigBuilder};
pub use options::WriterOptions;
pub use writer::TreeWriter;

use projtree_core::TreeNode;

/// Write `tree` as notation with the default four-space indent.
pub fn write(tree: &TreeNode, options: WriterOptions) -> String {
    write_with_config(tree, &WriterConfig::from(options))
}

/// Write `tree` as notation with custom configuration.
///
/// # Examples
///
/// ```
/// use projtree_core::TreeNode;
/// use projtree_writer::{write_with_config, WriterConfig};
///
/// let tree = TreeNode::new("Root").with_child(TreeNode::new("Child"));
/// let config = WriterConfig::builder().indent_width(2).build();
/// assert_eq!(write_with_config(&tree, &config), "Root\n  Child");
/// ```
pub fn write_with_config(tree: &TreeNode, config: &WriterConfig) -> String {
    TreeWriter::new(config.clone()).write_tree(tree)
}
