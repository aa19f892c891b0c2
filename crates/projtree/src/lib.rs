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

//! # projtree - Project Tree Notation
//!
//! A small indented text notation for project trees: one node per line, a
//! caption, optional visibility and capability flags, and item properties
//! such as file paths, item types and icons. Children sit one indent level
//! below their parent.
//!
//! ## Quick Start
//!
//! ```rust
//! use projtree::{parse, write, WriterOptions};
//!
//! let text = r#"
//! Root (flags: {ProjectRoot}), FilePath: "C:\Project\Project.csproj"
//!     Properties (flags: {AppDesignerFolder Folder})
//!     Program.cs, FilePath: "C:\Project\Program.cs", ItemType: Compile
//! "#;
//!
//! let tree = parse(text).expect("Failed to parse");
//! assert_eq!(tree.children.len(), 2);
//!
//! // Write back only the captions and flags
//! let flags = write(&tree, WriterOptions::FLAGS);
//! assert!(flags.starts_with("Root (flags: {ProjectRoot})"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Parser, data model and error taxonomy
//! - [`lex`]: Cursor, identifier and indentation readers
//! - [`writer`]: Facet-driven writer and its configuration

pub use projtree_core::{
    // Functions
    parse,
    parse_with_options,
    // Errors
    FormatError,
    FormatErrorKind,
    FormatResult,
    // Model
    IconMoniker,
    // Parser
    ParseError,
    ParseOptions,
    ParseOptionsBuilder,
    ParseResult,
    SourcePos,
    TreeNode,
    Uuid,
    Visibility,
    Walk,
};
pub use projtree_writer::{write, write_with_config, TreeWriter, WriterConfig, WriterConfigBuilder, WriterOptions};

// Error handling extensions
mod error_ext;
pub use error_ext::TreeResultExt;

/// Core parsing and data model.
pub mod core {
    pub use projtree_core::*;
}

/// Lexical analysis utilities.
pub mod lex {
    pub use projtree_core::lex::{
        is_inline_whitespace, is_line_break, read_guid, read_icon, read_identifier, read_indent, read_index,
        validate_indent, Cursor, Delimiters, IndentInfo, SourcePos, Whitespace, CAPTION, DEFAULT_INDENT_WIDTH,
        ITEM_VALUE, PROPERTY_NAME, PROPERTY_VALUE,
    };
}

/// Notation writer.
pub mod writer {
    pub use projtree_writer::*;
}

/// Parse `text` and write it back with `options`.
///
/// Useful for normalizing hand-written notation and for inspecting which
/// parts of a line the parser assigned to which field.
///
/// # Examples
///
/// ```rust
/// use projtree::{render, WriterOptions};
///
/// let text = render("Root (flags: {A B})", WriterOptions::TAGS | WriterOptions::FLAGS).unwrap();
/// assert_eq!(text, "Root[caption] (flags: {A[capability] B[capability]})");
/// ```
pub fn render(text: &str, options: WriterOptions) -> Result<String, ParseError> {
    let tree = parse(text)?;
    Ok(write(&tree, options))
}

/// Validate tree notation without keeping the tree.
///
/// Returns `Ok(())` if valid, `Err` with details if invalid.
#[inline]
pub fn validate(text: &str) -> Result<(), ParseError> {
    parse(text).map(|_| ())
}

/// Convert a tree to JSON.
///
/// # Examples
///
/// ```rust
/// use projtree::{to_json, TreeNode};
///
/// let json = to_json(&TreeNode::new("Root")).unwrap();
/// assert!(json.contains("\"caption\": \"Root\""));
/// ```
#[cfg(feature = "serde")]
pub fn to_json(tree: &TreeNode) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tree)
}

/// Convert JSON produced by [`to_json`] back to a tree.
#[cfg(feature = "serde")]
pub fn from_json(json: &str) -> Result<TreeNode, serde_json::Error> {
    serde_json::from_str(json)
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
