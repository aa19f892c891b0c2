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

//! Lexical layer of the tree notation.
//!
//! # Module Structure
//!
//! - [`cursor`] - Copyable position over the input text
//! - [`span`] - Line/column positions for error reporting
//! - [`tokens`] - Delimiter sets and identifier scanning
//! - [`indent`] - Indentation levels
//! - [`moniker`] - Icon values (`{GUID INDEX}`)
//!
//! # Examples
//!
//! ```
//! use projtree_core::lex::{read_identifier, Cursor, CAPTION};
//!
//! let (caption, rest) = read_identifier(Cursor::new("My Project (flags: {})"), &CAPTION).unwrap();
//! assert_eq!(caption, "My Project");
//! assert!(rest.at('('));
//! ```

pub mod cursor;
pub mod indent;
pub mod moniker;
pub mod span;
pub mod tokens;

pub use cursor::Cursor;
pub use indent::{read_indent, validate_indent, IndentInfo, DEFAULT_INDENT_WIDTH};
pub use moniker::{read_guid, read_icon, read_index};
pub use span::SourcePos;
pub use tokens::{
    is_inline_whitespace, is_line_break, read_identifier, Delimiters, Whitespace, CAPTION, ITEM_VALUE,
    PROPERTY_NAME, PROPERTY_VALUE,
};
