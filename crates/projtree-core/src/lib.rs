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

//! Core parser and data model for the project tree notation.
//!
//! The notation describes a project tree one node per line, with children
//! indented one level below their parent:
//!
//! ```text
//! Root (flags: {ProjectRoot}), FilePath: "C:\Project\Project.csproj"
//!     Properties (flags: {AppDesignerFolder Folder})
//!         AssemblyInfo.cs, FilePath: "C:\Project\Properties\AssemblyInfo.cs", ItemType: Compile
//!     Program.cs, ItemType: Compile, Icon: {AE27A6B0-E345-4288-96DF-5EAF394EE369 3}, ExpandedIcon: {}
//! ```
//!
//! # Lexical Analysis
//!
//! The [`lex`] module holds the cursor, identifier scanning, indentation and
//! icon value readers that the parser is built from.
//!
//! # Errors
//!
//! A malformed document fails with a [`FormatError`] carrying exactly one
//! [`FormatErrorKind`]. An empty input is API misuse and fails with
//! [`ParseError::EmptyInput`] instead.

mod error;
pub mod lex;
mod node;
mod parser;

pub use error::{FormatError, FormatErrorKind, FormatResult, ParseError, ParseResult};
pub use lex::SourcePos;
pub use node::{IconMoniker, TreeNode, Visibility, Walk};
pub use parser::{parse, parse_with_options, ParseOptions, ParseOptionsBuilder};

// Re-exported so callers can build icon monikers without a direct dependency.
pub use uuid::Uuid;
