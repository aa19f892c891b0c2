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

//! Source positions for error reporting.
//!
//! The parser works on byte offsets; a [`SourcePos`] is derived from an
//! offset only when an error is built, so the hot path never tracks lines.
//!
//! # Examples
//!
//! ```
//! use projtree_core::lex::SourcePos;
//!
//! let pos = SourcePos::from_offset("Root\n    Child", 9);
//! assert_eq!(pos.line(), 2);
//! assert_eq!(pos.column(), 5);
//! ```

use std::fmt;

/// A position in the notation text (line and column).
///
/// Line and column numbers are 1-indexed. Columns count characters, not
/// bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourcePos {
    line: usize,
    column: usize,
}

impl SourcePos {
    /// Creates a new source position.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Creates a position at the start of the text (line 1, column 1).
    #[inline]
    pub const fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Computes the position of a byte offset within `text`.
    ///
    /// `\n`, `\r\n` and a lone `\r` each end a line.
    ///
    /// Offsets past the end of `text` are clamped to the end. Offsets that
    /// fall inside a multi-byte character count that character.
    pub fn from_offset(text: &str, offset: usize) -> Self {
        let mut pos = Self::start();
        for (index, ch) in text.char_indices() {
            if index >= offset {
                break;
            }
            let lone_cr = ch == '\r' && !text[index + 1..].starts_with('\n');
            if ch == '\n' || lone_cr {
                pos.line += 1;
                pos.column = 1;
            } else {
                pos.column += 1;
            }
        }
        pos
    }

    /// Returns the line number.
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number.
    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }
}

impl Default for SourcePos {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
