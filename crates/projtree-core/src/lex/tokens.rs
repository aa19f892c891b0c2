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

//! Identifier scanning.
//!
//! Every identifier position in the grammar (captions, property names,
//! property values, flag tokens) is read by [`read_identifier`] with a
//! context-specific [`Delimiters`] set. The set decides where the identifier
//! stops and, when it is empty, which "identifier expected" kind applies.

use super::cursor::Cursor;
use crate::error::{FormatErrorKind, FormatResult};

/// How whitespace is treated while scanning an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whitespace {
    /// Whitespace is part of the identifier; the result is trimmed.
    Allowed,
    /// Whitespace ends the identifier.
    Delimits,
}

/// The characters that end an identifier in a given context.
///
/// Line breaks always end an identifier.
#[derive(Debug, Clone, Copy)]
pub struct Delimiters {
    chars: &'static [char],
    whitespace: Whitespace,
}

impl Delimiters {
    pub const fn new(chars: &'static [char], whitespace: Whitespace) -> Self {
        Self { chars, whitespace }
    }

    /// Returns `true` if `ch` ends an identifier in this context.
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        is_line_break(ch)
            || self.chars.contains(&ch)
            || (self.whitespace == Whitespace::Delimits && is_inline_whitespace(ch))
    }
}

/// Node captions: free text up to a property list or the end of the line.
pub const CAPTION: Delimiters = Delimiters::new(&['(', ','], Whitespace::Allowed);

/// Property keys, both inside and outside parentheses.
pub const PROPERTY_NAME: Delimiters =
    Delimiters::new(&[':', ',', '(', ')', '{', '}', '"'], Whitespace::Delimits);

/// Keyword values and flag tokens. Colons are allowed.
pub const PROPERTY_VALUE: Delimiters =
    Delimiters::new(&[',', '(', ')', '{', '}', '"'], Whitespace::Delimits);

/// Free-text item property values (`ItemType`, `SubType`).
pub const ITEM_VALUE: Delimiters = CAPTION;

/// Spaces and tabs.
#[inline]
pub fn is_inline_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}

/// Read a required identifier, stopping at the first delimiter.
///
/// Returns the identifier, trimmed of any Unicode whitespace, and the cursor
/// positioned on the delimiter that ended it.
///
/// # Errors
///
/// - `IdExpectedEncounteredOnlyWhiteSpace` if the scanned text is non-empty
///   but blank
/// - `IdExpectedEncounteredEndOfString` if nothing was scanned and the input
///   ended
/// - `IdExpectedEncounteredDelimiter` if nothing was scanned and a delimiter
///   is next
pub fn read_identifier<'a>(
    cursor: Cursor<'a>,
    delimiters: &Delimiters,
) -> FormatResult<(&'a str, Cursor<'a>)> {
    let (raw, next) = cursor.take_while(|ch| !delimiters.contains(ch));
    let identifier = raw.trim();

    if !identifier.is_empty() {
        return Ok((identifier, next));
    }

    if !raw.is_empty() {
        return Err(cursor.fail(FormatErrorKind::IdExpectedEncounteredOnlyWhiteSpace));
    }

    match next.peek() {
        None => Err(next.fail(FormatErrorKind::IdExpectedEncounteredEndOfString)),
        Some(ch) => Err(next.error(
            FormatErrorKind::IdExpectedEncounteredDelimiter,
            format!("expected an identifier, found '{}'", ch.escape_debug()),
        )),
    }
}
