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

//! Position over an immutable notation buffer.
//!
//! A [`Cursor`] is a cheap `Copy` value. Grammar functions take a cursor and
//! return the value they read together with the advanced cursor, so no parse
//! state outlives a single call.

use crate::error::{FormatError, FormatErrorKind, FormatResult};

/// A byte position within a notation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// A cursor at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// A cursor at byte `offset` of `text`, clamped to the end.
    ///
    /// `offset` must fall on a character boundary.
    pub fn starting_at(text: &'a str, offset: usize) -> Self {
        Self {
            text,
            pos: offset.min(text.len()),
        }
    }

    /// The whole buffer.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset into the buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The unread remainder of the buffer.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// The next character, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns `true` if the next character is `ch`.
    #[inline]
    pub fn at(&self, ch: char) -> bool {
        self.peek() == Some(ch)
    }

    /// Returns `true` at end of input or at the start of a line break.
    #[inline]
    pub fn at_line_end(&self) -> bool {
        matches!(self.peek(), None | Some('\r') | Some('\n'))
    }

    /// Consume the next character. At end of input this is a no-op.
    #[inline]
    pub fn bump(self) -> Self {
        match self.peek() {
            Some(ch) => Self {
                pos: self.pos + ch.len_utf8(),
                ..self
            },
            None => self,
        }
    }

    /// Consume characters while `pred` holds, returning the consumed slice.
    pub fn take_while(self, mut pred: impl FnMut(char) -> bool) -> (&'a str, Self) {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, ch)| !pred(ch))
            .map_or(rest.len(), |(index, _)| index);
        (&rest[..len], Self { pos: self.pos + len, ..self })
    }

    /// Consume the required delimiter `expected`.
    ///
    /// Fails with `DelimiterExpectedEncounteredEndOfString` at end of input
    /// and `DelimiterExpected` on any other character.
    pub fn expect(self, expected: char) -> FormatResult<Self> {
        match self.peek() {
            Some(ch) if ch == expected => Ok(self.bump()),
            Some(ch) => Err(self.error(
                FormatErrorKind::DelimiterExpected,
                format!("expected '{}', found '{}'", expected.escape_debug(), ch.escape_debug()),
            )),
            None => Err(self.error(
                FormatErrorKind::DelimiterExpectedEncounteredEndOfString,
                format!("expected '{}', found end of input", expected.escape_debug()),
            )),
        }
    }

    /// Consume a line break (`\n` or `\r\n`, or a lone `\r`) if one is next.
    pub fn skip_line_break(self) -> Option<Self> {
        match self.peek() {
            Some('\n') => Some(self.bump()),
            Some('\r') => {
                let next = self.bump();
                Some(if next.at('\n') { next.bump() } else { next })
            }
            _ => None,
        }
    }

    /// Build an error located at this cursor.
    pub fn error(&self, kind: FormatErrorKind, message: impl Into<String>) -> FormatError {
        FormatError::at(kind, message, self.text, self.pos)
    }

    /// Build an error with the kind's default message.
    pub fn fail(&self, kind: FormatErrorKind) -> FormatError {
        self.error(kind, kind.description())
    }
}
