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

//! Error types for tree notation parsing.

use std::fmt;
use thiserror::Error;

use crate::lex::SourcePos;

/// The grammar expectation that was violated when a parse failed.
///
/// The set is closed: every malformed input maps to exactly one kind, and the
/// same input always maps to the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatErrorKind {
    /// An identifier was required but only whitespace preceded the next delimiter.
    IdExpectedEncounteredOnlyWhiteSpace,
    /// An identifier was required but the next character is a delimiter.
    IdExpectedEncounteredDelimiter,
    /// An identifier was required but the input ended.
    IdExpectedEncounteredEndOfString,
    /// A delimiter was required but the input ended.
    DelimiterExpectedEncounteredEndOfString,
    /// A delimiter was required but a different character was found.
    DelimiterExpected,
    /// Unknown (or wrongly cased) property key.
    UnrecognizedPropertyName,
    /// Value outside the fixed set accepted by its key.
    UnrecognizedPropertyValue,
    /// Characters remain on a line after its last value.
    EndOfStringExpected,
    /// Malformed GUID inside an icon value.
    GuidExpected,
    /// Missing or non-numeric index inside an icon value.
    IntegerExpected,
    /// More than one node at indentation level 0.
    MultipleRoots,
    /// A child indented more than one level below its parent.
    IndentTooManyLevels,
}

impl FormatErrorKind {
    /// Returns `true` for the three "identifier expected" kinds.
    pub fn is_id_expected(&self) -> bool {
        matches!(
            self,
            Self::IdExpectedEncounteredOnlyWhiteSpace
                | Self::IdExpectedEncounteredDelimiter
                | Self::IdExpectedEncounteredEndOfString
        )
    }

    /// Returns `true` for the two "delimiter expected" kinds.
    pub fn is_delimiter_expected(&self) -> bool {
        matches!(
            self,
            Self::DelimiterExpected | Self::DelimiterExpectedEncounteredEndOfString
        )
    }

    /// Returns `true` for errors about the tree shape rather than a single line.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MultipleRoots | Self::IndentTooManyLevels)
    }

    /// Default message used when a parse site has nothing more specific to say.
    pub(crate) fn description(&self) -> &'static str {
        match self {
            Self::IdExpectedEncounteredOnlyWhiteSpace => "expected an identifier, found only whitespace",
            Self::IdExpectedEncounteredDelimiter => "expected an identifier, found a delimiter",
            Self::IdExpectedEncounteredEndOfString => "expected an identifier, found end of input",
            Self::DelimiterExpectedEncounteredEndOfString => "expected a delimiter, found end of input",
            Self::DelimiterExpected => "expected a delimiter",
            Self::UnrecognizedPropertyName => "unrecognized property name",
            Self::UnrecognizedPropertyValue => "unrecognized property value",
            Self::EndOfStringExpected => "expected end of line",
            Self::GuidExpected => "expected a GUID",
            Self::IntegerExpected => "expected an integer",
            Self::MultipleRoots => "a tree can only have one root",
            Self::IndentTooManyLevels => "indented more than one level below its parent",
        }
    }
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdExpectedEncounteredOnlyWhiteSpace => write!(f, "IdExpected_EncounteredOnlyWhiteSpace"),
            Self::IdExpectedEncounteredDelimiter => write!(f, "IdExpected_EncounteredDelimiter"),
            Self::IdExpectedEncounteredEndOfString => write!(f, "IdExpected_EncounteredEndOfString"),
            Self::DelimiterExpectedEncounteredEndOfString => {
                write!(f, "DelimiterExpected_EncounteredEndOfString")
            }
            Self::DelimiterExpected => write!(f, "DelimiterExpected"),
            Self::UnrecognizedPropertyName => write!(f, "UnrecognizedPropertyName"),
            Self::UnrecognizedPropertyValue => write!(f, "UnrecognizedPropertyValue"),
            Self::EndOfStringExpected => write!(f, "EndOfStringExpected"),
            Self::GuidExpected => write!(f, "GuidExpected"),
            Self::IntegerExpected => write!(f, "IntegerExpected"),
            Self::MultipleRoots => write!(f, "MultipleRoots"),
            Self::IndentTooManyLevels => write!(f, "IndentTooManyLevels"),
        }
    }
}

/// A malformed tree notation document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {pos}: {message}")]
pub struct FormatError {
    /// The kind of error.
    pub kind: FormatErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Byte offset into the parsed text where the error was detected.
    pub offset: usize,
    /// Line and column of `offset`.
    pub pos: SourcePos,
    /// Additional caller-supplied context.
    pub context: Option<String>,
}

impl FormatError {
    /// Create a new error.
    pub fn new(kind: FormatErrorKind, message: impl Into<String>, offset: usize, pos: SourcePos) -> Self {
        Self {
            kind,
            message: message.into(),
            offset,
            pos,
            context: None,
        }
    }

    /// Create an error located at `offset` within `text`.
    pub fn at(kind: FormatErrorKind, message: impl Into<String>, text: &str, offset: usize) -> Self {
        Self::new(kind, message, offset, SourcePos::from_offset(text, offset))
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Line number (1-based).
    pub fn line(&self) -> usize {
        self.pos.line()
    }

    /// Column number (1-based).
    pub fn column(&self) -> usize {
        self.pos.column()
    }
}

/// Result type for notation grammar operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Failure of a parse call.
///
/// Misuse of the API (an empty input) is kept apart from a malformed
/// document so callers can match on the two independently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input text was empty.
    #[error("tree notation input must not be empty")]
    EmptyInput,

    /// The input text is not valid tree notation.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl ParseError {
    /// The format error kind, or `None` for API misuse.
    pub fn format_kind(&self) -> Option<FormatErrorKind> {
        match self {
            Self::EmptyInput => None,
            Self::Format(err) => Some(err.kind),
        }
    }

    /// The underlying format error, if any.
    pub fn as_format_error(&self) -> Option<&FormatError> {
        match self {
            Self::EmptyInput => None,
            Self::Format(err) => Some(err),
        }
    }
}

/// Result type for parse calls.
pub type ParseResult<T> = Result<T, ParseError>;
