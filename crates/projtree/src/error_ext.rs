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

//! Error context helpers.
//!
//! Extension traits for `Result<T, ParseError>` and `Result<T, FormatError>`
//! that annotate errors as they propagate.
//!
//! # Examples
//!
//! ```rust
//! use projtree::{parse, TreeResultExt};
//!
//! fn load_fixture(name: &str, text: &str) -> Result<projtree::TreeNode, projtree::ParseError> {
//!     parse(text).with_context(|| format!("in fixture {name}"))
//! }
//!
//! let err = load_fixture("empty-caption", "Root\n    (flags: {})").unwrap_err();
//! let err = err.as_format_error().unwrap();
//! assert_eq!(err.context.as_deref(), Some("in fixture empty-caption"));
//! ```

use std::fmt;

use crate::{FormatError, ParseError};

/// Extension trait for adding context to notation errors.
///
/// Context is stored in the error's `context` field without changing its
/// kind or message. Each new context is prepended to any existing context,
/// separated by `"; "`, so the outermost caller reads first.
pub trait TreeResultExt<T, E> {
    /// Add context to an error.
    ///
    /// ```rust
    /// use projtree::{parse, TreeResultExt};
    ///
    /// let err = parse("Root\nRoot2")
    ///     .context("in section A")
    ///     .context("while loading solution")
    ///     .unwrap_err();
    /// let context = err.as_format_error().unwrap().context.clone().unwrap();
    /// assert_eq!(context, "while loading solution; in section A");
    /// ```
    fn context<C>(self, context: C) -> Result<T, E>
    where
        C: fmt::Display;

    /// Add context computed only on the error path.
    fn with_context<C, F>(self, f: F) -> Result<T, E>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T> TreeResultExt<T, FormatError> for Result<T, FormatError> {
    fn context<C>(self, context: C) -> Result<T, FormatError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, FormatError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(e, f().to_string()))
    }
}

/// `ParseError::EmptyInput` has nowhere to hold context and is returned
/// unchanged.
impl<T> TreeResultExt<T, ParseError> for Result<T, ParseError> {
    fn context<C>(self, context: C) -> Result<T, ParseError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| match e {
            ParseError::Format(err) => ParseError::Format(add_context_to_error(err, context.to_string())),
            other => other,
        })
    }

    fn with_context<C, F>(self, f: F) -> Result<T, ParseError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| match e {
            ParseError::Format(err) => ParseError::Format(add_context_to_error(err, f().to_string())),
            other => other,
        })
    }
}

fn add_context_to_error(mut error: FormatError, new_context: String) -> FormatError {
    if new_context.is_empty() {
        return error;
    }

    error.context = Some(match error.context {
        Some(existing) => format!("{new_context}; {existing}"),
        None => new_context,
    });

    error
}
