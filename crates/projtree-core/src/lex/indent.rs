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

//! Indentation handling for tree notation.

use super::cursor::Cursor;
use super::tokens::is_inline_whitespace;
use crate::error::{FormatErrorKind, FormatResult};

/// Default number of whitespace characters per nesting level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Information about a line's indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentInfo {
    /// Number of leading whitespace characters consumed.
    pub width: usize,
    /// Nesting level (width / indent unit).
    pub level: usize,
}

/// Read the indentation at the start of a line.
///
/// Indentation is consumed one whole unit at a time; a run of whitespace
/// that stops partway through a unit is a delimiter error.
///
/// # Parameters
/// - `cursor`: positioned at the first character of the line
/// - `unit`: whitespace characters per level (at least 1)
pub fn read_indent(cursor: Cursor<'_>, unit: usize) -> FormatResult<(IndentInfo, Cursor<'_>)> {
    let unit = unit.max(1);
    let mut cur = cursor;
    let mut level = 0;

    while cur.peek().is_some_and(is_inline_whitespace) {
        for _ in 0..unit {
            cur = expect_whitespace(cur)?;
        }
        level += 1;
    }

    Ok((
        IndentInfo {
            width: level * unit,
            level,
        },
        cur,
    ))
}

fn expect_whitespace(cursor: Cursor<'_>) -> FormatResult<Cursor<'_>> {
    match cursor.peek() {
        Some(ch) if is_inline_whitespace(ch) => Ok(cursor.bump()),
        Some(ch) => Err(cursor.error(
            FormatErrorKind::DelimiterExpected,
            format!("incomplete indentation, found '{}'", ch.escape_debug()),
        )),
        None => Err(cursor.error(
            FormatErrorKind::DelimiterExpectedEncounteredEndOfString,
            "incomplete indentation at end of input",
        )),
    }
}

/// Validate the level of a non-root line against the previous node's level.
///
/// # Parameters
/// - `info`: indentation of the new line
/// - `previous_level`: level of the node read before it
/// - `cursor`: position used for error reporting
pub fn validate_indent(info: IndentInfo, previous_level: usize, cursor: Cursor<'_>) -> FormatResult<()> {
    if info.level == 0 {
        return Err(cursor.fail(FormatErrorKind::MultipleRoots));
    }
    if info.level > previous_level + 1 {
        return Err(cursor.error(
            FormatErrorKind::IndentTooManyLevels,
            format!(
                "indent level {} follows level {}; children may only be one level deeper",
                info.level, previous_level
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indent(line: &str) -> FormatResult<IndentInfo> {
        read_indent(Cursor::new(line), DEFAULT_INDENT_WIDTH).map(|(info, _)| info)
    }

    // ==================== read_indent: valid cases ====================

    #[test]
    fn test_read_indent_zero() {
        let info = indent("Root").unwrap();
        assert_eq!(info, IndentInfo { width: 0, level: 0 });
    }

    #[test]
    fn test_read_indent_levels() {
        assert_eq!(indent("    Child").unwrap().level, 1);
        assert_eq!(indent("        Child").unwrap().level, 2);
        assert_eq!(indent("            Child").unwrap().level, 3);
    }

    #[test]
    fn test_read_indent_leaves_cursor_on_content() {
        let (info, cur) = read_indent(Cursor::new("        Child"), 4).unwrap();
        assert_eq!(info.width, 8);
        assert_eq!(cur.rest(), "Child");
    }

    #[test]
    fn test_read_indent_custom_unit() {
        let (info, cur) = read_indent(Cursor::new("    Child"), 2).unwrap();
        assert_eq!(info.level, 2);
        assert_eq!(cur.rest(), "Child");
    }

    #[test]
    fn test_read_indent_zero_unit_is_clamped() {
        let (info, _) = read_indent(Cursor::new("  Child"), 0).unwrap();
        assert_eq!(info.level, 2);
    }

    #[test]
    fn test_read_indent_tabs_count_as_whitespace() {
        assert_eq!(indent("\t\t\t\tChild").unwrap().level, 1);
    }

    // ==================== read_indent: partial units ====================

    #[test]
    fn test_partial_unit_before_content() {
        let err = indent("  Child").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::DelimiterExpected);
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn test_partial_unit_after_full_unit() {
        let err = indent("      Child").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::DelimiterExpected);
        assert_eq!(err.offset, 6);
    }

    #[test]
    fn test_partial_unit_at_end_of_input() {
        let err = indent("  ").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::DelimiterExpectedEncounteredEndOfString);
    }

    // ==================== validate_indent ====================

    #[test]
    fn test_validate_indent_one_deeper() {
        let cur = Cursor::new("");
        assert!(validate_indent(IndentInfo { width: 4, level: 1 }, 0, cur).is_ok());
        assert!(validate_indent(IndentInfo { width: 12, level: 3 }, 2, cur).is_ok());
    }

    #[test]
    fn test_validate_indent_same_or_shallower() {
        let cur = Cursor::new("");
        assert!(validate_indent(IndentInfo { width: 8, level: 2 }, 2, cur).is_ok());
        assert!(validate_indent(IndentInfo { width: 4, level: 1 }, 3, cur).is_ok());
    }

    #[test]
    fn test_validate_indent_too_deep() {
        let cur = Cursor::new("");
        let err = validate_indent(IndentInfo { width: 8, level: 2 }, 0, cur).unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::IndentTooManyLevels);
        let err = validate_indent(IndentInfo { width: 20, level: 5 }, 2, cur).unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::IndentTooManyLevels);
    }

    #[test]
    fn test_validate_indent_level_zero_is_second_root() {
        let cur = Cursor::new("");
        let err = validate_indent(IndentInfo { width: 0, level: 0 }, 3, cur).unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::MultipleRoots);
    }
}
