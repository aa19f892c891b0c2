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

//! Icon moniker values: `{}` or `{GUID INDEX}`.

use uuid::Uuid;

use super::cursor::Cursor;
use super::tokens::is_line_break;
use crate::error::{FormatErrorKind, FormatResult};
use crate::node::IconMoniker;

/// Length of a hyphenated GUID (8-4-4-4-12).
const HYPHENATED_GUID_LEN: usize = 36;

fn ends_moniker_token(ch: char) -> bool {
    ch == ' ' || ch == '}' || is_line_break(ch)
}

/// Read an icon value.
///
/// `{}` yields `None`. Otherwise the braces hold a hyphenated GUID, one
/// space, and a non-negative decimal index.
pub fn read_icon(cursor: Cursor<'_>) -> FormatResult<(Option<IconMoniker>, Cursor<'_>)> {
    let cur = cursor.expect('{')?;
    if cur.at('}') {
        return Ok((None, cur.bump()));
    }

    let (guid, cur) = read_guid(cur)?;
    if !cur.at(' ') {
        return Err(cur.error(FormatErrorKind::IntegerExpected, "expected an image index after the GUID"));
    }
    let (index, cur) = read_index(cur.bump())?;
    let cur = cur.expect('}')?;

    Ok((Some(IconMoniker::new(guid, index)), cur))
}

/// Read a GUID in hyphenated form (either case, no braces).
pub fn read_guid(cursor: Cursor<'_>) -> FormatResult<(Uuid, Cursor<'_>)> {
    let (token, next) = cursor.take_while(|ch| !ends_moniker_token(ch));
    if token.len() != HYPHENATED_GUID_LEN {
        return Err(cursor.error(FormatErrorKind::GuidExpected, format!("'{token}' is not a GUID")));
    }
    let guid = Uuid::try_parse(token)
        .map_err(|e| cursor.error(FormatErrorKind::GuidExpected, format!("'{token}' is not a GUID: {e}")))?;
    Ok((guid, next))
}

/// Read a non-negative image index.
pub fn read_index(cursor: Cursor<'_>) -> FormatResult<(u32, Cursor<'_>)> {
    let (token, next) = cursor.take_while(|ch| !ends_moniker_token(ch));
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(cursor.error(FormatErrorKind::IntegerExpected, format!("'{token}' is not an image index")));
    }
    let index = token
        .parse::<u32>()
        .map_err(|e| cursor.error(FormatErrorKind::IntegerExpected, format!("'{token}' is out of range: {e}")))?;
    Ok((index, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUID: &str = "41F80260-959C-4556-852C-F7D1B31DD201";

    fn icon(input: &str) -> FormatResult<Option<IconMoniker>> {
        read_icon(Cursor::new(input)).map(|(icon, _)| icon)
    }

    fn kind(input: &str) -> FormatErrorKind {
        icon(input).unwrap_err().kind
    }

    // ==================== Valid values ====================

    #[test]
    fn test_empty_braces_are_no_value() {
        let (value, cur) = read_icon(Cursor::new("{}, x")).unwrap();
        assert_eq!(value, None);
        assert_eq!(cur.rest(), ", x");
    }

    #[test]
    fn test_guid_and_index() {
        let value = icon(&format!("{{{GUID} 10}}")).unwrap().unwrap();
        assert_eq!(value.guid, Uuid::parse_str(GUID).unwrap());
        assert_eq!(value.index, 10);
    }

    #[test]
    fn test_lowercase_guid() {
        let value = icon(&format!("{{{} 0}}", GUID.to_lowercase())).unwrap().unwrap();
        assert_eq!(value.guid, Uuid::parse_str(GUID).unwrap());
        assert_eq!(value.index, 0);
    }

    #[test]
    fn test_index_max() {
        let value = icon(&format!("{{{GUID} {}}}", u32::MAX)).unwrap().unwrap();
        assert_eq!(value.index, u32::MAX);
    }

    // ==================== GUID errors ====================

    #[test]
    fn test_short_guid() {
        assert_eq!(kind("{1}"), FormatErrorKind::GuidExpected);
        assert_eq!(kind("{1 2}"), FormatErrorKind::GuidExpected);
    }

    #[test]
    fn test_missing_guid() {
        assert_eq!(kind("{ 10}"), FormatErrorKind::GuidExpected);
    }

    #[test]
    fn test_braced_guid_is_rejected() {
        assert_eq!(kind(&format!("{{{{{GUID}}} 10}}")), FormatErrorKind::GuidExpected);
        assert_eq!(kind(&format!("{{{{{GUID} 10}}")), FormatErrorKind::GuidExpected);
    }

    #[test]
    fn test_simple_form_guid_is_rejected() {
        let simple = GUID.replace('-', "");
        assert_eq!(kind(&format!("{{{simple} 10}}")), FormatErrorKind::GuidExpected);
    }

    #[test]
    fn test_non_hex_guid() {
        assert_eq!(
            kind("{41F80260-959C-4556-852C-F7D1B31DD2XZ 10}"),
            FormatErrorKind::GuidExpected
        );
    }

    // ==================== Index errors ====================

    #[test]
    fn test_missing_index() {
        assert_eq!(kind(&format!("{{{GUID}}}")), FormatErrorKind::IntegerExpected);
        assert_eq!(kind(&format!("{{{GUID}")), FormatErrorKind::IntegerExpected);
        assert_eq!(kind(&format!("{{{GUID} }}")), FormatErrorKind::IntegerExpected);
    }

    #[test]
    fn test_non_numeric_index() {
        assert_eq!(kind(&format!("{{{GUID} A}}")), FormatErrorKind::IntegerExpected);
        assert_eq!(kind(&format!("{{{GUID} 10x}}")), FormatErrorKind::IntegerExpected);
        assert_eq!(kind(&format!("{{{GUID} -1}}")), FormatErrorKind::IntegerExpected);
        assert_eq!(kind(&format!("{{{GUID} +1}}")), FormatErrorKind::IntegerExpected);
    }

    #[test]
    fn test_index_overflow() {
        assert_eq!(kind(&format!("{{{GUID} 4294967296}}")), FormatErrorKind::IntegerExpected);
    }

    // ==================== Delimiter errors ====================

    #[test]
    fn test_missing_open_brace() {
        assert_eq!(kind(GUID), FormatErrorKind::DelimiterExpected);
        assert_eq!(kind(""), FormatErrorKind::DelimiterExpectedEncounteredEndOfString);
    }

    #[test]
    fn test_missing_close_brace() {
        assert_eq!(kind(&format!("{{{GUID} 10")), FormatErrorKind::DelimiterExpectedEncounteredEndOfString);
        assert_eq!(kind(&format!("{{{GUID} 10 11}}")), FormatErrorKind::DelimiterExpected);
    }
}
