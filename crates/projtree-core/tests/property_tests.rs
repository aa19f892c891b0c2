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

//! Property-based tests for the tree notation parser.
//!
//! # Properties Tested
//!
//! 1. **Totality**: Any input, ASCII or not, yields a tree or an error,
//!    never a panic
//! 2. **Determinism**: Parsing the same input twice yields the same result
//! 3. **Caption Preservation**: Captions come back trimmed and otherwise intact
//! 4. **Shape Preservation**: Indentation maps to depth one level at a time

use projtree_core::{parse, FormatErrorKind, ParseError};
use proptest::prelude::*;

/// Caption text: no delimiters, no line breaks, no surrounding whitespace.
fn caption() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.][A-Za-z0-9_. :]{0,20}[A-Za-z0-9_.]|[A-Za-z0-9_.]"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: The parser returns for every input, including garbage.
    #[test]
    fn prop_parse_never_panics(input in "[ -~\t\r\n]{0,80}") {
        let _ = parse(&input);
    }

    /// Property: The parser returns for arbitrary Unicode, including
    /// whitespace outside ASCII around captions and values.
    #[test]
    fn prop_parse_never_panics_unicode(input in "\\PC{0,60}") {
        let _ = parse(&input);
    }

    /// Property: Unicode whitespace around a caption is trimmed away.
    #[test]
    fn prop_caption_trims_unicode_whitespace(
        text in caption(),
        before in "[ \t\u{0b}\u{0c}\u{a0}\u{2003}\u{3000}]{0,3}",
        after in "[ \t\u{0b}\u{0c}\u{a0}\u{2003}\u{3000}]{0,3}",
    ) {
        let tree = parse(&format!("{before}{text}{after}"));
        prop_assert!(tree.is_ok(), "{:?}", tree);
        prop_assert_eq!(&tree.unwrap().caption, &text);
    }

    /// Property: Parsing is deterministic, including the error kind and
    /// position on failure.
    #[test]
    fn prop_parse_determinism(input in "[A-Za-z(){}:, \n\"]{1,60}") {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    /// Property: Only the empty string is API misuse.
    #[test]
    fn prop_empty_input_only_for_empty_string(input in "[ -~\n]{1,40}") {
        prop_assert_ne!(parse(&input), Err(ParseError::EmptyInput));
    }

    /// Property: A caption surrounded by whitespace parses to the trimmed caption.
    #[test]
    fn prop_caption_trimmed(
        text in caption(),
        before in " {0,3}",
        after in " {0,3}",
    ) {
        let tree = parse(&format!("{before}{text}{after}")).unwrap();
        prop_assert_eq!(tree.caption, text);
        prop_assert!(tree.children.is_empty());
    }

    /// Property: A chain of nodes each one level deeper nests as a chain.
    #[test]
    fn prop_chain_depth(depth in 1usize..12) {
        let input: Vec<String> = (0..=depth)
            .map(|level| format!("{}N{level}", "    ".repeat(level)))
            .collect();
        let tree = parse(&input.join("\n")).unwrap();

        let shape: Vec<(usize, String)> = tree
            .walk()
            .map(|(d, node)| (d, node.caption.clone()))
            .collect();
        let expected: Vec<(usize, String)> = (0..=depth).map(|d| (d, format!("N{d}"))).collect();
        prop_assert_eq!(shape, expected);
    }

    /// Property: Jumping more than one level deeper always fails the same way.
    #[test]
    fn prop_indent_jump_rejected(jump in 2usize..8) {
        let input = format!("Root\n{}Child", "    ".repeat(jump));
        let err = parse(&input).unwrap_err();
        prop_assert_eq!(err.format_kind(), Some(FormatErrorKind::IndentTooManyLevels));
    }

    /// Property: Indentation that is not a whole number of units is a delimiter error.
    #[test]
    fn prop_partial_indent_rejected(units in 0usize..4, extra in 1usize..4) {
        let input = format!("Root\n{}Child", " ".repeat(units * 4 + extra));
        let err = parse(&input).unwrap_err();
        prop_assert_eq!(err.format_kind(), Some(FormatErrorKind::DelimiterExpected));
    }
}
