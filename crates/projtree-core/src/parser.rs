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

//! Main parser for tree notation.
//!
//! The parser is recursive descent over an explicit [`Cursor`]: each grammar
//! function takes a cursor and returns what it read together with the
//! advanced cursor. Lines are read one node at a time and assembled into the
//! tree with a stack of open nodes, one per indentation level below the root.
//!
//! Parsing is fail-fast. The first grammar violation is returned as a
//! [`FormatError`](crate::FormatError) and no partial tree is produced.

use tracing::{debug, trace};

use crate::error::{FormatErrorKind, FormatResult, ParseError, ParseResult};
use crate::lex::{
    is_line_break, read_icon, read_identifier, read_indent, validate_indent, Cursor, CAPTION,
    DEFAULT_INDENT_WIDTH, ITEM_VALUE, PROPERTY_NAME, PROPERTY_VALUE,
};
use crate::node::{IconMoniker, TreeNode, Visibility};

/// Parsing options for tree notation.
///
/// # Examples
///
/// ```
/// use projtree_core::{parse_with_options, ParseOptions};
///
/// let opts = ParseOptions::builder().indent_width(2).build();
/// let tree = parse_with_options("Root\n  Child", opts).unwrap();
/// assert_eq!(tree.children[0].caption, "Child");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Whitespace characters per nesting level (default: 4). Zero is
    /// treated as 1.
    pub indent_width: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of ParseOptions.
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    indent_width: usize,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }

    /// Set the number of whitespace characters per nesting level.
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            indent_width: self.indent_width.max(1),
        }
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a tree notation document with default options.
///
/// # Examples
///
/// ```
/// use projtree_core::{parse, Visibility};
///
/// let tree = parse("Root (visibility: invisible, flags: {ProjectRoot})\n    Properties").unwrap();
/// assert_eq!(tree.caption, "Root");
/// assert_eq!(tree.visibility, Visibility::Invisible);
/// assert_eq!(tree.capabilities, vec!["ProjectRoot"]);
/// assert_eq!(tree.children.len(), 1);
/// ```
pub fn parse(text: &str) -> ParseResult<TreeNode> {
    parse_with_options(text, ParseOptions::default())
}

/// Parse a tree notation document with custom options.
///
/// Leading and trailing line breaks are ignored. Error offsets refer to the
/// original `text`.
///
/// # Errors
///
/// - [`ParseError::EmptyInput`] if `text` is empty
/// - [`ParseError::Format`] with the first grammar violation otherwise
pub fn parse_with_options(text: &str, options: ParseOptions) -> ParseResult<TreeNode> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let end = text.trim_end_matches(is_line_break).len();
    let start = (text.len() - text.trim_start_matches(is_line_break).len()).min(end);
    let cursor = Cursor::starting_at(&text[..end], start);

    debug!(
        len = end - start,
        indent_width = options.indent_width,
        "parsing project tree"
    );

    match parse_tree(cursor, &options) {
        Ok(tree) => {
            debug!(nodes = tree.descendant_count() + 1, "parsed project tree");
            Ok(tree)
        }
        Err(err) => {
            debug!(kind = %err.kind, pos = %err.pos, "project tree parse failed");
            Err(err.into())
        }
    }
}

// --- Tree assembly ---

fn parse_tree(cursor: Cursor<'_>, options: &ParseOptions) -> FormatResult<TreeNode> {
    let (mut root, mut cur) = read_node(cursor)?;
    trace!(caption = %root.caption, level = 0, "read node");

    // Open nodes below the root; `stack[i]` is at level `i + 1`.
    let mut stack: Vec<TreeNode> = Vec::new();

    while let Some(line) = cur.skip_line_break() {
        reject_blank_line(line)?;
        let (indent, content) = read_indent(line, options.indent_width)?;
        validate_indent(indent, stack.len(), line)?;

        pop_frames(&mut root, &mut stack, indent.level);

        let (node, next) = read_node(content)?;
        trace!(caption = %node.caption, level = indent.level, "read node");
        stack.push(node);
        cur = next;
    }

    pop_frames(&mut root, &mut stack, 1);
    Ok(root)
}

/// A line holding nothing but whitespace has no caption to read.
///
/// An empty line is left to indentation checks (it is a second root).
fn reject_blank_line(line: Cursor<'_>) -> FormatResult<()> {
    let (content, _) = line.take_while(|ch| !is_line_break(ch));
    if !content.is_empty() && content.trim().is_empty() {
        return Err(line.fail(FormatErrorKind::IdExpectedEncounteredOnlyWhiteSpace));
    }
    Ok(())
}

/// Close every open node at `level` or deeper, attaching each to its parent.
fn pop_frames(root: &mut TreeNode, stack: &mut Vec<TreeNode>, level: usize) {
    while stack.len() >= level {
        let Some(node) = stack.pop() else { break };
        match stack.last_mut() {
            Some(parent) => parent.add_child(node),
            None => root.add_child(node),
        }
    }
}

// --- Node lines ---

/// Read one node line: caption, optional `( ... )` block, item properties.
///
/// The returned cursor is at a line break or end of input.
fn read_node(cursor: Cursor<'_>) -> FormatResult<(TreeNode, Cursor<'_>)> {
    let (caption, cur) = read_identifier(cursor, &CAPTION)?;
    let mut node = TreeNode::new(caption);

    let cur = if cur.at('(') {
        let (props, next) = read_paren_properties(cur)?;
        for prop in props {
            prop.apply(&mut node);
        }
        next
    } else {
        cur
    };

    let (props, cur) = read_item_properties(cur)?;
    for prop in props {
        prop.apply(&mut node);
    }

    match cur.peek() {
        Some(ch) if !is_line_break(ch) => Err(cur.error(
            FormatErrorKind::EndOfStringExpected,
            format!("unexpected '{}' after the last value of '{}'", ch.escape_debug(), node.caption),
        )),
        _ => Ok((node, cur)),
    }
}

/// `:` followed by exactly one space.
fn expect_key_separator(cursor: Cursor<'_>) -> FormatResult<Cursor<'_>> {
    cursor.expect(':')?.expect(' ')
}

// --- Parenthesized properties ---

#[derive(Debug, Clone, PartialEq)]
enum ParenProperty<'a> {
    Visibility(Visibility),
    Flags(Vec<&'a str>),
}

impl ParenProperty<'_> {
    fn apply(self, node: &mut TreeNode) {
        match self {
            Self::Visibility(visibility) => node.visibility = visibility,
            Self::Flags(flags) => node
                .capabilities
                .extend(flags.into_iter().map(str::to_string)),
        }
    }
}

fn read_paren_properties(cursor: Cursor<'_>) -> FormatResult<(Vec<ParenProperty<'_>>, Cursor<'_>)> {
    let mut cur = cursor.expect('(')?;
    let mut props = Vec::new();
    if cur.at(')') {
        return Ok((props, cur.bump()));
    }

    loop {
        let (prop, next) = read_paren_property(cur)?;
        props.push(prop);
        match next.peek() {
            Some(')') => return Ok((props, next.bump())),
            Some(',') => cur = next.bump().expect(' ')?,
            Some(ch) => {
                return Err(next.error(
                    FormatErrorKind::DelimiterExpected,
                    format!("expected ',' or ')', found '{}'", ch.escape_debug()),
                ))
            }
            None => {
                return Err(next.error(
                    FormatErrorKind::DelimiterExpectedEncounteredEndOfString,
                    "expected ',' or ')', found end of input",
                ))
            }
        }
    }
}

fn read_paren_property(cursor: Cursor<'_>) -> FormatResult<(ParenProperty<'_>, Cursor<'_>)> {
    let (name, cur) = read_identifier(cursor, &PROPERTY_NAME)?;
    match name {
        "visibility" => {
            let cur = expect_key_separator(cur)?;
            let (value, next) = read_identifier(cur, &PROPERTY_VALUE)?;
            let visibility = Visibility::from_keyword(value).ok_or_else(|| {
                cur.error(
                    FormatErrorKind::UnrecognizedPropertyValue,
                    format!("'{value}' is not a visibility; expected 'visible' or 'invisible'"),
                )
            })?;
            Ok((ParenProperty::Visibility(visibility), next))
        }
        "flags" => {
            let cur = expect_key_separator(cur)?;
            let (flags, next) = read_flags(cur)?;
            Ok((ParenProperty::Flags(flags), next))
        }
        _ => Err(cursor.error(
            FormatErrorKind::UnrecognizedPropertyName,
            format!("'{name}' is not a recognized property; expected 'visibility' or 'flags'"),
        )),
    }
}

/// `{}` or `{A B C}`.
fn read_flags(cursor: Cursor<'_>) -> FormatResult<(Vec<&str>, Cursor<'_>)> {
    let mut cur = cursor.expect('{')?;
    let mut flags = Vec::new();
    if cur.at('}') {
        return Ok((flags, cur.bump()));
    }

    loop {
        let (flag, next) = read_identifier(cur, &PROPERTY_VALUE)?;
        flags.push(flag);
        match next.peek() {
            Some('}') => return Ok((flags, next.bump())),
            Some(' ') => cur = next.bump(),
            Some(ch) => {
                return Err(next.error(
                    FormatErrorKind::DelimiterExpected,
                    format!("expected ' ' or '}}', found '{}'", ch.escape_debug()),
                ))
            }
            None => {
                return Err(next.error(
                    FormatErrorKind::DelimiterExpectedEncounteredEndOfString,
                    "expected ' ' or '}', found end of input",
                ))
            }
        }
    }
}

// --- Item properties ---

#[derive(Debug, Clone, PartialEq)]
enum ItemProperty<'a> {
    FilePath(&'a str),
    Icon(Option<IconMoniker>),
    ExpandedIcon(Option<IconMoniker>),
    ItemType(&'a str),
    SubType(&'a str),
}

impl ItemProperty<'_> {
    fn apply(self, node: &mut TreeNode) {
        match self {
            Self::FilePath(path) => node.file_path = Some(path.to_string()),
            Self::Icon(icon) => node.icon = icon,
            Self::ExpandedIcon(icon) => node.expanded_icon = icon,
            Self::ItemType(item_type) => node.item_type = Some(item_type.to_string()),
            Self::SubType(sub_type) => node.sub_type = Some(sub_type.to_string()),
        }
    }
}

/// Zero or more `, Key: value` entries.
fn read_item_properties(cursor: Cursor<'_>) -> FormatResult<(Vec<ItemProperty<'_>>, Cursor<'_>)> {
    let mut cur = cursor;
    let mut props = Vec::new();
    while cur.at(',') {
        let (prop, next) = read_item_property(cur.bump().expect(' ')?)?;
        props.push(prop);
        cur = next;
    }
    Ok((props, cur))
}

fn read_item_property(cursor: Cursor<'_>) -> FormatResult<(ItemProperty<'_>, Cursor<'_>)> {
    let (name, cur) = read_identifier(cursor, &PROPERTY_NAME)?;
    match name {
        "FilePath" => {
            let (path, next) = read_quoted(expect_key_separator(cur)?)?;
            Ok((ItemProperty::FilePath(path), next))
        }
        "Icon" => {
            let (icon, next) = read_icon(expect_key_separator(cur)?)?;
            Ok((ItemProperty::Icon(icon), next))
        }
        "ExpandedIcon" => {
            let (icon, next) = read_icon(expect_key_separator(cur)?)?;
            Ok((ItemProperty::ExpandedIcon(icon), next))
        }
        "ItemType" => {
            let (value, next) = read_identifier(expect_key_separator(cur)?, &ITEM_VALUE)?;
            Ok((ItemProperty::ItemType(value), next))
        }
        "SubType" => {
            let (value, next) = read_identifier(expect_key_separator(cur)?, &ITEM_VALUE)?;
            Ok((ItemProperty::SubType(value), next))
        }
        _ => Err(cursor.error(
            FormatErrorKind::UnrecognizedPropertyName,
            format!(
                "'{name}' is not a recognized property; expected 'FilePath', 'Icon', 'ExpandedIcon', 'ItemType' or 'SubType'"
            ),
        )),
    }
}

/// A double-quoted string on a single line. There is no escaping.
fn read_quoted(cursor: Cursor<'_>) -> FormatResult<(&str, Cursor<'_>)> {
    let cur = cursor.expect('"')?;
    let (content, next) = cur.take_while(|ch| ch != '"' && !is_line_break(ch));
    Ok((content, next.expect('"')?))
}
