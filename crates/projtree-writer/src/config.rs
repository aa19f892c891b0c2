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

//! Writer configuration.
//!
//! This module defines configuration options for controlling notation output.

use crate::options::WriterOptions;
use projtree_core::lex::DEFAULT_INDENT_WIDTH;

/// Configuration for notation output.
///
/// # Examples
///
/// ```
/// use projtree_writer::{WriterConfig, WriterOptions};
///
/// // Default configuration: captions only, four-space indent
/// let config = WriterConfig::default();
/// assert!(config.options.is_empty());
/// assert_eq!(config.indent_width, 4);
///
/// let config = WriterConfig::new()
///     .with_options(WriterOptions::all_facets())
///     .with_indent_width(2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct WriterConfig {
    /// Facets to write.
    ///
    /// Default: [`WriterOptions::NONE`]
    pub options: WriterOptions,

    /// Spaces per nesting level. Must match the `indent_width` the output
    /// will be parsed with.
    ///
    /// Default: `4`
    pub indent_width: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            options: WriterOptions::NONE,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl WriterConfig {
    /// Create a new configuration with all default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a `WriterConfig`.
    ///
    /// # Examples
    ///
    /// ```
    /// use projtree_writer::{WriterConfig, WriterOptions};
    ///
    /// let config = WriterConfig::builder()
    ///     .options(WriterOptions::FLAGS)
    ///     .indent_width(2)
    ///     .build();
    /// assert!(config.options.flags);
    /// ```
    pub fn builder() -> WriterConfigBuilder {
        WriterConfigBuilder::new()
    }

    /// Set the facets to write.
    pub fn with_options(mut self, options: WriterOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the spaces per nesting level. Zero is treated as 1.
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width.max(1);
        self
    }
}

impl From<WriterOptions> for WriterConfig {
    fn from(options: WriterOptions) -> Self {
        Self::new().with_options(options)
    }
}

/// Builder for constructing a `WriterConfig` with a chainable API.
#[derive(Debug, Clone)]
pub struct WriterConfigBuilder {
    options: WriterOptions,
    indent_width: usize,
}

impl Default for WriterConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WriterConfigBuilder {
    /// Create a new builder with default configuration values.
    pub fn new() -> Self {
        Self {
            options: WriterOptions::NONE,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }

    /// Replace the selected facets.
    pub fn options(mut self, options: WriterOptions) -> Self {
        self.options = options;
        self
    }

    /// Add facets to the selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use projtree_writer::{WriterConfig, WriterOptions};
    ///
    /// let config = WriterConfig::builder()
    ///     .facet(WriterOptions::TAGS)
    ///     .facet(WriterOptions::FLAGS)
    ///     .build();
    /// assert!(config.options.tags && config.options.flags);
    /// ```
    pub fn facet(mut self, facet: WriterOptions) -> Self {
        self.options |= facet;
        self
    }

    /// Set the spaces per nesting level.
    pub fn indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Build the `WriterConfig` from this builder.
    ///
    /// An indent width of zero is raised to 1.
    pub fn build(self) -> WriterConfig {
        WriterConfig {
            options: self.options,
            indent_width: self.indent_width.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== WriterConfig tests ====================

    #[test]
    fn test_writer_config_default() {
        let config = WriterConfig::default();
        assert_eq!(config.options, WriterOptions::NONE);
        assert_eq!(config.indent_width, 4);
        assert_eq!(WriterConfig::new(), config);
    }

    #[test]
    fn test_writer_config_with_methods() {
        let config = WriterConfig::new()
            .with_options(WriterOptions::ICONS)
            .with_indent_width(8);
        assert_eq!(config.options, WriterOptions::ICONS);
        assert_eq!(config.indent_width, 8);
    }

    #[test]
    fn test_writer_config_zero_width_clamped() {
        assert_eq!(WriterConfig::new().with_indent_width(0).indent_width, 1);
    }

    #[test]
    fn test_writer_config_from_options() {
        let config = WriterConfig::from(WriterOptions::SUB_TYPE);
        assert_eq!(config.options, WriterOptions::SUB_TYPE);
        assert_eq!(config.indent_width, 4);
    }

    // ==================== WriterConfigBuilder tests ====================

    #[test]
    fn test_builder_default_matches_config_default() {
        assert_eq!(WriterConfig::builder().build(), WriterConfig::default());
        assert_eq!(WriterConfigBuilder::default().build(), WriterConfig::default());
    }

    #[test]
    fn test_builder_options_replaces() {
        let config = WriterConfig::builder()
            .facet(WriterOptions::TAGS)
            .options(WriterOptions::FLAGS)
            .build();
        assert_eq!(config.options, WriterOptions::FLAGS);
    }

    #[test]
    fn test_builder_facet_accumulates() {
        let config = WriterConfig::builder()
            .facet(WriterOptions::VISIBILITY)
            .facet(WriterOptions::FILE_PATH)
            .build();
        assert_eq!(config.options, WriterOptions::VISIBILITY | WriterOptions::FILE_PATH);
    }

    #[test]
    fn test_builder_zero_width_clamped() {
        assert_eq!(WriterConfig::builder().indent_width(0).build().indent_width, 1);
    }
}
