// rfdata - Robot Framework test data model, parser and writer
//
// Copyright (c) 2025 The rfdata contributors.
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
//! Configuration can be built in code or loaded from the settings keys
//! used by the editor (`"txt separating spaces"`, `"column count"`, ...).

use rfdata_core::{DataFormat, LineEnding, RfError, RfResult};
use serde::Deserialize;

/// Line separator written after every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LineSeparator {
    /// The platform newline.
    #[serde(rename = "native")]
    Native,
    #[serde(rename = "CRLF")]
    Crlf,
    #[serde(rename = "LF")]
    Lf,
}

impl LineSeparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native if cfg!(windows) => "\r\n",
            Self::Native | Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

/// Physical syntax of written files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Space,
    Pipe,
    Tsv,
}

impl OutputFormat {
    /// Output format for data read in `format`; reST cannot be written.
    pub fn from_data_format(format: DataFormat) -> RfResult<Self> {
        match format {
            DataFormat::Space => Ok(Self::Space),
            DataFormat::Pipe => Ok(Self::Pipe),
            DataFormat::Tsv => Ok(Self::Tsv),
            DataFormat::Rest => Err(RfError::format(
                "Writing reStructuredText files is not supported.",
            )),
        }
    }
}

/// Configuration for writing data files.
///
/// `None` for `line_separator` or `format` keeps what the file was read
/// with.
///
/// # Examples
///
/// ```
/// use rfdata_writer::{OutputFormat, WriterConfig};
///
/// let config = WriterConfig::builder()
///     .separating_spaces(2)
///     .format(OutputFormat::Pipe)
///     .build();
/// assert_eq!(config.txt_separating_spaces, 2);
/// assert_eq!(config.column_count, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
    /// Spaces between cells in space separated output.
    #[serde(rename = "txt separating spaces")]
    pub txt_separating_spaces: usize,

    /// Indentation width; no cell separator is narrower than this.
    #[serde(rename = "txt number of spaces")]
    pub txt_number_of_spaces: usize,

    /// Cell count above which rows are continued on a new line.
    #[serde(rename = "column count")]
    pub column_count: usize,

    #[serde(rename = "line separator")]
    pub line_separator: Option<LineSeparator>,

    pub format: Option<OutputFormat>,

    /// Width of the name column in aligned tables.
    #[serde(rename = "first column width")]
    pub first_column_width: usize,

    /// Write documentation lines separated by `\n` on their own rows.
    #[serde(rename = "split multiline doc")]
    pub split_multiline_doc: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            txt_separating_spaces: 4,
            txt_number_of_spaces: 2,
            column_count: 8,
            line_separator: None,
            format: None,
            first_column_width: 18,
            split_multiline_doc: true,
        }
    }
}

impl WriterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> WriterConfigBuilder {
        WriterConfigBuilder::new()
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_line_separator(mut self, separator: LineSeparator) -> Self {
        self.line_separator = Some(separator);
        self
    }

    pub fn with_column_count(mut self, count: usize) -> Self {
        self.column_count = count;
        self
    }

    /// Load configuration from a JSON object of settings keys.
    ///
    /// ```
    /// use rfdata_writer::{LineSeparator, WriterConfig};
    ///
    /// let config = WriterConfig::from_json(
    ///     r#"{"txt separating spaces": 2, "line separator": "CRLF"}"#,
    /// ).unwrap();
    /// assert_eq!(config.txt_separating_spaces, 2);
    /// assert_eq!(config.line_separator, Some(LineSeparator::Crlf));
    /// ```
    pub fn from_json(text: &str) -> RfResult<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| RfError::config(format!("Invalid writer configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that cannot produce readable output.
    pub fn validate(&self) -> RfResult<()> {
        if self.column_count < 2 {
            return Err(RfError::config(format!(
                "'column count' must be at least 2, got {}.",
                self.column_count
            )));
        }
        if self.txt_number_of_spaces < 2 {
            return Err(RfError::config(format!(
                "'txt number of spaces' must be at least 2, got {}.",
                self.txt_number_of_spaces
            )));
        }
        Ok(())
    }

    /// Cell separator width actually used.
    pub fn cell_separator_width(&self) -> usize {
        self.txt_separating_spaces.max(self.txt_number_of_spaces)
    }

    /// Newline for a file read with `read_with`.
    pub fn newline(&self, read_with: LineEnding) -> &'static str {
        match self.line_separator {
            Some(separator) => separator.as_str(),
            None => read_with.as_str(),
        }
    }
}

/// Builder for [`WriterConfig`].
#[derive(Debug, Clone, Default)]
pub struct WriterConfigBuilder {
    config: WriterConfig,
}

impl WriterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separating_spaces(mut self, spaces: usize) -> Self {
        self.config.txt_separating_spaces = spaces;
        self
    }

    pub fn number_of_spaces(mut self, spaces: usize) -> Self {
        self.config.txt_number_of_spaces = spaces;
        self
    }

    pub fn column_count(mut self, count: usize) -> Self {
        self.config.column_count = count;
        self
    }

    pub fn line_separator(mut self, separator: LineSeparator) -> Self {
        self.config.line_separator = Some(separator);
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = Some(format);
        self
    }

    pub fn first_column_width(mut self, width: usize) -> Self {
        self.config.first_column_width = width;
        self
    }

    pub fn split_multiline_doc(mut self, split: bool) -> Self {
        self.config.split_multiline_doc = split;
        self
    }

    pub fn build(self) -> WriterConfig {
        self.config
    }
}
