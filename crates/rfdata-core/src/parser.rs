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

//! Entry points for parsing single data files.
//!
//! A file goes through four phases: preprocessing (decoding, line endings,
//! limits), reading (cell splitting and layout detection), population (rows
//! into tables) and, for callers that need it, validation of the resulting
//! diagnostics. Only structural problems make a parse fail; everything else
//! is reported through the file's diagnostics.

use crate::error::{RfError, RfResult};
use crate::language::Languages;
use crate::limits::Limits;
use crate::lex::reader::{DataFormat, Reader};
use crate::model::files::{FileData, FileKind, ResourceFile, TestCaseFile};
use crate::populators::{FromFilePopulator, ParseContext};
use crate::preprocess::preprocess;
use std::path::Path;

/// Options for reading data files.
///
/// ```
/// use rfdata_core::{DataFormat, ReaderOptions};
///
/// let options = ReaderOptions::builder()
///     .separating_spaces(4)
///     .format(DataFormat::Pipe)
///     .build();
/// assert_eq!(options.separating_spaces, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    pub limits: Limits,
    /// Indentation unit used until one is detected from the data.
    pub separating_spaces: usize,
    /// Format to use instead of the one implied by the extension.
    pub format: Option<DataFormat>,
    /// Languages to use instead of the file's `Language:` directive.
    pub languages: Option<Languages>,
    /// Extensions accepted when a file is parsed from disk.
    pub extensions: Vec<String>,
}

/// Extensions read by default; `resource` only through resource imports.
pub const DEFAULT_EXTENSIONS: &[&str] = &["robot", "txt", "tsv", "rst", "rest", "resource"];

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            separating_spaces: 2,
            format: None,
            languages: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ReaderOptions {
    pub fn builder() -> ReaderOptionsBuilder {
        ReaderOptionsBuilder::new()
    }

    /// Whether `path` has one of the accepted extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(false, |ext| {
                self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
            })
    }
}

/// Builder for [`ReaderOptions`].
#[derive(Debug, Clone, Default)]
pub struct ReaderOptionsBuilder {
    options: ReaderOptions,
}

impl ReaderOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.options.limits = limits;
        self
    }

    pub fn max_file_size(mut self, size: usize) -> Self {
        self.options.limits.max_file_size = size;
        self
    }

    pub fn max_line_length(mut self, length: usize) -> Self {
        self.options.limits.max_line_length = length;
        self
    }

    pub fn separating_spaces(mut self, spaces: usize) -> Self {
        self.options.separating_spaces = spaces;
        self
    }

    pub fn format(mut self, format: DataFormat) -> Self {
        self.options.format = Some(format);
        self
    }

    pub fn languages(mut self, languages: Languages) -> Self {
        self.options.languages = Some(languages);
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> ReaderOptions {
        self.options
    }
}

/// Parse raw bytes as a file of the given kind.
pub fn parse_bytes(
    input: &[u8],
    kind: FileKind,
    source: Option<&Path>,
    options: &ReaderOptions,
) -> RfResult<FileData> {
    let format = options
        .format
        .or_else(|| source.and_then(DataFormat::from_path))
        .unwrap_or_default();
    let attach = |err: RfError| match (source, &err.path) {
        (Some(path), None) => err.with_path(path),
        _ => err,
    };
    let input = preprocess(input, &options.limits).map_err(attach)?;
    let mut ctx = ParseContext::new(
        source.map(Path::to_path_buf),
        kind,
        options.languages.clone().unwrap_or_default(),
    );
    ctx.languages_fixed = options.languages.is_some();
    let mut populator = FromFilePopulator::new(ctx);
    let summary = Reader::new(format, options.separating_spaces, &options.limits)
        .read(&input, &mut populator)
        .map_err(attach)?;
    let mut data = populator.into_data(summary);
    data.line_ending = input.line_ending();
    tracing::debug!(
        source = %source.map(|p| p.display().to_string()).unwrap_or_default(),
        diagnostics = data.diagnostics.len(),
        "parsed data file"
    );
    Ok(data)
}

fn read_source(path: &Path, options: &ReaderOptions) -> RfResult<Vec<u8>> {
    let supported = DataFormat::from_path(path).is_some() && options.accepts(path);
    if options.format.is_none() && !supported {
        return Err(RfError::format(format!(
            "Unsupported file format '{}'.",
            path.extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default()
        ))
        .with_path(path));
    }
    std::fs::read(path).map_err(|e| RfError::from(e).with_path(path))
}

/// Parse a test case file from disk.
pub fn parse_test_case_file(
    path: impl AsRef<Path>,
    options: &ReaderOptions,
) -> RfResult<TestCaseFile> {
    let path = path.as_ref();
    let bytes = read_source(path, options)?;
    let data = parse_bytes(&bytes, FileKind::TestCase, Some(path), options)?;
    Ok(TestCaseFile { data })
}

/// Parse a resource file from disk.
pub fn parse_resource_file(
    path: impl AsRef<Path>,
    options: &ReaderOptions,
) -> RfResult<ResourceFile> {
    let path = path.as_ref();
    let bytes = read_source(path, options)?;
    let data = parse_bytes(&bytes, FileKind::Resource, Some(path), options)?;
    Ok(ResourceFile { data })
}

/// Parse a suite initialization file from disk.
pub fn parse_init_file(path: impl AsRef<Path>, options: &ReaderOptions) -> RfResult<FileData> {
    let path = path.as_ref();
    let bytes = read_source(path, options)?;
    parse_bytes(&bytes, FileKind::Init, Some(path), options)
}

/// Parse test case file contents held in memory.
///
/// ```
/// use rfdata_core::{parse_test_case_str, DataFile, ReaderOptions, StepContainer};
///
/// let file = parse_test_case_str(
///     "*** Test Cases ***\nExample\n    Log    hello\n",
///     &ReaderOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(file.tables().tests.tests[0].name(), "Example");
/// ```
pub fn parse_test_case_str(input: &str, options: &ReaderOptions) -> RfResult<TestCaseFile> {
    let data = parse_bytes(input.as_bytes(), FileKind::TestCase, None, options)?;
    Ok(TestCaseFile { data })
}

/// Parse resource file contents held in memory.
pub fn parse_resource_str(input: &str, options: &ReaderOptions) -> RfResult<ResourceFile> {
    let data = parse_bytes(input.as_bytes(), FileKind::Resource, None, options)?;
    Ok(ResourceFile { data })
}
