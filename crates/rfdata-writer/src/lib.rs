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

//! Writer for Robot Framework test data.
//!
//! Turns a parsed or edited data file back into space separated, pipe
//! separated or tab separated text. A file that was parsed and not changed
//! is written back byte for byte when it already uses the canonical layout.
//!
//! # Pipeline
//!
//! - the extractor orders rows by their source lines
//! - the [`RowSplitter`] breaks long rows, `ELSE`/`AND` chains and multi-line
//!   documentation into `...` continuation rows
//! - a [`RowFormatter`] escapes and joins the cells, aligning columns when
//!   the table header asks for it
//!
//! # Examples
//!
//! ```
//! use rfdata_core::{parse_test_case_str, ReaderOptions};
//! use rfdata_writer::{write_to_string, WriterConfig};
//!
//! let text = "*** Settings ***\nDocumentation    First line\n...    Second line\n";
//! let file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
//! assert_eq!(write_to_string(&file, &WriterConfig::default()).unwrap(), text);
//! ```

mod aligner;
mod config;
mod extractor;
mod formatter;
mod splitter;
mod writer;

pub use aligner::ColumnAligner;
pub use config::{LineSeparator, OutputFormat, WriterConfig, WriterConfigBuilder};
pub use extractor::{item_rows, OutputRow};
pub use formatter::{formatter, PipeFormatter, RowFormatter, SpaceFormatter, TsvFormatter};
pub use splitter::{split_doc_value, RowSplitter, EMPTY_CELL, SPLIT_TOKENS};
pub use writer::DataFileWriter;

use rfdata_core::{DataFile, RfError, RfResult};
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Write `file` to a string.
pub fn write_to_string(file: &dyn DataFile, config: &WriterConfig) -> RfResult<String> {
    let mut out = Vec::new();
    DataFileWriter::new(config).write(file, &mut out)?;
    String::from_utf8(out).map_err(|e| RfError::format(format!("Invalid UTF-8 in output: {}", e)))
}

/// Write `file` to any writer.
pub fn write_data_file<W: io::Write>(
    file: &dyn DataFile,
    out: &mut W,
    config: &WriterConfig,
) -> RfResult<()> {
    DataFileWriter::new(config).write(file, out)
}

/// Write `file` back to the path it was read from.
pub fn save(file: &dyn DataFile, config: &WriterConfig) -> RfResult<()> {
    let path = file
        .source()
        .ok_or_else(|| RfError::data("Cannot save a file that has no source path."))?
        .to_path_buf();
    write_file(file, &path, config)
}

/// Write `file` to `path` and make `path` its new source.
pub fn save_as(
    file: &mut dyn DataFile,
    path: impl AsRef<Path>,
    config: &WriterConfig,
) -> RfResult<()> {
    let path = path.as_ref();
    write_file(&*file, path, config)?;
    file.data_mut().source = Some(path.to_path_buf());
    Ok(())
}

fn write_file(file: &dyn DataFile, path: &Path, config: &WriterConfig) -> RfResult<()> {
    info!("Saving '{}'", path.display());
    let text = write_to_string(file, config).map_err(|e| e.with_path(path))?;
    fs::write(path, text).map_err(|e| RfError::io(e.to_string()).with_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfdata_core::{parse_test_case_file, parse_test_case_str, ReaderOptions, TestCaseFile};

    #[test]
    fn test_save_requires_source() {
        let file = TestCaseFile::new();
        let err = save(&file, &WriterConfig::default()).unwrap_err();
        assert_eq!(err.kind, rfdata_core::RfErrorKind::Data);
    }

    #[test]
    fn test_save_as_then_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suite.robot");
        let text = "*** Test Cases ***\nT\n    Log    x\n";
        let mut file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
        save_as(&mut file, &path, &WriterConfig::default()).unwrap();
        assert_eq!(file.data.source.as_deref(), Some(path.as_path()));
        assert_eq!(fs::read_to_string(&path).unwrap(), text);

        let reread = parse_test_case_file(&path, &ReaderOptions::default()).unwrap();
        save(&reread, &WriterConfig::default()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn test_write_data_file_to_vec() {
        let text = "*** Keywords ***\nK\n    No Operation\n";
        let file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
        let mut out = Vec::new();
        write_data_file(&file, &mut out, &WriterConfig::default()).unwrap();
        assert_eq!(out, b"*** Keywords ***\nK\n    No Operation\n");
    }
}
