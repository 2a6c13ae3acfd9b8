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

//! Line-oriented reader that feeds table headers and rows to a sink.

use super::rest::extract_code_blocks;
use super::row::DataRow;
use super::split::{
    cell_starts, is_pipe_row, leading_spaces, split_aligned_row, split_pipe_row,
    split_space_row, split_tsv_row, MAX_SEPARATING_SPACES, MIN_SEPARATING_SPACES,
};
use super::tokens::CONTINUATION;
use crate::diagnostic::Diagnostic;
use crate::error::{RfError, RfResult};
use crate::limits::Limits;
use crate::preprocess::{is_blank_line, is_comment_line, PreprocessedInput};
use std::path::Path;

/// Physical syntax of a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataFormat {
    /// Cells separated by two or more spaces or tabs.
    #[default]
    Space,
    /// Rows wrapped in `| ... |`, cells separated by ` | `.
    Pipe,
    /// Tab-separated values.
    Tsv,
    /// Code blocks inside a reStructuredText document.
    Rest,
}

impl DataFormat {
    /// Format implied by a file extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "robot" | "txt" | "resource" => Some(Self::Space),
            "tsv" => Some(Self::Tsv),
            "rst" | "rest" => Some(Self::Rest),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Receiver of reader events.
pub trait RowSink {
    /// A line before the first section header.
    fn preamble(&mut self, line: usize, text: &str) -> RfResult<()>;
    /// A section header row, asterisks stripped from each cell, with the
    /// line as written.
    fn start_table(&mut self, header: Vec<String>, raw: &str, line: usize) -> RfResult<()>;
    /// A data row together with the physical line it came from.
    fn row(&mut self, row: DataRow, raw: &str) -> RfResult<()>;
    /// A problem noticed while reading.
    fn diagnostic(&mut self, diagnostic: Diagnostic);
    /// End of input.
    fn eof(&mut self) -> RfResult<()>;
}

/// What the reader learned about the physical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadSummary {
    /// Format of the data rows; `Pipe` when the first data row used pipes.
    pub format: DataFormat,
    /// Indentation unit in effect at the end of reading.
    pub separating_spaces: usize,
}

/// Splits lines into rows and drives a [`RowSink`].
#[derive(Debug)]
pub struct Reader {
    format: DataFormat,
    separating_spaces: usize,
    detected: bool,
    pipes: bool,
    max_cells: usize,
    /// Header column starts of the current table when it is aligned.
    column_starts: Option<Vec<usize>>,
}

impl Reader {
    pub fn new(format: DataFormat, separating_spaces: usize, limits: &Limits) -> Self {
        Self {
            format,
            separating_spaces: separating_spaces.max(1),
            detected: false,
            pipes: false,
            max_cells: limits.max_cells_per_row,
            column_starts: None,
        }
    }

    /// Read preprocessed input into `sink`.
    pub fn read<S: RowSink>(
        &mut self,
        input: &PreprocessedInput,
        sink: &mut S,
    ) -> RfResult<ReadSummary> {
        if self.format == DataFormat::Rest {
            let lines = extract_code_blocks(input.lines());
            self.read_lines(lines.iter().map(|(n, l)| (*n, l.as_str())), sink)
        } else {
            self.read_lines(input.lines(), sink)
        }
    }

    fn read_lines<'a, I, S>(&mut self, lines: I, sink: &mut S) -> RfResult<ReadSummary>
    where
        I: Iterator<Item = (usize, &'a str)>,
        S: RowSink,
    {
        let mut seen_header = false;
        for (num, line) in lines {
            if seen_header {
                self.detect_layout(line);
            }
            let cells = self.split(line);
            if cells.len() > self.max_cells {
                return Err(RfError::limit(
                    format!("row has more than {} cells", self.max_cells),
                    num,
                ));
            }
            if cells.first().map_or(false, |c| c.starts_with('*')) {
                seen_header = true;
                let header = header_cells(&cells);
                self.column_starts = self.aligned_columns(&header, line);
                sink.start_table(header, line, num)?;
                continue;
            }
            if !seen_header {
                sink.preamble(num, line)?;
                continue;
            }
            if escapes_continuation(&cells) {
                sink.diagnostic(
                    Diagnostic::warning(
                        "Escaping empty cells with '\\' before line continuation marker '...' is deprecated.",
                    )
                    .with_line(num)
                    .with_suggestion("Remove escaping before the marker."),
                );
            }
            sink.row(DataRow::new(cells, Some(num)), line)?;
        }
        sink.eof()?;
        Ok(ReadSummary {
            format: if self.pipes && self.format == DataFormat::Space {
                DataFormat::Pipe
            } else {
                self.format
            },
            separating_spaces: self.separating_spaces,
        })
    }

    /// Column starts of a space-separated header that names its columns.
    fn aligned_columns(&self, header: &[String], line: &str) -> Option<Vec<usize>> {
        if header.len() < 2 || self.format == DataFormat::Tsv || is_pipe_row(line) {
            return None;
        }
        Some(cell_starts(line))
    }

    fn detect_layout(&mut self, line: &str) {
        if self.detected || self.format == DataFormat::Tsv || self.column_starts.is_some() {
            return;
        }
        if is_blank_line(line) || is_comment_line(line) {
            return;
        }
        if is_pipe_row(line) {
            self.pipes = true;
            self.detected = true;
            return;
        }
        match leading_spaces(line) {
            None => self.detected = true,
            Some(n) if n >= MIN_SEPARATING_SPACES => {
                if n <= MAX_SEPARATING_SPACES {
                    self.separating_spaces = n;
                }
                self.detected = true;
            }
            Some(_) => {}
        }
    }

    fn split(&self, line: &str) -> Vec<String> {
        match self.format {
            DataFormat::Tsv => split_tsv_row(line),
            _ if is_pipe_row(line) => split_pipe_row(line),
            _ => match &self.column_starts {
                Some(starts) => split_aligned_row(line, starts, self.separating_spaces),
                None => split_space_row(line, self.separating_spaces),
            },
        }
    }
}

fn header_cells(cells: &[String]) -> Vec<String> {
    let mut header: Vec<String> = cells
        .iter()
        .map(|c| c.trim_matches(|ch: char| ch == '*' || ch.is_whitespace()).to_string())
        .collect();
    while header.len() > 1 && header.last().map_or(false, |c| c.is_empty()) {
        header.pop();
    }
    header
}

/// `\` cells in front of `...`, as in `\    ...    value`.
fn escapes_continuation(cells: &[String]) -> bool {
    let mut escaped = false;
    for cell in cells {
        match cell.as_str() {
            "" => {}
            "\\" => escaped = true,
            CONTINUATION => return escaped,
            _ => return false,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess::preprocess;

    #[derive(Default)]
    struct Recorder {
        preamble: Vec<String>,
        headers: Vec<(Vec<String>, usize)>,
        rows: Vec<DataRow>,
        diagnostics: Vec<Diagnostic>,
        finished: bool,
    }

    impl RowSink for Recorder {
        fn preamble(&mut self, _line: usize, text: &str) -> RfResult<()> {
            self.preamble.push(text.to_string());
            Ok(())
        }
        fn start_table(&mut self, header: Vec<String>, _raw: &str, line: usize) -> RfResult<()> {
            self.headers.push((header, line));
            Ok(())
        }
        fn row(&mut self, row: DataRow, _raw: &str) -> RfResult<()> {
            self.rows.push(row);
            Ok(())
        }
        fn diagnostic(&mut self, diagnostic: Diagnostic) {
            self.diagnostics.push(diagnostic);
        }
        fn eof(&mut self) -> RfResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    fn read(text: &str, format: DataFormat) -> (Recorder, ReadSummary) {
        let input = preprocess(text.as_bytes(), &Limits::default()).unwrap();
        let mut sink = Recorder::default();
        let summary = Reader::new(format, 2, &Limits::default())
            .read(&input, &mut sink)
            .unwrap();
        (sink, summary)
    }

    #[test]
    fn test_preamble_and_headers() {
        let (sink, _) = read(
            "Language: Fi\n\n*** Asetukset ***\nDokumentaatio    x\n",
            DataFormat::Space,
        );
        assert_eq!(sink.preamble, vec!["Language: Fi", ""]);
        assert_eq!(sink.headers, vec![(vec!["Asetukset".to_string()], 3)]);
        assert_eq!(sink.rows.len(), 1);
        assert!(sink.finished);
    }

    #[test]
    fn test_header_columns() {
        let (sink, _) = read("*** Test Cases ***    Action    Arg\n", DataFormat::Space);
        assert_eq!(sink.headers[0].0, vec!["Test Cases", "Action", "Arg"]);
    }

    #[test]
    fn test_aligned_table_rows_use_header_columns() {
        let (sink, summary) = read(
            "*** Test Cases ***    Action    Arg\nT                     Log       x\n                      Log       y\n",
            DataFormat::Space,
        );
        assert_eq!(sink.rows[0].cells, vec!["T", "Log", "x"]);
        assert_eq!(sink.rows[1].cells, vec!["", "Log", "y"]);
        assert_eq!(summary.separating_spaces, 2);
    }

    #[test]
    fn test_alignment_ends_with_table() {
        let (sink, summary) = read(
            "*** Keywords ***    Step\nK\n                      No Operation\n*** Test Cases ***\nT\n    Log    a\n        Log    b\n",
            DataFormat::Space,
        );
        assert_eq!(sink.rows[1].cells, vec!["", "No Operation"]);
        assert_eq!(summary.separating_spaces, 4);
        assert_eq!(sink.rows[4].cells, vec!["", "", "Log", "b"]);
    }

    #[test]
    fn test_separator_detection_from_first_indented_row() {
        let (sink, summary) = read(
            "*** Test Cases ***\nT\n    Log    a\n        Log    b\n",
            DataFormat::Space,
        );
        assert_eq!(summary.separating_spaces, 4);
        assert_eq!(sink.rows[1].cells, vec!["", "Log", "a"]);
        assert_eq!(sink.rows[2].cells, vec!["", "", "Log", "b"]);
    }

    #[test]
    fn test_out_of_range_indent_keeps_default() {
        let (_, summary) = read(
            "*** Test Cases ***\nT\n            Log    a\n",
            DataFormat::Space,
        );
        assert_eq!(summary.separating_spaces, 2);
    }

    #[test]
    fn test_pipe_file_detected() {
        let (sink, summary) = read(
            "| *** Test Cases *** |\n| T | Log | x |\n|    | No Operation |\n",
            DataFormat::Space,
        );
        assert_eq!(summary.format, DataFormat::Pipe);
        assert_eq!(sink.headers[0].0, vec!["Test Cases"]);
        assert_eq!(sink.rows[1].cells, vec!["", "No Operation"]);
    }

    #[test]
    fn test_tsv_headers() {
        let (sink, summary) = read("*Settings*\t*Value*\nLibrary\tOS\n", DataFormat::Tsv);
        assert_eq!(summary.format, DataFormat::Tsv);
        assert_eq!(sink.headers[0].0, vec!["Settings", "Value"]);
        assert_eq!(sink.rows[0].cells, vec!["Library", "OS"]);
    }

    #[test]
    fn test_escaped_continuation_warns() {
        let (sink, _) = read(
            "*** Test Cases ***\nT\n    Log    a\n    \\    ...    b\n",
            DataFormat::Space,
        );
        assert_eq!(sink.diagnostics.len(), 1);
        assert!(sink.rows[2].is_continuing());
    }

    #[test]
    fn test_rest_reads_code_blocks() {
        let (sink, _) = read(
            "Doc\n===\n\n.. code:: robotframework\n\n   *** Keywords ***\n   Kw\n       No Operation\n",
            DataFormat::Rest,
        );
        assert_eq!(sink.headers, vec![(vec!["Keywords".to_string()], 6)]);
        assert_eq!(sink.rows[1].cells, vec!["", "No Operation"]);
        assert!(sink.preamble.is_empty());
    }

    #[test]
    fn test_too_many_cells_rejected() {
        let input = preprocess(b"*** Settings ***\nA    b    c\n", &Limits::default()).unwrap();
        let limits = Limits {
            max_cells_per_row: 2,
            ..Limits::default()
        };
        let err = Reader::new(DataFormat::Space, 2, &limits)
            .read(&input, &mut Recorder::default())
            .unwrap_err();
        assert_eq!(err.line, Some(2));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DataFormat::from_extension("ROBOT"), Some(DataFormat::Space));
        assert_eq!(DataFormat::from_extension("resource"), Some(DataFormat::Space));
        assert_eq!(DataFormat::from_extension("tsv"), Some(DataFormat::Tsv));
        assert_eq!(DataFormat::from_extension("rest"), Some(DataFormat::Rest));
        assert_eq!(DataFormat::from_extension("py"), None);
    }
}
