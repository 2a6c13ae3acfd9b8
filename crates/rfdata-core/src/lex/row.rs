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

//! Normalized data rows.
//!
//! A [`DataRow`] is one physical line of a table after splitting: the data
//! cells up to the first comment cell and the comment cells from there on.

use super::tokens::{is_for_marker, CONTINUATION};

/// One row of table data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataRow {
    /// Data cells, including leading empty cells that express indentation.
    pub cells: Vec<String>,
    /// The first cell starting with `#` and everything after it.
    pub comments: Vec<String>,
    /// 1-based source line, when the row came from a file.
    pub line: Option<usize>,
}

impl DataRow {
    /// Normalize split cells read from a file.
    ///
    /// Whitespace inside data cells is collapsed, trailing empty cells are
    /// dropped and `\` cells become empty. When only comments follow leading
    /// empty cells, the empty cells are kept as indentation.
    pub fn new(raw: Vec<String>, line: Option<usize>) -> Self {
        let mut cells = Vec::with_capacity(raw.len());
        let mut comments = Vec::new();
        for cell in raw {
            if !comments.is_empty() || cell.trim_start().starts_with('#') {
                comments.push(cell.trim().to_string());
            } else {
                cells.push(collapse_whitespace(&cell));
            }
        }
        Self::finish(cells, comments, line)
    }

    /// Build a row from model cells without whitespace normalization.
    pub fn from_cells(raw: Vec<String>, line: Option<usize>) -> Self {
        let split = raw.iter().position(|c| c.starts_with('#')).unwrap_or(raw.len());
        let mut cells = raw;
        let comments = cells.split_off(split);
        Self::finish(cells, comments, line)
    }

    fn finish(mut cells: Vec<String>, comments: Vec<String>, line: Option<usize>) -> Self {
        if cells.iter().any(|c| !c.is_empty()) {
            while cells.last().map_or(false, |c| c.is_empty()) {
                cells.pop();
            }
        } else if comments.is_empty() {
            cells.clear();
        }
        for cell in cells.iter_mut() {
            if cell == "\\" {
                cell.clear();
            }
        }
        Self {
            cells,
            comments,
            line,
        }
    }

    /// First cell, or `""` for an empty row.
    pub fn head(&self) -> &str {
        self.cells.first().map(String::as_str).unwrap_or("")
    }

    /// Cells after the head.
    pub fn tail(&self) -> &[String] {
        self.cells.get(1..).unwrap_or(&[])
    }

    /// Cells after the continuation marker, or all cells when the row does
    /// not continue a previous one.
    pub fn data(&self) -> &[String] {
        if self.is_continuing() {
            let marker = self.indent();
            &self.cells[marker + 1..]
        } else {
            &self.cells
        }
    }

    /// Drop the first cell.
    pub fn dedent(&self) -> DataRow {
        DataRow {
            cells: self.tail().to_vec(),
            comments: self.comments.clone(),
            line: self.line,
        }
    }

    /// Number of leading empty cells.
    pub fn indent(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_empty()).count()
    }

    /// First non-empty cell.
    pub fn first_non_empty(&self) -> Option<&str> {
        self.cells.get(self.indent()).map(String::as_str)
    }

    /// Every cell, data followed by comments.
    pub fn all_cells(&self) -> Vec<String> {
        self.cells.iter().chain(&self.comments).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.comments.is_empty()
    }

    pub fn is_indented(&self) -> bool {
        self.cells.first().map_or(false, |c| c.is_empty())
    }

    pub fn is_continuing(&self) -> bool {
        self.first_non_empty() == Some(CONTINUATION)
    }

    /// A row with comments but no data.
    pub fn is_commented(&self) -> bool {
        !self.comments.is_empty() && self.cells.iter().all(|c| c.is_empty())
    }

    pub fn starts_for_loop(&self) -> bool {
        self.first_non_empty().map_or(false, is_for_marker)
    }

    /// Head written as `[Name]`.
    pub fn starts_item_setting(&self) -> bool {
        let head = self.head();
        head.starts_with('[') && head.ends_with(']')
    }

    /// Inner name of a `[Name]` head.
    pub fn item_setting_name(&self) -> Option<&str> {
        if self.starts_item_setting() {
            Some(self.head()[1..self.head().len() - 1].trim())
        } else {
            None
        }
    }
}

fn collapse_whitespace(cell: &str) -> String {
    cell.split_whitespace().collect::<Vec<_>>().join(" ")
}
