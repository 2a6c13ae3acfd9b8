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

//! Column alignment for test case and keyword tables.

use rfdata_core::TableHeader;

/// Pads cells so that each column starts at the same position.
///
/// Widths come from the table header: the first column is at least
/// `first column width` wide and never narrower than the written header
/// cell, later columns are as wide as their header cell. Empty indentation
/// cells are padded like any other cell so that keyword columns line up
/// with the item name row. The last cell of a row is never padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAligner {
    widths: Vec<usize>,
}

impl ColumnAligner {
    pub fn new(widths: Vec<usize>) -> Self {
        Self { widths }
    }

    /// Aligner for a table, or `None` when its header has no column cells.
    pub fn for_header(header: &TableHeader, name: &str, first_column_width: usize) -> Option<Self> {
        if !header.has_columns() {
            return None;
        }
        let mut widths = vec![first_column_width.max(width(&header_cell(name)))];
        widths.extend(header.columns.iter().map(|c| width(c)));
        Some(Self::new(widths))
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Pad formatted cells in place.
    pub fn align(&self, cells: &mut [String]) {
        let Some(last) = cells.len().checked_sub(1) else {
            return;
        };
        for (column, cell) in cells.iter_mut().enumerate().take(last) {
            if let Some(&target) = self.widths.get(column) {
                let pad = target.saturating_sub(width(cell));
                cell.extend(std::iter::repeat(' ').take(pad));
            }
        }
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

/// First cell of a section header as written.
pub(crate) fn header_cell(name: &str) -> String {
    format!("*** {} ***", name)
}
