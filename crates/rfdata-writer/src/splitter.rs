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

//! Splitting long logical rows into physical rows joined by `...`.

use crate::extractor::OutputRow;

const CONTINUATION: &str = "...";

/// Marker written for an empty cell that would otherwise be lost.
pub const EMPTY_CELL: &str = "\\";

/// Tokens that start a new physical row.
pub const SPLIT_TOKENS: &[&str] = &["ELSE", "ELSE IF", "AND", "VAR"];

/// Splits rows by column count, split tokens and documentation lines.
#[derive(Debug, Clone)]
pub struct RowSplitter {
    cols: usize,
    split_multiline_doc: bool,
}

impl RowSplitter {
    pub fn new(cols: usize, split_multiline_doc: bool) -> Self {
        Self {
            cols: cols.max(2),
            split_multiline_doc,
        }
    }

    /// Physical rows for `row`. `min_indent` is the smallest indentation of
    /// continuation rows: 1 inside test cases and keywords, 0 elsewhere.
    pub fn split(&self, row: &OutputRow, min_indent: usize) -> Vec<Vec<String>> {
        if row.is_empty() {
            return vec![Vec::new()];
        }
        let indent = leading_empty(&row.cells).max(min_indent);
        let mut rows = Vec::new();
        for logical in self.doc_rows(row, indent) {
            self.split_row(logical, indent, &mut rows);
        }
        rows
    }

    /// A documentation row becomes one logical row per `\n` separated line.
    fn doc_rows(&self, row: &OutputRow, indent: usize) -> Vec<Vec<String>> {
        let start = leading_empty(&row.cells);
        if !self.split_multiline_doc || !row.doc || row.cells.len() < start + 2 {
            return vec![row.cells.clone()];
        }
        let value_idx = start + 1;
        let mut lines = split_doc_value(&row.cells[value_idx]).into_iter();
        let mut first = row.cells[..value_idx].to_vec();
        first.extend(lines.next());
        first.extend(row.cells[value_idx + 1..].iter().cloned());
        let mut rows = vec![first];
        for line in lines {
            let mut next = continuation_prefix(indent);
            if !line.is_empty() {
                next.push(line);
            }
            rows.push(next);
        }
        rows
    }

    fn split_row(&self, mut row: Vec<String>, indent: usize, out: &mut Vec<Vec<String>>) {
        while let Some(at) = self.split_index(&row) {
            let mut rest = row.split_off(at);
            comment_rest_if_needed(&row, &mut rest);
            if row.last().map_or(false, |c| c.is_empty()) {
                if let Some(last) = row.last_mut() {
                    *last = EMPTY_CELL.to_string();
                }
            }
            out.push(row);
            let mut next = continuation_prefix(indent);
            next.extend(rest);
            row = next;
        }
        out.push(row);
    }

    /// Where the row must be cut, if anywhere.
    fn split_index(&self, row: &[String]) -> Option<usize> {
        let first = leading_empty(row);
        let continued = row.get(first).map_or(false, |c| c == CONTINUATION);
        // Every physical row keeps at least one data cell.
        let floor = first + 1 + usize::from(continued);
        let data_end = row
            .iter()
            .position(|c| c.starts_with('#'))
            .unwrap_or(row.len());
        let token = (floor..data_end).find(|&i| SPLIT_TOKENS.contains(&row[i].as_str()));
        let by_width = (row.len() > self.cols).then(|| self.cols.max(floor));
        match (token, by_width) {
            (Some(t), Some(w)) => Some(t.min(w)),
            (t, w) => t.or(w),
        }
        .filter(|&at| at < row.len())
    }
}

fn leading_empty(cells: &[String]) -> usize {
    cells.iter().take_while(|c| c.is_empty()).count()
}

fn continuation_prefix(indent: usize) -> Vec<String> {
    let mut cells = vec![String::new(); indent];
    cells.push(CONTINUATION.to_string());
    cells
}

/// A comment cut in half stays a comment on the next row.
fn comment_rest_if_needed(current: &[String], rest: &mut [String]) {
    if current.iter().any(|c| c.starts_with('#')) {
        if let Some(first) = rest.first_mut() {
            if !first.starts_with('#') {
                first.insert_str(0, "# ");
            }
        }
    }
}

/// Split a documentation value at unescaped `\n` sequences.
///
/// An escaped backslash (`\\n`) is not a line break.
pub fn split_doc_value(value: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut backslashes = 0;
    for c in value.chars() {
        if c == 'n' && backslashes % 2 == 1 {
            current.pop();
            lines.push(std::mem::take(&mut current));
            backslashes = 0;
            continue;
        }
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        current.push(c);
    }
    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    fn row(v: &[&str]) -> OutputRow {
        OutputRow::new(s(v))
    }

    fn doc(v: &[&str]) -> OutputRow {
        OutputRow {
            cells: s(v),
            doc: true,
        }
    }

    // ==================== Column tests ====================

    #[test]
    fn test_short_row_untouched() {
        let splitter = RowSplitter::new(8, true);
        assert_eq!(splitter.split(&row(&["", "Log", "x"]), 1), vec![s(&["", "Log", "x"])]);
        assert_eq!(splitter.split(&row(&[]), 0), vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_split_by_column_count() {
        let splitter = RowSplitter::new(4, true);
        let rows = splitter.split(&row(&["", "Kw", "a", "b", "c", "d"]), 1);
        assert_eq!(rows, vec![s(&["", "Kw", "a", "b"]), s(&["", "...", "c", "d"])]);
    }

    #[test]
    fn test_settings_continue_at_column_zero() {
        let splitter = RowSplitter::new(3, true);
        let rows = splitter.split(&row(&["Library", "A", "b", "c"]), 0);
        assert_eq!(rows, vec![s(&["Library", "A", "b"]), s(&["...", "c"])]);
    }

    #[test]
    fn test_trailing_empty_cell_escaped() {
        let splitter = RowSplitter::new(3, true);
        let rows = splitter.split(&row(&["", "Kw", "", "x"]), 1);
        assert_eq!(rows, vec![s(&["", "Kw", "\\"]), s(&["", "...", "x"])]);
    }

    #[test]
    fn test_split_comment_stays_comment() {
        let splitter = RowSplitter::new(3, true);
        let rows = splitter.split(&row(&["Kw", "# one", "two"]), 0);
        assert_eq!(rows, vec![s(&["Kw", "# one", "two"])]);
        let rows = splitter.split(&row(&["Kw", "a", "# one", "two"]), 0);
        assert_eq!(rows, vec![s(&["Kw", "a", "# one"]), s(&["...", "# two"])]);
    }

    #[test]
    fn test_narrow_columns_always_progress() {
        let splitter = RowSplitter::new(2, true);
        let rows = splitter.split(&row(&["", "", "Kw", "a", "b"]), 1);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().skip(1).all(|r| r[2] == "..."));
    }

    // ==================== Token tests ====================

    #[test]
    fn test_split_at_else() {
        let splitter = RowSplitter::new(8, true);
        let rows = splitter.split(
            &row(&["", "Run Keyword If", "${c}", "A", "ELSE IF", "${d}", "B", "ELSE", "C"]),
            1,
        );
        assert_eq!(
            rows,
            vec![
                s(&["", "Run Keyword If", "${c}", "A"]),
                s(&["", "...", "ELSE IF", "${d}", "B"]),
                s(&["", "...", "ELSE", "C"]),
            ]
        );
    }

    #[test]
    fn test_leading_token_not_split() {
        let splitter = RowSplitter::new(8, true);
        let rows = splitter.split(&row(&["", "VAR", "${x}", "1"]), 1);
        assert_eq!(rows, vec![s(&["", "VAR", "${x}", "1"])]);
    }

    #[test]
    fn test_token_in_comment_ignored() {
        let splitter = RowSplitter::new(8, true);
        let rows = splitter.split(&row(&["", "Log", "x", "# AND"]), 1);
        assert_eq!(rows.len(), 1);
    }

    // ==================== Documentation tests ====================

    #[test]
    fn test_doc_split_on_newline() {
        let splitter = RowSplitter::new(8, true);
        let rows = splitter.split(&doc(&["Documentation", "First line\\nSecond line"]), 0);
        assert_eq!(
            rows,
            vec![s(&["Documentation", "First line"]), s(&["...", "Second line"])]
        );
    }

    #[test]
    fn test_doc_empty_line_is_bare_continuation() {
        let splitter = RowSplitter::new(8, true);
        let rows = splitter.split(&doc(&["", "[Documentation]", "a\\n\\nb"]), 1);
        assert_eq!(
            rows,
            vec![
                s(&["", "[Documentation]", "a"]),
                s(&["", "..."]),
                s(&["", "...", "b"]),
            ]
        );
    }

    #[test]
    fn test_doc_split_disabled() {
        let splitter = RowSplitter::new(8, false);
        let rows = splitter.split(&doc(&["Documentation", "a\\nb"]), 0);
        assert_eq!(rows, vec![s(&["Documentation", "a\\nb"])]);
    }

    #[test]
    fn test_split_doc_value_escapes() {
        assert_eq!(split_doc_value("a\\nb"), s(&["a", "b"]));
        assert_eq!(split_doc_value("a\\\\nb"), s(&["a\\\\nb"]));
        assert_eq!(split_doc_value("a\\n"), s(&["a", ""]));
        assert_eq!(split_doc_value("plain"), s(&["plain"]));
    }
}
