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

//! Physical row formatting for space, pipe and tab separated output.

use crate::aligner::{header_cell, ColumnAligner};
use crate::config::{OutputFormat, WriterConfig};
use crate::splitter::EMPTY_CELL;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));

/// Turns cells into output lines.
pub trait RowFormatter {
    /// Section header line for `name` and any extra header cells.
    fn header(&self, name: &str, columns: &[String], aligner: Option<&ColumnAligner>) -> String;

    /// One physical row.
    fn row(&self, cells: &[String], aligner: Option<&ColumnAligner>) -> String;

    /// Whether column alignment applies to this syntax.
    fn supports_alignment(&self) -> bool {
        true
    }
}

/// Formatter for `format`. `indent_width` is the width of one indentation
/// level in space separated output.
pub fn formatter(
    format: OutputFormat,
    config: &WriterConfig,
    indent_width: usize,
) -> Box<dyn RowFormatter> {
    match format {
        OutputFormat::Space => Box::new(SpaceFormatter {
            separator: " ".repeat(config.cell_separator_width().max(2)),
            indent: " ".repeat(indent_width.max(config.txt_number_of_spaces).max(2)),
        }),
        OutputFormat::Pipe => Box::new(PipeFormatter),
        OutputFormat::Tsv => Box::new(TsvFormatter),
    }
}

fn leading_empty(cells: &[String]) -> usize {
    cells.iter().take_while(|c| c.is_empty()).count()
}

/// Empty cells after the first data cell would vanish on reading; they are
/// written as the empty cell marker.
fn mark_empty_cells(cells: &[String], indent: usize, interior: bool) -> Vec<String> {
    let last_data = cells.iter().rposition(|c| !c.is_empty()).unwrap_or(0);
    cells
        .iter()
        .enumerate()
        .skip(indent)
        .map(|(idx, cell)| {
            if cell.is_empty() && (interior || idx > last_data) {
                EMPTY_CELL.to_string()
            } else {
                cell.clone()
            }
        })
        .collect()
}

/// Space separated syntax.
#[derive(Debug, Clone)]
pub struct SpaceFormatter {
    separator: String,
    indent: String,
}

impl SpaceFormatter {
    fn escape(cell: &str) -> String {
        let cell = cell.replace('\n', " ");
        WHITESPACE_RUN
            .replace_all(&cell, |caps: &regex::Captures| {
                let run: Vec<String> = caps[0].chars().map(String::from).collect();
                run.join("\\")
            })
            .into_owned()
    }
}

impl RowFormatter for SpaceFormatter {
    fn header(&self, name: &str, columns: &[String], aligner: Option<&ColumnAligner>) -> String {
        let mut cells = vec![header_cell(name)];
        cells.extend(columns.iter().cloned());
        if let Some(aligner) = aligner {
            aligner.align(&mut cells);
        }
        cells.join(&self.separator)
    }

    fn row(&self, cells: &[String], aligner: Option<&ColumnAligner>) -> String {
        if cells.iter().all(|c| c.is_empty()) {
            return String::new();
        }
        let indent = leading_empty(cells);
        let mut formatted: Vec<String> = vec![String::new(); indent];
        formatted.extend(
            mark_empty_cells(cells, indent, true)
                .iter()
                .map(|c| Self::escape(c)),
        );
        if let Some(aligner) = aligner {
            aligner.align(&mut formatted);
            return formatted.join(&self.separator);
        }
        let mut line = self.indent.repeat(indent);
        line.push_str(&formatted[indent..].join(&self.separator));
        line
    }
}

/// Pipe separated syntax: `| cell | cell |`.
#[derive(Debug, Clone, Copy)]
pub struct PipeFormatter;

impl PipeFormatter {
    fn escape(cell: &str) -> String {
        if cell.is_empty() {
            return "  ".to_string();
        }
        if cell == "|" {
            return "\\|".to_string();
        }
        let mut cell = cell.replace('\n', " ").replace(" | ", " \\| ");
        if cell.starts_with("| ") {
            cell.insert(0, '\\');
        }
        if cell.ends_with(" |") {
            let at = cell.len() - 1;
            cell.insert(at, '\\');
        }
        cell
    }
}

impl RowFormatter for PipeFormatter {
    fn header(&self, name: &str, columns: &[String], aligner: Option<&ColumnAligner>) -> String {
        let mut cells = vec![header_cell(name)];
        cells.extend(columns.iter().cloned());
        if let Some(aligner) = aligner {
            aligner.align(&mut cells);
        }
        format!("| {} |", cells.join(" | "))
    }

    fn row(&self, cells: &[String], aligner: Option<&ColumnAligner>) -> String {
        if cells.iter().all(|c| c.is_empty()) {
            return String::new();
        }
        let indent = leading_empty(cells);
        let mut formatted: Vec<String> = vec![String::new(); indent];
        formatted.extend(mark_empty_cells(cells, indent, false));
        let mut formatted: Vec<String> = formatted.iter().map(|c| Self::escape(c)).collect();
        if let Some(aligner) = aligner {
            aligner.align(&mut formatted);
        }
        format!("| {} |", formatted.join(" | "))
    }
}

/// Tab separated syntax.
#[derive(Debug, Clone, Copy)]
pub struct TsvFormatter;

impl TsvFormatter {
    fn escape(cell: &str) -> String {
        let cell = cell.replace('\n', " ").replace('\t', "\\t");
        if cell.len() > 1 && cell.starts_with('"') && cell.ends_with('"') {
            format!("\"{}\"", cell.replace('"', "\"\""))
        } else {
            cell
        }
    }
}

impl RowFormatter for TsvFormatter {
    fn header(&self, name: &str, columns: &[String], _aligner: Option<&ColumnAligner>) -> String {
        std::iter::once(name)
            .chain(columns.iter().map(String::as_str))
            .map(|cell| format!("*{}*", cell))
            .collect::<Vec<_>>()
            .join("\t")
    }

    fn row(&self, cells: &[String], _aligner: Option<&ColumnAligner>) -> String {
        if cells.iter().all(|c| c.is_empty()) {
            return String::new();
        }
        let indent = leading_empty(cells);
        let mut formatted: Vec<String> = vec![String::new(); indent];
        formatted.extend(
            mark_empty_cells(cells, indent, false)
                .iter()
                .map(|c| Self::escape(c)),
        );
        formatted.join("\t")
    }

    fn supports_alignment(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    fn space() -> Box<dyn RowFormatter> {
        formatter(OutputFormat::Space, &WriterConfig::default(), 4)
    }

    // ==================== Space tests ====================

    #[test]
    fn test_space_row() {
        let f = space();
        assert_eq!(f.row(&s(&["", "Log", "hello"]), None), "    Log    hello");
        assert_eq!(f.row(&s(&["", "", "Log", "x"]), None), "        Log    x");
        assert_eq!(f.row(&s(&[]), None), "");
        assert_eq!(f.header("Test Cases", &[], None), "*** Test Cases ***");
    }

    #[test]
    fn test_space_empty_cells_marked() {
        let f = space();
        assert_eq!(f.row(&s(&["Kw", "", "b"]), None), "Kw    \\    b");
        assert_eq!(f.row(&s(&["", "Kw", "a", ""]), None), "    Kw    a    \\");
    }

    #[test]
    fn test_space_whitespace_escaped() {
        let f = space();
        assert_eq!(f.row(&s(&["Log", "a  b"]), None), "Log    a \\ b");
        assert_eq!(f.row(&s(&["Log", "one\ntwo"]), None), "Log    one two");
    }

    #[test]
    fn test_space_separator_widths() {
        let config = WriterConfig::builder().separating_spaces(2).build();
        let f = formatter(OutputFormat::Space, &config, 2);
        assert_eq!(f.row(&s(&["", "Log", "x"]), None), "  Log  x");
    }

    #[test]
    fn test_space_aligned() {
        let f = space();
        let aligner = ColumnAligner::new(vec![10, 6, 6]);
        assert_eq!(
            f.row(&s(&["Example", "Log", "hi"]), Some(&aligner)),
            "Example       Log       hi"
        );
    }

    #[test]
    fn test_space_aligned_indent_matches_name_row() {
        let f = space();
        let aligner = ColumnAligner::new(vec![18, 6, 3]);
        let name_row = f.row(&s(&["T", "Log", "x"]), Some(&aligner));
        let step_row = f.row(&s(&["", "Log", "y"]), Some(&aligner));
        assert_eq!(name_row, "T                     Log       x");
        assert_eq!(step_row, "                      Log       y");
        assert_eq!(name_row.find("Log"), step_row.find("Log"));
        assert_eq!(
            f.header("Test Cases", &s(&["Action", "Arg"]), Some(&aligner)),
            "*** Test Cases ***    Action    Arg"
        );
    }

    // ==================== Pipe tests ====================

    #[test]
    fn test_pipe_row() {
        let f = PipeFormatter;
        assert_eq!(f.row(&s(&["", "Log", "hello"]), None), "|    | Log | hello |");
        assert_eq!(f.row(&s(&["Kw", "", "x"]), None), "| Kw |    | x |");
        assert_eq!(f.header("Settings", &[], None), "| *** Settings *** |");
    }

    #[test]
    fn test_pipe_escapes() {
        assert_eq!(PipeFormatter::escape("|"), "\\|");
        assert_eq!(PipeFormatter::escape("a | b"), "a \\| b");
        assert_eq!(PipeFormatter::escape("| a"), "\\| a");
        assert_eq!(PipeFormatter::escape("a |"), "a \\|");
    }

    // ==================== TSV tests ====================

    #[test]
    fn test_tsv_row() {
        let f = TsvFormatter;
        assert_eq!(f.row(&s(&["", "Log", "hello"]), None), "\tLog\thello");
        assert_eq!(f.row(&s(&["Log", "a\tb"]), None), "Log\ta\\tb");
        assert_eq!(f.header("Test Cases", &s(&["Action"]), None), "*Test Cases*\t*Action*");
        assert!(!f.supports_alignment());
    }

    #[test]
    fn test_tsv_quoted_cell_kept() {
        assert_eq!(TsvFormatter::escape("\"x\""), "\"\"\"x\"\"\"");
    }
}
