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

//! Splitting physical lines into cells for each supported format.

use once_cell::sync::Lazy;
use regex::Regex;

/// Two or more spaces (including NBSP), or any run of tabs.
static SPACE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t\u{a0}]{2,}|\t+").expect("valid separator regex"));

/// Smallest indentation unit the reader auto-detects.
pub const MIN_SEPARATING_SPACES: usize = 2;
/// Largest indentation unit the reader auto-detects.
pub const MAX_SEPARATING_SPACES: usize = 10;

fn is_space(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\u{a0}'
}

/// Whether a line uses the pipe-separated syntax.
pub fn is_pipe_row(line: &str) -> bool {
    line == "|" || line.starts_with("| ") || line.starts_with("|\t")
}

/// Width in spaces of the leading indentation, `None` when it contains tabs.
pub fn leading_spaces(line: &str) -> Option<usize> {
    let mut count = 0;
    for c in line.chars() {
        match c {
            ' ' | '\u{a0}' => count += 1,
            '\t' => return None,
            _ => break,
        }
    }
    Some(count)
}

/// Split a space-separated line.
///
/// Leading whitespace turns into empty cells: each tab is one level, and each
/// run of spaces contributes `len / separating_spaces` levels (at least one
/// when the run is two spaces or longer). A single leading space is not
/// indentation.
pub fn split_space_row(line: &str, separating_spaces: usize) -> Vec<String> {
    let line = line.trim_end_matches(is_space);
    if line.is_empty() {
        return Vec::new();
    }
    let unit = separating_spaces.max(1);
    let mut levels = 0;
    let mut run = 0;
    let mut rest_start = line.len();
    for (idx, c) in line.char_indices() {
        match c {
            ' ' | '\u{a0}' => run += 1,
            '\t' => {
                levels += space_levels(run, unit) + 1;
                run = 0;
            }
            _ => {
                rest_start = idx;
                break;
            }
        }
    }
    levels += space_levels(run, unit);

    let mut cells: Vec<String> = std::iter::repeat(String::new()).take(levels).collect();
    cells.extend(
        SPACE_SEPARATOR
            .split(&line[rest_start..])
            .map(|cell| cell.to_string()),
    );
    cells
}

/// Character columns at which the cells of a space-separated line start.
pub fn cell_starts(line: &str) -> Vec<usize> {
    let line = line.trim_end_matches(is_space);
    let Some(first) = line.find(|c: char| !is_space(c)) else {
        return Vec::new();
    };
    let column = |byte: usize| line[..byte].chars().count();
    let mut starts = vec![column(first)];
    starts.extend(
        SPACE_SEPARATOR
            .find_iter(&line[first..])
            .map(|m| column(first + m.end())),
    );
    starts
}

/// Split a row of a table whose header names its columns.
///
/// Leading spaces line the first cell up with a header column rather than
/// repeating an indentation unit, so the row is indented by one level per
/// header column that starts within the leading run, and by at least one.
/// Rows indented with tabs are split as usual.
pub fn split_aligned_row(
    line: &str,
    column_starts: &[usize],
    separating_spaces: usize,
) -> Vec<String> {
    let lead = match leading_spaces(line) {
        Some(lead) if lead >= 2 => lead,
        _ => return split_space_row(line, separating_spaces),
    };
    let rest = line.trim_matches(is_space);
    if rest.is_empty() {
        return Vec::new();
    }
    let levels = column_starts
        .iter()
        .filter(|&&start| start > 0 && start <= lead)
        .count()
        .max(1);
    let mut cells: Vec<String> = std::iter::repeat(String::new()).take(levels).collect();
    cells.extend(SPACE_SEPARATOR.split(rest).map(|cell| cell.to_string()));
    cells
}

fn space_levels(run: usize, unit: usize) -> usize {
    if run < 2 {
        0
    } else {
        (run / unit).max(1)
    }
}

/// Split a pipe-separated line.
///
/// The leading `|` and an optional trailing ` |` are removed; cells are
/// separated by `|` surrounded by whitespace. Pipes escaped by the writer
/// are restored.
pub fn split_pipe_row(line: &str) -> Vec<String> {
    let line = line.trim_end_matches(is_space);
    let mut row = &line[1..];
    if row.ends_with(" |") || row.ends_with("\t|") {
        row = &row[..row.len() - 1];
    }
    let mut cells = Vec::new();
    let mut start = 0;
    let mut prev_space = false;
    let chars: Vec<(usize, char)> = row.char_indices().collect();
    for (i, &(idx, c)) in chars.iter().enumerate() {
        if c == '|' && prev_space {
            let next_space = chars.get(i + 1).map_or(false, |&(_, n)| is_space(n));
            if next_space {
                cells.push(row[start..idx].to_string());
                start = idx + 1;
            }
        }
        prev_space = is_space(c);
    }
    cells.push(row[start..].to_string());
    cells.into_iter().map(|cell| unescape_pipes(cell.trim_matches(is_space))).collect()
}

fn unescape_pipes(cell: &str) -> String {
    if cell == "\\|" {
        return "|".to_string();
    }
    let mut cell = cell.replace(" \\| ", " | ");
    if cell.starts_with("\\| ") {
        cell.remove(0);
    }
    if cell.ends_with(" \\|") {
        let len = cell.len();
        cell.remove(len - 2);
    }
    cell
}

/// Split a tab-separated line, unquoting `"..."` cells.
pub fn split_tsv_row(line: &str) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }
    line.split('\t').map(unquote_tsv).collect()
}

fn unquote_tsv(cell: &str) -> String {
    let cell = cell.trim();
    if cell.len() >= 2 && cell.starts_with('"') && cell.ends_with('"') {
        cell[1..cell.len() - 1].replace("\"\"", "\"")
    } else {
        cell.to_string()
    }
}
