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

//! Executable body of tests and keywords: steps and `FOR` loops.

use crate::lex::tokens::is_assign;
use std::fmt;

/// One body row: assignments, keyword name and arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    /// Leading empty cells relative to the test or keyword level.
    pub indent: usize,
    pub assign: Vec<String>,
    pub name: Option<String>,
    pub args: Vec<String>,
    pub comment: Vec<String>,
    pub line: Option<usize>,
}

impl Step {
    /// Analyze the cells of a row. `FOR` and `VAR` rows are kept as plain
    /// keyword-like rows without assignment detection.
    pub fn from_cells(cells: Vec<String>, comment: Vec<String>, line: Option<usize>) -> Self {
        let indent = cells.iter().take_while(|c| c.is_empty()).count();
        let mut content = cells.into_iter().skip(indent).peekable();
        let mut assign = Vec::new();
        let passthrough = matches!(content.peek().map(String::as_str), Some("FOR" | "VAR"));
        if !passthrough {
            while let Some(cell) = content.peek() {
                if !is_assign(cell) {
                    break;
                }
                assign.extend(content.next());
            }
        }
        let name = content.next();
        Self {
            indent,
            assign,
            name,
            args: content.collect(),
            comment,
            line,
        }
    }

    /// Blank row.
    pub fn empty(line: Option<usize>) -> Self {
        Self {
            line,
            ..Self::default()
        }
    }

    pub fn keyword(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Assignments, name and arguments.
    pub fn content(&self) -> Vec<String> {
        let mut cells = self.assign.clone();
        cells.extend(self.name.iter().cloned());
        cells.extend(self.args.iter().cloned());
        cells
    }

    /// Cells as written, relative to the test or keyword level.
    pub fn as_list(&self) -> Vec<String> {
        let mut cells = vec![String::new(); self.indent];
        cells.extend(self.content());
        cells.extend(self.comment.iter().cloned());
        if cells.iter().all(|c| c.is_empty()) {
            cells.clear();
        }
        cells
    }

    pub fn is_empty(&self) -> bool {
        self.assign.is_empty() && self.name.is_none() && self.comment.is_empty()
    }

    /// A row holding only a comment.
    pub fn is_commented(&self) -> bool {
        self.assign.is_empty() && self.name.is_none() && !self.comment.is_empty()
    }

    /// Append continuation cells.
    pub fn extend(&mut self, data: &[String], comment: &[String]) {
        let mut cells = vec![String::new(); self.indent];
        cells.extend(self.content());
        cells.extend(data.iter().cloned());
        let mut merged = std::mem::take(&mut self.comment);
        merged.extend(comment.iter().cloned());
        *self = Step::from_cells(cells, merged, self.line);
    }
}

/// Iteration flavor of a `FOR` loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForFlavor {
    In,
    InRange,
    InZip,
    InEnumerate,
}

impl ForFlavor {
    /// Recognize a flavor cell, case and space insensitively.
    pub fn parse(cell: &str) -> Option<Self> {
        let compact: String = cell
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        match compact.as_str() {
            "IN" => Some(Self::In),
            "INRANGE" => Some(Self::InRange),
            "INZIP" => Some(Self::InZip),
            "INENUMERATE" => Some(Self::InEnumerate),
            _ => None,
        }
    }
}

impl fmt::Display for ForFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::In => "IN",
            Self::InRange => "IN RANGE",
            Self::InZip => "IN ZIP",
            Self::InEnumerate => "IN ENUMERATE",
        })
    }
}

/// Explicit `END` row closing a loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndRow {
    pub indent: usize,
    pub keyword: String,
    pub args: Vec<String>,
    pub comment: Vec<String>,
    pub line: Option<usize>,
}

impl EndRow {
    pub fn as_list(&self) -> Vec<String> {
        let mut cells = vec![String::new(); self.indent];
        cells.push(self.keyword.clone());
        cells.extend(self.args.iter().cloned());
        cells.extend(self.comment.iter().cloned());
        cells
    }
}

/// A `FOR` loop with its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForLoop {
    pub indent: usize,
    /// `FOR` or the legacy `:FOR` as written.
    pub keyword: String,
    pub variables: Vec<String>,
    /// Flavor cell as written; `None` when missing.
    pub flavor_cell: Option<String>,
    pub values: Vec<String>,
    pub comment: Vec<String>,
    pub line: Option<usize>,
    /// Body rows, nested control structures kept as plain steps.
    pub steps: Vec<Step>,
    pub end: Option<EndRow>,
}

impl ForLoop {
    /// Analyze a declaration row starting with the loop marker.
    pub fn from_cells(cells: Vec<String>, comment: Vec<String>, line: Option<usize>) -> Self {
        let indent = cells.iter().take_while(|c| c.is_empty()).count();
        let mut content = cells.into_iter().skip(indent);
        let keyword = content.next().unwrap_or_else(|| "FOR".to_string());
        let rest: Vec<String> = content.collect();
        let (variables, flavor_cell, values) =
            match rest.iter().position(|c| ForFlavor::parse(c).is_some()) {
                Some(idx) => (
                    rest[..idx].to_vec(),
                    Some(rest[idx].clone()),
                    rest[idx + 1..].to_vec(),
                ),
                None => (rest, None, Vec::new()),
            };
        Self {
            indent,
            keyword,
            variables,
            flavor_cell,
            values,
            comment,
            line,
            steps: Vec::new(),
            end: None,
        }
    }

    pub fn flavor(&self) -> ForFlavor {
        self.flavor_cell
            .as_deref()
            .and_then(ForFlavor::parse)
            .unwrap_or(ForFlavor::In)
    }

    /// Declaration row cells.
    pub fn declaration(&self) -> Vec<String> {
        let mut cells = vec![String::new(); self.indent];
        cells.push(self.keyword.clone());
        cells.extend(self.variables.iter().cloned());
        cells.extend(self.flavor_cell.iter().cloned());
        cells.extend(self.values.iter().cloned());
        cells.extend(self.comment.iter().cloned());
        cells
    }

    /// Append continuation cells to the declaration.
    pub fn extend_declaration(&mut self, data: &[String], comment: &[String]) {
        let mut cells = vec![String::new(); self.indent];
        cells.push(self.keyword.clone());
        cells.extend(self.variables.iter().cloned());
        cells.extend(self.flavor_cell.iter().cloned());
        cells.extend(self.values.iter().cloned());
        cells.extend(data.iter().cloned());
        let mut merged = std::mem::take(&mut self.comment);
        merged.extend(comment.iter().cloned());
        let steps = std::mem::take(&mut self.steps);
        let end = self.end.take();
        *self = ForLoop::from_cells(cells, merged, self.line);
        self.steps = steps;
        self.end = end;
    }
}

/// Top-level body element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyItem {
    Step(Step),
    ForLoop(ForLoop),
}

impl BodyItem {
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Step(step) => step.line,
            Self::ForLoop(lp) => lp.line,
        }
    }

    /// Written rows with their source lines.
    pub fn rows(&self) -> Vec<(Vec<String>, Option<usize>)> {
        match self {
            Self::Step(step) => vec![(step.as_list(), step.line)],
            Self::ForLoop(lp) => {
                let mut rows = vec![(lp.declaration(), lp.line)];
                rows.extend(lp.steps.iter().map(|s| (s.as_list(), s.line)));
                if let Some(end) = &lp.end {
                    rows.push((end.as_list(), end.line));
                }
                rows
            }
        }
    }

    /// Steps including loop bodies, in order.
    pub fn steps(&self) -> Vec<&Step> {
        match self {
            Self::Step(step) => vec![step],
            Self::ForLoop(lp) => lp.steps.iter().collect(),
        }
    }

    pub fn steps_mut(&mut self) -> Vec<&mut Step> {
        match self {
            Self::Step(step) => vec![step],
            Self::ForLoop(lp) => lp.steps.iter_mut().collect(),
        }
    }
}

/// Flattened rows of a body.
pub fn body_rows(body: &[BodyItem]) -> Vec<Vec<String>> {
    body.iter()
        .flat_map(|item| item.rows().into_iter().map(|(cells, _)| cells))
        .collect()
}

/// Source lines parallel to [`body_rows`].
pub fn body_lines(body: &[BodyItem]) -> Vec<Option<usize>> {
    body.iter()
        .flat_map(|item| item.rows().into_iter().map(|(_, line)| line))
        .collect()
}

/// Source lines for `rows` replacing the rows of `body`.
///
/// Rows found unchanged in the old body keep their line. Between two
/// unchanged rows, new rows take the old lines of that stretch in order
/// and rows beyond them get none, so lines never decrease along `rows`.
pub fn carried_lines(body: &[BodyItem], rows: &[Vec<String>]) -> Vec<Option<usize>> {
    let old: Vec<(Vec<String>, Option<usize>)> =
        body.iter().flat_map(|item| item.rows()).collect();
    let (n, m) = (old.len(), rows.len());

    // Longest common subsequence lengths of old[i..] and rows[j..].
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if old[i].0 == rows[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }
    let mut anchors = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i].0 == rows[j] {
            anchors.push((i, j));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    anchors.push((n, m));

    let mut lines = Vec::with_capacity(m);
    let (mut old_start, mut new_start) = (0, 0);
    for (oi, nj) in anchors {
        let replaced = &old[old_start..oi];
        lines.extend((0..nj - new_start).map(|k| replaced.get(k).and_then(|(_, line)| *line)));
        if nj < m {
            lines.push(old[oi].1);
        }
        old_start = oi + 1;
        new_start = nj + 1;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|c| c.to_string()).collect()
    }

    // ==================== Step tests ====================

    #[test]
    fn test_step_with_assignments() {
        let step = Step::from_cells(s(&["${a}", "${b}=", "Get Values", "x"]), vec![], Some(4));
        assert_eq!(step.assign, s(&["${a}", "${b}="]));
        assert_eq!(step.keyword(), Some("Get Values"));
        assert_eq!(step.args, s(&["x"]));
        assert_eq!(step.as_list(), s(&["${a}", "${b}=", "Get Values", "x"]));
    }

    #[test]
    fn test_step_indent_kept() {
        let step = Step::from_cells(s(&["", "Log", "x"]), s(&["# c"]), None);
        assert_eq!(step.indent, 1);
        assert_eq!(step.as_list(), s(&["", "Log", "x", "# c"]));
    }

    #[test]
    fn test_var_and_for_are_not_assignments() {
        let step = Step::from_cells(s(&["VAR", "${x}", "1"]), vec![], None);
        assert!(step.assign.is_empty());
        assert_eq!(step.keyword(), Some("VAR"));
        assert_eq!(step.args, s(&["${x}", "1"]));
    }

    #[test]
    fn test_comment_and_empty_steps() {
        let comment = Step::from_cells(s(&[""]), s(&["# note"]), None);
        assert!(comment.is_commented());
        assert_eq!(comment.as_list(), s(&["", "# note"]));
        let empty = Step::empty(Some(9));
        assert!(empty.is_empty());
        assert!(empty.as_list().is_empty());
    }

    #[test]
    fn test_step_extend() {
        let mut step = Step::from_cells(s(&["Log Many", "a"]), vec![], Some(1));
        step.extend(&s(&["b", "c"]), &s(&["# tail"]));
        assert_eq!(step.args, s(&["a", "b", "c"]));
        assert_eq!(step.comment, s(&["# tail"]));
        assert_eq!(step.line, Some(1));
    }

    // ==================== ForLoop tests ====================

    #[test]
    fn test_for_loop_declaration() {
        let lp = ForLoop::from_cells(s(&["FOR", "${i}", "IN RANGE", "10"]), vec![], Some(2));
        assert_eq!(lp.variables, s(&["${i}"]));
        assert_eq!(lp.flavor(), ForFlavor::InRange);
        assert_eq!(lp.values, s(&["10"]));
        assert_eq!(lp.declaration(), s(&["FOR", "${i}", "IN RANGE", "10"]));
    }

    #[test]
    fn test_for_loop_flavor_normalized() {
        let lp = ForLoop::from_cells(s(&[":FOR", "${i}", "in enumerate", "a"]), vec![], None);
        assert_eq!(lp.flavor(), ForFlavor::InEnumerate);
        assert_eq!(lp.flavor_cell.as_deref(), Some("in enumerate"));
    }

    #[test]
    fn test_for_loop_without_flavor() {
        let lp = ForLoop::from_cells(s(&["FOR", "${a}", "${b}"]), vec![], None);
        assert_eq!(lp.flavor(), ForFlavor::In);
        assert_eq!(lp.variables, s(&["${a}", "${b}"]));
        assert!(lp.values.is_empty());
    }

    #[test]
    fn test_for_loop_extend_declaration() {
        let mut lp = ForLoop::from_cells(s(&["FOR", "${i}", "IN", "a"]), vec![], Some(1));
        lp.extend_declaration(&s(&["b", "c"]), &[]);
        assert_eq!(lp.values, s(&["a", "b", "c"]));
    }

    #[test]
    fn test_body_rows_flatten_loops() {
        let mut lp = ForLoop::from_cells(s(&["FOR", "${i}", "IN", "a"]), vec![], Some(2));
        lp.steps.push(Step::from_cells(s(&["", "Log", "${i}"]), vec![], Some(3)));
        lp.end = Some(EndRow {
            indent: 0,
            keyword: "END".into(),
            args: vec![],
            comment: vec![],
            line: Some(4),
        });
        let body = vec![
            BodyItem::Step(Step::from_cells(s(&["No Operation"]), vec![], Some(1))),
            BodyItem::ForLoop(lp),
        ];
        assert_eq!(
            body_rows(&body),
            vec![
                s(&["No Operation"]),
                s(&["FOR", "${i}", "IN", "a"]),
                s(&["", "Log", "${i}"]),
                s(&["END"]),
            ]
        );
        assert_eq!(body_lines(&body), vec![Some(1), Some(2), Some(3), Some(4)]);
    }

    // ==================== Line carrying tests ====================

    fn steps(rows: &[(&[&str], usize)]) -> Vec<BodyItem> {
        rows.iter()
            .map(|(cells, line)| BodyItem::Step(Step::from_cells(s(cells), vec![], Some(*line))))
            .collect()
    }

    #[test]
    fn test_carried_lines_follow_unchanged_rows() {
        let body = steps(&[(&["A"], 3), (&["B"], 4), (&["C"], 6)]);
        let inserted = vec![s(&["New"]), s(&["A"]), s(&["B"]), s(&["C"])];
        assert_eq!(carried_lines(&body, &inserted), vec![None, Some(3), Some(4), Some(6)]);
        let deleted = vec![s(&["A"]), s(&["C"])];
        assert_eq!(carried_lines(&body, &deleted), vec![Some(3), Some(6)]);
        let swapped = vec![s(&["B"]), s(&["A"]), s(&["C"])];
        assert_eq!(carried_lines(&body, &swapped), vec![Some(4), None, Some(6)]);
    }

    #[test]
    fn test_carried_lines_reuse_replaced_lines() {
        let body = steps(&[(&["A"], 3), (&["B"], 4), (&["C"], 6)]);
        let edited = vec![s(&["A"]), s(&["B"]), s(&["C", "x"]), s(&["D"])];
        assert_eq!(carried_lines(&body, &edited), vec![Some(3), Some(4), Some(6), None]);
        assert_eq!(carried_lines(&[], &edited), vec![None; 4]);
        assert!(carried_lines(&body, &[]).is_empty());
    }
}
