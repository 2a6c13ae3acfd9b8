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

//! The command contract and the row and cell editing commands.
//!
//! Row commands work on the flattened body rows of one test or keyword, the
//! same rows a table editor shows: loop bodies are indented by one empty
//! cell and the `END` row is a row of its own. After editing, the rows are
//! regrouped into steps and loops.

use crate::target::{item_mut, CellRef, ItemRef, Location};
use rfdata_core::{BodyItem, DataFile, DataTables, RfError, RfResult};
use std::fmt;

/// Result of a successful command.
#[derive(Debug)]
pub struct Executed {
    /// Command that restores the state before this one ran.
    pub inverse: Box<dyn Command>,
    pub changes: Vec<Location>,
}

impl Executed {
    pub fn new(inverse: impl Command + 'static, changes: Vec<Location>) -> Self {
        Self {
            inverse: Box::new(inverse),
            changes,
        }
    }
}

/// A transformation of a data file.
///
/// Commands are the only mutation path for an edited file. A command either
/// applies completely and returns its inverse, or fails and leaves the file
/// untouched.
pub trait Command: fmt::Debug {
    /// Short name used in change events and logs.
    fn name(&self) -> &'static str;

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed>;
}

/// Puts back a saved item body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreBody {
    pub item: ItemRef,
    pub body: Vec<BodyItem>,
}

impl Command for RestoreBody {
    fn name(&self) -> &'static str {
        "restore body"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        let target = item_mut(file, self.item)?;
        let previous = std::mem::replace(target.body_mut(), self.body.clone());
        Ok(Executed::new(
            RestoreBody {
                item: self.item,
                body: previous,
            },
            vec![self.item.into()],
        ))
    }
}

/// Puts back saved tables. `changes` is reported as touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreTables {
    pub tables: DataTables,
    pub changes: Vec<Location>,
}

impl Command for RestoreTables {
    fn name(&self) -> &'static str {
        "restore tables"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        let previous = std::mem::replace(file.tables_mut(), self.tables.clone());
        Ok(Executed::new(
            RestoreTables {
                tables: previous,
                changes: self.changes.clone(),
            },
            self.changes.clone(),
        ))
    }
}

/// Edit the body rows of `target`; the inverse restores the old body.
pub(crate) fn edit_rows<F>(file: &mut dyn DataFile, target: ItemRef, edit: F) -> RfResult<Executed>
where
    F: FnOnce(&mut Vec<Vec<String>>) -> RfResult<()>,
{
    let container = item_mut(file, target)?;
    let before = container.body().to_vec();
    let mut rows = container.body_rows();
    edit(&mut rows)?;
    container.set_body_rows(rows);
    Ok(Executed::new(
        RestoreBody {
            item: target,
            body: before,
        },
        vec![target.into()],
    ))
}

fn trim_trailing_empty(row: &mut Vec<String>) {
    while row.last().map_or(false, |c| c.is_empty()) {
        row.pop();
    }
}

/// Sorted, deduplicated row indices, all below `len`.
fn checked_rows(rows: &[usize], len: usize) -> RfResult<Vec<usize>> {
    if rows.is_empty() {
        return Err(RfError::command("No rows selected."));
    }
    let mut sorted = rows.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if let Some(&last) = sorted.last() {
        if last >= len {
            return Err(RfError::command(format!(
                "Row {} is out of range ({} rows).",
                last, len
            )));
        }
    }
    Ok(sorted)
}

/// Set one cell. Rows and cells missing up to the target are created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeCellValue {
    pub item: ItemRef,
    pub cell: CellRef,
    pub value: String,
}

impl Command for ChangeCellValue {
    fn name(&self) -> &'static str {
        "change cell value"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        let CellRef { row, col } = self.cell;
        edit_rows(file, self.item, |rows| {
            if rows.len() <= row {
                rows.resize(row + 1, Vec::new());
            }
            let cells = &mut rows[row];
            if cells.len() <= col {
                cells.resize(col + 1, String::new());
            }
            cells[col] = self.value.clone();
            trim_trailing_empty(cells);
            Ok(())
        })
    }
}

fn cell_range(top_left: CellRef, bottom_right: CellRef) -> RfResult<()> {
    if top_left.row > bottom_right.row || top_left.col > bottom_right.col {
        return Err(RfError::command(format!(
            "Invalid cell range ({}, {})..({}, {}).",
            top_left.row, top_left.col, bottom_right.row, bottom_right.col
        )));
    }
    Ok(())
}

/// Insert empty cells in a block, shifting existing cells right. Rows
/// shorter than the block's first column are left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertCells {
    pub item: ItemRef,
    pub top_left: CellRef,
    pub bottom_right: CellRef,
}

impl Command for InsertCells {
    fn name(&self) -> &'static str {
        "insert cells"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        cell_range(self.top_left, self.bottom_right)?;
        let col = self.top_left.col;
        let count = self.bottom_right.col - col + 1;
        edit_rows(file, self.item, |rows| {
            let last = self.bottom_right.row.min(rows.len().saturating_sub(1));
            for cells in rows.iter_mut().take(last + 1).skip(self.top_left.row) {
                if col < cells.len() {
                    cells.splice(col..col, std::iter::repeat(String::new()).take(count));
                }
            }
            Ok(())
        })
    }
}

/// Delete a block of cells, shifting the rest of each row left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCells {
    pub item: ItemRef,
    pub top_left: CellRef,
    pub bottom_right: CellRef,
}

impl Command for DeleteCells {
    fn name(&self) -> &'static str {
        "delete cells"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        cell_range(self.top_left, self.bottom_right)?;
        let col = self.top_left.col;
        edit_rows(file, self.item, |rows| {
            let last = self.bottom_right.row.min(rows.len().saturating_sub(1));
            for cells in rows.iter_mut().take(last + 1).skip(self.top_left.row) {
                if col < cells.len() {
                    let end = (self.bottom_right.col + 1).min(cells.len());
                    cells.drain(col..end);
                }
            }
            Ok(())
        })
    }
}

/// Insert as many empty rows as are selected, above the first selected row.
/// A selection past the last row appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertRows {
    pub item: ItemRef,
    pub rows: Vec<usize>,
}

impl Command for InsertRows {
    fn name(&self) -> &'static str {
        "insert rows"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        let Some(&first) = self.rows.iter().min() else {
            return Err(RfError::command("No rows selected."));
        };
        let count = self.rows.len();
        edit_rows(file, self.item, |rows| {
            let at = first.min(rows.len());
            rows.splice(at..at, std::iter::repeat(Vec::new()).take(count));
            Ok(())
        })
    }
}

/// Delete the selected rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRows {
    pub item: ItemRef,
    pub rows: Vec<usize>,
}

impl Command for DeleteRows {
    fn name(&self) -> &'static str {
        "delete rows"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        edit_rows(file, self.item, |rows| {
            for idx in checked_rows(&self.rows, rows.len())?.into_iter().rev() {
                rows.remove(idx);
            }
            Ok(())
        })
    }
}

/// Comment marker cell inserted by [`CommentRows`].
pub const COMMENT_MARKER: &str = "#";

/// Turn the selected rows into comments by inserting a `#` cell before the
/// first data cell. Rows already commented get another marker, so that
/// [`UncommentRows`] restores them exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRows {
    pub item: ItemRef,
    pub rows: Vec<usize>,
}

impl Command for CommentRows {
    fn name(&self) -> &'static str {
        "comment rows"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        edit_rows(file, self.item, |rows| {
            for idx in checked_rows(&self.rows, rows.len())? {
                let cells = &mut rows[idx];
                let indent = cells.iter().take_while(|c| c.is_empty()).count();
                cells.insert(indent, COMMENT_MARKER.to_string());
            }
            Ok(())
        })
    }
}

/// Remove one comment marker from the selected rows: a `#` cell is dropped,
/// a cell like `# text` loses its `#` and the following space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncommentRows {
    pub item: ItemRef,
    pub rows: Vec<usize>,
}

impl Command for UncommentRows {
    fn name(&self) -> &'static str {
        "uncomment rows"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        edit_rows(file, self.item, |rows| {
            for idx in checked_rows(&self.rows, rows.len())? {
                uncomment(&mut rows[idx]);
            }
            Ok(())
        })
    }
}

fn uncomment(cells: &mut Vec<String>) {
    let Some(idx) = cells.iter().position(|c| !c.is_empty()) else {
        return;
    };
    if cells[idx] == COMMENT_MARKER {
        cells.remove(idx);
    } else if let Some(rest) = cells[idx].strip_prefix(COMMENT_MARKER) {
        let rest = rest.strip_prefix(' ').unwrap_or(rest).to_string();
        cells[idx] = rest;
        trim_trailing_empty(cells);
    }
}

/// Move the selected rows one position up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRowsUp {
    pub item: ItemRef,
    pub rows: Vec<usize>,
}

impl Command for MoveRowsUp {
    fn name(&self) -> &'static str {
        "move rows up"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        edit_rows(file, self.item, |rows| {
            let selected = checked_rows(&self.rows, rows.len())?;
            if selected[0] == 0 {
                return Err(RfError::command("Cannot move the first row up."));
            }
            for idx in selected {
                rows.swap(idx - 1, idx);
            }
            Ok(())
        })
    }
}

/// Move the selected rows one position down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRowsDown {
    pub item: ItemRef,
    pub rows: Vec<usize>,
}

impl Command for MoveRowsDown {
    fn name(&self) -> &'static str {
        "move rows down"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        edit_rows(file, self.item, |rows| {
            let selected = checked_rows(&self.rows, rows.len())?;
            if selected.last().map_or(false, |&last| last + 1 >= rows.len()) {
                return Err(RfError::command("Cannot move the last row down."));
            }
            for idx in selected.into_iter().rev() {
                rows.swap(idx, idx + 1);
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfdata_core::{parse_test_case_str, ReaderOptions, StepContainer, TestCaseFile};

    fn parse(text: &str) -> TestCaseFile {
        parse_test_case_str(text, &ReaderOptions::default()).unwrap()
    }

    fn three_steps() -> TestCaseFile {
        parse("*** Test Cases ***\nT\n    Log    a\n    Log    b\n    Log    c\n")
    }

    fn rows(file: &TestCaseFile) -> Vec<Vec<String>> {
        file.tables().tests.tests[0].body_rows()
    }

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    const T0: ItemRef = ItemRef::Test(0);

    // ==================== Cell tests ====================

    #[test]
    fn test_change_cell_value_and_inverse() {
        let mut file = three_steps();
        let original = file.clone();
        let cmd = ChangeCellValue {
            item: T0,
            cell: CellRef::new(1, 1),
            value: "B".to_string(),
        };
        let executed = cmd.execute(&mut file).unwrap();
        assert_eq!(rows(&file)[1], s(&["Log", "B"]));
        assert_eq!(executed.changes, vec![Location::Item(T0)]);
        executed.inverse.execute(&mut file).unwrap();
        assert_eq!(file, original);
    }

    #[test]
    fn test_change_cell_creates_rows_and_cells() {
        let mut file = three_steps();
        let cmd = ChangeCellValue {
            item: T0,
            cell: CellRef::new(4, 2),
            value: "x".to_string(),
        };
        cmd.execute(&mut file).unwrap();
        let body = rows(&file);
        assert_eq!(body.len(), 5);
        assert!(body[3].is_empty());
        assert_eq!(body[4], s(&["", "", "x"]));
    }

    #[test]
    fn test_clearing_last_cell_trims_row() {
        let mut file = three_steps();
        let cmd = ChangeCellValue {
            item: T0,
            cell: CellRef::new(0, 1),
            value: String::new(),
        };
        cmd.execute(&mut file).unwrap();
        assert_eq!(rows(&file)[0], s(&["Log"]));
    }

    #[test]
    fn test_insert_and_delete_cells() {
        let mut file = three_steps();
        InsertCells {
            item: T0,
            top_left: CellRef::new(0, 1),
            bottom_right: CellRef::new(1, 2),
        }
        .execute(&mut file)
        .unwrap();
        let body = rows(&file);
        assert_eq!(body[0], s(&["Log", "", "", "a"]));
        assert_eq!(body[1], s(&["Log", "", "", "b"]));
        assert_eq!(body[2], s(&["Log", "c"]));

        DeleteCells {
            item: T0,
            top_left: CellRef::new(0, 1),
            bottom_right: CellRef::new(1, 2),
        }
        .execute(&mut file)
        .unwrap();
        assert_eq!(rows(&file), three_steps().tables().tests.tests[0].body_rows());
    }

    #[test]
    fn test_invalid_range_rejected() {
        let mut file = three_steps();
        let err = DeleteCells {
            item: T0,
            top_left: CellRef::new(2, 0),
            bottom_right: CellRef::new(1, 0),
        }
        .execute(&mut file)
        .unwrap_err();
        assert_eq!(err.kind, rfdata_core::RfErrorKind::Command);
    }

    // ==================== Row tests ====================

    #[test]
    fn test_insert_rows_above_selection() {
        let mut file = three_steps();
        InsertRows {
            item: T0,
            rows: vec![2, 1],
        }
        .execute(&mut file)
        .unwrap();
        let body = rows(&file);
        assert_eq!(body.len(), 5);
        assert_eq!(body[0], s(&["Log", "a"]));
        assert!(body[1].is_empty() && body[2].is_empty());
        assert_eq!(body[3], s(&["Log", "b"]));
    }

    #[test]
    fn test_delete_rows_and_undo() {
        let mut file = three_steps();
        let original = file.clone();
        let executed = DeleteRows {
            item: T0,
            rows: vec![0, 2],
        }
        .execute(&mut file)
        .unwrap();
        assert_eq!(rows(&file), vec![s(&["Log", "b"])]);
        executed.inverse.execute(&mut file).unwrap();
        assert_eq!(file, original);
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut file = three_steps();
        let before = file.clone();
        assert!(DeleteRows {
            item: T0,
            rows: vec![3],
        }
        .execute(&mut file)
        .is_err());
        assert_eq!(file, before);
    }

    #[test]
    fn test_comment_and_uncomment() {
        let mut file = three_steps();
        CommentRows {
            item: T0,
            rows: vec![1],
        }
        .execute(&mut file)
        .unwrap();
        assert_eq!(rows(&file)[1], s(&["#", "Log", "b"]));
        assert!(file.tables().tests.tests[0].body[1].steps()[0].is_commented());

        UncommentRows {
            item: T0,
            rows: vec![1],
        }
        .execute(&mut file)
        .unwrap();
        assert_eq!(rows(&file), three_steps().tables().tests.tests[0].body_rows());
    }

    #[test]
    fn test_uncomment_text_comment() {
        let mut cells = s(&["", "# note"]);
        uncomment(&mut cells);
        assert_eq!(cells, s(&["", "note"]));
        let mut cells = s(&["Log", "x"]);
        uncomment(&mut cells);
        assert_eq!(cells, s(&["Log", "x"]));
    }

    #[test]
    fn test_comment_loop_body_row_keeps_indent() {
        let mut file = parse(rfdata_test::fixtures::FOR_LOOP);
        CommentRows {
            item: T0,
            rows: vec![1],
        }
        .execute(&mut file)
        .unwrap();
        assert_eq!(rows(&file)[1], s(&["", "#", "Log", "${i}"]));
        assert!(matches!(
            file.tables().tests.tests[0].body[0],
            BodyItem::ForLoop(_)
        ));
    }

    #[test]
    fn test_move_rows() {
        let mut file = three_steps();
        MoveRowsUp {
            item: T0,
            rows: vec![1, 2],
        }
        .execute(&mut file)
        .unwrap();
        assert_eq!(
            rows(&file),
            vec![s(&["Log", "b"]), s(&["Log", "c"]), s(&["Log", "a"])]
        );
        MoveRowsDown {
            item: T0,
            rows: vec![0, 1],
        }
        .execute(&mut file)
        .unwrap();
        assert_eq!(rows(&file), three_steps().tables().tests.tests[0].body_rows());
    }

    #[test]
    fn test_move_past_edges_rejected() {
        let mut file = three_steps();
        assert!(MoveRowsUp {
            item: T0,
            rows: vec![0],
        }
        .execute(&mut file)
        .is_err());
        assert!(MoveRowsDown {
            item: T0,
            rows: vec![2],
        }
        .execute(&mut file)
        .is_err());
    }

    #[test]
    fn test_restore_tables_round_trip() {
        let mut file = three_steps();
        let saved = file.tables().clone();
        file.tables_mut().tests.tests.clear();
        let executed = RestoreTables {
            tables: saved.clone(),
            changes: vec![Location::Settings],
        }
        .execute(&mut file)
        .unwrap();
        assert_eq!(file.tables(), &saved);
        assert_eq!(executed.changes, vec![Location::Settings]);
        executed.inverse.execute(&mut file).unwrap();
        assert!(file.tables().tests.tests.is_empty());
    }
}
