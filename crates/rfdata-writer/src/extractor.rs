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

//! Model to output rows.
//!
//! Rows come out in source order where the model knows source lines and in
//! canonical order otherwise. Cells are absolute: rows inside test cases and
//! keywords carry their leading empty cell.

use rfdata_core::{
    CommentRow, KeywordTable, Languages, Setting, SettingKey, SettingTable, StepContainer,
    TestCaseTable, VariableTable,
};

/// One logical output row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputRow {
    pub cells: Vec<String>,
    /// Documentation row whose value may be split at `\n`.
    pub doc: bool,
}

impl OutputRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells, doc: false }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

/// A row together with the source line ordering it.
struct Placed {
    row: OutputRow,
    line: Option<usize>,
}

fn setting_row(setting: &dyn Setting, languages: &Languages, bracketed: bool) -> OutputRow {
    let mut cells = setting.as_list();
    let info = setting.info();
    if !info.is_populated() && info.has_default_name() {
        let name = languages.localized_setting(info.key);
        cells[0] = if bracketed {
            format!("[{}]", name)
        } else {
            name.to_string()
        };
    }
    OutputRow {
        cells,
        doc: info.key == SettingKey::Documentation,
    }
}

fn comment_row(row: &CommentRow) -> OutputRow {
    OutputRow::new(row.cells.clone())
}

/// Position before the run of trailing blank rows.
fn before_trailing_blanks(rows: &[Placed]) -> usize {
    let blanks = rows.iter().rev().take_while(|p| p.row.is_empty()).count();
    rows.len() - blanks
}

pub fn setting_rows(table: &SettingTable, languages: &Languages) -> Vec<OutputRow> {
    let mut lined = Vec::new();
    let mut lineless = Vec::new();
    for setting in table.settings().into_iter().filter(|s| s.is_set()) {
        let placed = Placed {
            row: setting_row(setting, languages, false),
            line: setting.line(),
        };
        if placed.line.is_some() {
            lined.push(placed);
        } else {
            lineless.push(placed);
        }
    }
    for row in &table.comment_rows {
        let placed = Placed {
            row: comment_row(row),
            line: row.line,
        };
        if placed.line.is_some() {
            lined.push(placed);
        } else {
            lineless.push(placed);
        }
    }
    lined.sort_by_key(|p| p.line);
    let at = before_trailing_blanks(&lined);
    lined.splice(at..at, lineless);
    lined.into_iter().map(|p| p.row).collect()
}

pub fn variable_rows(table: &VariableTable) -> Vec<OutputRow> {
    table
        .variables
        .iter()
        .map(|v| OutputRow::new(v.as_list()))
        .collect()
}

pub fn test_rows(table: &TestCaseTable, languages: &Languages) -> Vec<OutputRow> {
    let mut rows: Vec<OutputRow> = table.leading_rows.iter().map(comment_row).collect();
    for test in &table.tests {
        rows.extend(item_rows(test, languages));
    }
    rows
}

pub fn keyword_rows(table: &KeywordTable, languages: &Languages) -> Vec<OutputRow> {
    let mut rows: Vec<OutputRow> = table.leading_rows.iter().map(comment_row).collect();
    for keyword in &table.keywords {
        rows.extend(item_rows(keyword, languages));
    }
    rows
}

/// Rows of one test case or keyword, name row first.
pub fn item_rows<C: StepContainer + ?Sized>(item: &C, languages: &Languages) -> Vec<OutputRow> {
    let setting = |s: &dyn Setting| Placed {
        row: setting_row(s, languages, true),
        line: s.line(),
    };
    let mut lined: Vec<Placed> = item
        .settings()
        .into_iter()
        .filter(|s| s.is_set() && s.line().is_some())
        .map(setting)
        .collect();
    lined.sort_by_key(|p| p.line);
    let mut pending = lined.into_iter().peekable();

    let mut placed: Vec<Placed> = item
        .leading_settings()
        .into_iter()
        .filter(|s| s.is_set() && s.line().is_none())
        .map(setting)
        .collect();
    for body_item in item.body() {
        for (cells, line) in body_item.rows() {
            if let Some(line) = line {
                while let Some(next) = pending.next_if(|p| p.line < Some(line)) {
                    placed.push(next);
                }
            }
            placed.push(Placed {
                row: OutputRow::new(cells),
                line,
            });
        }
    }
    placed.extend(pending);
    let trailing: Vec<Placed> = item
        .trailing_settings()
        .into_iter()
        .filter(|s| s.is_set() && s.line().is_none())
        .map(setting)
        .collect();
    let at = before_trailing_blanks(&placed);
    placed.splice(at..at, trailing);

    let mut name_row = vec![item.name().to_string()];
    let merge = placed.first().map_or(false, |first| {
        first.line.is_some() && first.line == item.line() && !first.row.doc && !first.row.is_empty()
    });
    let mut rows = Vec::with_capacity(placed.len() + 1);
    let mut placed = placed.into_iter();
    if merge {
        if let Some(first) = placed.next() {
            name_row.extend(first.row.cells);
        }
    }
    name_row.extend(item.name_comment().iter().cloned());
    rows.push(OutputRow::new(name_row));
    for p in placed {
        let mut row = p.row;
        if !row.is_empty() {
            row.cells.insert(0, String::new());
        }
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfdata_core::{
        parse_test_case_str, BodyItem, DataFile, ReaderOptions, Step, TestCase, UserKeyword,
    };

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    fn cells(rows: &[OutputRow]) -> Vec<Vec<String>> {
        rows.iter().map(|r| r.cells.clone()).collect()
    }

    // ==================== Setting table tests ====================

    #[test]
    fn test_settings_in_source_order() {
        let text = "*** Settings ***\nLibrary    A\n# note\nDocumentation    d\n";
        let file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
        let rows = setting_rows(&file.tables().settings, file.languages());
        assert_eq!(
            cells(&rows),
            vec![s(&["Library", "A"]), s(&["# note"]), s(&["Documentation", "d"])]
        );
        assert!(rows[2].doc);
    }

    #[test]
    fn test_new_settings_before_trailing_blanks() {
        let text = "*** Settings ***\nLibrary    A\n\n";
        let mut file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
        file.tables_mut().settings.suite_setup.set_value(s(&["Setup Kw"]));
        let rows = setting_rows(&file.tables().settings, file.languages());
        assert_eq!(
            cells(&rows),
            vec![s(&["Library", "A"]), s(&["Suite Setup", "Setup Kw"]), vec![]]
        );
    }

    #[test]
    fn test_programmatic_setting_localized() {
        let text = "Language: Fi\n*** Asetukset ***\n";
        let mut file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
        file.tables_mut().settings.doc.set_value(s(&["text"]));
        let rows = setting_rows(&file.tables().settings, file.languages());
        assert_eq!(rows[0].cells, s(&["Dokumentaatio", "text"]));
    }

    // ==================== Item tests ====================

    #[test]
    fn test_item_settings_interleaved_by_line() {
        let text = "*** Keywords ***\nKw\n    [Arguments]    ${a}\n    Log    ${a}\n    [Return]    ${a}\n";
        let file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
        let rows = item_rows(&file.tables().keywords.keywords[0], file.languages());
        assert_eq!(
            cells(&rows),
            vec![
                s(&["Kw"]),
                s(&["", "[Arguments]", "${a}"]),
                s(&["", "Log", "${a}"]),
                s(&["", "[Return]", "${a}"]),
            ]
        );
    }

    #[test]
    fn test_inserted_row_keeps_settings_in_place() {
        let text = "*** Test Cases ***\nT\n    A\n    [Teardown]    Td\n    B\n";
        let mut file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
        let test = &mut file.tables_mut().tests.tests[0];
        let mut rows = test.body_rows();
        rows.insert(0, s(&["New"]));
        test.set_body_rows(rows);
        let rows = item_rows(&file.tables().tests.tests[0], file.languages());
        assert_eq!(
            cells(&rows),
            vec![
                s(&["T"]),
                s(&["", "New"]),
                s(&["", "A"]),
                s(&["", "[Teardown]", "Td"]),
                s(&["", "B"]),
            ]
        );
    }

    #[test]
    fn test_step_on_name_row_stays_there() {
        let text = "*** Test Cases ***\nExample    Log    hi\n    No Operation\n";
        let file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
        let rows = item_rows(&file.tables().tests.tests[0], file.languages());
        assert_eq!(
            cells(&rows),
            vec![s(&["Example", "Log", "hi"]), s(&["", "No Operation"])]
        );
    }

    #[test]
    fn test_programmatic_item() {
        let mut keyword = UserKeyword::new("New", None);
        keyword.teardown.set_value(s(&["Cleanup"]));
        keyword.doc.set_value(s(&["Made in code."]));
        keyword
            .body
            .push(BodyItem::Step(Step::from_cells(s(&["Log", "x"]), vec![], None)));
        keyword.body.push(BodyItem::Step(Step::empty(None)));
        let rows = item_rows(&keyword, &Languages::english());
        assert_eq!(
            cells(&rows),
            vec![
                s(&["New"]),
                s(&["", "[Documentation]", "Made in code."]),
                s(&["", "Log", "x"]),
                s(&["", "[Teardown]", "Cleanup"]),
                vec![],
            ]
        );
    }

    #[test]
    fn test_name_comment_kept() {
        let mut test = TestCase::new("T", Some(1));
        test.name_comment = s(&["# about T"]);
        let rows = item_rows(&test, &Languages::english());
        assert_eq!(cells(&rows), vec![s(&["T", "# about T"])]);
    }
}
