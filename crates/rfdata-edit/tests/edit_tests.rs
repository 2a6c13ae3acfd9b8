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

//! Commands driven through the file controller, checked on the model and on
//! the written text.

use proptest::prelude::*;
use rfdata_core::language::normalize_keyword_name;
use rfdata_core::{
    parse_test_case_file, parse_test_case_str, DataFile, ReaderOptions, TestCaseFile,
};
use rfdata_edit::{
    ChangeCellValue, ChangeEvent, CellRef, CommentRows, DeleteRows, ExtractKeyword,
    ExtractScalar, FileController, InsertRows, ItemRef, Location, MoveRowsDown,
    RenameKeywordOccurrences, UncommentRows, Usage,
};
use rfdata_test::{fixtures, init_tracing, write_tree};
use rfdata_writer::{write_to_string, WriterConfig};
use std::cell::RefCell;
use std::rc::Rc;

fn parse(text: &str) -> TestCaseFile {
    init_tracing();
    parse_test_case_str(text, &ReaderOptions::default()).unwrap()
}

fn write(file: &dyn DataFile) -> String {
    write_to_string(file, &WriterConfig::default()).unwrap()
}

// ==================== Rename tests ====================

#[test]
fn test_scenario_rename_across_sites() {
    let mut controller = FileController::new(parse(fixtures::RENAME));
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    controller.subscribe(move |event: &ChangeEvent| sink.borrow_mut().push(event.clone()));

    controller
        .execute(&RenameKeywordOccurrences::new("Old Name", "New Name"))
        .unwrap();

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert!(events[0].touches(Location::Settings));
    assert!(events[0].touches(Location::Item(ItemRef::Test(0))));
    assert!(events[0].touches(Location::Item(ItemRef::Keyword(0))));

    let text = write(controller.file());
    assert_eq!(text, fixtures::RENAME.replace("Old Name", "New Name"));
}

#[test]
fn test_rename_then_find_reports_every_site() {
    let mut controller = FileController::new(parse(fixtures::RENAME));
    controller
        .execute(&RenameKeywordOccurrences::new("old_name", "Renamed"))
        .unwrap();
    let usages: Vec<Usage> = controller
        .find_occurrences("Renamed")
        .map(|o| o.usage)
        .collect();
    assert_eq!(usages.len(), 3);
    assert!(usages.contains(&Usage::Definition));
    assert!(usages.contains(&Usage::Step));
}

// ==================== Undo tests ====================

#[test]
fn test_undo_restores_written_form() {
    let mut controller = FileController::new(parse(fixtures::FULL_SUITE));
    let original = write(controller.file());

    controller
        .execute(&ChangeCellValue {
            item: ItemRef::Test(1),
            cell: CellRef::new(0, 1),
            value: "DEBUG".to_string(),
        })
        .unwrap();
    controller
        .execute(&InsertRows {
            item: ItemRef::Keyword(0),
            rows: vec![0],
        })
        .unwrap();
    controller
        .execute(&ExtractScalar {
            name: "${LEVEL}".to_string(),
            value: "DEBUG".to_string(),
            comment: "log level".to_string(),
            item: ItemRef::Test(1),
            cell: CellRef::new(0, 1),
        })
        .unwrap();
    controller
        .execute(&RenameKeywordOccurrences::new("Prepare Environment", "Setup All"))
        .unwrap();
    assert_ne!(write(controller.file()), original);

    while controller.undo().unwrap().is_some() {}
    assert_eq!(write(controller.file()), original);
}

#[test]
fn test_redo_reapplies_extract_keyword() {
    let text = "*** Test Cases ***\nT\n    Log    a\n    Log    b\n";
    let mut controller = FileController::new(parse(text));
    controller
        .execute(&ExtractKeyword {
            item: ItemRef::Test(0),
            name: "Both".to_string(),
            args: Vec::new(),
            rows: (0, 1),
        })
        .unwrap();
    let extracted = write(controller.file());
    assert!(extracted.contains("*** Keywords ***\nBoth\n    Log    a\n    Log    b\n"));

    controller.undo().unwrap();
    assert_eq!(write(controller.file()), text);
    let event = controller.redo().unwrap().unwrap();
    assert_eq!(event.command, "extract keyword");
    assert_eq!(write(controller.file()), extracted);
}

#[test]
fn test_move_rows_in_loop_keeps_structure() {
    let text = "\
*** Test Cases ***
T
    FOR    ${i}    IN    a    b
        Log    one
        Log    two
    END
";
    let mut controller = FileController::new(parse(text));
    controller
        .execute(&MoveRowsDown {
            item: ItemRef::Test(0),
            rows: vec![1],
        })
        .unwrap();
    let written = write(controller.file());
    assert!(written.contains("        Log    two\n        Log    one\n    END\n"));
}

// ==================== Save tests ====================

#[test]
fn test_save_writes_back_and_clears_dirty() {
    init_tracing();
    let dir = write_tree(&[("suite.robot", fixtures::RENAME)]).unwrap();
    let path = dir.path().join("suite.robot");
    let file = parse_test_case_file(&path, &ReaderOptions::default()).unwrap();
    let mut controller = FileController::new(file);
    controller
        .execute(&RenameKeywordOccurrences::new("Old Name", "New Name"))
        .unwrap();
    assert!(controller.is_dirty());
    controller.save(&WriterConfig::default()).unwrap();
    assert!(!controller.is_dirty());

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(!saved.contains("Old Name"));
    assert_eq!(saved.matches("New Name").count(), 3);
}

// ==================== Property tests ====================

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn body_text(rows: &[Vec<String>]) -> String {
    let mut text = String::from("*** Test Cases ***\nGenerated\n");
    for cells in rows {
        text.push_str("    ");
        text.push_str(&cells.join("    "));
        text.push('\n');
    }
    text
}

fn selection(count: usize, mask: &[bool]) -> Vec<usize> {
    let mut rows: Vec<usize> = (0..count).filter(|i| mask[i % mask.len()]).collect();
    if rows.is_empty() {
        rows.push(0);
    }
    rows
}

proptest! {
    #[test]
    fn test_comment_then_uncomment_is_identity(
        rows in prop::collection::vec(prop::collection::vec(word(), 1..5), 1..8),
        mask in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let original = parse(&body_text(&rows));
        let mut controller = FileController::new(original.clone());
        let selected = selection(rows.len(), &mask);
        controller
            .execute(&CommentRows { item: ItemRef::Test(0), rows: selected.clone() })
            .unwrap();
        controller
            .execute(&UncommentRows { item: ItemRef::Test(0), rows: selected })
            .unwrap();
        prop_assert_eq!(controller.file(), &original);
    }

    #[test]
    fn test_delete_rows_then_undo_is_identity(
        rows in prop::collection::vec(prop::collection::vec(word(), 1..5), 1..8),
        mask in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let original = parse(&body_text(&rows));
        let mut controller = FileController::new(original.clone());
        controller
            .execute(&DeleteRows { item: ItemRef::Test(0), rows: selection(rows.len(), &mask) })
            .unwrap();
        controller.undo().unwrap();
        prop_assert_eq!(controller.file(), &original);
        prop_assert_eq!(write(controller.file()), write(&original));
    }

    #[test]
    fn test_rename_moves_every_occurrence(new_name in "[A-Z][a-z]{2,8}( [A-Z][a-z]{2,8})?") {
        prop_assume!(normalize_keyword_name(&new_name) != "oldname");
        let mut controller = FileController::new(parse(fixtures::RENAME));
        let before = controller.find_occurrences("Old Name").count();
        controller
            .execute(&RenameKeywordOccurrences::new("Old Name", new_name.clone()))
            .unwrap();
        prop_assert!(controller.find_occurrences(&new_name).count() >= before);
        prop_assert_eq!(controller.find_occurrences("Old Name").count(), 0);
    }
}
