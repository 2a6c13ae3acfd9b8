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

//! Editing commands for Robot Framework test data
//!
//! Every change to a parsed file goes through a [`Command`]. A command
//! applies completely or not at all and returns its inverse, which the
//! [`FileController`] keeps for undo. After each command the controller
//! publishes a single [`ChangeEvent`] naming the touched parts of the file.
//!
//! ## Quick Start
//!
//! ```rust
//! use rfdata_core::{parse_test_case_str, ReaderOptions};
//! use rfdata_edit::{FileController, Location, RenameKeywordOccurrences};
//!
//! let text = "\
//! *** Test Cases ***
//! Example
//!     Old Name
//!
//! *** Keywords ***
//! Old Name
//!     No Operation
//! ";
//! let file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
//! let mut controller = FileController::new(file);
//!
//! let event = controller
//!     .execute(&RenameKeywordOccurrences::new("Old Name", "New Name"))
//!     .unwrap();
//! assert_eq!(event.changes.len(), 2);
//! assert!(!event.touches(Location::Settings));
//! assert_eq!(controller.find_occurrences("New Name").count(), 2);
//!
//! controller.undo().unwrap();
//! assert_eq!(controller.find_occurrences("Old Name").count(), 2);
//! ```

mod command;
mod controller;
mod event;
mod extract;
mod occurrences;
mod rename;
mod target;

pub use command::{
    ChangeCellValue, Command, CommentRows, DeleteCells, DeleteRows, Executed, InsertCells,
    InsertRows, MoveRowsDown, MoveRowsUp, RestoreBody, RestoreTables, UncommentRows,
    COMMENT_MARKER,
};
pub use controller::{FileController, MAX_UNDO_STACK};
pub use event::{ChangeEvent, ChangeOrigin, Subscriber};
pub use extract::{AddKeywordFromCells, ExtractKeyword, ExtractList, ExtractScalar};
pub use occurrences::{
    find_occurrences, keyword_positions, KeywordMatcher, Occurrence, Occurrences, Usage,
};
pub use rename::RenameKeywordOccurrences;
pub use target::{item, item_mut, CellRef, ItemRef, Location};
