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

//! Data model built by the populators.
//!
//! Files own their [`DataTables`]; tables own their rows. Nothing holds a
//! back-reference to its parent: source paths travel with [`FileData`] and
//! diagnostics carry the path they belong to.

pub mod body;
pub mod files;
pub mod items;
pub mod settings;
pub mod tables;
pub mod variable;

pub use body::{body_lines, body_rows, carried_lines, BodyItem, EndRow, ForFlavor, ForLoop, Step};
pub use files::{
    suite_name, DataFile, FileData, FileKind, ResourceFile, Suite, SuiteMode, TestCaseFile,
    TestDataDirectory,
};
pub use items::{StepContainer, TestCase, UserKeyword};
pub use settings::{
    doc_row_joiner, CommentRow, DocBuilder, Documentation, Fixture, Import, ImportKind,
    ListSetting, Metadata, PopulateOutcome, Setting, SettingInfo, StringSetting, Tags, Timeout,
};
pub use tables::{
    CommentBlock, CommentsTable, DataTables, KeywordTable, SettingTable, SettingTableKind,
    TableHeader, TestCaseTable, VariableTable,
};
pub use variable::Variable;
