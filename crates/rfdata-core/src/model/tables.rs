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

//! The five data tables of a file or directory.

use super::items::{StepContainer, TestCase, UserKeyword};
use super::settings::{
    CommentRow, Documentation, Fixture, Import, Metadata, Setting, SettingInfo, StringSetting,
    Tags, Timeout,
};
use super::variable::Variable;
use crate::language::{SectionKind, SettingKey};

/// Swap `items[index]` with its upper neighbour. `false` at the top or out of
/// range.
fn move_up<T>(items: &mut [T], index: usize) -> bool {
    if index == 0 || index >= items.len() {
        return false;
    }
    items.swap(index - 1, index);
    true
}

fn move_down<T>(items: &mut [T], index: usize) -> bool {
    if index + 1 >= items.len() {
        return false;
    }
    items.swap(index, index + 1);
    true
}

fn remove<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    (index < items.len()).then(|| items.remove(index))
}

/// Section header as read: name, extra column cells and source line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableHeader {
    /// Header name as written, or `None` for a table created in code.
    pub name: Option<String>,
    /// Cells after the name, used for column alignment.
    pub columns: Vec<String>,
    pub line: Option<usize>,
    /// Lines of later headers merged into this table.
    pub duplicate_lines: Vec<usize>,
}

impl TableHeader {
    pub fn is_started(&self) -> bool {
        self.name.is_some()
    }

    /// Whether the header asks for aligned columns.
    pub fn has_columns(&self) -> bool {
        !self.columns.is_empty()
    }

    /// Record a header row; later ones are kept as duplicates.
    pub fn start(&mut self, name: &str, columns: Vec<String>, line: usize) -> bool {
        if self.is_started() {
            self.duplicate_lines.push(line);
            return false;
        }
        self.name = Some(name.to_string());
        self.columns = columns;
        self.line = Some(line);
        true
    }
}

/// Which file kind owns a setting table; controls the allowed settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingTableKind {
    #[default]
    TestCaseFile,
    InitFile,
    ResourceFile,
}

impl SettingTableKind {
    /// Whether `key` may be used in this kind of file.
    pub fn allows(&self, key: SettingKey) -> bool {
        match self {
            Self::TestCaseFile => true,
            Self::InitFile => !matches!(
                key,
                SettingKey::DefaultTags | SettingKey::TestTemplate | SettingKey::TaskTemplate
            ),
            Self::ResourceFile => matches!(
                key,
                SettingKey::Documentation
                    | SettingKey::Library
                    | SettingKey::Resource
                    | SettingKey::Variables
                    | SettingKey::KeywordTags
            ),
        }
    }

    /// File description used in rejection messages.
    pub fn description(&self) -> &'static str {
        match self {
            Self::TestCaseFile => "test case file",
            Self::InitFile => "suite initialization file",
            Self::ResourceFile => "resource file",
        }
    }
}

/// `*** Settings ***`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingTable {
    pub header: TableHeader,
    pub kind: SettingTableKind,
    pub doc: Documentation,
    pub suite_name: StringSetting,
    pub suite_setup: Fixture,
    pub suite_teardown: Fixture,
    pub test_setup: Fixture,
    pub test_teardown: Fixture,
    pub test_template: StringSetting,
    pub test_timeout: Timeout,
    pub test_tags: Tags,
    pub default_tags: Tags,
    pub keyword_tags: Tags,
    pub metadata: Vec<Metadata>,
    pub imports: Vec<Import>,
    /// Blank and comment rows between settings.
    pub comment_rows: Vec<CommentRow>,
}

impl SettingTable {
    pub fn new(kind: SettingTableKind) -> Self {
        Self {
            header: TableHeader::default(),
            kind,
            doc: Documentation::new(SettingInfo::new(SettingKey::Documentation)),
            suite_name: StringSetting::new(SettingInfo::new(SettingKey::Name)),
            suite_setup: Fixture::new(SettingInfo::new(SettingKey::SuiteSetup)),
            suite_teardown: Fixture::new(SettingInfo::new(SettingKey::SuiteTeardown)),
            test_setup: Fixture::new(SettingInfo::new(SettingKey::TestSetup)),
            test_teardown: Fixture::new(SettingInfo::new(SettingKey::TestTeardown)),
            test_template: StringSetting::new(SettingInfo::new(SettingKey::TestTemplate)),
            test_timeout: Timeout::new(SettingInfo::new(SettingKey::TestTimeout)),
            test_tags: Tags::new(SettingInfo::new(SettingKey::TestTags)),
            default_tags: Tags::new(SettingInfo::new(SettingKey::DefaultTags)),
            keyword_tags: Tags::new(SettingInfo::new(SettingKey::KeywordTags)),
            metadata: Vec::new(),
            imports: Vec::new(),
            comment_rows: Vec::new(),
        }
    }

    /// Singleton slot for a setting key. Test and task spellings share one
    /// slot, as do `Force Tags`, `Test Tags` and `Task Tags`.
    pub fn slot_mut(&mut self, key: SettingKey) -> Option<&mut dyn Setting> {
        let slot: &mut dyn Setting = match key {
            SettingKey::Documentation => &mut self.doc,
            SettingKey::Name => &mut self.suite_name,
            SettingKey::SuiteSetup => &mut self.suite_setup,
            SettingKey::SuiteTeardown => &mut self.suite_teardown,
            SettingKey::TestSetup | SettingKey::TaskSetup => &mut self.test_setup,
            SettingKey::TestTeardown | SettingKey::TaskTeardown => &mut self.test_teardown,
            SettingKey::TestTemplate | SettingKey::TaskTemplate => &mut self.test_template,
            SettingKey::TestTimeout | SettingKey::TaskTimeout => &mut self.test_timeout,
            SettingKey::TestTags | SettingKey::TaskTags | SettingKey::ForceTags => {
                &mut self.test_tags
            }
            SettingKey::DefaultTags => &mut self.default_tags,
            SettingKey::KeywordTags => &mut self.keyword_tags,
            _ => return None,
        };
        Some(slot)
    }

    /// Singleton settings in canonical order.
    pub fn singletons(&self) -> Vec<&dyn Setting> {
        vec![
            &self.suite_name,
            &self.doc,
            &self.suite_setup,
            &self.suite_teardown,
            &self.test_setup,
            &self.test_teardown,
            &self.test_template,
            &self.test_timeout,
            &self.test_tags,
            &self.default_tags,
            &self.keyword_tags,
        ]
    }

    /// Every setting in canonical order: singletons, metadata, imports.
    pub fn settings(&self) -> Vec<&dyn Setting> {
        let mut settings = self.singletons();
        settings.extend(self.metadata.iter().map(|m| m as &dyn Setting));
        settings.extend(self.imports.iter().map(|i| i as &dyn Setting));
        settings
    }

    pub fn fixtures_mut(&mut self) -> Vec<&mut Fixture> {
        vec![
            &mut self.suite_setup,
            &mut self.suite_teardown,
            &mut self.test_setup,
            &mut self.test_teardown,
        ]
    }

    pub fn fixtures(&self) -> Vec<&Fixture> {
        vec![
            &self.suite_setup,
            &self.suite_teardown,
            &self.test_setup,
            &self.test_teardown,
        ]
    }

    pub fn has_content(&self) -> bool {
        self.settings().iter().any(|s| s.is_set()) || !self.comment_rows.is_empty()
    }

    pub fn move_import_up(&mut self, index: usize) -> bool {
        move_up(&mut self.imports, index)
    }

    pub fn move_import_down(&mut self, index: usize) -> bool {
        move_down(&mut self.imports, index)
    }

    pub fn delete_import(&mut self, index: usize) -> Option<Import> {
        remove(&mut self.imports, index)
    }

    pub fn delete_metadata(&mut self, index: usize) -> Option<Metadata> {
        remove(&mut self.metadata, index)
    }
}

/// `*** Variables ***`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariableTable {
    pub header: TableHeader,
    pub variables: Vec<Variable>,
}

impl VariableTable {
    pub fn has_content(&self) -> bool {
        !self.variables.is_empty()
    }

    /// Variables with a name, skipping layout rows.
    pub fn defined(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter().filter(|v| v.has_data())
    }

    /// Append a variable built from a name cell and its values.
    pub fn add(&mut self, name: &str, value: Vec<String>, comment: Vec<String>) -> &mut Variable {
        self.variables.push(Variable::new(name, value, comment, None));
        let last = self.variables.len() - 1;
        &mut self.variables[last]
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        move_up(&mut self.variables, index)
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        move_down(&mut self.variables, index)
    }

    pub fn delete(&mut self, index: usize) -> Option<Variable> {
        remove(&mut self.variables, index)
    }
}

/// `*** Test Cases ***` or `*** Tasks ***`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestCaseTable {
    pub header: TableHeader,
    pub tasks: bool,
    /// Blank and comment rows before the first test.
    pub leading_rows: Vec<CommentRow>,
    pub tests: Vec<TestCase>,
}

impl TestCaseTable {
    pub fn section_kind(&self) -> SectionKind {
        if self.tasks {
            SectionKind::Tasks
        } else {
            SectionKind::TestCases
        }
    }

    pub fn has_content(&self) -> bool {
        !self.tests.is_empty() || !self.leading_rows.is_empty()
    }

    /// Append a new test or task matching the table mode.
    pub fn add(&mut self, name: &str, line: Option<usize>) -> &mut TestCase {
        let test = if self.tasks {
            TestCase::task(name, line)
        } else {
            TestCase::new(name, line)
        };
        self.tests.push(test);
        let last = self.tests.len() - 1;
        &mut self.tests[last]
    }

    pub fn find(&self, name: &str) -> Option<&TestCase> {
        self.tests.iter().find(|t| t.name() == name)
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        move_up(&mut self.tests, index)
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        move_down(&mut self.tests, index)
    }

    pub fn delete(&mut self, index: usize) -> Option<TestCase> {
        remove(&mut self.tests, index)
    }

    /// Append a copy of the test at `index` under a new name.
    pub fn copy(&mut self, index: usize, name: &str) -> Option<&mut TestCase> {
        let mut copy = self.tests.get(index)?.clone();
        copy.set_name(name.to_string());
        copy.line = None;
        self.tests.push(copy);
        self.tests.last_mut()
    }
}

/// `*** Keywords ***`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordTable {
    pub header: TableHeader,
    pub leading_rows: Vec<CommentRow>,
    pub keywords: Vec<UserKeyword>,
}

impl KeywordTable {
    pub fn has_content(&self) -> bool {
        !self.keywords.is_empty() || !self.leading_rows.is_empty()
    }

    pub fn add(&mut self, name: &str, line: Option<usize>) -> &mut UserKeyword {
        self.keywords.push(UserKeyword::new(name, line));
        let last = self.keywords.len() - 1;
        &mut self.keywords[last]
    }

    pub fn find(&self, name: &str) -> Option<&UserKeyword> {
        self.keywords.iter().find(|k| k.name() == name)
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        move_up(&mut self.keywords, index)
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        move_down(&mut self.keywords, index)
    }

    pub fn delete(&mut self, index: usize) -> Option<UserKeyword> {
        remove(&mut self.keywords, index)
    }

    /// Append a copy of the keyword at `index` under a new name.
    pub fn copy(&mut self, index: usize, name: &str) -> Option<&mut UserKeyword> {
        let mut copy = self.keywords.get(index)?.clone();
        copy.set_name(name.to_string());
        copy.line = None;
        self.keywords.push(copy);
        self.keywords.last_mut()
    }
}

/// One `*** Comments ***` section, stored as raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    /// Header line as written.
    pub header: String,
    pub line: usize,
    pub rows: Vec<String>,
}

/// All comment sections of a file, each kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentsTable {
    pub blocks: Vec<CommentBlock>,
}

impl CommentsTable {
    pub fn has_content(&self) -> bool {
        !self.blocks.is_empty()
    }
}

/// The tables of one data file or directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTables {
    pub settings: SettingTable,
    pub variables: VariableTable,
    pub tests: TestCaseTable,
    pub keywords: KeywordTable,
    pub comments: CommentsTable,
}

impl DataTables {
    pub fn new(kind: SettingTableKind) -> Self {
        Self {
            settings: SettingTable::new(kind),
            variables: VariableTable::default(),
            tests: TestCaseTable::default(),
            keywords: KeywordTable::default(),
            comments: CommentsTable::default(),
        }
    }

    pub fn has_tests(&self) -> bool {
        !self.tests.tests.is_empty()
    }
}
