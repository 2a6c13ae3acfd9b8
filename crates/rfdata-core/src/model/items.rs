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

//! Test cases, tasks and user keywords.

use super::body::{body_rows, carried_lines, BodyItem};
use super::settings::{
    Documentation, Fixture, ListSetting, PopulateOutcome, Setting, SettingInfo, StringSetting,
    Tags, Timeout,
};
use crate::language::SettingKey;
use crate::lex::row::DataRow;
use crate::populators::body::BodyBuilder;

/// Shared behaviour of test cases and user keywords.
pub trait StepContainer {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
    fn line(&self) -> Option<usize>;
    /// Comment cells written on the name row.
    fn name_comment(&self) -> &[String];
    fn set_name_comment(&mut self, comment: Vec<String>);
    fn body(&self) -> &[BodyItem];
    fn body_mut(&mut self) -> &mut Vec<BodyItem>;
    /// `"test case"`, `"task"` or `"keyword"`, for messages.
    fn kind_name(&self) -> &'static str;

    /// Settings written before the body when they have no source line.
    fn leading_settings(&self) -> Vec<&dyn Setting>;
    /// Settings written after the body when they have no source line.
    fn trailing_settings(&self) -> Vec<&dyn Setting>;

    fn fixtures_mut(&mut self) -> Vec<&mut Fixture>;
    fn fixtures(&self) -> Vec<&Fixture>;
    fn template(&self) -> Option<&StringSetting> {
        None
    }
    fn template_mut(&mut self) -> Option<&mut StringSetting> {
        None
    }

    /// Store a parsed bracketed setting. `Err` carries the rejection message.
    fn populate_setting(
        &mut self,
        key: SettingKey,
        name: &str,
        value: Vec<String>,
        comment: Vec<String>,
        line: Option<usize>,
    ) -> Result<PopulateOutcome, String>;

    /// All settings in canonical order.
    fn settings(&self) -> Vec<&dyn Setting> {
        let mut settings = self.leading_settings();
        settings.extend(self.trailing_settings());
        settings
    }

    /// Whether the body has anything besides blank rows.
    fn has_steps(&self) -> bool {
        self.body().iter().any(|item| match item {
            BodyItem::ForLoop(_) => true,
            BodyItem::Step(step) => !step.is_empty(),
        })
    }

    /// Flattened body rows, relative to the item level.
    fn body_rows(&self) -> Vec<Vec<String>> {
        body_rows(self.body())
    }

    /// Replace the body from rows. Unchanged rows keep their source lines
    /// so settings between them stay in place when written.
    fn set_body_rows(&mut self, rows: Vec<Vec<String>>) {
        let lines = carried_lines(self.body(), &rows);
        let mut builder = BodyBuilder::new();
        for (cells, line) in rows.into_iter().zip(lines) {
            builder.push(DataRow::from_cells(cells, line));
        }
        *self.body_mut() = builder.finish();
    }
}

fn not_allowed(name: &str, kind: &str) -> Result<PopulateOutcome, String> {
    Err(format!("Setting '{}' is not allowed in {}.", name, kind))
}

/// A test case or task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub name_comment: Vec<String>,
    pub line: Option<usize>,
    pub doc: Documentation,
    pub tags: Tags,
    pub setup: Fixture,
    pub template: StringSetting,
    pub timeout: Timeout,
    pub teardown: Fixture,
    pub body: Vec<BodyItem>,
    task: bool,
}

impl TestCase {
    pub fn new(name: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            name: name.into(),
            name_comment: Vec::new(),
            line,
            doc: Documentation::new(SettingInfo::bracketed(SettingKey::Documentation)),
            tags: Tags::new(SettingInfo::bracketed(SettingKey::Tags)),
            setup: Fixture::new(SettingInfo::bracketed(SettingKey::Setup)),
            template: StringSetting::new(SettingInfo::bracketed(SettingKey::Template)),
            timeout: Timeout::new(SettingInfo::bracketed(SettingKey::Timeout)),
            teardown: Fixture::new(SettingInfo::bracketed(SettingKey::Teardown)),
            body: Vec::new(),
            task: false,
        }
    }

    pub fn task(name: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            task: true,
            ..Self::new(name, line)
        }
    }

    pub fn is_task(&self) -> bool {
        self.task
    }
}

impl StepContainer for TestCase {
    fn name(&self) -> &str {
        &self.name
    }
    fn set_name(&mut self, name: String) {
        self.name = name;
    }
    fn line(&self) -> Option<usize> {
        self.line
    }
    fn name_comment(&self) -> &[String] {
        &self.name_comment
    }
    fn set_name_comment(&mut self, comment: Vec<String>) {
        self.name_comment = comment;
    }
    fn body(&self) -> &[BodyItem] {
        &self.body
    }
    fn body_mut(&mut self) -> &mut Vec<BodyItem> {
        &mut self.body
    }
    fn kind_name(&self) -> &'static str {
        if self.task {
            "task"
        } else {
            "test case"
        }
    }
    fn leading_settings(&self) -> Vec<&dyn Setting> {
        vec![
            &self.doc,
            &self.tags,
            &self.setup,
            &self.template,
            &self.timeout,
        ]
    }
    fn trailing_settings(&self) -> Vec<&dyn Setting> {
        vec![&self.teardown]
    }
    fn fixtures(&self) -> Vec<&Fixture> {
        vec![&self.setup, &self.teardown]
    }
    fn fixtures_mut(&mut self) -> Vec<&mut Fixture> {
        vec![&mut self.setup, &mut self.teardown]
    }
    fn template(&self) -> Option<&StringSetting> {
        Some(&self.template)
    }
    fn template_mut(&mut self) -> Option<&mut StringSetting> {
        Some(&mut self.template)
    }
    fn populate_setting(
        &mut self,
        key: SettingKey,
        name: &str,
        value: Vec<String>,
        comment: Vec<String>,
        line: Option<usize>,
    ) -> Result<PopulateOutcome, String> {
        let setting: &mut dyn Setting = match key {
            SettingKey::Documentation => &mut self.doc,
            SettingKey::Tags => &mut self.tags,
            SettingKey::Setup => &mut self.setup,
            SettingKey::Template => &mut self.template,
            SettingKey::Timeout => &mut self.timeout,
            SettingKey::Teardown => &mut self.teardown,
            _ => return not_allowed(name, self.kind_name()),
        };
        Ok(setting.populate(name, value, comment, line))
    }
}

/// A user keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserKeyword {
    pub name: String,
    pub name_comment: Vec<String>,
    pub line: Option<usize>,
    pub args: ListSetting,
    pub doc: Documentation,
    pub tags: Tags,
    pub setup: Fixture,
    pub timeout: Timeout,
    pub teardown: Fixture,
    pub returns: ListSetting,
    pub body: Vec<BodyItem>,
}

impl UserKeyword {
    pub fn new(name: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            name: name.into(),
            name_comment: Vec::new(),
            line,
            args: ListSetting::new(SettingInfo::bracketed(SettingKey::Arguments)),
            doc: Documentation::new(SettingInfo::bracketed(SettingKey::Documentation)),
            tags: Tags::new(SettingInfo::bracketed(SettingKey::Tags)),
            setup: Fixture::new(SettingInfo::bracketed(SettingKey::Setup)),
            timeout: Timeout::new(SettingInfo::bracketed(SettingKey::Timeout)),
            teardown: Fixture::new(SettingInfo::bracketed(SettingKey::Teardown)),
            returns: ListSetting::new(SettingInfo::bracketed(SettingKey::Return)),
            body: Vec::new(),
        }
    }
}

impl StepContainer for UserKeyword {
    fn name(&self) -> &str {
        &self.name
    }
    fn set_name(&mut self, name: String) {
        self.name = name;
    }
    fn line(&self) -> Option<usize> {
        self.line
    }
    fn name_comment(&self) -> &[String] {
        &self.name_comment
    }
    fn set_name_comment(&mut self, comment: Vec<String>) {
        self.name_comment = comment;
    }
    fn body(&self) -> &[BodyItem] {
        &self.body
    }
    fn body_mut(&mut self) -> &mut Vec<BodyItem> {
        &mut self.body
    }
    fn kind_name(&self) -> &'static str {
        "keyword"
    }
    fn leading_settings(&self) -> Vec<&dyn Setting> {
        vec![&self.args, &self.doc, &self.tags, &self.setup, &self.timeout]
    }
    fn trailing_settings(&self) -> Vec<&dyn Setting> {
        vec![&self.teardown, &self.returns]
    }
    fn fixtures(&self) -> Vec<&Fixture> {
        vec![&self.setup, &self.teardown]
    }
    fn fixtures_mut(&mut self) -> Vec<&mut Fixture> {
        vec![&mut self.setup, &mut self.teardown]
    }
    fn populate_setting(
        &mut self,
        key: SettingKey,
        name: &str,
        value: Vec<String>,
        comment: Vec<String>,
        line: Option<usize>,
    ) -> Result<PopulateOutcome, String> {
        let setting: &mut dyn Setting = match key {
            SettingKey::Arguments => &mut self.args,
            SettingKey::Documentation => &mut self.doc,
            SettingKey::Tags => &mut self.tags,
            SettingKey::Setup => &mut self.setup,
            SettingKey::Timeout => &mut self.timeout,
            SettingKey::Teardown => &mut self.teardown,
            SettingKey::Return => &mut self.returns,
            _ => return not_allowed(name, self.kind_name()),
        };
        Ok(setting.populate(name, value, comment, line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::body::Step;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_populate_test_settings() {
        let mut test = TestCase::new("Example", Some(2));
        let outcome = test
            .populate_setting(SettingKey::Tags, "[Tags]", s(&["smoke"]), vec![], Some(3))
            .unwrap();
        assert_eq!(outcome, PopulateOutcome::First);
        assert_eq!(test.tags.value, Some(s(&["smoke"])));
    }

    #[test]
    fn test_keyword_only_settings_rejected_in_tests() {
        let mut test = TestCase::new("Example", None);
        let err = test
            .populate_setting(SettingKey::Arguments, "[Arguments]", s(&["${a}"]), vec![], None)
            .unwrap_err();
        assert_eq!(err, "Setting '[Arguments]' is not allowed in test case.");
        let mut task = TestCase::task("Job", None);
        let err = task
            .populate_setting(SettingKey::Return, "[Return]", vec![], vec![], None)
            .unwrap_err();
        assert!(err.ends_with("in task."));
    }

    #[test]
    fn test_template_rejected_in_keywords() {
        let mut kw = UserKeyword::new("Kw", None);
        assert!(kw
            .populate_setting(SettingKey::Template, "[Template]", s(&["X"]), vec![], None)
            .is_err());
        assert!(kw.template().is_none());
    }

    #[test]
    fn test_canonical_settings_order() {
        let kw = UserKeyword::new("Kw", None);
        let keys: Vec<SettingKey> = kw.settings().iter().map(|s| s.key()).collect();
        assert_eq!(keys.first(), Some(&SettingKey::Arguments));
        assert_eq!(keys.last(), Some(&SettingKey::Return));
        let test = TestCase::new("T", None);
        let keys: Vec<SettingKey> = test.trailing_settings().iter().map(|s| s.key()).collect();
        assert_eq!(keys, vec![SettingKey::Teardown]);
    }

    #[test]
    fn test_set_body_rows_replaced_row_keeps_line() {
        let mut test = TestCase::new("T", Some(1));
        test.body.push(BodyItem::Step(Step::from_cells(s(&["Log", "a"]), vec![], Some(2))));
        test.set_body_rows(vec![s(&["Log", "b"]), s(&["No Operation"])]);
        assert_eq!(test.body.len(), 2);
        assert_eq!(test.body[0].line(), Some(2));
        assert_eq!(test.body[1].line(), None);
        assert_eq!(test.body_rows(), vec![s(&["Log", "b"]), s(&["No Operation"])]);
    }

    #[test]
    fn test_set_body_rows_insert_keeps_existing_lines() {
        let mut test = TestCase::new("T", Some(1));
        test.body.push(BodyItem::Step(Step::from_cells(s(&["A"]), vec![], Some(2))));
        test.body.push(BodyItem::Step(Step::from_cells(s(&["B"]), vec![], Some(4))));
        test.set_body_rows(vec![s(&["New"]), s(&["A"]), s(&["B"])]);
        let lines: Vec<Option<usize>> = test.body.iter().map(|item| item.line()).collect();
        assert_eq!(lines, vec![None, Some(2), Some(4)]);
    }

    #[test]
    fn test_set_body_rows_rebuilds_loops() {
        let mut kw = UserKeyword::new("Kw", None);
        kw.set_body_rows(vec![
            s(&["FOR", "${x}", "IN", "a", "b"]),
            s(&["", "Log", "${x}"]),
            s(&["END"]),
        ]);
        assert_eq!(kw.body.len(), 1);
        match &kw.body[0] {
            BodyItem::ForLoop(lp) => {
                assert_eq!(lp.steps.len(), 1);
                assert!(lp.end.is_some());
            }
            other => panic!("expected loop, got {:?}", other),
        }
        assert!(kw.has_steps());
    }
}
