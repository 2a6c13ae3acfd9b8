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

//! Setting entities shared by setting tables, test cases and keywords.

use crate::language::SettingKey;
use crate::lex::tokens::CONTINUATION;

/// Name, comment, position and population state common to every setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingInfo {
    pub key: SettingKey,
    /// Name as written, `[Tags]` style for test and keyword settings.
    pub name: String,
    pub comment: Vec<String>,
    pub line: Option<usize>,
    populated: bool,
}

impl SettingInfo {
    /// Table-level setting with its English name.
    pub fn new(key: SettingKey) -> Self {
        Self {
            key,
            name: key.english().to_string(),
            comment: Vec::new(),
            line: None,
            populated: false,
        }
    }

    /// Bracketed test or keyword setting with its English name.
    pub fn bracketed(key: SettingKey) -> Self {
        Self {
            name: format!("[{}]", key.english()),
            ..Self::new(key)
        }
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Whether the stored name is the English default for its key.
    pub fn has_default_name(&self) -> bool {
        let english = self.key.english();
        self.name == english || self.name == format!("[{}]", english)
    }
}

/// Whether a populate call set the value or was a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulateOutcome {
    First,
    Duplicate,
}

/// Common behaviour of setting entities.
pub trait Setting {
    fn info(&self) -> &SettingInfo;
    fn info_mut(&mut self) -> &mut SettingInfo;

    /// Whether the setting has a value to write.
    fn is_set(&self) -> bool;

    /// Value cells, without name or comment.
    fn value_cells(&self) -> Vec<String>;

    /// Replace the value from raw cells. An empty list unsets the value.
    fn set_value(&mut self, value: Vec<String>);

    /// Store a parsed value. Unlike [`Setting::set_value`], an empty list
    /// still marks the setting as present.
    fn populate_value(&mut self, value: Vec<String>) {
        self.set_value(value);
    }

    fn line(&self) -> Option<usize> {
        self.info().line
    }

    fn key(&self) -> SettingKey {
        self.info().key
    }

    fn setting_name(&self) -> &str {
        &self.info().name
    }

    /// Name, value and comment cells as they are written.
    fn as_list(&self) -> Vec<String> {
        let mut cells = vec![self.setting_name().to_string()];
        cells.extend(self.value_cells());
        cells.extend(self.info().comment.iter().cloned());
        cells
    }

    /// Populate from parsed cells.
    ///
    /// A second definition keeps the first value; its cells are kept as a
    /// comment on the first so that nothing written by the user is lost.
    fn populate(
        &mut self,
        name: &str,
        value: Vec<String>,
        comment: Vec<String>,
        line: Option<usize>,
    ) -> PopulateOutcome {
        if self.info().populated {
            let info = self.info_mut();
            info.comment.push(format!("# {}", name));
            info.comment.extend(value);
            info.comment.extend(comment);
            return PopulateOutcome::Duplicate;
        }
        self.populate_value(value);
        let info = self.info_mut();
        info.name = name.to_string();
        info.line = line;
        info.comment = comment;
        info.populated = true;
        PopulateOutcome::First
    }

    /// Clear the value and forget it was ever populated.
    fn reset(&mut self) {
        self.set_value(Vec::new());
        let info = self.info_mut();
        info.comment.clear();
        info.line = None;
        info.populated = false;
    }
}

/// Joiner between documentation rows, based on how the previous fragment
/// ends: no escape (or an escaped backslash) gives a literal `\n`, a single
/// trailing backslash gives a space, and a trailing `\n` needs no joiner.
pub fn doc_row_joiner(previous: &str) -> Option<&'static str> {
    let without_n = previous.strip_suffix('n');
    let base = without_n.unwrap_or(previous);
    let backslashes = base.chars().rev().take_while(|&c| c == '\\').count();
    if backslashes == 0 || backslashes % 2 == 0 {
        Some("\\n")
    } else if without_n.is_none() {
        Some(" ")
    } else {
        None
    }
}

/// Accumulates documentation fragments row by row.
#[derive(Debug, Clone, Default)]
pub struct DocBuilder {
    fragments: Vec<String>,
}

impl DocBuilder {
    pub fn add(&mut self, cells: &[String]) {
        let fragment = cells.join(" ");
        let empty = self.fragments.is_empty()
            || (self.fragments.len() == 1 && self.fragments[0].is_empty());
        if !empty {
            if let Some(joiner) = self.fragments.last().and_then(|l| doc_row_joiner(l)) {
                self.fragments.push(joiner.to_string());
            }
        }
        self.fragments.push(fragment);
    }

    pub fn value(&self) -> String {
        self.fragments.concat()
    }
}

/// `Documentation` / `[Documentation]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documentation {
    pub info: SettingInfo,
    pub value: String,
}

impl Documentation {
    pub fn new(info: SettingInfo) -> Self {
        Self {
            info,
            value: String::new(),
        }
    }
}

impl Setting for Documentation {
    fn info(&self) -> &SettingInfo {
        &self.info
    }
    fn info_mut(&mut self) -> &mut SettingInfo {
        &mut self.info
    }
    fn is_set(&self) -> bool {
        self.info.populated || !self.value.is_empty()
    }
    fn value_cells(&self) -> Vec<String> {
        if self.value.is_empty() {
            Vec::new()
        } else {
            vec![self.value.clone()]
        }
    }
    fn set_value(&mut self, value: Vec<String>) {
        self.value = value.join(" ");
    }
    /// Repeated documentation is appended instead of reported.
    fn populate(
        &mut self,
        name: &str,
        value: Vec<String>,
        comment: Vec<String>,
        line: Option<usize>,
    ) -> PopulateOutcome {
        let addition = value.join(" ");
        if self.info.populated {
            if !addition.is_empty() {
                if !self.value.is_empty() {
                    self.value.push(' ');
                }
                self.value.push_str(&addition);
            }
            self.info.comment.extend(comment);
            return PopulateOutcome::First;
        }
        self.value = addition;
        self.info.name = name.to_string();
        self.info.comment = comment;
        self.info.line = line;
        self.info.populated = true;
        PopulateOutcome::First
    }
}

/// Setup and teardown: a keyword name followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub info: SettingInfo,
    pub name: Option<String>,
    pub args: Vec<String>,
}

impl Fixture {
    pub fn new(info: SettingInfo) -> Self {
        Self {
            info,
            name: None,
            args: Vec::new(),
        }
    }

    /// A fixture that runs a keyword (`NONE` disables it explicitly).
    pub fn is_active(&self) -> bool {
        self.name
            .as_deref()
            .map_or(false, |n| !n.is_empty() && !n.eq_ignore_ascii_case("NONE"))
    }
}

impl Setting for Fixture {
    fn info(&self) -> &SettingInfo {
        &self.info
    }
    fn info_mut(&mut self) -> &mut SettingInfo {
        &mut self.info
    }
    fn is_set(&self) -> bool {
        self.name.is_some()
    }
    fn value_cells(&self) -> Vec<String> {
        let mut cells: Vec<String> = self.name.iter().cloned().collect();
        cells.extend(self.args.iter().cloned());
        cells
    }
    fn set_value(&mut self, value: Vec<String>) {
        let mut cells = value.into_iter();
        self.name = cells.next();
        self.args = cells.collect();
    }
    fn populate_value(&mut self, value: Vec<String>) {
        let mut cells = value.into_iter();
        self.name = Some(cells.next().unwrap_or_default());
        self.args = cells.collect();
    }
}

/// `Test Timeout` / `[Timeout]`, with the deprecated custom message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeout {
    pub info: SettingInfo,
    pub value: Option<String>,
    pub message: String,
}

impl Timeout {
    pub fn new(info: SettingInfo) -> Self {
        Self {
            info,
            value: None,
            message: String::new(),
        }
    }
}

impl Setting for Timeout {
    fn info(&self) -> &SettingInfo {
        &self.info
    }
    fn info_mut(&mut self) -> &mut SettingInfo {
        &mut self.info
    }
    fn is_set(&self) -> bool {
        self.value.is_some()
    }
    fn value_cells(&self) -> Vec<String> {
        let mut cells: Vec<String> = self.value.iter().cloned().collect();
        if !self.message.is_empty() {
            cells.push(self.message.clone());
        }
        cells
    }
    fn set_value(&mut self, value: Vec<String>) {
        self.value = value.first().cloned();
        self.message = value.get(1..).map(|m| m.join(" ")).unwrap_or_default();
    }
    fn populate_value(&mut self, value: Vec<String>) {
        self.value = Some(value.first().cloned().unwrap_or_default());
        self.message = value.get(1..).map(|m| m.join(" ")).unwrap_or_default();
    }
}

/// Tag lists. `None` means not set; `Some([])` is an explicit empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tags {
    pub info: SettingInfo,
    pub value: Option<Vec<String>>,
}

impl Tags {
    pub fn new(info: SettingInfo) -> Self {
        Self { info, value: None }
    }
}

impl Setting for Tags {
    fn info(&self) -> &SettingInfo {
        &self.info
    }
    fn info_mut(&mut self) -> &mut SettingInfo {
        &mut self.info
    }
    fn is_set(&self) -> bool {
        self.value.is_some()
    }
    fn value_cells(&self) -> Vec<String> {
        self.value.clone().unwrap_or_default()
    }
    fn set_value(&mut self, value: Vec<String>) {
        self.value = if value.is_empty() { None } else { Some(value) };
    }
    fn populate_value(&mut self, value: Vec<String>) {
        self.value = Some(value);
    }
}

/// Single string value: templates and the suite `Name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSetting {
    pub info: SettingInfo,
    pub value: Option<String>,
}

impl StringSetting {
    pub fn new(info: SettingInfo) -> Self {
        Self { info, value: None }
    }

    /// `NONE` explicitly disables an inherited template.
    pub fn is_disabled(&self) -> bool {
        self.value
            .as_deref()
            .map_or(false, |v| v.eq_ignore_ascii_case("NONE"))
    }

    /// Set value that is not the `NONE` marker.
    pub fn active_value(&self) -> Option<&str> {
        match self.value.as_deref() {
            Some(v) if !v.is_empty() && !v.eq_ignore_ascii_case("NONE") => Some(v),
            _ => None,
        }
    }
}

impl Setting for StringSetting {
    fn info(&self) -> &SettingInfo {
        &self.info
    }
    fn info_mut(&mut self) -> &mut SettingInfo {
        &mut self.info
    }
    fn is_set(&self) -> bool {
        self.value.is_some()
    }
    fn value_cells(&self) -> Vec<String> {
        match self.value.as_deref() {
            Some(v) if !v.is_empty() => vec![v.to_string()],
            _ => Vec::new(),
        }
    }
    fn set_value(&mut self, value: Vec<String>) {
        self.value = if value.is_empty() {
            None
        } else {
            Some(value.join(" "))
        };
    }
    fn populate_value(&mut self, value: Vec<String>) {
        self.value = Some(value.join(" "));
    }
}

/// `[Arguments]` and `[Return]`: a plain list of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSetting {
    pub info: SettingInfo,
    pub value: Vec<String>,
}

impl ListSetting {
    pub fn new(info: SettingInfo) -> Self {
        Self {
            info,
            value: Vec::new(),
        }
    }
}

impl Setting for ListSetting {
    fn info(&self) -> &SettingInfo {
        &self.info
    }
    fn info_mut(&mut self) -> &mut SettingInfo {
        &mut self.info
    }
    fn is_set(&self) -> bool {
        self.info.populated || !self.value.is_empty()
    }
    fn value_cells(&self) -> Vec<String> {
        self.value.clone()
    }
    fn set_value(&mut self, value: Vec<String>) {
        self.value = value;
    }
}

/// `Metadata    Name    Value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub info: SettingInfo,
    pub name: String,
    pub value: String,
}

impl Metadata {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            info: SettingInfo::new(SettingKey::Metadata),
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Setting for Metadata {
    fn info(&self) -> &SettingInfo {
        &self.info
    }
    fn info_mut(&mut self) -> &mut SettingInfo {
        &mut self.info
    }
    fn is_set(&self) -> bool {
        true
    }
    fn value_cells(&self) -> Vec<String> {
        let mut cells = vec![self.name.clone()];
        if !self.value.is_empty() {
            cells.push(self.value.clone());
        }
        cells
    }
    fn set_value(&mut self, value: Vec<String>) {
        let mut cells = value.into_iter();
        self.name = cells.next().unwrap_or_default();
        self.value = cells.collect::<Vec<_>>().join(" ");
    }
}

/// Kind of an import setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    Library,
    Resource,
    Variables,
}

impl ImportKind {
    pub fn key(&self) -> SettingKey {
        match self {
            Self::Library => SettingKey::Library,
            Self::Resource => SettingKey::Resource,
            Self::Variables => SettingKey::Variables,
        }
    }
}

/// `Library`, `Resource` or `Variables` import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub info: SettingInfo,
    pub kind: ImportKind,
    pub name: String,
    pub args: Vec<String>,
    pub alias: Option<String>,
    /// `AS` or `WITH NAME`, as written.
    pub alias_marker: Option<String>,
}

impl Import {
    pub fn new(kind: ImportKind, name: impl Into<String>) -> Self {
        Self {
            info: SettingInfo::new(kind.key()),
            kind,
            name: name.into(),
            args: Vec::new(),
            alias: None,
            alias_marker: None,
        }
    }

    /// Name the library is registered under.
    pub fn effective_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

fn is_alias_marker(cell: &str) -> bool {
    cell == "AS" || cell.split_whitespace().collect::<String>().to_uppercase() == "WITHNAME"
}

impl Setting for Import {
    fn info(&self) -> &SettingInfo {
        &self.info
    }
    fn info_mut(&mut self) -> &mut SettingInfo {
        &mut self.info
    }
    fn is_set(&self) -> bool {
        true
    }
    fn value_cells(&self) -> Vec<String> {
        let mut cells = vec![self.name.clone()];
        cells.extend(self.args.iter().cloned());
        if let (Some(marker), Some(alias)) = (&self.alias_marker, &self.alias) {
            cells.push(marker.clone());
            cells.push(alias.clone());
        }
        cells
    }
    fn set_value(&mut self, value: Vec<String>) {
        let mut cells = value;
        self.alias = None;
        self.alias_marker = None;
        if self.kind == ImportKind::Library && cells.len() >= 3 {
            let marker_idx = cells.len() - 2;
            if is_alias_marker(&cells[marker_idx]) {
                self.alias = cells.pop();
                self.alias_marker = cells.pop();
            }
        }
        let mut cells = cells.into_iter();
        self.name = cells.next().unwrap_or_default();
        self.args = cells.collect();
    }
}

/// A standalone comment or blank row kept in its table position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentRow {
    pub cells: Vec<String>,
    pub line: Option<usize>,
}

impl CommentRow {
    pub fn new(cells: Vec<String>, line: Option<usize>) -> Self {
        Self { cells, line }
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

/// Whether a row consists of the continuation marker alone.
pub fn is_bare_continuation(cells: &[String]) -> bool {
    let mut non_empty = cells.iter().filter(|c| !c.is_empty());
    non_empty.next().map_or(false, |c| c == CONTINUATION) && non_empty.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|c| c.to_string()).collect()
    }

    // ==================== Documentation joiner tests ====================

    #[test]
    fn test_doc_joiner_plain_newline() {
        assert_eq!(doc_row_joiner("First line"), Some("\\n"));
        assert_eq!(doc_row_joiner("even\\\\"), Some("\\n"));
    }

    #[test]
    fn test_doc_joiner_escaped_end() {
        assert_eq!(doc_row_joiner("continues\\"), Some(" "));
        assert_eq!(doc_row_joiner("explicit\\n"), None);
        assert_eq!(doc_row_joiner("ends with n"), Some("\\n"));
    }

    #[test]
    fn test_doc_builder() {
        let mut doc = DocBuilder::default();
        doc.add(&s(&["First", "line"]));
        doc.add(&s(&["Second line"]));
        assert_eq!(doc.value(), "First line\\nSecond line");
    }

    #[test]
    fn test_doc_builder_empty_first_row() {
        let mut doc = DocBuilder::default();
        doc.add(&[]);
        doc.add(&s(&["text"]));
        assert_eq!(doc.value(), "text");
    }

    #[test]
    fn test_doc_builder_blank_line_inside() {
        let mut doc = DocBuilder::default();
        doc.add(&s(&["a"]));
        doc.add(&[]);
        doc.add(&s(&["b"]));
        assert_eq!(doc.value(), "a\\n\\nb");
    }

    // ==================== Populate tests ====================

    #[test]
    fn test_fixture_populate() {
        let mut f = Fixture::new(SettingInfo::new(SettingKey::SuiteSetup));
        assert!(!f.is_set());
        let outcome = f.populate("Suite Setup", s(&["Open", "url"]), vec![], Some(3));
        assert_eq!(outcome, PopulateOutcome::First);
        assert_eq!(f.name.as_deref(), Some("Open"));
        assert_eq!(f.args, s(&["url"]));
        assert_eq!(f.line(), Some(3));
        assert_eq!(f.as_list(), s(&["Suite Setup", "Open", "url"]));
    }

    #[test]
    fn test_fixture_without_value_is_still_set() {
        let mut f = Fixture::new(SettingInfo::bracketed(SettingKey::Setup));
        f.populate("[Setup]", vec![], vec![], Some(1));
        assert!(f.is_set());
        assert!(!f.is_active());
        assert_eq!(f.as_list(), s(&["[Setup]", ""]));
    }

    #[test]
    fn test_duplicate_kept_as_comment() {
        let mut f = Fixture::new(SettingInfo::new(SettingKey::SuiteSetup));
        f.populate("Suite Setup", s(&["A"]), vec![], Some(1));
        let outcome = f.populate("Suite Setup", s(&["B", "x"]), vec![], Some(2));
        assert_eq!(outcome, PopulateOutcome::Duplicate);
        assert_eq!(f.name.as_deref(), Some("A"));
        assert_eq!(f.info.comment, s(&["# Suite Setup", "B", "x"]));
    }

    #[test]
    fn test_documentation_repeats_concatenate() {
        let mut d = Documentation::new(SettingInfo::new(SettingKey::Documentation));
        d.populate("Documentation", s(&["one"]), vec![], Some(1));
        d.populate("Documentation", s(&["two"]), vec![], Some(2));
        assert_eq!(d.value, "one two");
        assert_eq!(d.line(), Some(1));
    }

    #[test]
    fn test_timeout_message() {
        let mut t = Timeout::new(SettingInfo::new(SettingKey::TestTimeout));
        t.populate("Test Timeout", s(&["1 min", "custom", "message"]), vec![], None);
        assert_eq!(t.value.as_deref(), Some("1 min"));
        assert_eq!(t.message, "custom message");
        assert_eq!(t.value_cells(), s(&["1 min", "custom message"]));
    }

    #[test]
    fn test_tags_explicit_empty() {
        let mut t = Tags::new(SettingInfo::bracketed(SettingKey::Tags));
        t.populate("[Tags]", vec![], vec![], Some(4));
        assert_eq!(t.value, Some(vec![]));
        assert!(t.is_set());
    }

    #[test]
    fn test_template_none() {
        let mut t = StringSetting::new(SettingInfo::bracketed(SettingKey::Template));
        t.populate("[Template]", s(&["NONE"]), vec![], None);
        assert!(t.is_disabled());
        assert_eq!(t.active_value(), None);
    }

    #[test]
    fn test_library_alias_markers() {
        let mut lib = Import::new(ImportKind::Library, "");
        lib.set_value(s(&["Remote", "http://x", "WITH NAME", "R"]));
        assert_eq!(lib.name, "Remote");
        assert_eq!(lib.args, s(&["http://x"]));
        assert_eq!(lib.alias.as_deref(), Some("R"));
        assert_eq!(lib.alias_marker.as_deref(), Some("WITH NAME"));
        assert_eq!(lib.effective_name(), "R");

        lib.set_value(s(&["OS", "AS", "Sys"]));
        assert_eq!(lib.alias_marker.as_deref(), Some("AS"));
        assert_eq!(lib.value_cells(), s(&["OS", "AS", "Sys"]));

        // Lowercase `as` is an ordinary argument.
        lib.set_value(s(&["OS", "as", "Sys"]));
        assert!(lib.alias.is_none());
    }

    #[test]
    fn test_metadata_cells() {
        let mut m = Metadata::new("", "");
        m.set_value(s(&["Version", "1.0", "beta"]));
        assert_eq!(m.name, "Version");
        assert_eq!(m.value, "1.0 beta");
        assert_eq!(m.as_list(), s(&["Metadata", "Version", "1.0 beta"]));
    }

    #[test]
    fn test_default_names() {
        let info = SettingInfo::bracketed(SettingKey::Tags);
        assert_eq!(info.name, "[Tags]");
        assert!(info.has_default_name());
        let mut info = SettingInfo::new(SettingKey::Documentation);
        info.name = "Dokumentaatio".into();
        assert!(!info.has_default_name());
    }

    #[test]
    fn test_bare_continuation() {
        assert!(is_bare_continuation(&s(&["", "..."])));
        assert!(!is_bare_continuation(&s(&["...", "x"])));
    }
}
