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

//! Per-section populators.

use super::body::BodyBuilder;
use super::property::{CollectedSetting, PendingSetting, ValueMode};
use super::ParseContext;
use crate::diagnostic::Diagnostic;
use crate::language::SettingKey;
use crate::lex::row::DataRow;
use crate::lex::tokens::{is_valid_variable_table_name, CONTINUATION};
use crate::model::items::{StepContainer, TestCase, UserKeyword};
use crate::model::settings::{
    is_bare_continuation, CommentRow, Import, ImportKind, Metadata, PopulateOutcome, Setting,
};
use crate::model::tables::{KeywordTable, SettingTable, TestCaseTable, VariableTable};
use crate::model::variable::Variable;

fn duplicate_setting(name: &str, line: Option<usize>) -> Diagnostic {
    let diag = Diagnostic::warning(format!(
        "Setting '{}' is allowed only once. Only the first value is used.",
        name
    ));
    match line {
        Some(line) => diag.with_line(line),
        None => diag,
    }
}

fn lone_continuation(line: Option<usize>) -> Diagnostic {
    let diag = Diagnostic::warning(
        "Ignoring lone line continuation marker '...' without anything to continue.",
    );
    match line {
        Some(line) => diag.with_line(line),
        None => diag,
    }
}

fn at(diag: Diagnostic, line: Option<usize>) -> Diagnostic {
    match line {
        Some(line) => diag.with_line(line),
        None => diag,
    }
}

/// Where a settings table row ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingTarget {
    Slot(SettingKey),
    Metadata,
    Import(ImportKind),
}

/// Fills a [`SettingTable`].
#[derive(Debug, Default)]
pub(crate) struct SettingTablePopulator {
    pending: Option<PendingSetting<SettingTarget>>,
}

impl SettingTablePopulator {
    pub fn add(&mut self, row: DataRow, table: &mut SettingTable, ctx: &mut ParseContext) {
        if row.is_continuing() || (row.is_indented() && !row.is_commented()) {
            match self.pending.as_mut() {
                Some(pending) if row.is_continuing() => {
                    if is_bare_continuation(&row.cells) && pending.mode() == ValueMode::Cells {
                        ctx.report(lone_continuation(row.line));
                    } else {
                        pending.extend(row.data(), &row.comments);
                    }
                }
                Some(pending) => {
                    pending.extend(&row.cells[row.indent()..], &row.comments);
                }
                None => {
                    ctx.report(lone_continuation(row.line));
                    table
                        .comment_rows
                        .push(CommentRow::new(row.all_cells(), row.line));
                }
            }
            return;
        }
        self.flush(table, ctx);
        if row.is_empty() || row.is_commented() {
            table
                .comment_rows
                .push(CommentRow::new(row.all_cells(), row.line));
            return;
        }
        let name = row.head().to_string();
        let Some(found) = ctx.languages.table_setting(&name) else {
            ctx.report(at(
                Diagnostic::warning(format!("Non-existing setting '{}'.", name)),
                row.line,
            ));
            return;
        };
        if !table.kind.allows(found.key) {
            ctx.report(at(
                Diagnostic::warning(format!(
                    "Setting '{}' is not allowed in {}.",
                    name,
                    table.kind.description()
                )),
                row.line,
            ));
            return;
        }
        if let Some(suggestion) = found.deprecated {
            ctx.report(at(
                Diagnostic::warning(format!("Setting '{}' is deprecated.", name))
                    .with_suggestion(suggestion),
                row.line,
            ));
        }
        let (target, mode) = match found.key {
            SettingKey::Documentation => (SettingTarget::Slot(found.key), ValueMode::Doc),
            SettingKey::Metadata => (SettingTarget::Metadata, ValueMode::Metadata),
            SettingKey::Library => (SettingTarget::Import(ImportKind::Library), ValueMode::Cells),
            SettingKey::Resource => {
                (SettingTarget::Import(ImportKind::Resource), ValueMode::Cells)
            }
            SettingKey::Variables => {
                (SettingTarget::Import(ImportKind::Variables), ValueMode::Cells)
            }
            key => (SettingTarget::Slot(key), ValueMode::Cells),
        };
        self.pending = Some(PendingSetting::new(
            target,
            &name,
            mode,
            row.tail(),
            &row.comments,
            row.line,
        ));
    }

    pub fn flush(&mut self, table: &mut SettingTable, ctx: &mut ParseContext) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let CollectedSetting {
            target,
            name,
            value,
            comment,
            line,
        } = pending.finish();
        match target {
            SettingTarget::Slot(key) => {
                if let Some(slot) = table.slot_mut(key) {
                    if slot.populate(&name, value, comment, line) == PopulateOutcome::Duplicate {
                        ctx.report(duplicate_setting(&name, line));
                    }
                }
            }
            SettingTarget::Metadata => {
                let mut cells = value.into_iter();
                let Some(meta_name) = cells.next() else {
                    ctx.report(at(
                        Diagnostic::warning("Metadata requires a name."),
                        line,
                    ));
                    return;
                };
                let mut meta = Metadata::new(meta_name, cells.collect::<Vec<_>>().join(" "));
                meta.info.name = name;
                meta.info.comment = comment;
                meta.info.line = line;
                table.metadata.push(meta);
            }
            SettingTarget::Import(kind) => {
                if value.first().map_or(true, |v| v.is_empty()) {
                    ctx.report(at(
                        Diagnostic::warning(format!("Setting '{}' requires a value.", name)),
                        line,
                    ));
                    return;
                }
                let mut import = Import::new(kind, "");
                import.set_value(value);
                import.info.name = name;
                import.info.comment = comment;
                import.info.line = line;
                table.imports.push(import);
            }
        }
    }
}

/// Fills a [`VariableTable`].
#[derive(Debug, Default)]
pub(crate) struct VariableTablePopulator;

impl VariableTablePopulator {
    pub fn add(&mut self, row: DataRow, table: &mut VariableTable, ctx: &mut ParseContext) {
        if row.is_continuing() {
            match table.variables.last_mut().filter(|v| v.has_data()) {
                Some(variable) if !is_bare_continuation(&row.cells) => {
                    variable.extend(row.data(), &row.comments)
                }
                _ => ctx.report(lone_continuation(row.line)),
            }
            return;
        }
        if row.is_empty() || row.is_commented() {
            table
                .variables
                .push(Variable::layout_row(row.all_cells(), row.line));
            return;
        }
        if row.is_indented() {
            ctx.report(at(
                Diagnostic::warning("Variable row without a name."),
                row.line,
            ));
            table
                .variables
                .push(Variable::layout_row(row.all_cells(), row.line));
            return;
        }
        let name = row.head();
        if !is_valid_variable_table_name(name) {
            ctx.report(at(
                Diagnostic::warning(format!("Invalid variable name '{}'.", name)),
                row.line,
            ));
        }
        table.variables.push(Variable::new(
            name,
            row.tail().to_vec(),
            row.comments.clone(),
            row.line,
        ));
    }
}

/// Table of tests or keywords as seen by [`ItemTablePopulator`].
pub(crate) trait ItemTable {
    type Item: StepContainer;

    fn leading_rows(&mut self) -> &mut Vec<CommentRow>;
    fn start_item(&mut self, name: &str, line: Option<usize>) -> &mut Self::Item;
    fn last_item(&mut self) -> Option<&mut Self::Item>;
    fn item_kind(&self) -> &'static str;
}

impl ItemTable for TestCaseTable {
    type Item = TestCase;

    fn leading_rows(&mut self) -> &mut Vec<CommentRow> {
        &mut self.leading_rows
    }
    fn start_item(&mut self, name: &str, line: Option<usize>) -> &mut TestCase {
        self.add(name, line)
    }
    fn last_item(&mut self) -> Option<&mut TestCase> {
        self.tests.last_mut()
    }
    fn item_kind(&self) -> &'static str {
        if self.tasks {
            "task"
        } else {
            "test case"
        }
    }
}

impl ItemTable for KeywordTable {
    type Item = UserKeyword;

    fn leading_rows(&mut self) -> &mut Vec<CommentRow> {
        &mut self.leading_rows
    }
    fn start_item(&mut self, name: &str, line: Option<usize>) -> &mut UserKeyword {
        self.add(name, line)
    }
    fn last_item(&mut self) -> Option<&mut UserKeyword> {
        self.keywords.last_mut()
    }
    fn item_kind(&self) -> &'static str {
        "keyword"
    }
}

/// Fills a test case or keyword table: a name row opens an item, indented
/// rows hold its settings and steps.
#[derive(Debug, Default)]
pub(crate) struct ItemTablePopulator {
    body: Option<BodyBuilder>,
    pending: Option<PendingSetting<SettingKey>>,
}

impl ItemTablePopulator {
    pub fn add<T: ItemTable>(&mut self, row: DataRow, table: &mut T, ctx: &mut ParseContext) {
        let in_item = self.body.is_some();
        if row.is_empty() || (row.is_commented() && !row.is_indented()) {
            if in_item {
                self.flush_setting(table, ctx);
                self.push_body(row);
            } else {
                table.leading_rows().push(CommentRow::new(row.all_cells(), row.line));
            }
            return;
        }
        if row.is_indented() || row.is_commented() {
            if in_item {
                self.data_row(row.dedent(), table, ctx);
            } else {
                ctx.report(at(
                    Diagnostic::warning(format!(
                        "Indented row outside of any {}; ignored.",
                        table.item_kind()
                    )),
                    row.line,
                ));
            }
            return;
        }
        if row.head() == CONTINUATION {
            ctx.report(at(
                Diagnostic::warning(format!(
                    "Using '...' as a {} name is deprecated.",
                    table.item_kind()
                ))
                .with_suggestion("Indent the row to continue the previous one."),
                row.line,
            ));
            if in_item {
                self.data_row(row, table, ctx);
                return;
            }
        }
        self.finish(table, ctx);
        let rest = row.dedent();
        let item = table.start_item(row.head(), row.line);
        self.body = Some(BodyBuilder::new());
        if rest.cells.is_empty() {
            item.set_name_comment(rest.comments);
        } else {
            self.data_row(rest, table, ctx);
        }
    }

    fn push_body(&mut self, row: DataRow) {
        if let Some(body) = self.body.as_mut() {
            body.push(row);
        }
    }

    /// A row inside an item, relative to the item level.
    fn data_row<T: ItemTable>(&mut self, row: DataRow, table: &mut T, ctx: &mut ParseContext) {
        if row.is_continuing() {
            if let Some(pending) = self.pending.as_mut() {
                if pending.mode() == ValueMode::Doc || !is_bare_continuation(&row.cells) {
                    pending.extend(row.data(), &row.comments);
                } else {
                    ctx.report(lone_continuation(row.line));
                }
                return;
            }
            let continued = !is_bare_continuation(&row.cells)
                && self
                    .body
                    .as_mut()
                    .map_or(false, |body| body.continue_row(row.data(), &row.comments));
            if !continued {
                ctx.report(lone_continuation(row.line));
            }
            return;
        }
        self.flush_setting(table, ctx);
        if row.starts_item_setting() {
            let name = row.head().to_string();
            match ctx.languages.item_setting(&name) {
                Some(found) => {
                    if let Some(suggestion) = found.deprecated {
                        ctx.report(at(
                            Diagnostic::warning(format!("Setting '{}' is deprecated.", name))
                                .with_suggestion(suggestion),
                            row.line,
                        ));
                    }
                    let mode = if found.key == SettingKey::Documentation {
                        ValueMode::Doc
                    } else {
                        ValueMode::Cells
                    };
                    self.pending = Some(PendingSetting::new(
                        found.key,
                        &name,
                        mode,
                        row.tail(),
                        &row.comments,
                        row.line,
                    ));
                }
                None => ctx.report(at(
                    Diagnostic::warning(format!("Non-existing setting '{}'.", name)),
                    row.line,
                )),
            }
            return;
        }
        self.push_body(row);
    }

    fn flush_setting<T: ItemTable>(&mut self, table: &mut T, ctx: &mut ParseContext) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let CollectedSetting {
            target,
            name,
            value,
            comment,
            line,
        } = pending.finish();
        let Some(item) = table.last_item() else {
            return;
        };
        match item.populate_setting(target, &name, value, comment, line) {
            Ok(PopulateOutcome::First) => {}
            Ok(PopulateOutcome::Duplicate) => ctx.report(duplicate_setting(&name, line)),
            Err(message) => ctx.report(at(Diagnostic::warning(message), line)),
        }
    }

    /// Close the current item, if any.
    pub fn finish<T: ItemTable>(&mut self, table: &mut T, ctx: &mut ParseContext) {
        self.flush_setting(table, ctx);
        if let Some(body) = self.body.take() {
            if let Some(item) = table.last_item() {
                item.body_mut().extend(body.finish());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Languages;
    use crate::model::body::BodyItem;
    use crate::model::files::FileKind;
    use crate::model::tables::SettingTableKind;

    fn row(cells: &[&str], line: usize) -> DataRow {
        DataRow::new(cells.iter().map(|c| c.to_string()).collect(), Some(line))
    }

    fn ctx() -> ParseContext {
        ParseContext::new(None, FileKind::TestCase, Languages::english())
    }

    // ==================== Settings tests ====================

    #[test]
    fn test_settings_documentation_continuation() {
        let mut table = SettingTable::new(SettingTableKind::TestCaseFile);
        let mut ctx = ctx();
        let mut pop = SettingTablePopulator::default();
        pop.add(row(&["Documentation", "First line"], 2), &mut table, &mut ctx);
        pop.add(row(&["...", "Second line"], 3), &mut table, &mut ctx);
        pop.flush(&mut table, &mut ctx);
        assert_eq!(table.doc.value, "First line\\nSecond line");
        assert_eq!(table.doc.line(), Some(2));
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_settings_unknown_and_duplicate() {
        let mut table = SettingTable::new(SettingTableKind::TestCaseFile);
        let mut ctx = ctx();
        let mut pop = SettingTablePopulator::default();
        pop.add(row(&["Bogus", "x"], 2), &mut table, &mut ctx);
        pop.add(row(&["Suite Setup", "A"], 3), &mut table, &mut ctx);
        pop.add(row(&["Suite Setup", "B"], 4), &mut table, &mut ctx);
        pop.flush(&mut table, &mut ctx);
        assert_eq!(ctx.diagnostics.len(), 2);
        assert_eq!(ctx.diagnostics[0].message(), "Non-existing setting 'Bogus'.");
        assert_eq!(
            ctx.diagnostics[1].message(),
            "Setting 'Suite Setup' is allowed only once. Only the first value is used."
        );
        assert_eq!(table.suite_setup.name.as_deref(), Some("A"));
    }

    #[test]
    fn test_settings_imports_and_metadata() {
        let mut table = SettingTable::new(SettingTableKind::TestCaseFile);
        let mut ctx = ctx();
        let mut pop = SettingTablePopulator::default();
        pop.add(row(&["Library", "Remote", "uri", "AS", "R"], 2), &mut table, &mut ctx);
        pop.add(row(&["Metadata", "Version", "1.0"], 3), &mut table, &mut ctx);
        pop.add(row(&["# comment"], 4), &mut table, &mut ctx);
        pop.add(row(&["Resource", "common.resource"], 5), &mut table, &mut ctx);
        pop.flush(&mut table, &mut ctx);
        assert_eq!(table.imports.len(), 2);
        assert_eq!(table.imports[0].alias.as_deref(), Some("R"));
        assert_eq!(table.metadata[0].value, "1.0");
        assert_eq!(table.comment_rows.len(), 1);
        assert_eq!(table.comment_rows[0].line, Some(4));
    }

    #[test]
    fn test_settings_not_allowed_in_resource() {
        let mut table = SettingTable::new(SettingTableKind::ResourceFile);
        let mut ctx = ctx();
        let mut pop = SettingTablePopulator::default();
        pop.add(row(&["Suite Setup", "X"], 2), &mut table, &mut ctx);
        pop.flush(&mut table, &mut ctx);
        assert!(!table.suite_setup.is_set());
        assert_eq!(
            ctx.diagnostics[0].message(),
            "Setting 'Suite Setup' is not allowed in resource file."
        );
    }

    #[test]
    fn test_settings_deprecated_name_kept() {
        let mut table = SettingTable::new(SettingTableKind::TestCaseFile);
        let mut ctx = ctx();
        let mut pop = SettingTablePopulator::default();
        pop.add(row(&["Force Tags", "a"], 2), &mut table, &mut ctx);
        pop.flush(&mut table, &mut ctx);
        assert_eq!(table.test_tags.setting_name(), "Force Tags");
        assert_eq!(ctx.diagnostics[0].suggestion(), Some("Use 'Test Tags' instead."));
    }

    // ==================== Variables tests ====================

    #[test]
    fn test_variables_rows() {
        let mut table = VariableTable::default();
        let mut ctx = ctx();
        let mut pop = VariableTablePopulator;
        pop.add(row(&["${x}="], 2), &mut table, &mut ctx);
        pop.add(row(&["@{list}", "a"], 3), &mut table, &mut ctx);
        pop.add(row(&["...", "b"], 4), &mut table, &mut ctx);
        pop.add(row(&[], 5), &mut table, &mut ctx);
        pop.add(row(&["bad", "1"], 6), &mut table, &mut ctx);
        assert_eq!(table.variables.len(), 4);
        assert_eq!(table.variables[0].value, vec![""]);
        assert_eq!(table.variables[1].value, vec!["a", "b"]);
        assert!(!table.variables[2].has_data());
        assert_eq!(ctx.diagnostics.len(), 1);
    }

    #[test]
    fn test_variables_nameless_row_keeps_cells() {
        let mut table = VariableTable::default();
        let mut ctx = ctx();
        let mut pop = VariableTablePopulator;
        pop.add(row(&["", "x"], 2), &mut table, &mut ctx);
        assert_eq!(table.variables.len(), 1);
        assert!(!table.variables[0].has_data());
        assert_eq!(table.variables[0].as_list(), vec!["", "x"]);
        assert_eq!(ctx.diagnostics[0].message(), "Variable row without a name.");
    }

    // ==================== Test and keyword tests ====================

    fn populate_tests(rows: &[(&[&str], usize)]) -> (TestCaseTable, ParseContext) {
        let mut table = TestCaseTable::default();
        let mut ctx = ctx();
        let mut pop = ItemTablePopulator::default();
        for (cells, line) in rows {
            pop.add(row(cells, *line), &mut table, &mut ctx);
        }
        pop.finish(&mut table, &mut ctx);
        (table, ctx)
    }

    #[test]
    fn test_items_settings_and_steps() {
        let (table, ctx) = populate_tests(&[
            (&["Example"], 2),
            (&["", "[Documentation]", "Doc"], 3),
            (&["", "[Tags]", "a"], 4),
            (&["", "...", "b"], 5),
            (&["", "Log", "hello"], 6),
            (&["", "...", "world"], 7),
        ]);
        assert!(ctx.diagnostics.is_empty());
        let test = &table.tests[0];
        assert_eq!(test.doc.value, "Doc");
        assert_eq!(test.tags.value, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(test.body.len(), 1);
        assert!(
            matches!(&test.body[0], BodyItem::Step(s) if s.args == vec!["hello", "world"])
        );
    }

    #[test]
    fn test_items_name_row_with_step() {
        let (table, _) = populate_tests(&[(&["Example", "Log", "x"], 2), (&["Other", "# note"], 3)]);
        assert_eq!(table.tests.len(), 2);
        assert_eq!(table.tests[0].body.len(), 1);
        assert_eq!(table.tests[1].name_comment, vec!["# note"]);
    }

    #[test]
    fn test_items_leading_rows_and_blank_steps() {
        let (table, _) = populate_tests(&[
            (&["# header comment"], 2),
            (&["T"], 3),
            (&["", "No Operation"], 4),
            (&[], 5),
        ]);
        assert_eq!(table.leading_rows.len(), 1);
        assert_eq!(table.tests[0].body.len(), 2);
    }

    #[test]
    fn test_items_unknown_and_misplaced_settings() {
        let (table, ctx) = populate_tests(&[
            (&["T"], 2),
            (&["", "[Bogus]", "x"], 3),
            (&["", "[Arguments]", "${a}"], 4),
        ]);
        assert_eq!(ctx.diagnostics.len(), 2);
        assert_eq!(ctx.diagnostics[0].message(), "Non-existing setting '[Bogus]'.");
        assert_eq!(
            ctx.diagnostics[1].message(),
            "Setting '[Arguments]' is not allowed in test case."
        );
        assert!(table.tests[0].body.is_empty());
    }

    #[test]
    fn test_items_indented_row_without_item() {
        let (table, ctx) = populate_tests(&[(&["", "Log", "x"], 2)]);
        assert!(table.tests.is_empty());
        assert_eq!(ctx.diagnostics.len(), 1);
    }

    #[test]
    fn test_keywords_arguments() {
        let mut table = KeywordTable::default();
        let mut ctx = ctx();
        let mut pop = ItemTablePopulator::default();
        pop.add(row(&["My Keyword"], 2), &mut table, &mut ctx);
        pop.add(row(&["", "[Arguments]", "${a}", "${b}=1"], 3), &mut table, &mut ctx);
        pop.add(row(&["", "Log", "${a}"], 4), &mut table, &mut ctx);
        pop.finish(&mut table, &mut ctx);
        let kw = &table.keywords[0];
        assert_eq!(kw.args.value, vec!["${a}", "${b}=1"]);
        assert_eq!(kw.body.len(), 1);
    }
}
