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

//! Lint rules

use crate::diagnostic::{LintDiagnostic, LintKind};
use rfdata_core::language::normalize_keyword_name;
use rfdata_core::lex::{is_scalar_variable, is_valid_variable_table_name, variable_kind, VariableKind};
use rfdata_core::{BodyItem, DataFile, Languages, Setting, StepContainer};
use std::collections::HashMap;

/// Configuration for a single rule
#[derive(Debug, Clone)]
pub struct RuleConfig {
    /// Whether the rule is enabled
    pub enabled: bool,
    /// Whether to treat warnings as errors
    pub error: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            error: false,
        }
    }
}

/// Trait for lint rules
pub trait LintRule: Send + Sync {
    /// Rule identifier
    fn id(&self) -> &str;

    /// Rule description
    fn description(&self) -> &str;

    /// Run the rule on one data file
    fn check(&self, file: &dyn DataFile) -> Vec<LintDiagnostic>;
}

fn capitalized(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Report every item whose normalized name was already seen.
fn duplicates<'a, C, I>(items: I, rule_id: &str, kind: LintKind, error: bool) -> Vec<LintDiagnostic>
where
    C: StepContainer + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let mut seen: HashMap<String, Option<usize>> = HashMap::new();
    let mut diagnostics = Vec::new();
    for item in items {
        let key = normalize_keyword_name(item.name());
        if key.is_empty() {
            continue;
        }
        match seen.get(&key) {
            Some(first) => {
                let message = format!(
                    "{} '{}' is defined multiple times.",
                    capitalized(item.kind_name()),
                    item.name()
                );
                let mut diag = if error {
                    LintDiagnostic::error(kind.clone(), message, rule_id)
                } else {
                    LintDiagnostic::warning(kind.clone(), message, rule_id)
                }
                .with_line(item.line());
                if let Some(line) = first {
                    diag = diag.with_suggestion(format!("First definition is on line {}", line));
                }
                diagnostics.push(diag);
            }
            None => {
                seen.insert(key, item.line());
            }
        }
    }
    diagnostics
}

/// Rule: keyword names are unique within a file.
///
/// Names are compared case-, space- and underscore-insensitively, the way
/// keywords are looked up.
pub struct DuplicateKeywordRule;

impl LintRule for DuplicateKeywordRule {
    fn id(&self) -> &str {
        "duplicate-keyword"
    }
    fn description(&self) -> &str {
        "Keywords defined more than once in the same file"
    }

    fn check(&self, file: &dyn DataFile) -> Vec<LintDiagnostic> {
        duplicates(
            &file.tables().keywords.keywords,
            self.id(),
            LintKind::DuplicateKeyword,
            true,
        )
    }
}

/// Rule: test and task names are unique within a file.
pub struct DuplicateTestRule;

impl LintRule for DuplicateTestRule {
    fn id(&self) -> &str {
        "duplicate-test"
    }
    fn description(&self) -> &str {
        "Tests or tasks with the same name in one suite"
    }

    fn check(&self, file: &dyn DataFile) -> Vec<LintDiagnostic> {
        duplicates(
            &file.tables().tests.tests,
            self.id(),
            LintKind::DuplicateTest,
            false,
        )
    }
}

/// Rule: tests and keywords have at least one step.
pub struct EmptyBodyRule;

impl EmptyBodyRule {
    fn check_item(&self, item: &dyn StepContainer, diagnostics: &mut Vec<LintDiagnostic>) {
        if item.has_steps() {
            return;
        }
        diagnostics.push(
            LintDiagnostic::error(
                LintKind::EmptyBody,
                format!("{} '{}' cannot be empty.", capitalized(item.kind_name()), item.name()),
                self.id(),
            )
            .with_line(item.line()),
        );
    }
}

impl LintRule for EmptyBodyRule {
    fn id(&self) -> &str {
        "empty-body"
    }
    fn description(&self) -> &str {
        "Tests, tasks and keywords without steps"
    }

    fn check(&self, file: &dyn DataFile) -> Vec<LintDiagnostic> {
        let tables = file.tables();
        let mut diagnostics = Vec::new();
        for test in &tables.tests.tests {
            self.check_item(test, &mut diagnostics);
        }
        for keyword in &tables.keywords.keywords {
            self.check_item(keyword, &mut diagnostics);
        }
        diagnostics
    }
}

/// `${name}`, `${name}=default`, `@{varargs}`, `&{kwargs}` or the bare
/// `@{}` marker that starts named-only arguments.
fn is_valid_argument(cell: &str) -> bool {
    if cell == "@{}" {
        return true;
    }
    let name = match cell.find("}=") {
        Some(idx) => &cell[..=idx],
        None => cell,
    };
    matches!(
        variable_kind(name),
        Some(VariableKind::Scalar | VariableKind::List | VariableKind::Dict)
    )
}

/// Rule: variable table entries, keyword arguments and loop variables are
/// well-formed variables.
pub struct InvalidVariableNameRule;

impl InvalidVariableNameRule {
    fn report(&self, message: String, line: Option<usize>) -> LintDiagnostic {
        LintDiagnostic::error(LintKind::InvalidVariableName, message, self.id()).with_line(line)
    }

    fn check_loops(&self, item: &dyn StepContainer, diagnostics: &mut Vec<LintDiagnostic>) {
        for body in item.body() {
            let BodyItem::ForLoop(lp) = body else {
                continue;
            };
            for variable in lp.variables.iter().filter(|v| !is_scalar_variable(v)) {
                diagnostics.push(self.report(
                    format!("Invalid FOR loop variable '{}'.", variable),
                    lp.line,
                ));
            }
        }
    }
}

impl LintRule for InvalidVariableNameRule {
    fn id(&self) -> &str {
        "invalid-variable-name"
    }
    fn description(&self) -> &str {
        "Variable names that are not ${scalar}, @{list} or &{dict}"
    }

    fn check(&self, file: &dyn DataFile) -> Vec<LintDiagnostic> {
        let tables = file.tables();
        let mut diagnostics = Vec::new();
        for variable in tables.variables.defined() {
            if !is_valid_variable_table_name(&variable.name) {
                diagnostics.push(
                    self.report(
                        format!("Invalid variable name '{}'.", variable.name),
                        variable.line,
                    )
                    .with_suggestion("Use ${scalar}, @{list} or &{dict} syntax"),
                );
            }
        }
        for keyword in &tables.keywords.keywords {
            for arg in keyword.args.value.iter().filter(|a| !is_valid_argument(a)) {
                diagnostics.push(self.report(
                    format!("Invalid argument specification '{}' in keyword '{}'.", arg, keyword.name),
                    keyword.args.line().or(keyword.line),
                ));
            }
            self.check_loops(keyword, &mut diagnostics);
        }
        for test in &tables.tests.tests {
            self.check_loops(test, &mut diagnostics);
        }
        diagnostics
    }
}

/// Rule: deprecated setting names and the legacy `:FOR` loop.
pub struct DeprecatedSettingRule;

impl DeprecatedSettingRule {
    fn report(&self, setting: &dyn Setting, suggestion: &str) -> LintDiagnostic {
        LintDiagnostic::warning(
            LintKind::DeprecatedSetting,
            format!("Setting '{}' is deprecated.", setting.setting_name()),
            self.id(),
        )
        .with_line(setting.line())
        .with_suggestion(suggestion)
    }

    fn check_item(
        &self,
        item: &dyn StepContainer,
        languages: &Languages,
        diagnostics: &mut Vec<LintDiagnostic>,
    ) {
        for setting in item.settings() {
            if !setting.info().is_populated() {
                continue;
            }
            if let Some(suggestion) = languages
                .item_setting(setting.setting_name())
                .and_then(|found| found.deprecated)
            {
                diagnostics.push(self.report(setting, suggestion));
            }
        }
        for body in item.body() {
            if let BodyItem::ForLoop(lp) = body {
                if lp.keyword != "FOR" {
                    diagnostics.push(
                        LintDiagnostic::warning(
                            LintKind::DeprecatedSetting,
                            format!("For loop syntax '{}' is deprecated.", lp.keyword),
                            self.id(),
                        )
                        .with_line(lp.line)
                        .with_suggestion("Use 'FOR' closed with 'END' instead."),
                    );
                }
            }
        }
    }
}

impl LintRule for DeprecatedSettingRule {
    fn id(&self) -> &str {
        "deprecated-setting"
    }
    fn description(&self) -> &str {
        "Deprecated setting names and loop syntax"
    }

    fn check(&self, file: &dyn DataFile) -> Vec<LintDiagnostic> {
        let tables = file.tables();
        let languages = file.languages();
        let mut diagnostics = Vec::new();
        for setting in tables.settings.settings() {
            if !setting.info().is_populated() {
                continue;
            }
            // Tag spellings share one slot; the name as written decides.
            if let Some(suggestion) = languages
                .table_setting(setting.setting_name())
                .and_then(|found| found.deprecated)
            {
                diagnostics.push(self.report(setting, suggestion));
            }
        }
        for test in &tables.tests.tests {
            self.check_item(test, languages, &mut diagnostics);
        }
        for keyword in &tables.keywords.keywords {
            self.check_item(keyword, languages, &mut diagnostics);
        }
        diagnostics
    }
}

/// Get all default rules
pub fn default_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(DuplicateKeywordRule),
        Box::new(DuplicateTestRule),
        Box::new(EmptyBodyRule),
        Box::new(InvalidVariableNameRule),
        Box::new(DeprecatedSettingRule),
    ]
}
