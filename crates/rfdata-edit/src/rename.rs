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

//! Renaming a user keyword together with all of its call sites.

use crate::command::{Command, Executed, RestoreTables};
use crate::occurrences::{keyword_positions, KeywordMatcher};
use crate::target::{ItemRef, Location};
use rfdata_core::{DataFile, Fixture, RfError, RfResult, StepContainer, StringSetting};
use tracing::debug;

/// Rename keyword `old_name` to `new_name` in its definition and in every
/// call site of the file: steps, fixtures, templates and the keyword
/// arguments of run-keyword variants.
///
/// Matching ignores case, spaces and underscores; replacements use
/// `new_name` exactly as given. The whole file is renamed before the
/// controller reports the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameKeywordOccurrences {
    pub old_name: String,
    pub new_name: String,
}

impl RenameKeywordOccurrences {
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }
}

impl Command for RenameKeywordOccurrences {
    fn name(&self) -> &'static str {
        "rename keyword occurrences"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        let new_name = self.new_name.trim();
        if new_name.is_empty() {
            return Err(RfError::command("New keyword name cannot be empty."));
        }
        let languages = file.languages().clone();
        let matcher = KeywordMatcher::new(&self.old_name, &languages);
        let before = file.tables().clone();
        let tables = file.tables_mut();
        let mut changes = Vec::new();

        let settings = &mut tables.settings;
        let mut renamed = false;
        for fixture in settings.fixtures_mut() {
            renamed |= rename_fixture(&matcher, fixture, new_name);
        }
        renamed |= rename_template(&matcher, &mut settings.test_template, new_name);
        if renamed {
            changes.push(Location::Settings);
        }

        for (idx, test) in tables.tests.tests.iter_mut().enumerate() {
            if rename_in_container(&matcher, test, new_name) {
                changes.push(Location::Item(ItemRef::Test(idx)));
            }
        }
        for (idx, keyword) in tables.keywords.keywords.iter_mut().enumerate() {
            let mut renamed = false;
            if matcher.defines(&keyword.name) {
                keyword.name = new_name.to_string();
                renamed = true;
            }
            renamed |= rename_in_container(&matcher, keyword, new_name);
            if renamed {
                changes.push(Location::Item(ItemRef::Keyword(idx)));
            }
        }

        debug!(
            old_name = %self.old_name,
            new_name = %new_name,
            touched = changes.len(),
            "Renamed keyword occurrences"
        );
        Ok(Executed::new(
            RestoreTables {
                tables: before,
                changes: changes.clone(),
            },
            changes,
        ))
    }
}

/// Rename keyword positions within a call. Returns whether anything changed.
fn rename_call(matcher: &KeywordMatcher<'_>, cells: &mut [String], new_name: &str) -> bool {
    let mut renamed = false;
    for pos in keyword_positions(cells) {
        if let Some(value) = matcher.renamed(&cells[pos], new_name) {
            cells[pos] = value;
            renamed = true;
        }
    }
    renamed
}

fn rename_fixture(matcher: &KeywordMatcher<'_>, fixture: &mut Fixture, new_name: &str) -> bool {
    let Some(name) = fixture.name.take() else {
        return false;
    };
    let mut cells = vec![name];
    cells.append(&mut fixture.args);
    let renamed = rename_call(matcher, &mut cells, new_name);
    let mut cells = cells.into_iter();
    fixture.name = cells.next();
    fixture.args = cells.collect();
    renamed
}

fn rename_template(
    matcher: &KeywordMatcher<'_>,
    template: &mut StringSetting,
    new_name: &str,
) -> bool {
    let renamed = template
        .value
        .as_deref()
        .and_then(|value| matcher.renamed(value, new_name));
    match renamed {
        Some(value) => {
            template.value = Some(value);
            true
        }
        None => false,
    }
}

fn rename_in_container(
    matcher: &KeywordMatcher<'_>,
    item: &mut dyn StepContainer,
    new_name: &str,
) -> bool {
    let mut renamed = false;
    for fixture in item.fixtures_mut() {
        renamed |= rename_fixture(matcher, fixture, new_name);
    }
    if let Some(template) = item.template_mut() {
        renamed |= rename_template(matcher, template, new_name);
    }
    for body_item in item.body_mut().iter_mut() {
        for step in body_item.steps_mut() {
            let Some(name) = step.name.take() else {
                continue;
            };
            let mut cells = vec![name];
            cells.append(&mut step.args);
            renamed |= rename_call(matcher, &mut cells, new_name);
            let mut cells = cells.into_iter();
            step.name = cells.next();
            step.args = cells.collect();
        }
    }
    renamed
}
