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

//! Finding the places where a user keyword is defined or called.

use crate::target::{ItemRef, Location};
use rfdata_core::language::normalize_keyword_name;
use rfdata_core::{
    BodyItem, DataFile, Fixture, Languages, SettingKey, Step, StepContainer, StringSetting,
};

/// Matches cells against one keyword name, ignoring case, spaces,
/// underscores and a leading BDD prefix.
#[derive(Debug, Clone)]
pub struct KeywordMatcher<'a> {
    normalized: String,
    languages: &'a Languages,
}

impl<'a> KeywordMatcher<'a> {
    pub fn new(name: &str, languages: &'a Languages) -> Self {
        Self {
            normalized: normalize_keyword_name(name),
            languages,
        }
    }

    /// `Some(prefix)` when `cell` calls the keyword; the inner value is the
    /// BDD prefix as written, if any.
    pub fn call_prefix<'c>(&self, cell: &'c str) -> Option<Option<&'c str>> {
        if self.normalized.is_empty() {
            return None;
        }
        if normalize_keyword_name(cell) == self.normalized {
            return Some(None);
        }
        match self.languages.split_bdd_prefix(cell) {
            (Some(prefix), rest) if normalize_keyword_name(rest) == self.normalized => {
                Some(Some(prefix))
            }
            _ => None,
        }
    }

    pub fn matches(&self, cell: &str) -> bool {
        self.call_prefix(cell).is_some()
    }

    /// Whether `name` defines the keyword. Definitions never carry a prefix.
    pub fn defines(&self, name: &str) -> bool {
        !self.normalized.is_empty() && normalize_keyword_name(name) == self.normalized
    }

    /// The cell rewritten to call `new_name`, keeping a BDD prefix.
    pub fn renamed(&self, cell: &str, new_name: &str) -> Option<String> {
        match self.call_prefix(cell)? {
            None => Some(new_name.to_string()),
            Some(prefix) => Some(format!("{} {}", prefix, new_name)),
        }
    }
}

/// Positions of keyword names in a call: the keyword itself at 0 and the
/// keywords run by BuiltIn's run-keyword variants among its arguments.
///
/// ```
/// use rfdata_edit::keyword_positions;
///
/// let cells: Vec<String> = ["Run Keyword If", "${ok}", "Log", "x", "ELSE", "Fail"]
///     .iter()
///     .map(|c| c.to_string())
///     .collect();
/// assert_eq!(keyword_positions(&cells), vec![0, 2, 5]);
/// ```
pub fn keyword_positions(cells: &[String]) -> Vec<usize> {
    let mut positions = Vec::new();
    collect_positions(cells, 0, &mut positions);
    positions
}

fn collect_positions(cells: &[String], offset: usize, out: &mut Vec<usize>) {
    let Some(first) = cells.first() else {
        return;
    };
    out.push(offset);
    let args = &cells[1..];
    let args_offset = offset + 1;
    match normalize_keyword_name(first).as_str() {
        "runkeyword"
        | "runkeywordandignoreerror"
        | "runkeywordandreturnstatus"
        | "runkeywordandcontinueonfailure" => collect_positions(args, args_offset, out),
        "waituntilkeywordsucceeds" if args.len() > 2 => {
            collect_positions(&args[2..], args_offset + 2, out)
        }
        "runkeywordif" => run_keyword_if(args, args_offset, out),
        "runkeywords" => run_keywords(args, args_offset, out),
        _ => {}
    }
}

fn run_keyword_if(args: &[String], offset: usize, out: &mut Vec<usize>) {
    let mut start = 0;
    let mut has_condition = true;
    loop {
        let end = args[start..]
            .iter()
            .position(|c| c == "ELSE IF" || c == "ELSE")
            .map_or(args.len(), |p| start + p);
        let branch = if has_condition { start + 1 } else { start };
        if branch < end {
            collect_positions(&args[branch..end], offset + branch, out);
        }
        if end >= args.len() {
            break;
        }
        has_condition = args[end] == "ELSE IF";
        start = end + 1;
    }
}

fn run_keywords(args: &[String], offset: usize, out: &mut Vec<usize>) {
    if !args.iter().any(|c| c == "AND") {
        out.extend((0..args.len()).map(|i| offset + i));
        return;
    }
    let mut start = 0;
    for idx in 0..=args.len() {
        if idx == args.len() || args[idx] == "AND" {
            collect_positions(&args[start..idx], offset + start, out);
            start = idx + 1;
        }
    }
}

/// Where in its container an occurrence was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Definition,
    Step,
    Setting(SettingKey),
}

/// One definition or call of a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub location: Location,
    /// Name of the containing test or keyword; `Settings` for the table.
    pub item_name: String,
    pub usage: Usage,
    /// Name of the usage site as written: `Suite Setup`, `[Template]`,
    /// `Steps` or `Keyword Name`.
    pub usage_name: String,
    /// Matching cell, including a BDD prefix.
    pub value: String,
    /// Body row, for step occurrences.
    pub row: Option<usize>,
    pub line: Option<usize>,
}

/// Lazy sequence of occurrences in file order.
pub type Occurrences<'a> = Box<dyn Iterator<Item = Occurrence> + 'a>;

/// Occurrences of keyword `name` in one file: the settings table first,
/// then tests, then keywords.
pub fn find_occurrences<'a>(file: &'a dyn DataFile, name: &str) -> Occurrences<'a> {
    let matcher = KeywordMatcher::new(name, file.languages());
    let tables = file.tables();
    let tests = (0..tables.tests.tests.len()).map(|i| Location::Item(ItemRef::Test(i)));
    let keywords = (0..tables.keywords.keywords.len()).map(|i| Location::Item(ItemRef::Keyword(i)));
    Box::new(
        std::iter::once(Location::Settings)
            .chain(tests)
            .chain(keywords)
            .flat_map(move |location| occurrences_at(file, &matcher, location)),
    )
}

fn occurrences_at(
    file: &dyn DataFile,
    matcher: &KeywordMatcher<'_>,
    location: Location,
) -> Vec<Occurrence> {
    let tables = file.tables();
    let mut sites = Sites {
        matcher,
        location,
        item_name: String::new(),
        found: Vec::new(),
    };
    match location {
        Location::Settings => {
            sites.item_name = "Settings".to_string();
            let settings = &tables.settings;
            for fixture in settings.fixtures() {
                sites.fixture(fixture);
            }
            sites.template(&settings.test_template);
        }
        Location::Variables => {}
        Location::Item(ItemRef::Test(idx)) => {
            if let Some(test) = tables.tests.tests.get(idx) {
                sites.container(test);
            }
        }
        Location::Item(ItemRef::Keyword(idx)) => {
            if let Some(keyword) = tables.keywords.keywords.get(idx) {
                if matcher.defines(keyword.name()) {
                    sites.push(
                        Usage::Definition,
                        "Keyword Name",
                        keyword.name(),
                        None,
                        keyword.line(),
                    );
                }
                sites.container(keyword);
            }
        }
    }
    sites.found
}

struct Sites<'m, 'l> {
    matcher: &'m KeywordMatcher<'l>,
    location: Location,
    item_name: String,
    found: Vec<Occurrence>,
}

impl Sites<'_, '_> {
    fn push(
        &mut self,
        usage: Usage,
        usage_name: &str,
        value: &str,
        row: Option<usize>,
        line: Option<usize>,
    ) {
        self.found.push(Occurrence {
            location: self.location,
            item_name: self.item_name.clone(),
            usage,
            usage_name: usage_name.to_string(),
            value: value.to_string(),
            row,
            line,
        });
    }

    fn fixture(&mut self, fixture: &Fixture) {
        let cells: Vec<String> = fixture.name.iter().chain(fixture.args.iter()).cloned().collect();
        for pos in keyword_positions(&cells) {
            if self.matcher.matches(&cells[pos]) {
                self.push(
                    Usage::Setting(fixture.info.key),
                    &fixture.info.name,
                    &cells[pos],
                    None,
                    fixture.info.line,
                );
            }
        }
    }

    fn template(&mut self, template: &StringSetting) {
        if let Some(value) = template.value.as_deref() {
            if self.matcher.matches(value) {
                self.push(
                    Usage::Setting(template.info.key),
                    &template.info.name,
                    value,
                    None,
                    template.info.line,
                );
            }
        }
    }

    fn step(&mut self, step: &Step, row: usize) {
        let cells: Vec<String> = step.name.iter().chain(step.args.iter()).cloned().collect();
        for pos in keyword_positions(&cells) {
            if self.matcher.matches(&cells[pos]) {
                self.push(Usage::Step, "Steps", &cells[pos], Some(row), step.line);
            }
        }
    }

    fn container(&mut self, item: &dyn StepContainer) {
        self.item_name = item.name().to_string();
        for fixture in item.fixtures() {
            self.fixture(fixture);
        }
        if let Some(template) = item.template() {
            self.template(template);
        }
        let mut row = 0;
        for body_item in item.body() {
            match body_item {
                BodyItem::Step(step) => self.step(step, row),
                BodyItem::ForLoop(lp) => {
                    for (idx, step) in lp.steps.iter().enumerate() {
                        self.step(step, row + 1 + idx);
                    }
                }
            }
            row += body_item.rows().len();
        }
    }
}
