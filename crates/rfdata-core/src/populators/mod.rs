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

//! Table populators: reader events to data model.
//!
//! [`FromFilePopulator`] receives headers and rows from the
//! [`Reader`](crate::lex::Reader) and routes each row to the populator of
//! the active section. Recoverable problems are collected as diagnostics in
//! a [`ParseContext`]; only file-level structure errors abort population.

pub mod body;
pub(crate) mod property;
pub(crate) mod tables;

use self::tables::{ItemTablePopulator, SettingTablePopulator, VariableTablePopulator};
use crate::diagnostic::Diagnostic;
use crate::error::{RfError, RfResult};
use crate::language::{Languages, SectionKind};
use crate::lex::reader::{ReadSummary, RowSink};
use crate::lex::row::DataRow;
use crate::model::files::{FileData, FileKind};
use crate::model::tables::CommentBlock;
use std::path::PathBuf;

pub use self::body::BodyBuilder;

/// Per-file state shared by the section populators.
#[derive(Debug)]
pub struct ParseContext {
    pub source: Option<PathBuf>,
    pub kind: FileKind,
    pub languages: Languages,
    /// Languages given by the caller; the preamble directive is then ignored.
    pub languages_fixed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseContext {
    pub fn new(source: Option<PathBuf>, kind: FileKind, languages: Languages) -> Self {
        Self {
            source,
            kind,
            languages,
            languages_fixed: false,
            diagnostics: Vec::new(),
        }
    }

    /// Attach the source path, log the diagnostic and keep it.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        let diagnostic = match &self.source {
            Some(source) if diagnostic.source().is_none() => diagnostic.with_source(source),
            _ => diagnostic,
        };
        diagnostic.emit();
        self.diagnostics.push(diagnostic);
    }

    fn error(&self, message: &str, line: usize) -> RfError {
        let err = RfError::data(message).with_line(line);
        match &self.source {
            Some(source) => err.with_path(source),
            None => err,
        }
    }
}

#[derive(Debug)]
enum ActiveTable {
    Settings(SettingTablePopulator),
    Variables(VariableTablePopulator),
    Tests(ItemTablePopulator),
    Keywords(ItemTablePopulator),
    /// Comment sections and sections kept verbatim; index into the blocks.
    Verbatim(usize),
}

/// Builds [`FileData`] from reader events.
#[derive(Debug)]
pub struct FromFilePopulator {
    ctx: ParseContext,
    data: FileData,
    active: Option<ActiveTable>,
    seen_tests: Option<SectionKind>,
}

impl FromFilePopulator {
    pub fn new(ctx: ParseContext) -> Self {
        let mut data = FileData::new(ctx.kind);
        data.source = ctx.source.clone();
        Self {
            ctx,
            data,
            active: None,
            seen_tests: None,
        }
    }

    /// Finish population and hand out the file contents.
    pub fn into_data(mut self, summary: ReadSummary) -> FileData {
        self.finish_active();
        self.data.format = summary.format;
        self.data.separating_spaces = summary.separating_spaces;
        self.data.languages = self.ctx.languages;
        self.data.diagnostics = self.ctx.diagnostics;
        self.data
    }

    fn finish_active(&mut self) {
        let tables = &mut self.data.tables;
        match self.active.take() {
            Some(ActiveTable::Settings(mut pop)) => pop.flush(&mut tables.settings, &mut self.ctx),
            Some(ActiveTable::Tests(mut pop)) => pop.finish(&mut tables.tests, &mut self.ctx),
            Some(ActiveTable::Keywords(mut pop)) => {
                pop.finish(&mut tables.keywords, &mut self.ctx)
            }
            _ => {}
        }
    }

    fn start_verbatim(&mut self, raw: &str, line: usize) -> ActiveTable {
        let blocks = &mut self.data.tables.comments.blocks;
        blocks.push(CommentBlock {
            header: raw.to_string(),
            line,
            rows: Vec::new(),
        });
        ActiveTable::Verbatim(blocks.len() - 1)
    }

    fn start_tests(&mut self, kind: SectionKind, line: usize) -> RfResult<Option<ActiveTable>> {
        match self.seen_tests {
            Some(seen) if seen != kind => {
                return Err(self.ctx.error("One file cannot have both tests and tasks.", line));
            }
            _ => self.seen_tests = Some(kind),
        }
        match self.ctx.kind {
            FileKind::Init => Err(self.ctx.error(
                "Test suite initialization file with 'Test Cases' section is invalid.",
                line,
            )),
            FileKind::Resource if self.strict_resource() => Err(self
                .ctx
                .error("Resource file with 'Test Cases' section is invalid.", line)),
            FileKind::Resource => {
                self.ctx.report(
                    Diagnostic::warning(
                        "Resource file with 'Test Cases' section is invalid. Section kept as comments.",
                    )
                    .with_line(line),
                );
                Ok(None)
            }
            FileKind::TestCase => {
                self.data.tables.tests.tasks = kind == SectionKind::Tasks;
                Ok(Some(ActiveTable::Tests(ItemTablePopulator::default())))
            }
        }
    }

    fn strict_resource(&self) -> bool {
        self.ctx
            .source
            .as_deref()
            .and_then(|p| p.extension())
            .map_or(true, |e| e.eq_ignore_ascii_case("resource"))
    }
}

impl RowSink for FromFilePopulator {
    fn preamble(&mut self, line: usize, text: &str) -> RfResult<()> {
        if let Some(codes) = Languages::parse_directive(text) {
            if !self.ctx.languages_fixed {
                let (languages, unknown) = Languages::from_codes(&codes);
                for code in unknown {
                    self.ctx.report(
                        Diagnostic::warning(format!("Language '{}' is not supported.", code))
                            .with_line(line),
                    );
                }
                self.ctx.languages.merge(&languages);
            }
        }
        self.data.preamble.push(text.to_string());
        Ok(())
    }

    fn start_table(&mut self, header: Vec<String>, raw: &str, line: usize) -> RfResult<()> {
        self.finish_active();
        let name = header.first().cloned().unwrap_or_default();
        let columns = header.get(1..).map(<[String]>::to_vec).unwrap_or_default();
        let Some(kind) = self.ctx.languages.section(&name) else {
            self.ctx.report(
                Diagnostic::error(format!(
                    "Unrecognized section header '{}'. Valid sections: 'Settings', 'Variables', \
                     'Test Cases', 'Tasks', 'Keywords' and 'Comments'.",
                    raw.trim()
                ))
                .with_line(line),
            );
            self.active = Some(self.start_verbatim(raw, line));
            return Ok(());
        };
        let active = match kind {
            SectionKind::Comments => {
                self.active = Some(self.start_verbatim(raw, line));
                return Ok(());
            }
            SectionKind::Settings => ActiveTable::Settings(SettingTablePopulator::default()),
            SectionKind::Variables => ActiveTable::Variables(VariableTablePopulator),
            SectionKind::Keywords => ActiveTable::Keywords(ItemTablePopulator::default()),
            SectionKind::TestCases | SectionKind::Tasks => match self.start_tests(kind, line)? {
                Some(active) => active,
                None => {
                    self.active = Some(self.start_verbatim(raw, line));
                    return Ok(());
                }
            },
        };
        let tables = &mut self.data.tables;
        let header = match kind {
            SectionKind::Settings => &mut tables.settings.header,
            SectionKind::Variables => &mut tables.variables.header,
            SectionKind::Keywords => &mut tables.keywords.header,
            _ => &mut tables.tests.header,
        };
        if !header.start(&name, columns, line) {
            self.ctx.report(
                Diagnostic::warning(format!("Duplicate section name at line {}", line))
                    .with_line(line),
            );
        }
        self.active = Some(active);
        Ok(())
    }

    fn row(&mut self, row: DataRow, raw: &str) -> RfResult<()> {
        let tables = &mut self.data.tables;
        let ctx = &mut self.ctx;
        match self.active.as_mut() {
            Some(ActiveTable::Settings(pop)) => pop.add(row, &mut tables.settings, ctx),
            Some(ActiveTable::Variables(pop)) => pop.add(row, &mut tables.variables, ctx),
            Some(ActiveTable::Tests(pop)) => pop.add(row, &mut tables.tests, ctx),
            Some(ActiveTable::Keywords(pop)) => pop.add(row, &mut tables.keywords, ctx),
            Some(ActiveTable::Verbatim(idx)) => {
                if let Some(block) = tables.comments.blocks.get_mut(*idx) {
                    block.rows.push(raw.to_string());
                }
            }
            None => {}
        }
        Ok(())
    }

    fn diagnostic(&mut self, diagnostic: Diagnostic) {
        self.ctx.report(diagnostic);
    }

    fn eof(&mut self) -> RfResult<()> {
        self.finish_active();
        Ok(())
    }
}
