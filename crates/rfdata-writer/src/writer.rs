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

//! Data file writer: sections in source order, rows split and formatted.

use crate::aligner::ColumnAligner;
use crate::config::{OutputFormat, WriterConfig};
use crate::extractor::{self, OutputRow};
use crate::formatter::{formatter, RowFormatter};
use crate::splitter::RowSplitter;
use rfdata_core::{CommentBlock, DataFile, RfResult, SectionKind, TableHeader};
use std::io::Write;

enum SectionBody<'a> {
    Settings,
    Variables,
    Tests,
    Keywords,
    Verbatim(&'a CommentBlock),
}

struct Section<'a> {
    line: Option<usize>,
    seq: usize,
    body: SectionBody<'a>,
}

/// Writes parsed or edited data files.
///
/// # Examples
///
/// ```
/// use rfdata_core::{parse_test_case_str, ReaderOptions};
/// use rfdata_writer::{DataFileWriter, WriterConfig};
///
/// let text = "*** Test Cases ***\nExample\n    Log    hello\n";
/// let file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
/// let config = WriterConfig::default();
/// let lines = DataFileWriter::new(&config).lines(&file).unwrap();
/// assert_eq!(lines, vec!["*** Test Cases ***", "Example", "    Log    hello"]);
/// ```
pub struct DataFileWriter<'a> {
    config: &'a WriterConfig,
}

impl<'a> DataFileWriter<'a> {
    pub fn new(config: &'a WriterConfig) -> Self {
        Self { config }
    }

    /// Format used for `file`: the configured one or the one it was read in.
    pub fn output_format(&self, file: &dyn DataFile) -> RfResult<OutputFormat> {
        match self.config.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_data_format(file.data().format),
        }
    }

    /// Output lines without line separators.
    pub fn lines(&self, file: &dyn DataFile) -> RfResult<Vec<String>> {
        self.config.validate()?;
        let data = file.data();
        let format = self.output_format(file)?;
        let formatter = formatter(format, self.config, data.separating_spaces);
        let splitter = RowSplitter::new(self.config.column_count, self.config.split_multiline_doc);

        let mut lines: Vec<String> = data.preamble.clone();
        let mut first = true;
        for section in sections(file) {
            if !first && lines.last().map_or(false, |l| !l.is_empty()) {
                lines.push(String::new());
            }
            first = false;
            self.write_section(file, &section, formatter.as_ref(), &splitter, &mut lines);
        }
        Ok(lines)
    }

    fn write_section(
        &self,
        file: &dyn DataFile,
        section: &Section<'_>,
        formatter: &dyn RowFormatter,
        splitter: &RowSplitter,
        lines: &mut Vec<String>,
    ) {
        let tables = file.tables();
        let languages = file.languages();
        let (header, kind, rows, min_indent) = match section.body {
            SectionBody::Verbatim(block) => {
                lines.push(block.header.clone());
                lines.extend(block.rows.iter().cloned());
                return;
            }
            SectionBody::Settings => (
                &tables.settings.header,
                SectionKind::Settings,
                extractor::setting_rows(&tables.settings, languages),
                0,
            ),
            SectionBody::Variables => (
                &tables.variables.header,
                SectionKind::Variables,
                extractor::variable_rows(&tables.variables),
                0,
            ),
            SectionBody::Tests => (
                &tables.tests.header,
                tables.tests.section_kind(),
                extractor::test_rows(&tables.tests, languages),
                1,
            ),
            SectionBody::Keywords => (
                &tables.keywords.header,
                SectionKind::Keywords,
                extractor::keyword_rows(&tables.keywords, languages),
                1,
            ),
        };
        let name = header_name(header, languages.localized_section(kind));
        let aligner = if min_indent > 0 && formatter.supports_alignment() {
            ColumnAligner::for_header(header, &name, self.config.first_column_width)
        } else {
            None
        };
        lines.push(formatter.header(&name, &header.columns, aligner.as_ref()));
        for row in &rows {
            write_rows(row, min_indent, formatter, splitter, aligner.as_ref(), lines);
        }
    }

    /// Write `file` to `out`, each line followed by the line separator.
    pub fn write<W: Write>(&self, file: &dyn DataFile, out: &mut W) -> RfResult<()> {
        let newline = self.config.newline(file.data().line_ending);
        for line in self.lines(file)? {
            out.write_all(line.as_bytes())?;
            out.write_all(newline.as_bytes())?;
        }
        out.flush()?;
        Ok(())
    }
}

fn header_name(header: &TableHeader, localized: &str) -> String {
    header
        .name
        .clone()
        .unwrap_or_else(|| localized.to_string())
}

fn write_rows(
    row: &OutputRow,
    min_indent: usize,
    formatter: &dyn RowFormatter,
    splitter: &RowSplitter,
    aligner: Option<&ColumnAligner>,
    lines: &mut Vec<String>,
) {
    for physical in splitter.split(row, min_indent) {
        lines.push(formatter.row(&physical, aligner));
    }
}

/// Sections to write, ordered by header line. Tables created in code
/// follow the ones read from the source.
fn sections(file: &dyn DataFile) -> Vec<Section<'_>> {
    let tables = file.tables();
    let mut sections = Vec::new();
    let candidates = [
        (
            tables.settings.header.is_started() || tables.settings.has_content(),
            tables.settings.header.line,
            SectionBody::Settings,
        ),
        (
            tables.variables.header.is_started() || tables.variables.has_content(),
            tables.variables.header.line,
            SectionBody::Variables,
        ),
        (
            tables.tests.header.is_started() || tables.tests.has_content(),
            tables.tests.header.line,
            SectionBody::Tests,
        ),
        (
            tables.keywords.header.is_started() || tables.keywords.has_content(),
            tables.keywords.header.line,
            SectionBody::Keywords,
        ),
    ];
    for (present, line, body) in candidates {
        if present {
            let seq = sections.len();
            sections.push(Section { line, seq, body });
        }
    }
    for block in &tables.comments.blocks {
        let seq = sections.len();
        sections.push(Section {
            line: Some(block.line),
            seq,
            body: SectionBody::Verbatim(block),
        });
    }
    sections.sort_by_key(|s| (s.line.is_none(), s.line, s.seq));
    sections
}
