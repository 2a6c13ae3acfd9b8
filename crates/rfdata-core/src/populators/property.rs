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

//! Settings collected over a header row and its continuation rows.

use crate::model::settings::DocBuilder;

/// How the value cells of a setting are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueMode {
    /// Cells are kept as they are.
    Cells,
    /// Rows are joined into one documentation string.
    Doc,
    /// First cell is a metadata name, the rest joined like documentation.
    Metadata,
}

/// A setting whose value may still grow.
#[derive(Debug)]
pub(crate) struct PendingSetting<T> {
    pub target: T,
    pub name: String,
    mode: ValueMode,
    cells: Vec<String>,
    doc: DocBuilder,
    started: bool,
    comment: Vec<String>,
    line: Option<usize>,
}

/// A finished setting ready to be stored.
#[derive(Debug)]
pub(crate) struct CollectedSetting<T> {
    pub target: T,
    pub name: String,
    pub value: Vec<String>,
    pub comment: Vec<String>,
    pub line: Option<usize>,
}

impl<T> PendingSetting<T> {
    pub fn new(
        target: T,
        name: &str,
        mode: ValueMode,
        value: &[String],
        comment: &[String],
        line: Option<usize>,
    ) -> Self {
        let mut pending = Self {
            target,
            name: name.to_string(),
            mode,
            cells: Vec::new(),
            doc: DocBuilder::default(),
            started: false,
            comment: Vec::new(),
            line,
        };
        pending.extend(value, comment);
        pending
    }

    pub fn mode(&self) -> ValueMode {
        self.mode
    }

    /// Add the data cells of another row.
    pub fn extend(&mut self, data: &[String], comment: &[String]) {
        self.comment.extend(comment.iter().cloned());
        match self.mode {
            ValueMode::Cells => self.cells.extend(data.iter().cloned()),
            ValueMode::Doc => self.add_doc_row(data),
            ValueMode::Metadata => {
                if self.cells.is_empty() {
                    if let Some((name, rest)) = data.split_first() {
                        self.cells.push(name.clone());
                        if !rest.is_empty() {
                            self.add_doc_row(rest);
                        }
                    }
                } else {
                    self.add_doc_row(data);
                }
            }
        }
    }

    fn add_doc_row(&mut self, data: &[String]) {
        // The header row of a setting without a value does not start a
        // paragraph.
        if !self.started && data.is_empty() {
            return;
        }
        self.started = true;
        self.doc.add(data);
    }

    pub fn finish(self) -> CollectedSetting<T> {
        let value = match self.mode {
            ValueMode::Cells => self.cells,
            ValueMode::Doc => vec![self.doc.value()],
            ValueMode::Metadata => {
                let mut cells = self.cells;
                let doc = self.doc.value();
                if !doc.is_empty() {
                    cells.push(doc);
                }
                cells
            }
        };
        CollectedSetting {
            target: self.target,
            name: self.name,
            value,
            comment: self.comment,
            line: self.line,
        }
    }
}
