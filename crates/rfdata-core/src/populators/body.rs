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

//! Builds the body of a test or keyword from rows.

use crate::lex::row::DataRow;
use crate::lex::tokens::is_for_marker;
use crate::model::body::{BodyItem, EndRow, ForLoop, Step};

const END: &str = "END";

/// Whether a row opens a block that needs its own `END`.
///
/// `IF` with a single condition cell is a block; an inline `IF` carries its
/// keyword on the same row.
fn opens_block(cells: &[String]) -> bool {
    let content: Vec<&String> = cells.iter().skip_while(|c| c.is_empty()).collect();
    match content.first().map(|c| c.as_str()) {
        Some("FOR" | "WHILE" | "TRY" | "GROUP") => true,
        Some("IF") => content.len() == 2,
        Some(other) => is_for_marker(other),
        None => false,
    }
}

fn closes_block(cells: &[String]) -> bool {
    cells.iter().find(|c| !c.is_empty()).map_or(false, |c| c == END)
}

/// Groups rows into steps and `FOR` loops.
///
/// Blocks nested inside a loop are kept as plain steps of that loop; a
/// depth counter pairs their `END` rows so that only the loop's own `END`
/// closes it. Legacy `:FOR` loops also end at the first row that is not
/// indented below the loop.
#[derive(Debug, Default)]
pub struct BodyBuilder {
    items: Vec<BodyItem>,
    open_loop: Option<ForLoop>,
    depth: usize,
}

impl BodyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.open_loop.is_none()
    }

    /// Add one row, relative to the item level.
    pub fn push(&mut self, row: DataRow) {
        if let Some(lp) = self.open_loop.as_mut() {
            let legacy = lp.keyword.starts_with(':');
            if legacy && !row.is_empty() && row.indent() <= lp.indent && !closes_block(&row.cells)
            {
                self.close_loop(None);
            } else if closes_block(&row.cells) && self.depth == 0 {
                let indent = row.indent();
                let mut cells = row.cells.into_iter().skip(indent);
                let keyword = cells.next().unwrap_or_else(|| END.to_string());
                self.close_loop(Some(EndRow {
                    indent,
                    keyword,
                    args: cells.collect(),
                    comment: row.comments,
                    line: row.line,
                }));
                return;
            } else {
                if opens_block(&row.cells) {
                    self.depth += 1;
                } else if closes_block(&row.cells) {
                    self.depth -= 1;
                }
                lp.steps
                    .push(Step::from_cells(row.cells, row.comments, row.line));
                return;
            }
        }
        if row.starts_for_loop() {
            self.open_loop = Some(ForLoop::from_cells(row.cells, row.comments, row.line));
            self.depth = 0;
        } else {
            self.items
                .push(BodyItem::Step(Step::from_cells(row.cells, row.comments, row.line)));
        }
    }

    /// Append continuation cells to the latest row. Returns `false` when
    /// there is nothing to continue.
    pub fn continue_row(&mut self, data: &[String], comment: &[String]) -> bool {
        if let Some(lp) = self.open_loop.as_mut() {
            match lp.steps.last_mut() {
                Some(step) => step.extend(data, comment),
                None => lp.extend_declaration(data, comment),
            }
            return true;
        }
        match self.items.last_mut() {
            Some(BodyItem::Step(step)) => {
                step.extend(data, comment);
                true
            }
            Some(BodyItem::ForLoop(lp)) => {
                match lp.end.as_mut() {
                    Some(end) => {
                        end.args.extend(data.iter().cloned());
                        end.comment.extend(comment.iter().cloned());
                    }
                    None => match lp.steps.last_mut() {
                        Some(step) => step.extend(data, comment),
                        None => lp.extend_declaration(data, comment),
                    },
                }
                true
            }
            None => false,
        }
    }

    fn close_loop(&mut self, end: Option<EndRow>) {
        if let Some(mut lp) = self.open_loop.take() {
            lp.end = end;
            self.items.push(BodyItem::ForLoop(lp));
        }
        self.depth = 0;
    }

    /// Finish the body; an unclosed loop keeps the rows it absorbed.
    pub fn finish(mut self) -> Vec<BodyItem> {
        self.close_loop(None);
        self.items
    }
}
