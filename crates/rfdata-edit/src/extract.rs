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

//! Commands that create keywords and variables from existing cells.

use crate::command::{Command, Executed, RestoreTables};
use crate::target::{item, item_mut, CellRef, ItemRef, Location};
use rfdata_core::language::normalize_keyword_name;
use rfdata_core::lex::{variable_kind, VariableKind};
use rfdata_core::{
    DataFile, RfError, RfResult, Setting, StepContainer, UserKeyword, Variable,
};

fn check_new_keyword(file: &dyn DataFile, name: &str) -> RfResult<()> {
    if name.trim().is_empty() {
        return Err(RfError::command("Keyword name cannot be empty."));
    }
    let wanted = normalize_keyword_name(name);
    if file
        .tables()
        .keywords
        .keywords
        .iter()
        .any(|k| normalize_keyword_name(k.name()) == wanted)
    {
        return Err(RfError::command(format!(
            "Keyword '{}' already exists.",
            name
        )));
    }
    Ok(())
}

fn check_new_variable(file: &dyn DataFile, name: &str, kind: VariableKind) -> RfResult<()> {
    if variable_kind(name) != Some(kind) {
        return Err(RfError::command(format!(
            "Invalid {} variable name '{}'.",
            kind_label(kind),
            name
        )));
    }
    if file.tables().variables.defined().any(|v| v.name == name) {
        return Err(RfError::command(format!(
            "Variable '{}' already exists.",
            name
        )));
    }
    Ok(())
}

fn kind_label(kind: VariableKind) -> &'static str {
    match kind {
        VariableKind::Scalar => "scalar",
        VariableKind::List => "list",
        VariableKind::Dict => "dictionary",
        VariableKind::Environment => "environment",
    }
}

fn comment_cells(comment: &str) -> Vec<String> {
    let comment = comment.trim();
    if comment.is_empty() {
        Vec::new()
    } else if comment.starts_with('#') {
        vec![comment.to_string()]
    } else {
        vec![format!("# {}", comment)]
    }
}

fn snapshot(file: &dyn DataFile, changes: &[Location]) -> RestoreTables {
    RestoreTables {
        tables: file.tables().clone(),
        changes: changes.to_vec(),
    }
}

/// Create a keyword from a step's cells: the first cell is the name and
/// each further cell becomes an `${argN}` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddKeywordFromCells {
    pub cells: Vec<String>,
}

impl Command for AddKeywordFromCells {
    fn name(&self) -> &'static str {
        "add keyword from cells"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        let start = self
            .cells
            .iter()
            .position(|c| !c.trim().is_empty())
            .unwrap_or(self.cells.len());
        let Some((name, rest)) = self.cells[start..].split_first() else {
            return Err(RfError::command("No cells to create a keyword from."));
        };
        let name = name.trim();
        check_new_keyword(file, name)?;
        let new_idx = file.tables().keywords.keywords.len();
        let changes = vec![Location::Item(ItemRef::Keyword(new_idx))];
        let inverse = snapshot(file, &changes);

        let mut keyword = UserKeyword::new(name, None);
        keyword.args.set_value(
            (1..=rest.len())
                .map(|n| format!("${{arg{}}}", n))
                .collect(),
        );
        file.tables_mut().keywords.keywords.push(keyword);
        Ok(Executed::new(inverse, changes))
    }
}

/// Move a range of body rows into a new keyword and call it in their place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractKeyword {
    pub item: ItemRef,
    pub name: String,
    /// Arguments of the new keyword, also passed by the call row.
    pub args: Vec<String>,
    /// First and last row, inclusive.
    pub rows: (usize, usize),
}

impl Command for ExtractKeyword {
    fn name(&self) -> &'static str {
        "extract keyword"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        check_new_keyword(file, &self.name)?;
        let (first, last) = self.rows;
        let mut rows = item(file, self.item)?.body_rows();
        if first > last || last >= rows.len() {
            return Err(RfError::command(format!(
                "Invalid row range {}..={} ({} rows).",
                first,
                last,
                rows.len()
            )));
        }

        let new_idx = file.tables().keywords.keywords.len();
        let changes = vec![
            Location::Item(self.item),
            Location::Item(ItemRef::Keyword(new_idx)),
        ];
        let inverse = snapshot(file, &changes);

        let extracted: Vec<Vec<String>> = rows.drain(first..=last).collect();
        let indent = extracted
            .iter()
            .filter(|r| r.iter().any(|c| !c.is_empty()))
            .map(|r| r.iter().take_while(|c| c.is_empty()).count())
            .min()
            .unwrap_or(0);
        let mut call = vec![String::new(); indent];
        call.push(self.name.trim().to_string());
        call.extend(self.args.iter().cloned());
        rows.insert(first, call);

        let mut keyword = UserKeyword::new(self.name.trim(), None);
        keyword.args.set_value(self.args.clone());
        keyword.set_body_rows(
            extracted
                .into_iter()
                .map(|r| r.into_iter().skip(indent).collect())
                .collect(),
        );

        item_mut(file, self.item)?.set_body_rows(rows);
        file.tables_mut().keywords.keywords.push(keyword);
        Ok(Executed::new(inverse, changes))
    }
}

fn cell_mut<'a>(rows: &'a mut [Vec<String>], cell: CellRef) -> RfResult<&'a mut String> {
    rows.get_mut(cell.row)
        .and_then(|r| r.get_mut(cell.col))
        .ok_or_else(|| {
            RfError::command(format!("No cell at row {}, column {}.", cell.row, cell.col))
        })
}

/// Replace a cell value with a new scalar variable holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractScalar {
    /// `${name}`.
    pub name: String,
    pub value: String,
    pub comment: String,
    pub item: ItemRef,
    pub cell: CellRef,
}

impl Command for ExtractScalar {
    fn name(&self) -> &'static str {
        "extract scalar"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        check_new_variable(file, &self.name, VariableKind::Scalar)?;
        let mut rows = item(file, self.item)?.body_rows();
        *cell_mut(&mut rows, self.cell)? = self.name.clone();

        let changes = vec![Location::Variables, Location::Item(self.item)];
        let inverse = snapshot(file, &changes);
        file.tables_mut().variables.variables.push(Variable::new(
            &self.name,
            vec![self.value.clone()],
            comment_cells(&self.comment),
            None,
        ));
        item_mut(file, self.item)?.set_body_rows(rows);
        Ok(Executed::new(inverse, changes))
    }
}

/// Replace adjacent cells of one row with a new list variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractList {
    /// `@{name}`.
    pub name: String,
    pub value: Vec<String>,
    pub comment: String,
    pub item: ItemRef,
    pub cells: Vec<CellRef>,
}

impl Command for ExtractList {
    fn name(&self) -> &'static str {
        "extract list"
    }

    fn execute(&self, file: &mut dyn DataFile) -> RfResult<Executed> {
        check_new_variable(file, &self.name, VariableKind::List)?;
        let Some(first) = self.cells.first() else {
            return Err(RfError::command("No cells selected."));
        };
        if self.cells.iter().any(|c| c.row != first.row) {
            return Err(RfError::command(
                "List variable cells must be on the same row.",
            ));
        }
        let min_col = self.cells.iter().map(|c| c.col).min().unwrap_or(first.col);
        let max_col = self.cells.iter().map(|c| c.col).max().unwrap_or(first.col);

        let mut rows = item(file, self.item)?.body_rows();
        cell_mut(&mut rows, CellRef::new(first.row, max_col))?;
        rows[first.row].splice(min_col..=max_col, std::iter::once(self.name.clone()));

        let changes = vec![Location::Variables, Location::Item(self.item)];
        let inverse = snapshot(file, &changes);
        file.tables_mut().variables.variables.push(Variable::new(
            &self.name,
            self.value.clone(),
            comment_cells(&self.comment),
            None,
        ));
        item_mut(file, self.item)?.set_body_rows(rows);
        Ok(Executed::new(inverse, changes))
    }
}
