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

//! Addressing of items, rows and cells inside one data file.

use rfdata_core::{DataFile, RfError, RfResult, StepContainer};
use std::fmt;

/// A test (or task) or a keyword, by position in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemRef {
    Test(usize),
    Keyword(usize),
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test(idx) => write!(f, "test #{}", idx),
            Self::Keyword(idx) => write!(f, "keyword #{}", idx),
        }
    }
}

/// Part of a file touched by a command or holding an occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    Settings,
    Variables,
    Item(ItemRef),
}

impl From<ItemRef> for Location {
    fn from(item: ItemRef) -> Self {
        Self::Item(item)
    }
}

/// One cell of an item body: row index into the flattened body rows and
/// column index into that row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

pub fn item(file: &dyn DataFile, target: ItemRef) -> RfResult<&dyn StepContainer> {
    let tables = file.tables();
    let found: Option<&dyn StepContainer> = match target {
        ItemRef::Test(idx) => tables.tests.tests.get(idx).map(|t| t as &dyn StepContainer),
        ItemRef::Keyword(idx) => tables
            .keywords
            .keywords
            .get(idx)
            .map(|k| k as &dyn StepContainer),
    };
    found.ok_or_else(|| missing(target))
}

pub fn item_mut(file: &mut dyn DataFile, target: ItemRef) -> RfResult<&mut dyn StepContainer> {
    let tables = file.tables_mut();
    let found: Option<&mut dyn StepContainer> = match target {
        ItemRef::Test(idx) => tables
            .tests
            .tests
            .get_mut(idx)
            .map(|t| t as &mut dyn StepContainer),
        ItemRef::Keyword(idx) => tables
            .keywords
            .keywords
            .get_mut(idx)
            .map(|k| k as &mut dyn StepContainer),
    };
    found.ok_or_else(|| missing(target))
}

fn missing(target: ItemRef) -> RfError {
    RfError::command(format!("No {} in this file.", target))
}
