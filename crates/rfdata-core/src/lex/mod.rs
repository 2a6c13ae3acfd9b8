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

//! Lexical layer: physical lines to normalized rows.
//!
//! # Module Structure
//!
//! - [`reader`] - Drives a [`RowSink`] with headers, preamble lines and rows
//! - [`split`] - Cell splitting for space, pipe and TSV syntax
//! - [`rest`] - Robot code block extraction from reStructuredText
//! - [`row`] - [`DataRow`], the normalized row handed to populators
//! - [`tokens`] - Variable and control marker classification
//!
//! # Examples
//!
//! ```
//! use rfdata_core::lex::{split_space_row, DataRow};
//!
//! let cells = split_space_row("    Log    Hello, world    # greet", 4);
//! let row = DataRow::new(cells, Some(3));
//! assert_eq!(row.cells, vec!["", "Log", "Hello, world"]);
//! assert_eq!(row.comments, vec!["# greet"]);
//! assert!(row.is_indented());
//! ```

pub mod reader;
pub mod rest;
pub mod row;
pub mod split;
pub mod tokens;

pub use reader::{DataFormat, ReadSummary, Reader, RowSink};
pub use rest::extract_code_blocks;
pub use row::DataRow;
pub use split::{
    cell_starts, is_pipe_row, split_aligned_row, split_pipe_row, split_space_row, split_tsv_row,
};
pub use tokens::{
    is_assign, is_block_opener, is_dict_variable, is_for_marker, is_list_variable,
    is_scalar_variable, is_valid_variable_table_name, is_variable, split_assign_suffix,
    variable_kind, VariableKind, CONTINUATION,
};
