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

//! Reader, populators and data model for Robot Framework test data.
//!
//! This crate turns test case files, resource files and suite directories
//! into an owned data model that keeps enough of the source layout (line
//! numbers, comments, setting spellings, preamble) to be written back
//! without losing anything.
//!
//! # Pipeline
//!
//! - [`preprocess`](preprocess()) decodes input and enforces [`Limits`]
//! - the [`lex`] module splits lines into cells for space, pipe, TSV and
//!   reStructuredText sources
//! - the [`populators`] route rows into [`model`] tables
//! - [`parse_directory`] walks a suite tree
//!
//! Recoverable problems never fail a parse. They are collected as
//! [`Diagnostic`]s on the parsed file and logged through `tracing`.
//!
//! # Examples
//!
//! ```
//! use rfdata_core::{parse_test_case_str, DataFile, ReaderOptions};
//!
//! let text = "*** Settings ***\nDocumentation    First line\n...    Second line\n";
//! let file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
//! assert_eq!(file.tables().settings.doc.value, "First line\\nSecond line");
//! assert!(!file.has_tests());
//! ```

pub mod diagnostic;
mod directory;
mod error;
pub mod language;
pub mod lex;
mod limits;
pub mod model;
mod parser;
pub mod populators;
mod preprocess;

pub use diagnostic::{Diagnostic, Severity};
pub use directory::{
    parse_directory, parse_suite, DirectoryOptions, DirectoryOptionsBuilder, SUITE_EXTENSIONS,
};
pub use error::{RfError, RfErrorKind, RfResult};
pub use language::{Language, Languages, SectionKind, SettingKey};
pub use lex::{DataFormat, DataRow};
pub use limits::Limits;
pub use model::*;
pub use parser::{
    parse_bytes, parse_init_file, parse_resource_file, parse_resource_str,
    parse_test_case_file, parse_test_case_str, ReaderOptions, ReaderOptionsBuilder,
    DEFAULT_EXTENSIONS,
};
pub use preprocess::{preprocess, LineEnding, PreprocessedInput};
