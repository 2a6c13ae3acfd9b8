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

//! # rfdata - Robot Framework test data
//!
//! Reads Robot Framework test data (space separated, pipe separated, TSV
//! and reStructuredText) into an editable model, and writes the model back
//! without losing comments, blank rows or the original ordering.
//!
//! ## Quick Start
//!
//! ```rust
//! use rfdata::{parse, to_string, DataFile};
//!
//! let text = "\
//! *** Settings ***
//! Documentation    Example suite
//!
//! *** Test Cases ***
//! Example
//!     Log    hello
//! ";
//!
//! let file = parse(text).unwrap();
//! assert_eq!(file.tables().settings.doc.value, "Example suite");
//! assert_eq!(to_string(&file).unwrap(), text);
//! ```
//!
//! ## Modules
//!
//! - [`writer`]: writer configuration and the per-format formatters
//! - [`lint`](mod@lint): rule-based checks over a parsed file
//! - [`edit`]: commands, undo and occurrence search
//! - [`lex`]: cell-level helpers for variables and loop markers

pub use rfdata_core::{
    // Parsing
    parse_bytes, parse_directory, parse_init_file, parse_resource_file, parse_resource_str,
    parse_suite, parse_test_case_file, parse_test_case_str,
    // Model
    BodyItem, DataFile, DataTables, FileKind, ForLoop, ResourceFile, Setting, Step,
    StepContainer, Suite, TestCase, TestCaseFile, TestDataDirectory, UserKeyword, Variable,
    // Options
    DirectoryOptions, Limits, ReaderOptions,
    // Languages
    Language, Languages, SettingKey,
    // Errors and diagnostics
    Diagnostic, RfError, RfErrorKind, RfResult, Severity,
};

mod error_ext;
pub use error_ext::RfResultExt;

pub mod lex {
    //! Cell-level helpers
    pub use rfdata_core::lex::{
        is_for_marker, is_list_variable, is_scalar_variable, is_valid_variable_table_name,
        is_variable, variable_kind, DataFormat, VariableKind,
    };
}

pub mod writer {
    //! Writing the model back to text
    pub use rfdata_writer::{
        save, save_as, write_data_file, write_to_string, DataFileWriter, LineSeparator,
        OutputFormat, WriterConfig, WriterConfigBuilder,
    };
}

pub mod lint {
    //! Linting utilities
    pub use rfdata_lint::{
        lint, lint_directory, lint_with_config, LintConfig, LintDiagnostic, LintKind, LintRule,
        LintRunner, RuleConfig,
    };
}

pub mod edit {
    //! Model-level editing commands
    pub use rfdata_edit::*;
}

use std::path::Path;

/// Parse test case file contents with default options.
///
/// ```rust
/// use rfdata::{parse, DataFile};
///
/// let file = parse("*** Test Cases ***\nT\n    No Operation\n").unwrap();
/// assert_eq!(file.tables().tests.tests[0].name, "T");
/// ```
pub fn parse(text: &str) -> RfResult<TestCaseFile> {
    parse_test_case_str(text, &ReaderOptions::default())
}

/// Parse resource file contents with default options.
pub fn parse_resource(text: &str) -> RfResult<ResourceFile> {
    parse_resource_str(text, &ReaderOptions::default())
}

/// Load a suite from a file or a directory with default options.
pub fn load(path: impl AsRef<Path>) -> RfResult<Suite> {
    let path = path.as_ref();
    parse_suite(path, &DirectoryOptions::default())
        .with_context(|| format!("while loading '{}'", path.display()))
}

/// Write a data file with the default writer configuration.
pub fn to_string(file: &dyn DataFile) -> RfResult<String> {
    rfdata_writer::write_to_string(file, &writer::WriterConfig::default())
}

/// Write a data file back to its source with the default configuration.
pub fn save(file: &dyn DataFile) -> RfResult<()> {
    rfdata_writer::save(file, &writer::WriterConfig::default())
}

/// Lint a data file with the default rules.
pub fn lint(file: &dyn DataFile) -> Vec<lint::LintDiagnostic> {
    rfdata_lint::lint(file)
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
