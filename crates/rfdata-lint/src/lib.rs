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

//! Linting for Robot Framework test data
//!
//! Checks a parsed data file for problems the reader accepts but that break
//! or weaken a suite: duplicate names, empty bodies, malformed variable
//! names and deprecated syntax.
//!
//! ## Quick Start
//!
//! ```rust
//! use rfdata_core::{parse_test_case_str, ReaderOptions, Severity};
//! use rfdata_lint::lint;
//!
//! let text = "*** Keywords ***\nEmpty\n";
//! let file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
//! let diagnostics = lint(&file);
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].severity(), Severity::Error);
//! assert_eq!(diagnostics[0].rule_id(), "empty-body");
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use rfdata_core::{parse_test_case_str, ReaderOptions, Severity};
//! use rfdata_lint::{lint_with_config, LintConfig};
//!
//! let text = "*** Settings ***\nForce Tags    smoke\n";
//! let file = parse_test_case_str(text, &ReaderOptions::default()).unwrap();
//!
//! let mut config = LintConfig::default();
//! config.disable_rule("empty-body");
//! config.set_rule_error("deprecated-setting");
//!
//! let diagnostics = lint_with_config(&file, config);
//! assert_eq!(diagnostics[0].severity(), Severity::Error);
//! ```
//!
//! ## Custom Rules
//!
//! ```rust
//! use rfdata_core::DataFile;
//! use rfdata_lint::{LintConfig, LintDiagnostic, LintRule, LintRunner};
//!
//! struct MyCustomRule;
//!
//! impl LintRule for MyCustomRule {
//!     fn id(&self) -> &str { "my-custom-rule" }
//!     fn description(&self) -> &str { "Custom validation logic" }
//!     fn check(&self, _file: &dyn DataFile) -> Vec<LintDiagnostic> {
//!         vec![]
//!     }
//! }
//!
//! let mut runner = LintRunner::new(LintConfig::default());
//! runner.add_rule(Box::new(MyCustomRule));
//! ```

mod diagnostic;
mod rules;
mod runner;

pub use diagnostic::{LintDiagnostic, LintKind};
pub use rules::{
    default_rules, DeprecatedSettingRule, DuplicateKeywordRule, DuplicateTestRule, EmptyBodyRule,
    InvalidVariableNameRule, LintRule, RuleConfig,
};
pub use runner::{LintConfig, LintRunner};

use rfdata_core::{DataFile, TestDataDirectory};

/// Lint a data file with the default configuration
pub fn lint(file: &dyn DataFile) -> Vec<LintDiagnostic> {
    lint_with_config(file, LintConfig::default())
}

/// Lint a data file with a custom configuration
pub fn lint_with_config(file: &dyn DataFile, config: LintConfig) -> Vec<LintDiagnostic> {
    LintRunner::new(config).run(file)
}

/// Lint every file of a directory suite with the default configuration
pub fn lint_directory(directory: &TestDataDirectory) -> Vec<LintDiagnostic> {
    LintRunner::new(LintConfig::default()).run_directory(directory)
}
