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

//! Lint runs over parsed files and directory suites.

use rfdata_core::{
    parse_directory, parse_test_case_str, DirectoryOptions, ReaderOptions, Severity, TestCaseFile,
};
use rfdata_lint::{lint, lint_directory, lint_with_config, LintConfig, LintKind, LintRunner};
use rfdata_test::{fixtures, init_tracing, write_tree};
use std::path::Path;

fn parse(text: &str) -> TestCaseFile {
    init_tracing();
    parse_test_case_str(text, &ReaderOptions::default()).unwrap()
}

// ==================== File tests ====================

#[test]
fn test_every_rule_fires_once() {
    let text = "\
*** Settings ***
Force Tags    old

*** Variables ***
${OK}    1

*** Test Cases ***
Same
    Log    a
same
    Log    b

*** Keywords ***
Helper
    [Arguments]    ${a}    b
    FOR    &{d}    IN    x
        Log    ${d}
    END
Empty
";
    let diagnostics = lint(&parse(text));
    let kinds: Vec<&LintKind> = diagnostics.iter().map(|d| d.kind()).collect();
    assert!(kinds.contains(&&LintKind::DeprecatedSetting));
    assert!(kinds.contains(&&LintKind::DuplicateTest));
    assert!(kinds.contains(&&LintKind::EmptyBody));
    assert_eq!(
        diagnostics
            .iter()
            .filter(|d| d.kind() == &LintKind::InvalidVariableName)
            .count(),
        2
    );
    assert!(!kinds.contains(&&LintKind::DuplicateKeyword));
}

#[test]
fn test_localized_deprecated_name_recognized() {
    let text = "Language: Fi\n\n*** Asetukset ***\nDokumentaatio    text\n";
    assert!(lint(&parse(text)).is_empty());
}

#[test]
fn test_legacy_fixture_only_deprecations() {
    let diagnostics = lint(&parse(fixtures::LEGACY));
    assert!(!diagnostics.is_empty());
    assert!(diagnostics
        .iter()
        .all(|d| d.rule_id() == "deprecated-setting" && d.severity() == Severity::Warning));
}

#[test]
fn test_promoted_rule_reports_errors() {
    let mut config = LintConfig::default();
    config.set_rule_error("deprecated-setting");
    let diagnostics = lint_with_config(&parse(fixtures::LEGACY), config);
    assert!(diagnostics.iter().all(|d| d.severity() == Severity::Error));
}

#[test]
fn test_converts_to_reader_diagnostics() {
    let file = parse("*** Keywords ***\nK\n");
    let diagnostics = lint(&file);
    let core = diagnostics[0].to_diagnostic();
    assert_eq!(core.line(), Some(2));
    assert_eq!(core.message(), "[empty-body] Keyword 'K' cannot be empty.");
}

// ==================== Directory tests ====================

#[test]
fn test_directory_findings_carry_sources() {
    init_tracing();
    let dir = write_tree(&[
        ("suite/__init__.robot", "*** Settings ***\nForce Tags    a\n"),
        ("suite/first.robot", "*** Test Cases ***\nT\n    Log    x\nT\n    Log    y\n"),
        ("suite/second.robot", fixtures::MINIMAL),
    ])
    .unwrap();
    let suite = parse_directory(dir.path().join("suite"), &DirectoryOptions::default()).unwrap();
    let diagnostics = lint_directory(&suite);
    assert_eq!(diagnostics.len(), 2);

    let file_name = |d: &rfdata_lint::LintDiagnostic| {
        d.source()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
    };
    assert_eq!(file_name(&diagnostics[0]).as_deref(), Some("__init__.robot"));
    assert_eq!(diagnostics[0].rule_id(), "deprecated-setting");
    assert_eq!(file_name(&diagnostics[1]).as_deref(), Some("first.robot"));
    assert_eq!(diagnostics[1].rule_id(), "duplicate-test");
}

#[test]
fn test_runner_reports_errors() {
    let runner = LintRunner::new(LintConfig::default());
    let clean = runner.run(&parse(fixtures::FULL_SUITE));
    assert!(!runner.has_errors(&clean));
    let broken = runner.run(&parse("*** Keywords ***\nK\n"));
    assert!(runner.has_errors(&broken));
}
