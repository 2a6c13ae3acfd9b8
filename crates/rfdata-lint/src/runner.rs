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

//! Lint runner

use crate::diagnostic::{LintDiagnostic, LintKind};
use crate::rules::{default_rules, LintRule, RuleConfig};
use rfdata_core::{DataFile, RfError, RfResult, Severity, TestDataDirectory};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Maximum number of diagnostics collected from one file before stopping.
const MAX_DIAGNOSTICS: usize = 10_000;

/// Configuration for the lint runner
#[derive(Debug, Clone)]
pub struct LintConfig {
    /// Rule configurations by rule ID
    pub rules: HashMap<String, RuleConfig>,
    /// Minimum severity to report
    pub min_severity: Severity,
    /// Maximum number of diagnostics to collect per file (default: 10,000)
    pub max_diagnostics: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
            min_severity: Severity::Info,
            max_diagnostics: MAX_DIAGNOSTICS,
        }
    }
}

impl LintConfig {
    /// Validate configuration (rule IDs and limits).
    pub fn validate(&self) -> RfResult<()> {
        const MAX_RULE_ID_LENGTH: usize = 100;

        if self.max_diagnostics == 0 {
            return Err(RfError::config("max_diagnostics must be at least 1"));
        }
        for id in self.rules.keys() {
            if id.is_empty() {
                return Err(RfError::config("Empty rule ID not allowed"));
            }
            if id.len() > MAX_RULE_ID_LENGTH {
                return Err(RfError::config(format!(
                    "Rule ID too long: {} bytes (max: {})",
                    id.len(),
                    MAX_RULE_ID_LENGTH
                )));
            }
        }
        Ok(())
    }

    /// Disable a specific rule
    pub fn disable_rule(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: false,
                error: false,
            },
        );
    }

    /// Enable a specific rule
    pub fn enable_rule(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: true,
                error: false,
            },
        );
    }

    /// Report a rule's warnings as errors
    pub fn set_rule_error(&mut self, rule_id: &str) {
        self.rules.insert(
            rule_id.to_string(),
            RuleConfig {
                enabled: true,
                error: true,
            },
        );
    }
}

/// Lint runner
pub struct LintRunner {
    config: LintConfig,
    rules: Vec<Box<dyn LintRule>>,
}

impl LintRunner {
    /// Create a new lint runner with default rules
    pub fn new(config: LintConfig) -> Self {
        Self {
            config,
            rules: default_rules(),
        }
    }

    /// Create a lint runner with custom rules
    pub fn with_rules(config: LintConfig, rules: Vec<Box<dyn LintRule>>) -> Self {
        Self { config, rules }
    }

    /// Add a custom rule
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Run all enabled rules on one file.
    ///
    /// Diagnostics carry the file's source path and come back ordered by
    /// severity (errors first), then line. At most `max_diagnostics` are
    /// collected; a final warning tells when more were suppressed.
    pub fn run(&self, file: &dyn DataFile) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        let mut limit_exceeded = false;

        for rule in &self.rules {
            let rule_id = rule.id();
            let rule_config = self.config.rules.get(rule_id).cloned().unwrap_or_default();
            if !rule_config.enabled {
                debug!("Lint rule '{}' disabled", rule_id);
                continue;
            }

            let mut found = rule.check(file);
            if rule_config.error {
                for diag in found.iter_mut().filter(|d| d.severity() == Severity::Warning) {
                    diag.escalate_to_error();
                }
            }

            for diag in found
                .into_iter()
                .filter(|d| d.severity() >= self.config.min_severity)
            {
                if diagnostics.len() >= self.config.max_diagnostics {
                    limit_exceeded = true;
                    break;
                }
                diagnostics.push(diag.with_source(file.source()));
            }
            if limit_exceeded {
                break;
            }
        }

        if limit_exceeded {
            warn!(
                "Lint diagnostic limit of {} reached",
                self.config.max_diagnostics
            );
            diagnostics.push(
                LintDiagnostic::warning(
                    LintKind::Custom("diagnostic-limit-exceeded".to_string()),
                    format!(
                        "Diagnostic limit of {} exceeded. Further diagnostics have been suppressed.",
                        self.config.max_diagnostics
                    ),
                    "lint-runner",
                )
                .with_source(file.source()),
            );
        }

        diagnostics.sort_by(|a, b| {
            b.severity()
                .cmp(&a.severity())
                .then_with(|| a.line().cmp(&b.line()))
        });
        diagnostics
    }

    /// Run all enabled rules on a directory suite: its init file first,
    /// then every file suite below it depth first.
    pub fn run_directory(&self, directory: &TestDataDirectory) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        if directory.init_file().is_some() {
            diagnostics.extend(self.run(directory));
        }
        for file in directory.files() {
            diagnostics.extend(self.run(file));
        }
        diagnostics
    }

    /// Check if any errors were found
    pub fn has_errors(&self, diagnostics: &[LintDiagnostic]) -> bool {
        diagnostics.iter().any(|d| d.severity() == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfdata_core::{parse_test_case_str, ReaderOptions, TestCaseFile};

    fn parse(text: &str) -> TestCaseFile {
        parse_test_case_str(text, &ReaderOptions::default()).unwrap()
    }

    struct EveryTest;

    impl LintRule for EveryTest {
        fn id(&self) -> &str {
            "every-test"
        }
        fn description(&self) -> &str {
            "One warning per test"
        }
        fn check(&self, file: &dyn DataFile) -> Vec<LintDiagnostic> {
            file.tables()
                .tests
                .tests
                .iter()
                .map(|t| {
                    LintDiagnostic::warning(LintKind::Custom("every".into()), t.name.clone(), "every-test")
                        .with_line(t.line)
                })
                .collect()
        }
    }

    // ==================== LintConfig tests ====================

    #[test]
    fn test_lint_config_default() {
        let config = LintConfig::default();
        assert_eq!(config.min_severity, Severity::Info);
        assert_eq!(config.max_diagnostics, 10_000);
        assert!(config.rules.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rule_toggles() {
        let mut config = LintConfig::default();
        config.disable_rule("empty-body");
        assert!(!config.rules["empty-body"].enabled);
        config.enable_rule("empty-body");
        assert!(config.rules["empty-body"].enabled);
        assert!(!config.rules["empty-body"].error);
        config.set_rule_error("empty-body");
        assert!(config.rules["empty-body"].error);
    }

    #[test]
    fn test_validate_rejects_bad_ids() {
        let mut config = LintConfig::default();
        config.disable_rule("");
        assert!(config.validate().is_err());

        let mut config = LintConfig::default();
        config.disable_rule(&"x".repeat(101));
        assert!(config.validate().is_err());

        let config = LintConfig {
            max_diagnostics: 0,
            ..LintConfig::default()
        };
        assert!(config.validate().is_err());
    }

    // ==================== Runner tests ====================

    #[test]
    fn test_disabled_rule_skipped() {
        let file = parse("*** Test Cases ***\nA\n    Log    x\n");
        let mut config = LintConfig::default();
        config.disable_rule("every-test");
        let runner = LintRunner::with_rules(config, vec![Box::new(EveryTest)]);
        assert!(runner.run(&file).is_empty());
    }

    #[test]
    fn test_escalation_and_min_severity() {
        let file = parse("*** Test Cases ***\nA\n    Log    x\n");
        let mut config = LintConfig::default();
        config.min_severity = Severity::Error;
        let runner = LintRunner::with_rules(config.clone(), vec![Box::new(EveryTest)]);
        assert!(runner.run(&file).is_empty());

        config.set_rule_error("every-test");
        let runner = LintRunner::with_rules(config, vec![Box::new(EveryTest)]);
        let diags = runner.run(&file);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity(), Severity::Error);
        assert!(runner.has_errors(&diags));
    }

    #[test]
    fn test_limit_enforced() {
        let file = parse("*** Test Cases ***\nA\n    Log    x\nB\n    Log    x\nC\n    Log    x\n");
        let config = LintConfig {
            max_diagnostics: 2,
            ..LintConfig::default()
        };
        let runner = LintRunner::with_rules(config, vec![Box::new(EveryTest)]);
        let diags = runner.run(&file);
        assert_eq!(diags.len(), 3);
        assert!(diags
            .iter()
            .any(|d| d.rule_id() == "lint-runner" && d.message().contains("limit of 2")));
    }

    #[test]
    fn test_sorted_by_severity_then_line() {
        let file = parse("*** Test Cases ***\nA\n    Log    x\nA\n    Log    y\n\n*** Keywords ***\nK\n");
        let runner = LintRunner::new(LintConfig::default());
        let diags = runner.run(&file);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].rule_id(), "empty-body");
        assert_eq!(diags[1].rule_id(), "duplicate-test");
    }

    #[test]
    fn test_add_rule() {
        let file = parse("*** Test Cases ***\nA\n    Log    x\n");
        let mut runner = LintRunner::new(LintConfig::default());
        runner.add_rule(Box::new(EveryTest));
        let diags = runner.run(&file);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message(), "A");
    }
}
