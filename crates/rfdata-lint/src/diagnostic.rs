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

//! Lint diagnostic types

use rfdata_core::{Diagnostic, Severity};
use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of lint finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintKind {
    /// Two keywords whose names normalize to the same value
    DuplicateKeyword,
    /// Two tests or tasks whose names normalize to the same value
    DuplicateTest,
    /// Test, task or keyword without steps
    EmptyBody,
    /// Name that is not a usable variable
    InvalidVariableName,
    /// Deprecated setting or syntax
    DeprecatedSetting,
    /// Custom rule violation
    Custom(String),
}

/// A finding reported by a lint rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    severity: Severity,
    kind: LintKind,
    message: String,
    line: Option<usize>,
    source: Option<PathBuf>,
    /// Rule ID that generated this diagnostic
    rule_id: String,
    suggestion: Option<String>,
}

impl LintDiagnostic {
    pub fn new(
        severity: Severity,
        kind: LintKind,
        message: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            message: message.into(),
            line: None,
            source: None,
            rule_id: rule_id.into(),
            suggestion: None,
        }
    }

    pub fn warning(kind: LintKind, message: impl Into<String>, rule_id: impl Into<String>) -> Self {
        Self::new(Severity::Warning, kind, message, rule_id)
    }

    pub fn error(kind: LintKind, message: impl Into<String>, rule_id: impl Into<String>) -> Self {
        Self::new(Severity::Error, kind, message, rule_id)
    }

    pub fn info(kind: LintKind, message: impl Into<String>, rule_id: impl Into<String>) -> Self {
        Self::new(Severity::Info, kind, message, rule_id)
    }

    pub fn with_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    pub fn with_source(mut self, source: Option<&Path>) -> Self {
        self.source = source.map(Path::to_path_buf);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn kind(&self) -> &LintKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Escalate the severity to error level (used by the lint runner).
    pub fn escalate_to_error(&mut self) {
        self.severity = Severity::Error;
    }

    /// Same finding as a reader diagnostic, for reporting alongside parse
    /// problems.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diagnostic =
            Diagnostic::new(self.severity, format!("[{}] {}", self.rule_id, self.message));
        if let Some(line) = self.line {
            diagnostic = diagnostic.with_line(line);
        }
        if let Some(source) = &self.source {
            diagnostic = diagnostic.with_source(source);
        }
        if let Some(suggestion) = &self.suggestion {
            diagnostic = diagnostic.with_suggestion(suggestion.clone());
        }
        diagnostic
    }
}

impl fmt::Display for LintDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "{}: ", source.display())?;
        }
        if let Some(line) = self.line {
            write!(f, "line {}: ", line)?;
        }

        write!(f, "[{}] {}: {}", self.rule_id, self.severity, self.message)?;

        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({})", suggestion)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction tests ====================

    #[test]
    fn test_constructors_set_severity() {
        let w = LintDiagnostic::warning(LintKind::EmptyBody, "m", "empty-body");
        let e = LintDiagnostic::error(LintKind::DuplicateKeyword, "m", "duplicate-keyword");
        let i = LintDiagnostic::info(LintKind::Custom("x".into()), "m", "x");
        assert_eq!(w.severity(), Severity::Warning);
        assert_eq!(e.severity(), Severity::Error);
        assert_eq!(i.severity(), Severity::Info);
        assert_eq!(w.rule_id(), "empty-body");
        assert_eq!(w.kind(), &LintKind::EmptyBody);
    }

    #[test]
    fn test_builders() {
        let d = LintDiagnostic::warning(LintKind::DeprecatedSetting, "old", "deprecated-setting")
            .with_line(Some(3))
            .with_source(Some(Path::new("suite.robot")))
            .with_suggestion("Use 'Test Tags' instead.");
        assert_eq!(d.line(), Some(3));
        assert_eq!(d.source(), Some(Path::new("suite.robot")));
        assert_eq!(d.suggestion(), Some("Use 'Test Tags' instead."));
        assert_eq!(d.message(), "old");
    }

    #[test]
    fn test_escalate() {
        let mut d = LintDiagnostic::warning(LintKind::EmptyBody, "m", "empty-body");
        d.escalate_to_error();
        assert_eq!(d.severity(), Severity::Error);
    }

    // ==================== Display tests ====================

    #[test]
    fn test_display_full() {
        let d = LintDiagnostic::warning(LintKind::EmptyBody, "Keyword 'K' is empty.", "empty-body")
            .with_line(Some(7))
            .with_suggestion("Add a step");
        assert_eq!(
            d.to_string(),
            "line 7: [empty-body] warning: Keyword 'K' is empty. (Add a step)"
        );
    }

    #[test]
    fn test_display_minimal() {
        let d = LintDiagnostic::error(LintKind::DuplicateTest, "dup", "duplicate-test");
        assert_eq!(d.to_string(), "[duplicate-test] error: dup");
    }

    #[test]
    fn test_to_diagnostic() {
        let d = LintDiagnostic::warning(LintKind::EmptyBody, "empty", "empty-body")
            .with_line(Some(2))
            .with_source(Some(Path::new("a.robot")));
        let core = d.to_diagnostic();
        assert_eq!(core.severity(), Severity::Warning);
        assert_eq!(core.line(), Some(2));
        assert_eq!(core.message(), "[empty-body] empty");
        assert_eq!(core.source(), Some(Path::new("a.robot")));
    }
}
