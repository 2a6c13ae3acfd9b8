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

//! Error types for reading and writing test data.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RfErrorKind {
    /// Unparseable data that aborts the current file.
    Syntax,
    /// Structurally invalid data, such as tests and tasks in one file.
    Data,
    /// File system failure.
    Io,
    /// Unsupported or undetectable data format.
    Format,
    /// A command could not be applied to the model.
    Command,
    /// Invalid reader or writer configuration.
    Config,
    /// Input exceeded a configured limit.
    Limit,
}

impl fmt::Display for RfErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::Data => write!(f, "DataError"),
            Self::Io => write!(f, "IOError"),
            Self::Format => write!(f, "FormatError"),
            Self::Command => write!(f, "CommandError"),
            Self::Config => write!(f, "ConfigError"),
            Self::Limit => write!(f, "LimitError"),
        }
    }
}

/// An error that aborts the current operation.
#[derive(Debug, Clone, Error)]
#[error("{kind}{}: {message}", location(.path, .line))]
pub struct RfError {
    /// The kind of error.
    pub kind: RfErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Data source the error relates to.
    pub path: Option<PathBuf>,
    /// Line number (1-based).
    pub line: Option<usize>,
    /// Additional context (e.g., "while populating directory 'suite'").
    pub context: Option<String>,
}

fn location(path: &Option<PathBuf>, line: &Option<usize>) -> String {
    match (path, line) {
        (Some(path), Some(line)) => format!(" in '{}' at line {}", path.display(), line),
        (Some(path), None) => format!(" in '{}'", path.display()),
        (None, Some(line)) => format!(" at line {}", line),
        (None, None) => String::new(),
    }
}

impl RfError {
    /// Create a new error.
    pub fn new(kind: RfErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
            line: None,
            context: None,
        }
    }

    /// Attach the data source.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Attach a line number.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn syntax(message: impl Into<String>, line: usize) -> Self {
        Self::new(RfErrorKind::Syntax, message).with_line(line)
    }

    pub fn data(message: impl Into<String>) -> Self {
        Self::new(RfErrorKind::Data, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(RfErrorKind::Io, message)
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::new(RfErrorKind::Format, message)
    }

    pub fn command(message: impl Into<String>) -> Self {
        Self::new(RfErrorKind::Command, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(RfErrorKind::Config, message)
    }

    pub fn limit(message: impl Into<String>, line: usize) -> Self {
        Self::new(RfErrorKind::Limit, message).with_line(line)
    }

    /// Render the error the way Robot Framework reports data errors.
    pub fn report(&self) -> String {
        let source = self
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<string>".to_string());
        match self.line {
            Some(line) => format!("Error in file '{}' on line {}: {}", source, line, self.message),
            None => format!("Error in file '{}': {}", source, self.message),
        }
    }
}

impl From<std::io::Error> for RfError {
    fn from(err: std::io::Error) -> Self {
        RfError::io(err.to_string())
    }
}

/// Result type for rfdata operations.
pub type RfResult<T> = Result<T, RfError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== RfErrorKind Display tests ====================

    #[test]
    fn test_error_kind_display() {
        assert_eq!(RfErrorKind::Syntax.to_string(), "SyntaxError");
        assert_eq!(RfErrorKind::Data.to_string(), "DataError");
        assert_eq!(RfErrorKind::Io.to_string(), "IOError");
        assert_eq!(RfErrorKind::Format.to_string(), "FormatError");
        assert_eq!(RfErrorKind::Command.to_string(), "CommandError");
        assert_eq!(RfErrorKind::Config.to_string(), "ConfigError");
        assert_eq!(RfErrorKind::Limit.to_string(), "LimitError");
    }

    // ==================== RfError Display tests ====================

    #[test]
    fn test_error_display_with_path_and_line() {
        let err = RfError::syntax("invalid UTF-8", 3).with_path("suite/a.robot");
        assert_eq!(
            err.to_string(),
            "SyntaxError in 'suite/a.robot' at line 3: invalid UTF-8"
        );
    }

    #[test]
    fn test_error_display_without_location() {
        let err = RfError::command("row 7 does not exist");
        assert_eq!(err.to_string(), "CommandError: row 7 does not exist");
    }

    #[test]
    fn test_error_display_path_only() {
        let err = RfError::data("One file cannot have both tests and tasks.").with_path("x.robot");
        assert_eq!(
            err.to_string(),
            "DataError in 'x.robot': One file cannot have both tests and tasks."
        );
    }

    #[test]
    fn test_report_matches_robot_style() {
        let err = RfError::syntax("bad", 4).with_path("t.robot");
        assert_eq!(err.report(), "Error in file 't.robot' on line 4: bad");
        let err = RfError::data("bad");
        assert_eq!(err.report(), "Error in file '<string>': bad");
    }

    // ==================== Builder tests ====================

    #[test]
    fn test_error_chained_builders() {
        let err = RfError::io("denied")
            .with_path("/tmp/x")
            .with_line(2)
            .with_context("while saving");
        assert_eq!(err.kind, RfErrorKind::Io);
        assert_eq!(err.line, Some(2));
        assert_eq!(err.context.as_deref(), Some("while saving"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: RfError = io.into();
        assert_eq!(err.kind, RfErrorKind::Io);
        assert!(err.message.contains("missing"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(RfError::format("reST cannot be written"));
    }
}
