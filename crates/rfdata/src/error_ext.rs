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

//! Error context helpers.
//!
//! Extension methods for results that attach a context string to an
//! [`RfError`] while it propagates, and convert I/O errors on the way.
//!
//! # Examples
//!
//! ```rust
//! use rfdata::{parse, DataFile, RfResultExt};
//!
//! fn load_suite(name: &str, text: &str) -> rfdata::RfResult<rfdata::TestCaseFile> {
//!     parse(text).with_context(|| format!("while loading suite '{}'", name))
//! }
//!
//! let file = load_suite("demo", "*** Test Cases ***\nT\n    Log    x\n").unwrap();
//! assert_eq!(file.tables().tests.tests.len(), 1);
//! ```
//!
//! Context chains with the outermost layer first:
//!
//! ```rust
//! use rfdata::{RfError, RfResultExt};
//!
//! let result: Result<(), RfError> = Err(RfError::command("No rows selected."));
//! let err = result
//!     .context("in test 'Login'")
//!     .context("while deleting rows")
//!     .unwrap_err();
//! assert_eq!(err.context.as_deref(), Some("while deleting rows; in test 'Login'"));
//! ```

use crate::RfError;
use std::fmt;

/// Extension trait for adding context to results.
pub trait RfResultExt<T> {
    /// The error type of this result.
    type ErrorType;

    /// Add context to an error. An empty context is ignored.
    fn context<C>(self, context: C) -> Result<T, RfError>
    where
        C: fmt::Display;

    /// Add context computed only when there is an error.
    fn with_context<C, F>(self, f: F) -> Result<T, RfError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;

    /// Convert a foreign error into an [`RfError`].
    ///
    /// ```rust
    /// use rfdata::{RfError, RfResultExt};
    ///
    /// fn read(path: &str) -> Result<String, RfError> {
    ///     std::fs::read_to_string(path)
    ///         .map_err_to_rf(|e| RfError::io(e.to_string()).with_path(path))
    /// }
    ///
    /// assert!(read("/definitely/not/here.robot").is_err());
    /// ```
    fn map_err_to_rf<F>(self, f: F) -> Result<T, RfError>
    where
        F: FnOnce(Self::ErrorType) -> RfError;
}

impl<T> RfResultExt<T> for Result<T, RfError> {
    type ErrorType = RfError;

    fn context<C>(self, context: C) -> Result<T, RfError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, RfError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context(e, f().to_string()))
    }

    fn map_err_to_rf<F>(self, f: F) -> Result<T, RfError>
    where
        F: FnOnce(Self::ErrorType) -> RfError,
    {
        self.map_err(f)
    }
}

impl<T> RfResultExt<T> for Result<T, std::io::Error> {
    type ErrorType = std::io::Error;

    fn context<C>(self, context: C) -> Result<T, RfError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context(RfError::io(e.to_string()), context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, RfError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context(RfError::io(e.to_string()), f().to_string()))
    }

    fn map_err_to_rf<F>(self, f: F) -> Result<T, RfError>
    where
        F: FnOnce(Self::ErrorType) -> RfError,
    {
        self.map_err(f)
    }
}

/// Prepend `new_context` to the error's context: `"new; existing"`.
fn add_context(mut error: RfError, new_context: String) -> RfError {
    if new_context.is_empty() {
        return error;
    }
    error.context = Some(match error.context.take() {
        Some(existing) => format!("{}; {}", new_context, existing),
        None => new_context,
    });
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RfErrorKind;
    use std::io;

    // ==================== context() tests ====================

    #[test]
    fn test_context_on_error() {
        let result: Result<(), RfError> = Err(RfError::syntax("bad row", 5));
        let err = result.context("in file a.robot").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("in file a.robot"));
        assert_eq!(err.line, Some(5));
        assert_eq!(err.kind, RfErrorKind::Syntax);
    }

    #[test]
    fn test_context_on_ok() {
        let result: Result<i32, RfError> = Ok(42);
        assert_eq!(result.context("unused").unwrap(), 42);
    }

    #[test]
    fn test_context_chaining() {
        let result: Result<(), RfError> = Err(RfError::data("tests and tasks mixed"));
        let err = result
            .context("in suite 'Inner'")
            .context("while walking 'Outer'")
            .unwrap_err();
        assert_eq!(
            err.context.as_deref(),
            Some("while walking 'Outer'; in suite 'Inner'")
        );
    }

    #[test]
    fn test_context_empty_string() {
        let result: Result<(), RfError> = Err(RfError::format("unknown extension"));
        assert!(result.context("").unwrap_err().context.is_none());
    }

    #[test]
    fn test_context_preserves_fields() {
        let original = RfError::syntax("bad", 3).with_path("suite.robot");
        let err = Err::<(), _>(original).context("extra").unwrap_err();
        assert_eq!(err.message, "bad");
        assert_eq!(err.path.as_deref(), Some(std::path::Path::new("suite.robot")));
    }

    // ==================== with_context() tests ====================

    #[test]
    fn test_with_context_lazy() {
        let mut called = false;
        let result: Result<i32, RfError> = Ok(1);
        let _ = result.with_context(|| {
            called = true;
            "never"
        });
        assert!(!called);
    }

    #[test]
    fn test_with_context_on_error() {
        let result: Result<(), RfError> = Err(RfError::command("No rows selected."));
        let err = result
            .with_context(|| format!("in test #{}", 2))
            .unwrap_err();
        assert_eq!(err.context.as_deref(), Some("in test #2"));
    }

    // ==================== io::Error tests ====================

    #[test]
    fn test_io_error_context() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = result.context("reading suite").unwrap_err();
        assert_eq!(err.kind, RfErrorKind::Io);
        assert_eq!(err.message, "gone");
        assert_eq!(err.context.as_deref(), Some("reading suite"));
    }

    #[test]
    fn test_map_err_to_rf() {
        let result: Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = result
            .map_err_to_rf(|e| RfError::config(format!("settings file: {}", e)))
            .unwrap_err();
        assert_eq!(err.kind, RfErrorKind::Config);
        assert!(err.message.contains("denied"));
    }
}
