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

//! Directory suites: walking a tree of data files.
//!
//! Siblings are visited in case-insensitive lexical order. A file that
//! fails to parse is logged and recorded as a diagnostic on its directory;
//! the walk itself continues.

use crate::diagnostic::Diagnostic;
use crate::error::{RfError, RfErrorKind, RfResult};
use crate::model::files::{suite_name, DataFile, Suite, TestDataDirectory};
use crate::parser::{parse_init_file, parse_test_case_file, ReaderOptions};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// Extensions of suite files; resource files are never suites.
pub const SUITE_EXTENSIONS: &[&str] = &["robot", "txt", "tsv", "rst", "rest"];

const IGNORED_NAMES: &[&str] = &["CVS"];
const INIT_STEM: &str = "__init__";

/// Options for populating a directory suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOptions {
    pub reader: ReaderOptions,
    /// Suite name patterns; empty includes everything.
    pub include_suites: Vec<String>,
    pub extensions: Vec<String>,
    pub recursive: bool,
    /// Drop children that contain no tests or tasks.
    pub prune: bool,
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        Self {
            reader: ReaderOptions::default(),
            include_suites: Vec::new(),
            extensions: SUITE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            recursive: true,
            prune: true,
        }
    }
}

impl DirectoryOptions {
    pub fn builder() -> DirectoryOptionsBuilder {
        DirectoryOptionsBuilder::new()
    }
}

/// Builder for [`DirectoryOptions`].
///
/// ```text
/// let options = DirectoryOptions::builder()
///     .include_suite("login*")
///     .recursive(false)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectoryOptionsBuilder {
    options: DirectoryOptions,
}

impl DirectoryOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reader(mut self, reader: ReaderOptions) -> Self {
        self.options.reader = reader;
        self
    }

    pub fn include_suite(mut self, pattern: impl Into<String>) -> Self {
        self.options.include_suites.push(pattern.into());
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.options.recursive = recursive;
        self
    }

    pub fn prune(mut self, prune: bool) -> Self {
        self.options.prune = prune;
        self
    }

    pub fn build(self) -> DirectoryOptions {
        self.options
    }
}

/// Names compared by suite patterns: lowercase, no spaces or underscores.
fn normalize_suite(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compiled include patterns.
#[derive(Debug)]
struct SuiteMatcher {
    set: Option<GlobSet>,
}

impl SuiteMatcher {
    fn new(patterns: &[String]) -> RfResult<Self> {
        if patterns.is_empty() {
            return Ok(Self { set: None });
        }
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            // `Parent.Child` patterns match on the last component.
            let last = pattern.rsplit('.').next().unwrap_or(pattern);
            let glob = GlobBuilder::new(&normalize_suite(last))
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    RfError::config(format!("Invalid suite pattern '{}': {}", pattern, e))
                })?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|e| RfError::config(format!("Invalid suite patterns: {}", e)))?;
        Ok(Self { set: Some(set) })
    }

    fn includes_all(&self) -> bool {
        self.set.is_none()
    }

    fn matches(&self, path: &Path) -> bool {
        match &self.set {
            Some(set) => set.is_match(normalize_suite(&suite_name(path))),
            None => true,
        }
    }
}

fn extension_in(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

fn is_init_file(path: &Path, options: &DirectoryOptions) -> bool {
    path.file_stem()
        .map_or(false, |stem| stem.eq_ignore_ascii_case(INIT_STEM))
        && extension_in(path, &options.extensions)
}

fn is_ignored(name: &str) -> bool {
    name.starts_with('_') || name.starts_with('.') || IGNORED_NAMES.contains(&name)
}

fn failure(path: &Path, err: &RfError) -> Diagnostic {
    let diagnostic = Diagnostic::error(err.message.clone())
        .with_source(err.path.as_deref().unwrap_or(path));
    match err.line {
        Some(line) => diagnostic.with_line(line),
        None => diagnostic,
    }
}

struct Walker<'a> {
    options: &'a DirectoryOptions,
    matcher: SuiteMatcher,
}

impl Walker<'_> {
    fn entries(&self, path: &Path) -> RfResult<Vec<(PathBuf, bool)>> {
        let mut entries = Vec::new();
        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by(|a, b| {
                let a = a.file_name().to_string_lossy().to_lowercase();
                let b = b.file_name().to_string_lossy().to_lowercase();
                a.cmp(&b)
            });
        for entry in walker {
            let entry = entry.map_err(|e| {
                RfError::io(format!("Reading directory failed: {}", e)).with_path(path)
            })?;
            entries.push((entry.path().to_path_buf(), entry.file_type().is_dir()));
        }
        Ok(entries)
    }

    fn directory(&self, path: &Path, depth: usize, included: bool) -> RfResult<TestDataDirectory> {
        info!("Parsing directory '{}'", path.display());
        let mut dir = TestDataDirectory::new(path);
        let mut walk_diagnostics = Vec::new();
        let entries = self.entries(path)?;

        let (inits, others): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .partition(|(p, is_dir)| !is_dir && is_init_file(p, self.options));
        let mut inits = inits.into_iter();
        if let Some((init, _)) = inits.next() {
            match parse_init_file(&init, &self.options.reader) {
                Ok(data) => dir.data = data,
                Err(err) => {
                    error!("Parsing '{}' failed: {}", init.display(), err);
                    walk_diagnostics.push(failure(&init, &err));
                }
            }
        }
        for (extra, _) in inits {
            let diagnostic = Diagnostic::warning(format!(
                "Ignoring second test suite init file '{}'.",
                extra.display()
            ))
            .with_source(path);
            diagnostic.emit();
            walk_diagnostics.push(diagnostic);
        }

        for (entry, is_dir) in others {
            let name = entry
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if is_ignored(&name) {
                debug!("Ignoring file or directory '{}'.", entry.display());
                continue;
            }
            let child_included = included || self.matcher.matches(&entry);
            let child = if is_dir {
                if !self.options.recursive {
                    debug!("Not descending into '{}'.", entry.display());
                    continue;
                }
                let limit = self.options.reader.limits.max_directory_depth;
                if depth + 1 > limit {
                    let err = RfError::new(
                        RfErrorKind::Limit,
                        format!("Directory nesting exceeds {} levels.", limit),
                    )
                    .with_path(&entry);
                    error!("Parsing '{}' failed: {}", entry.display(), err);
                    walk_diagnostics.push(failure(&entry, &err));
                    continue;
                }
                match self.directory(&entry, depth + 1, child_included) {
                    Ok(child) => Suite::Directory(child),
                    Err(err) => {
                        error!("Parsing '{}' failed: {}", entry.display(), err);
                        walk_diagnostics.push(failure(&entry, &err));
                        continue;
                    }
                }
            } else {
                if !extension_in(&entry, &self.options.extensions) {
                    debug!("Ignoring file '{}'.", entry.display());
                    continue;
                }
                if !child_included {
                    debug!("Suite '{}' not included.", suite_name(&entry));
                    continue;
                }
                match parse_test_case_file(&entry, &self.options.reader) {
                    Ok(file) => Suite::File(file),
                    Err(err) => {
                        error!("Parsing '{}' failed: {}", entry.display(), err);
                        walk_diagnostics.push(failure(&entry, &err));
                        continue;
                    }
                }
            };
            if self.options.prune && !child.has_tests() {
                debug!("Pruning suite '{}' without tests.", child.name());
                continue;
            }
            dir.children.push(child);
        }
        dir.data.diagnostics.extend(walk_diagnostics);
        Ok(dir)
    }
}

/// Populate a directory suite.
pub fn parse_directory(
    path: impl AsRef<Path>,
    options: &DirectoryOptions,
) -> RfResult<TestDataDirectory> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(RfError::io("Not a directory").with_path(path));
    }
    let walker = Walker {
        options,
        matcher: SuiteMatcher::new(&options.include_suites)?,
    };
    let included = walker.matcher.includes_all() || walker.matcher.matches(path);
    walker.directory(path, 0, included)
}

/// Populate a suite from a file or a directory.
pub fn parse_suite(path: impl AsRef<Path>, options: &DirectoryOptions) -> RfResult<Suite> {
    let path = path.as_ref();
    if path.is_dir() {
        parse_directory(path, options).map(Suite::Directory)
    } else {
        let file = parse_test_case_file(path, &options.reader)?;
        if !file.has_tests() {
            warn!("File '{}' contains no tests or tasks.", path.display());
        }
        Ok(Suite::File(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TEST_DATA: &str = "*** Test Cases ***\nT\n    No Operation\n";

    fn tree(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            let path = temp.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        temp
    }

    fn names(dir: &TestDataDirectory) -> Vec<String> {
        dir.children.iter().map(Suite::name).collect()
    }

    // ==================== Walk tests ====================

    #[test]
    fn test_children_sorted_case_insensitively() {
        let temp = tree(&[
            ("b.robot", TEST_DATA),
            ("A.robot", TEST_DATA),
            ("c.txt", TEST_DATA),
        ]);
        let dir = parse_directory(temp.path(), &DirectoryOptions::default()).unwrap();
        assert_eq!(names(&dir), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_ignored_entries() {
        let temp = tree(&[
            ("_private.robot", TEST_DATA),
            (".hidden.robot", TEST_DATA),
            ("CVS/x.robot", TEST_DATA),
            ("common.resource", "*** Keywords ***\nK\n    No Operation\n"),
            ("notes.md", "x"),
            ("real.robot", TEST_DATA),
        ]);
        let dir = parse_directory(temp.path(), &DirectoryOptions::default()).unwrap();
        assert_eq!(names(&dir), vec!["Real"]);
    }

    #[test]
    fn test_init_file_and_extra_init_warning() {
        let temp = tree(&[
            ("__init__.robot", "*** Settings ***\nDocumentation    Suite doc\n"),
            ("__init__.txt", "*** Settings ***\n"),
            ("a.robot", TEST_DATA),
        ]);
        let dir = parse_directory(temp.path(), &DirectoryOptions::default()).unwrap();
        assert_eq!(dir.tables().settings.doc.value, "Suite doc");
        assert!(dir.init_file().unwrap().ends_with("__init__.robot"));
        assert!(dir
            .diagnostics()
            .iter()
            .any(|d| d.message().starts_with("Ignoring second test suite init file")));
    }

    #[test]
    fn test_failing_file_does_not_abort_walk() {
        let temp = tree(&[
            ("bad.robot", "*** Test Cases ***\nT\n    X\n*** Tasks ***\nJ\n    X\n"),
            ("good.robot", TEST_DATA),
        ]);
        let dir = parse_directory(temp.path(), &DirectoryOptions::default()).unwrap();
        assert_eq!(names(&dir), vec!["Good"]);
        assert!(dir.has_errors());
    }

    #[test]
    fn test_pruning_and_nested_directories() {
        let temp = tree(&[
            ("sub/deep/t.robot", TEST_DATA),
            ("empty/k.robot", "*** Keywords ***\nK\n    No Operation\n"),
        ]);
        let dir = parse_directory(temp.path(), &DirectoryOptions::default()).unwrap();
        assert_eq!(names(&dir), vec!["Sub"]);
        assert_eq!(dir.files().len(), 1);

        let options = DirectoryOptions::builder().prune(false).build();
        let dir = parse_directory(temp.path(), &options).unwrap();
        assert_eq!(names(&dir), vec!["Empty", "Sub"]);
    }

    #[test]
    fn test_non_recursive() {
        let temp = tree(&[("sub/t.robot", TEST_DATA), ("top.robot", TEST_DATA)]);
        let options = DirectoryOptions::builder().recursive(false).build();
        let dir = parse_directory(temp.path(), &options).unwrap();
        assert_eq!(names(&dir), vec!["Top"]);
    }

    #[test]
    fn test_include_patterns() {
        let temp = tree(&[
            ("login/a.robot", TEST_DATA),
            ("login/nested/b.robot", TEST_DATA),
            ("other/c.robot", TEST_DATA),
            ("other/login_extra.robot", TEST_DATA),
        ]);
        let options = DirectoryOptions::builder().include_suite("Login*").build();
        let dir = parse_directory(temp.path(), &options).unwrap();
        assert_eq!(names(&dir), vec!["Login", "Other"]);
        assert_eq!(dir.files().len(), 3);
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let temp = tree(&[("x/1.robot", TEST_DATA), ("y.robot", TEST_DATA)]);
        let options = DirectoryOptions::default();
        let first = parse_directory(temp.path(), &options).unwrap();
        let second = parse_directory(temp.path(), &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_depth_limit() {
        let temp = tree(&[("a/t.robot", TEST_DATA)]);
        let mut options = DirectoryOptions::default();
        options.reader.limits.max_directory_depth = 0;
        let dir = parse_directory(temp.path(), &options).unwrap();
        assert!(dir.children.is_empty());
        assert!(dir.has_errors());
    }

    #[test]
    fn test_parse_suite_for_file_and_missing_directory() {
        let temp = tree(&[("one.robot", TEST_DATA)]);
        let suite = parse_suite(temp.path().join("one.robot"), &DirectoryOptions::default())
            .unwrap();
        assert!(matches!(suite, Suite::File(_)));
        assert!(parse_directory(temp.path().join("missing"), &DirectoryOptions::default())
            .is_err());
    }

    #[test]
    fn test_normalize_suite() {
        assert_eq!(normalize_suite("My Suite_Name"), "mysuitename");
    }
}
