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

//! Top-level containers: test case files, resource files and directories.

use super::tables::{DataTables, SettingTableKind};
use crate::diagnostic::{Diagnostic, Severity};
use crate::language::{Languages, SectionKind};
use crate::lex::reader::DataFormat;
use crate::preprocess::LineEnding;
use std::path::{Path, PathBuf};

/// What a parsed file is used as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    TestCase,
    Resource,
    Init,
}

impl FileKind {
    pub fn setting_table_kind(&self) -> SettingTableKind {
        match self {
            Self::TestCase => SettingTableKind::TestCaseFile,
            Self::Resource => SettingTableKind::ResourceFile,
            Self::Init => SettingTableKind::InitFile,
        }
    }
}

/// Whether a suite holds tests or tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuiteMode {
    #[default]
    Tests,
    Tasks,
}

impl SuiteMode {
    pub fn section_kind(&self) -> SectionKind {
        match self {
            Self::Tests => SectionKind::TestCases,
            Self::Tasks => SectionKind::Tasks,
        }
    }
}

/// State shared by every parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileData {
    pub source: Option<PathBuf>,
    pub format: DataFormat,
    /// Indentation unit detected while reading.
    pub separating_spaces: usize,
    /// Lines before the first section header, verbatim.
    pub preamble: Vec<String>,
    pub languages: Languages,
    pub line_ending: LineEnding,
    pub tables: DataTables,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileData {
    pub fn new(kind: FileKind) -> Self {
        Self {
            source: None,
            format: DataFormat::Space,
            separating_spaces: 4,
            preamble: Vec::new(),
            languages: Languages::english(),
            line_ending: LineEnding::Lf,
            tables: DataTables::new(kind.setting_table_kind()),
            diagnostics: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Uniform access to parsed files and directories.
pub trait DataFile {
    fn data(&self) -> &FileData;
    fn data_mut(&mut self) -> &mut FileData;
    fn kind(&self) -> FileKind;

    fn source(&self) -> Option<&Path> {
        self.data().source.as_deref()
    }

    fn tables(&self) -> &DataTables {
        &self.data().tables
    }

    fn tables_mut(&mut self) -> &mut DataTables {
        &mut self.data_mut().tables
    }

    fn languages(&self) -> &Languages {
        &self.data().languages
    }

    fn preamble(&self) -> &[String] {
        &self.data().preamble
    }

    fn diagnostics(&self) -> &[Diagnostic] {
        &self.data().diagnostics
    }

    fn has_errors(&self) -> bool {
        self.diagnostics()
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }

    fn mode(&self) -> SuiteMode {
        if self.tables().tests.tasks {
            SuiteMode::Tasks
        } else {
            SuiteMode::Tests
        }
    }

    fn has_tests(&self) -> bool {
        self.tables().has_tests()
    }
}

/// A file holding tests or tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseFile {
    pub data: FileData,
}

impl TestCaseFile {
    pub fn new() -> Self {
        Self {
            data: FileData::new(FileKind::TestCase),
        }
    }
}

impl Default for TestCaseFile {
    fn default() -> Self {
        Self::new()
    }
}

impl DataFile for TestCaseFile {
    fn data(&self) -> &FileData {
        &self.data
    }
    fn data_mut(&mut self) -> &mut FileData {
        &mut self.data
    }
    fn kind(&self) -> FileKind {
        FileKind::TestCase
    }
}

/// A resource file: settings, variables and keywords only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    pub data: FileData,
}

impl ResourceFile {
    pub fn new() -> Self {
        Self {
            data: FileData::new(FileKind::Resource),
        }
    }

    /// `.resource` files must not hold tests when saved.
    pub fn is_strict(&self) -> bool {
        self.data
            .source
            .as_deref()
            .and_then(|p| p.extension())
            .map_or(false, |e| e.eq_ignore_ascii_case("resource"))
    }
}

impl Default for ResourceFile {
    fn default() -> Self {
        Self::new()
    }
}

impl DataFile for ResourceFile {
    fn data(&self) -> &FileData {
        &self.data
    }
    fn data_mut(&mut self) -> &mut FileData {
        &mut self.data
    }
    fn kind(&self) -> FileKind {
        FileKind::Resource
    }
    fn has_tests(&self) -> bool {
        false
    }
}

/// A directory suite. Its tables come from the init file, when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDataDirectory {
    pub path: PathBuf,
    /// Init file contents; `data.source` is the init file path.
    pub data: FileData,
    pub children: Vec<Suite>,
}

impl TestDataDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            data: FileData::new(FileKind::Init),
            children: Vec::new(),
        }
    }

    pub fn init_file(&self) -> Option<&Path> {
        self.data.source.as_deref()
    }

    /// Suite name derived from the directory name.
    pub fn name(&self) -> String {
        suite_name(&self.path)
    }

    /// Depth-first iteration over every file suite below this directory.
    pub fn files(&self) -> Vec<&TestCaseFile> {
        let mut files = Vec::new();
        for child in &self.children {
            match child {
                Suite::File(file) => files.push(file),
                Suite::Directory(dir) => files.extend(dir.files()),
            }
        }
        files
    }
}

impl DataFile for TestDataDirectory {
    fn data(&self) -> &FileData {
        &self.data
    }
    fn data_mut(&mut self) -> &mut FileData {
        &mut self.data
    }
    fn kind(&self) -> FileKind {
        FileKind::Init
    }
    fn has_tests(&self) -> bool {
        self.children.iter().any(Suite::has_tests)
    }
}

/// A child of a directory suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suite {
    Directory(TestDataDirectory),
    File(TestCaseFile),
}

impl Suite {
    pub fn has_tests(&self) -> bool {
        match self {
            Self::Directory(dir) => dir.has_tests(),
            Self::File(file) => file.has_tests(),
        }
    }

    pub fn as_data_file(&self) -> &dyn DataFile {
        match self {
            Self::Directory(dir) => dir,
            Self::File(file) => file,
        }
    }

    /// Suite name: the file or directory name without extension and
    /// ordering prefix, underscores as spaces.
    pub fn name(&self) -> String {
        match self {
            Self::Directory(dir) => dir.name(),
            Self::File(file) => file.source().map(suite_name).unwrap_or_default(),
        }
    }
}

/// `01__my_suite.robot` becomes `My Suite`.
pub fn suite_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match stem.split_once("__") {
        Some((prefix, rest)) if !prefix.is_empty() && !rest.is_empty() => rest.to_string(),
        _ => stem,
    };
    let spaced = stem.replace('_', " ");
    if spaced.chars().any(char::is_uppercase) {
        return spaced;
    }
    spaced
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
