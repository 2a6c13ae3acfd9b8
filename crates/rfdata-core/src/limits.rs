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

//! Resource limits for reading test data.

/// Configurable limits applied while reading a data source.
///
/// These bound the memory consumed by a single file so that a directory walk
/// over untrusted sources cannot exhaust the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum file size in bytes (default: 64MB).
    pub max_file_size: usize,
    /// Maximum line length in bytes (default: 1MB).
    pub max_line_length: usize,
    /// Maximum number of cells in one row (default: 10k).
    pub max_cells_per_row: usize,
    /// Maximum directory depth when populating a suite tree (default: 64).
    pub max_directory_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: 64 * 1024 * 1024, // 64MB
            max_line_length: 1024 * 1024,    // 1MB
            max_cells_per_row: 10_000,
            max_directory_depth: 64,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_file_size: usize::MAX,
            max_line_length: usize::MAX,
            max_cells_per_row: usize::MAX,
            max_directory_depth: usize::MAX,
        }
    }
}
