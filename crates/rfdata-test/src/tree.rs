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

//! Temporary suite directories.

use std::fs;
use std::io;
use tempfile::TempDir;

/// Create a temporary directory holding `files` (relative path, contents).
///
/// Parent directories are created as needed. The tree is removed when the
/// returned handle is dropped.
pub fn write_tree(files: &[(&str, &str)]) -> io::Result<TempDir> {
    let dir = TempDir::new()?;
    for (relative, contents) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
    }
    Ok(dir)
}
