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

//! Shared test data fixtures and utilities for the rfdata crates.
//!
//! Fixtures are plain text so that every crate can use them without
//! depending on a particular build of the data model.
//!
//! # Quick Start
//!
//! ```rust
//! use rfdata_test::{fixtures, write_tree};
//!
//! let text = fixtures::MINIMAL;
//! assert!(text.starts_with("*** Test Cases ***"));
//!
//! let dir = write_tree(&[("suite/a.robot", fixtures::MINIMAL)]).unwrap();
//! assert!(dir.path().join("suite/a.robot").is_file());
//! ```

/// Canonical test data in every supported syntax.
pub mod fixtures;

mod tree;

pub use tree::write_tree;

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Honors `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Split text into lines the way the writer emits them.
pub fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}
