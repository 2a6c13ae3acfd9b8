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

//! Canonical test data fixtures.
//!
//! - **documents**: space separated files in canonical layout
//! - **formats**: the same kind of data in pipe, TSV and reST syntax
//! - **errors**: inputs that fail to parse or produce diagnostics

mod documents;
pub mod errors;
mod formats;

pub use documents::*;
pub use formats::*;

/// Every fixture as (name, text).
pub fn all() -> Vec<(&'static str, &'static str)> {
    let mut fixtures = round_trip();
    fixtures.extend([
        ("localized_fi", LOCALIZED_FI),
        ("pipe", PIPE),
        ("tsv", TSV),
        ("rst", RST),
        ("legacy", LEGACY),
    ]);
    fixtures
}

/// Fixtures that the writer reproduces byte for byte.
pub fn round_trip() -> Vec<(&'static str, &'static str)> {
    vec![
        ("minimal", MINIMAL),
        ("doc_continuation", DOC_CONTINUATION),
        ("for_loop", FOR_LOOP),
        ("rename", RENAME),
        ("full_suite", FULL_SUITE),
        ("resource", RESOURCE),
        ("tasks", TASKS),
        ("aligned", ALIGNED),
    ]
}
