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

//! Inputs that fail to parse or produce diagnostics.

/// Files rejected as a whole: (name, text, expected message).
pub fn invalid_files() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        (
            "tests_and_tasks",
            "*** Test Cases ***\nT\n    No Operation\n*** Tasks ***\nJ\n    No Operation\n",
            "One file cannot have both tests and tasks.",
        ),
        (
            "tasks_and_tests",
            "*** Tasks ***\nJ\n    No Operation\n*** Test Cases ***\nT\n    No Operation\n",
            "One file cannot have both tests and tasks.",
        ),
    ]
}

/// Files accepted with a warning: (name, text, expected message prefix).
pub fn warning_files() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        (
            "unknown_setting",
            "*** Settings ***\nBogus Setting    x\n",
            "Non-existing setting 'Bogus Setting'.",
        ),
        (
            "duplicate_setting",
            "*** Settings ***\nSuite Setup    A\nSuite Setup    B\n",
            "Setting 'Suite Setup' is allowed only once.",
        ),
        (
            "duplicate_section",
            "*** Settings ***\n*** Settings ***\n",
            "Duplicate section name at line 2",
        ),
        (
            "dots_as_name",
            "*** Test Cases ***\n...\n    No Operation\n",
            "Using '...' as a test case name is deprecated.",
        ),
        (
            "lone_continuation",
            "*** Settings ***\n...\n",
            "Ignoring lone line continuation marker",
        ),
        (
            "deprecated_setting",
            "*** Settings ***\nForce Tags    a\n",
            "Setting 'Force Tags' is deprecated.",
        ),
        (
            "nameless_variable",
            "*** Variables ***\n    x\n",
            "Variable row without a name.",
        ),
    ]
}
