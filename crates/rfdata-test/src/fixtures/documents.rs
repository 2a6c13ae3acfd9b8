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

//! Space separated fixtures in canonical layout.

/// One test with one step.
pub const MINIMAL: &str = "\
*** Test Cases ***
Example
    Log    hello
";

/// Suite documentation spanning a continuation row.
pub const DOC_CONTINUATION: &str = "\
*** Settings ***
Documentation    First line
...    Second line
";

/// Finnish settings selected by the preamble directive.
pub const LOCALIZED_FI: &str = "\
Language: Fi

*** Asetukset ***
Dokumentaatio    text
";

/// A `FOR ... IN RANGE` loop.
pub const FOR_LOOP: &str = "\
*** Test Cases ***
Loop
    FOR    ${i}    IN RANGE    10
        Log    ${i}
    END
";

/// A keyword used as a suite setup and as a test step.
pub const RENAME: &str = "\
*** Settings ***
Suite Setup    Old Name

*** Test Cases ***
Example
    Old Name
    Log    done

*** Keywords ***
Old Name
    No Operation
";

/// Every section with typical content.
pub const FULL_SUITE: &str = "\
*** Settings ***
Documentation    Example suite
...    spanning two lines.
Library    Collections
Library    OperatingSystem    AS    OS
Resource    common.resource
Suite Setup    Prepare Environment    DEBUG
Test Tags    smoke

*** Variables ***
${GREETING}    Hello
@{NAMES}    Alice    Bob

*** Test Cases ***
Greet Everyone
    [Documentation]    Greets each name.
    [Tags]    greeting
    FOR    ${name}    IN    @{NAMES}
        Log    ${GREETING}, ${name}
    END
    # a comment
    ${count}=    Get Length    ${NAMES}
    Should Be Equal As Integers    ${count}    2

Prepared
    Prepare Environment    INFO
    Run Keyword If    ${TRUE}    Prepare Environment
    ...    ELSE    No Operation

*** Keywords ***
Prepare Environment
    [Arguments]    ${level}=INFO
    Set Log Level    ${level}
    [Return]    ${level}

*** Comments ***
free   form    notes
";

/// A resource file with variables and keywords.
pub const RESOURCE: &str = "\
*** Settings ***
Documentation    Shared keywords.
Library    String

*** Variables ***
${TIMEOUT}    10 s

*** Keywords ***
Open Session
    [Arguments]    ${user}
    Log    Opening ${user}

Close Session
    No Operation
";

/// Tasks instead of tests.
pub const TASKS: &str = "\
*** Tasks ***
Process Invoices
    Log    processing
";

/// Test and keyword tables whose headers name their columns.
pub const ALIGNED: &str = "\
*** Test Cases ***    Action    Argument
Aligned               Log       first
                      Log       second

*** Keywords ***      Action    Argument
Helper                Log       inside
                      ${x}=     Set Variable    value
";

/// Deprecated syntax that is still accepted.
pub const LEGACY: &str = "\
*** Setting ***
Force Tags    old
Suite Precondition    No Operation

*** Test Case ***
Legacy Loop
    :FOR    ${x}    IN    a    b
    \\    Log    ${x}
";
