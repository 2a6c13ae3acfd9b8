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

//! Fixtures in pipe, TSV and reStructuredText syntax.

/// Pipe separated test data.
pub const PIPE: &str = "\
| *** Settings *** |
| Documentation | Pipe data |

| *** Test Cases *** |
| Example |
|         | Log | hello |
";

/// Tab separated test data.
pub const TSV: &str = "\
*Settings*
Documentation\tTSV data

*Test Cases*
Example
\tLog\thello
";

/// Test data embedded in a reStructuredText document.
pub const RST: &str = "\
Example suite
=============

Some prose.

.. code:: robotframework

   *** Test Cases ***
   Example
       Log    hello

More prose.
";
