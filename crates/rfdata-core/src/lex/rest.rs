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

//! Extraction of test data from reStructuredText code blocks.

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*\.\.\s+(code|code-block|sourcecode)::\s*(robotframework|robot)\s*$")
        .expect("valid directive regex")
});

/// Return the lines inside `.. code:: robotframework` blocks, dedented and
/// paired with their original line numbers.
pub fn extract_code_blocks<'a, I>(lines: I) -> Vec<(usize, String)>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut out = Vec::new();
    let mut in_block = false;
    let mut block_indent: Option<usize> = None;
    let mut pending_blank: Vec<usize> = Vec::new();

    for (num, line) in lines {
        if CODE_DIRECTIVE.is_match(line) {
            in_block = true;
            block_indent = None;
            pending_blank.clear();
            continue;
        }
        if !in_block {
            continue;
        }
        if line.trim().is_empty() {
            if block_indent.is_some() {
                pending_blank.push(num);
            }
            continue;
        }
        let indent = line.len() - line.trim_start().len();
        if indent == 0 {
            in_block = false;
            pending_blank.clear();
            continue;
        }
        if block_indent.is_none() && line.trim_start().starts_with(':') {
            // Directive option such as `:class: example`.
            continue;
        }
        let base = *block_indent.get_or_insert(indent);
        for blank in pending_blank.drain(..) {
            out.push((blank, String::new()));
        }
        let cut = indent.min(base);
        out.push((num, line.get(cut..).unwrap_or(line.trim_start()).to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(text: &str) -> Vec<(usize, &str)> {
        text.lines().enumerate().map(|(i, l)| (i + 1, l)).collect()
    }

    #[test]
    fn test_extracts_robot_blocks_only() {
        let text = "Title\n=====\n\n.. code:: robotframework\n\n   *** Test Cases ***\n   Example\n       Log    hi\n\nText after.\n\n.. code:: python\n\n   print('x')\n";
        let lines = extract_code_blocks(numbered(text));
        assert_eq!(
            lines,
            vec![
                (6, "*** Test Cases ***".to_string()),
                (7, "Example".to_string()),
                (8, "    Log    hi".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_lines_inside_block_kept() {
        let text = ".. code-block:: robot\n\n  *** Keywords ***\n\n  Kw\n      No Operation\n";
        let lines = extract_code_blocks(numbered(text));
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], (4, String::new()));
    }

    #[test]
    fn test_directive_options_skipped() {
        let text = ".. sourcecode:: robotframework\n   :class: example\n\n   *** Settings ***\n";
        let lines = extract_code_blocks(numbered(text));
        assert_eq!(lines, vec![(4, "*** Settings ***".to_string())]);
    }
}
