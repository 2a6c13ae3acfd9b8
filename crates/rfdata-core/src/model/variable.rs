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

//! Variable table entries.

use crate::lex::tokens::{split_assign_suffix, variable_kind, VariableKind};

/// One entry of a variables table.
///
/// An entry with an empty name is a row kept for layout only: blank,
/// comment-only, or data without a name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Variable {
    /// Variable name without a trailing `=`.
    pub name: String,
    /// The `=`/space suffix as written after the name.
    pub suffix: String,
    pub value: Vec<String>,
    pub comment: Vec<String>,
    pub line: Option<usize>,
}

impl Variable {
    /// Build from the cells of a variables table row.
    ///
    /// A scalar without a value gets one empty value; list and dictionary
    /// variables stay empty.
    pub fn new(
        name_cell: &str,
        value: Vec<String>,
        comment: Vec<String>,
        line: Option<usize>,
    ) -> Self {
        let (name, suffix) = split_assign_suffix(name_cell);
        let mut value = value;
        if value.is_empty() && variable_kind(name) == Some(VariableKind::Scalar) {
            value.push(String::new());
        }
        Self {
            name: name.to_string(),
            suffix: suffix.to_string(),
            value,
            comment,
            line,
        }
    }

    /// Blank, comment-only or nameless row, kept with its cells as read.
    pub fn layout_row(comment: Vec<String>, line: Option<usize>) -> Self {
        Self {
            comment,
            line,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> Option<VariableKind> {
        variable_kind(&self.name)
    }

    pub fn has_data(&self) -> bool {
        !self.name.is_empty()
    }

    /// Cells as written. The sole empty value of a scalar is omitted.
    pub fn as_list(&self) -> Vec<String> {
        if !self.has_data() {
            return self.comment.clone();
        }
        let mut cells = vec![format!("{}{}", self.name, self.suffix)];
        let lone_empty_scalar = self.kind() == Some(VariableKind::Scalar)
            && self.value.len() == 1
            && self.value[0].is_empty();
        if !lone_empty_scalar {
            cells.extend(self.value.iter().cloned());
        }
        cells.extend(self.comment.iter().cloned());
        cells
    }

    /// Append continuation values.
    pub fn extend(&mut self, values: &[String], comment: &[String]) {
        if self.kind() == Some(VariableKind::Scalar)
            && self.value.len() == 1
            && self.value[0].is_empty()
            && !values.is_empty()
        {
            self.value.clear();
        }
        self.value.extend(values.iter().cloned());
        self.comment.extend(comment.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_scalar_without_value() {
        let v = Variable::new("${x}", vec![], vec![], Some(2));
        assert_eq!(v.value, s(&[""]));
        assert_eq!(v.as_list(), s(&["${x}"]));
    }

    #[test]
    fn test_list_without_value() {
        let v = Variable::new("@{x}", vec![], vec![], None);
        assert!(v.value.is_empty());
        assert_eq!(v.kind(), Some(VariableKind::List));
    }

    #[test]
    fn test_suffix_preserved() {
        let v = Variable::new("${x} =", s(&["1"]), vec![], None);
        assert_eq!(v.name, "${x}");
        assert_eq!(v.suffix, " =");
        assert_eq!(v.as_list(), s(&["${x} =", "1"]));
    }

    #[test]
    fn test_layout_rows() {
        let blank = Variable::layout_row(vec![], Some(5));
        assert!(!blank.has_data());
        assert!(blank.as_list().is_empty());
        let comment = Variable::layout_row(s(&["# note"]), None);
        assert_eq!(comment.as_list(), s(&["# note"]));
    }

    #[test]
    fn test_extend_replaces_placeholder() {
        let mut v = Variable::new("${long}", vec![], vec![], None);
        v.extend(&s(&["a", "b"]), &[]);
        assert_eq!(v.value, s(&["a", "b"]));
        let mut l = Variable::new("@{l}", s(&["a"]), vec![], None);
        l.extend(&s(&["b"]), &s(&["# c"]));
        assert_eq!(l.as_list(), s(&["@{l}", "a", "b", "# c"]));
    }

    #[test]
    fn test_invalid_name_kept() {
        let v = Variable::new("notavar", s(&["1"]), vec![], None);
        assert_eq!(v.kind(), None);
        assert_eq!(v.as_list(), s(&["notavar", "1"]));
    }
}
