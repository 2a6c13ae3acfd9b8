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

//! Token classification for variables and control markers.
//!
//! - Variables: `${scalar}`, `@{list}`, `&{dict}`, `%{ENV}`
//! - Assignments: variables with an optional trailing `=`
//! - Control markers: `...`, `FOR`, `END` and friends

/// Continuation marker.
pub const CONTINUATION: &str = "...";

/// Kind of a variable, identified by its sigil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Scalar,
    List,
    Dict,
    Environment,
}

impl VariableKind {
    pub fn from_sigil(sigil: char) -> Option<Self> {
        match sigil {
            '$' => Some(Self::Scalar),
            '@' => Some(Self::List),
            '&' => Some(Self::Dict),
            '%' => Some(Self::Environment),
            _ => None,
        }
    }

    pub fn sigil(&self) -> char {
        match self {
            Self::Scalar => '$',
            Self::List => '@',
            Self::Dict => '&',
            Self::Environment => '%',
        }
    }
}

/// Returns the kind of `token` if it is exactly one variable.
///
/// # Examples
///
/// ```
/// use rfdata_core::lex::{variable_kind, VariableKind};
///
/// assert_eq!(variable_kind("${name}"), Some(VariableKind::Scalar));
/// assert_eq!(variable_kind("@{items}"), Some(VariableKind::List));
/// assert_eq!(variable_kind("${a}${b}"), None);
/// assert_eq!(variable_kind("plain"), None);
/// ```
pub fn variable_kind(token: &str) -> Option<VariableKind> {
    let mut chars = token.chars();
    let kind = VariableKind::from_sigil(chars.next()?)?;
    if chars.next()? != '{' || !token.ends_with('}') || token.len() < 4 {
        return None;
    }
    let inner = &token[2..token.len() - 1];
    let mut depth = 0usize;
    let mut escaped = false;
    for c in inner.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Some(kind)
    } else {
        None
    }
}

/// Any variable: scalar, list, dictionary or environment.
pub fn is_variable(token: &str) -> bool {
    variable_kind(token).is_some()
}

pub fn is_scalar_variable(token: &str) -> bool {
    variable_kind(token) == Some(VariableKind::Scalar)
}

pub fn is_list_variable(token: &str) -> bool {
    variable_kind(token) == Some(VariableKind::List)
}

pub fn is_dict_variable(token: &str) -> bool {
    variable_kind(token) == Some(VariableKind::Dict)
}

/// Split a variable-table or assignment name into the variable and the
/// trailing `=`/space suffix as written.
///
/// ```
/// use rfdata_core::lex::split_assign_suffix;
///
/// assert_eq!(split_assign_suffix("${x} ="), ("${x}", " ="));
/// assert_eq!(split_assign_suffix("@{list}"), ("@{list}", ""));
/// ```
pub fn split_assign_suffix(token: &str) -> (&str, &str) {
    let name = token.trim_end_matches(|c: char| c == '=' || c == ' ');
    (name, &token[name.len()..])
}

/// A cell that assigns to a variable: `${x}`, `${x}=`, `@{list} =`, `&{d}=`.
pub fn is_assign(token: &str) -> bool {
    let (name, _) = split_assign_suffix(token);
    matches!(
        variable_kind(name),
        Some(VariableKind::Scalar | VariableKind::List | VariableKind::Dict)
    )
}

/// Valid name for a variable table entry.
pub fn is_valid_variable_table_name(token: &str) -> bool {
    is_assign(token)
}

/// Control structure openers that require a matching `END`.
pub fn is_block_opener(token: &str) -> bool {
    matches!(token, "FOR" | "IF" | "WHILE" | "TRY") || is_legacy_for(token)
}

/// `FOR` or the legacy `:FOR` (with optional spacing and case).
pub fn is_for_marker(token: &str) -> bool {
    token == "FOR" || is_legacy_for(token)
}

fn is_legacy_for(token: &str) -> bool {
    let compact: String = token.chars().filter(|c| !c.is_whitespace()).collect();
    compact.eq_ignore_ascii_case(":FOR")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_kinds() {
        assert_eq!(variable_kind("${x}"), Some(VariableKind::Scalar));
        assert_eq!(variable_kind("@{x}"), Some(VariableKind::List));
        assert_eq!(variable_kind("&{x}"), Some(VariableKind::Dict));
        assert_eq!(variable_kind("%{HOME}"), Some(VariableKind::Environment));
    }

    #[test]
    fn test_not_variables() {
        assert!(!is_variable(""));
        assert!(!is_variable("${}"));
        assert!(!is_variable("${x"));
        assert!(!is_variable("$x}"));
        assert!(!is_variable("${a} ${b}"));
        assert!(!is_variable("text ${x}"));
    }

    #[test]
    fn test_nested_variables() {
        assert!(is_variable("${x_${y}}"));
        assert!(is_variable("${x\\}}"));
    }

    #[test]
    fn test_assignments() {
        assert!(is_assign("${x}="));
        assert!(is_assign("${x} ="));
        assert!(is_assign("@{items}"));
        assert!(!is_assign("%{ENV}="));
        assert!(!is_assign("Log"));
        assert!(!is_assign("="));
    }

    #[test]
    fn test_split_assign_suffix() {
        assert_eq!(split_assign_suffix("${x}="), ("${x}", "="));
        assert_eq!(split_assign_suffix("&{d}  ="), ("&{d}", "  ="));
        assert_eq!(split_assign_suffix("name"), ("name", ""));
    }

    #[test]
    fn test_for_markers() {
        assert!(is_for_marker("FOR"));
        assert!(is_for_marker(":FOR"));
        assert!(is_for_marker(": for"));
        assert!(!is_for_marker("for"));
        assert!(is_block_opener("IF"));
        assert!(is_block_opener("TRY"));
        assert!(!is_block_opener("END"));
    }
}
