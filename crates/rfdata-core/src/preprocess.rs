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

//! Input preprocessing: decoding, line splitting and size limits.

use crate::error::{RfError, RfResult};
use crate::limits::Limits;
use std::borrow::Cow;

/// Line terminator used by a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Preprocessed input ready for the reader.
/// Stores normalized text and line offsets.
#[derive(Debug)]
pub struct PreprocessedInput {
    text: String,
    /// Line boundaries: (line_number, start_offset, end_offset)
    line_offsets: Vec<(usize, usize, usize)>,
    line_ending: LineEnding,
}

impl PreprocessedInput {
    /// Get lines as (line_num, &str) pairs.
    #[inline]
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.line_offsets
            .iter()
            .map(move |&(num, start, end)| (num, &self.text[start..end]))
    }

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Terminator of the first line break, `Lf` when there is none.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}

/// Preprocess raw input bytes into lines.
///
/// This handles:
/// - UTF-8 validation
/// - BOM skipping
/// - CRLF and bare CR normalization to LF
/// - Size and line length limits
///
/// Empty input yields no lines, and a final line terminator does not start
/// an extra empty line.
pub fn preprocess(input: &[u8], limits: &Limits) -> RfResult<PreprocessedInput> {
    if input.len() > limits.max_file_size {
        return Err(RfError::limit(
            format!("file too large: exceeds limit of {} bytes", limits.max_file_size),
            0,
        ));
    }

    let text = std::str::from_utf8(input).map_err(|e| {
        let line = input[..e.valid_up_to()].iter().filter(|&&b| b == b'\n').count() + 1;
        RfError::syntax(format!("invalid UTF-8 encoding: {}", e), line)
    })?;

    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    let line_ending = match text.find('\n') {
        Some(pos) if pos > 0 && text.as_bytes()[pos - 1] == b'\r' => LineEnding::CrLf,
        _ => LineEnding::Lf,
    };

    let text: Cow<str> = if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    };

    let bytes = text.as_bytes();
    let estimated_lines = bytes.iter().filter(|&&b| b == b'\n').count() + 1;
    let mut line_offsets = Vec::with_capacity(estimated_lines);

    let check_length = |len: usize, line_num: usize| -> RfResult<()> {
        if len > limits.max_line_length {
            return Err(RfError::limit(
                format!(
                    "line too long: exceeds limit of {} bytes",
                    limits.max_line_length
                ),
                line_num,
            ));
        }
        Ok(())
    };

    let mut start = 0;
    let mut line_num = 1;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'\n' {
            check_length(i - start, line_num)?;
            line_offsets.push((line_num, start, i));
            start = i + 1;
            line_num += 1;
        }
    }

    if start < bytes.len() {
        check_length(bytes.len() - start, line_num)?;
        line_offsets.push((line_num, start, bytes.len()));
    }

    Ok(PreprocessedInput {
        text: text.into_owned(),
        line_offsets,
        line_ending,
    })
}

/// Check if a line is blank (empty or whitespace only).
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Check if a line is a comment (first non-whitespace is #).
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
