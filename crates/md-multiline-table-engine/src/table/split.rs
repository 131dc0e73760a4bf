use super::border::BorderStyle;

/// Marker that closes a row on its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndBorder {
    /// A plain `|`.
    Pipe,
    /// `|+`, the pipe-continuation marker.
    PipePlus,
    /// `:`, the colon-continuation marker.
    Colon,
}

impl EndBorder {
    pub fn marker(self) -> &'static str {
        match self {
            EndBorder::Pipe => "|",
            EndBorder::PipePlus => "|+",
            EndBorder::Colon => ":",
        }
    }
}

/// Splits `line` on every `delim` that is not escaped by a backslash.
///
/// A delimiter is escaped when the run of backslashes directly in front of it
/// has odd length, so `\|` is text while `\\|` is an escaped backslash followed
/// by a delimiter. Backslashes are kept in the returned fragments.
pub fn split_unescaped(line: &str, delim: char) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut backslashes = 0usize;

    for (idx, ch) in line.char_indices() {
        if ch == '\\' {
            backslashes += 1;
            continue;
        }
        if ch == delim && backslashes % 2 == 0 {
            fragments.push(&line[start..idx]);
            start = idx + ch.len_utf8();
        }
        backslashes = 0;
    }

    fragments.push(&line[start..]);
    fragments
}

/// Returns true if `line` ends with `marker` and the marker itself is not escaped.
pub fn ends_with_unescaped(line: &str, marker: &str) -> bool {
    let Some(head) = line.strip_suffix(marker) else {
        return false;
    };
    let run = head.bytes().rev().take_while(|&b| b == b'\\').count();
    run % 2 == 0
}

/// Matches the right border pattern: an unescaped `|+`, `|` or `:` at line end.
pub fn end_border(line: &str) -> Option<EndBorder> {
    [EndBorder::PipePlus, EndBorder::Pipe, EndBorder::Colon]
        .into_iter()
        .find(|end| ends_with_unescaped(line, end.marker()))
}

/// Splits a table row into its cells.
///
/// With any border present the leading `|` and the trailing border marker are
/// dropped first; a borderless table keeps the row as is.
pub fn row_cells(line: &str, border: BorderStyle) -> Vec<&str> {
    let mut row = line;
    if !border.is_none() {
        if let Some(rest) = row.strip_prefix('|') {
            row = rest;
        }
        if let Some(end) = end_border(row) {
            row = &row[..row.len() - end.marker().len()];
        }
    }
    split_unescaped(row, '|')
}
