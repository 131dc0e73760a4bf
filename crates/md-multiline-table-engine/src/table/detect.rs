use super::{
    border::BorderStyle,
    split::{end_border, row_cells},
};

/// Characters a separator row may consist of.
pub const SEPARATOR_CHARS: [char; 4] = ['|', ':', '-', ' '];

/// Head of an accepted multiline table, captured by [`detect`].
///
/// This is the whole state handed from detection to folding; nothing is kept
/// between blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHead {
    pub border: BorderStyle,
    /// Cell count of the header row.
    pub columns: usize,
    /// Zero-based index of the separator row inside the block.
    pub separator_line: usize,
    /// Cells of the separator row, borders removed.
    pub separator: Vec<String>,
}

/// Decides whether `block` is a multiline table.
///
/// Unlike a plain pipe table the separator row does not have to be the second
/// line: the first line after the header that ends with `|` is taken as the
/// separator, which allows headers spanning several lines. Every shape
/// failure yields `None`.
pub fn detect(block: &str) -> Option<TableHead> {
    let rows: Vec<&str> = block.split('\n').map(|row| row.trim_matches(' ')).collect();
    if rows.len() < 2 {
        return None;
    }

    let header = rows[0];
    let border = BorderStyle::of_header(header);
    let columns = row_cells(header, border).len();

    // A single column table needs a border marker on every row, otherwise any
    // paragraph starting with `|` would qualify.
    let is_table = columns > 1
        || (!border.is_none()
            && rows[1..]
                .iter()
                .all(|row| row.starts_with('|') || end_border(row).is_some()));
    if !is_table {
        log::debug!("not a multiline table: header `{header}` has {columns} column(s)");
        return None;
    }

    let Some((separator_line, separator_row)) = rows
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, row)| row.ends_with('|'))
    else {
        log::debug!("not a multiline table: no separator row below `{header}`");
        return None;
    };

    let separator = row_cells(separator_row, border);
    let valid = separator.len() == columns
        && separator
            .iter()
            .flat_map(|cell| cell.chars())
            .all(|ch| SEPARATOR_CHARS.contains(&ch));
    if !valid {
        log::debug!("not a multiline table: invalid separator row `{separator_row}`");
        return None;
    }

    Some(TableHead {
        border,
        columns,
        separator_line,
        separator: separator.into_iter().map(str::to_string).collect(),
    })
}

pub fn is_multiline_table(block: &str) -> bool {
    detect(block).is_some()
}
