use super::{
    border::BorderStyle,
    detect::TableHead,
    error::{RowShapeMismatch, TableError},
    split::{EndBorder, end_border, ends_with_unescaped, row_cells, split_unescaped},
};

/// Result of folding a multiline table into one line per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folded {
    /// The rewritten block, lines joined with `\n`.
    pub text: String,
    /// Continuation lines that did not match the header's column count.
    pub mismatches: Vec<RowShapeMismatch>,
}

/// The two continuation line forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// `: a : b :`
    Colon,
    /// `| a | b |+`
    Pipe,
}

impl Continuation {
    /// Classifies a trimmed line. The `|+` form wins when both markers are present.
    pub fn classify(trimmed: &str) -> Option<Self> {
        if trimmed.ends_with("|+") {
            Some(Continuation::Pipe)
        } else if trimmed.starts_with(':') {
            Some(Continuation::Colon)
        } else {
            None
        }
    }

    /// Cell fragments carried by a trimmed continuation line.
    pub fn fragments(self, trimmed: &str) -> Vec<&str> {
        match self {
            Continuation::Colon => {
                let body = trimmed.strip_prefix(':').unwrap_or(trimmed);
                let body = if ends_with_unescaped(body, ":") {
                    &body[..body.len() - 1]
                } else {
                    body
                };
                split_unescaped(body, ':')
            }
            Continuation::Pipe => {
                let body = trimmed.strip_suffix("|+").unwrap_or(trimmed);
                let body = body.strip_prefix('|').unwrap_or(body);
                split_unescaped(body, '|')
            }
        }
    }
}

/// Number of columns of the header line.
///
/// Counts the fragments between unescaped pipes and discounts the empty ones
/// produced by a leading `|` and a trailing `|` or `|+`. A header that yields
/// no column at all is a [`TableError::DegenerateTable`].
pub fn column_count(header: &str) -> Result<usize, TableError> {
    let header = header.trim_matches(' ');
    let fragments = split_unescaped(header, '|').len();
    let leading = usize::from(header.starts_with('|'));
    let trailing = usize::from(matches!(
        end_border(header),
        Some(EndBorder::Pipe | EndBorder::PipePlus)
    ));

    match fragments.saturating_sub(leading + trailing) {
        0 => Err(TableError::DegenerateTable {
            header: header.to_string(),
        }),
        columns => Ok(columns),
    }
}

/// Folds a detected table block into canonical one-line-per-row form.
pub fn convert(block: &str, head: &TableHead) -> Result<Folded, TableError> {
    let lines: Vec<&str> = block.split('\n').collect();
    if lines.len() < 2 {
        return Err(TableError::TooFewLines { lines: lines.len() });
    }
    let columns = column_count(lines[0])?;
    Ok(fold(&lines, columns, head))
}

/// Merges every continuation line into the row above it.
///
/// The owning row is rewritten as `| c1 | c2 | ... |`, with each cell being
/// the old text and the continuation fragment joined by a single space. A
/// following continuation line merges against the rewritten row. Rows that
/// are never merged keep their original text when they already use plain pipe
/// borders, all others are written in canonical form so that a standard pipe
/// table renderer accepts them.
///
/// A fragment count different from `column_count` is reported in
/// [`Folded::mismatches`] and folding continues: extra fragments are dropped,
/// missing ones leave their cell as it was.
pub fn fold(lines: &[&str], column_count: usize, head: &TableHead) -> Folded {
    let mut rows: Vec<Row<'_>> = Vec::with_capacity(lines.len());
    let mut mismatches = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        let continuation = if idx == 0 || idx == head.separator_line {
            None
        } else {
            Continuation::classify(trimmed)
        };

        match (continuation, rows.last_mut()) {
            (Some(form), Some(owner)) => {
                let fragments = form.fragments(trimmed);
                if fragments.len() != column_count {
                    let mismatch = RowShapeMismatch {
                        line: idx,
                        found: fragments.len(),
                        expected: column_count,
                    };
                    log::debug!("{mismatch}");
                    mismatches.push(mismatch);
                }
                owner.merge(&fragments, head.border);
            }
            _ => rows.push(Row::new(line, head.border)),
        }
    }

    let text = rows.iter().map(Row::render).collect::<Vec<_>>().join("\n");
    Folded { text, mismatches }
}

/// One logical row: the source line, and its cells once they had to be rebuilt.
struct Row<'a> {
    source: &'a str,
    cells: Option<Vec<String>>,
}

impl<'a> Row<'a> {
    fn new(source: &'a str, border: BorderStyle) -> Self {
        let trimmed = source.trim();
        let standard = trimmed.starts_with('|') && end_border(trimmed) == Some(EndBorder::Pipe);
        Self {
            source,
            cells: (!standard).then(|| split_cells(trimmed, border)),
        }
    }

    fn merge(&mut self, fragments: &[&str], border: BorderStyle) {
        let source = self.source.trim();
        let cells = self
            .cells
            .get_or_insert_with(|| split_cells(source, border));
        for (idx, cell) in cells.iter_mut().enumerate() {
            let fragment = fragments.get(idx).map_or("", |f| f.trim());
            *cell = format!("{cell} {fragment}").trim().to_string();
        }
    }

    fn render(&self) -> String {
        match &self.cells {
            Some(cells) => format!("| {} |", cells.join(" | ")),
            None => self.source.to_string(),
        }
    }
}

fn split_cells(line: &str, border: BorderStyle) -> Vec<String> {
    row_cells(line, border)
        .into_iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}
