/// Reasons a detected table cannot be converted at all.
///
/// Either error declines the whole block; the host then renders it as plain
/// text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("Broken table with less than 2 lines detected ({lines} line(s)).")]
    TooFewLines { lines: usize },

    #[error("Broken table with less than 1 column detected in header `{header}`.")]
    DegenerateTable { header: String },
}

/// A continuation line whose fragment count differs from the header's column count.
///
/// Not fatal: the row is still folded with best-effort alignment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Table column count mismatch. Row has {found} instead of the expected {expected} columns.")]
pub struct RowShapeMismatch {
    /// Zero-based line index inside the block.
    pub line: usize,
    pub found: usize,
    pub expected: usize,
}
