use std::fmt;

use crate::table::{RowShapeMismatch, TableError};

/// A warning raised while converting a document. Conversion always goes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line the problem belongs to. Zero-based within a block while a
    /// processor runs; the converter turns it into a 1-based document line.
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl From<&RowShapeMismatch> for Diagnostic {
    fn from(mismatch: &RowShapeMismatch) -> Self {
        Diagnostic::warning(Some(mismatch.line), mismatch.to_string())
    }
}

impl From<&TableError> for Diagnostic {
    fn from(err: &TableError) -> Self {
        Diagnostic::warning(Some(0), err.to_string())
    }
}
