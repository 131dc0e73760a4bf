use super::span::Span;

/// The kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Any run of non-blank lines; offered to the block processors.
    Paragraph,
    /// A fenced code block. Raw zone: passed through untouched.
    FencedCode,
}

/// One blank-line separated block of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Byte span of the block in the document, trailing newline excluded.
    pub span: Span,
    /// 1-based line number of the first line.
    pub first_line: usize,
    /// Block lines joined with `\n`, without line terminators.
    pub text: String,
}
