use super::{
    code_fence::{CodeFence, FenceSig},
    span::Span,
};

/// Local facts about one line of the document.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Byte span of the line without its terminator.
    pub span: Span,
    /// The line without its terminator.
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
}

/// Classifies every line of `text`.
pub fn classify_lines(text: &str) -> impl Iterator<Item = LineClass<'_>> {
    let mut offset = 0usize;
    text.split_inclusive('\n')
        .enumerate()
        .map(move |(idx, raw)| {
            let start = offset;
            offset += raw.len();
            let line = raw.trim_end_matches(['\r', '\n']);
            LineClass {
                number: idx + 1,
                span: Span {
                    start,
                    end: start + line.len(),
                },
                text: line,
                is_blank: line.trim().is_empty(),
                fence_sig: CodeFence::sig(line),
            }
        })
}
