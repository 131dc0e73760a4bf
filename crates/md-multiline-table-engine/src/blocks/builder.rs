use super::{
    classify::LineClass,
    code_fence::{CodeFence, FenceSig},
    span::Span,
    types::{Block, BlockKind},
};

#[derive(Debug, Clone, Copy)]
enum LeafState {
    None,
    Paragraph {
        first_line: usize,
        start: usize,
        end: usize,
    },
    Fence {
        sig: FenceSig,
        first_line: usize,
        start: usize,
        end: usize,
    },
}

/// Groups classified lines into blocks.
///
/// Blank lines end paragraphs; fenced code runs until its closing fence (or
/// the end of the document) and may contain blank lines.
pub struct BlockBuilder<'a> {
    text: &'a str,
    leaf: LeafState,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if let LeafState::Fence { .. } = self.leaf {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush();
            return;
        }

        if let Some(sig) = c.fence_sig {
            self.flush();
            self.leaf = LeafState::Fence {
                sig,
                first_line: c.number,
                start: c.span.start,
                end: c.span.end,
            };
            return;
        }

        self.extend_paragraph(c);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush; an unterminated fence is emitted as a fence anyway
        self.flush();
        self.out
    }

    fn consume_fence_line(&mut self, c: &LineClass<'_>) {
        let LeafState::Fence {
            sig,
            first_line,
            start,
            ..
        } = self.leaf
        else {
            return;
        };

        self.leaf = LeafState::Fence {
            sig,
            first_line,
            start,
            end: c.span.end,
        };

        if CodeFence::closes(sig, c.fence_sig) {
            self.flush();
        }
    }

    fn extend_paragraph(&mut self, c: &LineClass<'_>) {
        self.leaf = match self.leaf {
            LeafState::Paragraph {
                first_line, start, ..
            } => LeafState::Paragraph {
                first_line,
                start,
                end: c.span.end,
            },
            _ => LeafState::Paragraph {
                first_line: c.number,
                start: c.span.start,
                end: c.span.end,
            },
        };
    }

    fn flush(&mut self) {
        let (kind, first_line, span) = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::Paragraph {
                first_line,
                start,
                end,
            } => (BlockKind::Paragraph, first_line, Span { start, end }),
            LeafState::Fence {
                first_line,
                start,
                end,
                ..
            } => (BlockKind::FencedCode, first_line, Span { start, end }),
        };

        let text = span.slice(self.text).lines().collect::<Vec<_>>().join("\n");
        self.out.push(Block {
            kind,
            span,
            first_line,
            text,
        });
    }
}
