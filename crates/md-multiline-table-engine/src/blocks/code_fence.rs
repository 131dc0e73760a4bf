/// Fence character of a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// What a line looks like if it could open or close a fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Number of fence characters.
    pub len: usize,
    /// Text follows the fence characters. Only an opener may carry it.
    pub has_info: bool,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";
    /// Deeper indentation makes an indented code block instead.
    pub const MAX_INDENT: usize = 3;

    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim_end_matches(['\r', '\n']);
        let indent = t.len() - t.trim_start_matches(' ').len();
        if indent > Self::MAX_INDENT {
            return None;
        }
        let t = &t[indent..];
        let kind = if t.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else if t.starts_with(Self::TILDES) {
            FenceKind::Tildes
        } else {
            return None;
        };
        let ch = match kind {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        };
        let len = t.chars().take_while(|&c| c == ch).count();
        let has_info = !t[len..].trim().is_empty();
        Some(FenceSig {
            kind,
            len,
            has_info,
        })
    }

    /// Whether `sig` closes a fence opened by `open`.
    pub fn closes(open: FenceSig, sig: Option<FenceSig>) -> bool {
        matches!(sig, Some(s) if s.kind == open.kind && s.len >= open.len && !s.has_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(
            CodeFence::sig("```rust"),
            Some(FenceSig {
                kind: FenceKind::Backticks,
                len: 3,
                has_info: true,
            })
        );
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(
            CodeFence::sig("  ~~~~"),
            Some(FenceSig {
                kind: FenceKind::Tildes,
                len: 4,
                has_info: false,
            })
        );
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("    ```"), None);
    }

    #[test]
    fn closes_matching_fence() {
        let open = CodeFence::sig("````").unwrap();
        assert!(CodeFence::closes(open, CodeFence::sig("`````")));
        assert!(!CodeFence::closes(open, CodeFence::sig("```")));
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        let open = CodeFence::sig("```").unwrap();
        assert!(!CodeFence::closes(open, CodeFence::sig("~~~")));
        assert!(!CodeFence::closes(open, None));
    }

    #[test]
    fn info_string_never_closes() {
        let open = CodeFence::sig("```").unwrap();
        assert!(!CodeFence::closes(open, CodeFence::sig("```rust")));
        assert!(CodeFence::closes(open, CodeFence::sig("```  ")));
    }
}
