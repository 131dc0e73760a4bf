use crate::{diagnostics::Diagnostic, processor::BlockProcessor};

use super::{detect::detect, fold::convert};

/// Rewrites multiline tables into standard pipe tables.
///
/// Stateless: whatever detection learns about a block is passed straight to
/// folding within the same [`BlockProcessor::run`] call.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultilineTableProcessor;

impl MultilineTableProcessor {
    pub const NAME: &'static str = "md-multiline-table";
    /// Runs ahead of the standard table transform, which sits at 100.
    pub const PRIORITY: u32 = 106;
    pub const ESCAPED_CHARS: [char; 2] = ['|', ':'];
}

impl BlockProcessor for MultilineTableProcessor {
    fn run(&self, block: &str, diagnostics: &mut Vec<Diagnostic>) -> Option<String> {
        let head = detect(block)?;
        match convert(block, &head) {
            Ok(folded) => {
                diagnostics.extend(folded.mismatches.iter().map(Diagnostic::from));
                Some(folded.text)
            }
            Err(err) => {
                log::debug!("declining table block: {err}");
                diagnostics.push(Diagnostic::from(&err));
                None
            }
        }
    }

    fn escaped_chars(&self) -> &[char] {
        &Self::ESCAPED_CHARS
    }
}
