//! # Block Splitting
//!
//! Cuts a document into the blocks handed to block processors.
//!
//! 1. **Line Classification** (`classify`): each line is classified on its own
//!    (blank, fence opener/closer) together with its byte span.
//! 2. **Block Construction** (`builder`): a `BlockBuilder` groups lines into
//!    paragraph blocks separated by blank lines and fenced code blocks.
//!
//! Fenced code blocks are raw zones: they are never offered to processors, so
//! a table-looking snippet inside a fence stays as written.

pub mod builder;
pub mod classify;
pub mod code_fence;
pub mod span;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, classify_lines};
pub use span::Span;
pub use types::{Block, BlockKind};

/// Splits `text` into blocks.
pub fn split_blocks(text: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::new(text);
    for line in classify_lines(text) {
        builder.push(&line);
    }
    builder.finish()
}
