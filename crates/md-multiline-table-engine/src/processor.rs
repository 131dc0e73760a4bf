//! # Block Processors
//!
//! A block processor gets one blank-line separated block at a time and may
//! replace it with rewritten Markdown. Processors are kept in a
//! [`ProcessorRegistry`] ordered by priority, highest first; the first one
//! that accepts a block rewrites it and the others never see it.

use crate::diagnostics::Diagnostic;

pub trait BlockProcessor {
    /// Rewrites `block`, or returns `None` to leave it to the next processor.
    ///
    /// Problems that do not prevent the rewrite are pushed onto `diagnostics`
    /// with block-relative line numbers.
    fn run(&self, block: &str, diagnostics: &mut Vec<Diagnostic>) -> Option<String>;

    /// Characters that must stay escapable (`\x`) in the document text.
    fn escaped_chars(&self) -> &[char] {
        &[]
    }
}

struct Registration {
    name: String,
    priority: u32,
    processor: Box<dyn BlockProcessor>,
}

#[derive(Default)]
pub struct ProcessorRegistry {
    entries: Vec<Registration>,
    escaped_chars: Vec<char>,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `processor` under `name`.
    ///
    /// A processor already registered under the same name is replaced.
    /// Processors with equal priority run in registration order.
    pub fn register<P>(&mut self, processor: P, name: &str, priority: u32)
    where
        P: BlockProcessor + 'static,
    {
        self.deregister(name);

        for &ch in processor.escaped_chars() {
            if !self.escaped_chars.contains(&ch) {
                self.escaped_chars.push(ch);
            }
        }

        let at = self
            .entries
            .iter()
            .position(|entry| entry.priority < priority)
            .unwrap_or(self.entries.len());
        log::debug!("registering block processor `{name}` at priority {priority}");
        self.entries.insert(
            at,
            Registration {
                name: name.to_string(),
                priority,
                processor: Box::new(processor),
            },
        );
    }

    /// Removes the processor registered under `name`. Returns whether one was found.
    pub fn deregister(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.name != name);
        self.entries.len() != before
    }

    /// Registered names with their priority, in run order.
    pub fn names(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.priority))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn escaped_chars(&self) -> &[char] {
        &self.escaped_chars
    }

    /// Offers `block` to every processor in priority order until one rewrites it.
    pub fn run(&self, block: &str, diagnostics: &mut Vec<Diagnostic>) -> Option<String> {
        self.entries
            .iter()
            .find_map(|entry| entry.processor.run(block, diagnostics))
    }
}
