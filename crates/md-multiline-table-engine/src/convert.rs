//! # Document Conversion
//!
//! Runs the block processors over a whole document and renders the result
//! with pulldown-cmark, whose table extension is the standard table renderer
//! the rewritten tables are handed to.

use pulldown_cmark::{Options, Parser, html};

use crate::{
    blocks::{BlockKind, Span, split_blocks},
    diagnostics::Diagnostic,
    processor::ProcessorRegistry,
    table::MultilineTableProcessor,
};

/// Markdown extensions enabled when rendering HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub footnotes: bool,
    pub tasklists: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: false,
            footnotes: false,
            tasklists: false,
        }
    }
}

impl RenderOptions {
    pub fn to_options(self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.tasklists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        options
    }
}

/// A document after all block processors ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub markdown: String,
    /// Diagnostics with 1-based document line numbers.
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Converter {
    registry: ProcessorRegistry,
    render: RenderOptions,
}

impl Converter {
    pub fn new(registry: ProcessorRegistry, render: RenderOptions) -> Self {
        Self { registry, render }
    }

    /// Converter with the multiline table processor at its default priority.
    pub fn with_multiline_tables(render: RenderOptions) -> Self {
        let mut registry = ProcessorRegistry::new();
        registry.register(
            MultilineTableProcessor,
            MultilineTableProcessor::NAME,
            MultilineTableProcessor::PRIORITY,
        );
        Self::new(registry, render)
    }

    pub fn registry(&self) -> &ProcessorRegistry {
        &self.registry
    }

    pub fn render_options(&self) -> RenderOptions {
        self.render
    }

    /// Offers every paragraph block to the registry and splices the rewritten
    /// ones back into the document.
    ///
    /// Everything outside a rewritten block is copied byte for byte, so blank
    /// lines, declined blocks and fenced code come out exactly as they went in.
    pub fn rewrite(&self, text: &str) -> Rewritten {
        let mut diagnostics = Vec::new();
        let mut markdown = String::with_capacity(text.len());
        let mut copied = 0;

        for block in split_blocks(text) {
            if block.kind == BlockKind::FencedCode {
                continue;
            }

            let mut local = Vec::new();
            let rewritten = self.registry.run(&block.text, &mut local);
            diagnostics.extend(local.into_iter().map(|mut d| {
                d.line = d.line.map(|line| block.first_line + line);
                d
            }));

            if let Some(rewritten) = rewritten {
                let before = Span {
                    start: copied,
                    end: block.span.start,
                };
                markdown.push_str(before.slice(text));
                markdown.push_str(&rewritten);
                copied = block.span.end;
            }
        }
        markdown.push_str(&text[copied..]);

        Rewritten {
            markdown,
            diagnostics,
        }
    }

    /// Rewrites `text` and renders it to HTML.
    pub fn to_html(&self, text: &str) -> Rendered {
        let Rewritten {
            markdown,
            diagnostics,
        } = self.rewrite(text);

        let parser = Parser::new_ext(&markdown, self.render.to_options());
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);

        Rendered {
            html: out,
            diagnostics,
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::with_multiline_tables(RenderOptions::default())
    }
}
