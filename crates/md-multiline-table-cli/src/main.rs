//! Command-line interface for md-multiline-table.
//!
//! Usage:
//!   md-multiline-table [FILE]                 - Render FILE (or stdin) to HTML
//!   md-multiline-table --markdown [FILE]      - Print the rewritten Markdown instead
//!   md-multiline-table -o OUT [FILE]          - Write the result to OUT
//!   md-multiline-table --list-processors      - List the registered block processors
//!   md-multiline-table --init-config          - Write a config file with the defaults

use anyhow::{Context, Result};
use clap::Parser;
use md_multiline_table_config::Config;
use md_multiline_table_engine::{
    Converter, Diagnostic, MultilineTableProcessor, ProcessorRegistry, RenderOptions, io,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "md-multiline-table",
    version,
    about = "Render Markdown with multiline tables"
)]
struct Args {
    /// Markdown file to convert, stdin when omitted
    file: Option<PathBuf>,

    /// Config file, defaults to ~/.config/md-multiline-table/config.toml
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Write the output to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Print the rewritten Markdown instead of HTML
    #[arg(long)]
    markdown: bool,

    /// List registered block processors and exit
    #[arg(long)]
    list_processors: bool,

    /// Write the default settings to the config file and exit
    #[arg(long, conflicts_with_all = ["file", "list_processors"])]
    init_config: bool,

    /// Log at info level
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if args.init_config {
        return init_config(args.config.as_deref());
    }

    let config =
        Config::load_or_default(args.config.as_deref()).context("Failed to load config file")?;
    let converter = build_converter(&config);

    if args.list_processors {
        print!("{}", list_processors(converter.registry()));
        return Ok(());
    }

    let source = io::read_source(args.file.as_deref())?;
    log::info!("converting {} byte(s)", source.len());

    let (output, diagnostics) = if args.markdown {
        let rewritten = converter.rewrite(&source);
        (rewritten.markdown, rewritten.diagnostics)
    } else {
        let rendered = converter.to_html(&source);
        (rendered.html, rendered.diagnostics)
    };
    report(&diagnostics);

    match &args.output {
        Some(path) => {
            io::write_file(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{output}"),
    }
    Ok(())
}

fn init_config(path: Option<&Path>) -> Result<()> {
    let config = Config::default();
    let written = match path {
        Some(path) => {
            config.save_to_path(path)?;
            path.to_path_buf()
        }
        None => {
            config.save()?;
            Config::config_path()
        }
    };
    println!("Wrote default config to {}", written.display());
    Ok(())
}

fn build_converter(config: &Config) -> Converter {
    let mut registry = ProcessorRegistry::new();
    if config.tables.multiline {
        registry.register(
            MultilineTableProcessor,
            MultilineTableProcessor::NAME,
            config.tables.priority,
        );
    }

    let render = RenderOptions {
        tables: config.render.tables,
        strikethrough: config.render.strikethrough,
        footnotes: config.render.footnotes,
        tasklists: config.render.tasklists,
    };
    Converter::new(registry, render)
}

fn list_processors(registry: &ProcessorRegistry) -> String {
    let mut out = String::new();
    for (name, priority) in registry.names() {
        out.push_str(&format!("{name}\t{priority}\n"));
    }
    let escaped: String = registry.escaped_chars().iter().collect();
    if !escaped.is_empty() {
        out.push_str(&format!("escaped: {escaped}\n"));
    }
    out
}

fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        log::warn!("{diagnostic}");
    }
}
