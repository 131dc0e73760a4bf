pub mod blocks;
pub mod convert;
pub mod diagnostics;
pub mod io;
pub mod processor;
pub mod table;

// Re-export key types for easier usage
pub use convert::{Converter, RenderOptions, Rendered, Rewritten};
pub use diagnostics::Diagnostic;
pub use processor::{BlockProcessor, ProcessorRegistry};
pub use table::{
    BorderStyle, Folded, MultilineTableProcessor, RowShapeMismatch, TableError, TableHead,
    column_count, convert as convert_table, detect, fold, is_multiline_table,
};
