//! # Multiline Tables
//!
//! Recognizes the multiline table dialect and folds it into plain pipe tables.
//!
//! ```text
//! | Name | Unit |
//! : of item : used :
//! |------|------|
//! | a | m |
//! : b : :
//! ```
//!
//! becomes
//!
//! ```text
//! | Name of item | Unit used |
//! |------|------|
//! | a b | m |
//! ```
//!
//! A continuation line either starts with `:` and separates its cells with
//! `:`, or ends with `|+` and separates them with `|`. `\|` and `\:` are never
//! cell boundaries.
//!
//! ## Modules
//!
//! - **`split`**: unescaped delimiter splitting and the right border pattern
//! - **`border`**: `BorderStyle` of a header line
//! - **`detect`**: the detector, producing a `TableHead`
//! - **`fold`**: the folder, consuming a `TableHead`
//! - **`processor`**: `MultilineTableProcessor`, the block processor wiring both

pub mod border;
pub mod detect;
pub mod error;
pub mod fold;
pub mod processor;
pub mod split;

pub use border::BorderStyle;
pub use detect::{TableHead, detect, is_multiline_table};
pub use error::{RowShapeMismatch, TableError};
pub use fold::{Continuation, Folded, column_count, convert, fold};
pub use processor::MultilineTableProcessor;
