//! ADIF tag tokenizer and record assembler.
//!
//! Reference: <https://adif.org/>. Only reading is supported.

/// Tokenizer and assembler implementation.
pub mod parser;

pub use parser::{AdifTag, parse_adif, parse_bytes, parse_file, parse_record, tokenize};
