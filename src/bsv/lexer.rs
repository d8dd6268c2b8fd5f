//! Lexer module for BSV sources
//!
//! This module contains the tokenization logic, including token definitions
//! and the lexer implementation. The grammar layer in [`crate::bsv::parser`]
//! consumes the `(Token, Range<usize>)` pairs produced here; the ranges are
//! byte offsets into the original source and are never copied.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::{BlockKind, Token};
