//! Main module for bsvdoc library functionality

pub mod ast;
pub mod comments;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod scanner;
pub mod selftest;
pub mod testing;

pub use error::BsvDocError;
