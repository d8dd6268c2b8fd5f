//! Parser module for BSV declarations
//!
//! Grammar rules are chumsky parsers over the [`Token`](crate::bsv::lexer::Token)
//! stream. They fall in three layers:
//!
//! - [`combinators`]: lexical primitives (keywords, the three identifier
//!   classes, integer literals)
//! - [`types`]: the recursive type-expression grammar plus formals, provisos
//!   and functional dependencies
//! - [`elements`]: one recognizer per declaration kind
//!
//! No rule recovers from errors: a rule either matches at a position or it
//! does not, and the scan driver decides what to try next.

pub mod api;
pub mod combinators;
pub mod elements;
pub mod types;
#[cfg(test)]
mod tests;

pub use api::{declaration, parse_complete, statement, token_stream, Statement, TokenStream};
pub use combinators::{
    any_identifier, capitalized_identifier, decimal_literal, int_literal, lowercase_identifier,
    ParserError,
};
pub use elements::{
    export_statement, function, import_statement, instance, interface, module, package,
    typeclass, typedef,
};
pub use types::{dependencies, provisos, type_expr, type_formals};
