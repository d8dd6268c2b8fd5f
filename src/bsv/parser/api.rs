//! Public API for the parser.

use chumsky::prelude::*;
use chumsky::Stream;
use std::iter::Cloned;
use std::ops::Range;
use std::slice::Iter;

use crate::bsv::ast::{DeclarationKind, Export, Import};
use crate::bsv::lexer::{tokenize_with_spans, Token};
use crate::bsv::parser::combinators::ParserError;
use crate::bsv::parser::elements::{
    export_statement, function, import_statement, instance, interface, module, package,
    typeclass, typedef,
};

/// Type alias for token with span
type TokenSpan = (Token, Range<usize>);

/// A token stream whose spans are byte offsets into the source
pub type TokenStream<'a> = Stream<'a, Token, Range<usize>, Cloned<Iter<'a, TokenSpan>>>;

/// Build a stream over `tokens`. Tokens are cloned lazily, only as far as a
/// rule actually reads.
pub fn token_stream(tokens: &[TokenSpan]) -> TokenStream<'_> {
    let eoi = tokens
        .last()
        .map(|(_, span)| span.end..span.end)
        .unwrap_or(0..0);
    Stream::from_iter(eoi, tokens.iter().cloned())
}

/// Any documented declaration, in scan priority order
pub fn declaration() -> impl Parser<Token, DeclarationKind, Error = ParserError> + Clone {
    choice((
        package().map(DeclarationKind::Package),
        typedef().map(DeclarationKind::Typedef),
        interface().map(DeclarationKind::Interface),
        typeclass().map(DeclarationKind::Typeclass),
        instance().map(DeclarationKind::Instance),
        module().map(DeclarationKind::Module),
        function().map(DeclarationKind::Function),
    ))
}

/// Single-statement items that are recorded but never documented
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Import(Import),
    Export(Export),
}

pub fn statement() -> impl Parser<Token, Statement, Error = ParserError> + Clone {
    import_statement()
        .map(Statement::Import)
        .or(export_statement().map(Statement::Export))
}

/// Lex `source` and require `parser` to consume all of it
pub fn parse_complete<P, O>(parser: P, source: &str) -> Result<O, Vec<ParserError>>
where
    P: Parser<Token, O, Error = ParserError>,
{
    let tokens = tokenize_with_spans(source);
    parser.then_ignore(end()).parse(token_stream(&tokens))
}
