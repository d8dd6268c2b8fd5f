//! Lexical primitives shared by every grammar rule.

use chumsky::prelude::*;

use crate::bsv::ast::{Base, Identifier, IdentifierCase, IntLiteral};
use crate::bsv::lexer::Token;

/// Type alias for parser error
pub type ParserError = Simple<Token>;

/// Match a specific token, ignoring its value
pub(crate) fn token(t: Token) -> impl Parser<Token, (), Error = ParserError> + Clone {
    just(t).ignored()
}

/// Match the keyword `word`.
///
/// Keywords are identifiers compared by text; the lexer already guarantees the
/// word is not a prefix of a longer identifier.
pub(crate) fn keyword(word: &'static str) -> impl Parser<Token, (), Error = ParserError> + Clone {
    filter(move |t: &Token| t.is_word(word))
        .ignored()
        .labelled(word)
}

/// Any identifier, either capitalization
pub fn any_identifier() -> impl Parser<Token, Identifier, Error = ParserError> + Clone {
    filter_map(|span, tok: Token| match tok {
        Token::Ident(name) => match Identifier::new(name) {
            Some(ident) => Ok(ident),
            None => Err(Simple::custom(span, "malformed identifier")),
        },
        other => Err(Simple::expected_input_found(span, Vec::new(), Some(other))),
    })
}

fn identifier_of(case: IdentifierCase) -> impl Parser<Token, Identifier, Error = ParserError> + Clone {
    any_identifier().try_map(move |ident, span| {
        if ident.case == case {
            Ok(ident)
        } else {
            Err(Simple::custom(
                span,
                format!("expected {:?} identifier, found `{}`", case, ident),
            ))
        }
    })
}

/// Identifier whose first character is in `[A-Z]`
pub fn capitalized_identifier() -> impl Parser<Token, Identifier, Error = ParserError> + Clone {
    identifier_of(IdentifierCase::Capitalized)
}

/// Identifier whose first character is in `[a-z_]`
pub fn lowercase_identifier() -> impl Parser<Token, Identifier, Error = ParserError> + Clone {
    identifier_of(IdentifierCase::Lowercase)
}

/// Any integer literal: based (hex, octal, binary, decimal), bare decimal, or `'0`/`'1`.
///
/// Each literal is a single token, so the base is fixed by the lexer; a digit
/// outside the base ends the token and is left for the next rule.
pub fn int_literal() -> impl Parser<Token, IntLiteral, Error = ParserError> + Clone {
    filter_map(|span, tok: Token| match tok {
        Token::BasedLiteral(text) => IntLiteral::parse_based(&text)
            .ok_or_else(|| Simple::custom(span, format!("malformed literal `{}`", text))),
        Token::Number(digits) => Ok(IntLiteral::Plain { digits }),
        Token::FillLiteral(text) => Ok(IntLiteral::Fill {
            ones: text == "'1",
        }),
        other => Err(Simple::expected_input_found(span, Vec::new(), Some(other))),
    })
}

/// Decimal literal only: bare digits or `[width]'d<digits>`
pub fn decimal_literal() -> impl Parser<Token, IntLiteral, Error = ParserError> + Clone {
    int_literal().try_map(|literal, span| {
        if literal.base() == Some(Base::Decimal) {
            Ok(literal)
        } else {
            Err(Simple::custom(
                span,
                format!("expected decimal literal, found `{}`", literal),
            ))
        }
    })
}
