//! Function definitions.
//!
//! Unlike the other block declarations, a function body is scanned
//! recursively: BSV allows a function to define (and return) a local
//! function, so an inner `endfunction` must not close the outer definition.

use chumsky::prelude::*;
use std::ops::Range;

use crate::bsv::ast::FunctionDecl;
use crate::bsv::lexer::Token;
use crate::bsv::parser::combinators::{keyword, lowercase_identifier, token, ParserError};
use crate::bsv::parser::elements::blocks::end_clause;
use crate::bsv::parser::types::{provisos, type_expr};

/// `function [type] name [(args)] [provisos(...)] ; body endfunction [: name]`
///
/// The return type is optional, and so is each argument name: a higher-order
/// parameter may be written as a bare function type.
pub fn function() -> impl Parser<Token, FunctionDecl, Error = ParserError> + Clone {
    recursive(|function| {
        let header = type_expr()
            .then(lowercase_identifier())
            .map(|(return_type, name)| (Some(return_type), name))
            .or(lowercase_identifier().map(|name| (None, name)));

        let params = type_expr()
            .then(lowercase_identifier().or_not())
            .separated_by(token(Token::Comma))
            .delimited_by(token(Token::LParen), token(Token::RParen))
            .or_not()
            .map(Option::unwrap_or_default);

        let body = function
            .map(Some)
            .or(filter(|t: &Token| !t.is_word("endfunction")).to(None))
            .repeated()
            .map(|items: Vec<Option<FunctionDecl>>| items.into_iter().flatten().collect::<Vec<_>>());

        keyword("function")
            .ignore_then(header)
            .then(params)
            .then(provisos())
            .then_ignore(token(Token::Semicolon))
            .then(body)
            .then_ignore(end_clause("endfunction", lowercase_identifier()))
            .map_with_span(
                |((((return_type, name), params), provisos), nested), span: Range<usize>| {
                    FunctionDecl {
                        name,
                        return_type,
                        params,
                        provisos,
                        span: span.into(),
                        nested,
                    }
                },
            )
    })
}
