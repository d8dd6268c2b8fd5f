//! Type-expression grammar
//!
//! Three forms tried in order at each position: function type, named type,
//! numeric type. The named form refuses the word `function`, so once a
//! function type has started the expression cannot fall back to treating the
//! keyword as a type name.

use chumsky::prelude::*;

use crate::bsv::ast::{Identifier, TypeDependency, TypeExpr, TypeFormal};
use crate::bsv::lexer::Token;
use crate::bsv::parser::combinators::{
    any_identifier, int_literal, keyword, lowercase_identifier, token, ParserError,
};

/// Comma-separated, at least one item, inside parentheses
pub(crate) fn parenthesized<P, O>(item: P) -> impl Parser<Token, Vec<O>, Error = ParserError> + Clone
where
    P: Parser<Token, O, Error = ParserError> + Clone,
{
    item.separated_by(token(Token::Comma))
        .at_least(1)
        .delimited_by(token(Token::LParen), token(Token::RParen))
}

fn type_name() -> impl Parser<Token, Identifier, Error = ParserError> + Clone {
    any_identifier().try_map(|ident, span| {
        if ident.as_str() == "function" {
            Err(Simple::custom(span, "`function` is not a type name"))
        } else {
            Ok(ident)
        }
    })
}

pub fn type_expr() -> impl Parser<Token, TypeExpr, Error = ParserError> + Clone {
    recursive(|ty| {
        let function_type = keyword("function")
            .ignore_then(ty.clone())
            .then(lowercase_identifier())
            .then(parenthesized(ty.clone().then(lowercase_identifier())))
            .map(|((return_type, name), params)| TypeExpr::Function {
                return_type: Box::new(return_type),
                name,
                params: params.into_iter().map(|(param, _)| param).collect(),
            });

        let named = any_identifier()
            .then_ignore(token(Token::DoubleColon))
            .or_not()
            .then(type_name())
            .then(token(Token::Hash).ignore_then(parenthesized(ty)).or_not())
            .map(|((package, name), type_args)| TypeExpr::Named {
                package,
                name,
                type_args: type_args.unwrap_or_default(),
            });

        let numeric = int_literal().map(|literal| TypeExpr::Numeric { literal });

        function_type.or(named).or(numeric)
    })
}

/// `[numeric] type name`
pub fn type_formal() -> impl Parser<Token, TypeFormal, Error = ParserError> + Clone {
    keyword("numeric")
        .or_not()
        .then_ignore(keyword("type"))
        .then(lowercase_identifier())
        .map(|(numeric, name)| TypeFormal {
            numeric: numeric.is_some(),
            name,
        })
}

/// `#( formal, ... )`
pub fn type_formals() -> impl Parser<Token, Vec<TypeFormal>, Error = ParserError> + Clone {
    token(Token::Hash).ignore_then(parenthesized(type_formal()))
}

/// Optional `provisos( type, ... )`; absent provisos yield an empty list
pub fn provisos() -> impl Parser<Token, Vec<TypeExpr>, Error = ParserError> + Clone {
    keyword("provisos")
        .ignore_then(parenthesized(type_expr()))
        .or_not()
        .map(Option::unwrap_or_default)
}

fn type_list() -> impl Parser<Token, Vec<Identifier>, Error = ParserError> + Clone {
    lowercase_identifier()
        .map(|ident| vec![ident])
        .or(parenthesized(lowercase_identifier()))
}

/// `dependencies( (a, b) determines c, ... )`
pub fn dependencies() -> impl Parser<Token, Vec<TypeDependency>, Error = ParserError> + Clone {
    let dependency = type_list()
        .then_ignore(keyword("determines"))
        .then(type_list())
        .map(|(determining, determined)| TypeDependency {
            determining,
            determined,
        });

    keyword("dependencies").ignore_then(parenthesized(dependency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsv::parser::parse_complete;

    #[test]
    fn test_named_type_with_arguments() {
        let ty = parse_complete(type_expr(), "Vector#(2, Reg#(Bit#(32)))").unwrap();
        assert_eq!(ty.to_string(), "Vector#(2, Reg#(Bit#(32)))");
        match ty {
            TypeExpr::Named { name, type_args, .. } => {
                assert_eq!(name.as_str(), "Vector");
                assert_eq!(type_args.len(), 2);
            }
            other => panic!("expected named type, got {:?}", other),
        }
    }

    #[test]
    fn test_package_qualified_type() {
        let ty = parse_complete(type_expr(), "List::List#(t)").unwrap();
        match ty {
            TypeExpr::Named { package, .. } => {
                assert_eq!(package.map(|p| p.name), Some("List".to_string()));
            }
            other => panic!("expected named type, got {:?}", other),
        }
    }

    #[test]
    fn test_function_type() {
        let ty = parse_complete(type_expr(), "function Bit#(1) f(Bit#(1) x)").unwrap();
        assert!(matches!(ty, TypeExpr::Function { ref params, .. } if params.len() == 1));
    }

    #[test]
    fn test_numeric_type() {
        let ty = parse_complete(type_expr(), "32").unwrap();
        assert!(matches!(ty, TypeExpr::Numeric { .. }));
    }

    #[test]
    fn test_arguments_need_commas() {
        assert!(parse_complete(type_expr(), "Vector#(2 Reg#(Bit#(5)))").is_err());
        assert!(parse_complete(type_expr(), "A#(B#(C#(a))").is_err());
        assert!(parse_complete(type_expr(), "Bit#()").is_err());
    }

    #[test]
    fn test_function_keyword_is_not_a_type_name() {
        assert!(parse_complete(type_expr(), "function").is_err());
    }

    #[test]
    fn test_formals_and_provisos() {
        let formals = parse_complete(type_formals(), "#(numeric type n, type t)").unwrap();
        assert_eq!(formals.len(), 2);
        assert!(formals[0].numeric);
        assert!(!formals[1].numeric);

        let constraints = parse_complete(provisos(), "provisos(Add#(n, 1, m), Bits#(t, tSz))").unwrap();
        assert_eq!(constraints.len(), 2);
        assert_eq!(parse_complete(provisos(), "").unwrap(), Vec::new());
    }

    #[test]
    fn test_dependencies() {
        let deps = parse_complete(dependencies(), "dependencies((a, b) determines c)").unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].determining.len(), 2);
        assert_eq!(deps[0].determined[0].as_str(), "c");
    }
}
