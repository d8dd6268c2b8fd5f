//! Package headers, imports and exports.
//!
//! `package Name;` is terminal at this level: the package body is not
//! captured, so every declaration inside it is still found by the scan.

use chumsky::prelude::*;
use std::ops::Range;

use crate::bsv::ast::{Export, Import, PackageDecl};
use crate::bsv::lexer::Token;
use crate::bsv::parser::combinators::{
    any_identifier, capitalized_identifier, keyword, token, ParserError,
};

/// `package Name ;`
pub fn package() -> impl Parser<Token, PackageDecl, Error = ParserError> + Clone {
    keyword("package")
        .ignore_then(capitalized_identifier())
        .then_ignore(token(Token::Semicolon))
        .map(|name| PackageDecl { name })
}

/// `import Name :: * ;`
pub fn import_statement() -> impl Parser<Token, Import, Error = ParserError> + Clone {
    keyword("import")
        .ignore_then(capitalized_identifier())
        .then_ignore(token(Token::DoubleColon))
        .then_ignore(token(Token::Star))
        .then_ignore(token(Token::Semicolon))
        .map_with_span(|package, span: Range<usize>| Import {
            package,
            span: span.into(),
        })
}

/// `export name ;` or `export Name(..) ;`
pub fn export_statement() -> impl Parser<Token, Export, Error = ParserError> + Clone {
    let members = token(Token::LParen)
        .then(token(Token::DotDot))
        .then(token(Token::RParen));

    keyword("export")
        .ignore_then(any_identifier())
        .then(members.or_not())
        .then_ignore(token(Token::Semicolon))
        .map_with_span(|(name, members), span: Range<usize>| Export {
            name,
            with_members: members.is_some(),
            span: span.into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsv::parser::parse_complete;

    #[test]
    fn test_package() {
        let decl = parse_complete(package(), "package Fifo;").unwrap();
        assert_eq!(decl.name.as_str(), "Fifo");
        assert!(parse_complete(package(), "package fifo;").is_err());
    }

    #[test]
    fn test_import() {
        let import = parse_complete(import_statement(), "import Vector :: *;").unwrap();
        assert_eq!(import.package.as_str(), "Vector");
        assert_eq!((import.span.start, import.span.end), (0, 19));
        assert!(parse_complete(import_statement(), "import Vector::mkReg;").is_err());
    }

    #[test]
    fn test_export() {
        let plain = parse_complete(export_statement(), "export mkFifo;").unwrap();
        assert!(!plain.with_members);
        let full = parse_complete(export_statement(), "export Fifo(..);").unwrap();
        assert!(full.with_members);
        assert_eq!(full.name.as_str(), "Fifo");
    }
}
