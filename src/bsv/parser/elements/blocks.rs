//! Interface, typeclass, instance and module declarations.
//!
//! These four kinds share an opaque body: after the header, every token up to
//! the first occurrence of the closing keyword is consumed without looking
//! inside. None of them nests within itself, so the flat scan finds the right
//! closing keyword.

use chumsky::prelude::*;

use crate::bsv::ast::{Identifier, InstanceDecl, InterfaceDecl, ModuleDecl, TypeclassDecl};
use crate::bsv::lexer::Token;
use crate::bsv::parser::combinators::{
    capitalized_identifier, keyword, lowercase_identifier, token, ParserError,
};
use crate::bsv::parser::types::{dependencies, parenthesized, provisos, type_expr, type_formals};

/// Every token that is not the keyword `end`
pub(crate) fn opaque_body(end: &'static str) -> impl Parser<Token, (), Error = ParserError> + Clone {
    filter(move |t: &Token| !t.is_word(end))
        .repeated()
        .ignored()
}

/// `end` followed by an optional `: label`
pub(crate) fn end_clause<P>(
    end: &'static str,
    label: P,
) -> impl Parser<Token, (), Error = ParserError> + Clone
where
    P: Parser<Token, Identifier, Error = ParserError> + Clone,
{
    keyword(end).then_ignore(token(Token::Colon).then(label).or_not())
}

/// `interface Name [#(formals)] ; ... endinterface [: Name]`
pub fn interface() -> impl Parser<Token, InterfaceDecl, Error = ParserError> + Clone {
    keyword("interface")
        .ignore_then(capitalized_identifier())
        .then(type_formals().or_not())
        .then_ignore(token(Token::Semicolon))
        .then_ignore(opaque_body("endinterface"))
        .then_ignore(end_clause("endinterface", capitalized_identifier()))
        .map(|(name, formals)| InterfaceDecl { name, formals })
}

/// `typeclass Name #(formals) [provisos(...)] [dependencies(...)] ; ... endtypeclass [: Name]`
pub fn typeclass() -> impl Parser<Token, TypeclassDecl, Error = ParserError> + Clone {
    keyword("typeclass")
        .ignore_then(capitalized_identifier())
        .then(type_formals())
        .then(provisos())
        .then(dependencies().or_not())
        .then_ignore(token(Token::Semicolon))
        .then_ignore(opaque_body("endtypeclass"))
        .then_ignore(end_clause("endtypeclass", capitalized_identifier()))
        .map(
            |(((name, formals), provisos), dependencies)| TypeclassDecl {
                name,
                formals,
                provisos,
                dependencies: dependencies.unwrap_or_default(),
            },
        )
}

/// `instance Name #(types) [provisos(...)] ; ... endinstance [: Name]`
pub fn instance() -> impl Parser<Token, InstanceDecl, Error = ParserError> + Clone {
    keyword("instance")
        .ignore_then(capitalized_identifier())
        .then_ignore(token(Token::Hash))
        .then(parenthesized(type_expr()))
        .then(provisos())
        .then_ignore(token(Token::Semicolon))
        .then_ignore(opaque_body("endinstance"))
        .then_ignore(end_clause("endinstance", capitalized_identifier()))
        .map(|((name, type_args), provisos)| InstanceDecl {
            name,
            type_args,
            provisos,
        })
}

/// `module [[Context]] name ... endmodule [: name]`
pub fn module() -> impl Parser<Token, ModuleDecl, Error = ParserError> + Clone {
    keyword("module")
        .ignore_then(
            type_expr()
                .delimited_by(token(Token::LBracket), token(Token::RBracket))
                .or_not(),
        )
        .then(lowercase_identifier())
        .then_ignore(opaque_body("endmodule"))
        .then_ignore(end_clause("endmodule", lowercase_identifier()))
        .map(|(context, name)| ModuleDecl { name, context })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsv::parser::parse_complete;

    #[test]
    fn test_module_with_context() {
        let decl = parse_complete(module(), "module[m] mkTest(); endmodule : mkTest").unwrap();
        assert_eq!(decl.name.as_str(), "mkTest");
        assert!(decl.context.is_some());
    }

    #[test]
    fn test_module_body_is_opaque() {
        let source = "module mkTop(Empty);\n  Reg#(Bit#(8)) r <- mkReg(0);\n  rule tick; r <= r + 1; endrule\nendmodule";
        assert!(parse_complete(module(), source).is_ok());
    }

    #[test]
    fn test_end_keyword_in_comment_does_not_close() {
        let source = "module mkTop(Empty);\n  // endmodule\nendmodule";
        assert!(parse_complete(module(), source).is_ok());
    }

    #[test]
    fn test_unterminated_module() {
        assert!(parse_complete(module(), "module mkTop(Empty); rule r; endrule").is_err());
    }

    #[test]
    fn test_interface() {
        let plain = parse_complete(
            interface(),
            "interface Counter;\n  method Action inc;\nendinterface",
        )
        .unwrap();
        assert!(plain.formals.is_none());

        let parameterized = parse_complete(
            interface(),
            "interface Fifo#(type t);\n  method t first;\nendinterface : Fifo",
        )
        .unwrap();
        assert_eq!(parameterized.formals.map(|f| f.len()), Some(1));
    }

    #[test]
    fn test_typeclass() {
        let source = "typeclass Convert#(type a, type b)\n  dependencies (a determines b);\n  function b convert(a x);\nendtypeclass";
        let decl = parse_complete(typeclass(), source).unwrap();
        assert_eq!(decl.formals.len(), 2);
        assert_eq!(decl.dependencies.len(), 1);
        // formals are required
        assert!(parse_complete(typeclass(), "typeclass Foo; endtypeclass").is_err());
    }

    #[test]
    fn test_instance() {
        let source = "instance Convert#(Bit#(n), UInt#(n)) provisos (Add#(n, 0, n));\n  function convert = unpack;\nendinstance";
        let decl = parse_complete(instance(), source).unwrap();
        assert_eq!(decl.type_args.len(), 2);
        assert_eq!(decl.provisos.len(), 1);
    }
}
