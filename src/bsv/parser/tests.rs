use chumsky::Parser;

use crate::bsv::ast::{DeclarationKind, TypedefBody};
use crate::bsv::lexer::tokenize_with_spans;
use crate::bsv::parser::api::{declaration, parse_complete, statement, token_stream, Statement};

#[test]
fn test_declaration_dispatch() {
    let cases = [
        ("package Fifo;", "package"),
        ("typedef Bit#(8) Byte;", "typedef"),
        ("interface Ifc; endinterface", "interface"),
        ("typeclass Tc#(type t); endtypeclass", "typeclass"),
        ("instance Tc#(Bool); endinstance", "instance"),
        ("module mkTop(Empty); endmodule", "module"),
        ("function Bool f(); endfunction", "function"),
    ];
    for (source, expected) in cases {
        let kind = parse_complete(declaration(), source)
            .unwrap_or_else(|e| panic!("{} failed: {:?}", source, e));
        assert_eq!(kind.keyword(), expected, "{}", source);
    }
}

#[test]
fn test_declaration_matches_prefix() {
    // Scanning parses a prefix and leaves the rest for later positions
    let source = "typedef enum { A, B } AB deriving (Bits); module mkTop; endmodule";
    let tokens = tokenize_with_spans(source);
    let (kind, span) = declaration()
        .map_with_span(|kind, span| (kind, span))
        .parse(token_stream(&tokens))
        .unwrap();
    assert!(matches!(
        kind,
        DeclarationKind::Typedef(ref t) if matches!(t.body, TypedefBody::Enum { .. })
    ));
    assert_eq!(&source[span], "typedef enum { A, B } AB deriving (Bits);");
}

#[test]
fn test_declaration_rejects_non_keywords() {
    let tokens = tokenize_with_spans("rule tick; endrule");
    assert!(declaration().parse(token_stream(&tokens)).is_err());
}

#[test]
fn test_statement() {
    assert!(matches!(
        parse_complete(statement(), "import FIFO::*;"),
        Ok(Statement::Import(_))
    ));
    assert!(matches!(
        parse_complete(statement(), "export Fifo(..);"),
        Ok(Statement::Export(_))
    ));
}
