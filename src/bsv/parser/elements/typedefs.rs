//! Typedef forms: alias, enum, struct and tagged union.
//!
//! Struct and union member blocks are mutually recursive: either may contain
//! a nested anonymous `struct { ... } Tag;` or `union tagged { ... } Tag;`.
//! Struct fields are named with lower-case identifiers, union members with
//! capitalized tags.

use chumsky::prelude::*;

use crate::bsv::ast::{EnumElement, Identifier, Member, TypeFormal, TypedefBody, TypedefDecl};
use crate::bsv::lexer::Token;
use crate::bsv::parser::combinators::{
    capitalized_identifier, int_literal, keyword, lowercase_identifier, token, ParserError,
};
use crate::bsv::parser::types::{parenthesized, type_expr, type_formals};

type MemberParser = Recursive<'static, Token, Member, ParserError>;

/// The capitalized name (plus optional formals) that ends every typedef
fn typedef_type(
) -> impl Parser<Token, (Identifier, Option<Vec<TypeFormal>>), Error = ParserError> + Clone {
    capitalized_identifier().then(type_formals().or_not())
}

/// Optional `deriving( Class, ... )`
fn deriving() -> impl Parser<Token, Vec<Identifier>, Error = ParserError> + Clone {
    keyword("deriving")
        .ignore_then(parenthesized(capitalized_identifier()))
        .or_not()
        .map(Option::unwrap_or_default)
}

fn enum_element() -> impl Parser<Token, EnumElement, Error = ParserError> + Clone {
    capitalized_identifier()
        .then(token(Token::Equals).ignore_then(int_literal()).or_not())
        .map(|(name, value)| EnumElement { name, value })
}

fn member_block(member: MemberParser) -> impl Parser<Token, Vec<Member>, Error = ParserError> + Clone {
    member
        .repeated()
        .at_least(1)
        .delimited_by(token(Token::LBrace), token(Token::RBrace))
}

/// Build the struct-member and union-member rules together
fn member_parsers() -> (MemberParser, MemberParser) {
    let mut struct_member: MemberParser = Recursive::declare();
    let mut union_member: MemberParser = Recursive::declare();

    let substruct = keyword("struct")
        .ignore_then(member_block(struct_member.clone()))
        .then(capitalized_identifier())
        .then_ignore(token(Token::Semicolon))
        .map(|(members, tag)| Member::Struct { members, tag });

    let subunion = keyword("union")
        .ignore_then(keyword("tagged"))
        .ignore_then(member_block(union_member.clone()))
        .then(capitalized_identifier())
        .then_ignore(token(Token::Semicolon))
        .map(|(members, tag)| Member::Union { members, tag });

    let nested = subunion.or(substruct);

    struct_member.define(
        type_expr()
            .then(lowercase_identifier())
            .then_ignore(token(Token::Semicolon))
            .map(|(ty, name)| Member::Field { ty, name })
            .or(nested.clone()),
    );

    union_member.define(
        type_expr()
            .then(capitalized_identifier())
            .then_ignore(token(Token::Semicolon))
            .map(|(ty, name)| Member::Field { ty, name })
            .or(nested),
    );

    (struct_member, union_member)
}

/// Any of the four typedef forms, tried alias first
pub fn typedef() -> impl Parser<Token, TypedefDecl, Error = ParserError> + Clone {
    let (struct_member, union_member) = member_parsers();

    let alias = type_expr()
        .then(typedef_type())
        .then_ignore(token(Token::Semicolon))
        .map(|(ty, (name, formals))| TypedefDecl {
            name,
            formals,
            body: TypedefBody::Alias { ty },
            deriving: Vec::new(),
        });

    let enumeration = keyword("enum")
        .ignore_then(
            enum_element()
                .separated_by(token(Token::Comma))
                .at_least(1)
                .delimited_by(token(Token::LBrace), token(Token::RBrace)),
        )
        .then(typedef_type())
        .then(deriving())
        .then_ignore(token(Token::Semicolon))
        .map(|((elements, (name, formals)), deriving)| TypedefDecl {
            name,
            formals,
            body: TypedefBody::Enum { elements },
            deriving,
        });

    let structure = keyword("struct")
        .ignore_then(member_block(struct_member))
        .then(typedef_type())
        .then(deriving())
        .then_ignore(token(Token::Semicolon))
        .map(|((members, (name, formals)), deriving)| TypedefDecl {
            name,
            formals,
            body: TypedefBody::Struct { members },
            deriving,
        });

    let tagged_union = keyword("union")
        .ignore_then(keyword("tagged"))
        .ignore_then(member_block(union_member))
        .then(typedef_type())
        .then(deriving())
        .then_ignore(token(Token::Semicolon))
        .map(|((members, (name, formals)), deriving)| TypedefDecl {
            name,
            formals,
            body: TypedefBody::TaggedUnion { members },
            deriving,
        });

    keyword("typedef").ignore_then(choice((alias, enumeration, structure, tagged_union)))
}
