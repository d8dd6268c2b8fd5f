//! Token definitions for BSV sources
//!
//! The tokens are defined using the logos derive macro. Keywords are not
//! separate tokens: they are identifiers compared by text, which gives keyword
//! boundaries for free (`module2` is a single identifier, `endmodule:` is an
//! identifier followed by a colon).
//!
//! Line comments are disambiguated by longest match plus priority: for input
//! where the documentation form and the ordinary form match the same text
//! (`/// x`) the documentation form wins; where the ordinary form matches more
//! text (`//// x`), it wins. Block comments are scanned by a callback up to the
//! first `*/` and classified from their opening.
use logos::{Lexer, Logos};

/// Style of a `/* ... */` comment
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum BlockKind {
    /// Opens with `/**` and has a body (`/**/` is not documentation)
    Doc,
    Plain,
}

/// All possible tokens in a BSV source file
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Comments
    #[regex(r"///(([^/\n]|\\\n)([^\n]|\\\n)*)?", priority = 20)]
    DocLineComment,
    #[token("/*", block_comment)]
    BlockComment(BlockKind),
    #[regex(r"//([^\n]|\\\n)*", priority = 10)]
    LineComment,

    // Names
    #[regex(r"[A-Za-z_][A-Za-z0-9_$]*", |lex| lex.slice().to_owned())]
    Ident(String),
    #[regex(r"\$[A-Za-z0-9_$]+", |lex| lex.slice().to_owned())]
    SystemIdent(String),
    #[regex(r"`[A-Za-z_][A-Za-z0-9_$]*", |lex| lex.slice().to_owned())]
    Directive(String),

    // Literals
    #[regex(r"[0-9][0-9_]*", |lex| lex.slice().to_owned())]
    Number(String),
    #[regex(r"[0-9]*'[hH][0-9A-Fa-f_]+", |lex| lex.slice().to_owned())]
    #[regex(r"[0-9]*'[oO][0-7_]+", |lex| lex.slice().to_owned())]
    #[regex(r"[0-9]*'[bB][01_]+", |lex| lex.slice().to_owned())]
    #[regex(r"[0-9]*'[dD][0-9_]+", |lex| lex.slice().to_owned())]
    BasedLiteral(String),
    #[regex(r"'[01]", |lex| lex.slice().to_owned())]
    FillLiteral(String),
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLiteral,

    // Punctuation
    #[token("::")]
    DoubleColon,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("#")]
    Hash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("=")]
    Equals,
    #[token("..")]
    DotDot,
    #[token(".")]
    Dot,
    #[token("*")]
    Star,

    /// Anything the lexer has no rule for (operators, attributes, stray bytes).
    /// Produced from logos errors rather than matched directly.
    Other,
}

impl Token {
    /// Check if this token is the identifier `word`
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self, Token::Ident(name) if name == word)
    }

    /// Check if this token is any of the four comment forms
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            Token::DocLineComment | Token::BlockComment(_) | Token::LineComment
        )
    }
}

/// Consume a block comment through its closing `*/`.
///
/// An unterminated `/*` is a lexer error covering just the opener, so the rest
/// of the input is still tokenized.
fn block_comment(lex: &mut Lexer<Token>) -> Option<BlockKind> {
    let rest = lex.remainder();
    let close = rest.find("*/")?;
    lex.bump(close + 2);
    if close > 0 && rest.starts_with('*') {
        Some(BlockKind::Doc)
    } else {
        Some(BlockKind::Plain)
    }
}
