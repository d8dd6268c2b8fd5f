//! Implementation of the BSV lexer
//!
//! This module provides convenience functions for tokenizing BSV text.
//! The actual tokenization is handled entirely by logos.

use crate::bsv::lexer::tokens::Token;
use logos::Logos;
use std::ops::Range;

/// Tokenize a string and collect all tokens (spans dropped)
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Tokenize a string and collect tokens with their byte spans.
///
/// Input the lexer has no rule for is kept as [`Token::Other`] rather than
/// dropped, so opaque bodies still see it and spans stay contiguous.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.unwrap_or(Token::Other), lexer.span()));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsv::lexer::tokens::BlockKind;

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize("typedef Bit#(8) Byte;");
        assert_eq!(
            tokens,
            vec![
                Token::Ident("typedef".to_string()),
                Token::Ident("Bit".to_string()),
                Token::Hash,
                Token::LParen,
                Token::Number("8".to_string()),
                Token::RParen,
                Token::Ident("Byte".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = tokenize_with_spans("// é\nfoo");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], (Token::LineComment, 0..5));
        assert_eq!(tokens[1], (Token::Ident("foo".to_string()), 6..9));
    }

    #[test]
    fn test_unknown_input_is_kept() {
        let tokens = tokenize("a + b");
        assert_eq!(
            tokens,
            vec![
                Token::Ident("a".to_string()),
                Token::Other,
                Token::Ident("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_comment_hides_keywords() {
        let tokens = tokenize("/* endmodule */ \"endmodule\"");
        assert_eq!(
            tokens,
            vec![
                Token::BlockComment(BlockKind::Plain),
                Token::StringLiteral,
            ]
        );
    }

    #[test]
    fn test_empty_block_comment_spans() {
        let tokens = tokenize_with_spans("/**/\nfunction");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].1, 0..4);
        assert_eq!(tokens[1], (Token::Ident("function".to_string()), 5..13));
    }
}
