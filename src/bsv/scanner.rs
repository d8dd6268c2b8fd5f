//! Scan driver
//!
//! Walks the token stream of one file once, leftmost and non-overlapping. At
//! each position a comment is classified first; otherwise, if the token is a
//! declaration or statement keyword, the grammars are tried from there. A
//! position where nothing matches is skipped one token at a time.
//!
//! Documentation state lives in the [`Scanner`], never in a global, so two
//! scans cannot leak pending documentation into each other.

use chumsky::prelude::*;
use std::ops::Range;

use crate::bsv::ast::{Declaration, DeclarationKind, Export, Identifier, Import, SourceLocation};
use crate::bsv::comments::{CommentClass, DocAccumulator};
use crate::bsv::lexer::{tokenize_with_spans, Token};
use crate::bsv::parser::{declaration, statement, token_stream, ParserError, Statement};

/// Keywords that can open a documented declaration
const DECLARATION_KEYWORDS: &[&str] = &[
    "package",
    "typedef",
    "interface",
    "typeclass",
    "instance",
    "module",
    "function",
];

/// Keywords that open an import or export statement
const STATEMENT_KEYWORDS: &[&str] = &["import", "export"];

/// Everything recognized in one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path used for links; the file is never reopened
    pub path: String,
    pub package: Option<Identifier>,
    /// Matched declarations in source order
    pub declarations: Vec<Declaration>,
    pub imports: Vec<Import>,
    pub exports: Vec<Export>,
}

impl Document {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            package: None,
            declarations: Vec::new(),
            imports: Vec::new(),
            exports: Vec::new(),
        }
    }
}

type Spanned<T> = (T, Range<usize>);

pub struct Scanner {
    declaration: BoxedParser<'static, Token, Spanned<DeclarationKind>, ParserError>,
    statement: BoxedParser<'static, Token, Spanned<Statement>, ParserError>,
    docs: DocAccumulator,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            declaration: declaration()
                .map_with_span(|kind, span| (kind, span))
                .boxed(),
            statement: statement()
                .map_with_span(|stmt, span| (stmt, span))
                .boxed(),
            docs: DocAccumulator::new(),
        }
    }

    /// Documentation collected after the last declaration of the previous scan
    pub fn pending_doc(&self) -> &str {
        self.docs.pending()
    }

    /// Scan `source`, using `path` only to label the resulting document
    #[tracing::instrument(skip_all, fields(path = %path, source_len = source.len()))]
    pub fn scan(&mut self, source: &str, path: &str) -> Document {
        let tokens = tokenize_with_spans(source);
        let location = SourceLocation::new(source);
        let mut document = Document::new(path);
        self.docs.clear();

        let mut index = 0;
        while index < tokens.len() {
            let (token, span) = &tokens[index];

            if let Some(class) = CommentClass::of(token) {
                self.docs.observe(class, &source[span.clone()]);
                index += 1;
                continue;
            }

            if is_one_of(token, DECLARATION_KEYWORDS) {
                if let Ok((kind, matched)) = self.declaration.parse(token_stream(&tokens[index..])) {
                    let line = location.line_of(matched.start);
                    let doc = self.docs.take();
                    tracing::debug!(
                        kind = kind.keyword(),
                        name = %kind.name(),
                        line,
                        documented = doc.is_some(),
                        "matched declaration"
                    );
                    let decl = Declaration::new(kind, matched.clone().into(), line, doc);
                    if decl.is_package() && document.package.is_none() {
                        document.package = Some(decl.name().clone());
                    }
                    document.declarations.push(decl);
                    index = next_index(&tokens, index, matched.end);
                    continue;
                }
            } else if is_one_of(token, STATEMENT_KEYWORDS) {
                if let Ok((stmt, matched)) = self.statement.parse(token_stream(&tokens[index..])) {
                    match stmt {
                        Statement::Import(import) => {
                            tracing::debug!(package = %import.package, "matched import");
                            document.imports.push(import);
                        }
                        Statement::Export(export) => {
                            tracing::debug!(name = %export.name, "matched export");
                            document.exports.push(export);
                        }
                    }
                    index = next_index(&tokens, index, matched.end);
                    continue;
                }
            }

            index += 1;
        }

        if !self.docs.is_empty() {
            tracing::trace!(pending = %self.docs.pending(), "documentation left unattached");
        }
        document
    }
}

/// Scan one file with a fresh [`Scanner`]
pub fn scan(source: &str, path: &str) -> Document {
    Scanner::new().scan(source, path)
}

fn is_one_of(token: &Token, words: &[&str]) -> bool {
    words.iter().any(|word| token.is_word(word))
}

/// Index of the first token at or after `index` that ends past `end`
fn next_index(tokens: &[Spanned<Token>], index: usize, end: usize) -> usize {
    let consumed = tokens[index..].partition_point(|(_, span)| span.end <= end);
    index + consumed.max(1)
}
