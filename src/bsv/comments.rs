//! Comment classification and the pending-documentation accumulator
//!
//! Every comment token falls into exactly one of four classes. Documentation comments append their
//! normalized body to the accumulator; ordinary comments discard whatever is
//! pending, so only documentation that *immediately* precedes a declaration is
//! ever attached to it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::bsv::lexer::{BlockKind, Token};

/// Trailing `*/` of a block comment, with any run of stars before it
static BLOCK_CLOSE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]*\*+/\z").unwrap());

/// Opening `/**` on the first line of a documentation block
static BLOCK_OPEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A\s*/\*\*[ \t]?").unwrap());

/// Leading `*` gutter on continuation lines
static BLOCK_GUTTER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A[ \t]*\*[ \t]?").unwrap());

/// `///` marker at the start of every physical line of a line comment
static LINE_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*///[ \t]?").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentClass {
    DocBlock,
    DocLine,
    Block,
    Line,
}

impl CommentClass {
    /// Classify a token; `None` for anything that is not a comment
    pub fn of(token: &Token) -> Option<Self> {
        match token {
            Token::BlockComment(BlockKind::Doc) => Some(CommentClass::DocBlock),
            Token::DocLineComment => Some(CommentClass::DocLine),
            Token::BlockComment(BlockKind::Plain) => Some(CommentClass::Block),
            Token::LineComment => Some(CommentClass::Line),
            _ => None,
        }
    }

    pub fn is_documentation(self) -> bool {
        matches!(self, CommentClass::DocBlock | CommentClass::DocLine)
    }

    /// Strip comment markers from `text`, the full source slice of the comment
    pub fn normalize(self, text: &str) -> String {
        match self {
            CommentClass::DocBlock | CommentClass::Block => normalize_block(text),
            CommentClass::DocLine | CommentClass::Line => normalize_line(text),
        }
    }
}

/// Body of a `/** ... */` comment.
///
/// The opening `/**` and closing `*/` are removed, as is the conventional
/// ` * ` gutter on each following line. Leading and trailing blank lines are
/// dropped.
pub fn normalize_block(text: &str) -> String {
    let inner = BLOCK_CLOSE_REGEX.replace(text, "");
    let lines: Vec<String> = inner
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let stripped = if i == 0 {
                BLOCK_OPEN_REGEX.replace(line, "")
            } else {
                BLOCK_GUTTER_REGEX.replace(line, "")
            };
            stripped.trim_end().to_string()
        })
        .collect();
    trim_blank_lines(&lines).join("\n")
}

/// Body of a `///` comment, including any backslash-continued lines
pub fn normalize_line(text: &str) -> String {
    LINE_MARKER_REGEX
        .replace_all(text, "")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

fn trim_blank_lines(lines: &[String]) -> &[String] {
    let start = lines
        .iter()
        .position(|l| !l.is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}

/// Documentation seen since the last declaration or ordinary comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocAccumulator {
    pending: String,
}

impl DocAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one comment. Returns the class it was filed under.
    pub fn observe(&mut self, class: CommentClass, text: &str) -> CommentClass {
        if class.is_documentation() {
            let body = class.normalize(text);
            tracing::trace!(?class, body = %body, "collected documentation");
            self.pending.push('\n');
            self.pending.push_str(&body);
        } else if !self.pending.is_empty() {
            tracing::trace!(?class, discarded = %self.pending, "ordinary comment discards documentation");
            self.pending.clear();
        }
        class
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Hand the pending documentation to a declaration and reset.
    ///
    /// Returns `None` when nothing was collected.
    pub fn take(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending))
        }
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(
            CommentClass::of(&Token::BlockComment(BlockKind::Doc)),
            Some(CommentClass::DocBlock)
        );
        assert_eq!(CommentClass::of(&Token::LineComment), Some(CommentClass::Line));
        assert_eq!(CommentClass::of(&Token::Semicolon), None);
        assert!(CommentClass::DocLine.is_documentation());
        assert!(!CommentClass::Block.is_documentation());
    }

    #[test]
    fn test_normalize_block() {
        assert_eq!(normalize_block("/** one liner */"), "one liner");
        let text = "/**\n * First line\n *   indented\n *\n * Last\n */";
        assert_eq!(normalize_block(text), "First line\n  indented\n\nLast");
        assert_eq!(normalize_block("/** stars ***/"), "stars");
    }

    #[test]
    fn test_normalize_line() {
        assert_eq!(normalize_line("/// Hello"), "Hello");
        assert_eq!(normalize_line("///Hello"), "Hello");
        assert_eq!(normalize_line("///"), "");
        assert_eq!(normalize_line("/// a \\\n/// b"), "a \\\nb");
    }

    #[test]
    fn test_consecutive_docs_accumulate() {
        let mut acc = DocAccumulator::new();
        acc.observe(CommentClass::DocLine, "/// first");
        acc.observe(CommentClass::DocLine, "/// second");
        assert_eq!(acc.pending(), "\nfirst\nsecond");
        assert_eq!(acc.take().as_deref(), Some("\nfirst\nsecond"));
        assert!(acc.is_empty());
        assert_eq!(acc.take(), None);
    }

    #[test]
    fn test_ordinary_comment_clears() {
        let mut acc = DocAccumulator::new();
        acc.observe(CommentClass::DocBlock, "/** stale */");
        acc.observe(CommentClass::Line, "// interruption");
        assert!(acc.is_empty());

        acc.observe(CommentClass::DocLine, "/// fresh");
        acc.observe(CommentClass::Block, "/* note */");
        assert_eq!(acc.take(), None);
    }
}
