//! Testing utilities for scanned documents
//!
//! Two tools, meant to be used together:
//!
//! 1. [`fixtures`] loads the curated BSV samples under `tests/fixtures/`, so
//!    tests share vetted sources instead of scattering BSV snippets around.
//! 2. [`assert_document`] is a fluent assertion API over a [`Document`]:
//!
//! ```rust,ignore
//! use bsvdoc::bsv::testing::{assert_document, fixtures};
//!
//! let source = fixtures::get_string("counter.bsv")?;
//! let doc = bsvdoc::bsv::scanner::scan(&source, "counter.bsv");
//!
//! assert_document(&doc)
//!     .package("Counter")
//!     .declaration_count(4)
//!     .declaration(1, |decl| {
//!         decl.kind("interface").name("Counter").doc_contains("counter");
//!     });
//! ```
//!
//! Failures name the declaration they concern:
//! ```text
//! declarations[1] (interface Counter): expected doc to contain 'counter', got None
//! ```

use crate::bsv::ast::{Declaration, DeclarationKind};
use crate::bsv::scanner::Document;

/// Create an assertion builder for a document
pub fn assert_document(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of matched declarations
    pub fn declaration_count(self, expected: usize) -> Self {
        let actual = self.doc.declarations.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} declarations, found {}: [{}]",
            expected,
            actual,
            summarize(&self.doc.declarations)
        );
        self
    }

    pub fn package(self, expected: &str) -> Self {
        let actual = self.doc.package.as_ref().map(|p| p.as_str());
        assert_eq!(actual, Some(expected), "package name");
        self
    }

    /// Assert the imported package names, in order
    pub fn imports(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.imports.iter().map(|i| i.package.as_str()).collect();
        assert_eq!(actual, expected, "imports");
        self
    }

    /// Assert the exported names, in order
    pub fn exports(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.exports.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(actual, expected, "exports");
        self
    }

    /// Assert on a specific declaration by index
    pub fn declaration<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(DeclarationAssertion<'a>),
    {
        assert!(
            index < self.doc.declarations.len(),
            "Declaration index {} out of bounds (document has {}: [{}])",
            index,
            self.doc.declarations.len(),
            summarize(&self.doc.declarations)
        );
        let decl = &self.doc.declarations[index];
        assertion(DeclarationAssertion {
            decl,
            context: format!(
                "declarations[{}] ({} {})",
                index,
                decl.kind.keyword(),
                decl.name()
            ),
        });
        self
    }
}

pub struct DeclarationAssertion<'a> {
    decl: &'a Declaration,
    context: String,
}

impl<'a> DeclarationAssertion<'a> {
    /// Assert the declaration keyword (`typedef`, `function`, ...)
    pub fn kind(self, expected: &str) -> Self {
        assert_eq!(self.decl.kind.keyword(), expected, "{}: kind", self.context);
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.decl.name().as_str(), expected, "{}: name", self.context);
        self
    }

    /// Assert the 1-based line of the declaration start
    pub fn line(self, expected: usize) -> Self {
        assert_eq!(self.decl.line, expected, "{}: line", self.context);
        self
    }

    pub fn has_parameters(self, expected: bool) -> Self {
        assert_eq!(
            self.decl.has_parameters, expected,
            "{}: has_parameters",
            self.context
        );
        self
    }

    pub fn no_doc(self) -> Self {
        assert!(
            self.decl.doc.is_none(),
            "{}: expected no doc, got {:?}",
            self.context,
            self.decl.doc
        );
        self
    }

    /// Assert the attached documentation, ignoring surrounding newlines
    pub fn doc(self, expected: &str) -> Self {
        let actual = self.decl.doc.as_deref().map(|d| d.trim_matches('\n'));
        assert_eq!(actual, Some(expected), "{}: doc", self.context);
        self
    }

    pub fn doc_contains(self, needle: &str) -> Self {
        let found = self
            .decl
            .doc
            .as_deref()
            .is_some_and(|d| d.contains(needle));
        assert!(
            found,
            "{}: expected doc to contain '{}', got {:?}",
            self.context, needle, self.decl.doc
        );
        self
    }

    /// Assert the source text covered by the declaration span
    pub fn text(self, source: &str, expected: &str) -> Self {
        assert_eq!(self.decl.span.slice(source), expected, "{}: text", self.context);
        self
    }

    /// Assert the names of functions nested directly inside this one
    pub fn nested(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = match &self.decl.kind {
            DeclarationKind::Function(f) => f.nested.iter().map(|n| n.name.as_str()).collect(),
            other => panic!(
                "{}: expected a function, found {}",
                self.context,
                other.keyword()
            ),
        };
        assert_eq!(actual, expected, "{}: nested functions", self.context);
        self
    }
}

fn summarize(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|d| format!("{} {}", d.kind.keyword(), d.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Curated BSV samples under `tests/fixtures/`
pub mod fixtures {
    use std::fs;
    use std::path::PathBuf;

    /// Available sample files
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "counter.bsv",
        "typedefs.bsv",
        "nested_functions.bsv",
        "typeclasses.bsv",
    ];

    pub fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    pub fn path(name: &str) -> PathBuf {
        fixtures_dir().join(name)
    }

    /// Read a sample file; unknown names are rejected so tests only use vetted sources
    pub fn get_string(name: &str) -> Result<String, String> {
        if !AVAILABLE_SAMPLES.contains(&name) {
            return Err(format!(
                "Sample '{}' not available. Available: {:?}",
                name, AVAILABLE_SAMPLES
            ));
        }
        fs::read_to_string(path(name)).map_err(|e| format!("Failed to read {}: {}", name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsv::scanner::scan;

    #[test]
    fn test_fluent_assertions() {
        let source = "/// Doubles\nfunction Bit#(8) dbl(Bit#(8) x);\n  return x + x;\nendfunction\n";
        let doc = scan(source, "D.bsv");
        assert_document(&doc).declaration_count(1).declaration(0, |d| {
            d.kind("function")
                .name("dbl")
                .line(2)
                .has_parameters(false)
                .doc("Doubles")
                .nested(&[]);
        });
    }

    #[test]
    #[should_panic(expected = "declarations[0] (typedef Byte): name")]
    fn test_failure_names_the_declaration() {
        let doc = scan("typedef Bit#(8) Byte;", "T.bsv");
        assert_document(&doc).declaration(0, |d| {
            d.name("Word");
        });
    }

    #[test]
    fn test_unknown_fixture_is_rejected() {
        assert!(fixtures::get_string("missing.bsv").is_err());
    }
}
