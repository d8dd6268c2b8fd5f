//! JSON serialization of a scanned document.
//!
//! The AST nodes serialize themselves; this module adds what only the source
//! can supply (declaration text) and flattens identifiers to plain strings at
//! the top level.

use serde::Serialize;

use crate::bsv::ast::{Declaration, DeclarationKind, TokenSpan};
use crate::bsv::error::BsvDocError;
use crate::bsv::formats::Formatter;
use crate::bsv::scanner::Document;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document, source: &str) -> Result<String, BsvDocError> {
        Ok(render_json(doc, source)?)
    }
}

#[derive(Serialize)]
struct DocumentView<'a> {
    path: &'a str,
    package: Option<&'a str>,
    imports: Vec<&'a str>,
    exports: Vec<ExportView<'a>>,
    declarations: Vec<DeclarationView<'a>>,
}

#[derive(Serialize)]
struct ExportView<'a> {
    name: &'a str,
    with_members: bool,
}

#[derive(Serialize)]
struct DeclarationView<'a> {
    kind: &'static str,
    name: &'a str,
    line: usize,
    span: TokenSpan,
    has_parameters: bool,
    doc: Option<&'a str>,
    source: &'a str,
    /// Names of functions defined inside this one
    #[serde(skip_serializing_if = "Vec::is_empty")]
    nested: Vec<&'a str>,
    detail: &'a DeclarationKind,
}

impl<'a> DeclarationView<'a> {
    fn new(decl: &'a Declaration, source: &'a str) -> Self {
        let nested = match &decl.kind {
            DeclarationKind::Function(function) => function
                .nested
                .iter()
                .map(|inner| inner.name.as_str())
                .collect(),
            _ => Vec::new(),
        };
        Self {
            kind: decl.kind.keyword(),
            name: decl.name().as_str(),
            line: decl.line,
            span: decl.span,
            has_parameters: decl.has_parameters,
            doc: decl
                .doc
                .as_deref()
                .map(|d| d.trim_matches('\n'))
                .filter(|d| !d.trim().is_empty()),
            source: decl.span.slice(source),
            nested,
            detail: &decl.kind,
        }
    }
}

/// Serialize `doc` as pretty-printed JSON
pub fn render_json(doc: &Document, source: &str) -> Result<String, serde_json::Error> {
    let view = DocumentView {
        path: &doc.path,
        package: doc.package.as_ref().map(|p| p.as_str()),
        imports: doc.imports.iter().map(|i| i.package.as_str()).collect(),
        exports: doc
            .exports
            .iter()
            .map(|e| ExportView {
                name: e.name.as_str(),
                with_members: e.with_members,
            })
            .collect(),
        declarations: doc
            .declarations
            .iter()
            .map(|decl| DeclarationView::new(decl, source))
            .collect(),
    };
    serde_json::to_string_pretty(&view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsv::scanner::scan;
    use serde_json::Value;

    #[test]
    fn test_json_carries_source_and_doc() {
        let source = "package P;\nimport FIFO::*;\n/** Adds one */\nfunction Bit#(8) inc(Bit#(8) x);\n  function Bit#(8) id(Bit#(8) y); return y; endfunction\n  return x + 1;\nendfunction\n";
        let doc = scan(source, "P.bsv");
        let json: Value = serde_json::from_str(&render_json(&doc, source).unwrap()).unwrap();

        assert_eq!(json["package"], "P");
        assert_eq!(json["imports"][0], "FIFO");

        let function = &json["declarations"][1];
        assert_eq!(function["kind"], "function");
        assert_eq!(function["name"], "inc");
        assert_eq!(function["line"], 4);
        assert_eq!(function["doc"], "Adds one");
        assert_eq!(function["nested"][0], "id");
        assert!(function["source"]
            .as_str()
            .unwrap()
            .starts_with("function Bit#(8) inc"));
        assert_eq!(function["detail"]["kind"], "function");
    }

    #[test]
    fn test_undocumented_declaration_has_null_doc() {
        let source = "typedef Bit#(8) Byte;";
        let doc = scan(source, "T.bsv");
        let json: Value = serde_json::from_str(&render_json(&doc, source).unwrap()).unwrap();
        assert!(json["declarations"][0]["doc"].is_null());
        assert!(json["declarations"][0].get("nested").is_none());
    }
}
