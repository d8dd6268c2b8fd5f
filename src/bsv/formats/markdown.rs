//! Markdown rendering
//!
//! One entry per declaration, in scan order:
//!
//! ~~~text
//! ## [name](path#L12)
//!
//! documentation
//! ```bluespec
//! <declaration text>
//! ```
//!
//! ~~~
//!
//! Packages render only a heading with their bare name. Every entry ends with
//! a blank separator line.

use crate::bsv::ast::Declaration;
use crate::bsv::config::RenderConfig;
use crate::bsv::error::BsvDocError;
use crate::bsv::formats::Formatter;
use crate::bsv::scanner::Document;

pub struct MarkdownFormatter {
    config: RenderConfig,
}

impl MarkdownFormatter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl Formatter for MarkdownFormatter {
    fn name(&self) -> &str {
        "markdown"
    }

    fn serialize(&self, doc: &Document, source: &str) -> Result<String, BsvDocError> {
        Ok(render_markdown(doc, source, &self.config))
    }
}

/// Render every declaration of `doc` as Markdown
pub fn render_markdown(doc: &Document, source: &str, config: &RenderConfig) -> String {
    let mut out = String::new();
    for decl in &doc.declarations {
        render_declaration(&mut out, decl, &doc.path, source, config);
    }
    out
}

fn render_declaration(
    out: &mut String,
    decl: &Declaration,
    path: &str,
    source: &str,
    config: &RenderConfig,
) {
    let level = config.heading_level(decl.is_package(), decl.has_parameters);
    let hashes = "#".repeat(level.max(1));

    if decl.is_package() {
        out.push_str(&format!("{} {}\n", hashes, decl.name()));
    } else {
        out.push_str(&format!(
            "{} [{}]({}{}#L{})\n",
            hashes,
            decl.name(),
            config.link_prefix,
            path,
            decl.line
        ));
    }

    // Pending documentation starts with a newline, which separates it from the heading.
    // Blank doc comments still print, as blank lines.
    if let Some(doc) = decl.doc.as_deref() {
        out.push_str(doc);
        out.push('\n');
    }

    if !decl.is_package() {
        out.push_str(&format!("```{}\n", config.code_language));
        out.push_str(decl.span.slice(source));
        out.push_str("\n```\n");
    }

    out.push('\n');
}
