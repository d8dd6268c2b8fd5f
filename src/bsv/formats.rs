//! Output formats for scanned documents
//!
//! Each format implements [`Formatter`]. Formatters re-slice the original
//! source for declaration text, so they take it alongside the [`Document`].
//! - markdown: headings with source links, documentation, fenced declaration text
//! - json: the document model serialized with serde

pub mod json;
pub mod markdown;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::bsv::config::RenderConfig;
use crate::bsv::error::BsvDocError;
use crate::bsv::scanner::Document;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;

/// Trait for document formatters
pub trait Formatter {
    /// The name of this format, as accepted on the command line
    fn name(&self) -> &str;

    /// Serialize a scanned document; `source` is the text it was scanned from
    fn serialize(&self, doc: &Document, source: &str) -> Result<String, BsvDocError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Markdown, OutputFormat::Json];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        }
    }

    /// Build the formatter for this format
    pub fn formatter(self, render: &RenderConfig) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(render.clone())),
            OutputFormat::Json => Box::new(JsonFormatter),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = BsvDocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| BsvDocError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_names() {
        assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        match "html".parse::<OutputFormat>() {
            Err(BsvDocError::UnknownFormat(name)) => assert_eq!(name, "html"),
            other => panic!("expected UnknownFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_formatter_names_match_formats() {
        let render = RenderConfig::default();
        for format in OutputFormat::ALL {
            assert_eq!(format.formatter(&render).name(), format.as_str());
        }
    }
}
