//! File processing API
//!
//! Reads one source file, scans it, and renders it in the configured output
//! format. The path doubles as the link target in Markdown headings; it is
//! used exactly as given.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::bsv::config::BsvDocConfig;
use crate::bsv::error::BsvDocError;
use crate::bsv::scanner::scan;

/// Render already-loaded `source`, labelled with `path`
pub fn process_source(
    source: &str,
    path: &str,
    config: &BsvDocConfig,
) -> Result<String, BsvDocError> {
    let document = scan(source, path);
    tracing::info!(
        path,
        declarations = document.declarations.len(),
        format = %config.output.format,
        "scanned document"
    );
    config
        .output
        .format
        .formatter(&config.render)
        .serialize(&document, source)
}

/// Read and render the file at `file_path`
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    config: &BsvDocConfig,
) -> Result<String, BsvDocError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path).map_err(|source| BsvDocError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    process_source(&content, &file_path.to_string_lossy(), config)
}

/// Write rendered output and flush; a closed pipe surfaces as [`BsvDocError::Write`]
pub fn write_output<W: Write>(out: &mut W, rendered: &str) -> Result<(), BsvDocError> {
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
