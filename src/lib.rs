//! # bsvdoc
//!
//! A documentation extractor for Bluespec SystemVerilog (BSV) sources.
//!
//! The extractor scans a source file once, recognizes top-level declarations
//! (packages, typedefs, interfaces, typeclasses, instances, modules and
//! functions), attaches the documentation comment that immediately precedes
//! each one, and renders a navigable Markdown page (or JSON).
//!
//! ```text
//! source --lex--> tokens --scan--> Document --format--> markdown / json
//! ```
//!
//! The entry point for most callers is [`bsv::processor::process_file`].

pub mod bsv;
