//! One recognizer per declaration kind.
//!
//! Every recognizer starts with its introducing keyword, so the scan driver
//! only needs to try them at keyword tokens.

pub mod blocks;
pub mod functions;
pub mod packages;
pub mod typedefs;

pub use blocks::{instance, interface, module, typeclass};
pub use functions::function;
pub use packages::{export_statement, import_statement, package};
pub use typedefs::typedef;
