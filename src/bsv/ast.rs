//! AST module for BSV declarations
//!
//! The AST only captures the syntactic shape needed to locate declarations
//! and their names. Bodies stay opaque: a declaration keeps the byte span of
//! its full text and the renderer re-slices the original source.

pub mod declaration;
pub mod identifier;
pub mod literal;
pub mod location;
pub mod types;

pub use declaration::{
    Declaration, DeclarationKind, EnumElement, Export, FunctionDecl, Import, InstanceDecl,
    InterfaceDecl, Member, ModuleDecl, PackageDecl, TypeDependency, TypeFormal, TypeclassDecl,
    TypedefBody, TypedefDecl,
};
pub use identifier::{Identifier, IdentifierCase};
pub use literal::{Base, IntLiteral};
pub use location::{SourceLocation, TokenSpan};
pub use types::TypeExpr;
