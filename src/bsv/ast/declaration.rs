//! Declaration nodes
//!
//! One payload struct per declaration kind, wrapped in [`DeclarationKind`].
//! Every matched declaration also carries its byte span, whether it carries
//! formal/type-argument parameters, and the documentation attached to it.
//!
//! Only functions nest: a [`FunctionDecl`] keeps the nested function
//! definitions found in its body. Interface, typeclass, instance and module
//! bodies are opaque.

use serde::Serialize;

use super::identifier::Identifier;
use super::literal::IntLiteral;
use super::location::TokenSpan;
use super::types::TypeExpr;

/// `[numeric] type name` inside a `#( ... )` formal list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeFormal {
    pub numeric: bool,
    pub name: Identifier,
}

/// `(a, b) determines (c)` inside `dependencies( ... )`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDependency {
    pub determining: Vec<Identifier>,
    pub determined: Vec<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumElement {
    pub name: Identifier,
    pub value: Option<IntLiteral>,
}

/// A member of a struct or tagged union
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum Member {
    Field { ty: TypeExpr, name: Identifier },
    Struct { members: Vec<Member>, tag: Identifier },
    Union { members: Vec<Member>, tag: Identifier },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum TypedefBody {
    Alias { ty: TypeExpr },
    Enum { elements: Vec<EnumElement> },
    Struct { members: Vec<Member> },
    TaggedUnion { members: Vec<Member> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDecl {
    pub name: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypedefDecl {
    pub name: Identifier,
    pub formals: Option<Vec<TypeFormal>>,
    pub body: TypedefBody,
    pub deriving: Vec<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceDecl {
    pub name: Identifier,
    pub formals: Option<Vec<TypeFormal>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeclassDecl {
    pub name: Identifier,
    pub formals: Vec<TypeFormal>,
    pub provisos: Vec<TypeExpr>,
    pub dependencies: Vec<TypeDependency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceDecl {
    pub name: Identifier,
    pub type_args: Vec<TypeExpr>,
    pub provisos: Vec<TypeExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDecl {
    pub name: Identifier,
    pub context: Option<TypeExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDecl {
    pub name: Identifier,
    pub return_type: Option<TypeExpr>,
    pub params: Vec<(TypeExpr, Option<Identifier>)>,
    pub provisos: Vec<TypeExpr>,
    pub span: TokenSpan,
    /// Function definitions found directly inside this function's body
    pub nested: Vec<FunctionDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DeclarationKind {
    Package(PackageDecl),
    Typedef(TypedefDecl),
    Interface(InterfaceDecl),
    Typeclass(TypeclassDecl),
    Instance(InstanceDecl),
    Module(ModuleDecl),
    Function(FunctionDecl),
}

impl DeclarationKind {
    pub fn name(&self) -> &Identifier {
        match self {
            DeclarationKind::Package(d) => &d.name,
            DeclarationKind::Typedef(d) => &d.name,
            DeclarationKind::Interface(d) => &d.name,
            DeclarationKind::Typeclass(d) => &d.name,
            DeclarationKind::Instance(d) => &d.name,
            DeclarationKind::Module(d) => &d.name,
            DeclarationKind::Function(d) => &d.name,
        }
    }

    /// Keyword that introduces this kind
    pub fn keyword(&self) -> &'static str {
        match self {
            DeclarationKind::Package(_) => "package",
            DeclarationKind::Typedef(_) => "typedef",
            DeclarationKind::Interface(_) => "interface",
            DeclarationKind::Typeclass(_) => "typeclass",
            DeclarationKind::Instance(_) => "instance",
            DeclarationKind::Module(_) => "module",
            DeclarationKind::Function(_) => "function",
        }
    }

    /// Whether the grammar captured a formal or type-argument group.
    ///
    /// Typeclasses and instances always carry one; typedefs and interfaces
    /// only when a `#( ... )` formal list is present.
    pub fn has_parameters(&self) -> bool {
        match self {
            DeclarationKind::Typeclass(_) | DeclarationKind::Instance(_) => true,
            DeclarationKind::Typedef(d) => d.formals.is_some(),
            DeclarationKind::Interface(d) => d.formals.is_some(),
            DeclarationKind::Package(_)
            | DeclarationKind::Module(_)
            | DeclarationKind::Function(_) => false,
        }
    }
}

/// A matched top-level declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub span: TokenSpan,
    /// 1-based line of `span.start`
    pub line: usize,
    pub has_parameters: bool,
    pub doc: Option<String>,
}

impl Declaration {
    pub fn new(kind: DeclarationKind, span: TokenSpan, line: usize, doc: Option<String>) -> Self {
        let has_parameters = kind.has_parameters();
        Self {
            kind,
            span,
            line,
            has_parameters,
            doc,
        }
    }

    pub fn name(&self) -> &Identifier {
        self.kind.name()
    }

    pub fn is_package(&self) -> bool {
        matches!(self.kind, DeclarationKind::Package(_))
    }
}

/// `import Pkg :: * ;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Import {
    pub package: Identifier,
    pub span: TokenSpan,
}

/// `export name ;` or `export name(..) ;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Export {
    pub name: Identifier,
    pub with_members: bool,
    pub span: TokenSpan,
}
