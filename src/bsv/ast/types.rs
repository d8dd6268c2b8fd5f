//! Type expressions
//!
//! A type reference is either a named type with optional type arguments
//! (`Vector#(2, Reg#(Bit#(32)))`, `List::List#(t)`), a function type
//! (`function Bit#(1) f(Bit#(1) x)`), or a numeric type (`32`).

use serde::Serialize;
use std::fmt;

use super::identifier::Identifier;
use super::literal::IntLiteral;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum TypeExpr {
    Named {
        package: Option<Identifier>,
        name: Identifier,
        type_args: Vec<TypeExpr>,
    },
    Function {
        return_type: Box<TypeExpr>,
        name: Identifier,
        params: Vec<TypeExpr>,
    },
    Numeric {
        literal: IntLiteral,
    },
}

impl TypeExpr {
    /// A named type without package qualifier or arguments
    pub fn named(name: Identifier) -> Self {
        TypeExpr::Named {
            package: None,
            name,
            type_args: Vec::new(),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named {
                package,
                name,
                type_args,
            } => {
                if let Some(package) = package {
                    write!(f, "{}::", package)?;
                }
                write!(f, "{}", name)?;
                if !type_args.is_empty() {
                    f.write_str("#(")?;
                    write_list(f, type_args)?;
                    f.write_str(")")?;
                }
                Ok(())
            }
            TypeExpr::Function {
                return_type,
                name,
                params,
            } => {
                write!(f, "function {} {}(", return_type, name)?;
                write_list(f, params)?;
                f.write_str(")")
            }
            TypeExpr::Numeric { literal } => write!(f, "{}", literal),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[TypeExpr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
