//! Integer literals
//!
//! BSV integer literals come in three shapes: a bare decimal digit run
//! (`42`), a based literal with an optional width (`8'b1010`, `'hff`), and
//! the two fill literals `'0` / `'1` whose width is left to the context.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    Decimal,
    Hex,
    Octal,
    Binary,
}

impl Base {
    /// Base named by the letter after the apostrophe (`h`, `o`, `b`, `d`)
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'h' => Some(Base::Hex),
            'o' => Some(Base::Octal),
            'b' => Some(Base::Binary),
            'd' => Some(Base::Decimal),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Base::Decimal => 'd',
            Base::Hex => 'h',
            Base::Octal => 'o',
            Base::Binary => 'b',
        }
    }

    pub fn radix(&self) -> u32 {
        match self {
            Base::Decimal => 10,
            Base::Hex => 16,
            Base::Octal => 8,
            Base::Binary => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum IntLiteral {
    /// Bare decimal digits
    Plain { digits: String },
    /// `[width]'<base><digits>`
    Based {
        width: Option<u32>,
        base: Base,
        digits: String,
    },
    /// `'0` or `'1`
    Fill { ones: bool },
}

impl IntLiteral {
    /// Parse the text of a based literal token such as `201'hfff`.
    ///
    /// Returns `None` when the width does not fit a `u32` or the digits do
    /// not belong to the base.
    pub fn parse_based(text: &str) -> Option<Self> {
        let (width, rest) = text.split_once('\'')?;
        let mut chars = rest.chars();
        let base = Base::from_letter(chars.next()?)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c == '_' || c.is_digit(base.radix())) {
            return None;
        }
        let width = if width.is_empty() {
            None
        } else {
            Some(width.parse::<u32>().ok()?)
        };
        Some(IntLiteral::Based {
            width,
            base,
            digits: digits.to_string(),
        })
    }

    /// Radix of the digits; bare numbers are decimal, fill literals have none
    pub fn base(&self) -> Option<Base> {
        match self {
            IntLiteral::Based { base, .. } => Some(*base),
            IntLiteral::Plain { .. } => Some(Base::Decimal),
            IntLiteral::Fill { .. } => None,
        }
    }

    /// Numeric value, ignoring width. `None` on overflow and for fill literals.
    pub fn value(&self) -> Option<u128> {
        let (digits, radix) = match self {
            IntLiteral::Plain { digits } => (digits, 10),
            IntLiteral::Based { digits, base, .. } => (digits, base.radix()),
            IntLiteral::Fill { .. } => return None,
        };
        let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
        u128::from_str_radix(&cleaned, radix).ok()
    }
}

impl fmt::Display for IntLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntLiteral::Plain { digits } => f.write_str(digits),
            IntLiteral::Based {
                width,
                base,
                digits,
            } => {
                if let Some(width) = width {
                    write!(f, "{}", width)?;
                }
                write!(f, "'{}{}", base.letter(), digits)
            }
            IntLiteral::Fill { ones } => f.write_str(if *ones { "'1" } else { "'0" }),
        }
    }
}
