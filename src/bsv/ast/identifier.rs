//! Identifiers and their capitalization class
//!
//! BSV splits names by the case of their first character: capitalized names
//! denote types, tags, typeclasses and interfaces; lower-case names denote
//! values, functions and modules. Each grammar role fixes which class it
//! accepts, so a mismatch is a parse failure.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierCase {
    /// First character in `[A-Z]`
    Capitalized,
    /// First character in `[a-z_]`
    Lowercase,
}

impl IdentifierCase {
    /// Classify a name by its first character.
    ///
    /// Returns `None` for names that cannot start an identifier at all.
    pub fn of(name: &str) -> Option<Self> {
        match name.chars().next()? {
            'A'..='Z' => Some(IdentifierCase::Capitalized),
            'a'..='z' | '_' => Some(IdentifierCase::Lowercase),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    pub name: String,
    pub case: IdentifierCase,
}

impl Identifier {
    /// Build an identifier, classifying it by its first character
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let case = IdentifierCase::of(&name)?;
        Some(Self { name, case })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn is_capitalized(&self) -> bool {
        self.case == IdentifierCase::Capitalized
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
