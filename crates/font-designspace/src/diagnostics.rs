//! Soft conditions raised while converting or naming.

use std::fmt;

use log::warn;

/// A recoverable problem. The operation carried on with an empty field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No source sits at the default location, so there is no family name.
    MissingDefaultSource,
    /// The default source has no family name.
    DefaultSourceWithoutFamilyName { source: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingDefaultSource => {
                write!(f, "cannot determine default source to look up family name")
            }
            Diagnostic::DefaultSourceWithoutFamilyName { source } => {
                write!(
                    f,
                    "cannot look up family name, default source '{source}' has no family name"
                )
            }
        }
    }
}

/// Accumulates diagnostics for one conversion.
///
/// Every pushed diagnostic is also logged at warn level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    /// Move all entries of `other` into this sink without logging them again.
    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, diagnostic: &Diagnostic) -> bool {
        self.entries.contains(diagnostic)
    }
}
