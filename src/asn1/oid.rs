//! Object identifiers.

use std::fmt;
use std::str::FromStr;

use crate::core::{ExtensionError, ExtensionResult};

/// A registered object identifier, stored as its numeric arcs.
///
/// Two identifiers are equal when their arcs are equal; where they were
/// allocated does not matter.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectIdentifier {
    arcs: Vec<u64>,
}

impl ObjectIdentifier {
    /// Build an identifier from its arcs. Fails on an empty slice.
    pub fn from_arcs(arcs: &[u64]) -> ExtensionResult<Self> {
        if arcs.is_empty() {
            return Err(ExtensionError::InvalidIdentifier("no arcs".into()));
        }
        Ok(Self {
            arcs: arcs.to_vec(),
        })
    }

    /// Identifier for an entry of the built-in extension table, whose arc
    /// lists are all non-empty.
    pub(crate) fn from_table(arcs: &[u64]) -> Self {
        Self {
            arcs: arcs.to_vec(),
        }
    }

    /// Numeric arcs, outermost first.
    pub fn arcs(&self) -> &[u64] {
        &self.arcs
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> ExtensionResult<Self> {
        let mut arcs = Vec::new();
        arcs.try_reserve_exact(self.arcs.len())?;
        arcs.extend_from_slice(&self.arcs);
        Ok(Self { arcs })
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut arcs = self.arcs.iter();
        if let Some(first) = arcs.next() {
            write!(f, "{first}")?;
        }
        for arc in arcs {
            write!(f, ".{arc}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectIdentifier({self})")
    }
}

impl FromStr for ObjectIdentifier {
    type Err = ExtensionError;

    /// Parse dotted-decimal notation such as `2.5.29.19`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ExtensionError::InvalidIdentifier(s.into()));
        }

        let arcs = s
            .split('.')
            .map(|arc| {
                if arc.is_empty() || !arc.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ExtensionError::InvalidIdentifier(s.into()));
                }
                arc.parse::<u64>()
                    .map_err(|_| ExtensionError::InvalidIdentifier(s.into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { arcs })
    }
}
