//! Mark definitions.

use serde::{Deserialize, Serialize};

/// Well-known mark kinds.
pub const KIND_WITNESS: &str = "witness";
pub const KIND_SIGIL: &str = "sigil";

/// A token that proves witnessing or grants limited access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub id: String,
    /// Free-form tag, e.g. "witness", "sigil", "archive".
    pub kind: String,
    #[serde(default)]
    pub is_witness: bool,
}

impl Mark {
    /// Create a plain (non-witness) mark.
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            is_witness: false,
        }
    }

    /// Create a witness-flagged mark of the `witness` kind.
    pub fn witness(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: KIND_WITNESS.to_string(),
            is_witness: true,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.is_witness { "witness" } else { "token" };
        write!(f, "Mark[{}] ({}, {})", self.id, self.kind, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_witness_mark_display() {
        let mark = Mark::witness("M-1");
        assert_eq!(mark.to_string(), "Mark[M-1] (witness, witness)");
        assert!(mark.is_witness);
    }

    #[test]
    fn test_token_mark_display() {
        let mark = Mark::new("SIGIL-MEM-1", KIND_SIGIL);
        assert_eq!(mark.to_string(), "Mark[SIGIL-MEM-1] (sigil, token)");
        assert!(!mark.is_witness);
    }
}
