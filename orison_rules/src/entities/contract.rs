//! Contract definitions.

use serde::{Deserialize, Serialize};

/// A public or secret agreement with simple textual clauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub title: String,
    pub clauses: Vec<String>,
    pub is_public: bool,
}

impl Contract {
    /// Create a public contract with no clauses.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            clauses: Vec::new(),
            is_public: true,
        }
    }

    /// Append a clause.
    pub fn with_clause(mut self, clause: impl Into<String>) -> Self {
        self.clauses.push(clause.into());
        self
    }

    /// Append multiple clauses.
    pub fn with_clauses(mut self, clauses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.clauses.extend(clauses.into_iter().map(Into::into));
        self
    }

    /// Mark the contract as secret.
    pub fn secret(mut self) -> Self {
        self.is_public = false;
        self
    }
}

impl std::fmt::Display for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vis = if self.is_public { "public" } else { "secret" };
        let parts = if self.clauses.is_empty() {
            "no clause".to_string()
        } else {
            self.clauses.join("; ")
        };
        write!(f, "Contract[{}] {} ({}) - {}", self.id, self.title, vis, parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_builder() {
        let contract = Contract::new("C-1", "Canal Maintenance")
            .with_clause("Keep canals clear")
            .with_clause("Report blockages");

        assert!(contract.is_public);
        assert_eq!(contract.clauses.len(), 2);
    }

    #[test]
    fn test_contract_display_public() {
        let contract = Contract::new("C-1", "Test")
            .with_clauses(["a", "b"]);
        assert_eq!(contract.to_string(), "Contract[C-1] Test (public) - a; b");
    }

    #[test]
    fn test_contract_display_secret_no_clause() {
        let contract = Contract::new("C-2", "Waiver").secret();
        assert_eq!(contract.to_string(), "Contract[C-2] Waiver (secret) - no clause");
    }
}
