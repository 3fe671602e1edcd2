//! Audit rules: contract conflict detection and the sigil formula.

use crate::entities::Contract;

/// Clause phrases that commit a public contract to canal care.
const CANAL_CARE_PHRASES: [&str; 2] = ["keep canals clear", "keep canal clear"];

/// Clause words that betray a secret discharge arrangement.
const DISCHARGE_TRIGGERS: [&str; 3] = ["dump", "discharge", "blackwater"];

/// The two parts of the sigil formula, in any order.
const SIGIL_FORMULA: [&str; 2] = ["witness", "oath"];

/// Check whether two contracts are in conflict.
///
/// A conflict exists when one contract is public and pledges canal care
/// while the other is secret and licenses dumping, discharge, or
/// blackwater. Either contract may be the public one.
pub fn conflicts_with(a: &Contract, b: &Contract) -> bool {
    covers_conflict(a, b) || covers_conflict(b, a)
}

fn covers_conflict(public: &Contract, secret: &Contract) -> bool {
    public.is_public
        && !secret.is_public
        && mentions_any(&clause_text(public), &CANAL_CARE_PHRASES)
        && mentions_any(&clause_text(secret), &DISCHARGE_TRIGGERS)
}

fn clause_text(contract: &Contract) -> String {
    contract.clauses.join(" ").to_lowercase()
}

fn mentions_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// Check whether two spoken parts complete the sigil formula.
///
/// Both parts are trimmed and lowercased; the pair is unordered.
pub fn sigil_formula_matches(first: &str, second: &str) -> bool {
    let a = first.trim().to_lowercase();
    let b = second.trim().to_lowercase();
    (a == SIGIL_FORMULA[0] && b == SIGIL_FORMULA[1])
        || (a == SIGIL_FORMULA[1] && b == SIGIL_FORMULA[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canal_contract() -> Contract {
        Contract::new("C-1", "Canal Maintenance")
            .with_clause("Keep canals clear")
            .with_clause("Report blockages")
    }

    fn waiver_contract() -> Contract {
        Contract::new("C-2", "Discharge Waiver")
            .with_clause("Dump blackwater after dusk")
            .secret()
    }

    #[test]
    fn test_conflict_public_vs_secret() {
        assert!(conflicts_with(&canal_contract(), &waiver_contract()));
    }

    #[test]
    fn test_conflict_is_symmetric() {
        assert!(conflicts_with(&waiver_contract(), &canal_contract()));
    }

    #[test]
    fn test_no_conflict_both_public() {
        let open_waiver = Contract::new("C-2", "Waiver").with_clause("Dump blackwater");
        assert!(!conflicts_with(&canal_contract(), &open_waiver));
    }

    #[test]
    fn test_no_conflict_both_secret() {
        let hidden_canal = canal_contract().secret();
        assert!(!conflicts_with(&hidden_canal, &waiver_contract()));
    }

    #[test]
    fn test_no_conflict_without_trigger_words() {
        let harmless = Contract::new("C-3", "Ferry Rights")
            .with_clause("Carry passengers at dawn")
            .secret();
        assert!(!conflicts_with(&canal_contract(), &harmless));
    }

    #[test]
    fn test_conflict_ignores_case() {
        let loud = Contract::new("C-1", "Canal Maintenance").with_clause("KEEP CANALS CLEAR");
        let whisper = Contract::new("C-2", "Waiver").with_clause("DISCHARGE at night").secret();
        assert!(conflicts_with(&loud, &whisper));
    }

    #[test]
    fn test_conflict_singular_canal_phrase() {
        let single = Contract::new("C-1", "Canal Maintenance").with_clause("keep canal clear");
        assert!(conflicts_with(&single, &waiver_contract()));
    }

    #[test]
    fn test_sigil_formula_order_free() {
        assert!(sigil_formula_matches("witness", "oath"));
        assert!(sigil_formula_matches("oath", "witness"));
    }

    #[test]
    fn test_sigil_formula_normalizes() {
        assert!(sigil_formula_matches("  Witness ", "OATH"));
    }

    #[test]
    fn test_sigil_formula_rejects_wrong_parts() {
        assert!(!sigil_formula_matches("witness", "witness"));
        assert!(!sigil_formula_matches("x", "y"));
    }
}
