//! The arbiter - a stateless oracle that trades memories for hints.

/// Anything able to turn a free-text memory into a hint.
pub trait Arbiter {
    fn trade_memory_for_hint(&self, memory: &str) -> String;
}

/// The standard arbiter: keyword matching, first rule wins.
///
/// Canal memories outrank dock memories; anything else earns the generic
/// hint. Holds no state between trades.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordArbiter;

impl Arbiter for KeywordArbiter {
    fn trade_memory_for_hint(&self, memory: &str) -> String {
        if memory.trim().is_empty() {
            return "You must offer a real memory.".to_string();
        }
        let memory = memory.to_lowercase();
        if memory.contains("canal") {
            return "The canals hide more than water. Check the ledger for the missing report."
                .to_string();
        }
        if memory.contains("dock") {
            return "The dock workers know about the blackwater. Ask them again.".to_string();
        }
        "Every memory is a clue. Look for what is missing.".to_string()
    }
}
