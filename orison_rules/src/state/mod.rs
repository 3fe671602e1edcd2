//! Session state - the central structure every scene reads and mutates.

mod persistence;

pub use persistence::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::Mark;

/// Flag keys shared between the rules and the scenes.
pub const FLAG_HAS_WITNESS_MARK: &str = "has_witness_mark";
pub const FLAG_SECRET_CLAUSE_ACTIVE: &str = "secret_clause_active";
pub const FLAG_CANALS_BLACK: &str = "canals_black";
pub const FLAG_CHECKED_LEDGER: &str = "checked_ledger";
pub const FLAG_VISITED_DOCK: &str = "visited_dock";
pub const FLAG_SIGIL_FOR_MEMORY: &str = "sigil_for_memory";
pub const FLAG_POLICY_PUBLIC: &str = "policy_public";

/// Faction names tracked by reputation.
pub const FACTION_SCRIBES: &str = "scribes";
pub const FACTION_MARINERS: &str = "mariners";

/// Identifier of a scene in the narrative state machine.
///
/// `End` is the terminal marker: entering it stops the driver loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneId {
    Intro,
    Audit,
    Arbiter,
    Decision,
    Ritual,
    End,
}

impl SceneId {
    /// The lowercase name used in menus, logs, and the save file.
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneId::Intro => "intro",
            SceneId::Audit => "audit",
            SceneId::Arbiter => "arbiter",
            SceneId::Decision => "decision",
            SceneId::Ritual => "ritual",
            SceneId::End => "end",
        }
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SceneId {
    type Err = UnknownSceneName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intro" => Ok(SceneId::Intro),
            "audit" => Ok(SceneId::Audit),
            "arbiter" => Ok(SceneId::Arbiter),
            "decision" => Ok(SceneId::Decision),
            "ritual" => Ok(SceneId::Ritual),
            "end" => Ok(SceneId::End),
            other => Err(UnknownSceneName(other.to_string())),
        }
    }
}

/// A scene name that is not part of the state machine.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown scene name '{0}'")]
pub struct UnknownSceneName(pub String);

/// The complete state of one play session. UI-agnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player_name: String,
    pub current_scene_id: SceneId,
    pub running: bool,
    pub inventory: Vec<Mark>,
    pub flags: BTreeMap<String, bool>,
    /// Faction name -> reputation score. Unseen factions score 0.
    pub reputation: BTreeMap<String, i32>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            current_scene_id: SceneId::Intro,
            running: true,
            inventory: Vec::new(),
            flags: BTreeMap::new(),
            reputation: BTreeMap::new(),
        }
    }
}

impl GameState {
    /// Create a fresh session state at the intro scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal the driver loop to stop.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Move to another scene.
    pub fn goto(&mut self, scene_id: SceneId) {
        self.current_scene_id = scene_id;
    }

    /// Read a flag, treating an absent key as false.
    pub fn flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Set a flag.
    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        self.flags.insert(key.into(), value);
    }

    /// Read a faction's reputation score, defaulting to 0.
    pub fn reputation(&self, faction: &str) -> i32 {
        self.reputation.get(faction).copied().unwrap_or(0)
    }

    /// Shift a faction's reputation by a delta.
    pub fn adjust_reputation(&mut self, faction: impl Into<String>, delta: i32) {
        *self.reputation.entry(faction.into()).or_insert(0) += delta;
    }

    /// Whether the inventory holds any witness-flagged mark.
    pub fn has_witness_mark(&self) -> bool {
        self.inventory.iter().any(|mark| mark.is_witness)
    }

    /// Whether the inventory holds a mark of the given kind.
    pub fn has_mark_of_kind(&self, kind: &str) -> bool {
        self.inventory.iter().any(|mark| mark.kind == kind)
    }

    /// Grant the witness mark, at most once.
    ///
    /// Records the `has_witness_mark` flag either way and returns whether a
    /// new mark was actually added.
    pub fn grant_witness_mark(&mut self, id: impl Into<String>) -> bool {
        let granted = if self.has_witness_mark() {
            false
        } else {
            self.inventory.push(Mark::witness(id));
            true
        };
        self.set_flag(FLAG_HAS_WITNESS_MARK, true);
        granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Mark, KIND_SIGIL};

    #[test]
    fn test_fresh_state_defaults() {
        let state = GameState::new();
        assert_eq!(state.player_name, "");
        assert_eq!(state.current_scene_id, SceneId::Intro);
        assert!(state.running);
        assert!(state.inventory.is_empty());
        assert!(state.flags.is_empty());
        assert!(state.reputation.is_empty());
    }

    #[test]
    fn test_goto_and_stop() {
        let mut state = GameState::new();
        state.goto(SceneId::Audit);
        assert_eq!(state.current_scene_id, SceneId::Audit);

        state.stop();
        assert!(!state.running);
    }

    #[test]
    fn test_flags_default_false() {
        let mut state = GameState::new();
        assert!(!state.flag(FLAG_CHECKED_LEDGER));

        state.set_flag(FLAG_CHECKED_LEDGER, true);
        assert!(state.flag(FLAG_CHECKED_LEDGER));
    }

    #[test]
    fn test_reputation_defaults_and_accumulates() {
        let mut state = GameState::new();
        assert_eq!(state.reputation(FACTION_SCRIBES), 0);

        state.adjust_reputation(FACTION_SCRIBES, 1);
        state.adjust_reputation(FACTION_SCRIBES, 1);
        state.adjust_reputation(FACTION_MARINERS, -1);
        assert_eq!(state.reputation(FACTION_SCRIBES), 2);
        assert_eq!(state.reputation(FACTION_MARINERS), -1);
    }

    #[test]
    fn test_grant_witness_mark_is_idempotent() {
        let mut state = GameState::new();
        assert!(state.grant_witness_mark("M-WITNESS-1"));
        assert!(!state.grant_witness_mark("M-WITNESS-1"));

        let witnesses = state.inventory.iter().filter(|m| m.is_witness).count();
        assert_eq!(witnesses, 1);
        assert!(state.flag(FLAG_HAS_WITNESS_MARK));
    }

    #[test]
    fn test_has_mark_of_kind() {
        let mut state = GameState::new();
        assert!(!state.has_mark_of_kind(KIND_SIGIL));

        state.inventory.push(Mark::new("SIGIL-MEM-1", KIND_SIGIL));
        assert!(state.has_mark_of_kind(KIND_SIGIL));
        assert!(!state.has_witness_mark());
    }

    #[test]
    fn test_scene_id_round_trips_through_names() {
        for id in [
            SceneId::Intro,
            SceneId::Audit,
            SceneId::Arbiter,
            SceneId::Decision,
            SceneId::Ritual,
            SceneId::End,
        ] {
            assert_eq!(id.as_str().parse::<SceneId>().unwrap(), id);
        }
        assert!("nowhere".parse::<SceneId>().is_err());
    }
}
