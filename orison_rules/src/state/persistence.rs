//! JSON persistence for [`GameState`].
//!
//! The save file is a single flat JSON object. Writing serializes the whole
//! state; loading parses a complete fresh state first and only then replaces
//! the live one, so a failed load can never leave a half-merged session.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::{GameState, SceneId};
use crate::entities::Mark;

/// Where saves land when the player does not name a path.
pub const DEFAULT_SAVE_PATH: &str = "save_game/save_orison.json";

/// Failures of the save/load boundary.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("save file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("save file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
    #[error("save file must contain a JSON object at the top level")]
    NotAnObject,
}

/// The wire form of a session. Field order here is the key order on disk.
#[derive(Debug, Serialize)]
pub struct SaveRecord {
    pub player_name: String,
    pub current_scene_id: SceneId,
    pub running: bool,
    pub inventory: Vec<Mark>,
    pub flags: BTreeMap<String, bool>,
    pub reputation: BTreeMap<String, i32>,
}

impl GameState {
    /// Produce the plain serializable record of this state.
    pub fn to_record(&self) -> SaveRecord {
        SaveRecord {
            player_name: self.player_name.clone(),
            current_scene_id: self.current_scene_id,
            running: self.running,
            inventory: self.inventory.clone(),
            flags: self.flags.clone(),
            reputation: self.reputation.clone(),
        }
    }

    /// Rebuild a state from a parsed record, tolerating absent or
    /// wrong-typed fields.
    ///
    /// Every top-level field falls back to its session default; an
    /// unrecognized scene name falls back to the intro scene. This never
    /// fails - malformed input is rejected earlier, at parse time.
    pub fn from_record(data: &Value) -> Self {
        let scene = data
            .get("current_scene_id")
            .and_then(Value::as_str)
            .and_then(|name| name.parse().ok())
            .unwrap_or(SceneId::Intro);

        Self {
            player_name: data
                .get("player_name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            current_scene_id: scene,
            running: data.get("running").and_then(Value::as_bool).unwrap_or(true),
            inventory: data
                .get("inventory")
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(mark_from_value).collect())
                .unwrap_or_default(),
            flags: data
                .get("flags")
                .and_then(Value::as_object)
                .map(|map| {
                    map.iter()
                        .filter_map(|(k, v)| v.as_bool().map(|b| (k.clone(), b)))
                        .collect()
                })
                .unwrap_or_default(),
            reputation: data
                .get("reputation")
                .and_then(Value::as_object)
                .map(|map| {
                    map.iter()
                        .filter_map(|(k, v)| v.as_i64().map(|n| (k.clone(), n as i32)))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Write the state as pretty JSON, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.to_record())?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Replace this state with the one stored at `path`.
    ///
    /// The file is read and parsed in full before any field changes, so on
    /// error the live state is untouched.
    pub fn load_into(&mut self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let text = fs::read_to_string(path)?;
        let data: Value = serde_json::from_str(&text)?;
        if !data.is_object() {
            return Err(PersistenceError::NotAnObject);
        }
        *self = GameState::from_record(&data);
        Ok(())
    }
}

fn mark_from_value(value: &Value) -> Option<Mark> {
    let object = value.as_object()?;
    Some(Mark {
        id: object
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        kind: object
            .get("kind")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        is_witness: object
            .get("is_witness")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}
