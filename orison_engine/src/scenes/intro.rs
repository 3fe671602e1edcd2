//! The intro scene - naming, the witness mark, and the save/load menu.

use orison_rules::{
    GameState, SceneId, DEFAULT_SAVE_PATH, FACTION_MARINERS, FACTION_SCRIBES,
};
use tracing::{info, warn};

use super::{menu_choice, Scene};
use crate::io::{InputPort, OutputPort};

const WITNESS_MARK_ID: &str = "M-WITNESS-1";
const FALLBACK_NAME: &str = "Wanderer";

/// The plaza outside the audit chamber. Entry point of every session.
pub struct IntroScene {
    default_save_path: String,
}

impl IntroScene {
    /// An intro scene whose blank save/load prompts resolve to `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            default_save_path: path.into(),
        }
    }
}

impl Default for IntroScene {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_PATH)
    }
}

impl Scene for IntroScene {
    fn id(&self) -> SceneId {
        SceneId::Intro
    }

    fn run(&self, state: &mut GameState, input: &mut dyn InputPort, output: &mut dyn OutputPort) {
        output.write_line("Welcome to Orison, city of audits.");
        if state.player_name.is_empty() {
            let name = input.read_line("What is your name? ");
            let name = name.trim();
            state.player_name = if name.is_empty() {
                FALLBACK_NAME.to_string()
            } else {
                name.to_string()
            };
            output.write_line(&format!("Hello, {}.", state.player_name));
        }
        output.write_line(&format!(
            "Reputation - scribes: {}, mariners: {}",
            state.reputation(FACTION_SCRIBES),
            state.reputation(FACTION_MARINERS)
        ));
        output.write_line("[1] Begin an audit");
        output.write_line("[2] Take the witness mark");
        output.write_line("[3] Quit");
        output.write_line("[4] Save the session");
        output.write_line("[5] Load a session");
        output.write_line("[6] Continue from the last save");

        match menu_choice(input, output, &["1", "2", "3", "4", "5", "6"], "3").as_str() {
            "1" => state.goto(SceneId::Audit),
            "2" => {
                if state.grant_witness_mark(WITNESS_MARK_ID) {
                    output.write_line("You take the witness mark. It is cold and certain.");
                } else {
                    output.write_line("You already hold a witness mark.");
                }
                state.goto(SceneId::Intro);
            }
            "4" => {
                self.save_session(state, input, output);
                state.goto(SceneId::Intro);
            }
            "5" => {
                let path = self.prompt_path(input);
                self.load_session(state, output, &path, None);
            }
            "6" => {
                let path = self.default_save_path.clone();
                self.load_session(state, output, &path, Some("No save to continue."));
            }
            _ => state.goto(SceneId::End),
        }
    }
}

impl IntroScene {
    fn prompt_path(&self, input: &mut dyn InputPort) -> String {
        let line = input.read_line("Save path (blank for default): ");
        let path = line.trim();
        if path.is_empty() {
            self.default_save_path.clone()
        } else {
            path.to_string()
        }
    }

    fn save_session(
        &self,
        state: &mut GameState,
        input: &mut dyn InputPort,
        output: &mut dyn OutputPort,
    ) {
        let path = self.prompt_path(input);
        match state.save(&path) {
            Ok(()) => {
                info!(path = %path, "session_saved");
                output.write_line(&format!("Saved to {path}."));
            }
            Err(error) => {
                warn!(path = %path, error = %error, "save_failed");
                output.write_line(&format!("Could not save: {error}"));
            }
        }
    }

    /// Load `path` into the live state; the loaded file decides the next
    /// scene. On failure the state is untouched and the scene is re-set to
    /// intro explicitly.
    fn load_session(
        &self,
        state: &mut GameState,
        output: &mut dyn OutputPort,
        path: &str,
        failure_message: Option<&str>,
    ) {
        match state.load_into(path) {
            Ok(()) => {
                info!(path = %path, "session_loaded");
                output.write_line(&format!("Loaded from {path}."));
            }
            Err(error) => {
                warn!(path = %path, error = %error, "load_failed");
                match failure_message {
                    Some(message) => output.write_line(message),
                    None => output.write_line(&format!("Could not load: {error}")),
                }
                state.goto(SceneId::Intro);
            }
        }
    }
}
