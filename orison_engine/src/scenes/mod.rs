//! The scenes of the narrative state machine.
//!
//! Each scene is one transition function: it reads and mutates the shared
//! [`GameState`] through `&mut`, talks to the player through the I/O ports,
//! and leaves `current_scene_id` pointing at the next scene.

mod arbiter;
mod audit;
mod decision;
mod end;
mod intro;
mod ritual;

pub use arbiter::ArbiterScene;
pub use audit::AuditScene;
pub use decision::DecisionScene;
pub use end::EndScene;
pub use intro::IntroScene;
pub use ritual::RitualScene;

use std::collections::HashMap;

use orison_rules::{GameState, SceneId};

use crate::io::{InputPort, OutputPort};

/// One scene of the state machine.
pub trait Scene {
    /// The id this scene answers to in the registry.
    fn id(&self) -> SceneId;

    /// Execute one scene visit.
    fn run(&self, state: &mut GameState, input: &mut dyn InputPort, output: &mut dyn OutputPort);
}

/// Fixed mapping from scene id to its handler.
pub struct SceneRegistry {
    scenes: HashMap<SceneId, Box<dyn Scene>>,
}

impl SceneRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
        }
    }

    /// The full six-scene game.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.insert(Box::new(IntroScene::default()));
        registry.insert(Box::new(AuditScene));
        registry.insert(Box::new(ArbiterScene::default()));
        registry.insert(Box::new(DecisionScene));
        registry.insert(Box::new(RitualScene));
        registry.insert(Box::new(EndScene));
        registry
    }

    /// Register a scene under its own id, replacing any previous handler.
    pub fn insert(&mut self, scene: Box<dyn Scene>) {
        self.scenes.insert(scene.id(), scene);
    }

    pub fn get(&self, id: SceneId) -> Option<&dyn Scene> {
        self.scenes.get(&id).map(Box::as_ref)
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve one menu read against a scene's valid choice set.
///
/// Blank input silently becomes the default; anything else outside the set
/// earns a notice and also becomes the default. Never re-prompts.
pub(crate) fn menu_choice(
    input: &mut dyn InputPort,
    output: &mut dyn OutputPort,
    valid: &[&str],
    default: &str,
) -> String {
    let line = input.read_line("> ");
    let choice = line.trim();
    if choice.is_empty() {
        return default.to_string();
    }
    if valid.contains(&choice) {
        choice.to_string()
    } else {
        output.write_line(&format!("Invalid choice '{choice}', using default [{default}]."));
        default.to_string()
    }
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{MemoryOutput, ScriptedInput};

    #[test]
    fn test_menu_choice_accepts_valid_input() {
        let mut input = ScriptedInput::new([" 2 "]);
        let mut output = MemoryOutput::new();

        let choice = menu_choice(&mut input, &mut output, &["1", "2"], "1");
        assert_eq!(choice, "2");
        assert!(output.lines().is_empty());
    }

    #[test]
    fn test_menu_choice_blank_defaults_silently() {
        let mut input = ScriptedInput::new([""]);
        let mut output = MemoryOutput::new();

        let choice = menu_choice(&mut input, &mut output, &["1", "2"], "1");
        assert_eq!(choice, "1");
        assert!(output.lines().is_empty());
    }

    #[test]
    fn test_menu_choice_invalid_defaults_with_notice() {
        let mut input = ScriptedInput::new(["x"]);
        let mut output = MemoryOutput::new();

        let choice = menu_choice(&mut input, &mut output, &["1", "2"], "1");
        assert_eq!(choice, "1");
        assert!(output.contains("Invalid choice 'x'"));
    }

    #[test]
    fn test_standard_registry_covers_every_scene() {
        let registry = SceneRegistry::standard();
        for id in [
            SceneId::Intro,
            SceneId::Audit,
            SceneId::Arbiter,
            SceneId::Decision,
            SceneId::Ritual,
            SceneId::End,
        ] {
            assert!(registry.get(id).is_some(), "missing scene {id}");
        }
    }

    #[test]
    fn test_registry_insert_replaces_by_id() {
        let mut registry = SceneRegistry::standard();
        registry.insert(Box::new(IntroScene::new("elsewhere/save.json")));
        assert!(registry.get(SceneId::Intro).is_some());
    }
}
