//! The driver loop - the only orchestration in the engine.

use orison_rules::{GameState, SceneId};
use tracing::debug;

use crate::io::{InputPort, OutputPort};
use crate::scenes::SceneRegistry;

/// The current scene id has no handler in the registry. Fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no scene registered for '{0}'")]
pub struct UnknownSceneError(pub SceneId);

/// Run scenes until the state stops the session.
///
/// Each iteration looks up the scene for `current_scene_id` and invokes it;
/// the loop holds no state of its own. A missing registry entry is reported
/// through the output port and ends the session with an error.
pub fn run_session(
    state: &mut GameState,
    scenes: &SceneRegistry,
    input: &mut dyn InputPort,
    output: &mut dyn OutputPort,
) -> Result<(), UnknownSceneError> {
    while state.running {
        let id = state.current_scene_id;
        let Some(scene) = scenes.get(id) else {
            output.write_line(&format!("Unknown scene: {id}"));
            return Err(UnknownSceneError(id));
        };
        debug!(scene = %id, "scene_enter");
        scene.run(state, input, output);
    }
    Ok(())
}
