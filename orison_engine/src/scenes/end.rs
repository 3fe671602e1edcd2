//! The end scene - terminal; stops the driver loop.

use orison_rules::{GameState, SceneId};

use super::Scene;
use crate::io::{InputPort, OutputPort};

/// The closing of the audit. No transitions lead out.
pub struct EndScene;

impl Scene for EndScene {
    fn id(&self) -> SceneId {
        SceneId::End
    }

    fn run(&self, state: &mut GameState, _input: &mut dyn InputPort, output: &mut dyn OutputPort) {
        output.write_line("The audit is closed. The canals keep their secrets. Goodbye.");
        state.stop();
    }
}
