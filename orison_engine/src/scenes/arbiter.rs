//! The arbiter scene - trade one memory for one hint.

use orison_rules::{GameState, SceneId};

use super::{menu_choice, Scene};
use crate::arbiter::{Arbiter, KeywordArbiter};
use crate::io::{InputPort, OutputPort};

/// The arbiter's alcove. Always routes back to the plaza.
pub struct ArbiterScene {
    arbiter: Box<dyn Arbiter>,
}

impl ArbiterScene {
    /// An arbiter scene backed by a custom oracle.
    pub fn with_arbiter(arbiter: Box<dyn Arbiter>) -> Self {
        Self { arbiter }
    }
}

impl Default for ArbiterScene {
    fn default() -> Self {
        Self::with_arbiter(Box::new(KeywordArbiter))
    }
}

impl Scene for ArbiterScene {
    fn id(&self) -> SceneId {
        SceneId::Arbiter
    }

    fn run(&self, state: &mut GameState, input: &mut dyn InputPort, output: &mut dyn OutputPort) {
        output.write_line("The arbiter waits behind a veil of ledger paper.");
        let memory = input.read_line("Offer a memory: ");
        output.write_line(&self.arbiter.trade_memory_for_hint(&memory));
        output.write_line("[1] Return to the plaza");
        menu_choice(input, output, &["1"], "1");
        state.goto(SceneId::Intro);
    }
}
