//! The ritual scene - speak the two-part formula, earn the sigil of memory.

use orison_rules::{
    sigil_formula_matches, GameState, Mark, SceneId, FLAG_SIGIL_FOR_MEMORY, KIND_SIGIL,
};

use super::Scene;
use crate::io::{InputPort, OutputPort};

const SIGIL_MARK_ID: &str = "SIGIL-MEM-1";

/// The ritual circle. Every path out leads back to the audit chamber.
pub struct RitualScene;

impl Scene for RitualScene {
    fn id(&self) -> SceneId {
        SceneId::Ritual
    }

    fn run(&self, state: &mut GameState, input: &mut dyn InputPort, output: &mut dyn OutputPort) {
        if state.has_mark_of_kind(KIND_SIGIL) {
            output.write_line("The sigil of memory already marks your ledger.");
            state.goto(SceneId::Audit);
            return;
        }

        output.write_line("Two words complete the formula. Speak them in turn.");
        let first = input.read_line("First part: ");
        if first.trim().is_empty() {
            cancel(state, output);
            return;
        }
        let second = input.read_line("Second part: ");
        if second.trim().is_empty() {
            cancel(state, output);
            return;
        }

        if sigil_formula_matches(&first, &second) {
            if !state.has_mark_of_kind(KIND_SIGIL) {
                state.inventory.push(Mark::new(SIGIL_MARK_ID, KIND_SIGIL));
            }
            state.set_flag(FLAG_SIGIL_FOR_MEMORY, true);
            output.write_line("Ritual succeeds: the sigil of memory burns itself into your ledger.");
        } else {
            output.write_line(
                "The candles sputter and die. Hint: the formula names who saw and what was sworn.",
            );
        }
        state.goto(SceneId::Audit);
    }
}

fn cancel(state: &mut GameState, output: &mut dyn OutputPort) {
    output.write_line("You lower your hands. The ritual can wait.");
    state.goto(SceneId::Audit);
}
