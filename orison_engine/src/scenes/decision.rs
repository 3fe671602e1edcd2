//! The decision scene - rule on the hidden waivers.

use orison_rules::{
    GameState, SceneId, FACTION_MARINERS, FACTION_SCRIBES, FLAG_POLICY_PUBLIC,
    FLAG_SECRET_CLAUSE_ACTIVE,
};

use super::{menu_choice, Scene};
use crate::io::{InputPort, OutputPort};

/// The tribunal bench. One ruling per visit, then back to the plaza.
pub struct DecisionScene;

impl Scene for DecisionScene {
    fn id(&self) -> SceneId {
        SceneId::Decision
    }

    fn run(&self, state: &mut GameState, input: &mut dyn InputPort, output: &mut dyn OutputPort) {
        output.write_line(if state.flag(FLAG_SECRET_CLAUSE_ACTIVE) {
            "Current stance: hidden waivers are in force."
        } else {
            "Current stance: the public oath holds."
        });
        output.write_line("[1] Restore the public oath");
        output.write_line("[2] Legalize the hidden waivers");

        match menu_choice(input, output, &["1", "2"], "1").as_str() {
            "2" => {
                state.set_flag(FLAG_SECRET_CLAUSE_ACTIVE, true);
                state.set_flag(FLAG_POLICY_PUBLIC, false);
                state.adjust_reputation(FACTION_SCRIBES, -1);
                state.adjust_reputation(FACTION_MARINERS, 1);
                output.write_line("Hidden waivers now legal.");
            }
            _ => {
                state.set_flag(FLAG_SECRET_CLAUSE_ACTIVE, false);
                state.set_flag(FLAG_POLICY_PUBLIC, true);
                state.adjust_reputation(FACTION_SCRIBES, 1);
                state.adjust_reputation(FACTION_MARINERS, -1);
                output.write_line("Oath restored.");
            }
        }
        state.goto(SceneId::Intro);
    }
}
