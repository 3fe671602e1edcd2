//! The audit scene - contracts, investigation, and the canal status board.

use orison_rules::{
    conflicts_with, Contract, GameState, SceneId, FACTION_MARINERS, FACTION_SCRIBES,
    FLAG_CANALS_BLACK, FLAG_CHECKED_LEDGER, FLAG_HAS_WITNESS_MARK, FLAG_SECRET_CLAUSE_ACTIVE,
    FLAG_VISITED_DOCK,
};

use super::{menu_choice, yes_no, Scene};
use crate::io::{InputPort, OutputPort};

/// The audit chamber. Hub of the investigation.
pub struct AuditScene;

fn public_contract() -> Contract {
    Contract::new("C-CANAL-1", "Canal Maintenance")
        .with_clause("Keep canals clear")
        .with_clause("Report blockages within a day")
}

fn secret_contract() -> Contract {
    Contract::new("C-WAIVER-9", "Night Discharge Waiver")
        .with_clause("Dump blackwater after the third bell")
        .secret()
}

impl Scene for AuditScene {
    fn id(&self) -> SceneId {
        SceneId::Audit
    }

    fn run(&self, state: &mut GameState, input: &mut dyn InputPort, output: &mut dyn OutputPort) {
        output.write_line("The audit chamber. Ledgers line every wall.");

        let public = public_contract();
        let secret = if state.flag(FLAG_SECRET_CLAUSE_ACTIVE) {
            Some(secret_contract())
        } else {
            None
        };
        let canals_black = secret
            .as_ref()
            .is_some_and(|waiver| conflicts_with(&public, waiver));
        state.set_flag(FLAG_CANALS_BLACK, canals_black);

        output.write_line(&public.to_string());
        if let Some(waiver) = &secret {
            output.write_line(&waiver.to_string());
        }
        output.write_line(&format!(
            "You hold a witness mark: {}",
            yes_no(state.has_witness_mark())
        ));
        output.write_line(&format!(
            "Witness flag recorded: {}",
            yes_no(state.flag(FLAG_HAS_WITNESS_MARK))
        ));
        output.write_line(&format!(
            "Canal status: {}",
            if canals_black { "BLACK" } else { "CLEAR" }
        ));
        output.write_line(&format!(
            "Reputation - scribes: {}, mariners: {}",
            state.reputation(FACTION_SCRIBES),
            state.reputation(FACTION_MARINERS)
        ));
        output.write_line("[1] Return to the plaza");
        output.write_line("[2] Conclude the audit");
        output.write_line("[3] Investigate");
        output.write_line("[4] Visit the arbiter");
        output.write_line("[5] Toggle the secret clause");
        output.write_line("[6] Rule on the waivers");
        output.write_line("[7] Attempt the ritual");

        match menu_choice(input, output, &["1", "2", "3", "4", "5", "6", "7"], "1").as_str() {
            "2" => state.goto(SceneId::End),
            "3" => {
                investigate(state, input, output);
                state.goto(SceneId::Intro);
            }
            "4" => state.goto(SceneId::Arbiter),
            "5" => {
                let active = !state.flag(FLAG_SECRET_CLAUSE_ACTIVE);
                state.set_flag(FLAG_SECRET_CLAUSE_ACTIVE, active);
                output.write_line(if active {
                    "The secret clause is now active."
                } else {
                    "The secret clause is struck out."
                });
                state.goto(SceneId::Audit);
            }
            "6" => state.goto(SceneId::Decision),
            "7" => state.goto(SceneId::Ritual),
            _ => state.goto(SceneId::Intro),
        }
    }
}

/// The named sub-actions of the investigate menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InvestigateAction {
    CheckLedger,
    VisitDock,
    Back,
}

impl InvestigateAction {
    fn from_choice(choice: &str) -> Self {
        match choice {
            "1" => InvestigateAction::CheckLedger,
            "2" => InvestigateAction::VisitDock,
            _ => InvestigateAction::Back,
        }
    }

    fn apply(self, state: &mut GameState, output: &mut dyn OutputPort) {
        match self {
            InvestigateAction::CheckLedger => {
                state.set_flag(FLAG_CHECKED_LEDGER, true);
                output.write_line("Ledger notes: one canal report is missing entirely.");
            }
            InvestigateAction::VisitDock => {
                state.set_flag(FLAG_VISITED_DOCK, true);
                output.write_line("You walk the docks. The workers fall silent as you pass.");
            }
            InvestigateAction::Back => {
                output.write_line("You step back from the shelves.");
            }
        }
    }
}

fn investigate(state: &mut GameState, input: &mut dyn InputPort, output: &mut dyn OutputPort) {
    output.write_line("[1] Check the ledger");
    output.write_line("[2] Visit the dock");
    output.write_line("[3] Back");
    let choice = menu_choice(input, output, &["1", "2", "3"], "3");
    InvestigateAction::from_choice(&choice).apply(state, output);
}
