//! Terminal front-end for Orison.
//!
//! Adapts stdin/stdout to the engine's I/O ports, reads the optional
//! `orison.toml` configuration, and runs the driver loop with the standard
//! scene registry.

use std::io::{BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use orison_engine::io::{InputPort, OutputPort};
use orison_engine::runner::run_session;
use orison_engine::scenes::{IntroScene, SceneRegistry};
use orison_rules::GameState;
use serde::Deserialize;
use tracing::error;

const CONFIG_PATH: &str = "orison.toml";

/// Optional front-end configuration. Every field has a default, so the file
/// may be absent or partial.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
struct Config {
    /// Preset player name; leaves the intro prompt in place when empty.
    player_name: String,
    /// Overrides the default save/load path.
    save_path: Option<String>,
}

impl Config {
    fn load(path: impl AsRef<Path>) -> Self {
        let Ok(text) = std::fs::read_to_string(path.as_ref()) else {
            return Self::default();
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(parse_error) => {
                eprintln!("ignoring malformed {}: {parse_error}", path.as_ref().display());
                Self::default()
            }
        }
    }
}

struct ConsoleInput;

impl InputPort for ConsoleInput {
    fn read_line(&mut self, prompt: &str) -> String {
        print!("{prompt}");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
            Err(_) => String::new(),
        }
    }
}

struct ConsoleOutput;

impl OutputPort for ConsoleOutput {
    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(CONFIG_PATH);

    let mut state = GameState::new();
    state.player_name = config.player_name;

    let mut scenes = SceneRegistry::standard();
    if let Some(path) = config.save_path {
        scenes.insert(Box::new(IntroScene::new(path)));
    }

    let mut input = ConsoleInput;
    let mut output = ConsoleOutput;
    match run_session(&mut state, &scenes, &mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(unknown) => {
            error!(error = %unknown, "session_aborted");
            ExitCode::FAILURE
        }
    }
}
