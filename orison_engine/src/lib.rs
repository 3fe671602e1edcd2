//! # Orison Engine
//!
//! The scene state machine for Orison. This crate consumes the world bible
//! in `orison_rules`, routes the player between named scenes, and drives all
//! state mutation through one synchronous loop.
//!
//! ## Core Components
//!
//! - **io**: the input/output port traits the engine consumes, plus
//!   in-memory adapters for tests and scripted replays
//! - **arbiter**: the stateless hint oracle traded a memory for a clue
//! - **scenes**: the six scenes and the registry that dispatches them
//! - **runner**: the driver loop
//!
//! ## Design Philosophy
//!
//! - **UI-independent**: scenes talk only to the port traits, so any
//!   front-end that can read and write lines can host a session
//! - **Single-threaded**: one `GameState` is passed by mutable reference
//!   into each scene; there is no shared or global state
//! - **Forgiving input**: blank or unrecognized menu input resolves to a
//!   scene's default choice instead of failing

pub mod arbiter;
pub mod io;
pub mod runner;
pub mod scenes;

pub use arbiter::*;
pub use io::*;
pub use runner::*;
pub use scenes::*;
