//! Entity definitions for the audit world.

mod contract;
mod mark;

pub use contract::*;
pub use mark::*;
