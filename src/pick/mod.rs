//! Pick engine module
//!
//! - `engine` - the authoritative no-repeat selection
//! - `history` - session log of completed picks
//! - `entropy` - injectable randomness source

mod engine;
mod entropy;
mod history;

pub use engine::PickEngine;
pub use entropy::Entropy;
#[cfg(test)]
pub use entropy::Scripted;
