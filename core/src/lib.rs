#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use color::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use layout::*;
pub use messages::*;
pub use scheduler::*;
pub use status::*;
pub use surface::*;
pub use tile::*;

mod color;
mod config;
mod engine;
mod error;
mod layout;
mod messages;
mod scheduler;
mod status;
mod surface;
mod tile;

#[cfg(test)]
mod testing;

/// Original position of a tile inside its round, `0..count`.
pub type TileIndex = u8;

/// Number of tiles in a round.
pub type TileCount = u8;

/// Monotonic round identifier, used to tell stale timers apart.
pub type RoundId = u32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Created,
    Waiting,
    Scrambling,
    AwaitingClicks,
    Won,
    Failed,
}

impl Phase {
    pub const fn accepts_clicks(self) -> bool {
        matches!(self, Self::AwaitingClicks)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Advanced,
    Won,
    Failed,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            Ignored => false,
            Advanced => true,
            Won => true,
            Failed => true,
        }
    }
}
