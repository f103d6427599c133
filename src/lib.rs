//! Simulation core for a side-scrolling arcade game: entities, a registry
//! that owns them, motion, collisions, timed spawning and level/boss
//! progression. Rendering and input polling live with the host.

pub mod collision;
pub mod entities;
pub mod error;
pub mod input;
pub mod motion;
pub mod progression;
pub mod registry;
pub mod session;
pub mod spawn;
pub mod tuning;

pub use entities::Arena;
pub use error::ArenaError;
pub use input::{HeldKeys, Input};
pub use progression::Phase;
pub use session::{Banner, Hud, Outcome, Session};
