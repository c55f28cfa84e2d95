//! Systems that operate on the actor registry.
//!
//! Systems are functions over `&mut World` plus the state they are handed.
//! They do not own state: actors live in the world, everything else in the
//! engine.

pub mod casting;
pub mod collision;
pub mod expiry;
pub mod movement;
pub mod snapshot;
pub mod spawner;
