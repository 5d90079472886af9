//! State stack library.
//!
//! This module exposes the state stack, its ECS resources, systems and
//! events, and the demo states for use in integration tests and as a
//! reusable library.

pub mod events;
pub mod game;
pub mod gamestate;
pub mod resources;
pub mod systems;
