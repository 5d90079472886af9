//! Runtime systems.
//!
//! Submodules overview
//! - [`input`] – replay scripted input as [`crate::events::input::InputEvent`]s
//! - [`statestack`] – trigger pending transitions, update and render the current state
//! - [`time`] – update simulation time and delta

pub mod input;
pub mod statestack;
pub mod time;
