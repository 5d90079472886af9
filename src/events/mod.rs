//! Event types and observers.
//!
//! Events provide a decoupled way for systems to reach the state stack
//! without holding it themselves.
//!
//! Submodules:
//! - [`input`] – logical input actions dispatched to the current state
//! - [`statestack`] – application of queued stack transitions
pub mod input;
pub mod statestack;
