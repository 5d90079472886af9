//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `frame` – text drawn by the current state during the last render pass
//! - `gameconfig` – loop settings loaded from `config.ini`
//! - `inputscript` – timed input actions replayed in headless runs
//! - `stateregistry` – named factories for constructible states
//! - `statestack` – the owning state stack and its pending transitions
//! - `worldtime` – simulation time and delta
pub mod frame;
pub mod gameconfig;
pub mod inputscript;
pub mod stateregistry;
pub mod statestack;
pub mod worldtime;
