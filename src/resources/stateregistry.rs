//! Registry of constructible states.
//!
//! Allows state factories to be registered under string keys and looked up
//! later, so the startup state can be picked from the command line or the
//! config file without tight coupling.

use crate::gamestate::GameState;
use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Builds a fresh, not yet entered state.
pub type StateFactory = fn() -> Box<dyn GameState>;

/// Map of state names to factories.
#[derive(Resource, Default)]
pub struct StateRegistry {
    pub map: FxHashMap<String, StateFactory>,
}

impl StateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        StateRegistry {
            map: FxHashMap::default(),
        }
    }

    /// Insert a factory under a human-readable name.
    pub fn insert(&mut self, name: impl Into<String>, factory: StateFactory) {
        self.map.insert(name.into(), factory);
    }

    /// Retrieve a factory by name, if present.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&StateFactory> {
        self.map.get(name.as_ref())
    }

    /// Build a new state registered under `name`.
    pub fn create(&self, name: impl AsRef<str>) -> Result<Box<dyn GameState>, String> {
        let name = name.as_ref();
        self.get(name).map(|factory| factory()).ok_or_else(|| {
            format!(
                "Unknown state '{}', expected one of: {}",
                name,
                self.names().join(", ")
            )
        })
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
