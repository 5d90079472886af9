//! Scripted input resource.
//!
//! Without a window there is no keyboard to poll, so input comes from a
//! script of timed actions. The script string is a comma separated list of
//! `frame:action` entries, optionally suffixed with `:up` for a release:
//!
//! ```text
//! 2:enter,5:pause,8:pause,10:back:up
//! ```
use crate::events::input::{InputAction, InputEvent};
use bevy_ecs::prelude::*;

/// One timed input entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedInput {
    pub frame: u64,
    pub action: InputAction,
    pub pressed: bool,
}

/// Ordered list of inputs to replay, consumed as frames go by.
#[derive(Resource, Debug, Default, Clone)]
pub struct InputScript {
    entries: Vec<ScriptedInput>,
    cursor: usize,
}

impl InputScript {
    pub fn new(mut entries: Vec<ScriptedInput>) -> Self {
        // stable: same-frame entries keep their written order
        entries.sort_by_key(|e| e.frame);
        InputScript { entries, cursor: 0 }
    }

    /// Parse a script string. An empty string yields an empty script.
    pub fn parse(script: &str) -> Result<Self, String> {
        let mut entries = Vec::new();
        for raw in script.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let mut parts = raw.split(':');
            let frame = parts
                .next()
                .ok_or_else(|| format!("Empty input entry '{}'", raw))?
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("Invalid frame in input entry '{}': {}", raw, e))?;
            let action = parts
                .next()
                .ok_or_else(|| format!("Missing action in input entry '{}'", raw))?
                .parse::<InputAction>()?;
            let pressed = match parts.next().map(str::trim) {
                None | Some("down") => true,
                Some("up") => false,
                Some(other) => {
                    return Err(format!("Invalid edge '{}' in input entry '{}'", other, raw));
                }
            };
            if parts.next().is_some() {
                return Err(format!("Too many fields in input entry '{}'", raw));
            }
            entries.push(ScriptedInput {
                frame,
                action,
                pressed,
            });
        }
        Ok(InputScript::new(entries))
    }

    /// Take every entry scheduled at or before `frame` as events.
    pub fn take_due(&mut self, frame: u64) -> Vec<InputEvent> {
        let start = self.cursor;
        while self.cursor < self.entries.len() && self.entries[self.cursor].frame <= frame {
            self.cursor += 1;
        }
        self.entries[start..self.cursor]
            .iter()
            .map(|e| InputEvent {
                action: e.action,
                pressed: e.pressed,
            })
            .collect()
    }

    /// Number of entries not replayed yet.
    pub fn remaining(&self) -> usize {
        self.entries.len() - self.cursor
    }
}
