//! Input action events.
//!
//! This module defines [`InputEvent`] which is triggered when a logical input
//! action is pressed or released, and the observer that forwards it to the
//! current state on the [`StateStack`].

use crate::resources::statestack::StateStack;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::trace;
use std::str::FromStr;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Selection up.
    Up,
    /// Selection down.
    Down,
    /// Slider left.
    Left,
    /// Slider right.
    Right,
    /// Back/cancel action.
    Back,
    /// Primary action button.
    Action1,
    /// Secondary action button.
    Action2,
    /// Pause toggle.
    Pause,
    /// Special function.
    Special,
    /// Cycle the skeleton display mode.
    Skeleton,
    /// Toggle wireframe rendering.
    Wireframe,
    /// Toggle lighting.
    Light,
}

impl FromStr for InputAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(InputAction::Up),
            "down" => Ok(InputAction::Down),
            "left" => Ok(InputAction::Left),
            "right" => Ok(InputAction::Right),
            "back" | "esc" | "escape" => Ok(InputAction::Back),
            "action1" | "space" => Ok(InputAction::Action1),
            "action2" | "enter" => Ok(InputAction::Action2),
            "pause" | "p" => Ok(InputAction::Pause),
            "special" | "next" => Ok(InputAction::Special),
            "skeleton" | "k" => Ok(InputAction::Skeleton),
            "wireframe" | "w" => Ok(InputAction::Wireframe),
            "light" | "l" => Ok(InputAction::Light),
            other => Err(format!("Unknown input action '{}'", other)),
        }
    }
}

/// Event emitted when an input action is pressed or released.
///
/// The `action` field identifies which logical action occurred, and `pressed`
/// indicates whether it was a press (true) or release (false).
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}

/// Observer that dispatches input to the current state.
///
/// The top state's `on_input` runs and the transition it returns is applied
/// right away. Without a current state the event is dropped.
pub fn state_input_observer(trigger: On<InputEvent>, mut stack: ResMut<StateStack>) {
    let event = trigger.event();
    trace!("InputEvent {:?} pressed={}", event.action, event.pressed);
    stack.handle_input(event);
}
