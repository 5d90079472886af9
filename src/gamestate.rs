//! Game state capability and stack transitions.
//!
//! A [`GameState`] is one mode of the application (title screen, gameplay,
//! pause overlay...). States are owned by the
//! [`StateStack`](crate::resources::statestack::StateStack) once pushed and
//! only the top of the stack receives update, render and input calls.
//!
//! States never touch the stack directly. Instead, [`GameState::on_update`]
//! and [`GameState::on_input`] return a [`Transition`] which the stack
//! applies after the hook has returned.

use crate::events::input::InputEvent;
use crate::resources::frame::Frame;
use std::fmt;

/// Lifecycle hooks a state exposes to the stack.
///
/// Every hook except [`name`](GameState::name) has a no-op default.
///
/// Hook order guaranteed by the stack:
/// - push B over A: `A.on_pause`, then `B.on_enter`
/// - pop B: `B.on_exit`, then `A.on_resume`
/// - change/clear: `on_exit` on every state from top to bottom
pub trait GameState: Send + Sync {
    /// Human-readable name, used in logs and inspection.
    fn name(&self) -> &str;

    /// Called once when the state is installed on the stack.
    fn on_enter(&mut self) {}

    /// Called once right before the state is destroyed.
    fn on_exit(&mut self) {}

    /// Called when another state is pushed above this one.
    fn on_pause(&mut self) {}

    /// Called when this state becomes top again after a pop.
    fn on_resume(&mut self) {}

    /// Advance the state by `dt` seconds.
    fn on_update(&mut self, _dt: f32) -> Transition {
        Transition::None
    }

    /// Draw the state into `frame`.
    fn on_render(&self, _frame: &mut Frame) {}

    /// React to an input action.
    fn on_input(&mut self, _event: &InputEvent) -> Transition {
        Transition::None
    }
}

/// Stack change requested by a state or a system.
#[derive(Default)]
pub enum Transition {
    /// Keep the stack as it is.
    #[default]
    None,
    /// Pause the current top and push a new state over it.
    Push(Box<dyn GameState>),
    /// Destroy the current top and resume the one below.
    Pop,
    /// Destroy every state and install a single new one.
    Change(Box<dyn GameState>),
    /// Destroy every state, leaving the stack empty.
    Clear,
}

impl Transition {
    /// Whether this transition leaves the stack untouched.
    pub fn is_none(&self) -> bool {
        matches!(self, Transition::None)
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::None => write!(f, "None"),
            Transition::Push(state) => write!(f, "Push({})", state.name()),
            Transition::Pop => write!(f, "Pop"),
            Transition::Change(state) => write!(f, "Change({})", state.name()),
            Transition::Clear => write!(f, "Clear"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;

    impl GameState for Dummy {
        fn name(&self) -> &str {
            "dummy"
        }
    }

    #[test]
    fn test_transition_default_is_none() {
        assert!(Transition::default().is_none());
        assert!(!Transition::Pop.is_none());
    }

    #[test]
    fn test_transition_debug_uses_state_name() {
        assert_eq!(format!("{:?}", Transition::Push(Box::new(Dummy))), "Push(dummy)");
        assert_eq!(format!("{:?}", Transition::Change(Box::new(Dummy))), "Change(dummy)");
        assert_eq!(format!("{:?}", Transition::Clear), "Clear");
    }

    #[test]
    fn test_default_hooks_request_nothing() {
        let mut dummy = Dummy;
        assert!(dummy.on_update(0.5).is_none());
        let event = InputEvent {
            action: crate::events::input::InputAction::Back,
            pressed: true,
        };
        assert!(dummy.on_input(&event).is_none());
    }
}
