//! State stack systems.
//!
//! - [`check_pending_transitions`] triggers the transition observer when
//!   something queued a change.
//! - [`update_state_stack`] advances the current state by the world delta.
//! - [`render_state_stack`] redraws the [`Frame`] from the current state.
use crate::events::statestack::StateTransitionEvent;
use crate::resources::frame::Frame;
use crate::resources::statestack::{PendingTransitions, StateStack};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;

pub fn check_pending_transitions(mut commands: Commands, pending: Res<PendingTransitions>) {
    if pending.is_pending() {
        commands.trigger(StateTransitionEvent {});
    }
}

/// Call `on_update` on the current state and apply the returned transition.
pub fn update_state_stack(mut stack: ResMut<StateStack>, time: Res<WorldTime>) {
    stack.update(time.delta);
}

/// Clear the frame and let the current state draw into it.
pub fn render_state_stack(stack: Res<StateStack>, mut frame: ResMut<Frame>) {
    frame.clear();
    stack.render(&mut frame);
}

pub fn stack_is_empty(stack: Res<StateStack>) -> bool {
    stack.is_empty()
}
