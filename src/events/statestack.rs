//! State transition event and observer.
//!
//! Systems can request stack changes by pushing a
//! [`Transition`](crate::gamestate::Transition) into [`PendingTransitions`].
//! Emitting a [`StateTransitionEvent`] then triggers the observer in this
//! module, which applies every queued transition to the [`StateStack`].
//!
//! This decouples the intent to change state from the mechanics of running
//! enter/exit hooks and avoids borrowing conflicts.
use crate::resources::statestack::{PendingTransitions, StateStack};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that pending transitions should be applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct StateTransitionEvent {}

/// Observer that applies pending transitions.
///
/// Contract
/// - Drains [`PendingTransitions`] oldest first.
/// - Applies each transition to [`StateStack`], which runs the
///   pause/enter/exit/resume hooks.
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_state_transition_event(
    _trigger: On<StateTransitionEvent>,
    mut pending: Option<ResMut<PendingTransitions>>,
    mut stack: Option<ResMut<StateStack>>,
) {
    debug!("StateTransitionEvent triggered");

    if let (Some(pending), Some(stack)) = (pending.as_deref_mut(), stack.as_deref_mut()) {
        if !pending.is_pending() {
            debug!("No transition pending.");
            return;
        }
        for transition in pending.drain() {
            info!("Applying {:?} (depth {})", transition, stack.depth());
            stack.apply(transition);
        }
        debug!("State stack is now {:?}", stack.state_names());
    } else {
        warn!(
            "One or more resources missing in observe_state_transition_event. pending: {:?}, stack: {:?}",
            pending.is_some(),
            stack.is_some()
        );
    }
}
