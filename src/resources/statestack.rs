//! The state stack resource and its pending transition queue.
//!
//! [`StateStack`] owns every active [`GameState`] and applies lifecycle hooks
//! on push, pop, change and clear. [`PendingTransitions`] lets systems that do
//! not hold the stack request changes; see
//! `crate::events::statestack::observe_state_transition_event` for how the
//! queue is drained.

use crate::events::input::InputEvent;
use crate::gamestate::{GameState, Transition};
use crate::resources::frame::Frame;
use bevy_ecs::prelude::Resource;
use log::{debug, info, warn};
use smallvec::SmallVec;

/// LIFO stack of owned game states. Only the top is current.
///
/// Popping an empty stack is a logged no-op that returns `false`. Updating,
/// rendering or dispatching input with no current state does nothing.
#[derive(Resource, Default)]
pub struct StateStack {
    states: Vec<Box<dyn GameState>>,
}

impl StateStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        StateStack { states: Vec::new() }
    }

    /// Number of states currently owned.
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Names of the owned states, bottom first.
    pub fn state_names(&self) -> Vec<&str> {
        self.states.iter().map(|s| s.name()).collect()
    }

    /// Borrow the current (top) state, if any.
    pub fn current_state(&self) -> Option<&dyn GameState> {
        self.states.last().map(|s| s.as_ref())
    }

    /// Mutably borrow the current (top) state, if any.
    pub fn current_state_mut(&mut self) -> Option<&mut (dyn GameState + 'static)> {
        self.states.last_mut().map(|s| s.as_mut())
    }

    /// Replace the whole stack with `state`.
    ///
    /// Every owned state is exited and dropped from top to bottom before
    /// `state` is entered. Depth is exactly 1 afterwards.
    pub fn change_state(&mut self, mut state: Box<dyn GameState>) {
        info!("Changing state to {}", state.name());
        self.clear();
        state.on_enter();
        self.states.push(state);
    }

    /// Pause the current top (if any) and push `state` over it.
    pub fn push_state(&mut self, mut state: Box<dyn GameState>) {
        if let Some(top) = self.states.last_mut() {
            debug!("Pausing {}", top.name());
            top.on_pause();
        }
        info!("Pushing state {}", state.name());
        state.on_enter();
        self.states.push(state);
    }

    /// Exit and drop the top, then resume the newly exposed state.
    ///
    /// Returns `false` without touching anything if the stack is empty.
    pub fn pop_state(&mut self) -> bool {
        let Some(mut top) = self.states.pop() else {
            warn!("pop_state called on an empty state stack");
            return false;
        };
        info!("Popping state {}", top.name());
        top.on_exit();
        drop(top);
        if let Some(below) = self.states.last_mut() {
            debug!("Resuming {}", below.name());
            below.on_resume();
        }
        true
    }

    /// Exit and drop every state from top to bottom.
    pub fn clear(&mut self) {
        while let Some(mut top) = self.states.pop() {
            debug!("Exiting {}", top.name());
            top.on_exit();
        }
    }

    /// Apply a transition. Returns `true` if the stack changed.
    pub fn apply(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::None => false,
            Transition::Push(state) => {
                self.push_state(state);
                true
            }
            Transition::Pop => self.pop_state(),
            Transition::Change(state) => {
                self.change_state(state);
                true
            }
            Transition::Clear => {
                let had_states = !self.is_empty();
                self.clear();
                had_states
            }
        }
    }

    /// Update the current state and apply the transition it returns.
    ///
    /// Returns `false` if there is no current state.
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(top) = self.states.last_mut() else {
            return false;
        };
        let transition = top.on_update(dt);
        if !transition.is_none() {
            debug!("{} requested {:?} on update", top.name(), transition);
        }
        self.apply(transition);
        true
    }

    /// Render the current state into `frame`. No-op on an empty stack.
    pub fn render(&self, frame: &mut Frame) {
        if let Some(top) = self.states.last() {
            top.on_render(frame);
        }
    }

    /// Forward `event` to the current state and apply its transition.
    ///
    /// Returns `false` if there is no current state.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let Some(top) = self.states.last_mut() else {
            debug!("Input {:?} ignored, no current state", event.action);
            return false;
        };
        let transition = top.on_input(event);
        if !transition.is_none() {
            debug!("{} requested {:?} on input", top.name(), transition);
        }
        self.apply(transition);
        true
    }
}

impl Drop for StateStack {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Transitions requested by systems, applied in FIFO order.
///
/// Use [`PendingTransitions::push`] to queue a request; the
/// `check_pending_transitions` system triggers the observer that drains it.
#[derive(Resource, Default)]
pub struct PendingTransitions {
    queue: SmallVec<[Transition; 4]>,
}

impl PendingTransitions {
    pub fn new() -> Self {
        PendingTransitions {
            queue: SmallVec::new(),
        }
    }

    /// Queue a transition. [`Transition::None`] is ignored.
    pub fn push(&mut self, transition: Transition) {
        if transition.is_none() {
            return;
        }
        self.queue.push(transition);
    }

    pub fn is_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Take every queued transition, oldest first.
    pub fn drain(&mut self) -> SmallVec<[Transition; 4]> {
        std::mem::take(&mut self.queue)
    }
}
