//! Input systems.
//!
//! [`replay_input_script`] stands in for keyboard polling: every tick it
//! takes the [`InputScript`] entries due at the current frame and triggers
//! them as [`InputEvent`](crate::events::input::InputEvent)s, which the
//! input observer forwards to the current state.
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::inputscript::InputScript;
use crate::resources::worldtime::WorldTime;

/// Trigger scripted input events scheduled for this frame.
pub fn replay_input_script(
    mut script: ResMut<InputScript>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for event in script.take_due(time.frame_count) {
        debug!(
            "Frame {}: replaying {:?} pressed={}",
            time.frame_count, event.action, event.pressed
        );
        commands.trigger(event);
    }
}
