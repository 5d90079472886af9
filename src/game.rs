//! Demo states and world assembly.
//!
//! Three states reproduce the flow of the character viewer: a title screen,
//! the viewer itself (animation modes, effects, display toggles and the LOD
//! slider) and a pause overlay pushed on top of it.
//!
//! [`setup_world`] and [`build_schedule`] wire the state stack into a
//! `bevy_ecs` world; [`run`] drives it with a fixed time step.

use bevy_ecs::prelude::*;
use log::{debug, info, trace};

use crate::events::input::{InputAction, InputEvent, state_input_observer};
use crate::events::statestack::{StateTransitionEvent, observe_state_transition_event};
use crate::gamestate::{GameState, Transition};
use crate::resources::frame::Frame;
use crate::resources::gameconfig::GameConfig;
use crate::resources::inputscript::InputScript;
use crate::resources::stateregistry::StateRegistry;
use crate::resources::statestack::{PendingTransitions, StateStack};
use crate::resources::worldtime::WorldTime;
use crate::systems::input::replay_input_script;
use crate::systems::statestack::{
    check_pending_transitions, render_state_stack, stack_is_empty, update_state_stack,
};
use crate::systems::time::update_world_time;

/// Seconds an effect stays highlighted after being fired.
const EFFECT_TIMESPAN: f32 = 1.0;
/// Seconds the "next model" button stays highlighted.
const NEXT_MODEL_TIMESPAN: f32 = 0.3;
/// Width of the LOD bar in pixels.
const LOD_BAR_WIDTH: i32 = 256;
/// Slider offset at which the LOD level reaches zero.
const LOD_ZERO_OFFSET: i32 = 247;
/// Slider travel in pixels between LOD 0 and LOD 1.
const LOD_RANGE: f32 = 200.0;
/// Pixels the slider moves per left/right press.
const LOD_STEP: i32 = 20;
/// Number of skeleton display modes (off, bones, bones + points).
const SKELETON_MODES: u8 = 3;

// ---------------------------------------------------------------------------
// Title
// ---------------------------------------------------------------------------

/// Entry screen. Confirm starts the viewer, back quits.
#[derive(Debug, Default)]
pub struct TitleState {
    blink: f32,
}

impl TitleState {
    pub fn boxed() -> Box<dyn GameState> {
        Box::new(TitleState::default())
    }
}

impl GameState for TitleState {
    fn name(&self) -> &str {
        "title"
    }

    fn on_enter(&mut self) {
        self.blink = 0.0;
    }

    fn on_update(&mut self, dt: f32) -> Transition {
        self.blink = (self.blink + dt) % 1.0;
        Transition::None
    }

    fn on_render(&self, frame: &mut Frame) {
        frame.draw_text("CHARACTER VIEWER");
        if self.blink < 0.5 {
            frame.draw_text("press enter");
        }
    }

    fn on_input(&mut self, event: &InputEvent) -> Transition {
        if !event.pressed {
            return Transition::None;
        }
        match event.action {
            InputAction::Action1 | InputAction::Action2 => Transition::Change(PlayState::boxed()),
            InputAction::Back => Transition::Clear,
            _ => Transition::None,
        }
    }
}

// ---------------------------------------------------------------------------
// Play
// ---------------------------------------------------------------------------

/// Animation mode shown by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    #[default]
    Idle,
    Fancy,
    Motion,
}

impl AnimationMode {
    pub fn next(self) -> Self {
        match self {
            AnimationMode::Idle => AnimationMode::Fancy,
            AnimationMode::Fancy => AnimationMode::Motion,
            AnimationMode::Motion => AnimationMode::Idle,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            AnimationMode::Idle => AnimationMode::Motion,
            AnimationMode::Fancy => AnimationMode::Idle,
            AnimationMode::Motion => AnimationMode::Fancy,
        }
    }
}

/// LOD level for a slider offset along the LOD bar, clamped to `[0, 1]`.
pub fn lod_level_from_offset(offset: i32) -> f32 {
    ((LOD_ZERO_OFFSET - offset) as f32 / LOD_RANGE).clamp(0.0, 1.0)
}

fn decay(timespan: &mut f32, dt: f32) {
    if *timespan > 0.0 {
        *timespan = (*timespan - dt).max(0.0);
    }
}

/// The viewer.
///
/// Up/down cycle the animation mode, action 1 and 2 fire the two effects,
/// special switches to the next model, left/right drag the LOD slider and the
/// skeleton/wireframe/light actions change the display toggles. Pause pushes
/// the pause overlay and back returns to the title.
#[derive(Debug)]
pub struct PlayState {
    pub mode: AnimationMode,
    /// Time spent as the current state, excluding paused time.
    pub active_time: f32,
    /// Remaining highlight time of each effect.
    pub action_timespan: [f32; 2],
    /// Remaining highlight time of the "next model" button.
    pub next_timespan: f32,
    pub model_index: u32,
    skeleton: u8,
    wireframe: bool,
    light: bool,
    /// Slider position along the LOD bar, in pixels.
    lod_offset: i32,
    pub times_paused: u32,
}

impl Default for PlayState {
    fn default() -> Self {
        PlayState {
            mode: AnimationMode::default(),
            active_time: 0.0,
            action_timespan: [0.0; 2],
            next_timespan: 0.0,
            model_index: 0,
            skeleton: 0,
            wireframe: false,
            light: true,
            lod_offset: LOD_ZERO_OFFSET - LOD_RANGE as i32,
            times_paused: 0,
        }
    }
}

impl PlayState {
    pub fn boxed() -> Box<dyn GameState> {
        Box::new(PlayState::default())
    }

    /// Skeleton display mode, `0..3`.
    pub fn skeleton(&self) -> u8 {
        self.skeleton
    }

    pub fn is_wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn is_light(&self) -> bool {
        self.light
    }

    pub fn lod_level(&self) -> f32 {
        lod_level_from_offset(self.lod_offset)
    }

    /// Move the LOD slider by `delta` pixels, staying on the bar.
    pub fn move_lod_slider(&mut self, delta: i32) {
        self.lod_offset = (self.lod_offset + delta).clamp(0, LOD_BAR_WIDTH - 1);
        debug!("LOD level -> {:.2}", self.lod_level());
    }
}

impl GameState for PlayState {
    fn name(&self) -> &str {
        "play"
    }

    fn on_enter(&mut self) {
        info!("Viewer started in {:?} mode", self.mode);
    }

    fn on_exit(&mut self) {
        info!(
            "Viewer closed after {:.2}s ({} pauses)",
            self.active_time, self.times_paused
        );
    }

    fn on_pause(&mut self) {
        self.times_paused += 1;
    }

    fn on_update(&mut self, dt: f32) -> Transition {
        self.active_time += dt;
        for timespan in self.action_timespan.iter_mut() {
            decay(timespan, dt);
        }
        decay(&mut self.next_timespan, dt);
        Transition::None
    }

    fn on_render(&self, frame: &mut Frame) {
        frame.draw_text(format!("mode: {:?}", self.mode));
        frame.draw_text(format!("time: {:.2}s", self.active_time));
        frame.draw_text(format!(
            "model: {} skeleton: {} wireframe: {} light: {}",
            self.model_index, self.skeleton, self.wireframe, self.light
        ));
        frame.draw_text(format!("lod: {:.2}", self.lod_level()));
        for (i, timespan) in self.action_timespan.iter().enumerate() {
            if *timespan > 0.0 {
                frame.draw_text(format!("f/x {}", i + 1));
            }
        }
        if self.next_timespan > 0.0 {
            frame.draw_text("next model");
        }
    }

    fn on_input(&mut self, event: &InputEvent) -> Transition {
        if !event.pressed {
            return Transition::None;
        }
        match event.action {
            InputAction::Up => {
                self.mode = self.mode.previous();
                debug!("Animation mode -> {:?}", self.mode);
            }
            InputAction::Down => {
                self.mode = self.mode.next();
                debug!("Animation mode -> {:?}", self.mode);
            }
            InputAction::Left => self.move_lod_slider(-LOD_STEP),
            InputAction::Right => self.move_lod_slider(LOD_STEP),
            InputAction::Action1 => self.action_timespan[0] = EFFECT_TIMESPAN,
            InputAction::Action2 => self.action_timespan[1] = EFFECT_TIMESPAN,
            InputAction::Special => {
                self.model_index += 1;
                self.next_timespan = NEXT_MODEL_TIMESPAN;
            }
            InputAction::Skeleton => self.skeleton = (self.skeleton + 1) % SKELETON_MODES,
            InputAction::Wireframe => self.wireframe = !self.wireframe,
            InputAction::Light => self.light = !self.light,
            InputAction::Pause => return Transition::Push(PauseState::boxed()),
            InputAction::Back => return Transition::Change(TitleState::boxed()),
        }
        Transition::None
    }
}

// ---------------------------------------------------------------------------
// Pause
// ---------------------------------------------------------------------------

/// Overlay pushed over the viewer. Pause/back resume, action 2 quits.
#[derive(Debug, Default)]
pub struct PauseState;

impl PauseState {
    pub fn boxed() -> Box<dyn GameState> {
        Box::new(PauseState)
    }
}

impl GameState for PauseState {
    fn name(&self) -> &str {
        "pause"
    }

    fn on_render(&self, frame: &mut Frame) {
        frame.draw_text("PAUSED");
    }

    fn on_input(&mut self, event: &InputEvent) -> Transition {
        if !event.pressed {
            return Transition::None;
        }
        match event.action {
            InputAction::Pause | InputAction::Back => Transition::Pop,
            InputAction::Action2 => Transition::Clear,
            _ => Transition::None,
        }
    }
}

// ---------------------------------------------------------------------------
// World assembly
// ---------------------------------------------------------------------------

/// Register the demo states under their names.
pub fn register_states(registry: &mut StateRegistry) {
    registry.insert("title", TitleState::boxed);
    registry.insert("play", PlayState::boxed);
    registry.insert("pause", PauseState::boxed);
}

/// Build a world holding an empty state stack and every resource and
/// observer the schedule needs.
pub fn setup_world(config: &GameConfig, script: InputScript) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.insert_resource(StateStack::new());
    world.insert_resource(PendingTransitions::new());
    world.insert_resource(Frame::new());
    world.insert_resource(script);

    let mut registry = StateRegistry::new();
    register_states(&mut registry);
    world.insert_resource(registry);
    world.insert_resource(config.clone());

    world.add_observer(observe_state_transition_event);
    world.add_observer(state_input_observer);
    // Ensure the observers are registered before anything triggers events.
    world.flush();
    world
}

/// Install the registered state `name` as the only state on the stack.
pub fn enter_initial_state(world: &mut World, name: &str) -> Result<(), String> {
    let state = world.resource::<StateRegistry>().create(name)?;
    world
        .resource_mut::<PendingTransitions>()
        .push(Transition::Change(state));
    world.trigger(StateTransitionEvent {});
    Ok(())
}

/// Per-tick schedule: input, queued transitions, update, render.
///
/// Update is skipped once the stack is empty; render still runs so the frame
/// is cleared.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            replay_input_script,
            check_pending_transitions,
            update_state_stack.run_if(not(stack_is_empty)),
            render_state_stack,
        )
            .chain(),
    );
    update
}

/// Tick the world with a fixed `dt` until the stack is empty or
/// `max_frames` ticks have run (zero means no limit). Returns the number of
/// ticks run.
pub fn run(world: &mut World, schedule: &mut Schedule, dt: f32, max_frames: u64) -> u64 {
    let mut frames = 0;
    while !world.resource::<StateStack>().is_empty() && (max_frames == 0 || frames < max_frames)
    {
        update_world_time(world, dt);
        schedule.run(world);
        frames += 1;

        let frame = world.resource::<Frame>();
        trace!("Frame {}: {:?}", frames, frame.lines());
    }
    info!(
        "Stopped after {} frames, stack: {:?}",
        frames,
        world.resource::<StateStack>().state_names()
    );
    frames
}
