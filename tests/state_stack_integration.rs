//! State stack integration tests.
//!
//! Covers the lifecycle contract of [`StateStack`]: hook order on push, pop,
//! change and clear, depth bookkeeping, and the empty-stack no-ops.

use std::sync::{Arc, Mutex};

use statestack::events::input::{InputAction, InputEvent};
use statestack::gamestate::{GameState, Transition};
use statestack::resources::frame::Frame;
use statestack::resources::statestack::StateStack;

type Log = Arc<Mutex<Vec<String>>>;

/// State that records every hook call into a shared log.
struct Recorder {
    name: String,
    log: Log,
}

impl Recorder {
    fn boxed(name: &str, log: &Log) -> Box<dyn GameState> {
        Box::new(Recorder {
            name: name.to_string(),
            log: log.clone(),
        })
    }

    fn record(&self, hook: &str) {
        self.log.lock().unwrap().push(format!("{}.{}", self.name, hook));
    }
}

impl GameState for Recorder {
    fn name(&self) -> &str {
        &self.name
    }
    fn on_enter(&mut self) {
        self.record("enter");
    }
    fn on_exit(&mut self) {
        self.record("exit");
    }
    fn on_pause(&mut self) {
        self.record("pause");
    }
    fn on_resume(&mut self) {
        self.record("resume");
    }
    fn on_update(&mut self, _dt: f32) -> Transition {
        self.record("update");
        Transition::None
    }
    fn on_render(&self, frame: &mut Frame) {
        frame.draw_text(format!("{} rendered", self.name));
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        self.record("drop");
    }
}

fn take(log: &Log) -> Vec<String> {
    std::mem::take(&mut *log.lock().unwrap())
}

fn top_name(stack: &StateStack) -> Option<&str> {
    stack.current_state().map(|s| s.name())
}

#[test]
fn walkthrough_push_push_pop_change() {
    let log = Log::default();
    let mut stack = StateStack::new();

    stack.push_state(Recorder::boxed("a", &log));
    assert_eq!(stack.depth(), 1);
    assert_eq!(top_name(&stack), Some("a"));
    assert_eq!(take(&log), vec!["a.enter"]);

    stack.push_state(Recorder::boxed("b", &log));
    assert_eq!(stack.depth(), 2);
    assert_eq!(top_name(&stack), Some("b"));
    assert_eq!(take(&log), vec!["a.pause", "b.enter"]);

    assert!(stack.pop_state());
    assert_eq!(stack.depth(), 1);
    assert_eq!(top_name(&stack), Some("a"));
    assert_eq!(take(&log), vec!["b.exit", "b.drop", "a.resume"]);

    stack.change_state(Recorder::boxed("c", &log));
    assert_eq!(stack.depth(), 1);
    assert_eq!(top_name(&stack), Some("c"));
    assert_eq!(take(&log), vec!["a.exit", "a.drop", "c.enter"]);
}

#[test]
fn pop_restores_depth_of_matching_push() {
    let log = Log::default();
    let mut stack = StateStack::new();
    for depth in 0..5 {
        assert_eq!(stack.depth(), depth);
        stack.push_state(Recorder::boxed(&format!("s{}", depth), &log));
    }
    for depth in (0..5).rev() {
        stack.pop_state();
        assert_eq!(stack.depth(), depth);
    }
    assert!(stack.is_empty());
}

#[test]
fn interleaved_push_pop_keeps_depth_balanced() {
    let log = Log::default();
    let mut stack = StateStack::new();
    stack.push_state(Recorder::boxed("base", &log));
    for i in 0..3 {
        let before = stack.depth();
        stack.push_state(Recorder::boxed(&format!("overlay{}", i), &log));
        stack.push_state(Recorder::boxed(&format!("nested{}", i), &log));
        stack.pop_state();
        stack.pop_state();
        assert_eq!(stack.depth(), before);
        stack.push_state(Recorder::boxed(&format!("kept{}", i), &log));
    }
    assert_eq!(
        stack.state_names(),
        vec!["base", "kept0", "kept1", "kept2"]
    );
}

#[test]
fn change_state_always_leaves_depth_one() {
    let log = Log::default();
    for prior in [0usize, 1, 4] {
        let mut stack = StateStack::new();
        for i in 0..prior {
            stack.push_state(Recorder::boxed(&format!("s{}", i), &log));
        }
        stack.change_state(Recorder::boxed("only", &log));
        assert_eq!(stack.depth(), 1);
        assert_eq!(top_name(&stack), Some("only"));
    }
}

#[test]
fn change_state_exits_every_state_top_to_bottom() {
    let log = Log::default();
    let mut stack = StateStack::new();
    stack.push_state(Recorder::boxed("a", &log));
    stack.push_state(Recorder::boxed("b", &log));
    take(&log);

    stack.change_state(Recorder::boxed("c", &log));
    assert_eq!(
        take(&log),
        vec!["b.exit", "b.drop", "a.exit", "a.drop", "c.enter"]
    );
}

#[test]
fn clear_always_leaves_depth_zero() {
    let log = Log::default();
    for prior in [0usize, 1, 3] {
        let mut stack = StateStack::new();
        for i in 0..prior {
            stack.push_state(Recorder::boxed(&format!("s{}", i), &log));
        }
        stack.clear();
        assert_eq!(stack.depth(), 0);
        assert!(stack.current_state().is_none());
    }
}

#[test]
fn dropping_the_stack_exits_and_drops_states() {
    let log = Log::default();
    let mut stack = StateStack::new();
    stack.push_state(Recorder::boxed("a", &log));
    stack.push_state(Recorder::boxed("b", &log));
    take(&log);

    drop(stack);
    assert_eq!(take(&log), vec!["b.exit", "b.drop", "a.exit", "a.drop"]);
}

#[test]
fn empty_stack_operations_are_defined_noops() {
    let mut stack = StateStack::new();
    assert!(stack.current_state().is_none());
    assert!(stack.current_state_mut().is_none());
    assert!(!stack.pop_state());
    assert!(!stack.update(0.016));

    let mut frame = Frame::new();
    stack.render(&mut frame);
    assert!(frame.is_empty());

    let event = InputEvent {
        action: InputAction::Action1,
        pressed: true,
    };
    assert!(!stack.handle_input(&event));
    assert!(stack.is_empty());
}

#[test]
fn paused_state_receives_no_update_or_render() {
    let log = Log::default();
    let mut stack = StateStack::new();
    stack.push_state(Recorder::boxed("game", &log));
    stack.push_state(Recorder::boxed("menu", &log));
    take(&log);

    stack.update(0.016);
    let mut frame = Frame::new();
    stack.render(&mut frame);

    assert_eq!(take(&log), vec!["menu.update"]);
    assert_eq!(frame.lines(), &["menu rendered".to_string()]);
}

#[test]
fn current_state_mut_reaches_top() {
    let log = Log::default();
    let mut stack = StateStack::new();
    stack.push_state(Recorder::boxed("a", &log));
    take(&log);

    if let Some(top) = stack.current_state_mut() {
        top.on_update(0.5);
    }
    assert_eq!(take(&log), vec!["a.update"]);
}
