//! Per-tick render output.
//!
//! There is no window: the top state draws text lines into the [`Frame`]
//! resource and the binary decides what to do with them.
use bevy_ecs::prelude::Resource;

/// Lines drawn by the current state during the last render pass.
#[derive(Resource, Debug, Default, Clone)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Frame { lines: Vec::new() }
    }

    /// Append one line of text to the frame.
    pub fn draw_text(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Forget everything drawn so far. Called before each render pass.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_draw_and_clear() {
        let mut frame = Frame::new();
        assert!(frame.is_empty());
        frame.draw_text("hello");
        frame.draw_text(String::from("world"));
        assert_eq!(frame.lines(), &["hello".to_string(), "world".to_string()]);
        frame.clear();
        assert!(frame.is_empty());
    }
}
