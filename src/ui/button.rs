use crate::input::Command;
use macroquad::prelude::*;

const IDLE: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const HOVER: Color = Color::new(0.39, 0.58, 0.93, 1.0);
/// Fill for toggles that are currently on
const ACTIVE: Color = Color::new(0.85, 0.55, 0.15, 1.0);
const FONT_SIZE: u16 = 16;

/// Panel button that issues a single [`Command`] when clicked
#[derive(Clone, Debug)]
pub struct Button {
    rect: Rect,
    label: String,
    command: Command,
    active: bool,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>, command: Command) -> Self {
        Self {
            rect,
            label: label.into(),
            command,
            active: false,
        }
    }

    /// Highlight the button while the state it toggles is on
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn contains(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// The command to run if the button was clicked this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<Command> {
        let pressed = is_mouse_button_pressed(MouseButton::Left);
        (pressed && self.contains(mouse_pos)).then_some(self.command)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = match (self.contains(mouse_pos), self.active) {
            (true, _) => HOVER,
            (false, true) => ACTIVE,
            (false, false) => IDLE,
        };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let size = measure_text(&self.label, None, FONT_SIZE, 1.0);
        draw_text(
            &self.label,
            x + (w - size.width) / 2.0,
            y + (h + size.height) / 2.0,
            FONT_SIZE as f32,
            WHITE,
        );
    }
}
