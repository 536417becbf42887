use macroquad::prelude::*;

const FONT_SIZE: f32 = 16.0;

/// Shorten `text` with an ellipsis until it fits in `max_width`
fn fit_text(text: &str, max_width: f32) -> String {
    if measure_text(text, None, FONT_SIZE as u16, 1.0).width <= max_width {
        return text.to_string();
    }
    let mut truncated = text.to_string();
    while !truncated.is_empty()
        && measure_text(&format!("{truncated}..."), None, FONT_SIZE as u16, 1.0).width > max_width
    {
        truncated.pop();
    }
    format!("{truncated}...")
}

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 26.0,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Check if dropdown is open
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Draw dropdown without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 4.0, 14.0, GRAY);

        let button_color = if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };

        draw_rectangle(self.x, self.y, self.width, self.height, button_color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        // Leave space for the arrow
        let text = fit_text(&self.items[self.selected], self.width - 30.0);
        draw_text(&text, self.x + 5.0, self.y + 18.0, FONT_SIZE, WHITE);
        draw_text("v", self.x + self.width - 16.0, self.y + 18.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * self.height;
        draw_rectangle(
            self.x,
            self.y + self.height,
            self.width,
            menu_height,
            Color::from_rgba(30, 30, 30, 255),
        );

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.item_y(i);

            let item_color = if self.is_hovered_item(mouse_pos, i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };

            draw_rectangle(self.x, item_y, self.width, self.height, item_color);
            draw_rectangle_lines(
                self.x,
                item_y,
                self.width,
                self.height,
                1.0,
                Color::from_rgba(80, 80, 80, 255),
            );

            let text = fit_text(item, self.width - 10.0);
            draw_text(&text, self.x + 5.0, item_y + 18.0, FONT_SIZE, WHITE);
        }

        draw_rectangle_lines(
            self.x,
            self.y + self.height,
            self.width,
            menu_height,
            2.0,
            WHITE,
        );
    }

    /// Handle interaction and return true if selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }

        // Opening/closing is not a selection change
        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }

        if !self.is_open {
            return false;
        }

        let clicked = (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i));
        self.is_open = false;
        match clicked {
            Some(i) if i != self.selected => {
                self.selected = i;
                true
            }
            _ => false,
        }
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y + self.height + index as f32 * self.height
    }

    fn header(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn item(&self, index: usize) -> Rect {
        Rect::new(self.x, self.item_y(index), self.width, self.height)
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        self.header().contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        self.item(index).contains(vec2(mouse_pos.0, mouse_pos.1))
    }
}
