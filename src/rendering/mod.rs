use crate::application::{CellColor, CellShape, ClearMode, Driver, RenderStyle};
use crate::domain::Grid;
use crate::ui::{ControlPanel, PANEL_WIDTH, board_area_height, board_area_width, panel_x, status_top};
use macroquad::prelude::*;
use ::rand::Rng;

/// Alpha of one fade pass; low enough that trails last a few dozen frames
const FADE_ALPHA: f32 = 0.03;
/// Random colors stay below this channel value so cells remain visible on white
const RANDOM_CHANNEL_MAX: u8 = 200;

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

fn board_label(width: usize, height: usize) -> String {
    format!("Board: {width}x{height}")
}

fn random_color(alpha: f32) -> Color {
    let mut rng = ::rand::rng();
    let mut channel = || rng.random_range(0..RANDOM_CHANNEL_MAX) as f32 / 255.0;
    Color::new(channel(), channel(), channel(), alpha)
}

fn faded(color: Color) -> Color {
    Color { a: FADE_ALPHA, ..color }
}

/// Offscreen surface the board is drawn into. It keeps its pixels between
/// frames, which is what lets the fade clear modes leave trails.
pub struct BoardCanvas {
    target: RenderTarget,
    size: (u32, u32),
    /// Set until the first frame is drawn into a newly created target
    fresh: bool,
}

impl BoardCanvas {
    pub fn new() -> Self {
        let size = Self::wanted_size();
        Self {
            target: Self::make_target(size),
            size,
            fresh: true,
        }
    }

    fn wanted_size() -> (u32, u32) {
        (
            board_area_width().max(1.0) as u32,
            board_area_height().max(1.0) as u32,
        )
    }

    fn make_target((width, height): (u32, u32)) -> RenderTarget {
        let target = render_target(width, height);
        target.texture.set_filter(FilterMode::Nearest);
        target
    }

    /// Recreate the surface after the window changed size
    fn fit_window(&mut self) {
        let size = Self::wanted_size();
        if size != self.size {
            tracing::debug!(?size, "board canvas resized");
            self.target = Self::make_target(size);
            self.size = size;
            self.fresh = true;
        }
    }

    fn camera(&self) -> Camera2D {
        let (w, h) = (self.size.0 as f32, self.size.1 as f32);
        Camera2D {
            target: vec2(w / 2.0, h / 2.0),
            zoom: vec2(2.0 / w, 2.0 / h),
            render_target: Some(self.target.clone()),
            ..Default::default()
        }
    }
}

impl Default for BoardCanvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Wipe the previous frame according to the clear mode
fn wipe(mode: ClearMode, width: f32, height: f32) {
    match mode {
        ClearMode::PlainWhite => clear_background(WHITE),
        ClearMode::PlainBlack => clear_background(BLACK),
        ClearMode::FadeWhite => {
            draw_rectangle(0.0, 0.0, width, height, faded(WHITE))
        }
        ClearMode::FadeBlack => {
            draw_rectangle(0.0, 0.0, width, height, faded(BLACK))
        }
        ClearMode::FadeRandom => {
            draw_rectangle(0.0, 0.0, width, height, random_color(FADE_ALPHA))
        }
    }
}

fn cell_color(color: CellColor) -> Color {
    match color {
        CellColor::Black => BLACK,
        CellColor::White => WHITE,
        CellColor::Random => random_color(1.0),
    }
}

fn draw_grid_lines(cols: usize, rows: usize, cell_size: f32) {
    let line_color = LIGHTGRAY;
    let (w, h) = (cols as f32 * cell_size, rows as f32 * cell_size);
    for x in 0..=cols {
        let sx = x as f32 * cell_size;
        draw_line(sx, 0.0, sx, h, 1.0, line_color);
    }
    for y in 0..=rows {
        let sy = y as f32 * cell_size;
        draw_line(0.0, sy, w, sy, 1.0, line_color);
    }
}

/// Connect `(x, y)` to every live cell within `reach` steps
fn draw_links(grid: &Grid, x: usize, y: usize, reach: usize, thickness: f32, cell_size: f32, color: Color) {
    let center = |v: usize| (v as f32 + 0.5) * cell_size;
    let reach = reach as isize;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let (nx, ny) = (x as isize + dx, y as isize + dy);
            if (dx, dy) == (0, 0) || !grid.is_in_bounds(nx, ny) {
                continue;
            }
            if grid.get(nx as usize, ny as usize).is_alive() {
                draw_line(
                    center(x),
                    center(y),
                    center(nx as usize),
                    center(ny as usize),
                    thickness,
                    color,
                );
            }
        }
    }
}

fn draw_cell(grid: &Grid, x: usize, y: usize, shape: CellShape, cell_size: f32, color: Color) {
    let (sx, sy) = (x as f32 * cell_size, y as f32 * cell_size);
    match shape {
        CellShape::Squares => draw_rectangle(sx, sy, cell_size, cell_size, color),
        CellShape::Circles => draw_circle(
            sx + cell_size / 2.0,
            sy + cell_size / 2.0,
            cell_size / 2.0,
            color,
        ),
        CellShape::Lines1 | CellShape::Lines2 => {
            let reach = shape.line_reach().unwrap_or(1);
            draw_links(grid, x, y, reach, 1.0, cell_size, color);
            // Direct neighbors get a heavier stroke when the reach goes past them
            if reach > 1 {
                draw_links(grid, x, y, 1, 2.0, cell_size, color);
            }
        }
    }
}

/// Draw the board. Only reads `grid`; cells outside the visible area are skipped.
pub fn draw_board(canvas: &mut BoardCanvas, grid: &Grid, style: &RenderStyle) {
    canvas.fit_window();
    let (area_w, area_h) = (canvas.size.0 as f32, canvas.size.1 as f32);
    let cell_size = style.cell_size as f32;

    let (grid_w, grid_h) = grid.dimensions();
    let visible_cols = ((area_w / cell_size).ceil() as usize).min(grid_w);
    let visible_rows = ((area_h / cell_size).ceil() as usize).min(grid_h);

    set_camera(&canvas.camera());
    if canvas.fresh && style.clear.is_fade() {
        // Nothing to fade from yet
        clear_background(BLACK);
    }
    canvas.fresh = false;
    wipe(style.clear, area_w, area_h);

    if style.grid_visible {
        draw_grid_lines(visible_cols, visible_rows, cell_size);
    }

    // Random colors are picked once per frame
    let color = cell_color(style.color);
    for y in 0..visible_rows {
        for x in 0..visible_cols {
            if grid.get(x, y).is_alive() {
                draw_cell(grid, x, y, style.shape, cell_size, color);
            }
        }
    }

    set_default_camera();
    draw_texture_ex(
        &canvas.target.texture,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(area_w, area_h)),
            flip_y: true,
            ..Default::default()
        },
    );
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons, dropdowns, and simulation read-outs
pub fn draw_controls(driver: &Driver, panel: &ControlPanel, mouse_pos: (f32, f32)) {
    draw_panel_background();

    let px = panel_x();
    let top = status_top();
    let evolving = driver.is_evolving();
    let (gw, gh) = driver.grid().dimensions();

    let status_color = if evolving {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let labels = [
        (format!("Generation: {}", driver.generation_count()), WHITE),
        (
            format!("Population: {}", format_number(driver.grid().population())),
            WHITE,
        ),
        (board_label(gw, gh), GRAY),
        (format!("Interval: {} ms", driver.interval()), GRAY),
        (
            format!(
                "{}: {:.1} ms/gen",
                driver.algorithm().name(),
                driver.last_evolution_ms()
            ),
            GRAY,
        ),
        (format!("FPS: {}", get_fps()), GRAY),
        (
            (if evolving { "Evolving" } else { "Paused" }).to_string(),
            status_color,
        ),
    ];

    labels.iter().enumerate().for_each(|(i, (text, color))| {
        draw_text(text, px + 4.0, top + i as f32 * 18.0, 16.0, *color);
    });

    panel.draw(mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
    }

    #[test]
    fn test_board_label_is_ascii() {
        let label = board_label(120, 80);
        assert_eq!(label, "Board: 120x80");
        assert!(label.is_ascii());
    }
}
