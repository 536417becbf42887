mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use crate::application::{CELL_SIZES, CellColor, CellShape, ClearMode, RenderStyle};
use crate::domain::presets;
use crate::input::Command;
use macroquad::prelude::{Rect, screen_height, screen_width};

// UI constants - functions below give the responsive layout
pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 28.0;
const BUTTON_SPACING: f32 = 32.0;
const DROPDOWN_TOP: f32 = 24.0;
const DROPDOWN_SPACING: f32 = 48.0;
const BUTTONS_TOP: f32 = DROPDOWN_TOP + DROPDOWN_SPACING * 5.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the board area
pub fn board_area_height() -> f32 {
    screen_height()
}

/// Y position just below the last button, where status read-outs start
pub fn status_top() -> f32 {
    BUTTONS_TOP + BUTTON_SPACING * 9.0 + 16.0
}

/// Square board sizes offered by the panel
pub const BOARD_SIZES: &[(usize, &str)] = &[
    (50, "50x50"),
    (100, "100x100"),
    (200, "200x200"),
    (400, "400x400"),
];

/// Simulation state the panel mirrors in its button labels and highlights
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    pub evolving: bool,
    pub grid_visible: bool,
}

/// Panel buttons, top to bottom: one per preset pattern, then the controls
pub fn create_buttons(state: PanelState) -> Vec<Button> {
    layout_buttons(state, panel_x())
}

fn layout_buttons(state: PanelState, px: f32) -> Vec<Button> {
    let pattern_buttons = presets::all_patterns()
        .into_iter()
        .enumerate()
        .map(|(index, pattern)| {
            (
                format!("{} [{}]", pattern.name, pattern.shortcut),
                Command::PastePattern(index),
                false,
            )
        });

    let play = if state.evolving { "Pause [Space]" } else { "Unpause [Space]" };
    let controls = [
        ("Slower [<-]", Command::Slower, false),
        ("Faster [->]", Command::Faster, false),
        ("Next Step [Enter]", Command::NextStep, false),
        (play, Command::ToggleEvolving, !state.evolving),
        ("Clear [Del]", Command::Clear, false),
        ("Grid Lines [L]", Command::ToggleGridLines, state.grid_visible),
    ]
    .map(|(label, command, active)| (label.to_string(), command, active));

    pattern_buttons
        .chain(controls)
        .enumerate()
        .map(|(i, (label, command, active))| {
            let top = BUTTONS_TOP + i as f32 * BUTTON_SPACING;
            Button::new(Rect::new(px, top, PANEL_WIDTH, BUTTON_HEIGHT), label, command)
                .with_active(active)
        })
        .collect()
}

/// What each panel dropdown selects
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Choice {
    BoardSize,
    Shape,
    Color,
    Clear,
    CellSize,
}

const CHOICES: [Choice; 5] = [
    Choice::BoardSize,
    Choice::Shape,
    Choice::Color,
    Choice::Clear,
    Choice::CellSize,
];

impl Choice {
    fn label(self) -> &'static str {
        match self {
            Choice::BoardSize => "Board Size",
            Choice::Shape => "Cell Shape",
            Choice::Color => "Cell Color",
            Choice::Clear => "Clear Mode",
            Choice::CellSize => "Cell Size",
        }
    }

    fn items(self) -> Vec<String> {
        match self {
            Choice::BoardSize => BOARD_SIZES.iter().map(|(_, name)| name.to_string()).collect(),
            Choice::Shape => CellShape::all().iter().map(|s| s.name().to_string()).collect(),
            Choice::Color => CellColor::all().iter().map(|c| c.name().to_string()).collect(),
            Choice::Clear => ClearMode::all().iter().map(|m| m.name().to_string()).collect(),
            Choice::CellSize => CELL_SIZES.iter().map(|s| format!("{s} px")).collect(),
        }
    }

    fn command(self, index: usize) -> Option<Command> {
        match self {
            Choice::BoardSize => BOARD_SIZES.get(index).map(|&(edge, _)| Command::Resize(edge)),
            Choice::Shape => CellShape::all().get(index).copied().map(Command::Shape),
            Choice::Color => CellColor::all().get(index).copied().map(Command::Color),
            Choice::Clear => ClearMode::all().get(index).copied().map(Command::ClearMode),
            Choice::CellSize => CELL_SIZES.get(index).copied().map(Command::CellSize),
        }
    }

    /// Index matching the current state, if any item does
    fn current(self, style: &RenderStyle, board: (usize, usize)) -> Option<usize> {
        match self {
            Choice::BoardSize => BOARD_SIZES
                .iter()
                .position(|&(edge, _)| (edge, edge) == board),
            Choice::Shape => CellShape::all().iter().position(|&s| s == style.shape),
            Choice::Color => CellColor::all().iter().position(|&c| c == style.color),
            Choice::Clear => ClearMode::all().iter().position(|&m| m == style.clear),
            Choice::CellSize => CELL_SIZES.iter().position(|&s| s == style.cell_size),
        }
    }
}

/// Right-hand control panel: dropdowns on top, buttons below
pub struct ControlPanel {
    dropdowns: Vec<Dropdown>,
    state: PanelState,
}

impl ControlPanel {
    pub fn new() -> Self {
        let px = panel_x();
        let dropdowns = CHOICES
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                Dropdown::new(
                    px,
                    DROPDOWN_TOP + i as f32 * DROPDOWN_SPACING,
                    PANEL_WIDTH,
                    choice.label(),
                    choice.items(),
                )
            })
            .collect();
        Self {
            dropdowns,
            state: PanelState::default(),
        }
    }

    /// Show the live state, which keyboard shortcuts may have changed
    pub fn sync(&mut self, style: &RenderStyle, board: (usize, usize), evolving: bool) {
        self.state = PanelState {
            evolving,
            grid_visible: style.grid_visible,
        };
        for (choice, dropdown) in CHOICES.iter().zip(self.dropdowns.iter_mut()) {
            if let Some(index) = choice.current(style, board) {
                dropdown.set_selected(index);
            }
        }
    }

    /// Handle this frame's clicks and return the commands they trigger.
    /// While a dropdown is open it swallows every click.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Vec<Command> {
        let px = panel_x();
        for (i, dropdown) in self.dropdowns.iter_mut().enumerate() {
            dropdown.set_position(px, DROPDOWN_TOP + i as f32 * DROPDOWN_SPACING);
        }

        let open = self.dropdowns.iter().position(Dropdown::is_open);
        let mut commands: Vec<Command> = Vec::new();

        if open.is_none() {
            commands.extend(
                create_buttons(self.state)
                    .iter()
                    .filter_map(|button| button.clicked(mouse_pos)),
            );
        }

        for (i, (choice, dropdown)) in CHOICES.iter().zip(self.dropdowns.iter_mut()).enumerate() {
            if open.is_some_and(|o| o != i) {
                continue;
            }
            if dropdown.update(mouse_pos) {
                commands.extend(choice.command(dropdown.selected()));
            }
        }
        commands
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        create_buttons(self.state)
            .iter()
            .for_each(|button| button.draw(mouse_pos));

        // Draw the open dropdown last so its menu sits on top
        self.dropdowns
            .iter()
            .filter(|d| !d.is_open())
            .chain(self.dropdowns.iter().filter(|d| d.is_open()))
            .for_each(|d| d.draw(mouse_pos));
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}
