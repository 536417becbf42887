use crate::application::{CellColor, CellShape, ClearMode, Driver, RenderStyle};
use crate::domain::presets;
use macroquad::prelude::{KeyCode, is_key_pressed};
use rand::Rng;

/// Everything the shell can ask of the simulation or the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleEvolving,
    NextStep,
    Clear,
    Faster,
    Slower,
    /// Index into `presets::all_patterns()`
    PastePattern(usize),
    Shape(CellShape),
    Color(CellColor),
    ClearMode(ClearMode),
    CellSize(u32),
    ToggleGridLines,
    /// Square board edge length
    Resize(usize),
}

const KEY_BINDINGS: &[(KeyCode, Command)] = &[
    (KeyCode::Space, Command::ToggleEvolving),
    (KeyCode::Enter, Command::NextStep),
    (KeyCode::KpEnter, Command::NextStep),
    (KeyCode::Delete, Command::Clear),
    (KeyCode::Backspace, Command::Clear),
    (KeyCode::Right, Command::Faster),
    (KeyCode::Left, Command::Slower),
    (KeyCode::Key1, Command::PastePattern(0)),
    (KeyCode::Key2, Command::PastePattern(1)),
    (KeyCode::Key3, Command::PastePattern(2)),
    (KeyCode::Q, Command::Shape(CellShape::Squares)),
    (KeyCode::W, Command::Shape(CellShape::Circles)),
    (KeyCode::E, Command::Shape(CellShape::Lines1)),
    (KeyCode::R, Command::Shape(CellShape::Lines2)),
    (KeyCode::A, Command::ClearMode(ClearMode::PlainWhite)),
    (KeyCode::S, Command::ClearMode(ClearMode::PlainBlack)),
    (KeyCode::D, Command::ClearMode(ClearMode::FadeWhite)),
    (KeyCode::F, Command::ClearMode(ClearMode::FadeBlack)),
    (KeyCode::G, Command::ClearMode(ClearMode::FadeRandom)),
    (KeyCode::Z, Command::Color(CellColor::Black)),
    (KeyCode::X, Command::Color(CellColor::White)),
    (KeyCode::C, Command::Color(CellColor::Random)),
    (KeyCode::Y, Command::CellSize(1)),
    (KeyCode::U, Command::CellSize(2)),
    (KeyCode::I, Command::CellSize(4)),
    (KeyCode::O, Command::CellSize(8)),
    (KeyCode::P, Command::CellSize(16)),
    (KeyCode::L, Command::ToggleGridLines),
];

/// Look up the command bound to `key`
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|&(_, command)| command)
}

/// Commands whose keys went down this frame
pub fn pressed_commands() -> Vec<Command> {
    bound_keys()
        .filter(|&key| is_key_pressed(key))
        .filter_map(command_for_key)
        .collect()
}

fn bound_keys() -> impl Iterator<Item = KeyCode> {
    KEY_BINDINGS.iter().map(|&(key, _)| key)
}

/// Carry out `command` against the driver and render style
pub fn apply<R: Rng>(command: Command, driver: &mut Driver, style: &mut RenderStyle, rng: &mut R) {
    tracing::debug!(?command, "applying command");
    match command {
        Command::ToggleEvolving => driver.toggle(),
        Command::NextStep => driver.step(),
        Command::Clear => driver.clear(),
        Command::Faster => driver.faster(),
        Command::Slower => driver.slower(),
        Command::PastePattern(index) => {
            if let Some(pattern) = presets::all_patterns().get(index) {
                driver.scatter_pattern(pattern, rng);
            }
        }
        Command::Shape(shape) => style.shape = shape,
        Command::Color(color) => style.color = color,
        Command::ClearMode(clear) => style.clear = clear,
        Command::CellSize(size) => style.set_cell_size(size),
        Command::ToggleGridLines => style.toggle_grid(),
        Command::Resize(edge) => driver.resize(edge, edge),
    }
}
