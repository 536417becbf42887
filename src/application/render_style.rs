use serde::Deserialize;

/// Cell sizes (in pixels) offered by the shell
pub const CELL_SIZES: [u32; 5] = [1, 2, 4, 8, 16];

/// How a live cell is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellShape {
    #[default]
    Squares,
    Circles,
    /// Lines to live cells up to one step away
    Lines1,
    /// Lines to live cells up to two steps away
    Lines2,
}

impl CellShape {
    pub fn all() -> [CellShape; 4] {
        [
            CellShape::Squares,
            CellShape::Circles,
            CellShape::Lines1,
            CellShape::Lines2,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CellShape::Squares => "Squares",
            CellShape::Circles => "Circles",
            CellShape::Lines1 => "Lines1",
            CellShape::Lines2 => "Lines2",
        }
    }

    /// How far line shapes reach to connect live neighbors
    pub fn line_reach(&self) -> Option<usize> {
        match self {
            CellShape::Squares | CellShape::Circles => None,
            CellShape::Lines1 => Some(1),
            CellShape::Lines2 => Some(2),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellColor {
    #[default]
    Black,
    White,
    /// A fresh random color every frame
    Random,
}

impl CellColor {
    pub fn all() -> [CellColor; 3] {
        [CellColor::Black, CellColor::White, CellColor::Random]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CellColor::Black => "Black",
            CellColor::White => "White",
            CellColor::Random => "Random",
        }
    }
}

/// How the previous frame is wiped before drawing cells.
/// Fade modes only partially cover it, leaving trails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClearMode {
    #[default]
    PlainWhite,
    PlainBlack,
    FadeWhite,
    FadeBlack,
    FadeRandom,
}

impl ClearMode {
    pub fn all() -> [ClearMode; 5] {
        [
            ClearMode::PlainWhite,
            ClearMode::PlainBlack,
            ClearMode::FadeWhite,
            ClearMode::FadeBlack,
            ClearMode::FadeRandom,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClearMode::PlainWhite => "Plain White",
            ClearMode::PlainBlack => "Plain Black",
            ClearMode::FadeWhite => "Fade White",
            ClearMode::FadeBlack => "Fade Black",
            ClearMode::FadeRandom => "Random",
        }
    }

    pub fn is_fade(&self) -> bool {
        matches!(
            self,
            ClearMode::FadeWhite | ClearMode::FadeBlack | ClearMode::FadeRandom
        )
    }
}

/// Everything the renderer needs besides the grid itself
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub shape: CellShape,
    pub color: CellColor,
    pub clear: ClearMode,
    pub cell_size: u32,
    pub grid_visible: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            shape: CellShape::default(),
            color: CellColor::default(),
            clear: ClearMode::default(),
            cell_size: 16,
            grid_visible: false,
        }
    }
}

impl RenderStyle {
    /// Set the cell size, ignoring values not in [`CELL_SIZES`]
    pub fn set_cell_size(&mut self, size: u32) {
        if CELL_SIZES.contains(&size) {
            self.cell_size = size;
        }
    }

    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
    }
}
