use super::Grid;

/// A named seed grid that can be pasted onto a board
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    /// Keyboard shortcut used by the shell
    pub shortcut: char,
    pub grid: Grid,
}

impl Pattern {
    /// Create a pattern from a column-major literal
    pub fn new(
        name: &'static str,
        description: &'static str,
        shortcut: char,
        width: usize,
        height: usize,
        columns: &[&[u8]],
    ) -> Self {
        Self {
            name,
            description,
            shortcut,
            grid: Grid::from_columns(width, height, columns),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The pattern's grid turned clockwise by `turns` quarter turns
    pub fn rotated(&self, turns: i32) -> Grid {
        self.grid.rotate(turns)
    }
}

/// Built-in patterns, initialized once and shared read-only
pub mod presets {
    use super::*;
    use std::sync::LazyLock;

    static GLIDER: LazyLock<Pattern> = LazyLock::new(|| {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            '1',
            3,
            3,
            &[
                &[0, 1, 0],
                &[0, 0, 1],
                &[1, 1, 1],
            ],
        )
    });

    static LIGHTWEIGHT_SPACESHIP: LazyLock<Pattern> = LazyLock::new(|| {
        Pattern::new(
            "Lightweight Spaceship",
            "Orthogonal spaceship (period 4)",
            '2',
            4,
            5,
            &[
                &[0, 1, 1, 0, 0],
                &[1, 1, 1, 1, 0],
                &[1, 1, 0, 1, 1],
                &[0, 0, 1, 1, 0],
            ],
        )
    });

    static BI_CLOCK: LazyLock<Pattern> = LazyLock::new(|| {
        Pattern::new(
            "Bi-Clock",
            "Small chaotic seed",
            '3',
            7,
            7,
            &[
                &[0, 0, 1, 0, 0, 0, 0],
                &[1, 1, 0, 0, 0, 0, 0],
                &[0, 0, 1, 1, 0, 0, 0],
                &[0, 1, 0, 0, 0, 1, 0],
                &[0, 0, 0, 1, 1, 0, 0],
                &[0, 0, 0, 0, 0, 1, 1],
                &[0, 0, 0, 0, 1, 0, 0],
            ],
        )
    });

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> &'static Pattern {
        &GLIDER
    }

    pub fn lightweight_spaceship() -> &'static Pattern {
        &LIGHTWEIGHT_SPACESHIP
    }

    pub fn bi_clock() -> &'static Pattern {
        &BI_CLOCK
    }

    /// Get all available patterns, in shortcut order
    pub fn all_patterns() -> [&'static Pattern; 3] {
        [glider(), lightweight_spaceship(), bi_clock()]
    }
}
