use crate::config::{BoardConfig, SimulationConfig};
use crate::domain::{Algorithm, Cell, Grid, Pattern};
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;

/// Amount `faster`/`slower` change the step interval by
pub const INTERVAL_STEP_MS: u64 = 50;

/// Driver owns the live board and decides when to advance it.
///
/// The host calls [`Driver::drive`] once per frame; a generation is computed
/// only when the step interval has elapsed, so drawing and stepping run at
/// independent rates. The board is published as an `Arc<Grid>`: a snapshot
/// handed to a renderer never changes underneath it.
#[derive(Debug)]
pub struct Driver {
    grid: Arc<Grid>,
    generation: u64,
    evolving: bool,
    interval_ms: u64,
    last_step_ms: u64,
    algorithm: Algorithm,
    last_evolution_ms: f32,
}

impl Driver {
    /// Create an evolving driver over an empty `width` x `height` board.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize, interval_ms: u64) -> Self {
        Self {
            grid: Arc::new(Grid::new(width, height)),
            generation: 0,
            evolving: true,
            interval_ms,
            last_step_ms: 0,
            algorithm: Algorithm::default(),
            last_evolution_ms: 0.0,
        }
    }

    pub fn from_config(board: &BoardConfig, simulation: &SimulationConfig) -> Self {
        let mut driver = Self::new(board.width, board.height, simulation.interval_ms);
        driver.evolving = simulation.start_evolving;
        driver.algorithm = simulation.algorithm;
        driver
    }

    pub fn start(&mut self) {
        tracing::debug!(generation = self.generation, "evolving started");
        self.evolving = true;
    }

    pub fn stop(&mut self) {
        tracing::debug!(generation = self.generation, "evolving stopped");
        self.evolving = false;
    }

    /// Toggle play/pause state
    pub fn toggle(&mut self) {
        if self.evolving {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn is_evolving(&self) -> bool {
        self.evolving
    }

    /// Advance exactly one generation, whether or not the driver is evolving.
    pub fn step(&mut self) {
        let start = Instant::now();
        let next = self.algorithm.evolve(&self.grid);
        self.grid = Arc::new(next);
        self.generation += 1;
        self.last_evolution_ms = start.elapsed().as_secs_f32() * 1000.0;
        tracing::trace!(
            generation = self.generation,
            elapsed_ms = self.last_evolution_ms,
            "stepped"
        );
    }

    /// Periodic entry point. Steps when evolving and at least the interval has
    /// passed since the last driven step. Returns whether a step happened.
    pub fn drive(&mut self, now_ms: u64) -> bool {
        if !self.evolving || now_ms.saturating_sub(self.last_step_ms) < self.interval_ms {
            return false;
        }
        self.step();
        self.last_step_ms = now_ms;
        true
    }

    /// Replace the board with an empty one of the same size and reset the generation counter
    pub fn clear(&mut self) {
        let (width, height) = self.grid.dimensions();
        self.grid = Arc::new(Grid::new(width, height));
        tracing::debug!(generation = self.generation, "board cleared");
        self.generation = 0;
    }

    /// Resize the board, keeping the content that still fits
    pub fn resize(&mut self, width: usize, height: usize) {
        tracing::debug!(
            from = ?self.grid.dimensions(),
            to = ?(width, height),
            "board resized"
        );
        self.grid = Arc::new(self.grid.resize(width, height));
    }

    /// Paste `pattern` onto the live board at `(x, y)`, clipping at the edges
    pub fn paste_pattern(&mut self, pattern: &Grid, x: isize, y: isize) {
        Arc::make_mut(&mut self.grid).paste(pattern, x, y);
    }

    /// Rotate `pattern` clockwise by `turns` quarter turns, then paste it
    pub fn paste_rotated(&mut self, pattern: &Pattern, turns: i32, x: isize, y: isize) {
        tracing::debug!(pattern = pattern.name, turns, x, y, "pattern pasted");
        self.paste_pattern(&pattern.rotated(turns), x, y);
    }

    /// Paste `pattern` at a random offset with a random rotation.
    /// Returns the `(x, y, turns)` that were used.
    pub fn scatter_pattern<R: Rng>(
        &mut self,
        pattern: &Pattern,
        rng: &mut R,
    ) -> (isize, isize, i32) {
        let x = rng.random_range(0..self.width()) as isize;
        let y = rng.random_range(0..self.height()) as isize;
        let turns = rng.random_range(0..4);
        self.paste_rotated(pattern, turns, x, y);
        (x, y, turns)
    }

    pub fn set_interval(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
    }

    pub fn interval(&self) -> u64 {
        self.interval_ms
    }

    /// Shorten the step interval, never below zero
    pub fn faster(&mut self) {
        self.interval_ms = self.interval_ms.saturating_sub(INTERVAL_STEP_MS);
    }

    pub fn slower(&mut self) {
        self.interval_ms += INTERVAL_STEP_MS;
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// # Panics
    /// Panics if `(x, y)` is outside the board.
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        self.grid.get(x, y)
    }

    pub fn generation_count(&self) -> u64 {
        self.generation
    }

    /// Borrow the current board
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// A shared handle to the current generation that later steps and pastes never touch
    pub fn snapshot(&self) -> Arc<Grid> {
        Arc::clone(&self.grid)
    }

    /// Wall-clock time of the last step, in milliseconds
    pub fn last_evolution_ms(&self) -> f32 {
        self.last_evolution_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn blinker_driver() -> Driver {
        let mut driver = Driver::new(5, 5, 100);
        driver.paste_pattern(&Grid::from_columns(1, 3, &[&[1, 1, 1]]), 2, 1);
        driver
    }

    #[test]
    fn test_new_driver() {
        let driver = Driver::new(30, 20, 150);
        assert_eq!((driver.width(), driver.height()), (30, 20));
        assert_eq!(driver.interval(), 150);
        assert_eq!(driver.generation_count(), 0);
        assert!(driver.is_evolving());
        assert_eq!(driver.grid().population(), 0);
    }

    #[test]
    fn test_from_config_respects_start_state() {
        let board = BoardConfig { width: 8, height: 6 };
        let simulation = SimulationConfig {
            interval_ms: 40,
            start_evolving: false,
            algorithm: Algorithm::Serial,
        };
        let driver = Driver::from_config(&board, &simulation);
        assert!(!driver.is_evolving());
        assert_eq!(driver.interval(), 40);
        assert_eq!(driver.algorithm(), Algorithm::Serial);
        assert_eq!(driver.grid().dimensions(), (8, 6));
    }

    #[test]
    fn test_start_stop_toggle() {
        let mut driver = Driver::new(3, 3, 10);
        driver.stop();
        assert!(!driver.is_evolving());
        driver.toggle();
        assert!(driver.is_evolving());
        driver.toggle();
        assert!(!driver.is_evolving());
        driver.start();
        assert!(driver.is_evolving());
    }

    #[test]
    fn test_step_while_paused() {
        let mut driver = blinker_driver();
        driver.stop();
        driver.step();
        assert_eq!(driver.generation_count(), 1);
        assert_eq!(driver.grid().live_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_drive_waits_for_interval() {
        let mut driver = blinker_driver();
        assert!(driver.drive(100));
        assert!(!driver.drive(150));
        assert!(!driver.drive(199));
        assert_eq!(driver.generation_count(), 1);
        assert!(driver.drive(200));
        assert_eq!(driver.generation_count(), 2);
    }

    #[test]
    fn test_drive_before_first_interval_does_nothing() {
        let mut driver = blinker_driver();
        assert!(!driver.drive(99));
        assert_eq!(driver.generation_count(), 0);
    }

    #[test]
    fn test_drive_while_paused_never_steps() {
        let mut driver = blinker_driver();
        driver.stop();
        for now in [0, 1_000, 1_000_000, u64::MAX] {
            assert!(!driver.drive(now));
        }
        assert_eq!(driver.generation_count(), 0);
    }

    #[test]
    fn test_zero_interval_steps_every_drive() {
        let mut driver = blinker_driver();
        driver.set_interval(0);
        assert!(driver.drive(0));
        assert!(driver.drive(0));
        assert_eq!(driver.generation_count(), 2);
    }

    #[test]
    fn test_clear_resets_generation_keeps_evolving() {
        let mut driver = blinker_driver();
        driver.step();
        driver.step();
        driver.clear();
        assert_eq!(driver.generation_count(), 0);
        assert_eq!(driver.grid().population(), 0);
        assert_eq!(driver.grid().dimensions(), (5, 5));
        assert!(driver.is_evolving());
    }

    #[test]
    fn test_resize_keeps_content_and_generation() {
        let mut driver = blinker_driver();
        driver.step();
        driver.resize(3, 8);
        assert_eq!(driver.grid().dimensions(), (3, 8));
        assert_eq!(driver.grid().live_cells(), vec![(1, 2), (2, 2)]);
        assert_eq!(driver.generation_count(), 1);
    }

    #[test]
    fn test_snapshot_is_never_torn() {
        let mut driver = blinker_driver();
        let before = driver.snapshot();
        let copy = (*before).clone();

        driver.paste_pattern(&presets::glider().grid, 0, 0);
        driver.step();

        assert_eq!(*before, copy);
        assert_ne!(*driver.snapshot(), copy);
    }

    #[test]
    fn test_faster_floors_at_zero() {
        let mut driver = Driver::new(3, 3, 120);
        driver.faster();
        assert_eq!(driver.interval(), 70);
        driver.faster();
        driver.faster();
        assert_eq!(driver.interval(), 0);
        driver.slower();
        assert_eq!(driver.interval(), 50);
    }

    #[test]
    fn test_paste_rotated() {
        let mut driver = Driver::new(6, 6, 0);
        driver.paste_rotated(presets::glider(), 2, 1, 1);
        let expected = presets::glider().rotated(2);
        for (x, y, cell) in expected.iter_cells() {
            assert_eq!(driver.cell_at(x + 1, y + 1), cell);
        }
    }

    #[test]
    fn test_scatter_pastes_on_board() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut driver = Driver::new(20, 10, 0);
            let (x, y, turns) = driver.scatter_pattern(presets::bi_clock(), &mut rng);
            assert!(driver.grid().is_in_bounds(x, y));
            assert!((0..4).contains(&turns));

            let mut expected = Grid::new(20, 10);
            expected.paste(&presets::bi_clock().rotated(turns), x, y);
            assert_eq!(driver.grid(), &expected);
        }
    }
}
