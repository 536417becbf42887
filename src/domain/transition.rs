//! Generation transition for a hard-edged board.
//!
//! Both entry points read the input grid only and return a freshly built grid,
//! so a reader holding the old generation never observes a partial update.

use super::{Cell, Grid};
use rayon::prelude::*;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count live cells in the Moore neighborhood of `(x, y)`.
/// Neighbors past the board edge count as dead.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dx, dy)| (x as isize + dx, y as isize + dy))
        .filter(|&(nx, ny)| grid.is_in_bounds(nx, ny))
        .filter(|&(nx, ny)| grid.get(nx as usize, ny as usize).is_alive())
        .count() as u8
}

fn next_cell(grid: &Grid, x: usize, y: usize) -> Cell {
    grid.get(x, y).evolve(live_neighbors(grid, x, y))
}

/// Pure functional evolution - returns new grid (serial)
pub fn next_generation(grid: &Grid) -> Grid {
    Grid::from_fn(grid.width(), grid.height(), |x, y| next_cell(grid, x, y))
}

/// Parallel evolution using rayon, one task per row.
/// Produces exactly the same grid as [`next_generation`].
pub fn next_generation_parallel(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();
    let cells: Vec<Cell> = (0..height)
        .into_par_iter()
        .flat_map_iter(|y| (0..width).map(move |x| next_cell(grid, x, y)))
        .collect();

    Grid::from_cells(width, height, cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Grid {
        let mut grid = Grid::new(5, 5);
        for x in 1..4 {
            grid.set(x, 2, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let grid = Grid::new(8, 6);
        let next = next_generation(&grid);
        assert_eq!(next.dimensions(), (8, 6));
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_neighbors_do_not_wrap() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 2, Cell::Alive);
        assert_eq!(live_neighbors(&grid, 0, 0), 0);
        assert_eq!(live_neighbors(&grid, 1, 1), 1);
    }

    #[test]
    fn test_corner_counts_only_in_bounds() {
        let grid = Grid::from_columns(2, 2, &[&[1, 1], &[1, 1]]);
        assert_eq!(live_neighbors(&grid, 0, 0), 3);
    }

    #[test]
    fn test_blinker_oscillates() {
        let grid = blinker();
        let next = next_generation(&grid);
        assert_eq!(next.live_cells(), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(next_generation(&next), grid);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::new(4, 4);
        grid.paste(&Grid::from_columns(2, 2, &[&[1, 1], &[1, 1]]), 1, 1);
        assert_eq!(next_generation(&grid), grid);
    }

    #[test]
    fn test_block_in_corner_survives_hard_edge() {
        let grid = Grid::from_columns(2, 2, &[&[1, 1], &[1, 1]]);
        assert_eq!(next_generation(&grid), grid);
    }

    #[test]
    fn test_input_not_mutated() {
        let grid = blinker();
        let before = grid.clone();
        let _ = next_generation(&grid);
        let _ = next_generation_parallel(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let grid = Grid::from_fn(17, 11, |x, y| Cell::from((x * 7 + y * 3) % 5 < 2));
        let mut serial = grid.clone();
        let mut parallel = grid;
        for _ in 0..6 {
            serial = next_generation(&serial);
            parallel = next_generation_parallel(&parallel);
            assert_eq!(serial, parallel);
        }
    }
}
