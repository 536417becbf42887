use life_canvas::{Algorithm, Driver, Grid, domain::next_generation, presets};
use std::collections::BTreeSet;

fn live_set(grid: &Grid) -> BTreeSet<(isize, isize)> {
    grid.live_cells()
        .into_iter()
        .map(|(x, y)| (x as isize, y as isize))
        .collect()
}

fn shifted(cells: &BTreeSet<(isize, isize)>, dx: isize, dy: isize) -> BTreeSet<(isize, isize)> {
    cells.iter().map(|&(x, y)| (x + dx, y + dy)).collect()
}

#[test]
fn glider_first_generation_golden() {
    let mut grid = Grid::new(5, 5);
    grid.paste(&presets::glider().grid, 1, 1);

    let next = next_generation(&grid);

    assert_eq!(next.live_cells(), vec![(2, 1), (3, 2), (4, 2), (2, 3), (3, 3)]);
}

#[test]
fn glider_translates_diagonally_every_four_generations() {
    for (ox, oy) in [(1, 1), (4, 2), (7, 9), (10, 10)] {
        let mut grid = Grid::new(16, 16);
        grid.paste(&presets::glider().grid, ox, oy);
        let start = live_set(&grid);

        let mut current = grid;
        for _ in 0..4 {
            current = next_generation(&current);
        }

        assert_eq!(live_set(&current), shifted(&start, 1, 1), "offset ({ox}, {oy})");
    }
}

#[test]
fn rotated_gliders_keep_their_shape() {
    // Each quarter turn rotates the direction of travel with the pattern
    let deltas = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

    for (turns, (dx, dy)) in deltas.into_iter().enumerate() {
        let mut driver = Driver::new(16, 16, 0);
        driver.paste_rotated(presets::glider(), turns as i32, 6, 6);
        let start = live_set(driver.grid());

        for _ in 0..4 {
            driver.step();
        }

        assert_eq!(live_set(driver.grid()), shifted(&start, dx, dy), "turns {turns}");
        assert_eq!(driver.generation_count(), 4);
    }
}

#[test]
fn lightweight_spaceship_moves_two_cells_per_period() {
    let mut driver = Driver::new(24, 24, 0);
    driver.set_algorithm(Algorithm::Serial);
    driver.paste_pattern(&presets::lightweight_spaceship().grid, 8, 8);
    let start = live_set(driver.grid());

    let populations: Vec<usize> = (0..4)
        .map(|_| {
            driver.step();
            driver.grid().population()
        })
        .collect();

    assert_eq!(populations, vec![9, 12, 9, 12]);
    assert_eq!(live_set(driver.grid()), shifted(&start, 0, 2));
}

#[test]
fn glider_pasted_off_edge_is_clipped() {
    let mut grid = Grid::new(5, 5);
    // Only the glider's last column lands on the board
    grid.paste(&presets::glider().grid, -2, 0);
    assert_eq!(grid.live_cells(), vec![(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn glider_hits_the_hard_edge() {
    let mut grid = Grid::new(6, 6);
    grid.paste(&presets::glider().grid, 3, 3);

    let mut current = grid;
    for _ in 0..40 {
        current = next_generation(&current);
    }

    // No wraparound: the glider jams into the corner and settles as a block
    let block: BTreeSet<(isize, isize)> = [(4, 4), (5, 4), (4, 5), (5, 5)].into_iter().collect();
    assert_eq!(live_set(&current), block);
}
