use proptest::prelude::*;

use zoomlife::grid::Grid;
use zoomlife::grid::COLS;
use zoomlife::grid::ROWS;
use zoomlife::zoom::ZoomLevel;

fn grid_with(cells: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new();

    for &(r, c) in cells {
        grid.set(r, c, true).unwrap();
    }

    grid
}

fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();

    for r in 0..ROWS {
        for c in 0..COLS {
            if grid.is_alive(r, c).unwrap() {
                cells.push((r, c));
            }
        }
    }

    cells
}

fn brute_force_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut n = 0;

    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if (dr, dc) == (0, 0) {
                continue;
            }

            let (r, c) = (row as i64 + dr, col as i64 + dc);
            if r < 0 || c < 0 || r >= ROWS as i64 || c >= COLS as i64 {
                continue;
            }

            if grid.is_alive(r as usize, c as usize).unwrap() {
                n += 1;
            }
        }
    }

    n
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec((0..ROWS, 0..COLS), 0..1500).prop_map(|cells| grid_with(&cells))
}

#[test]
fn isolated_cell_dies() {
    let mut grid = grid_with(&[(10, 10)]);

    grid.step_generation();

    assert!(!grid.is_any_alive());
}

#[test]
fn empty_grid_stays_empty() {
    let mut grid = Grid::new();

    grid.step_generation();

    assert!(!grid.is_any_alive());
    assert_eq!(grid, Grid::new());
}

#[test]
fn block_is_still() {
    let block = [(20, 20), (20, 21), (21, 20), (21, 21)];
    let mut grid = grid_with(&block);

    grid.step_generation();

    assert_eq!(live_cells(&grid), block);
}

#[test]
fn blinker_has_period_two() {
    let horizontal = [(30, 40), (30, 41), (30, 42)];
    let vertical = [(29, 41), (30, 41), (31, 41)];
    let mut grid = grid_with(&horizontal);

    grid.step_generation();
    assert_eq!(live_cells(&grid), vertical);

    grid.step_generation();
    assert_eq!(live_cells(&grid), horizontal);
    assert_eq!(grid.generation(), 2);
}

#[test]
fn toggle_twice() {
    let mut grid = Grid::new();

    grid.toggle(5, 7).unwrap();
    assert_eq!(grid.is_alive(5, 7), Ok(true));

    grid.toggle(5, 7).unwrap();
    assert_eq!(grid.is_alive(5, 7), Ok(false));
}

#[test]
fn full_view_is_whole_grid() {
    let grid = grid_with(&[(0, 0), (ROWS - 1, COLS - 1)]);
    let view = grid.visible_subgrid(ZoomLevel::MIN);

    assert_eq!((view.rows(), view.cols()), (ROWS, COLS));
    assert_eq!(view.origin(), (0, 0));
    assert_eq!(view.is_alive(0, 0), Some(true));
    assert_eq!(view.is_alive(ROWS - 1, COLS - 1), Some(true));
    assert_eq!(view.iter().filter(|&(_, _, alive)| alive).count(), 2);
}

#[test]
fn closest_view_is_central() {
    let grid = grid_with(&[(29, 60), (30, 60), (33, 67), (33, 68)]);
    let view = grid.visible_subgrid(ZoomLevel::MAX);

    assert_eq!((view.rows(), view.cols()), (4, 8));
    assert_eq!(view.origin(), (30, 60));
    assert_eq!(view.is_alive(0, 0), Some(true));
    assert_eq!(view.is_alive(3, 7), Some(true));
    assert_eq!(view.is_alive(4, 0), None);
    assert_eq!(view.iter().filter(|&(_, _, alive)| alive).count(), 2);
}

#[test]
fn glider_in_closest_view() {
    let mut grid = grid_with(&[(30, 61), (31, 62), (32, 60), (32, 61), (32, 62)]);

    insta::assert_snapshot!(grid.visible_subgrid(ZoomLevel::MAX).to_string(), @r"
    .#......
    ..#.....
    ###.....
    ........
    ");

    grid.step_generation();

    insta::assert_snapshot!(grid.visible_subgrid(ZoomLevel::MAX).to_string(), @r"
    ........
    #.#.....
    .##.....
    .#......
    ");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn neighbors_match_brute_force(grid in arb_grid(), row in 0..ROWS, col in 0..COLS) {
        let n = grid.count_live_neighbors(row, col).unwrap();

        prop_assert!(n <= 8);
        prop_assert_eq!(n, brute_force_neighbors(&grid, row, col));
    }

    #[test]
    fn step_applies_b3s23(grid in arb_grid()) {
        let mut next = grid.clone();
        next.step_generation();

        for r in 0..ROWS {
            for c in 0..COLS {
                let alive = grid.is_alive(r, c).unwrap();
                let n = grid.count_live_neighbors(r, c).unwrap();

                let want = if r == ROWS - 1 || c == COLS - 1 {
                    alive
                } else if alive {
                    n == 2 || n == 3
                } else {
                    n == 3
                };

                prop_assert_eq!(next.is_alive(r, c).unwrap(), want, "cell ({}, {}) with {} neighbors", r, c, n);
            }
        }
    }

    #[test]
    fn step_is_deterministic(grid in arb_grid()) {
        let mut a = grid.clone();
        let mut b = grid;

        a.step_generation();
        b.step_generation();

        prop_assert_eq!(a, b);
    }
}
