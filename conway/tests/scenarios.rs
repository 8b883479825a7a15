// scenarios.rs - End-to-end runs through the public API

use conway::{Grid, Mode, Simulator};

fn simulator_with(rows: usize, cols: usize, live: &[(isize, isize)]) -> Simulator {
    let mut grid = Grid::empty(rows, cols).unwrap();
    for &(row, col) in live {
        grid.set(row, col, true);
    }
    Simulator::from_grid(grid)
}

fn live_cells(sim: &Simulator) -> Vec<(usize, usize)> {
    sim.grid().iter_live().collect()
}

#[test]
fn single_blinker_has_period_two() {
    let mut sim = simulator_with(11, 11, &[(5, 5), (5, 6), (5, 7)]);
    sim.start();

    sim.advance().unwrap();
    assert_eq!(live_cells(&sim), vec![(4, 6), (5, 6), (6, 6)]);

    sim.advance().unwrap();
    assert_eq!(live_cells(&sim), vec![(5, 5), (5, 6), (5, 7)]);
    assert_eq!(sim.live_cell_count(), 3);
}

#[test]
fn empty_grid_stays_empty() {
    let mut sim = simulator_with(20, 20, &[]);
    sim.start();

    let tick = sim.advance().unwrap();
    assert!(sim.grid().is_empty());
    assert_eq!(sim.live_cell_count(), 0);
    assert_eq!(tick.generation, 1);
    assert_eq!(sim.generation(), 1);
}

#[test]
fn toggling_while_live_has_no_effect() {
    let mut sim = Simulator::new(75, 100).unwrap();
    sim.start();
    sim.advance().unwrap();

    let before = sim.grid().clone();
    assert!(!sim.toggle_cell(40, 40));
    assert!(!sim.toggle_cell(0, 1));
    assert_eq!(sim.grid(), &before);
    assert_eq!(sim.mode(), Mode::Live);
}

#[test]
fn generation_counts_every_advance() {
    let mut seeded = Simulator::new(75, 100).unwrap();
    let mut empty = simulator_with(30, 30, &[]);
    seeded.start();
    empty.start();

    for n in 1..=50 {
        seeded.advance().unwrap();
        empty.advance().unwrap();
        assert_eq!(seeded.generation(), n);
        assert_eq!(empty.generation(), n);
        assert_eq!(seeded.live_cell_count(), seeded.grid().live_count());
    }
}

#[test]
fn toggle_twice_in_edit_restores_state() {
    let mut sim = Simulator::new(75, 100).unwrap();
    let before = sim.grid().clone();
    sim.toggle_cell(-1, 200);
    sim.toggle_cell(74, 0);
    assert_eq!(sim.grid(), &before);
    assert_eq!(sim.live_cell_count(), 45);
}

#[test]
fn stop_then_edit_then_resume() {
    let mut sim = simulator_with(11, 11, &[(5, 5), (5, 6), (5, 7)]);
    sim.start();
    sim.advance().unwrap();
    sim.stop();

    assert_eq!(sim.advance(), None);
    assert!(sim.toggle_cell(0, 0));
    assert_eq!(sim.generation(), 1);

    sim.start();
    sim.advance().unwrap();
    assert_eq!(sim.generation(), 2);
    // A lone cell far from the blinker dies.
    assert!(!sim.is_alive(0, 0));
}

#[test]
fn seeded_gliders_keep_their_population() {
    let mut sim = Simulator::new(75, 100).unwrap();
    sim.start();
    // The nine gliders are spread out enough to fly free for a while.
    for _ in 0..8 {
        sim.advance().unwrap();
    }
    assert_eq!(sim.live_cell_count(), 45);
}
