// simulator.rs - Edit/Live state machine around a double-buffered grid

use log::{debug, info, warn};

use crate::config::{HISTORY_LEN, LifeConfig};
use crate::error::Result;
use crate::grid::Grid;
use crate::patterns::{self, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Cells may be edited; generations do not advance.
    Edit,
    /// Generations advance; edits are ignored.
    Live,
}

/// Summary of one committed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
    pub live_cells: usize,
    /// The new grid equals one of the last `HISTORY_LEN` grids.
    pub repeated: bool,
}

pub struct Simulator {
    current: Grid,
    next: Grid,
    mode: Mode,
    generation: u64,
    live_cells: usize,

    history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl Simulator {
    /// A seeded simulator in Edit mode.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self::from_grid(Grid::new(rows, cols)?))
    }

    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.rows, config.cols)
    }

    /// Wraps an existing grid, starting in Edit mode at generation 0.
    pub fn from_grid(grid: Grid) -> Self {
        let next = grid.clone();
        let live_cells = grid.live_count();
        let mut simulator = Self {
            current: grid,
            next,
            mode: Mode::Edit,
            generation: 0,
            live_cells,
            history: [0; HISTORY_LEN],
            history_count: 0,
        };
        simulator.reset_history();
        simulator
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_live(&self) -> bool {
        self.mode == Mode::Live
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_cell_count(&self) -> usize {
        self.live_cells
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn rows(&self) -> usize {
        self.current.rows()
    }

    pub fn cols(&self) -> usize {
        self.current.cols()
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.current.get(row as isize, col as isize)
    }

    /// Edit -> Live. Returns false if already Live.
    pub fn start(&mut self) -> bool {
        if self.mode != Mode::Edit {
            return false;
        }
        self.mode = Mode::Live;
        info!("Simulation started at generation {}", self.generation);
        true
    }

    /// Live -> Edit. Returns false if already in Edit.
    pub fn stop(&mut self) -> bool {
        if self.mode != Mode::Live {
            return false;
        }
        self.mode = Mode::Edit;
        info!("Simulation stopped at generation {}", self.generation);
        true
    }

    /// Flips one cell. Ignored while Live.
    pub fn toggle_cell(&mut self, row: isize, col: isize) -> bool {
        if !self.editable("toggle") {
            return false;
        }
        if self.current.toggle(row, col) {
            self.live_cells += 1;
        } else {
            self.live_cells -= 1;
        }
        self.reset_history();
        true
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) -> bool {
        self.replace_grid("clear", |grid| {
            grid.clear();
            Ok(())
        })
        .unwrap_or(false)
    }

    /// Restores the start-up seed on an otherwise empty grid.
    pub fn reseed(&mut self) -> bool {
        self.replace_grid("reseed", |grid| {
            grid.clear();
            for &(row, col) in patterns::SEED {
                grid.set(row as isize, col as isize, true);
            }
            Ok(())
        })
        .unwrap_or(false)
    }

    pub fn scatter(&mut self, seed: u64) -> bool {
        self.replace_grid("scatter", |grid| {
            patterns::scatter(grid, seed);
            Ok(())
        })
        .unwrap_or(false)
    }

    /// Clears the grid and stamps `pattern` in its centre.
    ///
    /// Returns `Ok(false)` while Live. Fails without touching the grid if the
    /// pattern is larger than the grid.
    pub fn apply_pattern(&mut self, pattern: &Pattern) -> Result<bool> {
        self.replace_grid(pattern.name, |grid| {
            let mut fresh = Grid::empty(grid.rows(), grid.cols())?;
            pattern.stamp_centred(&mut fresh)?;
            *grid = fresh;
            Ok(())
        })
    }

    /// Runs one generation. Returns `None` and changes nothing while in Edit.
    pub fn advance(&mut self) -> Option<Tick> {
        if self.mode != Mode::Live {
            warn!("advance() ignored in Edit mode (generation {})", self.generation);
            return None;
        }

        self.current.next_generation_into(&mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);

        self.live_cells = self.current.live_count();
        self.generation += 1;

        let repeated = self.record_history();
        if repeated {
            info!("Generation {} repeats a recent state", self.generation);
        }
        debug!("Generation {}: {} live cells", self.generation, self.live_cells);

        Some(Tick {
            generation: self.generation,
            live_cells: self.live_cells,
            repeated,
        })
    }

    fn editable(&self, what: &str) -> bool {
        if self.mode == Mode::Live {
            warn!("{what} ignored while the simulation is live");
            return false;
        }
        true
    }

    fn replace_grid<F>(&mut self, what: &str, edit: F) -> Result<bool>
    where
        F: FnOnce(&mut Grid) -> Result<()>,
    {
        if !self.editable(what) {
            return Ok(false);
        }
        edit(&mut self.current)?;
        self.live_cells = self.current.live_count();
        self.generation = 0;
        self.reset_history();
        debug!("{what}: {} live cells", self.live_cells);
        Ok(true)
    }

    fn record_history(&mut self) -> bool {
        let fingerprint = self.current.fingerprint();
        let filled = self.history_count.min(HISTORY_LEN);
        if self.history[..filled].contains(&fingerprint) {
            return true;
        }
        self.history[self.history_count % HISTORY_LEN] = fingerprint;
        self.history_count += 1;
        false
    }

    // Generation 0 counts as history, so a still life repeats at generation 1.
    fn reset_history(&mut self) {
        self.history = [0; HISTORY_LEN];
        self.history_count = 0;
        self.record_history();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_simulator(rows: usize, cols: usize, live: &[(isize, isize)]) -> Simulator {
        let mut grid = Grid::empty(rows, cols).unwrap();
        for &(row, col) in live {
            grid.set(row, col, true);
        }
        let mut sim = Simulator::from_grid(grid);
        assert!(sim.start());
        sim
    }

    #[test]
    fn starts_in_edit_mode_with_seed() {
        let sim = Simulator::new(75, 100).unwrap();
        assert_eq!(sim.mode(), Mode::Edit);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.live_cell_count(), 45);
        assert_eq!((sim.rows(), sim.cols()), (75, 100));
        assert!(sim.is_alive(0, 1));
    }

    #[test]
    fn construction_fails_on_small_grid() {
        assert!(Simulator::new(10, 10).is_err());
        assert!(Simulator::from_config(&LifeConfig::new(20, 100)).is_err());
        assert!(Simulator::from_config(&LifeConfig::default()).is_ok());
    }

    #[test]
    fn transitions_follow_the_table() {
        let mut sim = Simulator::new(40, 80).unwrap();
        assert!(!sim.stop());
        assert!(sim.start());
        assert!(sim.is_live());
        assert!(!sim.start());
        assert!(sim.stop());
        assert_eq!(sim.mode(), Mode::Edit);
    }

    #[test]
    fn toggle_in_edit_updates_count() {
        let mut sim = Simulator::new(40, 80).unwrap();
        assert!(sim.toggle_cell(20, 20));
        assert!(sim.is_alive(20, 20));
        assert_eq!(sim.live_cell_count(), 46);
        assert!(sim.toggle_cell(20, 20));
        assert!(!sim.is_alive(20, 20));
        assert_eq!(sim.live_cell_count(), 45);
    }

    #[test]
    fn edits_are_ignored_while_live() {
        let mut sim = live_simulator(11, 11, &[(5, 5), (5, 6), (5, 7)]);
        let before = sim.grid().clone();
        assert!(!sim.toggle_cell(0, 0));
        assert!(!sim.clear());
        assert!(!sim.reseed());
        assert!(!sim.scatter(1));
        assert_eq!(sim.apply_pattern(&patterns::PATTERNS[0]), Ok(false));
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn advance_is_rejected_in_edit() {
        let mut sim = Simulator::new(40, 80).unwrap();
        let before = sim.grid().clone();
        assert_eq!(sim.advance(), None);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn advance_reports_tick() {
        let mut sim = live_simulator(11, 11, &[(5, 5), (5, 6), (5, 7)]);
        let tick = sim.advance().unwrap();
        assert_eq!(tick.generation, 1);
        assert_eq!(tick.live_cells, 3);
        assert!(!tick.repeated);
        assert_eq!(sim.live_cell_count(), 3);
    }

    #[test]
    fn oscillator_is_flagged_as_repeating() {
        let mut sim = live_simulator(11, 11, &[(5, 5), (5, 6), (5, 7)]);
        assert!(!sim.advance().unwrap().repeated);
        // Generation 2 matches the starting grid.
        assert!(sim.advance().unwrap().repeated);
    }

    #[test]
    fn still_life_repeats_at_first_generation() {
        let mut sim = live_simulator(8, 8, &[(3, 3), (3, 4), (4, 3), (4, 4)]);
        let tick = sim.advance().unwrap();
        assert_eq!(tick.generation, 1);
        assert!(tick.repeated);
    }

    #[test]
    fn toggle_refreshes_starting_state() {
        // A lone cell dies; the empty result must not match the empty grid
        // the simulator was built from.
        let mut sim = Simulator::from_grid(Grid::empty(8, 8).unwrap());
        sim.toggle_cell(2, 2);
        sim.start();
        assert!(!sim.advance().unwrap().repeated);
        assert!(sim.advance().unwrap().repeated);
    }

    #[test]
    fn edits_reset_generation_and_history() {
        let mut sim = live_simulator(11, 11, &[(5, 5), (5, 6), (5, 7)]);
        sim.advance();
        sim.advance();
        sim.stop();

        assert!(sim.clear());
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.live_cell_count(), 0);

        // History now starts from the freshly stamped blinker.
        sim.apply_pattern(Pattern::find("Blinker").unwrap()).unwrap();
        sim.start();
        assert!(!sim.advance().unwrap().repeated);
        assert!(sim.advance().unwrap().repeated);
    }

    #[test]
    fn apply_pattern_failure_keeps_grid() {
        let mut grid = Grid::empty(10, 10).unwrap();
        grid.set(1, 1, true);
        let mut sim = Simulator::from_grid(grid);
        let gun = Pattern::find("Gosper Glider Gun").unwrap();
        assert!(sim.apply_pattern(gun).is_err());
        assert!(sim.is_alive(1, 1));
        assert_eq!(sim.live_cell_count(), 1);
    }

    #[test]
    fn reseed_restores_start_grid() {
        let mut sim = Simulator::new(40, 80).unwrap();
        let seeded = sim.grid().clone();
        sim.scatter(3);
        assert_ne!(sim.grid(), &seeded);
        assert!(sim.reseed());
        assert_eq!(sim.grid(), &seeded);
        assert_eq!(sim.live_cell_count(), 45);
    }
}
