// lib.rs - Conway's Game of Life on a fixed-size torus
//
// `Grid` holds the cells, `Simulator` adds the Edit/Live state machine and
// generation bookkeeping, and `Driver` advances a shared simulator on a
// tokio interval while it is Live.

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod simulator;

pub use config::LifeConfig;
pub use driver::{Driver, DriverHandle, Exit, SharedSimulator};
pub use error::{Error, Result};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
pub use simulator::{Mode, Simulator, Tick};
