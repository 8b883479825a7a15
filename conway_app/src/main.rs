// main.rs - Desktop front end for the toroidal Game of Life

use eframe::egui;
use egui::Color32;
use log::{error, info};
use std::error::Error;
use std::sync::Arc;

use conway::driver::{self, Driver, DriverHandle, SharedSimulator};
use conway::{LifeConfig, Simulator};

mod ui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = LifeConfig::default();
    let app = match GameOfLife::new(config) {
        Ok(app) => app,
        Err(err) => {
            error!("Failed to start: {err}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
}

pub struct GameOfLife {
    simulator: SharedSimulator,
    driver: Option<DriverHandle>,
    runtime: tokio::runtime::Runtime,

    pub config: LifeConfig,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    random_seed: u64,
}

impl GameOfLife {
    pub fn new(config: LifeConfig) -> Result<Self, Box<dyn Error>> {
        let simulator = Simulator::from_config(&config)?;
        info!("Created {}x{} playfield", config.rows, config.cols);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("life-driver")
            .enable_time()
            .build()?;

        Ok(Self {
            simulator: driver::shared(simulator),
            driver: None,
            runtime,
            config,
            live_color: Color32::WHITE,
            dead_color: Color32::from_gray(60),
            selected_pattern: 0,
            random_seed: 0,
        })
    }

    /// Edit -> Live, and start ticking.
    pub fn start(&mut self, ctx: &egui::Context) {
        if driver::lock(&self.simulator).start() {
            self.spawn_driver(ctx);
        }
    }

    /// Live -> Edit. The simulator rejects advances from here on, so the
    /// driver cannot run another generation even before it sees the flag.
    pub fn stop(&mut self) {
        driver::lock(&self.simulator).stop();
        if let Some(driver) = self.driver.take() {
            driver.stop();
        }
    }

    /// Picks up a new speed if running. The next generation is due one new
    /// interval after the last one, so repeated restarts keep the cadence.
    pub fn restart_driver(&mut self, ctx: &egui::Context) {
        if let Some(previous) = self.driver.take() {
            let ctx = ctx.clone();
            let handle = self
                .new_driver()
                .resume(previous, self.runtime.handle(), move |_tick| ctx.request_repaint());
            self.driver = Some(handle);
        }
    }

    pub fn clear_grid(&mut self) {
        driver::lock(&self.simulator).clear();
    }

    pub fn reseed(&mut self) {
        driver::lock(&self.simulator).reseed();
    }

    pub fn apply_random_pattern(&mut self) {
        self.random_seed = self.random_seed.wrapping_add(1);
        driver::lock(&self.simulator).scatter(self.random_seed);
    }

    pub fn apply_selected_pattern(&mut self) {
        let Some(pattern) = conway::PATTERNS.get(self.selected_pattern) else {
            return;
        };
        if let Err(err) = driver::lock(&self.simulator).apply_pattern(pattern) {
            error!("Cannot apply pattern: {err}");
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        driver::lock(&self.simulator).toggle_cell(row as isize, col as isize);
    }

    /// Forgets a driver that ended by itself (cycle detected).
    fn reap_driver(&mut self) {
        if self.driver.as_ref().is_some_and(DriverHandle::is_finished) {
            self.driver = None;
        }
    }

    fn spawn_driver(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        let handle = self
            .new_driver()
            .spawn(self.runtime.handle(), move |_tick| ctx.request_repaint());
        self.driver = Some(handle);
    }

    fn new_driver(&self) -> Driver {
        Driver::new(Arc::clone(&self.simulator), self.config.tick_interval)
            .stop_on_cycle(self.config.stop_on_cycle)
    }
}
