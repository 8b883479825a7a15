// driver.rs - Periodic task that advances a shared simulator while it is Live

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, info};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::simulator::{Simulator, Tick};

/// The simulator as shared between the driver and the UI thread.
pub type SharedSimulator = Arc<Mutex<Simulator>>;

pub fn shared(simulator: Simulator) -> SharedSimulator {
    Arc::new(Mutex::new(simulator))
}

/// Locks the simulator. A panic while holding the lock cannot leave the grid
/// half-written (generations are swapped in whole), so poisoning is ignored.
pub fn lock(simulator: &SharedSimulator) -> MutexGuard<'_, Simulator> {
    simulator.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Why a driver task returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// `DriverHandle::stop` was called.
    Cancelled,
    /// The simulator was put back into Edit mode.
    Stopped,
    /// A generation repeated and `stop_on_cycle` was set.
    Cycle,
}

pub struct Driver {
    simulator: SharedSimulator,
    interval: Duration,
    stop_on_cycle: bool,
}

pub struct DriverHandle {
    stop: Arc<AtomicBool>,
    // When the task last advanced (or was spawned); written under the simulator lock
    last_tick: Arc<Mutex<Instant>>,
    task: JoinHandle<Exit>,
}

impl Driver {
    pub fn new(simulator: SharedSimulator, interval: Duration) -> Self {
        Self {
            simulator,
            interval,
            stop_on_cycle: false,
        }
    }

    pub fn stop_on_cycle(mut self, enabled: bool) -> Self {
        self.stop_on_cycle = enabled;
        self
    }

    /// Spawns the tick loop on `handle`. The first generation runs one
    /// interval from now. `on_tick` is called after every committed
    /// generation, outside the simulator lock.
    pub fn spawn<F>(self, handle: &Handle, on_tick: F) -> DriverHandle
    where
        F: FnMut(Tick) + Send + 'static,
    {
        self.spawn_after(Instant::now(), handle, on_tick)
    }

    /// Replaces `previous`, keeping its phase: the first generation runs one
    /// (new) interval after the last one `previous` committed.
    pub fn resume<F>(self, previous: DriverHandle, handle: &Handle, on_tick: F) -> DriverHandle
    where
        F: FnMut(Tick) + Send + 'static,
    {
        previous.stop();
        // Taking the lock waits out a generation `previous` may be running;
        // after that it can only observe the flag and exit.
        let last_tick = {
            let _simulator = lock(&self.simulator);
            *previous.last_tick.lock().unwrap_or_else(PoisonError::into_inner)
        };
        self.spawn_after(last_tick, handle, on_tick)
    }

    fn spawn_after<F>(self, anchor: Instant, handle: &Handle, mut on_tick: F) -> DriverHandle
    where
        F: FnMut(Tick) + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let last_tick = Arc::new(Mutex::new(anchor));
        let last_tick_slot = Arc::clone(&last_tick);

        info!("Driver spawned, one generation every {:?}", self.interval);

        let task = handle.spawn(async move {
            let mut ticker = interval_at(anchor + self.interval, self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            let exit = loop {
                let now = ticker.tick().await;

                let tick = {
                    let mut simulator = lock(&self.simulator);
                    if stop_flag.load(Ordering::Acquire) {
                        break Exit::Cancelled;
                    }
                    match simulator.advance() {
                        Some(tick) => {
                            *last_tick_slot
                                .lock()
                                .unwrap_or_else(PoisonError::into_inner) = now;
                            if tick.repeated && self.stop_on_cycle {
                                simulator.stop();
                            }
                            tick
                        }
                        None => break Exit::Stopped,
                    }
                };

                on_tick(tick);

                if tick.repeated && self.stop_on_cycle {
                    break Exit::Cycle;
                }
            };

            debug!("Driver exited: {exit:?}");
            exit
        });

        DriverHandle {
            stop,
            last_tick,
            task,
        }
    }
}

impl DriverHandle {
    /// Asks the task to exit at its next tick. Returns immediately.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the task and waits for it to return.
    pub async fn join(mut self) -> Option<Exit> {
        self.stop();
        (&mut self.task).await.ok()
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
    }
}
