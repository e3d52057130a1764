//! Fixed-interval tick driver
//!
//! Runs `Engine::tick` on a background thread at a fixed cadence until
//! stopped. Deadlines advance by whole intervals so the tick rate does not
//! drift; after a long stall the schedule is rebased instead of replaying
//! every missed tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::engine::SharedEngine;
use crate::persistence::KeyValueStore;

/// Maximum ticks run back-to-back to catch up after a stall
pub const MAX_CATCH_UP_TICKS: u32 = 8;

/// Spawns tick threads
pub struct FixedStepScheduler;

impl FixedStepScheduler {
    /// Start ticking `engine` every `interval`; the first tick lands one interval from now
    pub fn spawn<S>(engine: SharedEngine<S>, interval: Duration) -> Result<SchedulerHandle>
    where
        S: KeyValueStore + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let thread = std::thread::Builder::new()
            .name("ping-pong-tick".into())
            .spawn(move || run(engine, interval, &thread_stop))
            .context("spawning tick thread")?;

        log::info!("Scheduler started ({:?} per tick)", interval);
        Ok(SchedulerHandle {
            stop,
            thread: Some(thread),
        })
    }
}

fn run<S: KeyValueStore>(engine: SharedEngine<S>, interval: Duration, stop: &AtomicBool) -> u64 {
    let mut ticks = 0u64;
    let mut next = Instant::now() + interval;

    while !stop.load(Ordering::Relaxed) {
        let now = Instant::now();
        if now < next {
            std::thread::sleep(next - now);
            continue;
        }

        {
            // State is plain data; a panic elsewhere does not leave it unusable
            let mut engine = engine.lock().unwrap_or_else(PoisonError::into_inner);
            engine.tick();
        }
        ticks += 1;
        next += interval;

        if Instant::now() > next + interval * MAX_CATCH_UP_TICKS {
            log::warn!("Tick thread fell behind, skipping missed ticks");
            next = Instant::now() + interval;
        }
    }

    ticks
}

/// Handle to a running tick thread; stops the thread when dropped
pub struct SchedulerHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<u64>>,
}

impl SchedulerHandle {
    /// Stop ticking and wait for the thread. Returns the number of ticks run.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        self.stop.store(true, Ordering::Relaxed);
        let ticks = match self.thread.take() {
            Some(thread) => thread.join().unwrap_or_else(|_| {
                log::warn!("Tick thread panicked");
                0
            }),
            None => return 0,
        };
        log::info!("Scheduler stopped after {} ticks", ticks);
        ticks
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::persistence::MemoryStore;
    use crate::settings::ArenaConfig;
    use glam::Vec2;

    #[test]
    fn test_scheduler_advances_engine() {
        let shared = Engine::new(ArenaConfig::default(), MemoryStore::new()).into_shared();

        let handle = FixedStepScheduler::spawn(Arc::clone(&shared), Duration::from_millis(1)).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        let ticks = handle.stop();

        assert!(ticks > 0);
        let engine = shared.lock().unwrap();
        // Ticks after game over are no-ops and do not advance the counter
        assert!(engine.state().time_ticks > 0);
        assert!(engine.state().time_ticks <= ticks);
        assert_ne!(engine.ball_position(), Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_no_ticks_after_stop() {
        let shared = Engine::new(ArenaConfig::default(), MemoryStore::new()).into_shared();

        let handle = FixedStepScheduler::spawn(Arc::clone(&shared), Duration::from_millis(1)).unwrap();
        std::thread::sleep(Duration::from_millis(20));
        handle.stop();

        let after_stop = shared.lock().unwrap().state().time_ticks;
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(shared.lock().unwrap().state().time_ticks, after_stop);
    }

    #[test]
    fn test_drop_stops_thread() {
        let shared = Engine::new(ArenaConfig::default(), MemoryStore::new()).into_shared();
        {
            let _handle =
                FixedStepScheduler::spawn(Arc::clone(&shared), Duration::from_millis(1)).unwrap();
            std::thread::sleep(Duration::from_millis(10));
        }
        let after_drop = shared.lock().unwrap().state().time_ticks;
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(shared.lock().unwrap().state().time_ticks, after_drop);
    }
}
