//! Countdown timer
//!
//! A cancellable periodic task for the game clock. While running, a worker
//! thread waits on a `crossbeam_channel::tick` source and forwards each tick
//! into an unbounded channel, so a slow event loop never loses a second.
//! Cancelling disconnects the worker and drops the receiver; nothing queued
//! before cancellation can be observed afterwards.

use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, select, unbounded, Receiver, Sender};

/// Periodic tick source tied to the lifetime of a round
#[derive(Debug)]
pub struct CountdownTimer {
    period: Duration,
    running: Option<Running>,
}

#[derive(Debug)]
struct Running {
    ticks: Receiver<Instant>,
    // Dropping this disconnects the worker's stop channel
    stop: Sender<()>,
    worker: JoinHandle<()>,
}

impl CountdownTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            running: None,
        }
    }

    /// One tick per second
    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Start ticking. Restarting a running timer resets its phase.
    ///
    /// Fails only if the worker thread cannot be spawned.
    pub fn start(&mut self) -> std::io::Result<()> {
        self.cancel();

        let (tick_tx, tick_rx) = unbounded();
        let (stop_tx, stop_rx) = bounded::<()>(0);
        let period = self.period;

        let worker = std::thread::Builder::new()
            .name("countdown".to_string())
            .spawn(move || run_worker(period, tick_tx, stop_rx))?;

        self.running = Some(Running {
            ticks: tick_rx,
            stop: stop_tx,
            worker,
        });
        tracing::debug!(period_ms = period.as_millis() as u64, "Countdown started");
        Ok(())
    }

    /// Stop ticking. Safe to call when already stopped.
    pub fn cancel(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };

        let Running { ticks, stop, worker } = running;
        drop(ticks);
        drop(stop);
        if worker.join().is_err() {
            tracing::error!("Countdown worker panicked");
        }
        tracing::debug!("Countdown cancelled");
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of periods elapsed since the last call, without blocking
    pub fn elapsed_ticks(&self) -> usize {
        match &self.running {
            Some(running) => running.ticks.try_iter().count(),
            None => 0,
        }
    }

    /// Start or cancel so the timer runs exactly when `active` is true
    pub fn sync(&mut self, active: bool) -> std::io::Result<()> {
        match (active, self.is_running()) {
            (true, false) => self.start()?,
            (false, true) => self.cancel(),
            _ => {}
        }
        Ok(())
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn run_worker(period: Duration, ticks: Sender<Instant>, stop: Receiver<()>) {
    let ticker = crossbeam_channel::tick(period);
    loop {
        select! {
            recv(ticker) -> instant => {
                let Ok(instant) = instant else { break };
                if ticks.send(instant).is_err() {
                    break;
                }
            }
            // Only ever disconnects; nothing is sent on it
            recv(stop) -> _ => break,
        }
    }
}
