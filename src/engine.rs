//! Elapsed-time state machine.
//!
//! The engine never stores "now"; it keeps a start reference while running
//! and a frozen reading while stopped, so elapsed time is always derived from
//! the clock on demand.

use crate::clock::Clock;
use crate::config::TICK_INTERVAL_MS;
use log::debug;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimerStatus {
    Stopped,
    Running,
}

/// Periodic callback registration, driven by the engine.
///
/// Implementations only need to honour register/deregister; the engine makes
/// sure `register` is never called twice without a `deregister` in between.
pub trait Sampler {
    fn register(&mut self, period_ms: u32);
    fn deregister(&mut self);
}

/// Sampler for hosts that poll the engine themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSampler;

impl Sampler for NoopSampler {
    fn register(&mut self, _period_ms: u32) {}
    fn deregister(&mut self) {}
}

pub struct TimingEngine<C: Clock, S: Sampler> {
    clock: C,
    sampler: S,
    status: TimerStatus,
    start_reference_ms: u64,
    frozen_elapsed_ms: u64,
    sampling_active: bool,
}

impl<C: Clock, S: Sampler> TimingEngine<C, S> {
    pub fn new(clock: C, sampler: S) -> Self {
        Self {
            clock,
            sampler,
            status: TimerStatus::Stopped,
            start_reference_ms: 0,
            frozen_elapsed_ms: 0,
            sampling_active: false,
        }
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn is_sampling(&self) -> bool {
        self.sampling_active
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let now = self.clock.now_ms();
        // Resume: shift the reference back by what was already accumulated.
        self.start_reference_ms = now.saturating_sub(self.frozen_elapsed_ms);
        self.status = TimerStatus::Running;
        self.begin_sampling();
        debug!("stopwatch started at {} ms elapsed", self.frozen_elapsed_ms);
    }

    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.end_sampling();
        self.frozen_elapsed_ms = self.running_elapsed();
        self.status = TimerStatus::Stopped;
        debug!("stopwatch stopped at {} ms", self.frozen_elapsed_ms);
    }

    /// Start when stopped, stop when running.
    pub fn toggle(&mut self) -> TimerStatus {
        match self.status {
            TimerStatus::Running => self.stop(),
            TimerStatus::Stopped => self.start(),
        }
        self.status
    }

    pub fn reset(&mut self) {
        self.end_sampling();
        self.status = TimerStatus::Stopped;
        self.start_reference_ms = 0;
        self.frozen_elapsed_ms = 0;
        debug!("stopwatch reset");
    }

    pub fn current_elapsed(&self) -> u64 {
        match self.status {
            TimerStatus::Running => self.running_elapsed(),
            TimerStatus::Stopped => self.frozen_elapsed_ms,
        }
    }

    fn running_elapsed(&self) -> u64 {
        self.clock.now_ms().saturating_sub(self.start_reference_ms)
    }

    fn begin_sampling(&mut self) {
        if self.sampling_active {
            return;
        }
        self.sampler.register(TICK_INTERVAL_MS);
        self.sampling_active = true;
    }

    fn end_sampling(&mut self) {
        if !self.sampling_active {
            return;
        }
        self.sampler.deregister();
        self.sampling_active = false;
    }
}
