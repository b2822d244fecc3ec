//! The session object: one timing engine plus its lap record.

use crate::clock::Clock;
use crate::engine::{Sampler, TimerStatus, TimingEngine};
use crate::laps::{LapEntry, LapExtreme, LapRecorder};
use log::debug;

pub struct Stopwatch<C: Clock, S: Sampler> {
    engine: TimingEngine<C, S>,
    laps: LapRecorder,
}

impl<C: Clock, S: Sampler> Stopwatch<C, S> {
    pub fn new(clock: C, sampler: S) -> Self {
        Self {
            engine: TimingEngine::new(clock, sampler),
            laps: LapRecorder::new(),
        }
    }

    pub fn start(&mut self) {
        self.engine.start();
    }

    pub fn stop(&mut self) {
        self.engine.stop();
    }

    pub fn toggle(&mut self) -> TimerStatus {
        self.engine.toggle()
    }

    /// Stop, zero the clock and drop every lap.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.laps.clear(0);
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn status(&self) -> TimerStatus {
        self.engine.status()
    }

    pub fn is_sampling(&self) -> bool {
        self.engine.is_sampling()
    }

    pub fn current_elapsed(&self) -> u64 {
        self.engine.current_elapsed()
    }

    /// Record a lap at the current reading. Does nothing while stopped.
    pub fn record_lap(&mut self) -> Option<LapEntry> {
        if !self.engine.is_running() {
            return None;
        }
        let lap = self.laps.record(self.engine.current_elapsed());
        debug!("lap {} recorded: {} ms", lap.number, lap.interval_ms);
        Some(lap)
    }

    /// Drop recorded laps without touching the clock.
    pub fn clear_laps(&mut self) {
        self.laps.clear(self.engine.current_elapsed());
    }

    pub fn laps(&self) -> &LapRecorder {
        &self.laps
    }

    pub fn fastest_lap(&self) -> Option<LapExtreme> {
        self.laps.fastest()
    }

    pub fn slowest_lap(&self) -> Option<LapExtreme> {
        self.laps.slowest()
    }

    pub fn cumulative_at(&self, index: usize) -> Option<u64> {
        self.laps.cumulative_at(index)
    }

    pub fn lap_entries(&self) -> Vec<LapEntry> {
        self.laps.entries().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::engine::tests::CountingSampler;

    fn stopwatch() -> (Stopwatch<ManualClock, CountingSampler>, ManualClock, CountingSampler) {
        let clock = ManualClock::new(0);
        let sampler = CountingSampler::default();
        (Stopwatch::new(clock.clone(), sampler.clone()), clock, sampler)
    }

    #[test]
    fn lap_then_stop_then_reset_scenario() {
        let (mut sw, clock, sampler) = stopwatch();
        sw.start();
        clock.advance(1_500);

        let lap = sw.record_lap().expect("running stopwatch records laps");
        assert_eq!(lap.interval_ms, 1_500);
        assert_eq!(lap.cumulative_ms, 1_500);

        clock.advance(500);
        sw.stop();
        assert_eq!(sw.current_elapsed(), 2_000);

        sw.reset();
        assert_eq!(sw.current_elapsed(), 0);
        assert!(sw.laps().is_empty());
        assert_eq!(sampler.live(), 0);
    }

    #[test]
    fn lap_while_stopped_leaves_laps_untouched() {
        let (mut sw, clock, _) = stopwatch();
        assert_eq!(sw.record_lap(), None);
        assert!(sw.laps().is_empty());

        sw.start();
        clock.advance(700);
        sw.record_lap();
        sw.stop();
        clock.advance(300);
        let before = sw.lap_entries();
        assert_eq!(sw.record_lap(), None);
        assert_eq!(sw.record_lap(), None);
        assert_eq!(sw.lap_entries(), before);
    }

    #[test]
    fn paused_time_is_not_part_of_the_next_lap() {
        let (mut sw, clock, _) = stopwatch();
        sw.start();
        clock.advance(1_000);
        sw.record_lap();
        sw.stop();
        clock.advance(60_000);
        sw.start();
        clock.advance(400);
        let lap = sw.record_lap().unwrap();
        assert_eq!(lap.interval_ms, 400);
        assert_eq!(sw.cumulative_at(1), Some(1_400));
    }

    #[test]
    fn clear_mid_run_measures_from_clear_point() {
        let (mut sw, clock, _) = stopwatch();
        sw.start();
        clock.advance(2_000);
        sw.record_lap();
        clock.advance(1_000);
        sw.clear_laps();
        assert!(sw.laps().is_empty());
        assert!(sw.is_running());
        clock.advance(250);
        assert_eq!(sw.record_lap().map(|l| l.interval_ms), Some(250));
        assert_eq!(sw.current_elapsed(), 3_250);
    }

    #[test]
    fn reset_from_any_state_yields_empty_zero() {
        let (mut sw, clock, _) = stopwatch();
        sw.reset();
        assert_eq!(sw.current_elapsed(), 0);

        sw.start();
        clock.advance(120);
        sw.record_lap();
        sw.reset();
        assert_eq!(sw.current_elapsed(), 0);
        assert!(sw.laps().is_empty());
        assert!(!sw.is_running());

        sw.start();
        clock.advance(80);
        assert_eq!(sw.record_lap().map(|l| l.interval_ms), Some(80));
    }

    #[test]
    fn extremes_follow_recorded_laps() {
        let (mut sw, clock, _) = stopwatch();
        assert_eq!(sw.fastest_lap(), None);
        sw.start();
        for interval in [500, 300, 300, 700] {
            clock.advance(interval);
            sw.record_lap();
        }
        assert_eq!(sw.fastest_lap().map(|l| l.index), Some(1));
        assert_eq!(sw.slowest_lap().map(|l| l.index), Some(3));
    }
}
