//! Lap intervals derived from cumulative elapsed readings.

use serde::Serialize;

/// One recorded lap as exported: 1-based number, its own interval and the
/// running total of intervals through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LapEntry {
    pub number: usize,
    pub interval_ms: u64,
    pub cumulative_ms: u64,
}

/// Result of a fastest/slowest scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapExtreme {
    pub index: usize,
    pub interval_ms: u64,
}

#[derive(Debug, Default, Clone)]
pub struct LapRecorder {
    intervals: Vec<u64>,
    // cumulative[i] == intervals[..=i].iter().sum()
    cumulative: Vec<u64>,
    last_cumulative_ms: u64,
}

impl LapRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lap ending at `elapsed_ms` and return it.
    pub fn record(&mut self, elapsed_ms: u64) -> LapEntry {
        let interval_ms = elapsed_ms.saturating_sub(self.last_cumulative_ms);
        self.last_cumulative_ms = elapsed_ms;

        let cumulative_ms = self.cumulative.last().copied().unwrap_or(0) + interval_ms;
        self.intervals.push(interval_ms);
        self.cumulative.push(cumulative_ms);

        LapEntry {
            number: self.intervals.len(),
            interval_ms,
            cumulative_ms,
        }
    }

    /// Drop all laps; the next lap is measured from `elapsed_ms`.
    pub fn clear(&mut self, elapsed_ms: u64) {
        self.intervals.clear();
        self.cumulative.clear();
        self.last_cumulative_ms = elapsed_ms;
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn intervals(&self) -> &[u64] {
        &self.intervals
    }

    pub fn cumulative_at(&self, index: usize) -> Option<u64> {
        self.cumulative.get(index).copied()
    }

    /// First occurrence of the smallest interval.
    pub fn fastest(&self) -> Option<LapExtreme> {
        self.scan(|candidate, best| candidate < best)
    }

    /// First occurrence of the largest interval.
    pub fn slowest(&self) -> Option<LapExtreme> {
        self.scan(|candidate, best| candidate > best)
    }

    fn scan(&self, better: impl Fn(u64, u64) -> bool) -> Option<LapExtreme> {
        let (&first, rest) = self.intervals.split_first()?;
        let mut best = LapExtreme {
            index: 0,
            interval_ms: first,
        };
        for (offset, &interval_ms) in rest.iter().enumerate() {
            if better(interval_ms, best.interval_ms) {
                best = LapExtreme {
                    index: offset + 1,
                    interval_ms,
                };
            }
        }
        Some(best)
    }

    /// Laps in recording order.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = LapEntry> + ExactSizeIterator + '_ {
        self.intervals
            .iter()
            .zip(&self.cumulative)
            .enumerate()
            .map(|(i, (&interval_ms, &cumulative_ms))| LapEntry {
                number: i + 1,
                interval_ms,
                cumulative_ms,
            })
    }

    /// Laps newest first, the order the list view shows them.
    pub fn entries_newest_first(&self) -> impl Iterator<Item = LapEntry> + '_ {
        self.entries().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder_with(intervals: &[u64]) -> LapRecorder {
        let mut laps = LapRecorder::new();
        let mut elapsed = 0;
        for &interval in intervals {
            elapsed += interval;
            laps.record(elapsed);
        }
        laps
    }

    #[test]
    fn intervals_are_differences_of_readings() {
        let mut laps = LapRecorder::new();
        assert_eq!(laps.record(1_500).interval_ms, 1_500);
        assert_eq!(laps.record(2_100).interval_ms, 600);
        let third = laps.record(5_000);
        assert_eq!(third.number, 3);
        assert_eq!(third.interval_ms, 2_900);
        assert_eq!(third.cumulative_ms, 5_000);
        assert_eq!(laps.intervals(), &[1_500, 600, 2_900]);
    }

    #[test]
    fn cumulative_matches_prefix_sums() {
        let laps = recorder_with(&[500, 300, 300, 700, 1, 0, 42]);
        let mut sum = 0;
        for (i, &interval) in laps.intervals().iter().enumerate() {
            sum += interval;
            assert_eq!(laps.cumulative_at(i), Some(sum));
        }
        assert_eq!(laps.cumulative_at(laps.len()), None);
    }

    #[test]
    fn tie_break_keeps_first_occurrence() {
        let laps = recorder_with(&[500, 300, 300, 700]);
        assert_eq!(
            laps.fastest(),
            Some(LapExtreme {
                index: 1,
                interval_ms: 300
            })
        );
        assert_eq!(
            laps.slowest(),
            Some(LapExtreme {
                index: 3,
                interval_ms: 700
            })
        );

        let flat = recorder_with(&[250, 250, 250]);
        assert_eq!(flat.fastest().map(|l| l.index), Some(0));
        assert_eq!(flat.slowest().map(|l| l.index), Some(0));
    }

    #[test]
    fn empty_has_no_extremes() {
        let laps = LapRecorder::new();
        assert!(laps.is_empty());
        assert_eq!(laps.fastest(), None);
        assert_eq!(laps.slowest(), None);
    }

    #[test]
    fn clear_realigns_next_interval() {
        let mut laps = recorder_with(&[1_000, 1_000]);
        laps.clear(3_500);
        assert!(laps.is_empty());
        let next = laps.record(4_000);
        assert_eq!(next.number, 1);
        assert_eq!(next.interval_ms, 500);
        assert_eq!(next.cumulative_ms, 500);
    }

    #[test]
    fn newest_first_reverses_entries() {
        let laps = recorder_with(&[10, 20, 30]);
        let numbers: Vec<usize> = laps.entries_newest_first().map(|e| e.number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
        let totals: Vec<u64> = laps.entries().map(|e| e.cumulative_ms).collect();
        assert_eq!(totals, vec![10, 30, 60]);
    }
}
