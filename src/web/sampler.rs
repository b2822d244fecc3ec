use crate::engine::Sampler;
use gloo_timers::callback::Interval;
use log::debug;
use yew::Callback;

/// Periodic sampling on a `gloo` interval. Dropping the `Interval` cancels
/// it, so deregistering is just taking the handle.
pub struct IntervalSampler {
    on_tick: Callback<()>,
    interval: Option<Interval>,
}

impl IntervalSampler {
    pub fn new(on_tick: Callback<()>) -> Self {
        Self {
            on_tick,
            interval: None,
        }
    }
}

impl Sampler for IntervalSampler {
    fn register(&mut self, period_ms: u32) {
        let on_tick = self.on_tick.clone();
        self.interval = Some(Interval::new(period_ms, move || on_tick.emit(())));
        debug!("sampling every {} ms", period_ms);
    }

    fn deregister(&mut self) {
        if self.interval.take().is_some() {
            debug!("sampling stopped");
        }
    }
}
