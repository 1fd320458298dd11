use gloo::timers::callback::{Interval, Timeout};
use recollect_core::{Scheduler, TimerEvent};
use yew::Callback;

/// Browser timers posting their events back into the component.
///
/// Dropping a gloo handle cancels it, so clearing the lists is all `cancel_all` needs.
#[derive(Debug)]
pub(crate) struct GlooScheduler {
    callback: Callback<TimerEvent>,
    timeouts: Vec<Timeout>,
    intervals: Vec<Interval>,
}

impl GlooScheduler {
    pub(crate) fn new(callback: Callback<TimerEvent>) -> Self {
        Self {
            callback,
            timeouts: Vec::new(),
            intervals: Vec::new(),
        }
    }
}

impl Scheduler for GlooScheduler {
    fn schedule_once(&mut self, delay_ms: u32, event: TimerEvent) {
        log::trace!("schedule {:?} in {}ms", event, delay_ms);
        let callback = self.callback.clone();
        self.timeouts
            .push(Timeout::new(delay_ms, move || callback.emit(event)));
    }

    fn schedule_repeating(&mut self, interval_ms: u32, event: TimerEvent) {
        log::trace!("schedule {:?} every {}ms", event, interval_ms);
        let callback = self.callback.clone();
        self.intervals
            .push(Interval::new(interval_ms, move || callback.emit(event)));
    }

    fn cancel_all(&mut self) {
        log::trace!(
            "cancel {} timeouts, {} intervals",
            self.timeouts.len(),
            self.intervals.len()
        );
        self.timeouts.clear();
        self.intervals.clear();
    }
}
