use alloc::vec::Vec;

use crate::*;

/// Payload delivered back to [`MemoryGame::on_timer`] when a timer fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    BeginScramble { round: RoundId },
    ScrambleTick { round: RoundId },
}

impl TimerEvent {
    pub const fn round(self) -> RoundId {
        match self {
            Self::BeginScramble { round } | Self::ScrambleTick { round } => round,
        }
    }
}

/// Timer capabilities the game drives. Fired events must be fed to [`MemoryGame::on_timer`].
pub trait Scheduler {
    fn schedule_once(&mut self, delay_ms: u32, event: TimerEvent);

    fn schedule_repeating(&mut self, interval_ms: u32, event: TimerEvent);

    /// Drops every pending timer, one-shot and repeating alike.
    fn cancel_all(&mut self);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct PendingTimer {
    due_ms: u64,
    interval_ms: Option<u32>,
    seq: u64,
    event: TimerEvent,
}

/// Simulated clock: time only moves when asked to.
#[derive(Clone, Debug, Default)]
pub struct VirtualScheduler {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingTimer>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Pops the earliest timer due at or before `until_ms`, moving the clock to its due time.
    /// Repeating timers are re-armed one interval later.
    pub fn next_due(&mut self, until_ms: u64) -> Option<TimerEvent> {
        let (slot, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.seq))?;

        let timer = self.pending.remove(slot);
        self.now_ms = self.now_ms.max(timer.due_ms);

        if let Some(interval_ms) = timer.interval_ms {
            let due_ms = timer.due_ms + u64::from(interval_ms.max(1));
            self.push(due_ms, Some(interval_ms), timer.event);
        }

        Some(timer.event)
    }

    /// Moves the clock forward without firing anything.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    fn push(&mut self, due_ms: u64, interval_ms: Option<u32>, event: TimerEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingTimer {
            due_ms,
            interval_ms,
            seq,
            event,
        });
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule_once(&mut self, delay_ms: u32, event: TimerEvent) {
        self.push(self.now_ms + u64::from(delay_ms), None, event);
    }

    fn schedule_repeating(&mut self, interval_ms: u32, event: TimerEvent) {
        self.push(
            self.now_ms + u64::from(interval_ms.max(1)),
            Some(interval_ms),
            event,
        );
    }

    fn cancel_all(&mut self) {
        self.pending.clear();
    }
}
