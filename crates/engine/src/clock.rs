//! Clock module - cancelable timers on a virtual timeline
//!
//! The host feeds real elapsed milliseconds into [`Clock::pop_due`] through the
//! engine; timers fire in deadline order (ties in scheduling order). Nothing
//! here sleeps or spawns, so tests drive time explicitly.

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// What a timer means to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Countdown second.
    Tick,
    /// Hide the mismatched pair scheduled under `generation`.
    HideMismatch { generation: u32 },
}

/// A timer that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub handle: TimerHandle,
    pub kind: TimerKind,
    pub at_ms: u64,
}

#[derive(Debug, Clone)]
struct Timer {
    handle: TimerHandle,
    kind: TimerKind,
    due_ms: u64,
    /// `Some` for repeating timers.
    period_ms: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct Clock {
    now_ms: u64,
    next_id: u64,
    timers: Vec<Timer>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the clock was created.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Fire `kind` every `period_ms`, first after one period.
    pub fn repeat(&mut self, period_ms: u32, kind: TimerKind) -> TimerHandle {
        self.schedule(period_ms.max(1), Some(period_ms.max(1)), kind)
    }

    /// Fire `kind` once after `delay_ms`.
    pub fn once(&mut self, delay_ms: u32, kind: TimerKind) -> TimerHandle {
        self.schedule(delay_ms, None, kind)
    }

    fn schedule(&mut self, delay_ms: u32, period_ms: Option<u32>, kind: TimerKind) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            handle,
            kind,
            due_ms: self.now_ms + u64::from(delay_ms),
            period_ms,
        });
        handle
    }

    /// Cancel a timer. Returns false if it already fired (one-shot) or was canceled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        self.timers.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// Number of outstanding timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Pop the earliest timer due at or before `until_ms`, moving `now` to its deadline.
    ///
    /// Repeating timers are rescheduled one period later. Returns `None` (and moves
    /// `now` to `until_ms`) once nothing else is due, so callers loop until `None`.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Fired> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.handle.0))
            .map(|(i, _)| i);

        let Some(index) = index else {
            self.now_ms = self.now_ms.max(until_ms);
            return None;
        };

        let timer = &mut self.timers[index];
        let fired = Fired {
            handle: timer.handle,
            kind: timer.kind,
            at_ms: timer.due_ms,
        };
        self.now_ms = self.now_ms.max(timer.due_ms);

        match timer.period_ms {
            Some(period) => timer.due_ms += u64::from(period),
            None => {
                self.timers.remove(index);
            }
        }

        Some(fired)
    }
}
