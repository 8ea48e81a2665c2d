use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimerState {
    Idle,
    Pending { deadline: f64 },
    Fired,
    Cancelled,
}

/// One-shot deadline that marks the end of the entrance sequence.
///
/// Driven by the host clock (seconds). Once cancelled it never fires, so a
/// torn-down chart cannot be mutated by a late tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntranceTimer {
    state: TimerState,
}

impl Default for EntranceTimer {
    fn default() -> Self {
        Self {
            state: TimerState::Idle,
        }
    }
}

impl EntranceTimer {
    #[must_use]
    pub fn state(self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self.state, TimerState::Pending { .. })
    }

    /// Arms the timer. Ignored once cancelled.
    pub fn schedule(&mut self, now: f64, after_secs: f64) {
        if self.state == TimerState::Cancelled {
            return;
        }
        let delay = if after_secs.is_finite() {
            after_secs.max(0.0)
        } else {
            0.0
        };
        self.state = TimerState::Pending {
            deadline: now + delay,
        };
    }

    /// Fires a due timer; returns true exactly once per schedule.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.state {
            TimerState::Pending { deadline } if now >= deadline => {
                self.state = TimerState::Fired;
                true
            }
            _ => false,
        }
    }

    /// Cancels permanently; returns whether a pending deadline was dropped.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = TimerState::Cancelled;
        was_pending
    }
}

#[cfg(test)]
mod tests {
    use super::{EntranceTimer, TimerState};

    #[test]
    fn timer_fires_once_at_deadline() {
        let mut timer = EntranceTimer::default();
        timer.schedule(1.0, 0.5);
        assert!(!timer.poll(1.4));
        assert!(timer.poll(1.5));
        assert!(!timer.poll(2.0));
        assert_eq!(timer.state(), TimerState::Fired);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = EntranceTimer::default();
        timer.schedule(0.0, 1.0);
        assert!(timer.cancel());
        assert!(!timer.poll(10.0));
        timer.schedule(10.0, 0.0);
        assert!(!timer.poll(10.0));
        assert!(!timer.cancel());
    }
}
