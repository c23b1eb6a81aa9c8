use crate::models::session::SessionRecord;
use crate::models::timer::{TimerPhase, TimerState};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::time::ms_to_secs;

/// The timer engine: a two-state machine (Idle / Running) computing
/// elapsed time by wall-clock differencing.
///
/// Elapsed time is never counted tick by tick. While running, it is
/// `accumulated + floor((now - segment_anchor) / 1000)`; stopping banks
/// the segment into the accumulated total. Display code may sample
/// `elapsed_secs` at any cadence without affecting correctness.
pub struct TimerEngine<C: Clock> {
    clock: C,
    state: TimerState,
}

impl TimerEngine<SystemClock> {
    pub fn with_system_clock(state: TimerState) -> Self {
        Self::new(state, SystemClock)
    }
}

impl<C: Clock> TimerEngine<C> {
    pub fn new(state: TimerState, clock: C) -> Self {
        Self { clock, state }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.phase.is_running()
    }

    pub fn description(&self) -> Option<&str> {
        self.state.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        if description.is_some() {
            self.state.description = description;
        }
    }

    /// Whole seconds elapsed in the current unsaved session.
    pub fn elapsed_secs(&self) -> u64 {
        match self.state.segment_started_at {
            Some(anchor) => {
                self.state.accumulated_secs + ms_to_secs(self.clock.now_ms() - anchor)
            }
            None => self.state.accumulated_secs,
        }
    }

    /// Start (or resume) the timer. Valid only from Idle; a start while
    /// running is a no-op. Returns whether the state changed.
    pub fn start(&mut self, description: Option<String>) -> bool {
        if self.is_running() {
            return false;
        }

        let now = self.clock.now_ms();
        self.state.segment_started_at = Some(now);
        if self.state.session_started_at.is_none() {
            self.state.session_started_at = Some(now);
        }
        self.set_description(description);
        self.state.phase = TimerPhase::Running;
        true
    }

    /// Pause the running segment, banking its floor-truncated seconds.
    /// The session anchor survives: a later start resumes the same
    /// logical session. A stop while idle is a no-op.
    pub fn stop(&mut self) -> bool {
        let Some(anchor) = self.state.segment_started_at else {
            return false;
        };

        self.state.accumulated_secs += ms_to_secs(self.clock.now_ms() - anchor);
        self.state.segment_started_at = None;
        self.state.phase = TimerPhase::Idle;
        true
    }

    /// Discard the unsaved session from either state. Returns whether
    /// there was anything to discard.
    pub fn reset(&mut self) -> bool {
        let had_session =
            self.is_running() || self.state.accumulated_secs > 0 || self.state.session_started_at.is_some();
        self.state = TimerState::default();
        had_session
    }

    /// Stop if running, then either produce exactly one session record
    /// (elapsed > 0) and reset, or leave the (stopped) timer as-is and
    /// produce nothing (elapsed == 0).
    pub fn save_and_reset(&mut self) -> Option<SessionRecord> {
        self.stop();

        let elapsed = self.state.accumulated_secs;
        if elapsed == 0 {
            return None;
        }

        let end = self.clock.now_ms();
        let start = self
            .state
            .session_started_at
            .unwrap_or(end - elapsed as i64 * 1000);
        let description = self.state.description.take();
        self.reset();

        Some(SessionRecord::from_session(start, end, elapsed, description))
    }
}
