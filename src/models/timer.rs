use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    #[default]
    Idle,
    Running,
}

impl TimerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, TimerPhase::Running)
    }
}

/// Timer state checkpointed between CLI invocations.
///
/// This is scratch state, not history: it lives in a sibling file of the
/// entry store and is deleted on reset/save. Anchors are epoch
/// milliseconds; elapsed time is always recomputed from them, never
/// counted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    pub phase: TimerPhase,
    /// Seconds banked from prior run segments of the current session.
    pub accumulated_secs: u64,
    /// Anchor of the running segment; `Some` iff phase is Running.
    pub segment_started_at: Option<i64>,
    /// Anchor of the logical session; survives stop, cleared on reset/save.
    pub session_started_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
