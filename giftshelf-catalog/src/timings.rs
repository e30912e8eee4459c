use serde::{Deserialize, Serialize};

/// Delays used by the client's deferred effects, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// Gap between consecutive market card entrances.
    pub stagger_ms: u32,
    /// How long the first-hover pulse class stays on a card.
    pub hover_pulse_ms: u32,
    /// Pause between clearing and restoring a looping image source.
    pub loop_restart_ms: u32,
    /// How long a notification stays fully visible.
    pub notice_visible_ms: u32,
    /// Fade-out time before a hidden notification is removed.
    pub notice_fade_ms: u32,
}

impl Timings {
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            stagger_ms: 100,
            hover_pulse_ms: 600,
            loop_restart_ms: 50,
            notice_visible_ms: 5000,
            notice_fade_ms: 300,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::standard()
    }
}
