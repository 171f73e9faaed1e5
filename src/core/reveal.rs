//! One-shot reveal state for cards that fade in on scroll

use std::time::Duration;

/// Fraction of a card that must be inside the viewport to count as seen
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Progress of a single card's reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Not yet scrolled into view
    #[default]
    Hidden,
    /// Seen, waiting for its stagger delay
    Scheduled,
    /// Shown; terminal
    Visible,
}

/// Visibility flag of one card, driven by intersection callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    delay: Duration,
    phase: RevealPhase,
}

impl RevealState {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            phase: RevealPhase::Hidden,
        }
    }

    pub fn with_delay_ms(delay_ms: u32) -> Self {
        Self::new(Duration::from_millis(delay_ms as u64))
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Visible
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Feed an intersection callback.
    ///
    /// Returns the delay after which [`Self::mark_visible`] should run, only
    /// for the first intersecting callback.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> Option<Duration> {
        if !is_intersecting || self.phase != RevealPhase::Hidden {
            return None;
        }
        self.phase = RevealPhase::Scheduled;
        Some(self.delay)
    }

    /// Flip the flag to visible. Returns `true` only on the first transition.
    pub fn mark_visible(&mut self) -> bool {
        if self.phase == RevealPhase::Visible {
            return false;
        }
        self.phase = RevealPhase::Visible;
        true
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
