//! UI side effects returned from transitions.
//!
//! Transitions never perform side effects themselves. The dispatch layer
//! executes the effect returned from [`crate::registry::PaneRegistry::apply`]
//! and owns the throttle that coalesces relayout bursts while a divider
//! is being dragged.

use std::time::{Duration, Instant};

/// Window within which repeated relayout requests are coalesced.
const RELAYOUT_WINDOW: Duration = Duration::from_millis(50);

/// A side effect requested by a pane transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// All panes must be measured and laid out again.
    ScheduleRelayout,
}

/// Coalesces relayout requests to at most one per 50 ms window.
#[derive(Debug, Clone, Default)]
pub struct RelayoutThrottle {
    /// When the last relayout fired.
    last_fired: Option<Instant>,
}

impl RelayoutThrottle {
    /// Create a throttle that will fire on the first request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a relayout should fire now.
    ///
    /// The first request fires immediately; further requests within the
    /// window are dropped.
    pub fn should_fire(&mut self) -> bool {
        self.should_fire_at(Instant::now())
    }

    fn should_fire_at(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(last) if now.duration_since(last) < RELAYOUT_WINDOW => false,
            _ => {
                self.last_fired = Some(now);
                true
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_fires() {
        let mut throttle = RelayoutThrottle::new();
        assert!(throttle.should_fire());
    }

    #[test]
    fn requests_within_window_are_dropped() {
        let mut throttle = RelayoutThrottle::new();
        let start = Instant::now();
        assert!(throttle.should_fire_at(start));
        assert!(!throttle.should_fire_at(start + Duration::from_millis(10)));
        assert!(!throttle.should_fire_at(start + Duration::from_millis(49)));
    }

    #[test]
    fn request_after_window_fires_again() {
        let mut throttle = RelayoutThrottle::new();
        let start = Instant::now();
        assert!(throttle.should_fire_at(start));
        assert!(throttle.should_fire_at(start + Duration::from_millis(50)));
    }

    #[test]
    fn window_restarts_after_fire() {
        let mut throttle = RelayoutThrottle::new();
        let start = Instant::now();
        assert!(throttle.should_fire_at(start));
        assert!(throttle.should_fire_at(start + Duration::from_millis(60)));
        // The second fire opens a new window.
        assert!(!throttle.should_fire_at(start + Duration::from_millis(80)));
    }
}
