//! Header scroll style

use crate::timing::{Gate, Throttle};

/// Scrolled style applies strictly past the threshold
#[inline]
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Tracks the applied class so scroll events only write on a change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    threshold: f64,
    applied: Option<bool>,
}

impl HeaderStyle {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            applied: None,
        }
    }

    /// Start from the class currently on the element
    pub fn with_applied(threshold: f64, scrolled: bool) -> Self {
        Self {
            threshold,
            applied: Some(scrolled),
        }
    }

    /// Returns the new state when the class must be added (`true`) or removed (`false`)
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = is_scrolled(scroll_y, self.threshold);
        if self.applied == Some(scrolled) {
            return None;
        }
        self.applied = Some(scrolled);
        Some(scrolled)
    }

    pub fn is_applied(&self) -> bool {
        self.applied.unwrap_or(false)
    }
}

/// What the scroll listener should do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollAction {
    /// Add (`true`) or remove (`false`) the scrolled class
    Apply(bool),
    /// Re-read the offset after `delay_ms` and call [`HeaderScroll::on_trailing`]
    Defer { delay_ms: f64 },
    Idle,
}

/// Header style behind an optional throttle.
/// A throttled burst always ends with a trailing read, so the class matches the
/// final offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderScroll {
    style: HeaderStyle,
    throttle: Option<Throttle>,
}

impl HeaderScroll {
    pub fn new(style: HeaderStyle, throttle_ms: Option<f64>) -> Self {
        Self {
            style,
            throttle: throttle_ms.map(Throttle::new),
        }
    }

    pub fn on_scroll(&mut self, now_ms: f64, scroll_y: f64) -> ScrollAction {
        if let Some(throttle) = self.throttle.as_mut() {
            match throttle.admit(now_ms) {
                Gate::Run => {}
                Gate::Defer { delay_ms } => return ScrollAction::Defer { delay_ms },
                Gate::Pending => return ScrollAction::Idle,
            }
        }
        self.apply(scroll_y)
    }

    /// The deferred read is due
    pub fn on_trailing(&mut self, now_ms: f64, scroll_y: f64) -> ScrollAction {
        if let Some(throttle) = self.throttle.as_mut() {
            throttle.fire_trailing(now_ms);
        }
        self.apply(scroll_y)
    }

    pub fn is_applied(&self) -> bool {
        self.style.is_applied()
    }

    fn apply(&mut self, scroll_y: f64) -> ScrollAction {
        self.style
            .update(scroll_y)
            .map_or(ScrollAction::Idle, ScrollAction::Apply)
    }
}
