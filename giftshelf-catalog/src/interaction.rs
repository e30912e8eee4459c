/// What a pointer-enter on a card should trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverEffects {
    /// Apply the pulse class (first hover only).
    pub pulse: bool,
    /// Restart the card's looping image.
    pub restart_loop: bool,
}

/// Per-card latch making the hover pulse one-shot for the card's lifetime
#[derive(Debug, Clone, Copy, Default)]
pub struct HoverLatch {
    pulsed: bool,
}

impl HoverLatch {
    /// Register a pointer-enter. The loop restart fires on every hover; the pulse only once.
    pub fn enter(&mut self, has_looping_image: bool) -> HoverEffects {
        let pulse = !self.pulsed;
        self.pulsed = true;
        HoverEffects {
            pulse,
            restart_loop: has_looping_image,
        }
    }

    #[must_use]
    pub const fn has_pulsed(&self) -> bool {
        self.pulsed
    }
}

/// Image load-failure hook: handles the first error, then detaches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageErrorHook {
    handled: bool,
}

impl ImageErrorHook {
    /// Mark the failure handled; the hook detaches afterwards.
    pub const fn on_error(&mut self) {
        self.handled = true;
    }

    /// Whether the hook should still be listening for error events.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        !self.handled
    }
}
