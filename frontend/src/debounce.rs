use gloo_timers::callback::Timeout;

/// Cancellable single-slot timer: scheduling replaces whatever was
/// pending, so a burst of events collapses into one firing after the
/// quiet period. Dropping the debouncer cancels the pending timeout.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Debouncer {
        Debouncer {
            delay_ms,
            pending: None,
        }
    }

    pub fn schedule<F: FnOnce() + 'static>(&mut self, action: F) {
        self.cancel();
        self.pending = Some(Timeout::new(self.delay_ms, action));
    }

    pub fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            timeout.cancel();
        }
    }
}
