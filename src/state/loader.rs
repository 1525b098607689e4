#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

/// Shared loading-indicator state.
///
/// Show/hide are counted rather than toggled so overlapping requests (the
/// session guard plus a page fetch) cannot hide each other's indicator
/// early. Within one request cycle, `show` strictly precedes the call and
/// the call strictly precedes `hide`, on every settlement path.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoaderState {
    pending: u32,
}

impl LoaderState {
    /// Mark a request as started.
    pub fn show(&mut self) {
        self.pending += 1;
    }

    /// Mark a request as settled. Never underflows.
    pub fn hide(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    /// Whether the overlay should be visible.
    pub fn is_visible(self) -> bool {
        self.pending > 0
    }
}
