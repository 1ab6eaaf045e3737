// Scroll state for the results viewport
//
// The results panel owns its scroll state; App just routes input to the
// focused component. Auto-follow keeps long results pinned to the top on
// arrival (fresh results reset to the top, unlike a streaming log that
// follows the bottom).

/// Scroll state for a single panel
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (line index at top of viewport)
    offset: usize,

    /// Total number of lines in content
    total: usize,

    /// Number of lines visible in viewport
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
        }
    }

    /// Update content and viewport dimensions.
    /// Call this each render frame with current sizes.
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Reset to the top (fresh results replace the old ones wholesale)
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        // If dimensions are unknown (total=0), allow unbounded scroll;
        // render clamps against actual content size
        if self.total == 0 || self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Check if content overflows the viewport (scroll hint needed)
    pub fn overflows(&self) -> bool {
        self.total > self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_clamps_to_content() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        for _ in 0..100 {
            scroll.scroll_down();
        }
        assert_eq!(scroll.offset(), 15);

        scroll.scroll_up();
        assert_eq!(scroll.offset(), 14);
    }

    #[test]
    fn page_navigation() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);

        scroll.page_down();
        assert_eq!(scroll.offset(), 10);
        scroll.page_down();
        assert_eq!(scroll.offset(), 20);
        scroll.page_up();
        assert_eq!(scroll.offset(), 10);

        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 90);
        scroll.scroll_to_top();
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(50, 10);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 40);

        // New, shorter results
        scroll.update_dimensions(15, 10);
        assert_eq!(scroll.offset(), 5);
    }

    #[test]
    fn overflow_detection() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(5, 10);
        assert!(!scroll.overflows());

        scroll.update_dimensions(15, 10);
        assert!(scroll.overflows());
    }
}
