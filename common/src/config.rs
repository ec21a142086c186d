use std::time::Duration;

/// Timing knobs for one collection run.
///
/// The defaults are politeness delays and load waits tuned for the live
/// site; tests shrink them to zero.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub grid_timeout: Duration,
    pub card_timeout: Duration,
    pub grid_settle: Duration,
    pub core_timeout: Duration,
    pub pre_scan_settle: Duration,
    pub scroll_step_px: u32,
    pub scroll_settle: Duration,
    pub max_scrolls: u32,
    pub scroll_into_view_settle: Duration,
    pub post_click_settle: Duration,
    pub product_delay: Duration,
    pub category_delay: Duration,
    pub phase_delay: Duration,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            grid_timeout: Duration::from_secs(15),
            card_timeout: Duration::from_secs(10),
            grid_settle: Duration::from_secs(3),
            core_timeout: Duration::from_secs(10),
            pre_scan_settle: Duration::from_secs(2),
            scroll_step_px: 500,
            scroll_settle: Duration::from_secs(2),
            max_scrolls: 10,
            scroll_into_view_settle: Duration::from_secs(2),
            post_click_settle: Duration::from_secs(3),
            product_delay: Duration::from_secs(3),
            category_delay: Duration::from_secs(3),
            phase_delay: Duration::from_secs(3),
        }
    }
}

impl CollectorConfig {
    /// Every wait and delay set to zero, keeping the scroll budget.
    pub fn immediate() -> Self {
        Self {
            grid_timeout: Duration::ZERO,
            card_timeout: Duration::ZERO,
            grid_settle: Duration::ZERO,
            core_timeout: Duration::ZERO,
            pre_scan_settle: Duration::ZERO,
            scroll_settle: Duration::ZERO,
            scroll_into_view_settle: Duration::ZERO,
            post_click_settle: Duration::ZERO,
            product_delay: Duration::ZERO,
            category_delay: Duration::ZERO,
            phase_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    pub fn with_max_scrolls(mut self, max_scrolls: u32) -> Self {
        self.max_scrolls = max_scrolls;
        self
    }

    /// Overrides the delays between products and between categories.
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.product_delay = delay;
        self.category_delay = delay;
        self
    }
}
