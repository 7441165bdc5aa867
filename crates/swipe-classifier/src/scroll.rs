//! Scroll-position queries.

use std::cell::Cell;
use std::rc::Rc;

use swipekit_model::ScrollMetrics;

/// Host capability describing the scrollable region behind a surface.
///
/// Queried, never mutated.
pub trait ScrollQuery {
    /// Current scroll offset, content height, and viewport height.
    fn metrics(&self) -> ScrollMetrics;

    /// Whether input comes from a desktop (non-touch-primary) context.
    fn is_desktop(&self) -> bool;

    fn can_scroll_up(&self) -> bool {
        self.metrics().can_scroll_up()
    }

    fn can_scroll_down(&self) -> bool {
        self.metrics().can_scroll_down()
    }
}

/// Fixed scroll state, for hosts without a scrollable region and for replay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StaticScroll {
    pub metrics: ScrollMetrics,
    pub desktop: bool,
}

impl StaticScroll {
    pub fn new(metrics: ScrollMetrics, desktop: bool) -> Self {
        Self { metrics, desktop }
    }
}

impl ScrollQuery for StaticScroll {
    fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn is_desktop(&self) -> bool {
        self.desktop
    }
}

/// Scroll state the host updates as the region scrolls.
///
/// Clones share the same state, so the host keeps one handle and gives
/// another to the registry.
#[derive(Debug, Clone, Default)]
pub struct SharedScroll {
    metrics: Rc<Cell<ScrollMetrics>>,
    desktop: Rc<Cell<bool>>,
}

impl SharedScroll {
    pub fn new(metrics: ScrollMetrics, desktop: bool) -> Self {
        Self {
            metrics: Rc::new(Cell::new(metrics)),
            desktop: Rc::new(Cell::new(desktop)),
        }
    }

    pub fn set_metrics(&self, metrics: ScrollMetrics) {
        self.metrics.set(metrics);
    }

    pub fn scroll_to(&self, scroll_top: f64) {
        let mut metrics = self.metrics.get();
        metrics.scroll_top = scroll_top;
        self.metrics.set(metrics);
    }

    pub fn set_desktop(&self, desktop: bool) {
        self.desktop.set(desktop);
    }
}

impl ScrollQuery for SharedScroll {
    fn metrics(&self) -> ScrollMetrics {
        self.metrics.get()
    }

    fn is_desktop(&self) -> bool {
        self.desktop.get()
    }
}
