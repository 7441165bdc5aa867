//! Surface identity and scroll metrics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a bound surface in a registry arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(pub usize);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Scroll position of a scrollable region, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Current scroll offset from the top.
    pub scroll_top: f64,
    /// Full height of the scrollable content.
    pub content_height: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, content_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            content_height,
            viewport_height,
        }
    }

    /// Content that fits the viewport, scrolled to the top.
    pub fn unscrollable(viewport_height: f64) -> Self {
        Self::new(0.0, viewport_height, viewport_height)
    }

    pub fn can_scroll_up(&self) -> bool {
        self.scroll_top > 0.0
    }

    pub fn can_scroll_down(&self) -> bool {
        self.content_height - self.viewport_height - self.scroll_top > 0.0
    }

    pub fn edges(&self) -> EdgeState {
        EdgeState {
            at_top_edge: !self.can_scroll_up(),
            at_bottom_edge: !self.can_scroll_down(),
        }
    }
}

/// Scroll-edge snapshot taken when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeState {
    pub at_top_edge: bool,
    pub at_bottom_edge: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_edges_mid_content() {
        let metrics = ScrollMetrics::new(200.0, 2000.0, 800.0);
        assert!(metrics.can_scroll_up());
        assert!(metrics.can_scroll_down());
        assert_eq!(
            metrics.edges(),
            EdgeState {
                at_top_edge: false,
                at_bottom_edge: false
            }
        );
    }

    #[test]
    fn test_scroll_edges_at_bottom() {
        let metrics = ScrollMetrics::new(1200.0, 2000.0, 800.0);
        assert!(!metrics.can_scroll_down());
        assert!(metrics.edges().at_bottom_edge);
        assert!(!metrics.edges().at_top_edge);
    }

    #[test]
    fn test_unscrollable_is_at_both_edges() {
        let edges = ScrollMetrics::unscrollable(600.0).edges();
        assert!(edges.at_top_edge && edges.at_bottom_edge);
    }
}
