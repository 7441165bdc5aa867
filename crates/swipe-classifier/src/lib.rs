//! swipekit swipe classifier
//!
//! Consumes the pointer tracker's callbacks and decides, per registered
//! direction, whether a finished gesture is a swipe:
//!
//! - **Classifier:** distance/ratio thresholds and scroll-edge gating per direction
//! - **Scroll:** the host capability answering scroll-position queries
//! - **Surface:** fans one gesture session out to every direction on a surface
//! - **Registry:** arena of bound surfaces keyed by [`SurfaceId`]
//!
//! [`SurfaceId`]: swipekit_model::SurfaceId

pub mod classifier;
pub mod registry;
pub mod scroll;
pub mod surface;

pub use classifier::{is_valid_swipe, swipe_deltas, SwipeClassifier};
pub use registry::{BindingOptions, Registration, SwipeRegistry};
pub use scroll::{ScrollQuery, SharedScroll, StaticScroll};
pub use surface::{SwipeHandler, SwipeSignal, SwipeSurface};
