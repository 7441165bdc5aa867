//! swipekit model
//!
//! Defines the data contracts shared by the tracker and the classifier:
//! - **Events:** Normalized mouse/touch pointer events and listener names
//! - **Directions:** The four swipe directions and their fixed parameters
//! - **Surfaces:** Surface identity and scroll metrics
//! - **Traces:** Recorded pointer input in JSONL form
//!
//! All coordinates are surface-local pixels.

pub mod direction;
pub mod event;
pub mod surface;
pub mod trace;

pub use direction::*;
pub use event::*;
pub use surface::*;
pub use trace::*;
