#![forbid(unsafe_code)]

//! Selection and inspection overlay.
//!
//! The overlay turns pointer interaction over containerization boundaries
//! into selection state, computes an anchored popover position, and renders
//! registry metadata for the selected element on top of the host UI.
//!
//! Event flow per frame:
//! 1. the host renders its (containerized) widgets into a [`Frame`],
//! 2. [`selection::reconcile`] clears state for unmounted boundaries,
//! 3. input events go through [`selection::handle_pointer`] /
//!    [`selection::handle_key`],
//! 4. [`DevOverlay`] renders last, over everything.

pub mod inspector;
pub mod placement;
pub mod selection;

pub use inspector::DevOverlay;
pub use placement::place_popover;
