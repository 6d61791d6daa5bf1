#![forbid(unsafe_code)]

//! Minimal render surface for devlens.
//!
//! devlens is renderer-agnostic: hosts embed it by rendering widgets into a
//! [`Frame`], which couples a cell [`Buffer`] with the dev-mode config and
//! the containerization boundaries registered during the pass.

pub mod buffer;
pub mod cell;
pub mod drawing;
pub mod frame;

pub use buffer::Buffer;
pub use cell::{Attrs, Cell, Rgb, Style};
pub use frame::{BoundaryEntry, Frame};

use devlens_core::geometry::Rect;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a [`Frame`] within a given [`Rect`].
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}
