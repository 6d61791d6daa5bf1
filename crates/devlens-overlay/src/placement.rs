#![forbid(unsafe_code)]

//! Anchored popover placement.
//!
//! The popover prefers the target's bottom-right corner. Each axis flips
//! independently (above / to the left) when the preferred side would
//! overflow the viewport, and the result is clamped to a one-cell viewport
//! margin either way.

use devlens_core::geometry::Rect;

/// Margin kept between the popover and the viewport edges.
const VIEWPORT_MARGIN: u16 = 1;

/// Compute the popover rectangle anchored to `target` inside `viewport`.
///
/// The returned rectangle may be smaller than `width`/`height` when the
/// viewport itself cannot fit the popover.
pub fn place_popover(target: Rect, width: u16, height: u16, viewport: Rect) -> Rect {
    let usable = viewport.shrink(VIEWPORT_MARGIN);
    let width = width.min(usable.width);
    let height = height.min(usable.height);

    // Preferred: top-left of the popover at the target's bottom-right.
    let x = if target.right().saturating_add(width) <= usable.right() {
        target.right()
    } else {
        // Flip to the left of the target.
        target.left().saturating_sub(width)
    };
    let y = if target.bottom().saturating_add(height) <= usable.bottom() {
        target.bottom()
    } else {
        // Flip above the target.
        target.top().saturating_sub(height)
    };

    let x = x.clamp(usable.left(), usable.right().saturating_sub(width).max(usable.left()));
    let y = y.clamp(usable.top(), usable.bottom().saturating_sub(height).max(usable.top()));

    Rect::new(x, y, width, height)
}
