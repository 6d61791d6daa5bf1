#![forbid(unsafe_code)]

//! Pointer/key handling for boundary selection.
//!
//! State machine: Idle, Hovering(id), Selected(id). Hover is independent of
//! selection; both may point at different elements at once. Transitions:
//! pointer move over a boundary hovers it, leaving all boundaries clears
//! hover; a left click selects the innermost selectable boundary under the
//! pointer (the click does not propagate past it) or clears the selection
//! when it lands on no selectable boundary; `Esc` clears explicitly; a
//! selected or hovered boundary missing from the latest frame is cleared by
//! [`reconcile`].

use devlens_core::event::{KeyCode, KeyEvent, PointerEvent, PointerKind, PointerButton};
use devlens_mode::ModeController;
use devlens_render::frame::Frame;

/// Route a pointer event to the mode controller.
///
/// No-op while dev mode is disabled.
pub fn handle_pointer(event: &PointerEvent, frame: &Frame, modes: &mut ModeController) {
    if !modes.config().enabled {
        return;
    }
    match event.kind {
        PointerKind::Moved => match frame.boundary_at(event.x, event.y) {
            Some(boundary) => modes.hover(boundary.id.clone()),
            None => modes.clear_hover(),
        },
        PointerKind::Down(PointerButton::Left) => {
            match frame.selectable_boundary_at(event.x, event.y) {
                Some(boundary) => modes.select(boundary.id.clone()),
                None => modes.clear_selection(),
            }
        }
        _ => {}
    }
}

/// Route a key event to the mode controller. `Esc` clears the selection.
pub fn handle_key(event: &KeyEvent, modes: &mut ModeController) {
    if !modes.config().enabled {
        return;
    }
    if event.code == KeyCode::Esc {
        modes.clear_selection();
    }
}

/// Drop selection/hover state whose boundary unmounted.
///
/// Call after each render pass: boundaries are re-registered every pass, so
/// an id absent from the frame no longer exists on screen.
pub fn reconcile(frame: &Frame, modes: &mut ModeController) {
    if let Some(selected) = modes.selected().cloned() {
        if !frame.contains_boundary(&selected) {
            tracing::trace!(id = %selected, "selected boundary unmounted");
            modes.clear_selection();
        }
    }
    if let Some(hovered) = modes.hovered().cloned() {
        if !frame.contains_boundary(&hovered) {
            modes.clear_hover();
        }
    }
}
