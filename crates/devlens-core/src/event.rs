#![forbid(unsafe_code)]

//! Input events consumed by the selection overlay.
//!
//! The host application owns its own event loop; it forwards pointer and
//! key events to devlens in this renderer-agnostic shape.

bitflags::bitflags! {
    /// Keyboard modifiers active during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

/// A pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// What a pointer event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Button pressed.
    Down(PointerButton),
    /// Button released.
    Up(PointerButton),
    /// Pointer moved with no button change.
    Moved,
    ScrollUp,
    ScrollDown,
}

/// A pointer event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Column of the event.
    pub x: u16,
    /// Row of the event.
    pub y: u16,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a pointer event with no modifiers.
    #[inline]
    pub const fn new(kind: PointerKind, x: u16, y: u16) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::empty(),
        }
    }

    /// Attach modifiers to the event.
    #[inline]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether this is a left-button press.
    #[inline]
    pub const fn is_left_down(&self) -> bool {
        matches!(self.kind, PointerKind::Down(PointerButton::Left))
    }
}

/// A key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Esc,
    Enter,
    Tab,
    /// Function key (1-based).
    F(u8),
}

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event with no modifiers.
    #[inline]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
        }
    }

    /// Attach modifiers to the event.
    #[inline]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// An input event forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Pointer(PointerEvent),
    /// Viewport resized to (width, height).
    Resize(u16, u16),
}
