#![forbid(unsafe_code)]

//! Core types for devlens: geometry, input events, element identity, and
//! the dev-mode configuration snapshot shared by the render surface.

pub mod config;
pub mod event;
pub mod geometry;
pub mod ident;

pub use config::{ConfigPatch, DevModeConfig};
pub use event::{Event, KeyCode, KeyEvent, Modifiers, PointerButton, PointerEvent, PointerKind};
pub use geometry::Rect;
pub use ident::{Identity, UsageId};
