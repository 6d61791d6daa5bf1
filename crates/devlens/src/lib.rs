#![forbid(unsafe_code)]

//! devlens public facade crate.
//!
//! devlens wraps a host UI's widgets in identification/selection boundaries
//! driven by a static usage registry, and renders an inspector overlay for
//! whatever the user points at. This crate re-exports the common types from
//! the internal crates and offers a lightweight prelude.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use devlens_core::config::{ConfigPatch, DevModeConfig};
pub use devlens_core::event::{
    Event, KeyCode, KeyEvent, Modifiers, PointerButton, PointerEvent, PointerKind,
};
pub use devlens_core::geometry::Rect;
pub use devlens_core::ident::{Identity, UsageId};

// --- Render re-exports -----------------------------------------------------

pub use devlens_render::buffer::Buffer;
pub use devlens_render::cell::{Attrs, Cell, Rgb, Style};
pub use devlens_render::frame::{BoundaryEntry, Frame};
pub use devlens_render::Widget;

// --- Registry re-exports ---------------------------------------------------

pub use devlens_registry::{
    Category, Partition, RegistryError, RegistryIndex, RegistryStats, UsageRecord,
};

// --- Mode re-exports -------------------------------------------------------

pub use devlens_mode::{ModeController, ModeSnapshot, SubId};

// --- Containerization re-exports -------------------------------------------

pub use devlens_contain::{decide, ContainError, Contained, DevProps, RenderPlan};

// --- Overlay re-exports ----------------------------------------------------

pub use devlens_overlay::inspector::DevOverlay;
pub use devlens_overlay::placement::place_popover;
pub use devlens_overlay::selection;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for devlens hosts.
#[derive(Debug)]
pub enum Error {
    /// Registry load or build failure.
    Registry(RegistryError),
    /// Containerization decision failure.
    Contain(ContainError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry(err) => write!(f, "{err}"),
            Self::Contain(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Registry(err) => Some(err),
            Self::Contain(err) => Some(err),
        }
    }
}

impl From<RegistryError> for Error {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}

impl From<ContainError> for Error {
    fn from(err: ContainError) -> Self {
        Self::Contain(err)
    }
}

/// Standard result type for devlens APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Category, ConfigPatch, Contained, DevModeConfig, DevOverlay, DevProps, Error, Event,
        Frame, Identity, ModeController, Partition, PointerEvent, Rect, RegistryIndex, Result,
        UsageId, UsageRecord, Widget,
    };

    pub use crate::{contain, core, mode, overlay, registry, render};
}

pub use devlens_contain as contain;
pub use devlens_core as core;
pub use devlens_mode as mode;
pub use devlens_overlay as overlay;
pub use devlens_registry as registry;
pub use devlens_render as render;
