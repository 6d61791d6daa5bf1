#![forbid(unsafe_code)]

//! Dev-mode configuration snapshot.
//!
//! [`DevModeConfig`] is the read side of the mode controller: the render
//! frame carries a copy of it so the containerization wrapper can decide
//! between bare and wrapped rendering without depending on the controller.

/// Global containerization settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DevModeConfig {
    /// Master switch. When false, every element renders bare.
    pub enabled: bool,
    /// Default containerization granularity; individual call sites may
    /// override it in either direction.
    pub detailed_containerization: bool,
}

impl DevModeConfig {
    /// Create a config.
    #[inline]
    pub const fn new(enabled: bool, detailed_containerization: bool) -> Self {
        Self {
            enabled,
            detailed_containerization,
        }
    }

    /// Merge a patch into this config. Returns true if anything changed.
    pub fn apply(&mut self, patch: ConfigPatch) -> bool {
        let before = *self;
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(detailed) = patch.detailed_containerization {
            self.detailed_containerization = detailed;
        }
        *self != before
    }
}

/// Partial update for [`DevModeConfig`]. Unset fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigPatch {
    pub enabled: Option<bool>,
    pub detailed_containerization: Option<bool>,
}

impl ConfigPatch {
    /// An empty patch.
    #[inline]
    pub const fn new() -> Self {
        Self {
            enabled: None,
            detailed_containerization: None,
        }
    }

    /// Set the master switch.
    #[inline]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Set the default granularity.
    #[inline]
    pub const fn detailed(mut self, detailed: bool) -> Self {
        self.detailed_containerization = Some(detailed);
        self
    }
}
