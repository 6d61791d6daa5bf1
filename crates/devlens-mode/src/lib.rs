#![forbid(unsafe_code)]

//! Runtime dev-mode state.
//!
//! [`ModeController`] is the single source of truth for whether and how
//! containerization renders, and for the current selection and hover. It is
//! constructed once at application start and injected into consumers; there
//! is no ambient global, so tests instantiate their own.
//!
//! The model is single-threaded and cooperative: every mutation runs to
//! completion and notifies subscribers synchronously with the new snapshot
//! before the next event is processed. Notifications fire only when state
//! actually changed.
//!
//! # Usage
//!
//! ```
//! use devlens_core::config::ConfigPatch;
//! use devlens_core::ident::UsageId;
//! use devlens_mode::ModeController;
//!
//! let mut modes = ModeController::new();
//! let sub = modes.subscribe(|snapshot| {
//!     println!("selected: {:?}", snapshot.selected);
//! });
//!
//! modes.set_config(ConfigPatch::new().enabled(true));
//! modes.select(UsageId::new("client-table"));
//! modes.unsubscribe(sub);
//! ```

use std::fmt;

use devlens_core::config::{ConfigPatch, DevModeConfig};
use devlens_core::ident::UsageId;

/// Identifier of one subscription.
pub type SubId = u64;

/// Immutable view of the controller state, passed to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModeSnapshot {
    pub config: DevModeConfig,
    /// At most one selection at a time.
    pub selected: Option<UsageId>,
    /// Transient hover; independent of the selection.
    pub hovered: Option<UsageId>,
}

type Callback = Box<dyn FnMut(&ModeSnapshot)>;

/// Single source of truth for dev-mode rendering and selection state.
pub struct ModeController {
    config: DevModeConfig,
    selected: Option<UsageId>,
    hovered: Option<UsageId>,
    subscribers: Vec<(SubId, Callback)>,
    next_sub: SubId,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeController")
            .field("config", &self.config)
            .field("selected", &self.selected)
            .field("hovered", &self.hovered)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ModeController {
    /// Create a controller with containerization disabled.
    pub fn new() -> Self {
        Self::with_config(DevModeConfig::default())
    }

    /// Create a controller with the given initial config.
    pub fn with_config(config: DevModeConfig) -> Self {
        Self {
            config,
            selected: None,
            hovered: None,
            subscribers: Vec::new(),
            next_sub: 1,
        }
    }

    /// Current global settings.
    #[inline]
    pub fn config(&self) -> DevModeConfig {
        self.config
    }

    /// Currently selected id, if any.
    #[inline]
    pub fn selected(&self) -> Option<&UsageId> {
        self.selected.as_ref()
    }

    /// Currently hovered id, if any.
    #[inline]
    pub fn hovered(&self) -> Option<&UsageId> {
        self.hovered.as_ref()
    }

    /// A snapshot of the full state.
    pub fn snapshot(&self) -> ModeSnapshot {
        ModeSnapshot {
            config: self.config,
            selected: self.selected.clone(),
            hovered: self.hovered.clone(),
        }
    }

    /// Merge-update the global settings.
    pub fn set_config(&mut self, patch: ConfigPatch) {
        if self.config.apply(patch) {
            tracing::debug!(
                enabled = self.config.enabled,
                detailed = self.config.detailed_containerization,
                "dev mode config changed"
            );
            self.notify();
        }
    }

    /// Select an element. Replaces any previous selection.
    pub fn select(&mut self, id: UsageId) {
        if self.selected.as_ref() == Some(&id) {
            return;
        }
        tracing::trace!(id = %id, "element selected");
        self.selected = Some(id);
        self.notify();
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            tracing::trace!("selection cleared");
            self.notify();
        }
    }

    /// Report the pointer entering an element's boundary.
    pub fn hover(&mut self, id: UsageId) {
        if self.hovered.as_ref() == Some(&id) {
            return;
        }
        self.hovered = Some(id);
        self.notify();
    }

    /// Report the pointer leaving all boundaries.
    pub fn clear_hover(&mut self) {
        if self.hovered.take().is_some() {
            self.notify();
        }
    }

    /// Register for change notification. The callback runs synchronously on
    /// every state mutation with the new snapshot.
    pub fn subscribe(&mut self, callback: impl FnMut(&ModeSnapshot) + 'static) -> SubId {
        let id = self.next_sub;
        self.next_sub += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions.
    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        let snapshot = ModeSnapshot {
            config: self.config,
            selected: self.selected.clone(),
            hovered: self.hovered.clone(),
        };
        for (_, callback) in &mut self.subscribers {
            callback(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(
        modes: &mut ModeController,
    ) -> (SubId, Rc<RefCell<Vec<ModeSnapshot>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let sub = modes.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));
        (sub, log)
    }

    #[test]
    fn set_config_notifies_with_merged_snapshot() {
        let mut modes = ModeController::new();
        let (_, log) = recording(&mut modes);

        modes.set_config(ConfigPatch::new().enabled(true));
        modes.set_config(ConfigPatch::new().detailed(true));

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert!(log[0].config.enabled);
        assert!(!log[0].config.detailed_containerization);
        assert!(log[1].config.enabled);
        assert!(log[1].config.detailed_containerization);
    }

    #[test]
    fn unchanged_config_does_not_notify() {
        let mut modes = ModeController::with_config(DevModeConfig::new(true, false));
        let (_, log) = recording(&mut modes);

        modes.set_config(ConfigPatch::new().enabled(true));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn select_replaces_previous_selection() {
        let mut modes = ModeController::new();
        modes.select(UsageId::new("a"));
        modes.select(UsageId::new("b"));
        assert_eq!(modes.selected(), Some(&UsageId::new("b")));
    }

    #[test]
    fn reselecting_same_id_does_not_notify() {
        let mut modes = ModeController::new();
        let (_, log) = recording(&mut modes);
        modes.select(UsageId::new("a"));
        modes.select(UsageId::new("a"));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn clear_selection_is_idempotent() {
        let mut modes = ModeController::new();
        let (_, log) = recording(&mut modes);
        modes.select(UsageId::new("a"));
        modes.clear_selection();
        modes.clear_selection();
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(modes.selected(), None);
    }

    #[test]
    fn hover_is_independent_of_selection() {
        let mut modes = ModeController::new();
        modes.select(UsageId::new("selected"));
        modes.hover(UsageId::new("hovered"));
        assert_eq!(modes.selected(), Some(&UsageId::new("selected")));
        assert_eq!(modes.hovered(), Some(&UsageId::new("hovered")));

        modes.clear_hover();
        assert_eq!(modes.selected(), Some(&UsageId::new("selected")));
        assert_eq!(modes.hovered(), None);
    }

    #[test]
    fn snapshot_reflects_current_state() {
        let mut modes = ModeController::with_config(DevModeConfig::new(true, true));
        modes.select(UsageId::new("x"));
        let snapshot = modes.snapshot();
        assert!(snapshot.config.enabled);
        assert_eq!(snapshot.selected, Some(UsageId::new("x")));
        assert_eq!(snapshot.hovered, None);
    }

    #[test]
    fn subscribers_see_every_mutation_in_order() {
        let mut modes = ModeController::new();
        let (_, log) = recording(&mut modes);

        modes.select(UsageId::new("a"));
        modes.hover(UsageId::new("b"));
        modes.clear_selection();

        let log = log.borrow();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].selected, Some(UsageId::new("a")));
        assert_eq!(log[1].hovered, Some(UsageId::new("b")));
        assert_eq!(log[2].selected, None);
        assert_eq!(log[2].hovered, Some(UsageId::new("b")));
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut modes = ModeController::new();
        let (sub, log) = recording(&mut modes);

        modes.select(UsageId::new("a"));
        assert!(modes.unsubscribe(sub));
        modes.select(UsageId::new("b"));

        assert_eq!(log.borrow().len(), 1);
        assert!(!modes.unsubscribe(sub));
        assert_eq!(modes.subscriber_count(), 0);
    }

    #[test]
    fn multiple_subscribers_all_fire() {
        let mut modes = ModeController::new();
        let (_, first) = recording(&mut modes);
        let (_, second) = recording(&mut modes);

        modes.hover(UsageId::new("x"));
        assert_eq!(first.borrow().len(), 1);
        assert_eq!(second.borrow().len(), 1);
        assert_eq!(modes.subscriber_count(), 2);
    }

    #[test]
    fn sub_ids_are_unique() {
        let mut modes = ModeController::new();
        let a = modes.subscribe(|_| {});
        let b = modes.subscribe(|_| {});
        assert_ne!(a, b);
    }
}
