#![forbid(unsafe_code)]

//! Render frame with containerization boundaries.
//!
//! A [`Frame`] is one render pass: a cell buffer, the dev-mode config
//! current at render time, and the boundaries registered by containerized
//! widgets during the pass. Boundaries are rebuilt every pass; a boundary
//! that stops being registered has unmounted.
//!
//! Hit testing resolves the innermost boundary at a point. Boundaries
//! register outermost-first (a wrapper registers before rendering its
//! children), so the last containing registration wins.

use devlens_core::config::DevModeConfig;
use devlens_core::geometry::Rect;
use devlens_core::ident::UsageId;

use crate::buffer::Buffer;

/// One containerization boundary registered during a render pass.
///
/// The overlay holds only the id, never the rendered node; entries live
/// exactly as long as the frame that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryEntry {
    /// Registry id of the element usage.
    pub id: UsageId,
    /// Definition (primitive/template) the usage instantiates.
    pub definition: &'static str,
    /// Call-site display-name override for the inspector.
    pub name: Option<String>,
    /// Call-site description override for the inspector.
    pub description: Option<String>,
    /// Whether clicking this boundary selects it.
    pub selectable: bool,
    /// On-screen bounds at render time.
    pub rect: Rect,
}

/// One render pass over a buffer.
#[derive(Debug)]
pub struct Frame {
    buffer: Buffer,
    config: DevModeConfig,
    boundaries: Vec<BoundaryEntry>,
}

impl Frame {
    /// Create a frame with a default (disabled) dev-mode config.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(width, height, DevModeConfig::default())
    }

    /// Create a frame carrying the given dev-mode config snapshot.
    pub fn with_config(width: u16, height: u16, config: DevModeConfig) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            config,
            boundaries: Vec::new(),
        }
    }

    /// Frame width in cells.
    #[inline]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Frame height in cells.
    #[inline]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// The full frame area.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.buffer.bounds()
    }

    /// The dev-mode config current at render time.
    #[inline]
    pub fn config(&self) -> DevModeConfig {
        self.config
    }

    /// The cell buffer.
    #[inline]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// The cell buffer, mutably.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Register a containerization boundary for this pass.
    pub fn register_boundary(&mut self, entry: BoundaryEntry) {
        self.boundaries.push(entry);
    }

    /// All boundaries registered so far, in registration order.
    #[inline]
    pub fn boundaries(&self) -> &[BoundaryEntry] {
        &self.boundaries
    }

    /// The innermost boundary containing the point.
    pub fn boundary_at(&self, x: u16, y: u16) -> Option<&BoundaryEntry> {
        self.boundaries
            .iter()
            .rev()
            .find(|entry| entry.rect.contains(x, y))
    }

    /// The innermost *selectable* boundary containing the point.
    ///
    /// A click claimed here does not propagate to outer boundaries.
    pub fn selectable_boundary_at(&self, x: u16, y: u16) -> Option<&BoundaryEntry> {
        self.boundaries
            .iter()
            .rev()
            .find(|entry| entry.selectable && entry.rect.contains(x, y))
    }

    /// The registered bounds and definition of an id, if present this pass.
    pub fn boundary_of(&self, id: &UsageId) -> Option<&BoundaryEntry> {
        self.boundaries.iter().find(|entry| &entry.id == id)
    }

    /// Whether an id was registered this pass.
    #[inline]
    pub fn contains_boundary(&self, id: &UsageId) -> bool {
        self.boundary_of(id).is_some()
    }

    /// Reset the frame for a new pass, keeping size and config.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.boundaries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, rect: Rect, selectable: bool) -> BoundaryEntry {
        BoundaryEntry {
            id: UsageId::new(id),
            definition: "panel",
            name: None,
            description: None,
            selectable,
            rect,
        }
    }

    #[test]
    fn boundary_at_innermost_wins() {
        let mut frame = Frame::new(20, 20);
        frame.register_boundary(entry("outer", Rect::new(0, 0, 20, 20), true));
        frame.register_boundary(entry("inner", Rect::new(5, 5, 5, 5), true));

        assert_eq!(frame.boundary_at(6, 6).unwrap().id, UsageId::new("inner"));
        assert_eq!(frame.boundary_at(1, 1).unwrap().id, UsageId::new("outer"));
        assert!(frame.boundary_at(19, 19).is_some());
    }

    #[test]
    fn boundary_at_misses_outside() {
        let mut frame = Frame::new(20, 20);
        frame.register_boundary(entry("a", Rect::new(0, 0, 5, 5), true));
        assert!(frame.boundary_at(10, 10).is_none());
    }

    #[test]
    fn selectable_lookup_walks_outward() {
        let mut frame = Frame::new(20, 20);
        frame.register_boundary(entry("outer", Rect::new(0, 0, 20, 20), true));
        frame.register_boundary(entry("inner", Rect::new(5, 5, 5, 5), false));

        // Innermost is not selectable; the click falls through to the outer.
        let hit = frame.selectable_boundary_at(6, 6).unwrap();
        assert_eq!(hit.id, UsageId::new("outer"));
    }

    #[test]
    fn selectable_lookup_none_when_no_selectable_ancestor() {
        let mut frame = Frame::new(20, 20);
        frame.register_boundary(entry("a", Rect::new(0, 0, 10, 10), false));
        assert!(frame.selectable_boundary_at(5, 5).is_none());
    }

    #[test]
    fn boundary_of_and_contains() {
        let mut frame = Frame::new(10, 10);
        frame.register_boundary(entry("x", Rect::new(1, 1, 3, 3), true));

        let id = UsageId::new("x");
        assert!(frame.contains_boundary(&id));
        assert_eq!(frame.boundary_of(&id).unwrap().rect, Rect::new(1, 1, 3, 3));
        assert!(!frame.contains_boundary(&UsageId::new("y")));
    }

    #[test]
    fn clear_resets_boundaries_and_buffer() {
        let mut frame = Frame::with_config(10, 10, DevModeConfig::new(true, true));
        frame.register_boundary(entry("x", Rect::new(0, 0, 2, 2), true));
        frame
            .buffer_mut()
            .set(0, 0, crate::cell::Cell::from_char('Q'));

        frame.clear();
        assert!(frame.boundaries().is_empty());
        assert!(frame.buffer().get(0, 0).unwrap().is_blank());
        // Config survives the pass reset.
        assert!(frame.config().enabled);
    }

    #[test]
    fn registration_order_is_preserved() {
        let mut frame = Frame::new(10, 10);
        frame.register_boundary(entry("first", Rect::new(0, 0, 2, 2), true));
        frame.register_boundary(entry("second", Rect::new(2, 0, 2, 2), true));
        let ids: Vec<&str> = frame.boundaries().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    mod property {
        use super::*;
        use proptest::prelude::*;

        fn arb_rect() -> impl Strategy<Value = Rect> {
            (0u16..30, 0u16..30, 1u16..20, 1u16..20)
                .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
        }

        proptest! {
            #[test]
            fn hit_is_last_containing_registration(
                rects in proptest::collection::vec((arb_rect(), any::<bool>()), 1..12),
                x in 0u16..50,
                y in 0u16..50,
            ) {
                let mut frame = Frame::new(50, 50);
                for (i, (rect, selectable)) in rects.iter().enumerate() {
                    frame.register_boundary(entry(&format!("b{i}"), *rect, *selectable));
                }

                let expected = rects
                    .iter()
                    .enumerate()
                    .rev()
                    .find(|(_, (rect, _))| rect.contains(x, y))
                    .map(|(i, _)| UsageId::new(format!("b{i}")));
                prop_assert_eq!(frame.boundary_at(x, y).map(|b| b.id.clone()), expected);

                if let Some(hit) = frame.selectable_boundary_at(x, y) {
                    prop_assert!(hit.selectable);
                    prop_assert!(hit.rect.contains(x, y));
                }
            }
        }
    }
}
