#![forbid(unsafe_code)]

//! Inspector overlay widget.
//!
//! Renders after the host's widgets: a hover outline, a selection outline,
//! and a metadata popover anchored to the selected boundary. Metadata comes
//! from the registry; a selected id missing from the registry degrades to an
//! "unregistered element" card instead of failing.

use devlens_core::geometry::Rect;
use devlens_mode::ModeSnapshot;
use devlens_registry::{RegistryIndex, UsageRecord};
use devlens_render::cell::{Attrs, Cell, Rgb, Style};
use devlens_render::drawing::{draw_rect_outline, draw_text};
use devlens_render::frame::{BoundaryEntry, Frame};
use devlens_render::Widget;
use unicode_width::UnicodeWidthStr;

use crate::placement::place_popover;

const HOVER_COLOR: Rgb = Rgb::new(90, 170, 220);
const SELECT_COLOR: Rgb = Rgb::new(250, 200, 90);
const POPOVER_BG: Rgb = Rgb::new(24, 24, 36);
const POPOVER_FG: Rgb = Rgb::new(220, 220, 230);
const POPOVER_MAX_WIDTH: u16 = 44;
const FALLBACK_TITLE: &str = "unregistered element";

/// The dev-mode inspection overlay.
///
/// Holds only ids (a weak view of the boundaries); geometry is resolved
/// against the frame at render time.
#[derive(Debug)]
pub struct DevOverlay<'a> {
    registry: &'a RegistryIndex,
    snapshot: ModeSnapshot,
}

impl<'a> DevOverlay<'a> {
    /// Create the overlay for one render pass.
    pub fn new(registry: &'a RegistryIndex, snapshot: ModeSnapshot) -> Self {
        Self { registry, snapshot }
    }

    /// Popover content. Call-site name/description overrides beat the
    /// registry values; an unregistered id degrades to a fallback card.
    fn popover_lines(&self, record: Option<&UsageRecord>, entry: &BoundaryEntry) -> Vec<String> {
        let mut lines = Vec::new();
        match record {
            Some(record) => {
                lines.push(entry.name.clone().unwrap_or_else(|| record.name.clone()));
                lines.push(format!("id: {}", record.id));
                lines.push(format!("definition: {}", record.definition_id));
                lines.push(format!("category: {}", record.category));
                let description = entry
                    .description
                    .clone()
                    .unwrap_or_else(|| record.description.clone());
                if !description.is_empty() {
                    lines.push(description);
                }
                if !record.semantic_tags.is_empty() {
                    lines.push(format!("tags: {}", record.semantic_tags.join(", ")));
                }
                if !record.file_path.is_empty() {
                    lines.push(format!("file: {}", record.file_path));
                }
            }
            None => {
                lines.push(
                    entry
                        .name
                        .clone()
                        .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
                );
                lines.push(format!("id: {}", entry.id));
                lines.push(format!("definition: {}", entry.definition));
                if let Some(description) = &entry.description {
                    lines.push(description.clone());
                }
            }
        }
        lines
    }
}

impl Widget for DevOverlay<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if !frame.config().enabled {
            return;
        }

        // Resolve boundary data before touching the buffer; entries are
        // borrowed from the frame.
        let selected = self
            .snapshot
            .selected
            .as_ref()
            .and_then(|id| frame.boundary_of(id))
            .cloned();
        let hovered = self
            .snapshot
            .hovered
            .as_ref()
            .filter(|id| Some(*id) != self.snapshot.selected.as_ref())
            .and_then(|id| frame.boundary_of(id))
            .map(|entry| entry.rect);

        if let Some(rect) = hovered {
            draw_rect_outline(
                frame.buffer_mut(),
                rect,
                Style::new().fg(HOVER_COLOR).attrs(Attrs::DIM),
            );
        }

        let Some(entry) = selected else {
            return;
        };
        let target = entry.rect;
        draw_rect_outline(
            frame.buffer_mut(),
            target,
            Style::new().fg(SELECT_COLOR).attrs(Attrs::BOLD),
        );

        let record = self
            .snapshot
            .selected
            .as_ref()
            .and_then(|id| self.registry.get(id));
        if record.is_none() {
            if let Some(id) = self.snapshot.selected.as_ref() {
                tracing::warn!(id = %id, "selected element is not in the registry");
            }
        }

        let lines = self.popover_lines(record, &entry);
        let content_width = lines
            .iter()
            .map(|line| UnicodeWidthStr::width(line.as_str()) as u16)
            .max()
            .unwrap_or(0);
        let width = (content_width + 2).min(POPOVER_MAX_WIDTH);
        let height = lines.len() as u16 + 2;

        let popover = place_popover(target, width, height, area);
        let mut bg = Cell::from_char(' ');
        bg.apply_style(Style::new().bg(POPOVER_BG));
        frame.buffer_mut().fill(popover, bg);
        draw_rect_outline(
            frame.buffer_mut(),
            popover,
            Style::new().fg(SELECT_COLOR).bg(POPOVER_BG),
        );

        let inner = popover.shrink(1);
        let text = Style::new().fg(POPOVER_FG).bg(POPOVER_BG);
        for (i, line) in lines.iter().enumerate() {
            let y = inner.y.saturating_add(i as u16);
            if y >= inner.bottom() {
                break;
            }
            draw_text(frame.buffer_mut(), inner.x, y, line, text, inner.right());
        }
    }
}
