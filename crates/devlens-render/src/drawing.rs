#![forbid(unsafe_code)]

//! Drawing helpers used by the overlay.

use devlens_core::geometry::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::buffer::Buffer;
use crate::cell::{Cell, Style};

/// Draw a text span at the given position, clipped at `max_x` (exclusive).
///
/// Returns the x position after the last drawn grapheme. Wide graphemes
/// that would cross `max_x` are not drawn.
pub fn draw_text(buf: &mut Buffer, mut x: u16, y: u16, content: &str, style: Style, max_x: u16) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x + w as u16 > max_x {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = Cell::from_char(c);
            cell.apply_style(style);
            buf.set(x, y, cell);
        }
        x = x.saturating_add(w as u16);
    }
    x
}

/// Apply a style to every cell in a rectangular area, preserving content.
pub fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.apply_style(style);
            }
        }
    }
}

/// Draw a single-line box outline around `rect`.
///
/// Rectangles narrower or shorter than 2 cells are skipped.
pub fn draw_rect_outline(buf: &mut Buffer, rect: Rect, style: Style) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    let mut put = |x: u16, y: u16, ch: char| {
        let mut cell = Cell::from_char(ch);
        cell.apply_style(style);
        buf.set(x, y, cell);
    };

    put(rect.x, rect.y, '┌');
    put(right, rect.y, '┐');
    put(rect.x, bottom, '└');
    put(right, bottom, '┘');
    for x in rect.x + 1..right {
        put(x, rect.y, '─');
        put(x, bottom, '─');
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, '│');
        put(right, y, '│');
    }
}
