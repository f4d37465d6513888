//! Swipeable card lists and the pagination bar.
//!
//! Each card is a bordered block with two content lines. The card content
//! shifts horizontally with the swipe offset (points scaled down to cells),
//! revealing the action panel on the uncovered side. Without gestures the
//! panel labels render inline as persistent hints instead.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::logic::swipe::{SwipeCaps, SwipeSide, POINTS_PER_CELL};
use crate::model::{RowHit, UiModel};

pub const CARD_HEIGHT: u16 = 4;

/// Renderable card: two lines of content plus its swipe configuration.
pub struct CardRow {
    pub id: String,
    pub title: Line<'static>,
    pub detail: Line<'static>,
    pub caps: SwipeCaps,
    pub action_width: i32,
    /// Label of the left (primary) panel, e.g. "✓ Pagada".
    pub primary: &'static str,
    /// Label of the right (secondary) panel, e.g. "✗ Cancelar".
    pub secondary: &'static str,
}

fn row_offset_cells(ui: &UiModel, row: &CardRow) -> i32 {
    if let Some(drag) = ui.drag.as_ref() {
        if drag.row_id == row.id {
            return drag.tracker.offset() / POINTS_PER_CELL;
        }
    }
    match ui.active_swipe.side_of(&row.id) {
        Some(SwipeSide::Left) => row.action_width / POINTS_PER_CELL,
        Some(SwipeSide::Right) => -row.action_width / POINTS_PER_CELL,
        None => 0,
    }
}

/// Render the rows top-down and return their screen regions for mouse
/// hit-testing. `cursor` highlights the keyboard selection.
pub fn render_cards(
    f: &mut Frame,
    area: Rect,
    rows: &[CardRow],
    cursor: usize,
    ui: &UiModel,
) -> Vec<RowHit> {
    let mut hits = Vec::new();
    let mut y = area.y;

    for (index, row) in rows.iter().enumerate() {
        if y + CARD_HEIGHT > area.bottom() {
            break;
        }
        let card_area = Rect::new(area.x, y, area.width, CARD_HEIGHT);
        let offset = row_offset_cells(ui, row);
        let selected = index == cursor;

        let border_style = if selected {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(card_area);
        f.render_widget(block, card_area);

        // Revealed action panel behind the shifted content.
        if offset > 0 {
            let panel_width = (offset.unsigned_abs() as u16).min(inner.width);
            let panel = Rect::new(inner.x, inner.y, panel_width, inner.height);
            f.render_widget(
                Paragraph::new(row.primary).style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                panel,
            );
        } else if offset < 0 {
            let panel_width = (offset.unsigned_abs() as u16).min(inner.width);
            let panel = Rect::new(
                inner.x + inner.width - panel_width,
                inner.y,
                panel_width,
                inner.height,
            );
            f.render_widget(
                Paragraph::new(row.secondary).style(
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
                panel,
            );
        }

        // Card content, shifted by the swipe offset.
        let content_x = inner.x.saturating_add_signed(offset as i16).min(inner.right());
        let content_width = inner.width.saturating_sub(offset.unsigned_abs() as u16);
        if content_width > 0 {
            let content = Rect::new(content_x, inner.y, content_width, inner.height);
            let mut lines = vec![row.title.clone()];
            if inner.height > 1 {
                lines.push(row.detail.clone());
            }
            f.render_widget(Paragraph::new(lines), content);
        }

        hits.push(RowHit {
            id: row.id.clone(),
            x: card_area.x,
            y: card_area.y,
            width: card_area.width,
            height: card_area.height,
            caps: row.caps,
            action_width: row.action_width,
        });
        y += CARD_HEIGHT;
    }
    hits
}

/// `‹ 1 2 3 ›` control. Ends are dimmed when disabled.
pub fn render_pagination(f: &mut Frame, area: Rect, page: usize, pages: usize) {
    if pages <= 1 || area.height == 0 {
        return;
    }
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);
    let current = Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(
        " ‹ ",
        if page > 0 { enabled } else { disabled },
    )];
    for p in 0..pages {
        let style = if p == page { current } else { enabled };
        spans.push(Span::styled(format!(" {} ", p + 1), style));
    }
    spans.push(Span::styled(
        " › ",
        if page + 1 < pages { enabled } else { disabled },
    ));

    let line = Line::from(spans);
    let width = line.width() as u16;
    let bar = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y,
        width.min(area.width),
        1,
    );
    f.render_widget(Paragraph::new(line), bar);
}

/// Truncate a string to `max` display columns, appending an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        if out.width() + 2 > max {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_width() {
        assert_eq!(truncate("corto", 10), "corto");
        let cut = truncate("Gallina Hatch Reproductora", 10);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 10);
    }
}
