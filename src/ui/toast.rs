//! Toast notifications (brief pop-up messages).

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{Toast, ToastKind};

/// Render the toast near the top of the screen, over everything else.
pub fn render_toast(f: &mut Frame, area: Rect, toast: &Toast) {
    let max_width = (area.width as usize).min(80);
    let toast_width = (toast.message.chars().count() + 6).min(max_width) as u16;
    let toast_height = 3;

    let toast_x = (area.width.saturating_sub(toast_width)) / 2;
    let toast_area = Rect {
        x: area.x + toast_x,
        y: area.y + 2,
        width: toast_width,
        height: toast_height.min(area.height),
    };

    f.render_widget(Clear, toast_area);

    let (icon, color) = match toast.kind {
        ToastKind::Success => ("✓ ", Color::Green),
        ToastKind::Error => ("✗ ", Color::Red),
    };

    let line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(toast.message.as_str()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    f.render_widget(
        Paragraph::new(vec![line])
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        toast_area,
    );
}
