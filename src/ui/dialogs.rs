//! Confirmation modal and the quick-action palette.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::layout::centered;
use crate::model::{ConfirmState, ConfirmVariant, PaletteState};

/// Centered yes/no modal. The variant picks the border color: red for
/// destructive actions, yellow for state changes.
pub fn render_confirm(f: &mut Frame, area: Rect, confirm: &ConfirmState) {
    let border = match confirm.variant {
        ConfirmVariant::Danger => Color::Red,
        ConfirmVariant::Warning => Color::Yellow,
    };

    let text = format!(
        "{}\n\n[Enter] {}    [Esc] Cancelar",
        confirm.message, confirm.confirm_label
    );
    let height = 7 + (confirm.message.chars().count() as u16 / 50);
    let dialog_area = centered(area, 56, height);

    let dialog = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    confirm.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(border)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, dialog_area);
    f.render_widget(dialog, dialog_area);
}

/// Quick-action palette: the keyboard stand-in for the action rail.
pub fn render_palette(f: &mut Frame, area: Rect, palette: &PaletteState) {
    let items: Vec<ListItem> = palette
        .actions
        .iter()
        .map(|action| ListItem::new(Span::raw(action.label())))
        .collect();

    let height = (palette.actions.len() as u16 + 2).min(14);
    let menu_area = centered(area, 40, height);

    let mut state = ListState::default();
    state.select(Some(palette.selected));

    let menu = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Acciones Rápidas")
                .border_style(Style::default().fg(Color::Green)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    f.render_widget(Clear, menu_area);
    f.render_stateful_widget(menu, menu_area, &mut state);
}
