//! Gallery views: media list and category management.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::cards::{render_pagination, truncate};
use crate::model::Model;
use crate::view;

pub fn render_media_list(f: &mut Frame, area: Rect, model: &Model) {
    let page = view::media_page(model);

    if page.items.is_empty() {
        let empty = Paragraph::new(
            "No hay coincidencias\n\nIntenta ajustar tus términos de búsqueda o filtros de categoría.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = page
        .items
        .iter()
        .map(|media| {
            let favorite = if media.favorite { "★ " } else { "  " };
            let line = Line::from(vec![
                Span::raw(favorite),
                Span::styled(
                    truncate(&media.title, 32),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  [{}]", media.kind.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("  {} / {}", media.category, media.subcategory),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("  ♥ {}", media.likes),
                    Style::default().fg(Color::Magenta),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
    let mut state = ListState::default();
    state.select(Some(model.nav.gallery.selected.min(page.items.len() - 1)));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Medios ({}) — n nuevo · e editar · d eliminar · c categorías ", page.total)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("► ");
    f.render_stateful_widget(list, list_area, &mut state);

    if area.height > 1 {
        let bar = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        render_pagination(f, bar, page.page, page.pages);
    }
}

pub fn render_categories(f: &mut Frame, area: Rect, model: &Model) {
    let categories = view::categories(model);

    let items: Vec<ListItem> = categories
        .iter()
        .map(|cat| {
            let subs = if cat.subcategories.is_empty() {
                String::new()
            } else {
                let names: Vec<&str> =
                    cat.subcategories.iter().map(|s| s.name.as_str()).collect();
                format!("  ({})", names.join(", "))
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    cat.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} medios", cat.media_count),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(subs, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !categories.is_empty() {
        state.select(Some(model.nav.categories.selected.min(categories.len() - 1)));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Categorías — n nueva · e editar · d eliminar · Esc volver "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("► ");
    f.render_stateful_widget(list, area, &mut state);
}
