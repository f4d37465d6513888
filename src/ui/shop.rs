//! Shop view: swipeable product cards.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::cards::{render_cards, render_pagination, truncate, CardRow};
use crate::domain::{ItemKind, Product};
use crate::logic::swipe::{SwipeCaps, CARD_ACTION_WIDTH};
use crate::model::{Model, RowHit};
use crate::view;

fn product_row(product: &Product) -> CardRow {
    let status_color = match product.status {
        crate::domain::ProductStatus::Available => Color::Green,
        crate::domain::ProductStatus::Reserved => Color::Yellow,
        crate::domain::ProductStatus::Sold => Color::Red,
    };
    let title = Line::from(vec![
        Span::styled(
            truncate(&product.name, 34),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  ${:.0}", product.price)),
        Span::styled(
            format!("  {}", product.status.label()),
            Style::default().fg(status_color),
        ),
    ]);
    let detail = match product.kind {
        ItemKind::Bird => Line::from(Span::styled(
            format!(
                "Ave · Anillo {} · {} · {}",
                product.ring_number.as_deref().unwrap_or("—"),
                product.age.map_or("—", |a| a.label()),
                product.purpose.map_or("—", |p| p.label()),
            ),
            Style::default().fg(Color::Gray),
        )),
        ItemKind::Article => Line::from(Span::styled(
            format!("Artículo · Stock {}", product.stock.unwrap_or(0)),
            Style::default().fg(Color::Gray),
        )),
    };
    CardRow {
        id: product.id.clone(),
        title,
        detail,
        caps: SwipeCaps::BOTH,
        action_width: CARD_ACTION_WIDTH,
        primary: "✎ Editar",
        secondary: "✗ Eliminar",
    }
}

pub fn render_products(f: &mut Frame, area: Rect, model: &Model) -> Vec<RowHit> {
    let page = view::product_page(model);

    if page.items.is_empty() {
        let empty = ratatui::widgets::Paragraph::new("No hay productos que coincidan.")
            .style(Style::default().fg(Color::DarkGray))
            .block(ratatui::widgets::Block::default().borders(ratatui::widgets::Borders::ALL));
        f.render_widget(empty, area);
        return Vec::new();
    }

    let rows: Vec<CardRow> = page.items.iter().map(product_row).collect();
    let cards_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
    let hits = render_cards(f, cards_area, &rows, model.nav.shop.selected, &model.ui);

    if area.height > 1 {
        let bar = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        render_pagination(f, bar, page.page, page.pages);
    }
    hits
}
