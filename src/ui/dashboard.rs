//! Dashboard tab: textual stat tiles and the latest orders.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{OrderStatus, ProductStatus};
use crate::model::Model;

pub fn render_dashboard(f: &mut Frame, area: Rect, model: &Model) {
    let catalog = &model.catalog;
    let active_products = catalog
        .products
        .all()
        .iter()
        .filter(|p| p.status == ProductStatus::Available)
        .count();
    let paid = catalog
        .orders
        .all()
        .iter()
        .filter(|o| o.status == OrderStatus::Paid)
        .count();
    let pending = catalog
        .orders
        .all()
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Productos Activos  ", Style::default().fg(Color::Gray)),
            Span::styled(
                active_products.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("    Pagadas  ", Style::default().fg(Color::Gray)),
            Span::styled(
                paid.to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled("    Pendientes  ", Style::default().fg(Color::Gray)),
            Span::styled(
                pending.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled("    Medios  ", Style::default().fg(Color::Gray)),
            Span::styled(
                catalog.media.len().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Últimas Órdenes",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    for order in catalog.orders.all().iter().take(5) {
        let status_style = match order.status {
            OrderStatus::Paid => Style::default().fg(Color::Green),
            OrderStatus::Pending => Style::default().fg(Color::Yellow),
            OrderStatus::Cancelled => Style::default().fg(Color::Red),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", order.id), Style::default().fg(Color::Gray)),
            Span::raw(format!("  {:<20}", order.customer)),
            Span::raw(format!("${:>7.0}  ", order.total)),
            Span::styled(order.status.label().to_string(), status_style),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "2 Galería · 3 Tienda · 4 Órdenes · 5 Sistema · a acciones rápidas",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Resumen ")),
        area,
    );
}
