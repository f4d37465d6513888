//! Orders views: swipeable order cards and the order detail screen.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::cards::{render_cards, render_pagination, truncate, CardRow};
use crate::domain::{Order, OrderStatus};
use crate::logic::swipe::{SwipeCaps, ORDER_ACTION_WIDTH};
use crate::model::{Model, RowHit};
use crate::view;

fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Paid => Color::Green,
        OrderStatus::Pending => Color::Yellow,
        OrderStatus::Cancelled => Color::Red,
    }
}

fn order_row(order: &Order) -> CardRow {
    let title = Line::from(vec![
        Span::styled(
            order.id.clone(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" · {}", order.date), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("  {}", truncate(&order.customer, 26)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let detail = Line::from(vec![
        Span::raw(format!("Total ${:.0}", order.total)),
        Span::styled(
            format!("  {}", order.status.label()),
            Style::default().fg(status_color(order.status)),
        ),
        Span::styled(
            format!("  {}", order.customer_state),
            Style::default().fg(Color::Gray),
        ),
    ]);
    // Only pending orders can swipe open either panel.
    let caps = if order.status == OrderStatus::Pending {
        SwipeCaps::BOTH
    } else {
        SwipeCaps::NONE
    };
    CardRow {
        id: order.id.clone(),
        title,
        detail,
        caps,
        action_width: ORDER_ACTION_WIDTH,
        primary: "✓ Pagada",
        secondary: "✗ Cancelar",
    }
}

pub fn render_orders_list(f: &mut Frame, area: Rect, model: &Model) -> Vec<RowHit> {
    let page = view::order_page(model);

    if page.items.is_empty() {
        let empty = Paragraph::new("No hay órdenes que coincidan.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, area);
        return Vec::new();
    }

    let rows: Vec<CardRow> = page.items.iter().map(order_row).collect();
    let cards_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
    let hits = render_cards(f, cards_area, &rows, model.nav.orders.selected, &model.ui);

    if area.height > 1 {
        let bar = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        render_pagination(f, bar, page.page, page.pages);
    }
    hits
}

pub fn render_order_detail(f: &mut Frame, area: Rect, model: &Model) {
    let Some(order) = model
        .nav
        .detail_order
        .as_deref()
        .and_then(|id| model.catalog.orders.get(id))
    else {
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                order.id.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", order.status.label()),
                Style::default()
                    .fg(status_color(order.status))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", order.date), Style::default().fg(Color::Gray)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Artículos",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    for item in &order.items {
        lines.push(Line::from(Span::raw(format!(
            "  {} x{}  [{}]  ${:.0}",
            item.name,
            item.quantity,
            item.kind.label(),
            item.price
        ))));
    }
    lines.push(Line::from(Span::styled(
        format!("  Total  ${:.0}", order.total),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Cliente",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::raw(format!("  {}", order.customer))));
    lines.push(Line::from(Span::raw(format!(
        "  Tel. {}",
        order.customer_phone
    ))));
    lines.push(Line::from(Span::raw(format!(
        "  {}",
        order.customer_state
    ))));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Información de Envío",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::raw(format!(
        "  Aves: al aeropuerto o terminal más cercana a {}.",
        order.customer_state
    ))));
    lines.push(Line::from(Span::raw(format!(
        "  Artículos: {}",
        order
            .customer_address
            .as_deref()
            .unwrap_or("No se proporcionó dirección completa.")
    ))));

    // Action hints follow the same status gating as the header pills.
    let mut hints: Vec<&str> = Vec::new();
    if order.status == OrderStatus::Pending {
        hints.push("p marcar pagada");
    }
    if matches!(order.status, OrderStatus::Pending | OrderStatus::Paid) {
        hints.push("x cancelar orden");
    }
    hints.push("Esc volver");
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        hints.join(" · "),
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Detalle "))
            .wrap(Wrap { trim: false }),
        area,
    );
}
