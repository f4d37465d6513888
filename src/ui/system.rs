//! System views: section menu, shipping zones, users, identity, channels,
//! and billing. Config panes render through the mounted form instead.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::cards::{render_cards, CardRow};
use crate::domain::{ChargeStatus, ShippingZone};
use crate::logic::swipe::{SwipeCaps, CARD_ACTION_WIDTH};
use crate::model::navigation::{IdentityPhase, SystemSection};
use crate::model::{Model, RowHit};

pub fn render_menu(f: &mut Frame, area: Rect, model: &Model) {
    let items: Vec<ListItem> = SystemSection::MENU
        .iter()
        .map(|section| ListItem::new(Span::raw(section.label())))
        .collect();

    let mut state = ListState::default();
    state.select(Some(
        model.nav.system_menu.selected.min(SystemSection::MENU.len() - 1),
    ));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Módulos del Sistema — Enter abrir "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("► ");
    f.render_stateful_widget(list, area, &mut state);
}

pub fn render_zones(f: &mut Frame, area: Rect, model: &Model) {
    let zones = model.catalog.zones.all();
    let normal = zones.iter().filter(|z| z.zone == ShippingZone::Normal).count();
    let extended = zones.len() - normal;

    let items: Vec<ListItem> = zones
        .iter()
        .map(|state_zone| {
            let zone_style = match state_zone.zone {
                ShippingZone::Normal => Style::default().fg(Color::Green),
                ShippingZone::Extended => Style::default().fg(Color::Yellow),
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<22}", state_zone.name)),
                Span::styled(state_zone.zone.label(), zone_style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !zones.is_empty() {
        state.select(Some(model.nav.zones.selected.min(zones.len() - 1)));
    }

    let title = format!(
        " Zonas — Normal {normal} · Extendida {extended} — Espacio cambiar · N/E asignar todas · Ctrl+S guardar "
    );
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("► ");
    f.render_stateful_widget(list, area, &mut state);
}

pub fn render_users(f: &mut Frame, area: Rect, model: &Model) {
    let users = model.catalog.users.all();
    let items: Vec<ListItem> = users
        .iter()
        .map(|user| {
            let (state_label, state_style) = if user.active {
                ("Activo", Style::default().fg(Color::Green))
            } else {
                ("Inactivo", Style::default().fg(Color::Red))
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<20}", user.full_name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("@{:<16}", user.username), Style::default().fg(Color::Cyan)),
                Span::raw(format!("{:<24}", user.email)),
                Span::styled(state_label, state_style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !users.is_empty() {
        state.select(Some(model.nav.users.selected.min(users.len() - 1)));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Usuarios — n nuevo · e editar · Espacio activar/desactivar · d eliminar "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("► ");
    f.render_stateful_widget(list, area, &mut state);
}

pub fn render_identity(f: &mut Frame, area: Rect, model: &Model) {
    let lines = match model.nav.identity_phase {
        IdentityPhase::Empty => vec![
            Line::from(Span::styled(
                "Sin logo configurado",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "u subir logo",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        IdentityPhase::Preview => vec![
            Line::from(Span::styled(
                "Logo actual",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                model.catalog.logo.clone().unwrap_or_default(),
                Style::default().fg(Color::Cyan),
            )),
            Line::default(),
            Line::from(Span::styled(
                "r reemplazar logo · Esc volver",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        // The editing phase renders the mounted form instead.
        IdentityPhase::Editing => Vec::new(),
    };
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Identidad ")),
        area,
    );
}

pub fn render_payment_channels(f: &mut Frame, area: Rect, model: &Model) {
    let channels = model.catalog.payment_channels.all();
    let items: Vec<ListItem> = channels
        .iter()
        .map(|channel| {
            let (state_label, state_style) = if channel.active {
                ("Activo", Style::default().fg(Color::Green))
            } else {
                ("Inactivo", Style::default().fg(Color::Red))
            };
            let clabe = if channel.clabe.is_empty() {
                "sin CLABE".to_string()
            } else {
                channel.clabe.clone()
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<24}", channel.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:<10}", channel.purpose)),
                Span::raw(format!("{clabe:<20}")),
                Span::styled(state_label, state_style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !channels.is_empty() {
        state.select(Some(model.nav.channels.selected.min(channels.len() - 1)));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Canales de Venta — e editar · Espacio activar · Esc configuración "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("► ");
    f.render_stateful_widget(list, area, &mut state);
}

pub fn render_whatsapp_channels(f: &mut Frame, area: Rect, model: &Model) {
    let channels = model.catalog.whatsapp_channels.all();
    let items: Vec<ListItem> = channels
        .iter()
        .map(|channel| {
            let (state_label, state_style) = if channel.active {
                ("Activo", Style::default().fg(Color::Green))
            } else {
                ("Inactivo", Style::default().fg(Color::Red))
            };
            let phone = if channel.phone_number.is_empty() {
                "usa el número principal".to_string()
            } else {
                channel.phone_number.clone()
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<34}", channel.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{phone:<24}")),
                Span::styled(state_label, state_style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !channels.is_empty() {
        state.select(Some(model.nav.channels.selected.min(channels.len() - 1)));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Canales de WhatsApp — e editar · Espacio activar · Esc configuración "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("► ");
    f.render_stateful_widget(list, area, &mut state);
}

pub fn render_billing(f: &mut Frame, area: Rect, model: &Model) -> Vec<RowHit> {
    let services = model.catalog.billing_services.all();
    let mut lines = vec![Line::from(Span::styled(
        "Servicios Contratados (6/7/8 marcan pagado)",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (index, service) in services.iter().enumerate() {
        let (state_label, state_style) = if service.paid {
            ("Pagado", Style::default().fg(Color::Green))
        } else {
            ("Pendiente", Style::default().fg(Color::Yellow))
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  [{}] {:<16} ${:>9.2}  ", index + 6, service.name, service.cost)),
            Span::styled(state_label, state_style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("Saldo pendiente total: ${:.2}", model.catalog.pending_balance()),
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
    )));

    let services_height = (lines.len() as u16 + 1).min(area.height);
    f.render_widget(
        Paragraph::new(lines),
        Rect::new(area.x, area.y, area.width, services_height),
    );

    let charges_area = Rect::new(
        area.x,
        area.y + services_height,
        area.width,
        area.height.saturating_sub(services_height),
    );
    let rows: Vec<CardRow> = model
        .catalog
        .extra_charges
        .all()
        .iter()
        .map(|charge| {
            let status_style = match charge.status {
                ChargeStatus::Paid => Style::default().fg(Color::Green),
                ChargeStatus::Pending => Style::default().fg(Color::Yellow),
            };
            CardRow {
                id: charge.id.clone(),
                title: Line::from(vec![
                    Span::styled(
                        super::cards::truncate(&charge.concept, 44),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  ${:.2}", charge.amount)),
                ]),
                detail: Line::from(vec![
                    Span::styled(charge.status.label().to_string(), status_style),
                    Span::styled(format!("  {}", charge.date), Style::default().fg(Color::Gray)),
                ]),
                caps: SwipeCaps::BOTH,
                action_width: CARD_ACTION_WIDTH,
                primary: "✎ Editar",
                secondary: "✗ Eliminar",
            }
        })
        .collect();

    render_cards(f, charges_area, &rows, model.nav.charges.selected, &model.ui)
}
