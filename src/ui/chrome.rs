//! Header title, tab bar, footer hints, and the search box.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::navigation::{
    ConfigPane, GalleryMode, OrdersMode, ShippingPane, ShopMode, SystemSection, Tab,
};
use crate::model::Model;

/// Headline and subtitle for the active screen.
pub fn header_text(model: &Model) -> (&'static str, &'static str) {
    let nav = &model.nav;
    match nav.active_tab {
        Tab::Gallery => match nav.gallery_mode {
            GalleryMode::Create => (
                "Subir Nuevo Medio",
                "Completa los detalles para gestionar el contenido visual del catálogo del rancho.",
            ),
            GalleryMode::MediaEdit => (
                "Editar Medio",
                "Completa los detalles para gestionar el contenido visual del catálogo del rancho.",
            ),
            GalleryMode::CategoryCreate => (
                "Nueva Categoría",
                "Define una nueva agrupación para organizar los medios de la galería.",
            ),
            GalleryMode::CategoryEdit => (
                "Editar Categoría",
                "Define una nueva agrupación para organizar los medios de la galería.",
            ),
            GalleryMode::CategoriesList => (
                "Gestionar Categorías",
                "Revisa y organiza las agrupaciones de contenido de tu galería.",
            ),
            GalleryMode::List => (
                "Panel de Galería",
                "Explora, organiza y gestiona todos los medios visuales del rancho.",
            ),
        },
        Tab::Shop => match nav.shop_mode {
            ShopMode::Create => (
                "Nuevo Producto",
                "Administra el inventario del rancho. Priorizamos la venta de aves de combate y cría.",
            ),
            ShopMode::Edit => (
                "Editar Producto",
                "Administra el inventario del rancho. Priorizamos la venta de aves de combate y cría.",
            ),
            ShopMode::List => (
                "Gestión de Tienda",
                "Controla tu inventario de aves y artículos desde un solo lugar.",
            ),
        },
        Tab::Orders => match nav.orders_mode {
            OrdersMode::Detail => (
                "Detalle de Orden",
                "Administra las ventas, estados de pago y logística de envío.",
            ),
            OrdersMode::List => (
                "Gestión de Órdenes",
                "Administra las ventas, estados de pago y logística de envío.",
            ),
        },
        Tab::System => match nav.system_section {
            SystemSection::Shipping => match nav.shipping_pane {
                ShippingPane::Zones => (
                    "Zonas por Estado",
                    "Administra la clasificación territorial de envíos para la República Mexicana.",
                ),
                ShippingPane::Config => (
                    "Gestión de Envíos",
                    "Define las reglas financieras para el envío de artículos y aves.",
                ),
            },
            SystemSection::Users => (
                "Gestión de Usuarios",
                "Administra los accesos, roles y estados de los usuarios del sistema.",
            ),
            SystemSection::Identity => (
                "Identidad del Sistema",
                "Administra el logo global utilizado en el panel y la tienda.",
            ),
            SystemSection::Payment => match nav.payment_pane {
                ConfigPane::Channels => (
                    "Canales de Venta",
                    "Configura la información de contacto y cobro específica para cada propósito.",
                ),
                ConfigPane::Config => (
                    "Método de Pago",
                    "Configura la cuenta bancaria donde recibirás los pagos de tus clientes.",
                ),
            },
            SystemSection::WhatsApp => match nav.whatsapp_pane {
                ConfigPane::Channels => (
                    "Mensajería por Canal",
                    "Configura números y plantillas específicas para cada departamento.",
                ),
                ConfigPane::Config => (
                    "Integración WhatsApp",
                    "Ajusta el número y mensaje principal de confirmación de órdenes.",
                ),
            },
            SystemSection::Inventory => (
                "Ajustes de Inventario",
                "Configura la cancelación automática de órdenes vencidas para liberar el stock.",
            ),
            SystemSection::Notifications => (
                "Alertas del Sistema",
                "Define el correo que recibirá los avisos de nuevas órdenes y pagos.",
            ),
            SystemSection::Billing => (
                "Estado de Cuenta",
                "Revisa los servicios contratados y los cargos pendientes del sistema.",
            ),
            SystemSection::Menu => (
                "Configuración del Sistema",
                "Ajusta los parámetros globales, zonificación y usuarios del rancho.",
            ),
        },
        Tab::Dashboard => (
            "¡Bienvenido de Nuevo, Ricardo!",
            "Gestiona el inventario, ventas y medios desde tu panel central.",
        ),
    }
}

pub fn render_header(f: &mut Frame, area: Rect, model: &Model) {
    let (title, subtitle) = header_text(model);
    let mut lines = vec![Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    if area.height > 1 {
        lines.push(Line::from(Span::styled(
            subtitle,
            Style::default().fg(Color::DarkGray),
        )));
    }
    // Search box doubles as the third header line on searchable views.
    if area.height > 2 {
        if model.nav.search_active || !model.nav.search_query.is_empty() {
            let cursor = if model.nav.search_active { "▏" } else { "" };
            lines.push(Line::from(vec![
                Span::styled("Buscar: ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("{}{}", model.nav.search_query, cursor)),
            ]));
        } else {
            lines.push(Line::default());
        }
    }
    f.render_widget(Paragraph::new(lines), area);
}

pub fn render_tabs(f: &mut Frame, area: Rect, model: &Model) {
    if area.height == 0 {
        return;
    }
    let mut spans: Vec<Span> = Vec::new();
    for (index, tab) in Tab::ALL.iter().enumerate() {
        let style = if *tab == model.nav.active_tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!(" {} {} ", index + 1, tab.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// One-line key legend for the current context, including the save pill.
pub fn footer_hints(model: &Model) -> String {
    if model.ui.confirm.is_some() {
        return "Enter confirmar · Esc cancelar".to_string();
    }
    if model.ui.palette.is_some() {
        return "↑↓ elegir · Enter ejecutar · Esc cerrar".to_string();
    }
    if model.nav.search_active {
        return "escribe para filtrar · Enter aceptar · Esc limpiar".to_string();
    }
    if let Some(form) = model.form.as_ref() {
        let pill = if model.ui.form_valid {
            "Ctrl+S guardar"
        } else {
            "Ctrl+S guardar (completa los campos)"
        };
        let extra = match form {
            crate::forms::ActiveForm::ShippingConfig { .. } => " · Ctrl+T zonas",
            crate::forms::ActiveForm::PaymentAccount { .. }
            | crate::forms::ActiveForm::WhatsAppMain { .. } => " · Ctrl+T canales",
            _ => "",
        };
        return format!("Tab campo · {pill}{extra} · Esc cancelar");
    }
    let mut hints = vec!["1-5 pestañas", "a acciones", "q salir"];
    if model.nav.searchable() {
        hints.insert(1, "/ buscar");
    }
    if !model.ui.mouse_gestures {
        // Gesture bypass: the persistent action keys do everything.
        hints.push("acciones con teclas en cada lista");
    }
    hints.join(" · ")
}

pub fn render_footer(f: &mut Frame, area: Rect, model: &Model) {
    if area.height == 0 {
        return;
    }
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            footer_hints(model),
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::actions;
    use crate::model::QuickAction;

    #[test]
    fn test_header_follows_mode() {
        let mut model = Model::new();
        assert_eq!(header_text(&model).0, "¡Bienvenido de Nuevo, Ricardo!");

        actions::apply_quick_action(&mut model, QuickAction::NewCategory);
        assert_eq!(header_text(&model).0, "Nueva Categoría");

        actions::apply_quick_action(&mut model, QuickAction::ViewProducts);
        assert_eq!(header_text(&model).0, "Gestión de Tienda");
    }

    #[test]
    fn test_footer_shows_disabled_pill_while_invalid() {
        let mut model = Model::new();
        actions::apply_quick_action(&mut model, QuickAction::NewCategory);
        assert!(footer_hints(&model).contains("completa los campos"));
    }
}
