//! Main render orchestrator.

use ratatui::Frame;

use super::{chrome, dashboard, dialogs, forms, gallery, layout, orders, shop, system, toast};
use crate::model::navigation::{
    ConfigPane, GalleryMode, IdentityPhase, OrdersMode, ShippingPane, SystemSection, Tab,
};
use crate::model::Model;

pub fn render(f: &mut Frame, model: &mut Model) {
    let areas = layout::split_screen(f.area());

    chrome::render_header(f, areas.header, model);
    chrome::render_tabs(f, areas.tabs, model);
    chrome::render_footer(f, areas.footer, model);

    // Hit zones are rebuilt by whichever card list renders this frame.
    let mut hits = Vec::new();
    let body = areas.body;

    if let Some(active) = model.form.as_ref() {
        forms::render_form(f, body, active.form(), model.ui.upload_progress);
    } else {
        match model.nav.active_tab {
            Tab::Dashboard => dashboard::render_dashboard(f, body, model),
            Tab::Gallery => match model.nav.gallery_mode {
                GalleryMode::CategoriesList => gallery::render_categories(f, body, model),
                _ => gallery::render_media_list(f, body, model),
            },
            Tab::Shop => {
                hits = shop::render_products(f, body, model);
            }
            Tab::Orders => match model.nav.orders_mode {
                OrdersMode::Detail => orders::render_order_detail(f, body, model),
                OrdersMode::List => {
                    hits = orders::render_orders_list(f, body, model);
                }
            },
            Tab::System => match model.nav.system_section {
                SystemSection::Menu => system::render_menu(f, body, model),
                SystemSection::Shipping if model.nav.shipping_pane == ShippingPane::Zones => {
                    system::render_zones(f, body, model)
                }
                SystemSection::Users => system::render_users(f, body, model),
                SystemSection::Identity => {
                    if model.nav.identity_phase != IdentityPhase::Editing {
                        system::render_identity(f, body, model)
                    }
                }
                SystemSection::Payment if model.nav.payment_pane == ConfigPane::Channels => {
                    system::render_payment_channels(f, body, model)
                }
                SystemSection::WhatsApp if model.nav.whatsapp_pane == ConfigPane::Channels => {
                    system::render_whatsapp_channels(f, body, model)
                }
                SystemSection::Billing => {
                    hits = system::render_billing(f, body, model);
                }
                // Config panes without their form mounted have nothing to
                // show; the section handlers remount on entry.
                _ => {}
            },
        }
    }
    model.ui.row_hits = hits;

    // Overlays, bottom-up: palette, then the confirm dialog, toast on top.
    if let Some(palette) = model.ui.palette.as_ref() {
        dialogs::render_palette(f, f.area(), palette);
    }
    if let Some(confirm) = model.ui.confirm.as_ref() {
        dialogs::render_confirm(f, f.area(), confirm);
    }
    if let Some(active_toast) = model.ui.toast.as_ref() {
        toast::render_toast(f, f.area(), active_toast);
    }
}
