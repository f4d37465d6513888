//! Keyboard Input Handler
//!
//! Routing order matters: the confirmation dialog swallows everything
//! first, then the palette, then search input, then the mounted form, and
//! only then the per-tab list keys. This keeps background hotkeys inert
//! while any overlay is open.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{OrderStatus, ShippingZone};
use crate::forms::{self, ActiveForm};
use crate::handlers::actions;
use crate::logic::validate;
use crate::model::navigation::{
    ConfigPane, GalleryMode, IdentityPhase, OrdersMode, ShippingPane, ShopMode, SystemSection, Tab,
};
use crate::model::{Model, PaletteState};
use crate::view;

pub fn handle_key(model: &mut Model, key: KeyEvent) {
    // Confirmation dialog gates everything else.
    if model.ui.confirm.is_some() {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                actions::execute_confirm(model)
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => model.ui.cancel_confirm(),
            _ => {}
        }
        return;
    }

    // Quick-action palette.
    if model.ui.palette.is_some() {
        handle_palette_key(model, key);
        return;
    }

    // Search input mode.
    if model.nav.search_active {
        handle_search_key(model, key);
        return;
    }

    // Mounted form.
    if model.form.is_some() {
        handle_form_key(model, key);
        return;
    }

    // A visible toast closes early on Esc.
    if model.ui.toast.is_some() && key.code == KeyCode::Esc {
        model.ui.dismiss_toast();
        return;
    }

    // Global keys.
    match key.code {
        KeyCode::Char('q') => {
            model.ui.should_quit = true;
            return;
        }
        KeyCode::Char('1') => {
            model.nav.open_tab(Tab::Dashboard);
            return;
        }
        KeyCode::Char('2') => {
            model.nav.open_tab(Tab::Gallery);
            return;
        }
        KeyCode::Char('3') => {
            model.nav.open_tab(Tab::Shop);
            return;
        }
        KeyCode::Char('4') => {
            model.nav.open_tab(Tab::Orders);
            return;
        }
        KeyCode::Char('5') => {
            model.nav.open_tab(Tab::System);
            return;
        }
        KeyCode::Char('a') => {
            let palette_actions = actions::palette_actions(model.nav.active_tab);
            model.ui.open_palette(PaletteState {
                actions: palette_actions,
                selected: 0,
            });
            return;
        }
        KeyCode::Char('/') if model.nav.searchable() => {
            model.nav.search_active = true;
            return;
        }
        _ => {}
    }

    match model.nav.active_tab {
        Tab::Dashboard => {}
        Tab::Gallery => handle_gallery_key(model, key),
        Tab::Shop => handle_shop_key(model, key),
        Tab::Orders => handle_orders_key(model, key),
        Tab::System => handle_system_key(model, key),
    }
}

fn is_up(model: &Model, code: KeyCode) -> bool {
    code == KeyCode::Up || (model.ui.vim_mode && code == KeyCode::Char('k'))
}

fn is_down(model: &Model, code: KeyCode) -> bool {
    code == KeyCode::Down || (model.ui.vim_mode && code == KeyCode::Char('j'))
}

fn handle_palette_key(model: &mut Model, key: KeyEvent) {
    match key.code {
        KeyCode::Up => {
            if let Some(palette) = model.ui.palette.as_mut() {
                palette.selected = palette.selected.saturating_sub(1);
            }
        }
        KeyCode::Down => {
            if let Some(palette) = model.ui.palette.as_mut() {
                if palette.selected + 1 < palette.actions.len() {
                    palette.selected += 1;
                }
            }
        }
        KeyCode::Enter => {
            let action = model
                .ui
                .palette
                .as_ref()
                .and_then(|p| p.actions.get(p.selected).copied());
            match action {
                Some(action) => actions::apply_quick_action(model, action),
                None => model.ui.close_palette(),
            }
        }
        KeyCode::Esc => model.ui.close_palette(),
        _ => {}
    }
}

fn handle_search_key(model: &mut Model, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => {
            model.nav.search_query.push(c);
            reset_searchable_cursor(model);
        }
        KeyCode::Backspace => {
            model.nav.search_query.pop();
            reset_searchable_cursor(model);
        }
        KeyCode::Enter => {
            // Accept: leave input mode, keep the filter.
            model.nav.search_active = false;
        }
        KeyCode::Esc => {
            model.nav.clear_search();
            reset_searchable_cursor(model);
        }
        _ => {}
    }
}

fn reset_searchable_cursor(model: &mut Model) {
    match model.nav.active_tab {
        Tab::Gallery => model.nav.gallery.reset(),
        Tab::Shop => model.nav.shop.reset(),
        Tab::Orders => model.nav.orders.reset(),
        _ => {}
    }
}

fn handle_form_key(model: &mut Model, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('s') if ctrl => {
            actions::save_active_form(model);
            return;
        }
        // Secondary pane of the section the form belongs to.
        KeyCode::Char('t') if ctrl => {
            match model.form {
                Some(ActiveForm::ShippingConfig { .. }) => {
                    model.unmount_form();
                    model.nav.shipping_pane = ShippingPane::Zones;
                    model.nav.zones.reset();
                }
                Some(ActiveForm::PaymentAccount { .. }) => {
                    model.unmount_form();
                    model.nav.payment_pane = ConfigPane::Channels;
                    model.nav.channels.reset();
                }
                Some(ActiveForm::WhatsAppMain { .. }) => {
                    model.unmount_form();
                    model.nav.whatsapp_pane = ConfigPane::Channels;
                    model.nav.channels.reset();
                }
                _ => {}
            }
            return;
        }
        KeyCode::Esc => {
            actions::cancel_active_form(model);
            return;
        }
        KeyCode::Enter => {
            // Keyboard submit, equivalent to the save pill.
            actions::save_active_form(model);
            return;
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = model.form.as_mut() {
                form.form_mut().focus_next();
            }
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = model.form.as_mut() {
                form.form_mut().focus_prev();
            }
            return;
        }
        _ => {}
    }

    let mut edited = false;
    if let Some(form) = model.form.as_mut() {
        let state = form.form_mut();
        match key.code {
            KeyCode::Char(' ') => {
                // Space flips toggles and cycles selects; in a text field it
                // is just a character.
                let focused_is_input = matches!(
                    state.fields.get(state.focus).map(|f| &f.value),
                    Some(forms::FieldValue::Text(_)) | Some(forms::FieldValue::Secret(_))
                );
                if focused_is_input {
                    state.input_char(' ');
                } else {
                    state.activate_focused();
                }
                edited = true;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.input_char(c);
                edited = true;
            }
            KeyCode::Backspace => {
                state.backspace();
                edited = true;
            }
            _ => {}
        }
    }
    if edited {
        model.sync_form_validity();
        sync_upload_simulation(model);
    }
}

/// Start, keep, or drop the simulated upload for forms with a media source
/// field. The percentage itself advances on the main-loop tick.
fn sync_upload_simulation(model: &mut Model) {
    let source_ok = match model.form.as_ref() {
        Some(ActiveForm::Media { form, .. }) => {
            validate::media_kind_for_path(form.text("source")).is_some()
        }
        Some(ActiveForm::IdentityLogo { form }) => validate::is_valid_logo_path(form.text("path")),
        _ => return,
    };
    if source_ok {
        if model.ui.upload_progress.is_none() {
            model.ui.upload_progress = Some(0);
        }
    } else {
        model.ui.upload_progress = None;
    }
}

fn handle_gallery_key(model: &mut Model, key: KeyEvent) {
    match model.nav.gallery_mode {
        GalleryMode::List => {
            let page = view::media_page(model);
            match key.code {
                code if is_up(model, code) => {
                    model.nav.gallery.selected = model.nav.gallery.selected.saturating_sub(1);
                }
                code if is_down(model, code) => {
                    if model.nav.gallery.selected + 1 < page.items.len() {
                        model.nav.gallery.selected += 1;
                    }
                }
                KeyCode::Left => {
                    if page.has_prev() {
                        model.nav.gallery.page -= 1;
                        model.nav.gallery.selected = 0;
                    }
                }
                KeyCode::Right => {
                    if page.has_next() {
                        model.nav.gallery.page += 1;
                        model.nav.gallery.selected = 0;
                    }
                }
                KeyCode::Char('n') => {
                    model.nav.gallery_mode = GalleryMode::Create;
                    model.mount_form(ActiveForm::Media {
                        id: None,
                        form: forms::media_form(None),
                    });
                }
                KeyCode::Char('e') | KeyCode::Enter => actions::edit_selected_media(model),
                KeyCode::Char('d') => {
                    if let Some(id) = view::selected_media_id(model) {
                        actions::request_delete_media(model, &id);
                    }
                }
                KeyCode::Char('c') => {
                    model.nav.gallery_mode = GalleryMode::CategoriesList;
                    model.nav.categories.reset();
                }
                _ => {}
            }
        }
        GalleryMode::CategoriesList => {
            let count = view::categories(model).len();
            match key.code {
                code if is_up(model, code) => {
                    model.nav.categories.selected = model.nav.categories.selected.saturating_sub(1);
                }
                code if is_down(model, code) => {
                    if model.nav.categories.selected + 1 < count {
                        model.nav.categories.selected += 1;
                    }
                }
                KeyCode::Char('n') => {
                    model.nav.gallery_mode = GalleryMode::CategoryCreate;
                    model.mount_form(ActiveForm::Category {
                        id: None,
                        form: forms::category_form(None),
                    });
                }
                KeyCode::Char('e') | KeyCode::Enter => actions::edit_selected_category(model),
                KeyCode::Char('d') => {
                    if let Some(id) = view::selected_category_id(model) {
                        actions::request_delete_category(model, &id);
                    }
                }
                KeyCode::Esc => {
                    model.nav.gallery_mode = GalleryMode::List;
                }
                _ => {}
            }
        }
        // Form modes are handled by the mounted form.
        _ => {}
    }
}

fn handle_shop_key(model: &mut Model, key: KeyEvent) {
    if model.nav.shop_mode != ShopMode::List {
        return;
    }
    let page = view::product_page(model);
    match key.code {
        code if is_up(model, code) => {
            model.nav.shop.selected = model.nav.shop.selected.saturating_sub(1);
        }
        code if is_down(model, code) => {
            if model.nav.shop.selected + 1 < page.items.len() {
                model.nav.shop.selected += 1;
            }
        }
        KeyCode::Left => {
            if page.has_prev() {
                model.nav.shop.page -= 1;
                model.nav.shop.selected = 0;
            }
        }
        KeyCode::Right => {
            if page.has_next() {
                model.nav.shop.page += 1;
                model.nav.shop.selected = 0;
            }
        }
        KeyCode::Char('n') => {
            model.nav.shop_mode = ShopMode::Create;
            model.mount_form(ActiveForm::Product {
                id: None,
                form: forms::product_form(None),
            });
        }
        KeyCode::Char('e') | KeyCode::Enter => actions::edit_selected_product(model),
        KeyCode::Char('d') => {
            if let Some(id) = view::selected_product_id(model) {
                actions::request_delete_product(model, &id);
            }
        }
        _ => {}
    }
}

fn handle_orders_key(model: &mut Model, key: KeyEvent) {
    match model.nav.orders_mode {
        OrdersMode::List => {
            let page = view::order_page(model);
            match key.code {
                code if is_up(model, code) => {
                    model.nav.orders.selected = model.nav.orders.selected.saturating_sub(1);
                }
                code if is_down(model, code) => {
                    if model.nav.orders.selected + 1 < page.items.len() {
                        model.nav.orders.selected += 1;
                    }
                }
                KeyCode::Left => {
                    if page.has_prev() {
                        model.nav.orders.page -= 1;
                        model.nav.orders.selected = 0;
                    }
                }
                KeyCode::Right => {
                    if page.has_next() {
                        model.nav.orders.page += 1;
                        model.nav.orders.selected = 0;
                    }
                }
                KeyCode::Enter => {
                    if let Some(id) = view::selected_order_id(model) {
                        model.nav.detail_order = Some(id);
                        model.nav.orders_mode = OrdersMode::Detail;
                    }
                }
                KeyCode::Char('p') => {
                    if let Some(id) = view::selected_order_id(model) {
                        if order_status(model, &id) == Some(OrderStatus::Pending) {
                            actions::request_mark_paid(model, &id);
                        }
                    }
                }
                KeyCode::Char('x') => {
                    if let Some(id) = view::selected_order_id(model) {
                        if matches!(
                            order_status(model, &id),
                            Some(OrderStatus::Pending) | Some(OrderStatus::Paid)
                        ) {
                            actions::request_cancel_order(model, &id);
                        }
                    }
                }
                _ => {}
            }
        }
        OrdersMode::Detail => match key.code {
            KeyCode::Esc | KeyCode::Backspace => {
                model.nav.orders_mode = OrdersMode::List;
                model.nav.detail_order = None;
            }
            KeyCode::Char('p') => {
                if let Some(id) = model.nav.detail_order.clone() {
                    if order_status(model, &id) == Some(OrderStatus::Pending) {
                        actions::request_mark_paid(model, &id);
                    }
                }
            }
            KeyCode::Char('x') => {
                if let Some(id) = model.nav.detail_order.clone() {
                    if matches!(
                        order_status(model, &id),
                        Some(OrderStatus::Pending) | Some(OrderStatus::Paid)
                    ) {
                        actions::request_cancel_order(model, &id);
                    }
                }
            }
            _ => {}
        },
    }
}

fn order_status(model: &Model, order_id: &str) -> Option<OrderStatus> {
    model.catalog.orders.get(order_id).map(|o| o.status)
}

fn handle_system_key(model: &mut Model, key: KeyEvent) {
    match model.nav.system_section {
        SystemSection::Menu => {
            let count = SystemSection::MENU.len();
            match key.code {
                code if is_up(model, code) => {
                    model.nav.system_menu.selected =
                        model.nav.system_menu.selected.saturating_sub(1);
                }
                code if is_down(model, code) => {
                    if model.nav.system_menu.selected + 1 < count {
                        model.nav.system_menu.selected += 1;
                    }
                }
                KeyCode::Enter => {
                    let section = SystemSection::MENU[model.nav.system_menu.selected];
                    actions::enter_system_section(model, section);
                }
                _ => {}
            }
        }
        SystemSection::Shipping => handle_shipping_zones_key(model, key),
        SystemSection::Users => handle_users_key(model, key),
        SystemSection::Identity => handle_identity_key(model, key),
        SystemSection::Payment => handle_channels_key(model, key, true),
        SystemSection::WhatsApp => handle_channels_key(model, key, false),
        SystemSection::Billing => handle_billing_key(model, key),
        // Inventory and notifications live entirely in their forms.
        _ => {
            if key.code == KeyCode::Esc {
                model.nav.goto_system(SystemSection::Menu);
            }
        }
    }
}

fn handle_shipping_zones_key(model: &mut Model, key: KeyEvent) {
    // Only the zones pane is reachable here; the config pane is a form.
    if model.nav.shipping_pane != ShippingPane::Zones {
        if key.code == KeyCode::Esc {
            model.nav.goto_system(SystemSection::Menu);
        }
        return;
    }
    let count = model.catalog.zones.len();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        code if is_up(model, code) => {
            model.nav.zones.selected = model.nav.zones.selected.saturating_sub(1);
        }
        code if is_down(model, code) => {
            if model.nav.zones.selected + 1 < count {
                model.nav.zones.selected += 1;
            }
        }
        KeyCode::Char(' ') => {
            let id = model
                .catalog
                .zones
                .all()
                .get(model.nav.zones.selected)
                .map(|z| z.id.clone());
            if let Some(id) = id {
                actions::toggle_zone(model, &id);
            }
        }
        KeyCode::Char('N') => actions::assign_all_zones(model, ShippingZone::Normal),
        KeyCode::Char('E') => actions::assign_all_zones(model, ShippingZone::Extended),
        KeyCode::Char('s') if ctrl => {
            actions::save_zones(model);
            actions::enter_system_section(model, SystemSection::Shipping);
        }
        KeyCode::Esc => {
            // Back to the cost config pane.
            actions::enter_system_section(model, SystemSection::Shipping);
        }
        _ => {}
    }
}

fn handle_users_key(model: &mut Model, key: KeyEvent) {
    let count = model.catalog.users.len();
    match key.code {
        code if is_up(model, code) => {
            model.nav.users.selected = model.nav.users.selected.saturating_sub(1);
        }
        code if is_down(model, code) => {
            if model.nav.users.selected + 1 < count {
                model.nav.users.selected += 1;
            }
        }
        KeyCode::Char('n') => actions::new_user(model),
        KeyCode::Char('e') | KeyCode::Enter => actions::edit_selected_user(model),
        KeyCode::Char(' ') => {
            if let Some(id) = view::selected_user_id(model) {
                actions::toggle_user_active(model, &id);
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = view::selected_user_id(model) {
                actions::request_delete_user(model, &id);
            }
        }
        KeyCode::Esc => model.nav.goto_system(SystemSection::Menu),
        _ => {}
    }
}

fn handle_identity_key(model: &mut Model, key: KeyEvent) {
    match model.nav.identity_phase {
        IdentityPhase::Empty | IdentityPhase::Preview => match key.code {
            KeyCode::Char('u') | KeyCode::Char('r') => actions::start_logo_edit(model),
            KeyCode::Esc => model.nav.goto_system(SystemSection::Menu),
            _ => {}
        },
        // Editing is handled by the mounted form.
        IdentityPhase::Editing => {}
    }
}

fn handle_channels_key(model: &mut Model, key: KeyEvent, payment: bool) {
    let pane = if payment {
        model.nav.payment_pane
    } else {
        model.nav.whatsapp_pane
    };
    if pane != ConfigPane::Channels {
        if key.code == KeyCode::Esc {
            model.nav.goto_system(SystemSection::Menu);
        }
        return;
    }
    let count = if payment {
        model.catalog.payment_channels.len()
    } else {
        model.catalog.whatsapp_channels.len()
    };
    match key.code {
        code if is_up(model, code) => {
            model.nav.channels.selected = model.nav.channels.selected.saturating_sub(1);
        }
        code if is_down(model, code) => {
            if model.nav.channels.selected + 1 < count {
                model.nav.channels.selected += 1;
            }
        }
        KeyCode::Char(' ') => {
            if payment {
                let id = model
                    .catalog
                    .payment_channels
                    .all()
                    .get(model.nav.channels.selected)
                    .map(|c| c.id.clone());
                if let Some(id) = id {
                    actions::toggle_payment_channel(model, &id);
                }
            } else {
                let id = model
                    .catalog
                    .whatsapp_channels
                    .all()
                    .get(model.nav.channels.selected)
                    .map(|c| c.id.clone());
                if let Some(id) = id {
                    actions::toggle_whatsapp_channel(model, &id);
                }
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if payment {
                let channel = model
                    .catalog
                    .payment_channels
                    .all()
                    .get(model.nav.channels.selected)
                    .cloned();
                if let Some(channel) = channel {
                    model.mount_form(ActiveForm::PaymentChannel {
                        id: channel.id.clone(),
                        form: forms::payment_channel_form(&channel),
                    });
                }
            } else {
                let channel = model
                    .catalog
                    .whatsapp_channels
                    .all()
                    .get(model.nav.channels.selected)
                    .cloned();
                if let Some(channel) = channel {
                    model.mount_form(ActiveForm::WhatsAppChannel {
                        id: channel.id.clone(),
                        form: forms::whatsapp_channel_form(&channel),
                    });
                }
            }
        }
        KeyCode::Esc => {
            // Back to the config pane of the same section.
            let section = if payment {
                SystemSection::Payment
            } else {
                SystemSection::WhatsApp
            };
            actions::enter_system_section(model, section);
        }
        _ => {}
    }
}

fn handle_billing_key(model: &mut Model, key: KeyEvent) {
    let count = model.catalog.extra_charges.len();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        code if is_up(model, code) => {
            model.nav.charges.selected = model.nav.charges.selected.saturating_sub(1);
        }
        code if is_down(model, code) => {
            if model.nav.charges.selected + 1 < count {
                model.nav.charges.selected += 1;
            }
        }
        // Fixed services toggle by position.
        KeyCode::Char(c @ '6'..='8') => {
            let index = (c as usize) - ('6' as usize);
            let id = model
                .catalog
                .billing_services
                .all()
                .get(index)
                .map(|s| s.id.clone());
            if let Some(id) = id {
                actions::toggle_service_paid(model, &id);
            }
        }
        KeyCode::Char(' ') => {
            if let Some(id) = view::selected_charge_id(model) {
                actions::toggle_charge_status(model, &id);
            }
        }
        KeyCode::Char('n') => actions::new_charge(model),
        KeyCode::Char('e') | KeyCode::Enter => actions::edit_selected_charge(model),
        KeyCode::Char('d') => {
            if let Some(id) = view::selected_charge_id(model) {
                actions::request_delete_charge(model, &id);
            }
        }
        KeyCode::Char('s') if ctrl => actions::save_billing(model),
        KeyCode::Esc => model.nav.goto_system(SystemSection::Menu),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_confirm_swallows_unrelated_keys() {
        let mut model = Model::new();
        actions::request_cancel_order(&mut model, "ORD-002");
        handle_key(&mut model, key(KeyCode::Char('q')));
        assert!(!model.ui.should_quit);
        assert!(model.ui.confirm.is_some());
    }

    #[test]
    fn test_confirm_enter_executes_and_closes() {
        let mut model = Model::new();
        actions::request_mark_paid(&mut model, "ORD-002");
        handle_key(&mut model, key(KeyCode::Enter));
        assert!(model.ui.confirm.is_none());
        assert_eq!(
            model.catalog.orders.get("ORD-002").unwrap().status,
            OrderStatus::Paid
        );
    }

    #[test]
    fn test_search_typing_filters_and_resets_page() {
        let mut model = Model::new();
        model.nav.open_tab(Tab::Orders);
        model.nav.orders.page = 1;
        handle_key(&mut model, key(KeyCode::Char('/')));
        assert!(model.nav.search_active);
        handle_key(&mut model, key(KeyCode::Char('a')));
        assert_eq!(model.nav.search_query, "a");
        assert_eq!(model.nav.orders.page, 0);
        handle_key(&mut model, key(KeyCode::Enter));
        assert!(!model.nav.search_active);
        assert_eq!(model.nav.search_query, "a");
    }

    #[test]
    fn test_search_esc_clears_query() {
        let mut model = Model::new();
        model.nav.open_tab(Tab::Orders);
        handle_key(&mut model, key(KeyCode::Char('/')));
        handle_key(&mut model, key(KeyCode::Char('x')));
        handle_key(&mut model, key(KeyCode::Esc));
        assert!(!model.nav.search_active);
        assert!(model.nav.search_query.is_empty());
    }

    #[test]
    fn test_right_key_blocked_on_last_page() {
        let mut model = Model::new();
        model.nav.open_tab(Tab::Gallery);
        handle_key(&mut model, key(KeyCode::Right));
        assert_eq!(model.nav.gallery.page, 1, "15 media / 12 per page = 2 pages");
        handle_key(&mut model, key(KeyCode::Right));
        assert_eq!(model.nav.gallery.page, 1, "next disabled on last page");
        handle_key(&mut model, key(KeyCode::Left));
        assert_eq!(model.nav.gallery.page, 0);
        handle_key(&mut model, key(KeyCode::Left));
        assert_eq!(model.nav.gallery.page, 0, "prev disabled on first page");
    }

    #[test]
    fn test_typing_into_category_form_enables_pill() {
        let mut model = Model::new();
        model.nav.open_tab(Tab::Gallery);
        handle_key(&mut model, key(KeyCode::Char('c')));
        handle_key(&mut model, key(KeyCode::Char('n')));
        assert!(matches!(model.form, Some(ActiveForm::Category { .. })));
        assert!(!model.ui.form_valid);

        for c in "Rodeo".chars() {
            handle_key(&mut model, key(KeyCode::Char(c)));
        }
        assert!(model.ui.form_valid);

        // Whitespace-only edits drop the pill again.
        for _ in 0..5 {
            handle_key(&mut model, key(KeyCode::Backspace));
        }
        handle_key(&mut model, key(KeyCode::Char(' ')));
        assert!(!model.ui.form_valid);
    }

    #[test]
    fn test_enter_opens_order_detail() {
        let mut model = Model::new();
        model.nav.open_tab(Tab::Orders);
        handle_key(&mut model, key(KeyCode::Enter));
        assert_eq!(model.nav.orders_mode, OrdersMode::Detail);
        assert!(model.nav.detail_order.is_some());
        handle_key(&mut model, key(KeyCode::Esc));
        assert_eq!(model.nav.orders_mode, OrdersMode::List);
        assert!(model.nav.detail_order.is_none());
    }

    #[test]
    fn test_mark_paid_ignored_for_non_pending_order() {
        let mut model = Model::new();
        model.nav.open_tab(Tab::Orders);
        // First row is ORD-001, already paid.
        handle_key(&mut model, key(KeyCode::Char('p')));
        assert!(model.ui.confirm.is_none());
    }

    #[test]
    fn test_media_source_starts_upload_simulation() {
        let mut model = Model::new();
        actions::apply_quick_action(&mut model, crate::model::QuickAction::NewMedia);
        if let Some(form) = model.form.as_mut() {
            let state = form.form_mut();
            state.focus = state
                .fields
                .iter()
                .position(|f| f.key == "source")
                .unwrap();
        }
        for c in "finca.jpg".chars() {
            handle_key(&mut model, key(KeyCode::Char(c)));
        }
        assert_eq!(model.ui.upload_progress, Some(0));
        // Breaking the extension drops the simulation.
        handle_key(&mut model, key(KeyCode::Backspace));
        assert_eq!(model.ui.upload_progress, None);
    }

    #[test]
    fn test_zone_bulk_assign_keys() {
        let mut model = Model::new();
        actions::enter_system_section(&mut model, SystemSection::Shipping);
        // Jump to the zones pane, then assign all extended.
        handle_key(
            &mut model,
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
        );
        assert_eq!(model.nav.shipping_pane, ShippingPane::Zones);
        handle_key(&mut model, key(KeyCode::Char('E')));
        assert!(model
            .catalog
            .zones
            .all()
            .iter()
            .all(|z| z.zone == ShippingZone::Extended));
    }
}
