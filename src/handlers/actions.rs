//! Action dispatch.
//!
//! Quick actions, confirmation requests, confirmed mutations, and save /
//! cancel routing for the mounted form. Every destructive or
//! status-changing operation passes through `request_*` then
//! `execute_confirm`; only immediate toggles mutate directly.

use chrono::Local;

use crate::domain::{
    Category, ChargeStatus, ExtraCharge, Media, OrderStatus, Product, ShippingZone, User,
};
use crate::forms::{self, ActiveForm};
use crate::logic::validate;
use crate::model::navigation::{
    ConfigPane, GalleryMode, IdentityPhase, ShippingPane, ShopMode, SystemSection, Tab,
};
use crate::model::{ConfirmAction, ConfirmVariant, Model, QuickAction, Toast};
use crate::view;

/// Quick actions offered for a tab, mirroring the action rail groups.
pub fn palette_actions(tab: Tab) -> Vec<QuickAction> {
    match tab {
        Tab::Gallery => vec![
            QuickAction::ViewMedia,
            QuickAction::NewMedia,
            QuickAction::ViewCategories,
            QuickAction::NewCategory,
        ],
        Tab::Shop => vec![QuickAction::ViewProducts, QuickAction::NewProduct],
        Tab::Orders => vec![QuickAction::ViewOrders],
        Tab::System => vec![
            QuickAction::AddLogo,
            QuickAction::PaymentMethod,
            QuickAction::WhatsApp,
            QuickAction::ConfigureShipping,
            QuickAction::InventoryRelease,
            QuickAction::Notifications,
            QuickAction::Billing,
            QuickAction::Users,
            QuickAction::SystemConfig,
        ],
        Tab::Dashboard => vec![
            QuickAction::ViewMedia,
            QuickAction::NewMedia,
            QuickAction::NewCategory,
            QuickAction::ViewProducts,
            QuickAction::NewProduct,
            QuickAction::ViewOrders,
            QuickAction::ConfigureShipping,
            QuickAction::Users,
        ],
    }
}

/// Mount the form belonging to a system config section, if it has one.
pub fn enter_system_section(model: &mut Model, section: SystemSection) {
    model.unmount_form();
    model.nav.goto_system(section);
    let form = match section {
        SystemSection::Shipping => Some(ActiveForm::ShippingConfig {
            form: forms::shipping_config_form(&model.catalog),
        }),
        SystemSection::Payment => Some(ActiveForm::PaymentAccount {
            form: forms::payment_account_form(&model.catalog),
        }),
        SystemSection::WhatsApp => Some(ActiveForm::WhatsAppMain {
            form: forms::whatsapp_main_form(&model.catalog),
        }),
        SystemSection::Inventory => Some(ActiveForm::Inventory {
            form: forms::inventory_form(&model.catalog),
        }),
        SystemSection::Notifications => Some(ActiveForm::Notifications {
            form: forms::notifications_form(&model.catalog),
        }),
        _ => None,
    };
    if let Some(form) = form {
        model.mount_form(form);
    }
}

pub fn apply_quick_action(model: &mut Model, action: QuickAction) {
    model.ui.close_palette();
    model.ui.active_swipe.close();
    match action {
        QuickAction::ViewMedia => {
            model.unmount_form();
            model.nav.goto_gallery(GalleryMode::List);
        }
        QuickAction::NewMedia => {
            model.nav.goto_gallery(GalleryMode::Create);
            model.mount_form(ActiveForm::Media {
                id: None,
                form: forms::media_form(None),
            });
        }
        QuickAction::ViewCategories => {
            model.unmount_form();
            model.nav.goto_gallery(GalleryMode::CategoriesList);
        }
        QuickAction::NewCategory => {
            model.nav.goto_gallery(GalleryMode::CategoryCreate);
            model.mount_form(ActiveForm::Category {
                id: None,
                form: forms::category_form(None),
            });
        }
        QuickAction::ViewProducts => {
            model.unmount_form();
            model.nav.goto_shop(ShopMode::List);
        }
        QuickAction::NewProduct => {
            model.nav.goto_shop(ShopMode::Create);
            model.mount_form(ActiveForm::Product {
                id: None,
                form: forms::product_form(None),
            });
        }
        QuickAction::ViewOrders => {
            model.unmount_form();
            model.nav.goto_orders_list();
        }
        QuickAction::AddLogo => {
            model.unmount_form();
            model.nav.goto_system(SystemSection::Identity);
        }
        QuickAction::PaymentMethod => enter_system_section(model, SystemSection::Payment),
        QuickAction::WhatsApp => enter_system_section(model, SystemSection::WhatsApp),
        QuickAction::ConfigureShipping => enter_system_section(model, SystemSection::Shipping),
        QuickAction::InventoryRelease => enter_system_section(model, SystemSection::Inventory),
        QuickAction::Notifications => enter_system_section(model, SystemSection::Notifications),
        QuickAction::Billing => {
            model.unmount_form();
            model.nav.goto_system(SystemSection::Billing);
        }
        QuickAction::Users => {
            model.unmount_form();
            model.nav.goto_system(SystemSection::Users);
        }
        QuickAction::SystemConfig => {
            model.unmount_form();
            model.nav.goto_system(SystemSection::Menu);
        }
    }
}

// ---- confirmation requests ------------------------------------------------

pub fn request_mark_paid(model: &mut Model, order_id: &str) {
    model.ui.request_confirm(
        "¿Marcar como Pagada?",
        format!("¿Confirmas que la orden {order_id} ha sido pagada en su totalidad?"),
        "Sí, Confirmar",
        ConfirmVariant::Warning,
        ConfirmAction::MarkOrderPaid {
            order_id: order_id.to_string(),
        },
    );
}

pub fn request_cancel_order(model: &mut Model, order_id: &str) {
    model.ui.request_confirm(
        "¿Cancelar Orden?",
        format!(
            "¿Estás seguro de que deseas cancelar la orden {order_id}? Esta acción no se puede deshacer."
        ),
        "Sí, Cancelar",
        ConfirmVariant::Danger,
        ConfirmAction::CancelOrder {
            order_id: order_id.to_string(),
        },
    );
}

pub fn request_delete_media(model: &mut Model, media_id: &str) {
    model.ui.request_confirm(
        "¿Eliminar este medio?",
        "Esta acción es irreversible. El archivo se borrará permanentemente de la galería.",
        "Sí, Eliminar",
        ConfirmVariant::Danger,
        ConfirmAction::DeleteMedia {
            media_id: media_id.to_string(),
        },
    );
}

pub fn request_delete_category(model: &mut Model, category_id: &str) {
    model.ui.request_confirm(
        "¿Eliminar categoría?",
        "Los medios asociados a esta categoría quedarán sin clasificar, pero no se borrarán.",
        "Eliminar",
        ConfirmVariant::Danger,
        ConfirmAction::DeleteCategory {
            category_id: category_id.to_string(),
        },
    );
}

pub fn request_delete_product(model: &mut Model, product_id: &str) {
    model.ui.request_confirm(
        "¿Eliminar producto?",
        "Esta acción borrará el producto permanentemente del inventario.",
        "Sí, Eliminar",
        ConfirmVariant::Danger,
        ConfirmAction::DeleteProduct {
            product_id: product_id.to_string(),
        },
    );
}

pub fn request_delete_user(model: &mut Model, user_id: &str) {
    let name = model
        .catalog
        .users
        .get(user_id)
        .map(|u| u.full_name.clone())
        .unwrap_or_default();
    model.ui.request_confirm(
        "¿Eliminar usuario?",
        format!("Se revocará el acceso de {name} al panel de forma permanente."),
        "Sí, Eliminar",
        ConfirmVariant::Danger,
        ConfirmAction::DeleteUser {
            user_id: user_id.to_string(),
        },
    );
}

pub fn request_delete_charge(model: &mut Model, charge_id: &str) {
    model.ui.request_confirm(
        "¿Eliminar cargo?",
        "El cargo se retirará del estado de cuenta.",
        "Sí, Eliminar",
        ConfirmVariant::Danger,
        ConfirmAction::DeleteCharge {
            charge_id: charge_id.to_string(),
        },
    );
}

pub fn request_discard_form(model: &mut Model) {
    model.ui.request_confirm(
        "¿Descartar cambios?",
        "Si cancelas ahora, perderás toda la información ingresada en este formulario.",
        "Sí, Descartar",
        ConfirmVariant::Warning,
        ConfirmAction::DiscardForm,
    );
}

// ---- confirmed mutations --------------------------------------------------

/// Run the pending confirmation's action exactly once.
pub fn execute_confirm(model: &mut Model) {
    let Some(action) = model.ui.take_confirm() else {
        return;
    };
    model.ui.active_swipe.close();
    match action {
        ConfirmAction::MarkOrderPaid { order_id } => {
            if let Some(order) = model.catalog.orders.get_mut(&order_id) {
                order.status = OrderStatus::Paid;
            }
            model.show_toast(Toast::success(format!(
                "Orden {order_id} marcada como pagada"
            )));
        }
        ConfirmAction::CancelOrder { order_id } => {
            if let Some(order) = model.catalog.orders.get_mut(&order_id) {
                order.status = OrderStatus::Cancelled;
            }
            model.show_toast(Toast::error(format!("Orden {order_id} cancelada")));
        }
        ConfirmAction::DeleteMedia { media_id } => {
            model.catalog.media.remove(&media_id);
            model.nav.gallery.selected = 0;
            model.show_toast(Toast::success("Medio eliminado correctamente"));
        }
        ConfirmAction::DeleteCategory { category_id } => {
            model.catalog.categories.remove(&category_id);
            model.nav.categories.selected = 0;
            model.show_toast(Toast::success("Categoría eliminada"));
        }
        ConfirmAction::DeleteProduct { product_id } => {
            model.catalog.products.remove(&product_id);
            model.nav.shop.selected = 0;
            model.show_toast(Toast::success("Producto eliminado"));
        }
        ConfirmAction::DeleteUser { user_id } => {
            let name = model
                .catalog
                .users
                .get(&user_id)
                .map(|u| u.full_name.clone())
                .unwrap_or_default();
            model.catalog.users.remove(&user_id);
            model.nav.users.selected = 0;
            model.show_toast(Toast::success(format!(
                "Usuario {name} eliminado correctamente"
            )));
        }
        ConfirmAction::DeleteCharge { charge_id } => {
            model.catalog.extra_charges.remove(&charge_id);
            model.nav.charges.selected = 0;
            model.show_toast(Toast::success("Cargo eliminado"));
        }
        ConfirmAction::DiscardForm => {
            leave_form_view(model);
        }
    }
}

/// Where cancel/discard returns to, per domain.
fn leave_form_view(model: &mut Model) {
    model.unmount_form();
    match model.nav.active_tab {
        Tab::Shop => model.nav.shop_mode = ShopMode::List,
        Tab::Gallery => {
            model.nav.gallery_mode = if model.nav.gallery_mode == GalleryMode::CategoryEdit {
                GalleryMode::CategoriesList
            } else {
                GalleryMode::List
            };
        }
        Tab::System => match model.nav.system_section {
            SystemSection::Identity => {
                model.nav.identity_phase = if model.catalog.logo.is_some() {
                    IdentityPhase::Preview
                } else {
                    IdentityPhase::Empty
                };
            }
            SystemSection::Users | SystemSection::Billing => {}
            // Config panes: drop edits by reloading from the catalog.
            section => enter_system_section(model, section),
        },
        _ => {}
    }
    model.nav.clear_search();
}

// ---- edit entry points ----------------------------------------------------

pub fn edit_selected_media(model: &mut Model) {
    if let Some(id) = view::selected_media_id(model) {
        let record = model.catalog.media.get(&id).cloned();
        if let Some(media) = record {
            model.nav.gallery_mode = GalleryMode::MediaEdit;
            model.mount_form(ActiveForm::Media {
                id: Some(media.id.clone()),
                form: forms::media_form(Some(&media)),
            });
        }
    }
}

pub fn edit_selected_product(model: &mut Model) {
    if let Some(id) = view::selected_product_id(model) {
        let record = model.catalog.products.get(&id).cloned();
        if let Some(product) = record {
            model.nav.shop_mode = ShopMode::Edit;
            model.mount_form(ActiveForm::Product {
                id: Some(product.id.clone()),
                form: forms::product_form(Some(&product)),
            });
        }
    }
}

pub fn edit_selected_category(model: &mut Model) {
    if let Some(id) = view::selected_category_id(model) {
        let record = model.catalog.categories.get(&id).cloned();
        if let Some(category) = record {
            model.nav.gallery_mode = GalleryMode::CategoryEdit;
            model.mount_form(ActiveForm::Category {
                id: Some(category.id.clone()),
                form: forms::category_form(Some(&category.name)),
            });
        }
    }
}

pub fn edit_selected_user(model: &mut Model) {
    if let Some(id) = view::selected_user_id(model) {
        let record = model.catalog.users.get(&id).cloned();
        if let Some(user) = record {
            model.mount_form(ActiveForm::User {
                id: Some(user.id.clone()),
                form: forms::user_form(Some(&user)),
            });
        }
    }
}

pub fn edit_selected_charge(model: &mut Model) {
    if let Some(id) = view::selected_charge_id(model) {
        let record = model.catalog.extra_charges.get(&id).cloned();
        if let Some(charge) = record {
            model.mount_form(ActiveForm::Charge {
                id: Some(charge.id.clone()),
                form: forms::charge_form(Some((&charge.concept, charge.amount))),
            });
        }
    }
}

pub fn new_user(model: &mut Model) {
    model.mount_form(ActiveForm::User {
        id: None,
        form: forms::user_form(None),
    });
}

pub fn new_charge(model: &mut Model) {
    model.mount_form(ActiveForm::Charge {
        id: None,
        form: forms::charge_form(None),
    });
}

pub fn start_logo_edit(model: &mut Model) {
    model.nav.identity_phase = IdentityPhase::Editing;
    model.mount_form(ActiveForm::IdentityLogo {
        form: forms::identity_logo_form(),
    });
}

// ---- immediate toggles ----------------------------------------------------

pub fn toggle_user_active(model: &mut Model, user_id: &str) {
    let toast = model.catalog.users.get_mut(user_id).map(|user| {
        user.active = !user.active;
        let verb = if user.active {
            "activado"
        } else {
            "desactivado"
        };
        format!("Usuario {} {}", user.full_name, verb)
    });
    if let Some(message) = toast {
        model.show_toast(Toast::success(message));
    }
}

pub fn toggle_zone(model: &mut Model, zone_id: &str) {
    if let Some(zone) = model.catalog.zones.get_mut(zone_id) {
        zone.zone = zone.zone.toggled();
    }
}

pub fn assign_all_zones(model: &mut Model, zone: ShippingZone) {
    let ids: Vec<String> = model
        .catalog
        .zones
        .all()
        .iter()
        .map(|z| z.id.clone())
        .collect();
    for id in ids {
        if let Some(state) = model.catalog.zones.get_mut(&id) {
            state.zone = zone;
        }
    }
}

pub fn save_zones(model: &mut Model) {
    model.show_toast(Toast::success("Zonificación territorial actualizada"));
    model.nav.shipping_pane = ShippingPane::Config;
}

pub fn toggle_service_paid(model: &mut Model, service_id: &str) {
    if let Some(service) = model.catalog.billing_services.get_mut(service_id) {
        service.paid = !service.paid;
    }
}

pub fn toggle_charge_status(model: &mut Model, charge_id: &str) {
    if let Some(charge) = model.catalog.extra_charges.get_mut(charge_id) {
        charge.status = charge.status.toggled();
    }
}

pub fn toggle_payment_channel(model: &mut Model, channel_id: &str) {
    if let Some(channel) = model.catalog.payment_channels.get_mut(channel_id) {
        channel.active = !channel.active;
    }
}

pub fn toggle_whatsapp_channel(model: &mut Model, channel_id: &str) {
    if let Some(channel) = model.catalog.whatsapp_channels.get_mut(channel_id) {
        channel.active = !channel.active;
    }
}

pub fn save_billing(model: &mut Model) {
    model.show_toast(Toast::success(
        "Estado de cuenta y servicios actualizados correctamente",
    ));
}

// ---- save / cancel routing ------------------------------------------------

/// Save whatever form is mounted. Entity forms are gated by the validity
/// pill: saving while invalid is a no-op. Config forms validate here and
/// refuse with an error toast instead.
pub fn save_active_form(model: &mut Model) {
    let Some(active) = model.form.clone() else {
        return;
    };
    match &active {
        ActiveForm::Media { id, form } => {
            if !active.validity() {
                return;
            }
            let Some(kind) = validate::media_kind_for_path(form.text("source")) else {
                return;
            };
            match id {
                Some(media_id) => {
                    if let Some(media) = model.catalog.media.get_mut(media_id) {
                        media.title = form.text("title").trim().to_string();
                        media.description = form.text("description").trim().to_string();
                        media.category = form.text("category").trim().to_string();
                        media.subcategory = form.text("subcategory").trim().to_string();
                        media.source_ref = form.text("source").trim().to_string();
                        media.kind = kind;
                    }
                    model.show_toast(Toast::success("Medio actualizado con éxito"));
                }
                None => {
                    let record = Media {
                        id: model.catalog.media.next_id(),
                        title: form.text("title").trim().to_string(),
                        description: form.text("description").trim().to_string(),
                        kind,
                        category: form.text("category").trim().to_string(),
                        subcategory: form.text("subcategory").trim().to_string(),
                        source_ref: form.text("source").trim().to_string(),
                        likes: 0,
                        favorite: false,
                        created_at: Local::now().date_naive(),
                    };
                    model.catalog.media.insert(record);
                    model.show_toast(Toast::success("Medio subido con éxito"));
                }
            }
            model.unmount_form();
            model.nav.gallery_mode = GalleryMode::List;
        }
        ActiveForm::Product { id, form } => {
            if !active.validity() {
                return;
            }
            let kind = forms::kind_from_index(form.select_index("kind"));
            let Some(price) = validate::parse_cost(form.text("price")) else {
                return;
            };
            let status = forms::status_from_index(form.select_index("status"));
            let is_bird = kind == crate::domain::ItemKind::Bird;
            let ring_number = is_bird.then(|| form.text("ring").trim().to_string());
            let age = is_bird.then(|| forms::age_from_index(form.select_index("age")));
            let purpose = is_bird.then(|| forms::purpose_from_index(form.select_index("purpose")));
            let stock = if is_bird {
                None
            } else {
                match form.text("stock").trim().parse::<u32>() {
                    Ok(stock) => Some(stock),
                    Err(_) => return,
                }
            };
            match id {
                Some(product_id) => {
                    if let Some(product) = model.catalog.products.get_mut(product_id) {
                        product.name = form.text("name").trim().to_string();
                        product.price = price;
                        product.status = status;
                        product.kind = kind;
                        product.ring_number = ring_number;
                        product.age = age;
                        product.purpose = purpose;
                        product.stock = stock;
                        product.description = form.text("description").trim().to_string();
                        product.image_ref = form.text("image").trim().to_string();
                    }
                    model.show_toast(Toast::success("Producto actualizado"));
                }
                None => {
                    let record = Product {
                        id: model.catalog.products.next_id(),
                        name: form.text("name").trim().to_string(),
                        price,
                        status,
                        kind,
                        ring_number,
                        age,
                        purpose,
                        stock,
                        description: form.text("description").trim().to_string(),
                        image_ref: form.text("image").trim().to_string(),
                        created_at: Local::now().date_naive(),
                    };
                    model.catalog.products.insert(record);
                    model.show_toast(Toast::success("Producto creado con éxito"));
                }
            }
            model.unmount_form();
            model.nav.shop_mode = ShopMode::List;
        }
        ActiveForm::Category { id, form } => {
            if !active.validity() {
                return;
            }
            match id {
                Some(category_id) => {
                    if let Some(category) = model.catalog.categories.get_mut(category_id) {
                        category.name = form.text("name").trim().to_string();
                    }
                    model.show_toast(Toast::success("Categoría actualizada con éxito"));
                    model.nav.gallery_mode = GalleryMode::CategoriesList;
                }
                None => {
                    let record = Category {
                        id: model.catalog.categories.next_id(),
                        name: form.text("name").trim().to_string(),
                        media_count: 0,
                        subcategories: Vec::new(),
                    };
                    model.catalog.categories.insert(record);
                    model.show_toast(Toast::success("Categoría creada correctamente"));
                    model.nav.gallery_mode = GalleryMode::List;
                }
            }
            model.unmount_form();
        }
        ActiveForm::User { id, form } => {
            if !active.validity() {
                return;
            }
            match id {
                Some(user_id) => {
                    if let Some(user) = model.catalog.users.get_mut(user_id) {
                        user.full_name = form.text("full_name").trim().to_string();
                        user.email = form.text("email").trim().to_string();
                        user.username = form.text("username").trim().to_string();
                        if validate::non_blank(form.text("password")) {
                            user.password = Some(form.text("password").to_string());
                        }
                    }
                    model.show_toast(Toast::success("Cambios guardados correctamente"));
                }
                None => {
                    let record = User {
                        id: model.catalog.users.next_id(),
                        full_name: form.text("full_name").trim().to_string(),
                        email: form.text("email").trim().to_string(),
                        username: form.text("username").trim().to_string(),
                        password: Some(form.text("password").to_string()),
                        active: true,
                        created_at: Local::now().date_naive(),
                    };
                    model.catalog.users.insert(record);
                    model.show_toast(Toast::success("Usuario creado correctamente"));
                }
            }
            model.unmount_form();
        }
        ActiveForm::Charge { id, form } => {
            if !active.validity() {
                return;
            }
            let Some(amount) = validate::parse_amount(form.text("amount")) else {
                return;
            };
            match id {
                Some(charge_id) => {
                    if let Some(charge) = model.catalog.extra_charges.get_mut(charge_id) {
                        charge.concept = form.text("concept").trim().to_string();
                        charge.amount = amount;
                    }
                    model.show_toast(Toast::success("Cargo actualizado correctamente"));
                }
                None => {
                    let record = ExtraCharge {
                        id: model.catalog.extra_charges.next_id(),
                        concept: form.text("concept").trim().to_string(),
                        amount,
                        status: ChargeStatus::Pending,
                        date: Local::now().date_naive(),
                    };
                    model.catalog.extra_charges.insert(record);
                    model.show_toast(Toast::success("Cargo extra añadido a la cuenta"));
                }
            }
            model.unmount_form();
        }
        ActiveForm::ShippingConfig { form } => {
            if !active.validity() {
                return;
            }
            let costs = (
                validate::parse_cost(form.text("base_cost")),
                validate::parse_cost(form.text("cost_normal")),
                validate::parse_cost(form.text("cost_extended")),
            );
            let (Some(base), Some(normal), Some(extended)) = costs else {
                return;
            };
            model.catalog.shipping.base_cost_articles = base;
            model.catalog.shipping.cost_normal_zone = normal;
            model.catalog.shipping.cost_extended_zone = extended;
            model.catalog.shipping.free_shipping_articles = form.toggle("free_articles");
            model.catalog.shipping.free_shipping_birds = form.toggle("free_birds");
            model.show_toast(Toast::success(
                "Configuración de costos guardada correctamente",
            ));
        }
        ActiveForm::PaymentAccount { form } => {
            if let Some(message) = validate::payment_account_error(
                form.text("bank"),
                form.text("beneficiary"),
                form.text("clabe"),
                form.text("card"),
            ) {
                model.show_toast(Toast::error(message));
                return;
            }
            model.catalog.payment.bank_name = form.text("bank").trim().to_string();
            model.catalog.payment.beneficiary = form.text("beneficiary").trim().to_string();
            model.catalog.payment.clabe = form.text("clabe").trim().to_string();
            model.catalog.payment.card_number = form.text("card").trim().to_string();
            model.show_toast(Toast::success("Método de pago actualizado correctamente"));
        }
        ActiveForm::PaymentChannel { id, form } => {
            if let Some(channel) = model.catalog.payment_channels.get_mut(id) {
                channel.active = form.toggle("active");
                channel.clabe = form.text("clabe").trim().to_string();
            }
            model.show_toast(Toast::success("Canales de venta actualizados correctamente"));
            model.unmount_form();
            model.nav.payment_pane = ConfigPane::Channels;
        }
        ActiveForm::WhatsAppMain { form } => {
            if let Some(message) = validate::whatsapp_config_error(form.text("phone")) {
                model.show_toast(Toast::error(message));
                return;
            }
            model.catalog.whatsapp.active = form.toggle("active");
            model.catalog.whatsapp.phone_number = form.text("phone").trim().to_string();
            model.catalog.whatsapp.template = form.text("template").to_string();
            model.show_toast(Toast::success(
                "Configuración principal de WhatsApp guardada",
            ));
        }
        ActiveForm::WhatsAppChannel { id, form } => {
            if let Some(channel) = model.catalog.whatsapp_channels.get_mut(id) {
                channel.active = form.toggle("active");
                channel.phone_number = form.text("phone").trim().to_string();
                channel.template = form.text("template").to_string();
            }
            model.show_toast(Toast::success(
                "Canales de WhatsApp actualizados correctamente",
            ));
            model.unmount_form();
            model.nav.whatsapp_pane = ConfigPane::Channels;
        }
        ActiveForm::Inventory { form } => {
            let active_toggle = form.toggle("active");
            if let Some(message) =
                validate::inventory_policy_error(active_toggle, form.text("hours"))
            {
                model.show_toast(Toast::error(message));
                return;
            }
            model.catalog.inventory.active = active_toggle;
            if let Some(hours) = validate::parse_hours(form.text("hours")) {
                model.catalog.inventory.hours = hours;
            }
            model.show_toast(Toast::success(
                "Configuración de liberación guardada correctamente",
            ));
        }
        ActiveForm::Notifications { form } => {
            let active_toggle = form.toggle("active");
            if let Some(message) =
                validate::notification_config_error(active_toggle, form.text("email"))
            {
                model.show_toast(Toast::error(message));
                return;
            }
            model.catalog.notifications.active = active_toggle;
            model.catalog.notifications.email = form.text("email").trim().to_string();
            model.show_toast(Toast::success(
                "Configuración de alertas guardada correctamente",
            ));
        }
        ActiveForm::IdentityLogo { form } => {
            let path = form.text("path").trim().to_string();
            if !validate::is_valid_logo_path(&path) {
                model.show_toast(Toast::error(
                    "Por favor, selecciona un formato válido (PNG, JPG, SVG).",
                ));
                return;
            }
            model.catalog.logo = Some(path);
            model.nav.identity_phase = IdentityPhase::Preview;
            model.show_toast(Toast::success("Logo actualizado correctamente"));
            model.unmount_form();
        }
    }
}

/// Cancel the mounted form. Entity forms ask before discarding; config
/// panes just reload from the catalog.
pub fn cancel_active_form(model: &mut Model) {
    match model.form {
        Some(
            ActiveForm::Media { .. }
            | ActiveForm::Product { .. }
            | ActiveForm::Category { .. }
            | ActiveForm::User { .. }
            | ActiveForm::Charge { .. }
            | ActiveForm::IdentityLogo { .. },
        ) => request_discard_form(model),
        Some(ActiveForm::PaymentChannel { .. }) => {
            model.unmount_form();
            model.nav.payment_pane = ConfigPane::Channels;
        }
        Some(ActiveForm::WhatsAppChannel { .. }) => {
            model.unmount_form();
            model.nav.whatsapp_pane = ConfigPane::Channels;
        }
        // Config panes: drop edits and return to the system menu.
        Some(_) => {
            model.unmount_form();
            model.nav.goto_system(SystemSection::Menu);
        }
        None => {}
    }
}

// ---- swipe panel actions --------------------------------------------------

/// Primary action of a revealed left panel for the visible list.
pub fn swipe_primary(model: &mut Model, row_id: &str) {
    model.ui.active_swipe.close();
    match model.nav.active_tab {
        Tab::Orders => request_mark_paid(model, row_id),
        Tab::Shop => {
            let position = position_in_shop(model, row_id);
            model.nav.shop.selected = position;
            edit_selected_product(model);
        }
        Tab::System if model.nav.system_section == SystemSection::Billing => {
            let position = position_in_charges(model, row_id);
            model.nav.charges.selected = position;
            edit_selected_charge(model);
        }
        _ => {}
    }
}

/// Secondary action of a revealed right panel.
pub fn swipe_secondary(model: &mut Model, row_id: &str) {
    model.ui.active_swipe.close();
    match model.nav.active_tab {
        Tab::Orders => request_cancel_order(model, row_id),
        Tab::Shop => request_delete_product(model, row_id),
        Tab::System if model.nav.system_section == SystemSection::Billing => {
            request_delete_charge(model, row_id)
        }
        _ => {}
    }
}

fn position_in_shop(model: &Model, row_id: &str) -> usize {
    view::product_page(model)
        .items
        .iter()
        .position(|p| p.id == row_id)
        .unwrap_or(0)
}

fn position_in_charges(model: &Model, row_id: &str) -> usize {
    model
        .catalog
        .extra_charges
        .all()
        .iter()
        .position(|c| c.id == row_id)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_action_new_category_mounts_form() {
        let mut model = Model::new();
        apply_quick_action(&mut model, QuickAction::NewCategory);
        assert_eq!(model.nav.active_tab, Tab::Gallery);
        assert_eq!(model.nav.gallery_mode, GalleryMode::CategoryCreate);
        assert!(matches!(
            model.form,
            Some(ActiveForm::Category { id: None, .. })
        ));
        assert!(!model.ui.form_valid);
    }

    #[test]
    fn test_quick_action_shipping_mounts_config_form() {
        let mut model = Model::new();
        apply_quick_action(&mut model, QuickAction::ConfigureShipping);
        assert_eq!(model.nav.system_section, SystemSection::Shipping);
        assert!(matches!(model.form, Some(ActiveForm::ShippingConfig { .. })));
    }

    #[test]
    fn test_mark_paid_needs_confirmation() {
        let mut model = Model::new();
        request_mark_paid(&mut model, "ORD-002");
        // Dialog open, order untouched.
        assert_eq!(
            model.catalog.orders.get("ORD-002").unwrap().status,
            OrderStatus::Pending
        );
        execute_confirm(&mut model);
        assert_eq!(
            model.catalog.orders.get("ORD-002").unwrap().status,
            OrderStatus::Paid
        );
        assert!(model.ui.toast.is_some());
    }

    #[test]
    fn test_cancel_confirm_leaves_order_untouched() {
        let mut model = Model::new();
        request_cancel_order(&mut model, "ORD-002");
        model.ui.cancel_confirm();
        assert_eq!(
            model.catalog.orders.get("ORD-002").unwrap().status,
            OrderStatus::Pending
        );
        assert!(model.ui.toast.is_none());
    }

    #[test]
    fn test_save_invalid_category_does_not_mutate() {
        let mut model = Model::new();
        let before = model.catalog.categories.len();
        apply_quick_action(&mut model, QuickAction::NewCategory);
        if let Some(form) = model.form.as_mut() {
            for c in "   ".chars() {
                form.form_mut().input_char(c);
            }
        }
        model.sync_form_validity();
        save_active_form(&mut model);
        assert_eq!(model.catalog.categories.len(), before);
        assert!(!model.ui.form_valid);
        assert!(model.form.is_some(), "form stays mounted after refused save");
    }

    #[test]
    fn test_save_valid_category_prepends_record() {
        let mut model = Model::new();
        let before = model.catalog.categories.len();
        apply_quick_action(&mut model, QuickAction::NewCategory);
        if let Some(form) = model.form.as_mut() {
            for c in "Temporada de Cosecha".chars() {
                form.form_mut().input_char(c);
            }
        }
        model.sync_form_validity();
        save_active_form(&mut model);
        assert_eq!(model.catalog.categories.len(), before + 1);
        assert_eq!(model.catalog.categories.all()[0].name, "Temporada de Cosecha");
        assert_eq!(model.nav.gallery_mode, GalleryMode::List);
        assert!(model.form.is_none());
    }

    #[test]
    fn test_payment_save_requires_clabe_or_card() {
        let mut model = Model::new();
        enter_system_section(&mut model, SystemSection::Payment);
        if let Some(form) = model.form.as_mut() {
            let state = form.form_mut();
            state.field_mut("clabe").unwrap().value =
                crate::forms::FieldValue::Text(String::new());
            state.field_mut("card").unwrap().value = crate::forms::FieldValue::Text(String::new());
        }
        save_active_form(&mut model);
        let toast = model.ui.toast.as_ref().unwrap();
        assert_eq!(toast.kind, crate::model::ToastKind::Error);
        assert_eq!(
            model.catalog.payment.clabe, "012345678901234567",
            "refused save keeps the stored account"
        );
    }

    #[test]
    fn test_inventory_save_rejects_zero_hours() {
        let mut model = Model::new();
        enter_system_section(&mut model, SystemSection::Inventory);
        if let Some(form) = model.form.as_mut() {
            let state = form.form_mut();
            state.field_mut("hours").unwrap().value =
                crate::forms::FieldValue::Text("0".to_string());
        }
        save_active_form(&mut model);
        assert_eq!(model.catalog.inventory.hours, 24);
        assert_eq!(
            model.ui.toast.as_ref().unwrap().kind,
            crate::model::ToastKind::Error
        );
    }

    #[test]
    fn test_discard_form_returns_category_edit_to_categories_list() {
        let mut model = Model::new();
        model.nav.goto_gallery(GalleryMode::CategoriesList);
        model.nav.categories.selected = 0;
        edit_selected_category(&mut model);
        assert_eq!(model.nav.gallery_mode, GalleryMode::CategoryEdit);

        cancel_active_form(&mut model);
        execute_confirm(&mut model);
        assert_eq!(model.nav.gallery_mode, GalleryMode::CategoriesList);
        assert!(model.form.is_none());
    }

    #[test]
    fn test_toggle_user_is_immediate_with_toast() {
        let mut model = Model::new();
        assert!(model.catalog.users.get("USR-003").is_some_and(|u| !u.active));
        toggle_user_active(&mut model, "USR-003");
        assert!(model.catalog.users.get("USR-003").unwrap().active);
        let toast = model.ui.toast.as_ref().unwrap();
        assert!(toast.message.contains("activado"));
    }

    #[test]
    fn test_assign_all_zones() {
        let mut model = Model::new();
        assign_all_zones(&mut model, ShippingZone::Normal);
        assert!(model
            .catalog
            .zones
            .all()
            .iter()
            .all(|z| z.zone == ShippingZone::Normal));
    }

    #[test]
    fn test_logo_save_validates_extension() {
        let mut model = Model::new();
        model.nav.goto_system(SystemSection::Identity);
        start_logo_edit(&mut model);
        if let Some(form) = model.form.as_mut() {
            for c in "logo.gif".chars() {
                form.form_mut().input_char(c);
            }
        }
        save_active_form(&mut model);
        assert_eq!(
            model.ui.toast.as_ref().unwrap().kind,
            crate::model::ToastKind::Error
        );
        assert_eq!(model.nav.identity_phase, IdentityPhase::Editing);

        if let Some(form) = model.form.as_mut() {
            let state = form.form_mut();
            state.field_mut("path").unwrap().value =
                crate::forms::FieldValue::Text("marca.png".to_string());
        }
        save_active_form(&mut model);
        assert_eq!(model.nav.identity_phase, IdentityPhase::Preview);
        assert_eq!(model.catalog.logo.as_deref(), Some("marca.png"));
    }
}
