//! Shared UI state types: toasts, confirmations, quick actions, drags.

use std::time::Instant;

use crate::logic::swipe::SwipeTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient feedback message. At most one is alive; showing another
/// replaces it.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            shown_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            shown_at: Instant::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmVariant {
    Danger,
    Warning,
}

/// The mutation a confirmation dialog is gating. Tagged variants instead of
/// callbacks: the dialog never captures behavior, only names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    MarkOrderPaid { order_id: String },
    CancelOrder { order_id: String },
    DeleteMedia { media_id: String },
    DeleteCategory { category_id: String },
    DeleteProduct { product_id: String },
    DeleteUser { user_id: String },
    DeleteCharge { charge_id: String },
    DiscardForm,
}

/// A pending confirmation. Only one lives at a time; requesting a new one
/// overwrites the previous dialog.
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub variant: ConfirmVariant,
    pub action: ConfirmAction,
}

/// Shortcut into a specific domain + view mode. A closed set keyed by
/// variant, so renaming a display label cannot silently break dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    ViewMedia,
    NewMedia,
    ViewCategories,
    NewCategory,
    ViewProducts,
    NewProduct,
    ViewOrders,
    AddLogo,
    PaymentMethod,
    WhatsApp,
    ConfigureShipping,
    InventoryRelease,
    Notifications,
    Billing,
    Users,
    SystemConfig,
}

impl QuickAction {
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::ViewMedia => "Ver Medios",
            QuickAction::NewMedia => "Nuevo Medio",
            QuickAction::ViewCategories => "Ver Categorías",
            QuickAction::NewCategory => "Nueva Categoría",
            QuickAction::ViewProducts => "Ver Productos",
            QuickAction::NewProduct => "Nuevo Producto",
            QuickAction::ViewOrders => "Ver Órdenes",
            QuickAction::AddLogo => "Añadir Logo",
            QuickAction::PaymentMethod => "Método de Pago",
            QuickAction::WhatsApp => "WhatsApp",
            QuickAction::ConfigureShipping => "Configurar Envíos",
            QuickAction::InventoryRelease => "Lib. Inventario",
            QuickAction::Notifications => "Notificaciones",
            QuickAction::Billing => "Estado de Cuenta",
            QuickAction::Users => "Usuarios",
            QuickAction::SystemConfig => "Config",
        }
    }
}

/// Quick-action palette overlay state.
#[derive(Debug, Clone)]
pub struct PaletteState {
    pub actions: Vec<QuickAction>,
    pub selected: usize,
}

/// An in-flight mouse drag over a list card.
#[derive(Debug, Clone)]
pub struct DragState {
    pub row_id: String,
    pub tracker: SwipeTracker,
    pub action_width: i32,
}

/// Screen region of a rendered card, recorded each frame so mouse events
/// can be mapped back to the row they landed on.
#[derive(Debug, Clone)]
pub struct RowHit {
    pub id: String,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub caps: crate::logic::swipe::SwipeCaps,
    pub action_width: i32,
}

impl RowHit {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x + self.width
            && row >= self.y
            && row < self.y + self.height
    }
}

/// Reference-counted modal lock. While held, list scrolling and background
/// hotkeys are suppressed. Every overlay releases on all of its exit paths.
#[derive(Debug, Clone, Default)]
pub struct ModalLock {
    count: u32,
}

impl ModalLock {
    pub fn acquire(&mut self) {
        self.count += 1;
    }

    pub fn release(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    pub fn locked(&self) -> bool {
        self.count > 0
    }
}
