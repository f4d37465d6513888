//! UI Model
//!
//! Toast, confirmation dialog, modal lock, quick-action palette, the
//! form-validity flag, and the swipe registry for the visible list.

use crate::logic::swipe::ActiveSwipe;
use crate::logic::ui::should_dismiss_toast;
use crate::model::types::{
    ConfirmAction, ConfirmState, ConfirmVariant, DragState, ModalLock, PaletteState, RowHit, Toast,
};

#[derive(Debug, Clone, Default)]
pub struct UiModel {
    /// Visible toast, if any. A new toast replaces the old one.
    pub toast: Option<Toast>,

    /// Pending confirmation dialog. A new request replaces the old one.
    pub confirm: Option<ConfirmState>,

    /// Held while any overlay (confirm dialog, palette) is open.
    pub modal_lock: ModalLock,

    /// Validity of the active form, driving the external save pill.
    pub form_valid: bool,

    /// Quick-action palette overlay.
    pub palette: Option<PaletteState>,

    /// Simulated upload progress for the active media/logo source (0-100).
    pub upload_progress: Option<u8>,

    /// Open swiped card in the visible list.
    pub active_swipe: ActiveSwipe,

    /// Mouse drag in progress over a card.
    pub drag: Option<DragState>,

    /// Card regions of the visible list, refreshed every render pass.
    pub row_hits: Vec<RowHit>,

    /// Vim-style j/k aliases in list views.
    pub vim_mode: bool,

    /// Swipe gestures enabled; when false, lists show persistent action
    /// hotkeys instead.
    pub mouse_gestures: bool,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            mouse_gestures: true,
            ..Self::default()
        }
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    pub fn toast_expired(&self) -> bool {
        self.toast
            .as_ref()
            .is_some_and(|t| should_dismiss_toast(t.shown_at.elapsed().as_millis()))
    }

    /// Open a confirmation dialog, replacing any pending one. The modal lock
    /// is held once regardless of how many requests were replaced.
    pub fn request_confirm(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
        variant: ConfirmVariant,
        action: ConfirmAction,
    ) {
        if self.confirm.is_none() {
            self.modal_lock.acquire();
        }
        self.confirm = Some(ConfirmState {
            title: title.into(),
            message: message.into(),
            confirm_label: confirm_label.into(),
            variant,
            action,
        });
    }

    /// Take the pending action for execution, closing the dialog.
    pub fn take_confirm(&mut self) -> Option<ConfirmAction> {
        let state = self.confirm.take()?;
        self.modal_lock.release();
        Some(state.action)
    }

    /// Close the dialog without side effects.
    pub fn cancel_confirm(&mut self) {
        if self.confirm.take().is_some() {
            self.modal_lock.release();
        }
    }

    pub fn open_palette(&mut self, palette: PaletteState) {
        if self.palette.is_none() {
            self.modal_lock.acquire();
        }
        self.palette = Some(palette);
    }

    pub fn close_palette(&mut self) {
        if self.palette.take().is_some() {
            self.modal_lock.release();
        }
    }

    pub fn has_modal(&self) -> bool {
        self.modal_lock.locked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::ToastKind;

    #[test]
    fn test_second_toast_replaces_first() {
        let mut ui = UiModel::new();
        ui.show_toast(Toast::success("primera"));
        ui.show_toast(Toast::error("segunda"));
        let toast = ui.toast.as_ref().unwrap();
        assert_eq!(toast.message, "segunda");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_confirm_lifecycle_releases_lock() {
        let mut ui = UiModel::new();
        ui.request_confirm(
            "¿Eliminar?",
            "Se borrará.",
            "Sí, Eliminar",
            ConfirmVariant::Danger,
            ConfirmAction::DeleteMedia {
                media_id: "MED-001".to_string(),
            },
        );
        assert!(ui.has_modal());

        let action = ui.take_confirm().unwrap();
        assert!(matches!(action, ConfirmAction::DeleteMedia { .. }));
        assert!(!ui.has_modal());
    }

    #[test]
    fn test_cancel_confirm_releases_lock_without_action() {
        let mut ui = UiModel::new();
        ui.request_confirm(
            "¿Cancelar Orden?",
            "No se puede deshacer.",
            "Sí, Cancelar",
            ConfirmVariant::Danger,
            ConfirmAction::CancelOrder {
                order_id: "ORD-002".to_string(),
            },
        );
        ui.cancel_confirm();
        assert!(ui.confirm.is_none());
        assert!(!ui.has_modal());
        assert!(ui.take_confirm().is_none());
    }

    #[test]
    fn test_second_confirm_replaces_first_without_double_lock() {
        let mut ui = UiModel::new();
        ui.request_confirm(
            "¿Eliminar medio?",
            "m",
            "Sí",
            ConfirmVariant::Danger,
            ConfirmAction::DeleteMedia {
                media_id: "MED-001".to_string(),
            },
        );
        ui.request_confirm(
            "¿Eliminar producto?",
            "m",
            "Sí",
            ConfirmVariant::Danger,
            ConfirmAction::DeleteProduct {
                product_id: "PRD-001".to_string(),
            },
        );
        assert!(matches!(
            ui.confirm.as_ref().unwrap().action,
            ConfirmAction::DeleteProduct { .. }
        ));
        ui.cancel_confirm();
        assert!(!ui.has_modal());
    }

    #[test]
    fn test_palette_holds_lock_while_open() {
        let mut ui = UiModel::new();
        ui.open_palette(PaletteState {
            actions: vec![],
            selected: 0,
        });
        assert!(ui.has_modal());
        ui.close_palette();
        assert!(!ui.has_modal());
    }
}
