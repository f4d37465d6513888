//! Application Model
//!
//! Pure state only, organized into focused sub-models:
//!
//! - **Catalog**: repository-backed entity data (see `store`)
//! - **NavigationModel**: tabs, view modes, cursors, search
//! - **UiModel**: toast, confirm dialog, modal lock, palette
//! - **ActiveForm**: the single mounted create/edit form, if any
//!
//! All I/O (terminal, clock-driven effects) lives in the main loop and the
//! handlers; everything here is cloneable and testable.

pub mod navigation;
pub mod types;
pub mod ui;

pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

use crate::forms::ActiveForm;
use crate::store::{seed, Catalog};

#[derive(Debug, Clone)]
pub struct Model {
    pub catalog: Catalog,
    pub nav: NavigationModel,
    pub ui: UiModel,
    /// Capability slot for the mounted form. Assigned when a create/edit
    /// view opens, cleared when it leaves; the root dispatches save/cancel
    /// here instead of reaching into child views.
    pub form: Option<ActiveForm>,
}

impl Model {
    /// Model over the demo catalog.
    pub fn new() -> Self {
        Self::with_catalog(seed::demo_catalog())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let nav = NavigationModel::new(catalog.logo.is_some());
        Self {
            catalog,
            nav,
            ui: UiModel::new(),
            form: None,
        }
    }

    /// Mount a form and push its initial validity to the save pill.
    pub fn mount_form(&mut self, form: ActiveForm) {
        self.ui.form_valid = form.validity();
        self.form = Some(form);
    }

    /// Unmount the form and drop its validity flag.
    pub fn unmount_form(&mut self) {
        self.form = None;
        self.ui.form_valid = false;
        self.ui.upload_progress = None;
    }

    /// Recompute the validity flag after a form edit.
    pub fn sync_form_validity(&mut self) {
        self.ui.form_valid = self.form.as_ref().is_some_and(|f| f.validity());
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.ui.show_toast(toast);
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
