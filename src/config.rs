use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Vim-style j/k aliases in list views.
    #[serde(default)]
    pub vim_mode: bool,

    /// Swipe gestures on list cards. Disable for terminals without mouse
    /// reporting; lists fall back to persistent action hotkeys.
    #[serde(default = "default_mouse_gestures")]
    pub mouse_gestures: bool,
}

fn default_mouse_gestures() -> bool {
    true
}
