use std::path::PathBuf;

/// Debug log location, only written when --debug is set.
pub fn get_debug_log_path() -> PathBuf {
    std::env::temp_dir().join("ranchtui-debug.log")
}
