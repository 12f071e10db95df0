//! Settings persistence back to the config file.

use tickerdock_config::{save_config, save_config_to_path};

use super::core::TickerdockApp;

impl TickerdockApp {
    /// Write settings if a resize marked them dirty.
    pub(super) fn flush_pending_save(&mut self) {
        if self.pending_save {
            self.pending_save = false;
            self.save_settings();
        }
    }

    /// Persist the current window size to disk, best effort.
    ///
    /// Height always comes from the dock monitor, so a collapsed strip
    /// is never written as the window height.
    pub(super) fn save_settings(&mut self) {
        if let Some(window) = &self.window {
            let logical = window.inner_size().to_logical::<f64>(window.scale_factor());
            let width = logical.width.round() as u32;
            if width > 0 {
                self.config.window.width = width;
            }
        }
        self.config.window.height = self.dock.expanded_height();

        let result = match &self.config_path {
            Some(path) => save_config_to_path(&self.config, path),
            None => save_config(&self.config),
        };
        if let Err(e) = result {
            tracing::warn!("failed to save settings: {e}");
        }
    }
}
