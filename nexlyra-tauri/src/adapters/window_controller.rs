//! Tauri 窗口控制适配器

use async_trait::async_trait;
use tauri::{AppHandle, Manager};

use nexlyra_core::traits::{WindowAction, WindowController};

use crate::MAIN_WINDOW_LABEL;

/// Applies chrome window controls to the main window.
///
/// A missing window (already closed) is silently ignored, matching the
/// fire-and-forget contract of the trait.
pub struct TauriWindowController {
    app_handle: AppHandle,
}

impl TauriWindowController {
    #[must_use]
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

#[async_trait]
impl WindowController for TauriWindowController {
    async fn apply(&self, action: WindowAction) {
        let Some(window) = self.app_handle.get_window(MAIN_WINDOW_LABEL) else {
            log::debug!("Window control ignored, no main window");
            return;
        };

        let result = match action {
            WindowAction::Minimize => window.minimize(),
            WindowAction::Maximize => {
                if window.is_maximized().unwrap_or(false) {
                    window.unmaximize()
                } else {
                    window.maximize()
                }
            }
            WindowAction::Close => window.close(),
        };

        if let Err(e) = result {
            log::warn!("Window control {action:?} failed: {e}");
        }
    }
}
