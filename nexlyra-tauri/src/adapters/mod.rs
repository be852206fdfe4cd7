//! 平台适配器模块

mod content_surface;
mod settings_store;
mod window_controller;

pub use content_surface::TauriContentSurface;
pub use settings_store::TauriSettingsStore;
pub use window_controller::TauriWindowController;
