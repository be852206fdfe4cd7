//! Nexlyra Core Library
//!
//! Provides the core logic of the Nexlyra browser shell, including:
//! - Intent classification (URL / search / AI)
//! - Navigation dispatch and UI display state
//! - Suggestion rendering and settings access
//!
//! This library is platform-independent, abstracting the settings store,
//! the content surface, and window control through traits implemented by
//! the Tauri frontend.

pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use state::{AppState, AppStateBuilder};
pub use traits::{ContentSurface, SettingsStore, WindowAction, WindowController};
