//! Platform-agnostic application bootstrap.
//!
//! Provides `AppState` (service container) and `AppStateBuilder`
//! (collaborator injection). The platform frontend constructs this once
//! at startup and runs the startup sequence before serving commands.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::{startup_state, NavigationService, ServiceContext, SettingsService};
use crate::traits::{ContentSurface, SettingsStore, WindowController};
use crate::types::{Screen, Settings};

/// Platform-agnostic application state.
///
/// Holds all services and the `ServiceContext`. The frontend constructs
/// this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds all platform collaborators)
    pub ctx: Arc<ServiceContext>,
    /// Settings service
    pub settings_service: SettingsService,
    /// Navigation service (owns the UI display state)
    pub navigation_service: NavigationService,
}

impl AppState {
    /// Run the startup sequence: restore the persisted session.
    ///
    /// Loads settings once, decides the initial screen, and primes the
    /// content surface with the last visited address (or the blank page).
    /// Never fails; an unreachable settings store degrades to defaults.
    pub async fn run_startup(&self) {
        let settings = match self.settings_service.load().await {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings, using defaults: {e}");
                Settings::default()
            }
        };

        let ui = startup_state(&settings);
        let surface_result = match ui.screen {
            Screen::Browsing => self.ctx.content_surface.load(&ui.address_text).await,
            Screen::Homepage => self.ctx.content_surface.clear().await,
        };
        if let Err(e) = surface_result {
            log::debug!("Startup surface priming ignored: {e}");
        }

        self.navigation_service.restore(ui).await;
    }
}

/// Builder for constructing `AppState` with platform-specific
/// collaborators.
///
/// # Required collaborators
/// - `settings_store` — how settings are persisted
/// - `content_surface` — the embedded web content view
/// - `window_controller` — native window control
pub struct AppStateBuilder {
    settings_store: Option<Arc<dyn SettingsStore>>,
    content_surface: Option<Arc<dyn ContentSurface>>,
    window_controller: Option<Arc<dyn WindowController>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings_store: None,
            content_surface: None,
            window_controller: None,
        }
    }

    #[must_use]
    pub fn settings_store(mut self, store: Arc<dyn SettingsStore>) -> Self {
        self.settings_store = Some(store);
        self
    }

    #[must_use]
    pub fn content_surface(mut self, surface: Arc<dyn ContentSurface>) -> Self {
        self.content_surface = Some(surface);
        self
    }

    #[must_use]
    pub fn window_controller(mut self, controller: Arc<dyn WindowController>) -> Self {
        self.window_controller = Some(controller);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if a required collaborator is
    /// missing.
    pub fn build(self) -> CoreResult<AppState> {
        let settings_store = self
            .settings_store
            .ok_or_else(|| CoreError::ValidationError("settings_store is required".to_string()))?;
        let content_surface = self
            .content_surface
            .ok_or_else(|| CoreError::ValidationError("content_surface is required".to_string()))?;
        let window_controller = self.window_controller.ok_or_else(|| {
            CoreError::ValidationError("window_controller is required".to_string())
        })?;

        let ctx = Arc::new(ServiceContext::new(
            settings_store.clone(),
            content_surface,
            window_controller,
        ));

        let settings_service = SettingsService::new(settings_store);
        let navigation_service = NavigationService::new(Arc::clone(&ctx));

        Ok(AppState {
            ctx,
            settings_service,
            navigation_service,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
