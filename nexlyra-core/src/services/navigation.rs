//! Navigation dispatch.
//!
//! Consumes raw address-bar input plus the current configuration,
//! resolves a target address, drives the content surface, and keeps the
//! UI display state and the persisted last-visited address in sync.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::services::intent::classify;
use crate::services::ServiceContext;
use crate::types::{
    keys, Intent, IntentKind, Settings, UiState, BLANK_ADDRESS, HOME_SENTINEL,
};

/// What a dispatch call did.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavigationOutcome {
    /// Blank input, nothing happened.
    Ignored,
    /// The home sentinel was entered; the homepage is showing.
    Homepage,
    /// The surface was asked to load `url`.
    Loaded { url: String },
}

/// 导航调度服务
///
/// Owns the UI display state; all mutation happens here, in response to
/// dispatch calls and content-surface navigation events.
pub struct NavigationService {
    ctx: Arc<ServiceContext>,
    ui: RwLock<UiState>,
}

impl NavigationService {
    /// 创建导航服务实例（初始为首页状态）
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            ui: RwLock::new(UiState::homepage()),
        }
    }

    /// Snapshot of the current UI display state.
    pub async fn ui_state(&self) -> UiState {
        self.ui.read().await.clone()
    }

    /// Replace the UI state wholesale (startup restoration).
    pub(crate) async fn restore(&self, state: UiState) {
        *self.ui.write().await = state;
    }

    /// Resolve `input` and navigate.
    ///
    /// `force` overrides the classified intent kind without altering the
    /// extracted query/target (explicit suggestion-row choice). Load and
    /// persistence failures are swallowed; this call never fails.
    pub async fn dispatch(
        &self,
        input: &str,
        force: Option<IntentKind>,
        settings: &Settings,
    ) -> NavigationOutcome {
        if input.trim().is_empty() {
            return NavigationOutcome::Ignored;
        }

        if input == HOME_SENTINEL {
            if let Err(e) = self.ctx.content_surface.clear().await {
                log::debug!("Content surface clear ignored: {e}");
            }
            *self.ui.write().await = UiState::homepage();
            return NavigationOutcome::Homepage;
        }

        let mut intent = classify(input);
        if let Some(kind) = force {
            intent = intent.with_kind(kind);
        }
        let target = resolve_target(&intent, settings);

        // Stale navigations abort; that is expected, not a failure.
        if let Err(e) = self.ctx.content_surface.load(&target).await {
            log::debug!("Content surface load ignored: {e}");
        }

        *self.ui.write().await = UiState::browsing(target.clone());

        if let Err(e) = self.ctx.settings_store.set(keys::LAST_URL, &target).await {
            log::warn!("Failed to persist last visited address: {e}");
        }

        NavigationOutcome::Loaded { url: target }
    }

    /// The content surface finished a navigation at `final_url`.
    ///
    /// Keeps the address text consistent with the surface and persists
    /// the new address; a blank surface means the homepage is up.
    pub async fn navigation_completed(&self, final_url: &str) {
        if final_url == BLANK_ADDRESS {
            *self.ui.write().await = UiState::homepage();
            return;
        }

        *self.ui.write().await = UiState::browsing(final_url);

        if let Err(e) = self.ctx.settings_store.set(keys::LAST_URL, final_url).await {
            log::warn!("Failed to persist last visited address: {e}");
        }
    }

    /// Step the content surface back once in its history.
    pub async fn back(&self) {
        if let Err(e) = self.ctx.content_surface.back().await {
            log::debug!("Content surface back ignored: {e}");
        }
    }
}

/// Resolve a classified intent to a loadable address.
fn resolve_target(intent: &Intent, settings: &Settings) -> String {
    match intent {
        Intent::Url { target } => ensure_scheme(target),
        Intent::Ai { query } => settings.ai_engine.resolve_url(query),
        Intent::Search { query } => settings.engine.query_url(query),
    }
}

/// Prefix the default secure scheme when `target` carries none.
fn ensure_scheme(target: &str) -> String {
    if target.starts_with("http://") || target.starts_with("https://") {
        target.to_string()
    } else {
        format!("https://{target}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, TestContext};
    use crate::types::{AiEngine, Screen, SearchEngine};

    fn service(tc: &TestContext) -> NavigationService {
        NavigationService::new(Arc::clone(&tc.ctx))
    }

    // ==================== target resolution ====================

    #[test]
    fn test_resolve_search_target() {
        let intent = classify("weather");
        let target = resolve_target(&intent, &Settings::default());
        assert_eq!(target, "https://www.google.com/search?q=weather");
    }

    #[test]
    fn test_resolve_url_prefixes_secure_scheme() {
        assert_eq!(ensure_scheme("example.com"), "https://example.com");
        assert_eq!(ensure_scheme("http://example.com"), "http://example.com");
        assert_eq!(
            ensure_scheme("https://example.com/a"),
            "https://example.com/a"
        );
    }

    // ==================== dispatch ====================

    #[tokio::test]
    async fn dispatch_blank_input_is_a_no_op() {
        let tc = create_test_context();
        let svc = service(&tc);

        let outcome = svc.dispatch("   ", None, &Settings::default()).await;
        assert_eq!(outcome, NavigationOutcome::Ignored);
        assert!(tc.surface.loads().await.is_empty());
        assert!(tc.store.writes().await.is_empty());
        assert!(tc.controller.actions().await.is_empty());
    }

    #[tokio::test]
    async fn dispatch_home_sentinel_shows_homepage_without_load() {
        let tc = create_test_context();
        let svc = service(&tc);

        let outcome = svc
            .dispatch("nexlyra://home", None, &Settings::default())
            .await;
        assert_eq!(outcome, NavigationOutcome::Homepage);

        // surface cleared, not navigated; nothing persisted
        assert!(tc.surface.loads().await.is_empty());
        assert_eq!(tc.surface.clear_count().await, 1);
        assert!(tc.store.writes().await.is_empty());

        let ui = svc.ui_state().await;
        assert_eq!(ui.screen, Screen::Homepage);
        assert_eq!(ui.address_text, HOME_SENTINEL);
    }

    #[tokio::test]
    async fn dispatch_search_builds_engine_query_url() {
        let tc = create_test_context();
        let svc = service(&tc);

        let outcome = svc.dispatch("weather", None, &Settings::default()).await;
        assert_eq!(
            outcome,
            NavigationOutcome::Loaded {
                url: "https://www.google.com/search?q=weather".to_string()
            }
        );
        assert_eq!(
            tc.surface.loads().await,
            vec!["https://www.google.com/search?q=weather".to_string()]
        );
    }

    #[tokio::test]
    async fn dispatch_url_input_navigates_with_scheme() {
        let tc = create_test_context();
        let svc = service(&tc);

        svc.dispatch("example.com", None, &Settings::default()).await;
        assert_eq!(
            tc.surface.loads().await,
            vec!["https://example.com".to_string()]
        );
    }

    #[tokio::test]
    async fn dispatch_forced_ai_on_chatgpt_uses_fixed_entry_url() {
        let tc = create_test_context();
        let svc = service(&tc);
        let settings = Settings {
            ai_engine: AiEngine::ChatGpt,
            ..Settings::default()
        };

        let outcome = svc
            .dispatch("paris", Some(IntentKind::Ai), &settings)
            .await;
        assert_eq!(
            outcome,
            NavigationOutcome::Loaded {
                url: "https://chatgpt.com/".to_string()
            }
        );
    }

    #[tokio::test]
    async fn dispatch_forced_search_overrides_question() {
        let tc = create_test_context();
        let svc = service(&tc);
        let settings = Settings {
            engine: SearchEngine::Bing,
            ..Settings::default()
        };

        svc.dispatch("how do I sort a list", Some(IntentKind::Search), &settings)
            .await;
        assert_eq!(
            tc.surface.loads().await,
            vec!["https://www.bing.com/search?q=how%20do%20I%20sort%20a%20list".to_string()]
        );
    }

    #[tokio::test]
    async fn dispatch_persists_last_url_and_hides_homepage() {
        let tc = create_test_context();
        let svc = service(&tc);

        svc.dispatch("weather", None, &Settings::default()).await;

        let writes = tc.store.writes().await;
        assert_eq!(
            writes,
            vec![(
                keys::LAST_URL.to_string(),
                "https://www.google.com/search?q=weather".to_string()
            )]
        );

        let ui = svc.ui_state().await;
        assert_eq!(ui.screen, Screen::Browsing);
        assert!(!ui.suggestions_visible);
    }

    #[tokio::test]
    async fn dispatch_swallows_aborted_loads_and_still_persists() {
        let tc = create_test_context();
        tc.surface.fail_next_load("stale navigation").await;
        let svc = service(&tc);

        let outcome = svc.dispatch("example.com", None, &Settings::default()).await;
        assert_eq!(
            outcome,
            NavigationOutcome::Loaded {
                url: "https://example.com".to_string()
            }
        );
        // the write happens regardless of the aborted load
        assert_eq!(tc.store.writes().await.len(), 1);
    }

    // ==================== navigation events ====================

    #[tokio::test]
    async fn completed_navigation_updates_address_and_persists() {
        let tc = create_test_context();
        let svc = service(&tc);

        svc.navigation_completed("https://docs.rs/regex").await;

        let ui = svc.ui_state().await;
        assert_eq!(ui.screen, Screen::Browsing);
        assert_eq!(ui.address_text, "https://docs.rs/regex");
        assert_eq!(
            tc.store.writes().await,
            vec![(
                keys::LAST_URL.to_string(),
                "https://docs.rs/regex".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn completed_blank_navigation_restores_homepage_without_write() {
        let tc = create_test_context();
        let svc = service(&tc);
        svc.restore(UiState::browsing("https://docs.rs/")).await;

        svc.navigation_completed(BLANK_ADDRESS).await;

        let ui = svc.ui_state().await;
        assert_eq!(ui.screen, Screen::Homepage);
        assert_eq!(ui.address_text, HOME_SENTINEL);
        assert!(tc.store.writes().await.is_empty());
    }

    #[tokio::test]
    async fn back_delegates_to_surface() {
        let tc = create_test_context();
        let svc = service(&tc);

        svc.back().await;
        assert_eq!(tc.surface.back_count().await, 1);
    }
}
