//! 设置读写服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::SettingsStore;
use crate::types::{keys, AiEngine, SearchEngine, Settings, ThemeMode, HOME_SENTINEL};

/// Typed access to the flat settings store.
///
/// Reads apply per-key defaults for missing or malformed values; writes
/// are raw last-write-wins strings, validated only against the
/// recognized key set.
pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
}

impl SettingsService {
    /// 创建设置服务实例
    #[must_use]
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Load the full configuration.
    ///
    /// Unrecognized engine/theme values and absent keys degrade to the
    /// fixed defaults; only a storage-access failure propagates.
    pub async fn load(&self) -> CoreResult<Settings> {
        let engine = self
            .store
            .get(keys::ENGINE)
            .await?
            .and_then(|v| SearchEngine::from_key(&v))
            .unwrap_or_default();

        let ai_engine = self
            .store
            .get(keys::AI_ENGINE)
            .await?
            .and_then(|v| AiEngine::from_key(&v))
            .unwrap_or_default();

        let last_url = self
            .store
            .get(keys::LAST_URL)
            .await?
            .unwrap_or_else(|| HOME_SENTINEL.to_string());

        let theme = self
            .store
            .get(keys::THEME)
            .await?
            .and_then(|v| ThemeMode::from_key(&v))
            .unwrap_or_default();

        Ok(Settings {
            engine,
            ai_engine,
            last_url,
            theme,
        })
    }

    /// Write a single setting.
    ///
    /// # Errors
    /// `CoreError::ValidationError` when `key` is not one of the
    /// recognized setting keys.
    pub async fn save(&self, key: &str, value: &str) -> CoreResult<()> {
        if !keys::ALL.contains(&key) {
            return Err(CoreError::ValidationError(format!(
                "Unrecognized setting key: '{key}'"
            )));
        }
        self.store.set(key, value).await
    }
}
