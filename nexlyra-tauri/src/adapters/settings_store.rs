//! Tauri 设置存储适配器
//!
//! 使用 tauri-plugin-store 将设置持久化到应用私有目录的 JSON 文件。
//! 读取经过内存缓存；写入直通存储并同步缓存。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tokio::sync::RwLock;

use nexlyra_core::error::{CoreError, CoreResult};
use nexlyra_core::traits::SettingsStore;

const STORE_FILE_NAME: &str = "settings.json";

/// Settings storage backed by a tauri-plugin-store JSON file.
///
/// Values are stored as JSON strings; anything else in the file is
/// treated as absent so the read side degrades to its defaults.
pub struct TauriSettingsStore {
    app_handle: AppHandle,
    cache: Arc<RwLock<Option<HashMap<String, String>>>>,
}

impl TauriSettingsStore {
    #[must_use]
    pub fn new(app_handle: AppHandle) -> Self {
        Self {
            app_handle,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// 从 Store 加载全部键值
    fn load_from_store(&self) -> CoreResult<HashMap<String, String>> {
        let store = self
            .app_handle
            .store(STORE_FILE_NAME)
            .map_err(|e| CoreError::StorageError(format!("Failed to access store: {e}")))?;

        Ok(store
            .entries()
            .into_iter()
            .filter_map(|(key, value)| value.as_str().map(|s| (key, s.to_string())))
            .collect())
    }

    /// 写入单个键值到 Store
    fn save_to_store(&self, key: &str, value: &str) -> CoreResult<()> {
        let store = self
            .app_handle
            .store(STORE_FILE_NAME)
            .map_err(|e| CoreError::StorageError(format!("Failed to access store: {e}")))?;

        store.set(key.to_string(), serde_json::Value::String(value.to_string()));
        store
            .save()
            .map_err(|e| CoreError::StorageError(format!("Failed to save store: {e}")))
    }
}

#[async_trait]
impl SettingsStore for TauriSettingsStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        // 先检查缓存（读锁）
        {
            let cache = self.cache.read().await;
            if let Some(ref values) = *cache {
                return Ok(values.get(key).cloned());
            }
        }

        // 缓存未命中：从 Store 加载并填充缓存
        let values = self.load_from_store()?;
        let result = values.get(key).cloned();
        *self.cache.write().await = Some(values);
        Ok(result)
    }

    async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.save_to_store(key, value)?;

        // 同步缓存（仅在已填充时）
        let mut cache = self.cache.write().await;
        if let Some(ref mut values) = *cache {
            values.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}
