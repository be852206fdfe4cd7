//! 设置存储抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Flat key-value settings storage.
///
/// Last-write-wins, no versioning; values are opaque strings and the
/// read side is responsible for falling back to defaults on malformed
/// data. Platform implementation: `TauriSettingsStore`
/// (tauri-plugin-store JSON file).
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a raw value.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - the key has been written before
    /// * `Ok(None)` - the key is absent
    async fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Write a raw value (last-write-wins).
    async fn set(&self, key: &str, value: &str) -> CoreResult<()>;
}
