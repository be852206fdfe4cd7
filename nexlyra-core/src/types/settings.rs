//! 设置类型定义

use serde::{Deserialize, Serialize};

use super::engine::{AiEngine, SearchEngine, ThemeMode};
use super::HOME_SENTINEL;

/// 持久化键名
pub mod keys {
    /// 搜索引擎选择
    pub const ENGINE: &str = "engine";
    /// AI 引擎选择
    pub const AI_ENGINE: &str = "aiEngine";
    /// 最后访问地址
    pub const LAST_URL: &str = "lastUrl";
    /// 主题模式
    pub const THEME: &str = "theme";

    /// The full recognized key set; writes to anything else are rejected.
    pub const ALL: [&str; 4] = [ENGINE, AI_ENGINE, LAST_URL, THEME];
}

/// User configuration, loaded once at startup and on demand by commands.
///
/// Owned by the settings store; every field degrades to its default when
/// the persisted value is missing or malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// 搜索引擎
    pub engine: SearchEngine,
    /// AI 引擎
    #[serde(rename = "aiEngine")]
    pub ai_engine: AiEngine,
    /// 最后访问地址
    #[serde(rename = "lastUrl")]
    pub last_url: String,
    /// 主题模式
    pub theme: ThemeMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: SearchEngine::default(),
            ai_engine: AiEngine::default(),
            last_url: HOME_SENTINEL.to_string(),
            theme: ThemeMode::default(),
        }
    }
}
