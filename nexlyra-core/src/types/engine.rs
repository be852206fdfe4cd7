//! 搜索引擎 / AI 引擎类型定义

use serde::{Deserialize, Serialize};

/// 搜索引擎
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    /// 默认引擎
    #[default]
    Google,
    Bing,
    DuckDuckGo,
}

impl SearchEngine {
    /// Parse the persisted key form. Unrecognized values return `None`
    /// so callers can degrade to the default engine.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "google" => Some(Self::Google),
            "bing" => Some(Self::Bing),
            "duckduckgo" => Some(Self::DuckDuckGo),
            _ => None,
        }
    }

    /// 持久化键值
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Bing => "bing",
            Self::DuckDuckGo => "duckduckgo",
        }
    }

    /// 用于建议列表的显示名称
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Bing => "Bing",
            Self::DuckDuckGo => "DuckDuckGo",
        }
    }

    /// Build this engine's result-page URL for `query` (percent-encoded).
    #[must_use]
    pub fn query_url(self, query: &str) -> String {
        let base = match self {
            Self::Google => "https://www.google.com/search?q=",
            Self::Bing => "https://www.bing.com/search?q=",
            Self::DuckDuckGo => "https://duckduckgo.com/?q=",
        };
        format!("{base}{}", urlencoding::encode(query))
    }
}

/// AI 引擎
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AiEngine {
    /// 默认引擎（支持查询参数）
    #[default]
    Perplexity,
    ChatGpt,
}

impl AiEngine {
    /// Parse the persisted key form. Unrecognized values return `None`
    /// so callers can degrade to the default engine.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "perplexity" => Some(Self::Perplexity),
            "chatgpt" => Some(Self::ChatGpt),
            _ => None,
        }
    }

    /// 持久化键值
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Perplexity => "perplexity",
            Self::ChatGpt => "chatgpt",
        }
    }

    /// 用于建议列表的显示名称
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Perplexity => "Perplexity",
            Self::ChatGpt => "ChatGPT",
        }
    }

    /// Whether the engine accepts a query in its URL. Engines without
    /// query support always navigate to their fixed entry page.
    #[must_use]
    pub fn supports_query(self) -> bool {
        matches!(self, Self::Perplexity)
    }

    /// Resolve the address for an AI query: the query URL (percent-encoded)
    /// for query-capable engines, the fixed entry URL otherwise.
    #[must_use]
    pub fn resolve_url(self, query: &str) -> String {
        match self {
            Self::Perplexity => format!(
                "https://www.perplexity.ai/search?q={}",
                urlencoding::encode(query)
            ),
            Self::ChatGpt => "https://chatgpt.com/".to_string(),
        }
    }
}

/// 主题模式
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    /// 默认主题
    #[default]
    Dark,
}

impl ThemeMode {
    /// Parse the persisted key form.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// 持久化键值
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
