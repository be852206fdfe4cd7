//! 输入意图类型定义

use serde::{Deserialize, Serialize};

/// The classified purpose of a typed input.
///
/// Produced fresh per classification call, never stored. The payload is
/// the extracted text: the target address for `Url`, the query for the
/// other two.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Intent {
    /// 直接访问地址
    Url { target: String },
    /// 搜索引擎查询
    Search { query: String },
    /// AI 助手提问
    Ai { query: String },
}

/// Intent discriminant, used for the caller-supplied override and for
/// suggestion-row actions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IntentKind {
    Url,
    Search,
    Ai,
}

impl Intent {
    /// 意图判别值
    #[must_use]
    pub fn kind(&self) -> IntentKind {
        match self {
            Self::Url { .. } => IntentKind::Url,
            Self::Search { .. } => IntentKind::Search,
            Self::Ai { .. } => IntentKind::Ai,
        }
    }

    /// The extracted text: target for `Url`, query otherwise.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Url { target } => target,
            Self::Search { query } | Self::Ai { query } => query,
        }
    }

    /// Replace the kind while carrying the extracted text through
    /// unchanged. Used when the user explicitly picks a suggestion row.
    #[must_use]
    pub fn with_kind(self, kind: IntentKind) -> Self {
        let text = match self {
            Self::Url { target } => target,
            Self::Search { query } | Self::Ai { query } => query,
        };
        match kind {
            IntentKind::Url => Self::Url { target: text },
            IntentKind::Search => Self::Search { query: text },
            IntentKind::Ai => Self::Ai { query: text },
        }
    }
}
