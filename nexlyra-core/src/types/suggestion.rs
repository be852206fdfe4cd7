//! 建议列表类型定义

use serde::{Deserialize, Serialize};

use super::intent::IntentKind;

/// One row of the address-bar suggestion list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionRow {
    /// The intent kind forced when the user picks this row.
    pub action: IntentKind,
    /// 显示文本
    pub label: String,
    /// 快捷键提示
    pub shortcut: String,
    /// Whether this row matches the unforced classification and is
    /// rendered as the default selection.
    pub selected: bool,
}

/// The rendered suggestion list, derived purely from the current input
/// and configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionView {
    /// 是否显示
    pub visible: bool,
    /// 建议行（可见时恒为两行）
    pub rows: Vec<SuggestionRow>,
}

impl SuggestionView {
    /// The hidden view rendered for empty input.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            rows: Vec::new(),
        }
    }
}
