//! UI 显示状态类型定义

use serde::{Deserialize, Serialize};

use super::HOME_SENTINEL;

/// Which of the two screens is showing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Homepage,
    Browsing,
}

/// UI display state owned by the navigation service.
///
/// Mutated only by user input events and content-surface navigation
/// events; never persisted except through `lastUrl`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiState {
    /// 当前屏幕
    pub screen: Screen,
    /// Address-bar text. Always reflects the surface's current address
    /// after a completed navigation; free text while the user types.
    #[serde(rename = "addressText")]
    pub address_text: String,
    /// 建议列表是否可见
    #[serde(rename = "suggestionsVisible")]
    pub suggestions_visible: bool,
}

impl UiState {
    /// Homepage state: sentinel address, suggestions hidden.
    #[must_use]
    pub fn homepage() -> Self {
        Self {
            screen: Screen::Homepage,
            address_text: HOME_SENTINEL.to_string(),
            suggestions_visible: false,
        }
    }

    /// Browsing state showing `address`, suggestions hidden.
    #[must_use]
    pub fn browsing(address: impl Into<String>) -> Self {
        Self {
            screen: Screen::Browsing,
            address_text: address.into(),
            suggestions_visible: false,
        }
    }
}
