use serde::{Deserialize, Serialize};

// Re-export Core 应用层类型
pub use nexlyra_core::services::NavigationOutcome;
pub use nexlyra_core::traits::WindowAction;
pub use nexlyra_core::types::{Intent, IntentKind, Settings, SuggestionView, UiState};

/// API 响应包装类型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 是否成功
    pub success: bool,
    /// 响应数据
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}
