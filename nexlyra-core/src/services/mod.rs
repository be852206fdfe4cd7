//! 业务逻辑服务层

pub mod intent;
mod navigation;
mod session;
mod settings;
pub mod suggestion;

pub use navigation::{NavigationOutcome, NavigationService};
pub use session::startup_state;
pub use settings::SettingsService;

use std::sync::Arc;

use crate::traits::{ContentSurface, SettingsStore, WindowController};

/// 服务上下文 - 持有所有平台协作者
///
/// 平台层需要创建此上下文，并注入平台特定的协作者实现。
pub struct ServiceContext {
    /// 设置存储
    pub settings_store: Arc<dyn SettingsStore>,
    /// 内容视图
    pub content_surface: Arc<dyn ContentSurface>,
    /// 窗口控制
    pub window_controller: Arc<dyn WindowController>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        settings_store: Arc<dyn SettingsStore>,
        content_surface: Arc<dyn ContentSurface>,
        window_controller: Arc<dyn WindowController>,
    ) -> Self {
        Self {
            settings_store,
            content_surface,
            window_controller,
        }
    }
}
