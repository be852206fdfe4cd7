//! 窗口控制抽象 Trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Chrome-level window control actions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WindowAction {
    /// 最小化
    Minimize,
    /// Toggle between maximized and restored.
    Maximize,
    /// 关闭窗口
    Close,
}

/// Applies window control actions to the active window.
///
/// No return value; a missing or already-closed window is ignored.
/// Platform implementation: `TauriWindowController`.
#[async_trait]
pub trait WindowController: Send + Sync {
    /// Apply `action` to the active window.
    async fn apply(&self, action: WindowAction);
}
