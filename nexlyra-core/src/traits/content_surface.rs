//! 内容视图抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// The embedded view that renders navigated web content.
///
/// Platform implementation: `TauriContentSurface` (embedded `content`
/// webview). Completed navigations are reported back out-of-band through
/// `NavigationService::navigation_completed`, not through this trait.
#[async_trait]
pub trait ContentSurface: Send + Sync {
    /// Navigate the surface to `address`.
    ///
    /// A stale or rejected load surfaces as
    /// `CoreError::NavigationAborted`; navigation callers swallow it.
    async fn load(&self, address: &str) -> CoreResult<()>;

    /// Clear the surface to the blank page (backing the homepage).
    async fn clear(&self) -> CoreResult<()>;

    /// Step back once in the surface history.
    async fn back(&self) -> CoreResult<()>;
}
