//! Tauri 内容视图适配器
//!
//! The content surface is the embedded `content` webview sitting below
//! the chrome bar. Showing the homepage collapses its bounds to zero so
//! the chrome webview's homepage panel is visible behind it; loading
//! expands it back under the bar.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tauri::{AppHandle, LogicalPosition, LogicalSize, Manager};
use url::Url;

use nexlyra_core::error::{CoreError, CoreResult};
use nexlyra_core::traits::ContentSurface;
use nexlyra_core::types::BLANK_ADDRESS;

use crate::{CHROME_BAR_HEIGHT, CONTENT_WEBVIEW_LABEL, MAIN_WINDOW_LABEL};

/// Content webview driver over the Tauri app handle.
pub struct TauriContentSurface {
    app_handle: AppHandle,
    /// Whether the webview currently occupies the area below the bar.
    expanded: AtomicBool,
}

/// Compute the content webview rectangle for the given window size.
///
/// Collapsed (homepage showing) is a zero-size rectangle; expanded fills
/// everything below the chrome bar.
fn content_bounds(
    window: LogicalSize<f64>,
    expanded: bool,
) -> (LogicalPosition<f64>, LogicalSize<f64>) {
    let position = LogicalPosition::new(0.0, CHROME_BAR_HEIGHT);
    let size = if expanded {
        LogicalSize::new(window.width, (window.height - CHROME_BAR_HEIGHT).max(0.0))
    } else {
        LogicalSize::new(0.0, 0.0)
    };
    (position, size)
}

impl TauriContentSurface {
    #[must_use]
    pub fn new(app_handle: AppHandle) -> Self {
        Self {
            app_handle,
            expanded: AtomicBool::new(false),
        }
    }

    fn webview(&self) -> CoreResult<tauri::Webview> {
        self.app_handle
            .get_webview(CONTENT_WEBVIEW_LABEL)
            .ok_or_else(|| {
                CoreError::NavigationAborted("content webview not available".to_string())
            })
    }

    /// Re-apply the content webview bounds from the current window size.
    ///
    /// Called on every show/hide transition and from the window resize
    /// handler; failures are logged and ignored (the next transition
    /// reapplies them).
    pub fn layout(&self) {
        let Some(window) = self.app_handle.get_window(MAIN_WINDOW_LABEL) else {
            return;
        };
        let logical = match (window.inner_size(), window.scale_factor()) {
            (Ok(size), Ok(scale)) => size.to_logical::<f64>(scale),
            (Err(e), _) | (_, Err(e)) => {
                log::debug!("Content layout skipped: {e}");
                return;
            }
        };

        let (position, size) = content_bounds(logical, self.expanded.load(Ordering::SeqCst));
        match self.webview() {
            Ok(webview) => {
                if let Err(e) = webview.set_bounds(tauri::Rect {
                    position: position.into(),
                    size: size.into(),
                }) {
                    log::warn!("Failed to apply content bounds: {e}");
                }
            }
            Err(e) => log::debug!("Content layout skipped: {e}"),
        }
    }

    fn navigate(&self, address: &str) -> CoreResult<()> {
        let url = Url::parse(address).map_err(|e| {
            CoreError::NavigationAborted(format!("invalid address '{address}': {e}"))
        })?;
        let mut webview = self.webview()?;
        webview
            .navigate(url)
            .map_err(|e| CoreError::NavigationAborted(e.to_string()))
    }
}

#[async_trait]
impl ContentSurface for TauriContentSurface {
    async fn load(&self, address: &str) -> CoreResult<()> {
        self.expanded.store(true, Ordering::SeqCst);
        self.layout();
        self.navigate(address)
    }

    async fn clear(&self) -> CoreResult<()> {
        self.expanded.store(false, Ordering::SeqCst);
        self.layout();
        self.navigate(BLANK_ADDRESS)
    }

    async fn back(&self) -> CoreResult<()> {
        self.webview()?
            .eval("window.history.back()")
            .map_err(|e| CoreError::NavigationAborted(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_bounds_fill_below_bar() {
        let (position, size) = content_bounds(LogicalSize::new(1000.0, 800.0), true);
        assert!((position.y - CHROME_BAR_HEIGHT).abs() < f64::EPSILON);
        assert!((size.width - 1000.0).abs() < f64::EPSILON);
        assert!((size.height - (800.0 - CHROME_BAR_HEIGHT)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_collapsed_bounds_are_zero_sized() {
        let (_, size) = content_bounds(LogicalSize::new(1000.0, 800.0), false);
        assert!(size.width.abs() < f64::EPSILON);
        assert!(size.height.abs() < f64::EPSILON);
    }

    #[test]
    fn test_tiny_window_never_yields_negative_height() {
        let (_, size) = content_bounds(LogicalSize::new(300.0, 10.0), true);
        assert!(size.height.abs() < f64::EPSILON);
    }
}
