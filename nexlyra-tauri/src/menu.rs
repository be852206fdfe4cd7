//! 原生应用菜单
//!
//! Keeps the standard accelerators working in a frameless window: File
//! (quit / close), View (reload, fullscreen), Edit (clipboard roles —
//! these must exist for copy/paste shortcuts to work), and Window with
//! the focus-address-bar shortcut.

use tauri::menu::{Menu, MenuEvent, MenuItemBuilder, PredefinedMenuItem, SubmenuBuilder};
use tauri::{AppHandle, Emitter, Manager, Runtime};

use crate::{CHROME_WEBVIEW_LABEL, CONTENT_WEBVIEW_LABEL};

/// 菜单项 ID：聚焦地址栏
const FOCUS_ADDRESS_BAR_ID: &str = "focus-address-bar";
/// 菜单项 ID：刷新内容视图
const RELOAD_ID: &str = "reload";

/// 发送到 chrome UI 的聚焦地址栏事件
pub const FOCUS_INPUT_EVENT: &str = "focus-input";

/// Build the native application menu.
pub fn build<R: Runtime>(app: &AppHandle<R>) -> tauri::Result<Menu<R>> {
    let file = SubmenuBuilder::new(app, "File")
        .item(&PredefinedMenuItem::quit(app, None)?)
        .item(&PredefinedMenuItem::close_window(app, None)?)
        .build()?;

    let reload = MenuItemBuilder::with_id(RELOAD_ID, "Reload")
        .accelerator("CmdOrCtrl+R")
        .build(app)?;
    let view = SubmenuBuilder::new(app, "View")
        .item(&reload)
        .separator()
        .item(&PredefinedMenuItem::fullscreen(app, None)?)
        .build()?;

    let edit = SubmenuBuilder::new(app, "Edit")
        .item(&PredefinedMenuItem::undo(app, None)?)
        .item(&PredefinedMenuItem::redo(app, None)?)
        .separator()
        .item(&PredefinedMenuItem::cut(app, None)?)
        .item(&PredefinedMenuItem::copy(app, None)?)
        .item(&PredefinedMenuItem::paste(app, None)?)
        .item(&PredefinedMenuItem::select_all(app, None)?)
        .build()?;

    let focus_address_bar = MenuItemBuilder::with_id(FOCUS_ADDRESS_BAR_ID, "Focus Address Bar")
        .accelerator("CmdOrCtrl+L")
        .build(app)?;
    let window = SubmenuBuilder::new(app, "Window")
        .item(&focus_address_bar)
        .build()?;

    Menu::with_items(app, &[&file, &view, &edit, &window])
}

/// Handle menu activations.
pub fn on_menu_event<R: Runtime>(app: &AppHandle<R>, event: MenuEvent) {
    match event.id().as_ref() {
        FOCUS_ADDRESS_BAR_ID => {
            if let Err(e) = app.emit_to(CHROME_WEBVIEW_LABEL, FOCUS_INPUT_EVENT, ()) {
                log::warn!("Failed to emit focus event: {e}");
            }
        }
        RELOAD_ID => {
            if let Some(webview) = app.get_webview(CONTENT_WEBVIEW_LABEL) {
                if let Err(e) = webview.eval("window.location.reload()") {
                    log::debug!("Content reload ignored: {e}");
                }
            }
        }
        _ => {}
    }
}
