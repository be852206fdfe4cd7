//! Nexlyra Tauri 应用入口
//!
//! Builds the frameless main window with its two webviews (the chrome
//! bar UI and the embedded content view), injects the platform adapters
//! into the core `AppState`, and registers the IPC command surface the
//! chrome UI invokes.

mod adapters;
mod commands;
mod error;
mod menu;
mod types;

use std::sync::Arc;

use tauri::webview::WebviewBuilder;
use tauri::{Emitter, LogicalPosition, LogicalSize, Manager, WebviewUrl};
use tauri_plugin_log::{Target, TargetKind};

use adapters::{TauriContentSurface, TauriSettingsStore, TauriWindowController};
use commands::{navigation, settings, window};
use nexlyra_core::types::BLANK_ADDRESS;
use nexlyra_core::{AppState, AppStateBuilder};

/// 主窗口 label
pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
/// chrome UI webview label
pub(crate) const CHROME_WEBVIEW_LABEL: &str = "chrome";
/// 内容视图 webview label
pub(crate) const CONTENT_WEBVIEW_LABEL: &str = "content";
/// chrome 栏高度（逻辑像素）
pub(crate) const CHROME_BAR_HEIGHT: f64 = 50.0;

/// 导航完成事件（携带最新 UI 状态，发送到 chrome UI）
const NAVIGATION_COMPLETED_EVENT: &str = "navigation-completed";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let mut builder = tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::default().build());

    #[cfg(debug_assertions)]
    {
        builder = builder.plugin(
            tauri_plugin_log::Builder::new()
                .targets([Target::new(TargetKind::Stdout)])
                .level(log::LevelFilter::Debug)
                .build(),
        );
    }

    #[cfg(not(debug_assertions))]
    {
        builder = builder.plugin(
            tauri_plugin_log::Builder::new()
                .targets([Target::new(TargetKind::Stdout)])
                .level(log::LevelFilter::Warn)
                .build(),
        );
    }

    let builder = builder.setup(|app| {
        let app_handle = app.handle().clone();

        // 原生菜单（无边框窗口下保持标准快捷键可用）
        let app_menu = menu::build(app.handle())?;
        app.set_menu(app_menu)?;
        app.on_menu_event(menu::on_menu_event);

        // 主窗口：无边框，chrome UI 自绘标题栏
        let main_window = tauri::window::WindowBuilder::new(app, MAIN_WINDOW_LABEL)
            .title("Nexlyra")
            .inner_size(1000.0, 800.0)
            .decorations(false)
            .build()?;

        let size = main_window
            .inner_size()?
            .to_logical::<f64>(main_window.scale_factor()?);

        // chrome webview：全窗口，承载地址栏 / 建议列表 / 首页 / 设置
        main_window.add_child(
            WebviewBuilder::new(CHROME_WEBVIEW_LABEL, WebviewUrl::App("index.html".into()))
                .auto_resize(),
            LogicalPosition::new(0.0, 0.0),
            LogicalSize::new(size.width, size.height),
        )?;

        // 内容 webview：位于 chrome 栏下方，边界由 TauriContentSurface 管理。
        // 初始折叠（首页状态）；启动序列决定是否展开。
        let content_builder = WebviewBuilder::new(
            CONTENT_WEBVIEW_LABEL,
            WebviewUrl::External(url::Url::parse(BLANK_ADDRESS)?),
        )
        .on_page_load(|webview, payload| {
            if !matches!(payload.event(), tauri::webview::PageLoadEvent::Finished) {
                return;
            }
            let final_url = payload.url().to_string();
            let app_handle = webview.app_handle().clone();
            tauri::async_runtime::spawn(async move {
                // The first blank load can arrive before the state is
                // managed; it carries no information, skip it.
                let Some(state) = app_handle.try_state::<AppState>() else {
                    return;
                };
                state
                    .navigation_service
                    .navigation_completed(&final_url)
                    .await;
                let ui = state.navigation_service.ui_state().await;
                if let Err(e) =
                    app_handle.emit_to(CHROME_WEBVIEW_LABEL, NAVIGATION_COMPLETED_EVENT, &ui)
                {
                    log::warn!("Failed to emit navigation event: {e}");
                }
            });
        });
        main_window.add_child(
            content_builder,
            LogicalPosition::new(0.0, CHROME_BAR_HEIGHT),
            LogicalSize::new(size.width, 0.0),
        )?;

        // 平台适配器注入
        let settings_store = Arc::new(TauriSettingsStore::new(app_handle.clone()));
        let content_surface = Arc::new(TauriContentSurface::new(app_handle.clone()));
        let window_controller = Arc::new(TauriWindowController::new(app_handle.clone()));

        // 窗口尺寸变化时重排内容视图
        let surface_for_resize = Arc::clone(&content_surface);
        main_window.on_window_event(move |event| {
            if matches!(event, tauri::WindowEvent::Resized(_)) {
                surface_for_resize.layout();
            }
        });

        let state = AppStateBuilder::new()
            .settings_store(settings_store)
            .content_surface(content_surface)
            .window_controller(window_controller)
            .build()
            .map_err(|e| e.to_string())?;

        app.manage(state);

        // 启动序列：恢复上次会话（阻塞，完成后才开始服务命令）
        let handle_for_startup = app_handle.clone();
        tauri::async_runtime::block_on(async move {
            let state = handle_for_startup.state::<AppState>();
            state.run_startup().await;
        });

        Ok(())
    });

    #[allow(clippy::expect_used)]
    builder
        .invoke_handler(tauri::generate_handler![
            // Settings commands
            settings::get_settings,
            settings::save_setting,
            // Navigation commands
            navigation::classify_input,
            navigation::list_suggestions,
            navigation::navigate,
            navigation::go_back,
            navigation::ui_snapshot,
            // Window commands
            window::window_control,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
