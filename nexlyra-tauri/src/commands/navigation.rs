use nexlyra_core::services::{intent, suggestion};
use nexlyra_core::AppState;
use tauri::State;

use crate::error::AppError;
use crate::types::{
    ApiResponse, Intent, IntentKind, NavigationOutcome, Settings, SuggestionView, UiState,
};

/// 对输入进行意图分类（逐键调用）
#[tauri::command]
pub fn classify_input(input: String) -> ApiResponse<Intent> {
    ApiResponse::success(intent::classify(&input))
}

/// 当前输入的建议列表
#[tauri::command]
pub async fn list_suggestions(
    state: State<'_, AppState>,
    input: String,
) -> Result<ApiResponse<SuggestionView>, AppError> {
    let settings = state.settings_service.load().await?;
    Ok(ApiResponse::success(suggestion::build_view(
        &input, &settings,
    )))
}

/// 解析输入并导航
///
/// `force` 覆盖分类结果（用户显式选择建议行时传入）。
#[tauri::command]
pub async fn navigate(
    state: State<'_, AppState>,
    input: String,
    force: Option<IntentKind>,
) -> Result<ApiResponse<NavigationOutcome>, AppError> {
    // Dispatch never fails; an unreachable store degrades to defaults.
    let settings = match state.settings_service.load().await {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings for dispatch, using defaults: {e}");
            Settings::default()
        }
    };

    let outcome = state
        .navigation_service
        .dispatch(&input, force, &settings)
        .await;
    Ok(ApiResponse::success(outcome))
}

/// 内容视图后退一步
#[tauri::command]
pub async fn go_back(state: State<'_, AppState>) -> Result<ApiResponse<()>, AppError> {
    state.navigation_service.back().await;
    Ok(ApiResponse::success(()))
}

/// 当前 UI 显示状态快照（chrome UI 启动时调用）
#[tauri::command]
pub async fn ui_snapshot(state: State<'_, AppState>) -> Result<ApiResponse<UiState>, AppError> {
    Ok(ApiResponse::success(
        state.navigation_service.ui_state().await,
    ))
}
