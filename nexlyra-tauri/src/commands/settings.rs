use nexlyra_core::AppState;
use tauri::State;

use crate::error::AppError;
use crate::types::{ApiResponse, Settings};

/// 读取全部设置（缺失/异常值回退到默认）
#[tauri::command]
pub async fn get_settings(
    state: State<'_, AppState>,
) -> Result<ApiResponse<Settings>, AppError> {
    let settings = state.settings_service.load().await?;
    Ok(ApiResponse::success(settings))
}

/// 保存单个设置项
#[tauri::command]
pub async fn save_setting(
    state: State<'_, AppState>,
    key: String,
    value: String,
) -> Result<ApiResponse<()>, AppError> {
    state.settings_service.save(&key, &value).await?;
    Ok(ApiResponse::success(()))
}
