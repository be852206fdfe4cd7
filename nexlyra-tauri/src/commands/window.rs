use nexlyra_core::AppState;
use tauri::State;

use crate::error::AppError;
use crate::types::{ApiResponse, WindowAction};

/// 窗口控制（最小化 / 最大化切换 / 关闭）
#[tauri::command]
pub async fn window_control(
    state: State<'_, AppState>,
    action: WindowAction,
) -> Result<ApiResponse<()>, AppError> {
    state.ctx.window_controller.apply(action).await;
    Ok(ApiResponse::success(()))
}
