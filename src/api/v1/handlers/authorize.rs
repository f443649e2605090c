/*
 * Responsibility
 * - POST /authorize: API Gateway からの呼び出し口
 * - Body は TOKEN authorizer イベント、レスポンスはポリシー (Allow/Deny とも常に 200)
 * - イベント自体が読めない場合だけエラーを返す
 */
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::error::AppError;
use crate::services::authorizer::{AuthorizationDecision, InvocationEvent};
use crate::state::AppState;

pub async fn authorize(
    State(state): State<AppState>,
    payload: Result<Json<InvocationEvent>, JsonRejection>,
) -> Result<Json<AuthorizationDecision>, AppError> {
    let Json(event) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "malformed authorizer event");
        AppError::InvalidRequest(rejection.body_text())
    })?;

    let decision = state.authorizer.authorize(&event).await;

    Ok(Json(decision))
}
