use axum::extract::State;
use axum::Json;
use serde::Serialize;
use skillswap_db::models::point::PointTransaction;
use skillswap_db::repositories::PointRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PointsView {
    pub balance: i64,
    /// Newest first.
    pub transactions: Vec<PointTransaction>,
}

/// GET /points/
pub async fn view(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<PointsView>>> {
    let view = PointsView {
        balance: PointRepo::balance(&state.pool, user.user_id).await?,
        transactions: PointRepo::list_transactions(&state.pool, user.user_id).await?,
    };
    Ok(Json(DataResponse::new(view)))
}
