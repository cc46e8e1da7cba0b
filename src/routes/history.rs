use axum::extract::{Path, Query, State};
use axum::routing::{delete, get};
use axum::{Json, Router};

use crate::error::AppResult;
use crate::models::{AppState, DeleteResponse, HistoryQuery, ResearchRecord};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/history", get(list_history))
        .route("/api/history/{id}", delete(delete_history))
}

async fn list_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<ResearchRecord>>> {
    let records = state.history.list(&query.user_id).await?;
    Ok(Json(records))
}

async fn delete_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    state.history.delete(&id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
