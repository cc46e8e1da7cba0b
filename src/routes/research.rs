use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::error::AppResult;
use crate::models::{AppState, ResearchRequest, ResearchResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/research", post(research))
}

async fn research(
    State(state): State<AppState>,
    Json(request): Json<ResearchRequest>,
) -> AppResult<Json<ResearchResponse>> {
    let response = state
        .research
        .research(&request.user_id, &request.topic)
        .await?;
    Ok(Json(response))
}
