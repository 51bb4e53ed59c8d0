use crate::badges;
use crate::errors::AppError;
use crate::feed;
use crate::ingest;
use crate::leaderboard;
use crate::models::{
    Activity, ActivityRequest, BadgeView, LeaderboardEntry, LimitQuery, SeedResponse, Summary,
    SummaryRequest,
};
use crate::seed;
use crate::state::AppState;
use crate::summary;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn create_activity(
    State(state): State<AppState>,
    payload: Result<Json<ActivityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Activity>), AppError> {
    let Json(request) = payload.map_err(|err| AppError::bad_request(err.body_text()))?;
    let activity = ingest::ingest(&state.store, request).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

pub async fn list_activities(
    State(state): State<AppState>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<Json<Vec<Activity>>, AppError> {
    let Query(query) = query.map_err(|err| AppError::bad_request(err.body_text()))?;
    let limit = state.config.clamp_limit(query.limit);
    let data = state.store.snapshot().await;
    Ok(Json(feed::recent(&data, limit)))
}

pub async fn get_leaderboard(
    State(state): State<AppState>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let Query(query) = query.map_err(|err| AppError::bad_request(err.body_text()))?;
    let data = state.store.snapshot().await;
    let entries = match query.limit {
        Some(limit) => leaderboard::top(&data, state.config.clamp_limit(Some(limit))),
        None => leaderboard::rank(&data),
    };
    Ok(Json(entries))
}

pub async fn get_summary(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<Summary>, AppError> {
    let Json(request) = payload.map_err(|err| AppError::bad_request(err.body_text()))?;
    let data = state.store.snapshot().await;
    Ok(Json(summary::summarize(&data, &request.username)?))
}

pub async fn list_badges(State(state): State<AppState>) -> Json<Vec<BadgeView>> {
    let data = state.store.snapshot().await;
    Json(badges::catalog_view(&data))
}

pub async fn seed_demo(State(state): State<AppState>) -> Result<Json<SeedResponse>, AppError> {
    let inserted = seed::seed_demo(&state.store).await?;
    Ok(Json(SeedResponse { inserted }))
}
