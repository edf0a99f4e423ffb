use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    adapters::http::{app_state::AppState, extract::ValidatedJson},
    app_error::AppResult,
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_entries).post(join_waitlist))
}

/// GET /api/waitlist
async fn list_entries(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries: Vec<WaitlistEntry> = app_state.waitlist_use_cases.list().await?;
    Ok((StatusCode::OK, Json(entries)))
}

/// POST /api/waitlist
async fn join_waitlist(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewWaitlistEntry>,
) -> AppResult<impl IntoResponse> {
    let entry = app_state.waitlist_use_cases.join(&payload.email).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
