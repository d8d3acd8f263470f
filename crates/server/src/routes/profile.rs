use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use ::profile::ProfileRecord;
use std::sync::Arc;

/// Profile with its age derived at request time (GET /profile, GET /api/profile)
pub async fn get_profile(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<Json<ProfileRecord>> {
    metrics::counter!("swipecard_requests_total", "route" => "profile").increment(1);
    let profile = state
        .storage
        .get_profile()
        .await
        .map_err(ServerError::profile)?;
    Ok(Json(profile))
}
