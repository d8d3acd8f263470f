use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use profile::PhotoRecord;
use std::sync::Arc;

/// Full deck in swipe order (GET /photos, GET /api/photos)
pub async fn list_photos(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<Json<Vec<PhotoRecord>>> {
    metrics::counter!("swipecard_requests_total", "route" => "photos").increment(1);
    let photos = state
        .storage
        .get_photos()
        .await
        .map_err(ServerError::photos)?;
    tracing::debug!(count = photos.len(), "photos served");
    Ok(Json(photos))
}
