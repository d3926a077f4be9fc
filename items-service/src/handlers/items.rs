use crate::startup::AppState;
use axum::{extract::State, Json};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use service_core::error::AppError;

/// Return every document in the items collection as a JSON array.
///
/// Documents are re-serialized verbatim and no sort is applied: the array is
/// the collection's contents in whatever order the store yields them. A store
/// failure maps to an explicit 503 rather than a dropped request.
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<serde_json::Value>>, AppError> {
    metrics::counter!("items_list_requests_total").increment(1);

    let mut cursor = state.db.items().find(doc! {}, None).await.map_err(|e| {
        tracing::error!("Failed to query items collection: {}", e);
        AppError::ServiceUnavailable(anyhow::Error::new(e))
    })?;

    let mut items = Vec::new();
    while let Some(item) = cursor.try_next().await.map_err(|e| {
        tracing::error!("Failed to read item from cursor: {}", e);
        AppError::ServiceUnavailable(anyhow::Error::new(e))
    })? {
        items.push(
            serde_json::to_value(&item)
                .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?,
        );
    }

    metrics::gauge!("items_last_listed_count").set(items.len() as f64);

    Ok(Json(items))
}
