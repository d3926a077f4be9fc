use crate::startup::AppState;
use askama::Template;
use axum::{extract::State, response::IntoResponse};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// JSON-serialized form of each item, in response order.
    pub items: Vec<String>,
    pub error: Option<String>,
}

/// Render the item list page.
///
/// The item array is fetched per request and discarded afterwards; nothing is
/// cached. A failed fetch renders a visible error banner with an empty list
/// instead of failing silently.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    match state.items_client.list_items().await {
        Ok(items) => IndexTemplate {
            items: items.iter().map(|item| item.to_string()).collect(),
            error: None,
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch items from the API service");
            IndexTemplate {
                items: Vec::new(),
                error: Some("Failed to load items from the API.".to_string()),
            }
        }
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}
