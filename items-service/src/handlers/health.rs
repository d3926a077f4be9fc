/// Static liveness probe. Succeeds regardless of store state.
pub async fn health_check() -> &'static str {
    "API is healthy"
}
