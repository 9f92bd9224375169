use serde::Serialize;
use utoipa::ToSchema;

/// Coarse health of the backend, driven by the player store health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// The player store answered.
    Ok,
    /// The player store failed its health check.
    Degraded,
}

/// Health payload returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall status.
    pub status: HealthStatus,
    /// Why the store is degraded; omitted when healthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl HealthResponse {
    /// Healthy response without detail.
    pub fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
            detail: None,
        }
    }

    /// Degraded response explaining the health check failure.
    pub fn degraded(detail: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Degraded,
            detail: Some(detail.into()),
        }
    }
}
