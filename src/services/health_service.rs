use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Check the player store, reporting `degraded` and logging when it fails.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.player_store().health_check().await {
        Ok(()) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "player store health check failed");
            HealthResponse::degraded(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{io, sync::Arc};

    use futures::future::{BoxFuture, FutureExt};
    use time::macros::datetime;

    use super::*;
    use crate::{
        dto::health::HealthStatus,
        dao::{
            models::PlayerEntity,
            player_store::{InMemoryPlayerStore, PlayerStore},
            storage::{StorageError, StorageResult},
        },
        state::{AppState, FixedClock},
    };

    struct UnreachableStore;

    fn unreachable() -> StorageError {
        StorageError::unavailable(
            "player store unreachable",
            io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
        )
    }

    impl PlayerStore for UnreachableStore {
        fn find_player(&self, _id: String) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>> {
            async { Err(unreachable()) }.boxed()
        }

        fn insert_player(&self, _player: PlayerEntity) -> BoxFuture<'static, StorageResult<bool>> {
            async { Err(unreachable()) }.boxed()
        }

        fn save_player(&self, _player: PlayerEntity) -> BoxFuture<'static, StorageResult<()>> {
            async { Err(unreachable()) }.boxed()
        }

        fn delete_player(&self, _id: String) -> BoxFuture<'static, StorageResult<bool>> {
            async { Err(unreachable()) }.boxed()
        }

        fn list_players(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
            async { Err(unreachable()) }.boxed()
        }

        fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
            async { Err(unreachable()) }.boxed()
        }
    }

    fn state_with(store: Arc<dyn PlayerStore>) -> SharedState {
        AppState::new(
            store,
            Arc::new(FixedClock(datetime!(2024-03-05 14:07:09))),
        )
    }

    #[tokio::test]
    async fn reports_ok_when_store_answers() {
        let state = state_with(Arc::new(InMemoryPlayerStore::new()));
        assert_eq!(health_status(&state).await.status, HealthStatus::Ok);
    }

    #[tokio::test]
    async fn reports_degraded_when_store_fails() {
        let state = state_with(Arc::new(UnreachableStore));
        let health = health_status(&state).await;
        assert_eq!(health.status, HealthStatus::Degraded);
        assert!(health.detail.unwrap().contains("unreachable"));
    }
}
