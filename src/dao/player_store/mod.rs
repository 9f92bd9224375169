pub mod memory;

use crate::dao::models::PlayerEntity;
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

pub use self::memory::InMemoryPlayerStore;

/// Abstraction over the persistence layer for players.
pub trait PlayerStore: Send + Sync {
    /// Fetch a player by identifier.
    fn find_player(&self, id: String) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>>;
    /// Store a new player; resolves to `false` when the identifier is already taken.
    fn insert_player(&self, player: PlayerEntity) -> BoxFuture<'static, StorageResult<bool>>;
    /// Upsert a player, replacing any previous state for the same identifier.
    fn save_player(&self, player: PlayerEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// Remove a player; resolves to `false` when nothing was stored under `id`.
    fn delete_player(&self, id: String) -> BoxFuture<'static, StorageResult<bool>>;
    /// Every stored player ordered by identifier.
    fn list_players(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>>;
    /// Cheap liveness check used by the health endpoint.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
