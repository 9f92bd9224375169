//! Process-local player store backed by a concurrent map.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use dashmap::{DashMap, mapref::entry::Entry};
use futures::future::{BoxFuture, FutureExt};

use crate::dao::{
    models::PlayerEntity,
    storage::{StorageError, StorageResult},
};

use super::PlayerStore;

/// Player limit applied when none is configured.
pub const DEFAULT_MAX_PLAYERS: usize = 10_000;

/// [`PlayerStore`] keeping every player in memory, keyed by `player_id`.
///
/// Clones share the same map. The number of stored players never grows past
/// `max_players` through [`PlayerStore`] calls; seeding may start above it.
#[derive(Clone)]
pub struct InMemoryPlayerStore {
    players: Arc<DashMap<String, PlayerEntity>>,
    // Slots taken, reserved before a vacant entry is filled.
    stored: Arc<AtomicUsize>,
    max_players: usize,
}

impl Default for InMemoryPlayerStore {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_PLAYERS, std::iter::empty())
    }
}

impl InMemoryPlayerStore {
    /// Empty store limited to [`DEFAULT_MAX_PLAYERS`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Store limited to [`DEFAULT_MAX_PLAYERS`], pre-populated with `players`.
    pub fn with_players(players: impl IntoIterator<Item = PlayerEntity>) -> Self {
        Self::with_limit(DEFAULT_MAX_PLAYERS, players)
    }

    /// Store holding at most `max_players`, pre-populated with `players`.
    ///
    /// Later duplicates in `players` replace earlier ones.
    pub fn with_limit(max_players: usize, players: impl IntoIterator<Item = PlayerEntity>) -> Self {
        let map = DashMap::new();
        for player in players {
            map.insert(player.player_id.clone(), player);
        }
        Self {
            stored: Arc::new(AtomicUsize::new(map.len())),
            players: Arc::new(map),
            max_players,
        }
    }

    /// Number of stored players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether no player is stored.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Configured player limit.
    pub fn max_players(&self) -> usize {
        self.max_players
    }

    fn reserve_slot(&self) -> StorageResult<()> {
        self.stored
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |taken| {
                (taken < self.max_players).then_some(taken + 1)
            })
            .map(|_| ())
            .map_err(|_| StorageError::CapacityExceeded {
                limit: self.max_players,
            })
    }

    fn insert_new(&self, player: PlayerEntity) -> StorageResult<bool> {
        match self.players.entry(player.player_id.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                self.reserve_slot()?;
                slot.insert(player);
                Ok(true)
            }
        }
    }

    fn upsert(&self, player: PlayerEntity) -> StorageResult<()> {
        match self.players.entry(player.player_id.clone()) {
            Entry::Occupied(mut existing) => {
                existing.insert(player);
            }
            Entry::Vacant(slot) => {
                self.reserve_slot()?;
                slot.insert(player);
            }
        }
        Ok(())
    }

    fn remove(&self, id: &str) -> bool {
        let removed = self.players.remove(id).is_some();
        if removed {
            self.stored.fetch_sub(1, Ordering::AcqRel);
        }
        removed
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn find_player(&self, id: String) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>> {
        let found = self.players.get(&id).map(|entry| entry.value().clone());
        async move { Ok(found) }.boxed()
    }

    fn insert_player(&self, player: PlayerEntity) -> BoxFuture<'static, StorageResult<bool>> {
        let outcome = self.insert_new(player);
        async move { outcome }.boxed()
    }

    fn save_player(&self, player: PlayerEntity) -> BoxFuture<'static, StorageResult<()>> {
        let outcome = self.upsert(player);
        async move { outcome }.boxed()
    }

    fn delete_player(&self, id: String) -> BoxFuture<'static, StorageResult<bool>> {
        let removed = self.remove(&id);
        async move { Ok(removed) }.boxed()
    }

    fn list_players(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
        let mut players = self
            .players
            .iter()
            .map(|entry| entry.value().clone())
            .collect::<Vec<_>>();
        players.sort_by(|a, b| a.player_id.cmp(&b.player_id));
        async move { Ok(players) }.boxed()
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        async { Ok(()) }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn player(id: &str, name: &str) -> PlayerEntity {
        PlayerEntity {
            player_id: id.into(),
            player_name: name.into(),
            created_at: datetime!(2024-03-01 09:00:00),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn save_then_find_returns_copy() {
        let store = InMemoryPlayerStore::new();
        store.save_player(player("P-1", "Alice")).await.unwrap();

        let found = store.find_player("P-1".into()).await.unwrap();
        assert_eq!(found, Some(player("P-1", "Alice")));
        assert!(store.find_player("P-2".into()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_replaces_existing_player() {
        let store = InMemoryPlayerStore::with_players([player("P-1", "Alice")]);

        let mut renamed = player("P-1", "Alicia");
        renamed.updated_at = Some(datetime!(2024-03-05 14:07:09));
        store.save_player(renamed.clone()).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.find_player("P-1".into()).await.unwrap(), Some(renamed));
    }

    #[tokio::test]
    async fn list_is_sorted_by_id() {
        let store = InMemoryPlayerStore::with_players([
            player("P-3", "Carol"),
            player("P-1", "Alice"),
            player("P-2", "Bob"),
        ]);

        let ids = store
            .list_players()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.player_id)
            .collect::<Vec<_>>();
        assert_eq!(ids, ["P-1", "P-2", "P-3"]);
    }

    #[tokio::test]
    async fn clones_share_the_same_map() {
        let store = InMemoryPlayerStore::new();
        let handle = store.clone();
        handle.save_player(player("P-1", "Alice")).await.unwrap();

        assert!(!store.is_empty());
        assert!(store.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn insert_refuses_taken_ids() {
        let store = InMemoryPlayerStore::with_players([player("P-1", "Alice")]);

        assert!(!store.insert_player(player("P-1", "Impostor")).await.unwrap());
        assert!(store.insert_player(player("P-2", "Bob")).await.unwrap());

        let kept = store.find_player("P-1".into()).await.unwrap().unwrap();
        assert_eq!(kept.player_name, "Alice");
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn delete_reports_whether_player_existed() {
        let store = InMemoryPlayerStore::with_players([player("P-1", "Alice")]);

        assert!(store.delete_player("P-1".into()).await.unwrap());
        assert!(!store.delete_player("P-1".into()).await.unwrap());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn limit_applies_to_new_ids_only() {
        let store = InMemoryPlayerStore::with_limit(1, [player("P-1", "Alice")]);

        let err = store.insert_player(player("P-2", "Bob")).await.unwrap_err();
        assert!(matches!(err, StorageError::CapacityExceeded { limit: 1 }));
        assert!(store.save_player(player("P-2", "Bob")).await.is_err());

        // Replacing an existing player does not need a new slot.
        store.save_player(player("P-1", "Alicia")).await.unwrap();
        assert!(!store.insert_player(player("P-1", "Again")).await.unwrap());

        store.delete_player("P-1".into()).await.unwrap();
        assert!(store.insert_player(player("P-2", "Bob")).await.unwrap());
        assert_eq!(store.len(), 1);
    }
}
