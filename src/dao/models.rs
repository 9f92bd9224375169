use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::dto::player::PlayerSource;

/// Representation of a player stored in persistence and shared across layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerEntity {
    /// Stable, opaque identifier for the player.
    pub player_id: String,
    /// Display name chosen for the player.
    pub player_name: String,
    /// Creation timestamp for auditing/debugging.
    pub created_at: PrimitiveDateTime,
    /// Last time the player was updated; `None` until the first update.
    pub updated_at: Option<PrimitiveDateTime>,
}

impl PlayerSource for PlayerEntity {
    fn player_id(&self) -> Option<&str> {
        Some(self.player_id.as_str())
    }

    fn updated_at(&self) -> Option<PrimitiveDateTime> {
        self.updated_at
    }
}
