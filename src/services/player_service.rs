//! Business logic behind the player REST routes: registration, lookups, renames,
//! removal, and the confirmation returned once an update has been persisted.

use tracing::debug;
use validator::Validate;

use crate::{
    dao::models::PlayerEntity,
    dto::{
        player::{
            CreatePlayerRequest, PlayerSummary, UpdateConfirmationResponse, UpdatePlayerRequest,
        },
        timestamp::truncate_to_seconds,
    },
    error::ServiceError,
    state::SharedState,
};

impl TryFrom<PlayerEntity> for PlayerSummary {
    type Error = ServiceError;

    fn try_from(entity: PlayerEntity) -> Result<Self, Self::Error> {
        Ok(PlayerSummary::from_parts(
            entity.player_id,
            entity.player_name,
            entity.created_at,
            entity.updated_at,
        )?)
    }
}

async fn require_player(state: &SharedState, player_id: &str) -> Result<PlayerEntity, ServiceError> {
    state
        .player_store()
        .find_player(player_id.to_owned())
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("player `{player_id}` not found")))
}

/// Return every known player ordered by identifier.
pub async fn list_players(state: &SharedState) -> Result<Vec<PlayerSummary>, ServiceError> {
    state
        .player_store()
        .list_players()
        .await?
        .into_iter()
        .map(PlayerSummary::try_from)
        .collect()
}

/// Return a single player by identifier.
pub async fn get_player(state: &SharedState, player_id: &str) -> Result<PlayerSummary, ServiceError> {
    require_player(state, player_id).await?.try_into()
}

/// Register a new player created now; the identifier must not be taken.
pub async fn create_player(
    state: &SharedState,
    request: CreatePlayerRequest,
) -> Result<PlayerSummary, ServiceError> {
    request.validate()?;

    let CreatePlayerRequest {
        player_id,
        player_name,
    } = request;
    let player = PlayerEntity {
        player_id,
        player_name: player_name.trim().to_owned(),
        created_at: truncate_to_seconds(state.clock().now())?,
        updated_at: None,
    };

    if !state.player_store().insert_player(player.clone()).await? {
        return Err(ServiceError::Conflict(format!(
            "player `{}` already exists",
            player.player_id
        )));
    }

    debug!(player_id = %player.player_id, "player registered");
    player.try_into()
}

/// Remove a player.
pub async fn delete_player(state: &SharedState, player_id: &str) -> Result<(), ServiceError> {
    if !state
        .player_store()
        .delete_player(player_id.to_owned())
        .await?
    {
        return Err(ServiceError::NotFound(format!(
            "player `{player_id}` not found"
        )));
    }

    debug!(player_id, "player deleted");
    Ok(())
}

/// Rename a player, stamp the update time, and confirm what was persisted.
pub async fn update_player(
    state: &SharedState,
    player_id: &str,
    request: UpdatePlayerRequest,
) -> Result<UpdateConfirmationResponse, ServiceError> {
    request.validate()?;

    let mut player = require_player(state, player_id).await?;
    player.player_name = request.player_name.trim().to_owned();
    player.updated_at = Some(truncate_to_seconds(state.clock().now())?);

    state.player_store().save_player(player.clone()).await?;

    let confirmation = UpdateConfirmationResponse::from_source(&player)?;
    debug!(
        player_id = %confirmation.player_id(),
        updated_at = %confirmation.updated_at(),
        "player updated"
    );

    Ok(confirmation)
}
