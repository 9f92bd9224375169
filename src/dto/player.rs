//! DTO definitions exchanged by the player REST API.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{
    dto::{
        timestamp::{self, format_timestamp},
        validation::{validate_player_id, validate_player_name},
    },
    error::PayloadError,
};

/// Read-only view over an entity that can be confirmed back to a client.
///
/// Accessors return `None` when the underlying value was never set.
pub trait PlayerSource {
    /// Opaque identifier of the player.
    fn player_id(&self) -> Option<&str>;
    /// Last time the player was updated.
    fn updated_at(&self) -> Option<PrimitiveDateTime>;
}

/// Acknowledgement returned once a player update has been persisted.
///
/// Both fields are copied out of the source at construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfirmationResponse {
    #[schema(example = "P-1001")]
    player_id: String,
    #[serde(with = "timestamp::fixed_pattern")]
    #[schema(value_type = String, example = "2024-03-05 14:07:09")]
    updated_at: PrimitiveDateTime,
}

impl UpdateConfirmationResponse {
    /// Copy the identifier and last-updated timestamp out of `source`.
    pub fn from_source<P>(source: &P) -> Result<Self, PayloadError>
    where
        P: PlayerSource + ?Sized,
    {
        let player_id = source
            .player_id()
            .ok_or_else(|| PayloadError::InvalidInput("player id is missing".into()))?;
        let updated_at = source
            .updated_at()
            .ok_or_else(|| PayloadError::InvalidInput("updated_at is missing".into()))?;

        Ok(Self {
            player_id: player_id.to_owned(),
            updated_at: timestamp::truncate_to_seconds(updated_at)?,
        })
    }

    /// Identifier copied from the source.
    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    /// Last-updated time copied from the source, truncated to whole seconds.
    pub fn updated_at(&self) -> PrimitiveDateTime {
        self.updated_at
    }
}

/// Payload accepted by `PUT /players/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    #[schema(example = "Alice")]
    pub player_name: String,
}

impl Validate for UpdatePlayerRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_player_name(&self.player_name) {
            errors.add("player_name", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Payload accepted by `POST /players` to register a new player.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    #[schema(example = "P-1003")]
    pub player_id: String,
    #[schema(example = "Carol")]
    pub player_name: String,
}

impl Validate for CreatePlayerRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_player_id(&self.player_id) {
            errors.add("player_id", e);
        }
        if let Err(e) = validate_player_name(&self.player_name) {
            errors.add("player_name", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Public projection of a player.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    /// Opaque player identifier.
    #[schema(example = "P-1001")]
    pub player_id: String,
    /// Display name.
    #[schema(example = "Alice")]
    pub player_name: String,
    /// Registration time, `yyyy-MM-dd HH:mm:ss`.
    #[schema(example = "2024-03-01 09:00:00")]
    pub created_at: String,
    /// Last update time, `yyyy-MM-dd HH:mm:ss`; absent until the first update.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2024-03-05 14:07:09")]
    pub updated_at: Option<String>,
}

impl PlayerSummary {
    pub(crate) fn from_parts(
        player_id: String,
        player_name: String,
        created_at: PrimitiveDateTime,
        updated_at: Option<PrimitiveDateTime>,
    ) -> Result<Self, PayloadError> {
        Ok(Self {
            player_id,
            player_name,
            created_at: format_timestamp(created_at)?,
            updated_at: updated_at.map(format_timestamp).transpose()?,
        })
    }
}
