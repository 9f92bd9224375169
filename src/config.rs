//! Application-level configuration loading, including the player roster seeded at startup.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;
use time::PrimitiveDateTime;
use tracing::{info, warn};

use crate::{
    dao::{models::PlayerEntity, player_store::memory::DEFAULT_MAX_PLAYERS},
    dto::timestamp::parse_timestamp,
    error::PayloadError,
};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "PLAYER_BACK_CONFIG_PATH";

/// Player known before the server accepts its first request.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SeedPlayer {
    player_id: String,
    player_name: String,
    created_at: Option<PrimitiveDateTime>,
    updated_at: Option<PrimitiveDateTime>,
}

#[derive(Debug, Clone)]
/// Immutable runtime configuration read once at startup.
pub struct AppConfig {
    players: Vec<SeedPlayer>,
    max_players: usize,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to a baked-in roster.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        count = app_config.players.len(),
                        max_players = app_config.max_players,
                        "loaded player roster from config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a configuration document.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let raw = serde_json::from_str::<RawConfig>(contents)?;
        Ok(Self::try_from(raw)?)
    }

    /// Upper bound on the number of players the store accepts.
    pub fn max_players(&self) -> usize {
        self.max_players
    }

    /// Turn the seed roster into storable entities.
    ///
    /// A seed without `created_at` is considered created at its last update, or at `now`
    /// when it was never updated, so `created_at <= updated_at` always holds.
    pub fn seed_entities(&self, now: PrimitiveDateTime) -> Vec<PlayerEntity> {
        self.players
            .iter()
            .map(|seed| PlayerEntity {
                player_id: seed.player_id.clone(),
                player_name: seed.player_name.clone(),
                created_at: seed.created_at.or(seed.updated_at).unwrap_or(now),
                updated_at: seed.updated_at,
            })
            .collect()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            players: default_players(),
            max_players: DEFAULT_MAX_PLAYERS,
        }
    }
}

/// Reasons a configuration document can be rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not have the expected shape.
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    /// A roster entry carries an unusable timestamp.
    #[error("invalid player entry: {0}")]
    Player(#[from] PayloadError),
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    players: Vec<RawPlayer>,
    #[serde(default)]
    max_players: Option<usize>,
}

impl TryFrom<RawConfig> for AppConfig {
    type Error = PayloadError;

    fn try_from(value: RawConfig) -> Result<Self, Self::Error> {
        let players = value
            .players
            .into_iter()
            .map(SeedPlayer::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            players,
            max_players: value.max_players.unwrap_or(DEFAULT_MAX_PLAYERS),
        })
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of a single roster entry inside the configuration file.
struct RawPlayer {
    player_id: String,
    player_name: String,
    /// Optional `yyyy-MM-dd HH:mm:ss` creation timestamp.
    #[serde(default)]
    created_at: Option<String>,
    /// Optional `yyyy-MM-dd HH:mm:ss` timestamp of the last update.
    #[serde(default)]
    updated_at: Option<String>,
}

impl TryFrom<RawPlayer> for SeedPlayer {
    type Error = PayloadError;

    fn try_from(value: RawPlayer) -> Result<Self, Self::Error> {
        let created_at = value
            .created_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;
        let updated_at = value
            .updated_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        if let (Some(created), Some(updated)) = (created_at, updated_at) {
            if updated < created {
                return Err(PayloadError::InvalidInput(format!(
                    "player `{}` updated ({updated}) before it was created ({created})",
                    value.player_id
                )));
            }
        }

        Ok(Self {
            player_id: value.player_id,
            player_name: value.player_name,
            created_at,
            updated_at,
        })
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in roster shipped with the binary.
fn default_players() -> Vec<SeedPlayer> {
    vec![
        SeedPlayer {
            player_id: "P-1001".into(),
            player_name: "Alice".into(),
            created_at: None,
            updated_at: None,
        },
        SeedPlayer {
            player_id: "P-1002".into(),
            player_name: "Bob".into(),
            created_at: None,
            updated_at: None,
        },
    ]
}
