//! Validation helpers for DTOs.

use validator::ValidationError;

/// Longest player identifier accepted at registration, in bytes.
pub const PLAYER_ID_MAX_LEN: usize = 32;

/// Longest display name accepted for a player, counted in characters.
pub const PLAYER_NAME_MAX_CHARS: usize = 32;

/// Validates that a player name is non-blank and at most [`PLAYER_NAME_MAX_CHARS`] long.
///
/// Surrounding whitespace is ignored for both checks.
///
/// # Examples
///
/// ```ignore
/// validate_player_name("Alice")   // Ok
/// validate_player_name("   ")     // Err - blank
/// validate_player_name(&"x".repeat(33)) // Err - too long
/// ```
pub fn validate_player_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        let mut err = ValidationError::new("player_name_blank");
        err.message = Some("Player name must not be empty".into());
        return Err(err);
    }

    let length = trimmed.chars().count();
    if length > PLAYER_NAME_MAX_CHARS {
        let mut err = ValidationError::new("player_name_length");
        err.message = Some(
            format!("Player name must be at most {PLAYER_NAME_MAX_CHARS} characters (got {length})")
                .into(),
        );
        return Err(err);
    }

    Ok(())
}

/// Validates that a player identifier is 1 to [`PLAYER_ID_MAX_LEN`] ASCII letters, digits,
/// `-` or `_`, so it can be used verbatim as a path segment.
pub fn validate_player_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() || id.len() > PLAYER_ID_MAX_LEN {
        let mut err = ValidationError::new("player_id_length");
        err.message = Some(
            format!(
                "Player ID must be between 1 and {PLAYER_ID_MAX_LEN} characters (got {})",
                id.len()
            )
            .into(),
        );
        return Err(err);
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        let mut err = ValidationError::new("player_id_format");
        err.message =
            Some("Player ID must contain only ASCII letters, digits, '-' or '_'".into());
        return Err(err);
    }

    Ok(())
}
