use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::player::{
        CreatePlayerRequest, PlayerSummary, UpdateConfirmationResponse, UpdatePlayerRequest,
    },
    error::AppError,
    services::player_service,
    state::SharedState,
};

/// Player registration, lookup, update, and removal endpoints.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/players", get(list_players).post(create_player))
        .route(
            "/players/{id}",
            get(get_player).put(update_player).delete(delete_player),
        )
}

#[utoipa::path(
    get,
    path = "/players",
    tag = "players",
    responses((status = 200, description = "Known players ordered by id", body = [PlayerSummary]))
)]
/// Return every registered player.
pub async fn list_players(
    State(state): State<SharedState>,
) -> Result<Json<Vec<PlayerSummary>>, AppError> {
    Ok(Json(player_service::list_players(&state).await?))
}

#[utoipa::path(
    get,
    path = "/players/{id}",
    tag = "players",
    params(("id" = String, Path, description = "Identifier of the player to retrieve")),
    responses(
        (status = 200, description = "Player", body = PlayerSummary),
        (status = 404, description = "Unknown player")
    )
)]
/// Retrieve a player by its identifier.
pub async fn get_player(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerSummary>, AppError> {
    Ok(Json(player_service::get_player(&state, &id).await?))
}

#[utoipa::path(
    put,
    path = "/players/{id}",
    tag = "players",
    params(("id" = String, Path, description = "Identifier of the player to update")),
    request_body = UpdatePlayerRequest,
    responses(
        (status = 200, description = "Update persisted", body = UpdateConfirmationResponse),
        (status = 400, description = "Invalid player name"),
        (status = 404, description = "Unknown player")
    )
)]
/// Update a player and confirm the persisted update time.
pub async fn update_player(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePlayerRequest>,
) -> Result<Json<UpdateConfirmationResponse>, AppError> {
    Ok(Json(
        player_service::update_player(&state, &id, payload).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/players",
    tag = "players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Player registered", body = PlayerSummary),
        (status = 400, description = "Invalid player id or name"),
        (status = 409, description = "Player id already taken"),
        (status = 503, description = "Player store full or unavailable")
    )
)]
/// Register a new player.
pub async fn create_player(
    State(state): State<SharedState>,
    Json(payload): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<PlayerSummary>), AppError> {
    let created = player_service::create_player(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete,
    path = "/players/{id}",
    tag = "players",
    params(("id" = String, Path, description = "Identifier of the player to delete")),
    responses(
        (status = 204, description = "Player deleted"),
        (status = 404, description = "Unknown player")
    )
)]
/// Delete a player by its identifier.
pub async fn delete_player(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    player_service::delete_player(&state, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
