use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the player backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::players::list_players,
        crate::routes::players::get_player,
        crate::routes::players::update_player,
        crate::routes::players::create_player,
        crate::routes::players::delete_player,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::player::CreatePlayerRequest,
            crate::dto::player::PlayerSummary,
            crate::dto::player::UpdatePlayerRequest,
            crate::dto::player::UpdateConfirmationResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "players", description = "Player registration, lookup, update and removal"),
    )
)]
pub struct ApiDoc;
