mod errors;
mod extract;
mod handlers;
mod middleware;
mod state;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

pub use middleware::{OWNER_HEADER, OwnerId, TOKEN_HEADER};
pub use state::{HttpState, generate_api_token};

pub fn router(state: HttpState) -> Router<()> {
    let api = Router::new()
        .route("/records_add", post(handlers::records_add))
        .route("/records_list", post(handlers::records_list))
        .route("/records_delete", post(handlers::records_delete))
        .route("/report", post(handlers::report))
        .route("/settings_get", post(handlers::settings_get))
        .route("/settings_put", post(handlers::settings_put))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::require_identity,
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .with_state(state)
}
