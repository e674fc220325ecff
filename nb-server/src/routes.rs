use crate::{api, health, web};

use nb_ws::AppState;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Session routes
        .route("/", get(web::auth::index).post(web::auth::login))
        .route("/signup", post(web::auth::signup))
        .route("/forgot", post(web::auth::forgot_password))
        .route("/logout", get(web::auth::logout))
        .route("/add", post(web::notes::add_note))
        .route("/edit/{id}", post(web::notes::edit_note))
        .route("/delete/{id}", post(web::notes::delete_note))
        .route(
            "/settings",
            get(web::settings::settings).post(web::settings::upload_profile_pic),
        )
        .route(
            "/download_profile_pic",
            get(web::settings::download_profile_pic),
        )
        // Live stats channel
        .route("/websocket", get(nb_ws::websocket_handler))
        // API-key gateway
        .route(
            "/notes",
            get(api::notes::notes::list_notes).post(api::notes::notes::create_note),
        )
        .route(
            "/notes/{id}",
            get(api::notes::notes::get_note)
                .put(api::notes::notes::update_note)
                .delete(api::notes::notes::delete_note),
        )
        // Health check endpoint
        .route("/health", get(health::health))
        // Usage counter sees every request that carries an api_key
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::usage::track_usage,
        ))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
