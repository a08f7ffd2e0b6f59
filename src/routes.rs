// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{handlers::quiz, state::AppState};

/// Assembles the main application router.
///
/// * Quiz routes plus a static file fallback for the bundled frontend.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool).
pub fn create_router(state: AppState) -> Router {
    let quiz_routes = Router::new()
        .route("/quiz", post(quiz::create_quiz).get(quiz::list_quizzes))
        .route("/quiz/{id}", get(quiz::get_quiz));

    Router::new()
        .merge(quiz_routes)
        .fallback_service(ServeDir::new("public"))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
