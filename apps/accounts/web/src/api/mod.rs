use axum::Router;

pub mod health;
pub mod users;

/// Application routes. Sub-routers have their state applied already.
pub fn routes(state: &crate::state::AppState) -> eyre::Result<Router> {
    Ok(Router::new().nest("/users", users::router(state)?))
}

/// Router with `/ready`, backed by a real database check
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
