use axum::Router;
use domain_users::{Argon2Hasher, Pages, PostgresUserRepository, UserService, handlers};

pub fn router(state: &crate::state::AppState) -> eyre::Result<Router> {
    let repository = PostgresUserRepository::new(state.db.clone());
    let service = UserService::new(repository, Argon2Hasher::new());
    let pages =
        Pages::new().map_err(|e| eyre::eyre!("Page templates failed to compile: {}", e))?;
    Ok(handlers::router(service, pages))
}
