use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use axum_helpers::{Flash, push_flash, take_flashes};
use std::sync::Arc;
use tower_sessions::Session;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::hasher::PasswordHasher;
use crate::models::{LoginRequest, RegisterRequest, RegistrationOutcome, Rejection};
use crate::pages::Pages;
use crate::repository::UserRepository;
use crate::service::UserService;

/// Session key holding the authenticated user's id
pub const USER_ID_KEY: &str = "user_id";

const REGISTER_PATH: &str = "/users/register";
const LOGIN_PATH: &str = "/users/login";
const DASHBOARD_PATH: &str = "/users/dashboard";

struct UsersState<R: UserRepository, H: PasswordHasher> {
    service: UserService<R, H>,
    pages: Pages,
}

type SharedState<R, H> = State<Arc<UsersState<R, H>>>;

/// Create the users router. Mount it under `/users` behind a session layer.
pub fn router<R, H>(service: UserService<R, H>, pages: Pages) -> Router
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    Router::new()
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/dashboard", get(dashboard))
        .route("/logout", get(logout))
        .with_state(Arc::new(UsersState { service, pages }))
}

/// GET /users/register
async fn register_form<R: UserRepository, H: PasswordHasher>(
    State(state): SharedState<R, H>,
    session: Session,
) -> UserResult<Html<String>> {
    let flashes = take_flashes(&session).await?;
    Ok(Html(state.pages.register(&flashes)?))
}

/// POST /users/register
async fn register<R: UserRepository, H: PasswordHasher>(
    State(state): SharedState<R, H>,
    session: Session,
    form: Result<Form<RegisterRequest>, FormRejection>,
) -> UserResult<Redirect> {
    let outcome = match form {
        Ok(Form(input)) => state.service.register(input).await?,
        Err(rejection) => {
            tracing::debug!(%rejection, "Undecodable registration body");
            RegistrationOutcome::Rejected(Rejection::InvalidData)
        }
    };

    match outcome {
        RegistrationOutcome::Registered(user) => {
            tracing::info!(user_id = %user.id, "User registered");
            push_flash(&session, Flash::success("You may now login.")).await?;
            Ok(Redirect::to(LOGIN_PATH))
        }
        RegistrationOutcome::Rejected(rejection) => {
            push_flash(&session, Flash::error(rejection.message())).await?;
            Ok(Redirect::to(REGISTER_PATH))
        }
    }
}

/// GET /users/login
async fn login_form<R: UserRepository, H: PasswordHasher>(
    State(state): SharedState<R, H>,
    session: Session,
) -> UserResult<Html<String>> {
    let flashes = take_flashes(&session).await?;
    Ok(Html(state.pages.login(&flashes)?))
}

/// POST /users/login
async fn login<R: UserRepository, H: PasswordHasher>(
    State(state): SharedState<R, H>,
    session: Session,
    form: Result<Form<LoginRequest>, FormRejection>,
) -> UserResult<Redirect> {
    let Ok(Form(input)) = form else {
        push_flash(&session, Flash::error("Missing credentials.")).await?;
        return Ok(Redirect::to(LOGIN_PATH));
    };

    match state.service.authenticate(&input.email, &input.password).await {
        Ok(user) => {
            session.cycle_id().await?;
            session.insert(USER_ID_KEY, user.id).await?;
            tracing::info!(user_id = %user.id, "User logged in");
            Ok(Redirect::to(DASHBOARD_PATH))
        }
        Err(UserError::InvalidCredentials) => {
            push_flash(&session, Flash::error("Invalid email or password.")).await?;
            Ok(Redirect::to(LOGIN_PATH))
        }
        Err(e) => Err(e),
    }
}

/// GET /users/dashboard
async fn dashboard<R: UserRepository, H: PasswordHasher>(
    State(state): SharedState<R, H>,
    session: Session,
) -> UserResult<Response> {
    let Some(user_id) = session.get::<Uuid>(USER_ID_KEY).await? else {
        return redirect_to_login(&session).await;
    };

    match state.service.get_user(user_id).await {
        Ok(user) => {
            let flashes = take_flashes(&session).await?;
            Ok(Html(state.pages.dashboard(&user, &flashes)?).into_response())
        }
        Err(UserError::NotFound(_)) => {
            session.remove_value(USER_ID_KEY).await?;
            redirect_to_login(&session).await
        }
        Err(e) => Err(e),
    }
}

/// GET /users/logout
async fn logout(session: Session) -> UserResult<Redirect> {
    session.flush().await?;
    Ok(Redirect::to(LOGIN_PATH))
}

async fn redirect_to_login(session: &Session) -> UserResult<Response> {
    push_flash(session, Flash::error("Please log in to view that resource.")).await?;
    Ok(Redirect::to(LOGIN_PATH).into_response())
}
