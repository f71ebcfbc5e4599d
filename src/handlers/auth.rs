use axum::{
    extract::{Form, Query},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use std::fs;
use crate::errors::{AppError, AppResult};
use crate::models::{AuthSession, LoginForm, MessageParams, Role, User};
use super::banner;

pub(crate) const SESSION_KEY: &str = "user_session";

pub async fn serve_login_page(Query(params): Query<MessageParams>) -> AppResult<Response> {
    let login_html = fs::read_to_string("templates/login.html").map_err(AppError::File)?;

    let mut banners = String::new();
    if let Some(error) = params.error.as_deref() {
        banners.push_str(&banner("error", error));
    }
    if let Some(info) = params.info.as_deref() {
        banners.push_str(&banner("info", info));
    }

    Ok(Html(login_html.replace("{{notices}}", &banners)).into_response())
}

#[axum::debug_handler]
pub async fn handle_login(
    session: Session,
    Form(login_form): Form<LoginForm>,
) -> AppResult<Response> {
    tracing::info!("Login attempt for user: {}", login_form.username);

    // InvalidCredentials redirects back to the login page via IntoResponse
    let auth = User::authenticate(&login_form.username, &login_form.password)?;

    session
        .insert(SESSION_KEY, auth.clone())
        .await
        .map_err(|e| AppError::Auth(format!("Session error: {}", e)))?;

    tracing::info!("User {} logged in ({})", auth.username, auth.role.label());
    Ok(Redirect::to("/inventory").into_response())
}

#[axum::debug_handler]
pub async fn handle_logout(session: Session) -> Response {
    if let Err(e) = session.remove::<AuthSession>(SESSION_KEY).await {
        tracing::warn!("Session removal error: {}", e);
    }
    Redirect::to("/").into_response()
}

// Helper to read the authenticated session out of the cookie store
pub(crate) async fn current_session(session: &Session) -> AppResult<AuthSession> {
    session
        .get::<AuthSession>(SESSION_KEY)
        .await
        .map_err(|e| AppError::Auth(format!("Session error: {}", e)))?
        .ok_or_else(|| AppError::Auth("No ha iniciado sesión".to_string()))
}

// Helper for the administrator-only actions (import, edit)
pub(crate) async fn require_admin(session: &Session) -> AppResult<AuthSession> {
    let auth = current_session(session).await?;
    if auth.role != Role::Administrator {
        return Err(AppError::Forbidden);
    }
    Ok(auth)
}
