use axum::{
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    extract::Request,
    body::Body,
};
use tower_sessions::Session;
use crate::handlers::SESSION_KEY;
use crate::models::AuthSession;

pub async fn require_auth(
    session: Session,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path();

    // login page, login action and static assets stay public
    if path == "/" || path == "/login" || path.starts_with("/assets") {
        return next.run(req).await;
    }

    match session.get::<AuthSession>(SESSION_KEY).await {
        Ok(Some(_)) => next.run(req).await,
        _ => Redirect::to("/").into_response(),
    }
}
