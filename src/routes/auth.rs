//! Login, logout and the session extractor
//!
//! The session is a signed cookie holding the user id and name. Handlers
//! that take a `CurrentUser` argument reject requests without a valid one.

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{request::Parts, HeaderMap},
    Json,
};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use std::sync::Arc;

use crate::db::repository::users;
use crate::error::ApiError;
use crate::models::session::{LoginRequest, SessionUser, SESSION_COOKIE};
use crate::AppState;

/// The logged-in user of the current request
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar: SignedCookieJar =
            SignedCookieJar::from_headers(&parts.headers, state.cookie_key.clone());

        jar.get(SESSION_COOKIE)
            .and_then(|cookie| SessionUser::from_cookie_value(cookie.value()))
            .map(CurrentUser)
            .ok_or(ApiError::Unauthorized("Not logged in"))
    }
}

/// POST /login - Check credentials and start a session
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<(SignedCookieJar, Json<SessionUser>), ApiError> {
    let user_id = users::authenticate(&state.pool, &payload.username, &payload.password)
        .await?
        .ok_or(ApiError::Unauthorized("Invalid credentials"))?;

    let user = SessionUser {
        user_id,
        username: payload.username,
    };

    let cookie = Cookie::build((SESSION_COOKIE, user.to_cookie_value()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    let jar = SignedCookieJar::new(state.cookie_key.clone()).add(cookie);

    tracing::info!("User '{}' logged in", user.username);

    Ok((jar, Json(user)))
}

/// POST /logout - End the session
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> (SignedCookieJar, Json<serde_json::Value>) {
    // Only cookies present on the request produce a removal header
    let jar = SignedCookieJar::from_headers(&headers, state.cookie_key.clone())
        .remove(Cookie::build(SESSION_COOKIE).path("/"));

    (jar, Json(serde_json::json!({ "success": true })))
}

/// GET /home - Current user
pub async fn home(CurrentUser(user): CurrentUser) -> Json<SessionUser> {
    Json(user)
}
