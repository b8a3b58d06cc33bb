use crate::Identity;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bhub_domain::constants::AUTH_TAG;
use bhub_kernel::server::ApiState;
use tracing::{info, warn};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn auth_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(logout_handler))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// Terminates the caller's session.
///
/// No redirect is issued; the client decides where to navigate next.
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = NO_CONTENT, description = "Session terminated"),
        (status = UNAUTHORIZED, description = "Missing or unknown session"),
    ),
    tag = AUTH_TAG,
)]
#[allow(clippy::unused_async)]
async fn logout_handler(State(state): State<ApiState>, headers: HeaderMap) -> Response {
    let Some(session_id) = bearer_token(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    let identity = match state.try_get_slice::<Identity>() {
        Ok(identity) => identity,
        Err(e) => {
            warn!("Identity slice unavailable: {e}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        },
    };

    if identity.sessions.terminate(session_id) {
        info!("Session terminated via API");
        StatusCode::NO_CONTENT.into_response()
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}
