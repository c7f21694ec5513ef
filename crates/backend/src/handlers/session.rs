use axum::{http::StatusCode, Json};

use contracts::system::session::{SessionInfo, SessionUser};

use crate::shared::config;

/// Current-user descriptor for the header bar. The user comes from the
/// deployment config; this service never manages credentials.
pub async fn current_user() -> Json<SessionInfo> {
    let session = &config::get().session;
    let user = session.user_name.as_ref().map(|name| SessionUser {
        display_name: name.clone(),
        email: session.user_email.clone(),
    });
    Json(SessionInfo { user })
}

/// Acknowledge a sign-out request. Session teardown itself happens at the
/// external authentication provider.
pub async fn logout() -> StatusCode {
    tracing::info!("Session sign-out requested");
    StatusCode::NO_CONTENT
}
