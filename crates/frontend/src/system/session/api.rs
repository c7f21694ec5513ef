use contracts::system::session::SessionInfo;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch the current session (demo deployments always return a user).
pub async fn get_session() -> Result<SessionInfo, String> {
    let response = Request::get(&format!("{}/api/system/session/me", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Session request failed: {}", response.status()));
    }

    response
        .json::<SessionInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// End the session on the backend.
pub async fn logout() -> Result<(), String> {
    let response = Request::post(&format!("{}/api/system/session/logout", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}
