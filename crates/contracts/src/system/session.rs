use serde::{Deserialize, Serialize};

/// Current-user descriptor supplied by the session boundary.
///
/// The dashboard only reads this; credentials and session lifetime are
/// managed outside this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub display_name: String,
    pub email: Option<String>,
}

/// Response of the session endpoint. `user` is `None` when the deployment
/// runs without an authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user: Option<SessionUser>,
}
