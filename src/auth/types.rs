//! Types for authentication and user management

use serde::{Deserialize, Serialize};

/// User data
///
/// Owned by the backend; the client keeps a cached copy for display only.
/// Timestamps are kept as opaque strings, never interpreted client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// The user ID
    pub id: String,

    /// The user's email address
    pub email: String,

    /// The user's display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The creation time
    #[serde(rename = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Request body for account registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Email address for the new account
    pub email: String,

    /// Password for the new account
    pub password: String,

    /// Optional display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request body for signing in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email address
    pub email: String,

    /// Account password
    pub password: String,

    /// Whether the backend should issue a longer-lived session
    #[serde(rename = "remember_me", skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<bool>,
}

/// Authentication response returned by signup and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The access token
    #[serde(rename = "access_token")]
    pub access_token: String,

    /// The refresh token
    #[serde(rename = "refresh_token")]
    pub refresh_token: String,

    /// The token type
    #[serde(rename = "token_type")]
    pub token_type: String,

    /// The authenticated user
    pub user: User,
}
