//! Authentication Handlers
//!
//! Admin login against the configured credential pair.

use std::time::Duration;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: i64,
}

/// Login handler
///
/// Verifies the admin credential pair from configuration and returns
/// a session JWT. The configured password may be either a plain value
/// or an argon2 PHC hash.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let config = &state.config;

    // Fixed delay before checking the result (timing attacks)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    if config.admin_password.is_empty() {
        tracing::error!("ADMIN_PASSWORD is not configured, rejecting login");
        return Err(AppError::invalid_credentials());
    }

    let username_valid = req.username == config.admin_username;
    let password_valid = verify_password(&config.admin_password, &req.password)?;

    if !username_valid || !password_valid {
        tracing::warn!(username = %req.username, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(&req.username)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(username = %req.username, "Admin login");

    Ok(Json(LoginResponse {
        token,
        expires_in: jwt_service.config.expiration_minutes * 60,
    }))
}

/// Check a submitted password against the stored one.
///
/// An argon2 PHC string (`$argon2...`) is verified properly; anything
/// else is compared as a plain value.
fn verify_password(stored: &str, submitted: &str) -> Result<bool, AppError> {
    if stored.starts_with("$argon2") {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| AppError::internal(format!("Bad ADMIN_PASSWORD hash: {e}")))?;
        Ok(Argon2::default()
            .verify_password(submitted.as_bytes(), &parsed)
            .is_ok())
    } else {
        Ok(stored == submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::PasswordHasher;
    use argon2::password_hash::SaltString;
    use argon2::password_hash::rand_core::OsRng;

    #[test]
    fn plain_passwords_compare_directly() {
        assert!(verify_password("hunter2", "hunter2").unwrap());
        assert!(!verify_password("hunter2", "hunter3").unwrap());
    }

    #[test]
    fn argon2_hashes_are_verified() {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(b"hunter2", &salt)
            .unwrap()
            .to_string();

        assert!(verify_password(&hash, "hunter2").unwrap());
        assert!(!verify_password(&hash, "hunter3").unwrap());
    }
}
