/// User endpoints
///
/// Registration and credential-check login. Passwords are hashed with
/// Argon2id before insert and verified against the stored hash at login;
/// neither response ever carries the hash.
///
/// # Endpoints
///
/// - `POST /api/users` - Register a new user
/// - `POST /api/users/login` - Check credentials

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::BodyJson,
};
use axum::{extract::State, http::StatusCode, Json};
use eventdesk_shared::{
    auth::password,
    models::user::{CreateUser, User, UserRole},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Email address; uniqueness is enforced by the database, and format is
    /// deliberately not validated (the contract only requires non-empty)
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// Plaintext password; hashed before it reaches the database
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    /// Requested role; only organizer and customer are self-assignable
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// Plaintext password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response wrapper for user operations
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// Human-readable outcome
    pub message: String,

    /// The account (password hash excluded by the model's serializer)
    pub user: User,
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /api/users
/// Content-Type: application/json
///
/// {
///   "name": "A",
///   "email": "a@x.com",
///   "password": "p",
///   "role": "customer"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing fields or a role outside
///   {organizer, customer} (admin cannot self-register)
/// - `409 Conflict`: Email already exists
/// - `500 Internal Server Error`: Store failure
pub async fn register(
    State(state): State<AppState>,
    BodyJson(req): BodyJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    req.validate()?;

    let role: UserRole = req
        .role
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid role".to_string()))?;

    if !role.assignable_at_registration() {
        return Err(ApiError::BadRequest("Invalid role".to_string()));
    }

    let password_hash = password::hash_password(&req.password)?;

    let user = User::create(
        &state.db,
        CreateUser {
            name: req.name,
            email: req.email,
            password_hash,
            role,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            message: "User created".to_string(),
            user,
        }),
    ))
}

/// Check credentials
///
/// # Endpoint
///
/// ```text
/// POST /api/users/login
/// Content-Type: application/json
///
/// {
///   "email": "a@x.com",
///   "password": "p"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing email or password
/// - `401 Unauthorized`: Unknown email or wrong password
/// - `500 Internal Server Error`: Store failure
pub async fn login(
    State(state): State<AppState>,
    BodyJson(req): BodyJson<LoginRequest>,
) -> ApiResult<Json<UserResponse>> {
    req.validate()?;

    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized("Incorrect password".to_string()));
    }

    Ok(Json(UserResponse {
        message: "Login successful".to_string(),
        user,
    }))
}
