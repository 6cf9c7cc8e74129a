use tonic::Status;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::UserRead;

pub mod current_user;
pub mod is_admin;
pub mod login;
pub mod refresh_token;
pub mod register;

/// Fixed mapping from domain failure kinds to transport status codes.
///
/// Infrastructure kinds collapse to a generic internal status; no storage
/// or crypto detail crosses the boundary.
pub fn status_from_error(err: &AuthError) -> Status {
    match err {
        AuthError::InvalidCredentials => Status::invalid_argument(err.to_string()),
        AuthError::AlreadyRegistered => Status::already_exists(err.to_string()),
        AuthError::InvalidTenant(_) => Status::invalid_argument(err.to_string()),
        AuthError::Unauthorized => Status::unauthenticated(err.to_string()),
        AuthError::Hashing(_) | AuthError::TokenIssue(_) | AuthError::Database(_) => {
            Status::internal("internal error")
        }
    }
}

impl From<UserRead> for crate::proto::CurrentUserResponse {
    fn from(user: UserRead) -> Self {
        Self {
            user_id: user.id.0,
            email: user.email,
            name: user.name,
        }
    }
}
