use std::sync::Arc;

use tonic::Status;

use super::status_from_error;
use crate::domain::auth::models::AppId;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S: AuthServicePort>(
    service: Arc<S>,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    validate(&request)?;

    let tokens = service
        .login(&request.email, &request.password, AppId(request.app_id))
        .await
        .map_err(|e| status_from_error(&e))?;

    Ok(LoginResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
    })
}

fn validate(request: &LoginRequest) -> Result<(), Status> {
    if request.email.is_empty() {
        return Err(Status::invalid_argument("empty email"));
    }

    if request.password.is_empty() {
        return Err(Status::invalid_argument("empty password"));
    }

    if request.app_id == 0 {
        return Err(Status::invalid_argument("empty app id"));
    }

    Ok(())
}
