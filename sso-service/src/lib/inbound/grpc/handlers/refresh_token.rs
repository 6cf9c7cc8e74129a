use std::sync::Arc;

use tonic::Status;

use super::status_from_error;
use crate::domain::auth::models::AppId;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::RefreshTokenRequest;
use crate::proto::RefreshTokenResponse;

pub async fn refresh_token<S: AuthServicePort>(
    service: Arc<S>,
    request: RefreshTokenRequest,
) -> Result<RefreshTokenResponse, Status> {
    validate(&request)?;

    let tokens = service
        .refresh_token(&request.token, AppId(request.app_id))
        .await
        .map_err(|e| status_from_error(&e))?;

    Ok(RefreshTokenResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
    })
}

fn validate(request: &RefreshTokenRequest) -> Result<(), Status> {
    if request.token.is_empty() {
        return Err(Status::invalid_argument("empty token"));
    }

    if request.app_id == 0 {
        return Err(Status::invalid_argument("empty app id"));
    }

    Ok(())
}
