use std::sync::Arc;

use tonic::Status;

use super::status_from_error;
use crate::domain::auth::models::AppId;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::CurrentUserRequest;
use crate::proto::CurrentUserResponse;

pub async fn current_user<S: AuthServicePort>(
    service: Arc<S>,
    request: CurrentUserRequest,
) -> Result<CurrentUserResponse, Status> {
    validate(&request)?;

    let user = service
        .current_user(&request.token, AppId(request.app_id))
        .await
        .map_err(|e| status_from_error(&e))?;

    Ok(user.into())
}

fn validate(request: &CurrentUserRequest) -> Result<(), Status> {
    if request.token.is_empty() {
        return Err(Status::invalid_argument("empty token"));
    }

    if request.app_id == 0 {
        return Err(Status::invalid_argument("empty app id"));
    }

    Ok(())
}
