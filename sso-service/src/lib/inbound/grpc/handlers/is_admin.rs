use std::sync::Arc;

use tonic::Status;

use super::status_from_error;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;

pub async fn is_admin<S: AuthServicePort>(
    service: Arc<S>,
    request: IsAdminRequest,
) -> Result<IsAdminResponse, Status> {
    validate(&request)?;

    let is_admin = service
        .is_admin(UserId(request.user_id), AppId(request.app_id))
        .await
        .map_err(|e| status_from_error(&e))?;

    Ok(IsAdminResponse { is_admin })
}

fn validate(request: &IsAdminRequest) -> Result<(), Status> {
    if request.user_id == 0 {
        return Err(Status::invalid_argument("empty user id"));
    }

    if request.app_id == 0 {
        return Err(Status::invalid_argument("empty app id"));
    }

    Ok(())
}
