use std::sync::Arc;

use tonic::Status;

use super::status_from_error;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S: AuthServicePort>(
    service: Arc<S>,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    validate(&request)?;

    let email = EmailAddress::new(request.email)
        .map_err(|e| Status::invalid_argument(e.to_string()))?;

    let command = RegisterCommand {
        email,
        password: request.password,
        name: request.name,
    };

    let user_id = service
        .register(command)
        .await
        .map_err(|e| status_from_error(&e))?;

    Ok(RegisterResponse { user_id: user_id.0 })
}

fn validate(request: &RegisterRequest) -> Result<(), Status> {
    if request.email.is_empty() {
        return Err(Status::invalid_argument("empty email"));
    }

    if request.password.is_empty() {
        return Err(Status::invalid_argument("empty password"));
    }

    if request.name.is_empty() {
        return Err(Status::invalid_argument("empty name"));
    }

    Ok(())
}
