use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::current_user;
use super::handlers::is_admin;
use super::handlers::login;
use super::handlers::refresh_token;
use super::handlers::register;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::auth_server::Auth;
use crate::proto::CurrentUserRequest;
use crate::proto::CurrentUserResponse;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;
use crate::proto::RefreshTokenRequest;
use crate::proto::RefreshTokenResponse;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

/// gRPC transport for the authentication service.
///
/// Generic over the service port so the binary and the tests inject their
/// own implementations.
pub struct AuthGrpcService<S: AuthServicePort> {
    service: Arc<S>,
}

impl<S: AuthServicePort> AuthGrpcService<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<S: AuthServicePort> Auth for AuthGrpcService<S> {
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let response = register::register(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let response = login::login(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn is_admin(
        &self,
        request: Request<IsAdminRequest>,
    ) -> Result<Response<IsAdminResponse>, Status> {
        let response = is_admin::is_admin(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn refresh_token(
        &self,
        request: Request<RefreshTokenRequest>,
    ) -> Result<Response<RefreshTokenResponse>, Status> {
        let response =
            refresh_token::refresh_token(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn current_user(
        &self,
        request: Request<CurrentUserRequest>,
    ) -> Result<Response<CurrentUserResponse>, Status> {
        let response =
            current_user::current_user(self.service.clone(), request.into_inner()).await?;
        Ok(Response::new(response))
    }
}
