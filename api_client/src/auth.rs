use crate::client::SupplyLineClient;
use crate::error::ApiError;
use shared::supplyline::Acknowledgement;
use shared::supplyline::auth::{AuthStatus, LoginRequest, LoginResponse, User};
use tracing::info;

impl SupplyLineClient {
    /// Logs in and keeps the returned token for later requests.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.post_json("api/auth/login", request).await?;
        self.set_token(Some(response.access_token.clone()));
        info!(user_id = response.user.id, "logged in");
        Ok(response)
    }

    pub async fn logout(&self) -> Result<Acknowledgement, ApiError> {
        let result = self.post_empty("api/auth/logout").await;
        // The local session ends even if the server call fails.
        self.set_token(None);
        result
    }

    pub async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        self.get_json("api/auth/status").await
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json("api/auth/me").await
    }
}
