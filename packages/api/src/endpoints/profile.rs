use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Profile;
use crate::transport::{ApiRequest, HttpTransport};
use crate::validation;

#[derive(Serialize)]
struct NewPassword<'a> {
    password: &'a str,
}

impl<T: HttpTransport> ApiClient<T> {
    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/user-profile").await
    }

    /// Remove the signed-in user's profile picture.
    pub async fn remove_profile_image(&self) -> Result<(), ApiError> {
        let user = self
            .session()
            .snapshot()
            .user
            .ok_or(ApiError::Unauthenticated)?;
        let request = ApiRequest::delete("/user-profile/profile-image").query("userId", user.id);
        self.execute(request).await.map(|_| ())
    }

    /// Set a new password after checking strength and confirmation.
    pub async fn set_password(&self, password: &str, confirm: &str) -> Result<(), ApiError> {
        validation::password_confirmation(password, confirm)?;
        let request = ApiRequest::post("/user-profile/password").json(&NewPassword { password })?;
        self.execute(request).await.map(|_| ())
    }
}
