//! Authentication and own-profile endpoints

use crate::ApiClient;
use lms_core::Result;
use lms_core::types::{LoginData, ProfileUpdate, UserProfile};
use reqwest::Method;
use serde_json::json;

impl ApiClient {
    /// Verify a bearer token and fetch the current identity.
    ///
    /// # Errors
    ///
    /// Returns [`lms_core::Error::Unauthorized`] when the token is missing,
    /// expired, or revoked, and the usual transport errors otherwise.
    pub async fn me(&self, token: &str) -> Result<UserProfile> {
        let request = self.request(Method::GET, "/auth/me", Some(token));
        self.execute(request).await
    }

    /// Exchange credentials for a bearer token and identity.
    ///
    /// # Errors
    ///
    /// Returns [`lms_core::Error::Unauthorized`] carrying the backend's
    /// rejection message on bad credentials, or a transport error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData> {
        let request = self
            .request(Method::POST, "/auth/login", None)
            .json(&json!({ "email": email, "password": password }));
        self.execute(request).await
    }

    /// Update the logged-in user's own profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// update.
    pub async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<UserProfile> {
        let request = self
            .request(Method::PUT, "/auth/updatedetails", Some(token))
            .json(update);
        self.execute(request).await
    }
}
