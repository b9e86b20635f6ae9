//! Contact-form submission endpoint
//!
//! This endpoint predates the response envelope: it returns a bare JSON
//! array and lives outside the `/admin` prefix.

use crate::ApiClient;
use lms_core::Result;
use lms_core::types::Contact;
use reqwest::Method;

impl ApiClient {
    /// List contact-form submissions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    pub async fn contacts(&self, token: &str) -> Result<Vec<Contact>> {
        let request = self.request(Method::GET, "/contacts", Some(token));
        self.execute_bare(request).await
    }
}
