//! Instructor and student roster endpoints

use crate::ApiClient;
use lms_core::Result;
use lms_core::types::{Instructor, NewInstructor, NewStudent, Student, ToggleActive};
use reqwest::Method;

impl ApiClient {
    /// List instructor accounts, optionally capped at `limit` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    pub async fn list_instructors(
        &self,
        token: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Instructor>> {
        let path = limit.map_or_else(
            || "/admin/users/instructors".to_string(),
            |limit| format!("/admin/users/instructors?limit={limit}"),
        );
        let request = self.request(Method::GET, &path, Some(token));
        self.execute(request).await
    }

    /// Enroll a new instructor account.
    ///
    /// # Errors
    ///
    /// Returns [`lms_core::Error::Conflict`] when the email is already
    /// registered, or the usual transport/API errors.
    pub async fn create_instructor(
        &self,
        token: &str,
        payload: &NewInstructor,
    ) -> Result<Instructor> {
        let request = self
            .request(Method::POST, "/admin/users/instructors", Some(token))
            .json(payload);
        self.execute(request).await
    }

    /// Flip an instructor's active flag, returning the server-confirmed
    /// value.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; on failure the caller must
    /// leave its local state untouched.
    pub async fn toggle_instructor_active(
        &self,
        token: &str,
        id: &str,
        is_active: bool,
    ) -> Result<bool> {
        let path = format!("/admin/users/instructors/{id}/toggle-active");
        let request = self
            .request(Method::PATCH, &path, Some(token))
            .json(&ToggleActive { is_active });
        let confirmed: ToggleActive = self.execute(request).await?;
        Ok(confirmed.is_active)
    }

    /// List student accounts, optionally capped at `limit` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    pub async fn list_students(&self, token: &str, limit: Option<u32>) -> Result<Vec<Student>> {
        let path = limit.map_or_else(
            || "/admin/users/students".to_string(),
            |limit| format!("/admin/users/students?limit={limit}"),
        );
        let request = self.request(Method::GET, &path, Some(token));
        self.execute(request).await
    }

    /// Enroll a new student account.
    ///
    /// # Errors
    ///
    /// Returns [`lms_core::Error::Conflict`] when the email is already
    /// registered, or the usual transport/API errors.
    pub async fn create_student(&self, token: &str, payload: &NewStudent) -> Result<Student> {
        let request = self
            .request(Method::POST, "/admin/users/students", Some(token))
            .json(payload);
        self.execute(request).await
    }

    /// Flip a student's active flag, returning the server-confirmed value.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; on failure the caller must
    /// leave its local state untouched.
    pub async fn toggle_student_active(
        &self,
        token: &str,
        id: &str,
        is_active: bool,
    ) -> Result<bool> {
        let path = format!("/admin/users/students/{id}/toggle-active");
        let request = self
            .request(Method::PATCH, &path, Some(token))
            .json(&ToggleActive { is_active });
        let confirmed: ToggleActive = self.execute(request).await?;
        Ok(confirmed.is_active)
    }
}
