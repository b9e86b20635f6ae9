//! Course CRUD and media-upload endpoints

use crate::ApiClient;
use lms_core::types::{Course, CourseUpdate, NewCourse};
use lms_core::{Error, Result};
use reqwest::Method;
use reqwest::multipart::{Form, Part};

impl ApiClient {
    /// List every course in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    pub async fn list_courses(&self, token: &str) -> Result<Vec<Course>> {
        let request = self.request(Method::GET, "/admin/courses", Some(token));
        self.execute(request).await
    }

    /// List the courses taught by one instructor.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    pub async fn instructor_courses(&self, token: &str, instructor_id: &str) -> Result<Vec<Course>> {
        let path = format!("/admin/instructors/{instructor_id}/courses");
        let request = self.request(Method::GET, &path, Some(token));
        self.execute(request).await
    }

    /// Fetch a single course.
    ///
    /// # Errors
    ///
    /// Returns an error when the course does not exist or the request fails.
    pub async fn get_course(&self, token: &str, id: &str) -> Result<Course> {
        let path = format!("/admin/courses/{id}");
        let request = self.request(Method::GET, &path, Some(token));
        self.execute(request).await
    }

    /// Create a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// payload.
    pub async fn create_course(&self, token: &str, payload: &NewCourse) -> Result<Course> {
        let request = self
            .request(Method::POST, "/admin/courses", Some(token))
            .json(payload);
        self.execute(request).await
    }

    /// Update a course's details, returning the server-confirmed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// update.
    pub async fn update_course(&self, token: &str, id: &str, update: &CourseUpdate) -> Result<Course> {
        let path = format!("/admin/courses/{id}");
        let request = self.request(Method::PUT, &path, Some(token)).json(update);
        self.execute(request).await
    }

    /// Delete a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_course(&self, token: &str, id: &str) -> Result<()> {
        let path = format!("/admin/courses/{id}");
        let request = self.request(Method::DELETE, &path, Some(token));
        self.execute_ok(request).await
    }

    /// Upload a course thumbnail image (multipart field `thumbnail`).
    ///
    /// # Errors
    ///
    /// Returns an error if the content type is malformed or the request
    /// fails.
    pub async fn upload_course_thumbnail(
        &self,
        token: &str,
        id: &str,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<()> {
        let path = format!("/admin/courses/{id}/thumbnail");
        let form = Form::new().part("thumbnail", file_part(file_name, content_type, data)?);
        let request = self
            .request(Method::POST, &path, Some(token))
            .multipart(form);
        self.execute_ok(request).await
    }

    /// Upload a course promotional video (multipart field `promoVideo`).
    ///
    /// # Errors
    ///
    /// Returns an error if the content type is malformed or the request
    /// fails.
    pub async fn upload_course_promo_video(
        &self,
        token: &str,
        id: &str,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<()> {
        let path = format!("/admin/courses/{id}/promo-video");
        let form = Form::new().part("promoVideo", file_part(file_name, content_type, data)?);
        let request = self
            .request(Method::POST, &path, Some(token))
            .multipart(form);
        self.execute_ok(request).await
    }
}

fn file_part(file_name: &str, content_type: &str, data: Vec<u8>) -> Result<Part> {
    Part::bytes(data)
        .file_name(file_name.to_string())
        .mime_str(content_type)
        .map_err(|err| Error::Validation {
            field: "content_type".to_string(),
            message: err.to_string(),
        })
}
