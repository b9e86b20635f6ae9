//! Aggregate reporting endpoints
//!
//! All aggregation is server-side; a different timeframe means a new fetch,
//! never a local recompute.

use crate::ApiClient;
use lms_core::Result;
use lms_core::types::{
    Enrollment, EnrollmentTotals, InstructorActivity, RevenueReport, StudentActivity, Timeframe,
};
use reqwest::Method;

impl ApiClient {
    /// Fetch the revenue report aggregated at the requested granularity.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    pub async fn revenue(&self, token: &str, timeframe: Timeframe) -> Result<RevenueReport> {
        let path = format!("/admin/analytics/revenue?timeframe={}", timeframe.as_str());
        let request = self.request(Method::GET, &path, Some(token));
        self.execute(request).await
    }

    /// Fetch the platform-wide enrollment total.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    pub async fn total_enrollments(&self, token: &str) -> Result<EnrollmentTotals> {
        let request = self.request(Method::GET, "/admin/analytics/total-enrollments", Some(token));
        self.execute(request).await
    }

    /// Fetch the enrollment roster (one row per student-course pair).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    pub async fn enrollments(&self, token: &str) -> Result<Vec<Enrollment>> {
        let request = self.request(Method::GET, "/admin/analytics/enrollments", Some(token));
        self.execute(request).await
    }

    /// Fetch recent instructor activity, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    pub async fn instructor_activity(
        &self,
        token: &str,
        limit: u32,
    ) -> Result<Vec<InstructorActivity>> {
        let path = format!("/admin/analytics/instructor-activity?limit={limit}");
        let request = self.request(Method::GET, &path, Some(token));
        self.execute(request).await
    }

    /// Fetch recent student activity, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    pub async fn student_activity(&self, token: &str, limit: u32) -> Result<Vec<StudentActivity>> {
        let path = format!("/admin/analytics/student-activity?limit={limit}");
        let request = self.request(Method::GET, &path, Some(token));
        self.execute(request).await
    }
}
