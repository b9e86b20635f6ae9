//! Support ticket endpoints

use crate::ApiClient;
use bytes::Bytes;
use chrono::NaiveDate;
use lms_core::types::Ticket;
use lms_core::{Error, Result};
use reqwest::Method;
use serde_json::json;

/// A page of tickets plus the backend's total count
#[derive(Debug, Clone)]
pub struct TicketPage {
    /// Tickets within the requested window
    pub tickets: Vec<Ticket>,
    /// Total number of tickets the backend knows about
    pub total: u64,
}

impl ApiClient {
    /// List support tickets filed within the inclusive date window.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    pub async fn list_tickets(
        &self,
        token: &str,
        window: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<TicketPage> {
        let path = window.map_or_else(
            || "/admin/tickets".to_string(),
            |(start, end)| format!("/admin/tickets?startDate={start}&endDate={end}"),
        );
        let request = self.request(Method::GET, &path, Some(token));
        let envelope = self.execute_envelope::<Vec<Ticket>>(request).await?;
        let tickets = envelope.data.unwrap_or_default();
        let total = envelope.total.unwrap_or(tickets.len() as u64);
        Ok(TicketPage { tickets, total })
    }

    /// Resolve a ticket with a resolution message.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the caller flips the local
    /// status only after success.
    pub async fn resolve_ticket(&self, token: &str, id: &str, resolution: &str) -> Result<()> {
        let path = format!("/admin/tickets/{id}/resolve");
        let request = self
            .request(Method::PATCH, &path, Some(token))
            .json(&json!({ "resolution": resolution }));
        self.execute_ok(request).await
    }

    /// Download a ticket as a PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend responds with
    /// something that is not a PDF.
    pub async fn download_ticket(&self, token: &str, id: &str) -> Result<Bytes> {
        let path = format!("/admin/tickets/{id}/download");
        let request = self
            .request(Method::GET, &path, Some(token))
            .header(reqwest::header::ACCEPT, "application/pdf");
        let response = self.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(if status == reqwest::StatusCode::UNAUTHORIZED {
                Error::Unauthorized("Unauthorized: Please log in again".to_string())
            } else {
                Error::Api {
                    status: status.as_u16(),
                    message: "Failed to download ticket as PDF".to_string(),
                }
            });
        }

        let is_pdf = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/pdf"));
        if !is_pdf {
            return Err(Error::Api {
                status: status.as_u16(),
                message: "Server did not return a PDF file".to_string(),
            });
        }

        response
            .bytes()
            .await
            .map_err(|err| Error::Network(err.to_string()))
    }
}
