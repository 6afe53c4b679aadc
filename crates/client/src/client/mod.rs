//! HTTP client for the remote holiday calendar.

use holidaysync_core::calendar::{HolidayCalendar, Year};

use crate::error::{ClientError, Result};

/// HTTP client for the holiday calendar source.
#[derive(Debug, Clone)]
pub struct HolidayClient {
    client: reqwest::Client,
    base_url: String,
}

impl HolidayClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the calendar published for `year`.
    pub fn url_for(&self, year: &Year) -> String {
        format!("{}/{}.json", self.base_url, year.label())
    }

    /// Download and decode the calendar for `year`.
    ///
    /// One request, no retry. The body is read fully before decoding.
    pub async fn fetch_calendar(&self, year: &Year) -> Result<HolidayCalendar> {
        let url = self.url_for(year);
        tracing::info!(%url, "fetching holiday calendar");

        let response = self.client.get(&url).send().await?;
        self.handle_response(url, response).await
    }

    /// Handle error responses.
    async fn handle_response(
        &self,
        url: String,
        response: reqwest::Response,
    ) -> Result<HolidayCalendar> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            tracing::debug!(body = %String::from_utf8_lossy(&body), "received calendar");
            serde_json::from_slice(&body).map_err(ClientError::from)
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound { url })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
