use async_trait::async_trait;
use reqwest::StatusCode;

use super::BookingApi;
use crate::errors::SubmitError;
use crate::models::{BookingId, BookingRequest, BookingResponse, FormKind};

pub struct HttpBookingApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookingApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, form: FormKind) -> String {
        format!("{}{}", self.base_url, form.endpoint())
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn submit(
        &self,
        form: FormKind,
        request: &BookingRequest,
    ) -> Result<BookingId, SubmitError> {
        let url = self.url(form);
        tracing::debug!(url = %url, form = form.as_str(), "posting booking");

        let resp = self.client.post(&url).json(request).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        interpret_response(status, &body)
    }
}

/// Success needs a 2xx status, `"success": true` and a booking id.
fn interpret_response(status: StatusCode, body: &str) -> Result<BookingId, SubmitError> {
    let parsed: BookingResponse =
        serde_json::from_str(body).map_err(|e| SubmitError::MalformedResponse {
            status: status.as_u16(),
            reason: e.to_string(),
        })?;

    if !status.is_success() || !parsed.success {
        return Err(SubmitError::Rejected {
            status: status.as_u16(),
            message: parsed.message,
        });
    }

    parsed.booking_id.ok_or_else(|| SubmitError::MalformedResponse {
        status: status.as_u16(),
        reason: "missing booking_id".to_string(),
    })
}
