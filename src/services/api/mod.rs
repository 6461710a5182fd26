pub mod http;

use async_trait::async_trait;

use crate::errors::SubmitError;
use crate::models::{BookingId, BookingRequest, FormKind};

#[async_trait]
pub trait BookingApi: Send + Sync {
    /// One POST of `request` to the form's endpoint. No retry.
    async fn submit(&self, form: FormKind, request: &BookingRequest)
        -> Result<BookingId, SubmitError>;
}
