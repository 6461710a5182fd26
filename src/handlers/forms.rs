use std::sync::Arc;

use chrono::{Local, NaiveDate};

use super::{EventResponse, KeyTarget};
use crate::models::{FormKind, SubmissionOutcome};
use crate::state::{AppState, Frontend};

/// ISO string for the earliest selectable booking date.
pub fn min_booking_date(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}

pub fn init_forms(state: &Arc<AppState>) {
    let today = min_booking_date(Local::now().date_naive());
    state.view.set_date_min(&today);
    tracing::debug!(min_date = %today, "booking forms initialised");
}

// submit on #bookingForm / #quickBookingForm
pub async fn submit(state: &Arc<AppState>, form: FormKind) -> EventResponse {
    match state.submit(form).await {
        Ok(SubmissionOutcome::Success { booking_id }) => {
            tracing::info!(form = form.as_str(), booking_id = %booking_id, "booking submitted");
        }
        Ok(SubmissionOutcome::Failure { message }) => {
            tracing::warn!(form = form.as_str(), message = %message, "booking submission failed");
        }
        Err(e) => {
            tracing::debug!(form = form.as_str(), error = %e, "booking not sent");
        }
    }
    EventResponse::prevent_default()
}

// input on input[type="tel"]
pub fn phone_input(state: &Arc<AppState>, form: FormKind, value: &str) -> EventResponse {
    let formatted = state.normalize_phone(value);
    state.view.set_phone_value(form, &formatted);
    EventResponse::default()
}

/// Enter inside a plain input would submit the form; only buttons and
/// textareas keep it.
pub fn key_down(key: &str, target: KeyTarget) -> EventResponse {
    if key == "Enter" && target == KeyTarget::TextInput {
        return EventResponse::prevent_default();
    }
    EventResponse::default()
}
