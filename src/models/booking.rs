use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::ServiceCatalog;

pub const UNSPECIFIED_DATE: &str = "Не указана";
pub const UNSPECIFIED_MESSAGE: &str = "Не указано";

/// The two booking forms on the page. They share one submission flow and
/// differ in required fields, endpoint and success text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Booking,
    QuickBooking,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Booking => "booking",
            FormKind::QuickBooking => "quick_booking",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            FormKind::Booking => "/api/booking",
            FormKind::QuickBooking => "/api/quick-booking",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Booking => {
                "Заявка успешно отправлена! Я свяжусь с вами в ближайшее время."
            }
            FormKind::QuickBooking => "Быстрая заявка отправлена! Скоро свяжусь с вами.",
        }
    }
}

/// Raw field values as read from a form. Any field may be missing from the
/// markup, so every value is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub message: String,
}

impl BookingRequest {
    pub fn from_fields(fields: &FormFields, catalog: &ServiceCatalog) -> Self {
        Self {
            name: trimmed(fields.name.as_deref()),
            phone: trimmed(fields.phone.as_deref()),
            service: catalog.resolve(fields.service.as_deref()),
            date: non_blank(fields.date.as_deref()).unwrap_or_else(|| UNSPECIFIED_DATE.to_string()),
            message: non_blank(fields.message.as_deref())
                .unwrap_or_else(|| UNSPECIFIED_MESSAGE.to_string()),
        }
    }
}

fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Server-issued booking identifier; the backend may send a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookingId {
    Number(i64),
    Text(String),
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingId::Number(n) => write!(f, "{n}"),
            BookingId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub booking_id: Option<BookingId>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { booking_id: BookingId },
    Failure { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Validating => "validating",
            SubmissionPhase::Submitting => "submitting",
            SubmissionPhase::Succeeded => "succeeded",
            SubmissionPhase::Failed => "failed",
        }
    }
}
