/// Generic text shown when a submission fails without a usable server message.
pub const GENERIC_SUBMIT_ERROR: &str = "Ошибка при отправке заявки. Пожалуйста, попробуйте еще раз.";

/// Client-side form rule violations. The `Display` text is the localized
/// notification shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Пожалуйста, укажите ваше имя")]
    MissingName,

    #[error("Пожалуйста, укажите ваш телефон")]
    MissingPhone,

    #[error("Пожалуйста, заполните обязательные поля")]
    MissingRequired,

    #[error("Пожалуйста, укажите корректный номер телефона")]
    InvalidPhone,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response (HTTP {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },

    #[error("booking rejected (HTTP {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
}

impl SubmitError {
    /// Text for the error notification. A server-provided message wins over
    /// the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.trim().to_string(),
            _ => GENERIC_SUBMIT_ERROR.to_string(),
        }
    }
}
