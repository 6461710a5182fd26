use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub notification_timeout: Duration,
    pub mobile_breakpoint_px: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            notification_timeout: Duration::from_secs(5),
            mobile_breakpoint_px: 768,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("BOOKING_API_URL").unwrap_or(defaults.api_base_url),
            notification_timeout: env::var("NOTIFICATION_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.notification_timeout),
            mobile_breakpoint_px: env::var("MOBILE_BREAKPOINT_PX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.mobile_breakpoint_px),
        }
    }
}
