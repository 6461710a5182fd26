use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tracing_subscriber::EnvFilter;

use booking_front::config::AppConfig;
use booking_front::handlers::{self, Event};
use booking_front::models::{FormFields, FormKind};
use booking_front::services::api::http::HttpBookingApi;
use booking_front::state::AppState;
use booking_front::view::memory::MemoryView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let form = match std::env::args().nth(1).as_deref() {
        Some("quick") => FormKind::QuickBooking,
        _ => FormKind::Booking,
    };
    tracing::info!(form = form.as_str(), "using booking API at {}", config.api_base_url);

    let view = Arc::new(MemoryView::new());
    let api = Arc::new(HttpBookingApi::new(config.api_base_url.clone()));
    let state = Arc::new(AppState::new(config, view.clone(), api));

    handlers::dispatch(&state, Event::PageLoaded).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut fields = FormFields {
        name: prompt(&mut lines, "Имя").await?,
        ..Default::default()
    };
    let phone = prompt(&mut lines, "Телефон").await?.unwrap_or_default();
    if form == FormKind::Booking {
        fields.service = prompt(&mut lines, "Услуга (wedding, event, photo, ...)").await?;
        fields.date = prompt(&mut lines, "Дата (ГГГГ-ММ-ДД)").await?;
        fields.message = prompt(&mut lines, "Сообщение").await?;
    }

    view.fill_form(form, fields);
    handlers::dispatch(&state, Event::PhoneInput { form, value: phone }).await;
    handlers::dispatch(&state, Event::Submit(form)).await;

    if let Some(notification) = view.visible_notifications().last() {
        println!("[{}] {}", notification.kind.as_str(), notification.message);
    }

    Ok(())
}

async fn prompt<R>(lines: &mut Lines<R>, label: &str) -> anyhow::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{label}: ").as_bytes()).await?;
    stdout.flush().await?;

    let line = lines.next_line().await.context("failed to read stdin")?;
    Ok(line.filter(|l| !l.trim().is_empty()))
}
