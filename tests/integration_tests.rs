use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use booking_front::config::AppConfig;
use booking_front::errors::{SubmitError, ValidationError, GENERIC_SUBMIT_ERROR};
use booking_front::handlers::{self, Event, KeyTarget};
use booking_front::models::{
    BookingId, BookingRequest, FormFields, FormKind, NavLink, NotificationKind,
    SubmissionOutcome, SubmissionPhase,
};
use booking_front::services::api::http::HttpBookingApi;
use booking_front::services::api::BookingApi;
use booking_front::services::submitter::BUSY_LABEL;
use booking_front::state::{AppState, Frontend};
use booking_front::view::memory::{MemoryView, SubmitButton};

// ── Mock Providers ──

#[derive(Clone)]
enum MockReply {
    Created(i64),
    Rejected(Option<String>),
    Malformed,
}

struct MockApi {
    reply: MockReply,
    calls: Arc<Mutex<Vec<(FormKind, BookingRequest)>>>,
    view: Arc<MemoryView>,
    buttons_in_flight: Arc<Mutex<Vec<Option<SubmitButton>>>>,
}

#[async_trait]
impl BookingApi for MockApi {
    async fn submit(
        &self,
        form: FormKind,
        request: &BookingRequest,
    ) -> Result<BookingId, SubmitError> {
        self.calls.lock().unwrap().push((form, request.clone()));
        self.buttons_in_flight
            .lock()
            .unwrap()
            .push(self.view.button(form));

        match &self.reply {
            MockReply::Created(id) => Ok(BookingId::Number(*id)),
            MockReply::Rejected(message) => Err(SubmitError::Rejected {
                status: 200,
                message: message.clone(),
            }),
            MockReply::Malformed => Err(SubmitError::MalformedResponse {
                status: 502,
                reason: "expected value at line 1 column 1".to_string(),
            }),
        }
    }
}

struct Harness {
    state: Arc<AppState>,
    view: Arc<MemoryView>,
    calls: Arc<Mutex<Vec<(FormKind, BookingRequest)>>>,
    buttons_in_flight: Arc<Mutex<Vec<Option<SubmitButton>>>>,
}

// ── Helpers ──

fn test_config(api_base_url: &str) -> AppConfig {
    AppConfig {
        api_base_url: api_base_url.to_string(),
        notification_timeout: Duration::from_secs(5),
        mobile_breakpoint_px: 768,
    }
}

fn harness(reply: MockReply) -> Harness {
    let view = Arc::new(MemoryView::new());
    let calls = Arc::new(Mutex::new(vec![]));
    let buttons_in_flight = Arc::new(Mutex::new(vec![]));
    let api = MockApi {
        reply,
        calls: Arc::clone(&calls),
        view: Arc::clone(&view),
        buttons_in_flight: Arc::clone(&buttons_in_flight),
    };
    let state = Arc::new(AppState::new(
        test_config("http://mock"),
        view.clone(),
        Arc::new(api),
    ));
    Harness {
        state,
        view,
        calls,
        buttons_in_flight,
    }
}

fn http_state(base_url: &str) -> (Arc<AppState>, Arc<MemoryView>) {
    let view = Arc::new(MemoryView::new());
    let api = Arc::new(HttpBookingApi::new(base_url.to_string()));
    let state = Arc::new(AppState::new(test_config(base_url), view.clone(), api));
    (state, view)
}

fn filled(name: &str, phone: &str) -> FormFields {
    FormFields {
        name: Some(name.to_string()),
        phone: Some(phone.to_string()),
        service: Some("wedding".to_string()),
        date: Some("2025-06-15".to_string()),
        message: Some("Нужен макияж к 10 утра".to_string()),
    }
}

type Seen = Arc<Mutex<Vec<Value>>>;

async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn create_booking(State(seen): State<Seen>, Json(body): Json<Value>) -> Json<Value> {
    seen.lock().unwrap().push(body);
    Json(json!({
        "success": true,
        "message": "Заявка успешно создана",
        "booking_id": 42,
    }))
}

fn backend(seen: Seen) -> Router {
    Router::new()
        .route("/api/booking", post(create_booking))
        .route("/api/quick-booking", post(create_booking))
        .with_state(seen)
}

// ── Submission Tests ──

#[tokio::test]
async fn test_empty_name_never_hits_network() {
    let h = harness(MockReply::Created(1));
    h.view.fill_form(FormKind::Booking, filled("   ", "+7 (912) 345-67-89"));

    let res = handlers::dispatch(&h.state, Event::Submit(FormKind::Booking)).await;

    assert!(res.prevent_default);
    assert!(h.calls.lock().unwrap().is_empty());
    let rendered = h.view.rendered_notifications();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].kind, NotificationKind::Error);
    assert_eq!(rendered[0].message, "Пожалуйста, укажите ваше имя");
    assert_eq!(h.state.submitter.phase(FormKind::Booking), SubmissionPhase::Idle);
}

#[tokio::test]
async fn test_validation_reports_first_failing_rule() {
    let h = harness(MockReply::Created(1));

    h.view.fill_form(FormKind::Booking, filled("Анна", ""));
    let err = h.state.submit(FormKind::Booking).await.unwrap_err();
    assert_eq!(err, ValidationError::MissingPhone);

    h.view.fill_form(FormKind::Booking, filled("Анна", "+7 912"));
    let err = h.state.submit(FormKind::Booking).await.unwrap_err();
    assert_eq!(err, ValidationError::InvalidPhone);

    assert!(h.calls.lock().unwrap().is_empty());
    assert_eq!(h.view.visible_notifications().len(), 1);
}

#[tokio::test]
async fn test_quick_form_with_missing_fields() {
    let h = harness(MockReply::Created(1));
    h.view.fill_form(
        FormKind::QuickBooking,
        FormFields {
            name: Some("Анна".to_string()),
            ..Default::default()
        },
    );

    let err = h.state.submit(FormKind::QuickBooking).await.unwrap_err();

    assert_eq!(err, ValidationError::MissingRequired);
    assert!(h.calls.lock().unwrap().is_empty());
    assert_eq!(
        h.view.visible_notifications()[0].message,
        "Пожалуйста, заполните обязательные поля"
    );
}

#[tokio::test]
async fn test_success_clears_form_and_notifies() {
    let h = harness(MockReply::Created(42));
    h.view.fill_form(FormKind::Booking, filled(" Анна ", "89123456789"));

    let outcome = h.state.submit(FormKind::Booking).await.unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Success {
            booking_id: BookingId::Number(42)
        }
    );
    assert_eq!(h.view.form(FormKind::Booking), FormFields::default());

    let rendered = h.view.rendered_notifications();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].kind, NotificationKind::Success);
    assert_eq!(rendered[0].message, FormKind::Booking.success_message());

    let calls = h.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (form, request) = &calls[0];
    assert_eq!(*form, FormKind::Booking);
    assert_eq!(request.name, "Анна");
    assert_eq!(request.phone, "+7 (912) 345-67-89");
    assert_eq!(request.service, "Свадебный макияж");
}

#[tokio::test]
async fn test_button_busy_while_in_flight_then_restored() {
    let h = harness(MockReply::Created(7));
    h.view
        .fill_form(FormKind::QuickBooking, filled("Анна", "+7 (912) 345-67-89"));
    let original = h.view.button(FormKind::QuickBooking).unwrap();

    h.state.submit(FormKind::QuickBooking).await.unwrap();

    let in_flight = h.buttons_in_flight.lock().unwrap();
    assert_eq!(
        in_flight[0],
        Some(SubmitButton {
            label: BUSY_LABEL.to_string(),
            enabled: false,
        })
    );
    assert_eq!(h.view.button(FormKind::QuickBooking).unwrap(), original);
    assert_eq!(
        h.state.submitter.phase(FormKind::QuickBooking),
        SubmissionPhase::Idle
    );
}

#[tokio::test]
async fn test_server_rejection_keeps_form() {
    let h = harness(MockReply::Rejected(Some("Слот уже занят".to_string())));
    let fields = filled("Анна", "+7 (912) 345-67-89");
    h.view.fill_form(FormKind::Booking, fields.clone());
    let original = h.view.button(FormKind::Booking).unwrap();

    let outcome = h.state.submit(FormKind::Booking).await.unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Failure {
            message: "Слот уже занят".to_string()
        }
    );
    assert_eq!(h.view.form(FormKind::Booking), fields);
    assert_eq!(h.view.button(FormKind::Booking).unwrap(), original);
    assert_eq!(h.view.visible_notifications()[0].kind, NotificationKind::Error);
}

#[tokio::test]
async fn test_malformed_response_uses_generic_message() {
    let h = harness(MockReply::Malformed);
    h.view.fill_form(FormKind::Booking, filled("Анна", "+7 (912) 345-67-89"));

    let outcome = h.state.submit(FormKind::Booking).await.unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Failure {
            message: GENERIC_SUBMIT_ERROR.to_string()
        }
    );
}

// ── HTTP Tests ──

#[tokio::test]
async fn test_http_success_sends_resolved_request() {
    let seen: Seen = Arc::new(Mutex::new(vec![]));
    let base = spawn_backend(backend(Arc::clone(&seen))).await;
    let (state, view) = http_state(&base);
    view.fill_form(
        FormKind::QuickBooking,
        FormFields {
            name: Some("Мария".to_string()),
            phone: Some("8 912 345 67 89".to_string()),
            ..Default::default()
        },
    );

    let outcome = state.submit(FormKind::QuickBooking).await.unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Success {
            booking_id: BookingId::Number(42)
        }
    );
    let bodies = seen.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "name": "Мария",
            "phone": "+7 (912) 345-67-89",
            "service": "Не указана",
            "date": "Не указана",
            "message": "Не указано",
        })
    );
    assert_eq!(view.form(FormKind::QuickBooking), FormFields::default());
}

#[tokio::test]
async fn test_http_server_error_prefers_server_message() {
    async fn fail() -> impl IntoResponse {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": true,
                "message": "Ошибка сервера при создании заявки",
                "status_code": 500,
            })),
        )
    }
    let base = spawn_backend(Router::new().route("/api/booking", post(fail))).await;
    let (state, view) = http_state(&base);
    let fields = filled("Анна", "+7 (912) 345-67-89");
    view.fill_form(FormKind::Booking, fields.clone());

    let outcome = state.submit(FormKind::Booking).await.unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Failure {
            message: "Ошибка сервера при создании заявки".to_string()
        }
    );
    assert_eq!(view.form(FormKind::Booking), fields);
}

#[tokio::test]
async fn test_http_non_json_response() {
    async fn gateway() -> impl IntoResponse {
        (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>")
    }
    let base = spawn_backend(Router::new().route("/api/booking", post(gateway))).await;
    let (state, view) = http_state(&base);
    view.fill_form(FormKind::Booking, filled("Анна", "+7 (912) 345-67-89"));

    let outcome = state.submit(FormKind::Booking).await.unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Failure {
            message: GENERIC_SUBMIT_ERROR.to_string()
        }
    );
}

#[tokio::test]
async fn test_network_failure_restores_button_and_keeps_form() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (state, view) = http_state(&format!("http://{addr}"));
    let fields = filled("Анна", "+7 (912) 345-67-89");
    view.fill_form(FormKind::Booking, fields.clone());
    let original = view.button(FormKind::Booking).unwrap();

    let res = handlers::dispatch(&state, Event::Submit(FormKind::Booking)).await;

    assert!(res.prevent_default);
    assert_eq!(view.button(FormKind::Booking).unwrap(), original);
    assert!(original.enabled);
    assert_eq!(view.form(FormKind::Booking), fields);
    let visible = view.visible_notifications();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].message, GENERIC_SUBMIT_ERROR);
}

// ── Input & Notification Tests ──

#[tokio::test]
async fn test_phone_input_rewrites_field() {
    let h = harness(MockReply::Created(1));

    let mut typed = String::new();
    for c in "89123456789".chars() {
        typed = h.view.form(FormKind::Booking).phone.unwrap_or_default();
        typed.push(c);
        handlers::dispatch(
            &h.state,
            Event::PhoneInput {
                form: FormKind::Booking,
                value: typed.clone(),
            },
        )
        .await;
    }

    assert!(!typed.is_empty());
    assert_eq!(
        h.view.form(FormKind::Booking).phone.as_deref(),
        Some("+7 (912) 345-67-89")
    );
}

#[tokio::test]
async fn test_at_most_one_notification_visible() {
    let h = harness(MockReply::Created(1));

    h.state.present("first", NotificationKind::Info);
    let second = h.state.present("second", NotificationKind::Success);

    let visible = h.view.visible_notifications();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, second);
}

#[tokio::test]
async fn test_close_click_dismisses_notification() {
    let h = harness(MockReply::Created(1));
    let id = h.state.present("hello", NotificationKind::Info);

    handlers::dispatch(&h.state, Event::NotificationCloseClick(id)).await;
    assert!(h.view.visible_notifications().is_empty());

    // second close is a no-op
    handlers::dispatch(&h.state, Event::NotificationCloseClick(id)).await;
    assert!(h.view.visible_notifications().is_empty());
}

#[tokio::test]
async fn test_page_load_sets_date_minimum() {
    let h = harness(MockReply::Created(1));
    handlers::dispatch(&h.state, Event::PageLoaded).await;

    let min = h.view.date_min().unwrap();
    assert!(chrono::NaiveDate::parse_from_str(&min, "%Y-%m-%d").is_ok());
}

#[tokio::test]
async fn test_enter_in_text_input_is_suppressed() {
    let h = harness(MockReply::Created(1));
    let res = handlers::dispatch(
        &h.state,
        Event::KeyDown {
            key: "Enter".to_string(),
            target: KeyTarget::TextInput,
        },
    )
    .await;
    assert!(res.prevent_default);
}

// ── Navigation Tests ──

#[tokio::test]
async fn test_menu_toggle_and_outside_click() {
    let h = harness(MockReply::Created(1));

    handlers::dispatch(&h.state, Event::BurgerClick).await;
    assert!(h.view.menu_open());
    assert!(h.view.scroll_locked());

    handlers::dispatch(&h.state, Event::DocumentClick { inside_menu: true }).await;
    assert!(h.view.menu_open());

    handlers::dispatch(&h.state, Event::DocumentClick { inside_menu: false }).await;
    assert!(!h.view.menu_open());
    assert!(!h.view.scroll_locked());
}

#[tokio::test]
async fn test_menu_closes_on_resize_and_escape() {
    let h = harness(MockReply::Created(1));

    handlers::dispatch(&h.state, Event::BurgerClick).await;
    handlers::dispatch(&h.state, Event::Resize { width: 500 }).await;
    assert!(h.view.menu_open());
    handlers::dispatch(&h.state, Event::Resize { width: 1280 }).await;
    assert!(!h.view.menu_open());

    handlers::dispatch(&h.state, Event::BurgerClick).await;
    handlers::dispatch(
        &h.state,
        Event::KeyDown {
            key: "Escape".to_string(),
            target: KeyTarget::Other,
        },
    )
    .await;
    assert!(!h.view.menu_open());
}

#[tokio::test]
async fn test_nav_link_scrolls_and_closes_menu() {
    let h = harness(MockReply::Created(1));
    handlers::dispatch(&h.state, Event::BurgerClick).await;

    let res = handlers::dispatch(&h.state, Event::NavLinkClick(NavLink::anchor("#services"))).await;

    assert!(res.prevent_default);
    assert!(!h.view.menu_open());
    assert_eq!(h.view.scrolled_to(), vec!["services".to_string()]);
}

#[tokio::test]
async fn test_modal_open_and_close() {
    let h = harness(MockReply::Created(1));

    handlers::dispatch(&h.state, Event::NavLinkClick(NavLink::page("portfolio"))).await;
    assert!(h.view.modal_visible("portfolioModal"));
    assert!(h.view.scroll_locked());

    handlers::dispatch(&h.state, Event::ModalCloseClick("blogModal".to_string())).await;
    assert!(h.view.modal_visible("portfolioModal"));

    handlers::dispatch(
        &h.state,
        Event::KeyDown {
            key: "Escape".to_string(),
            target: KeyTarget::Other,
        },
    )
    .await;
    assert!(!h.view.modal_visible("portfolioModal"));
    assert!(!h.view.scroll_locked());

    handlers::dispatch(&h.state, Event::NavLinkClick(NavLink::page("blog"))).await;
    handlers::dispatch(&h.state, Event::ModalBackdropClick("blogModal".to_string())).await;
    assert!(!h.view.modal_visible("blogModal"));
}
