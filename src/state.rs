use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::errors::ValidationError;
use crate::models::{
    FormKind, MenuState, ModalState, NotificationId, NotificationKind, ServiceCatalog,
    SubmissionOutcome,
};
use crate::services::api::BookingApi;
use crate::services::notifier::NotificationPresenter;
use crate::services::phone;
use crate::services::submitter::BookingSubmitter;
use crate::view::PageView;

/// What the page needs from the booking core.
#[async_trait]
pub trait Frontend: Send + Sync {
    async fn submit(&self, form: FormKind) -> Result<SubmissionOutcome, ValidationError>;
    fn normalize_phone(&self, raw: &str) -> String;
    fn present(&self, message: &str, kind: NotificationKind) -> NotificationId;
}

pub struct AppState {
    pub config: AppConfig,
    pub view: Arc<dyn PageView>,
    pub presenter: Arc<NotificationPresenter>,
    pub submitter: BookingSubmitter,
    pub menu: Mutex<MenuState>,
    pub modal: Mutex<ModalState>,
}

impl AppState {
    pub fn new(config: AppConfig, view: Arc<dyn PageView>, api: Arc<dyn BookingApi>) -> Self {
        let presenter = Arc::new(NotificationPresenter::new(
            Arc::clone(&view),
            config.notification_timeout,
        ));
        let submitter = BookingSubmitter::new(
            api,
            Arc::clone(&view),
            Arc::clone(&presenter),
            ServiceCatalog::new(),
        );

        Self {
            config,
            view,
            presenter,
            submitter,
            menu: Mutex::new(MenuState::default()),
            modal: Mutex::new(ModalState::default()),
        }
    }
}

#[async_trait]
impl Frontend for AppState {
    async fn submit(&self, form: FormKind) -> Result<SubmissionOutcome, ValidationError> {
        self.submitter.submit(form).await
    }

    fn normalize_phone(&self, raw: &str) -> String {
        phone::normalize_phone(raw)
    }

    fn present(&self, message: &str, kind: NotificationKind) -> NotificationId {
        self.presenter.present(message, kind)
    }
}
