use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::errors::ValidationError;
use crate::models::{
    BookingRequest, FormKind, NotificationKind, ServiceCatalog, SubmissionOutcome,
    SubmissionPhase,
};
use crate::services::api::BookingApi;
use crate::services::notifier::NotificationPresenter;
use crate::services::phone::{is_valid_phone, normalize_phone};
use crate::view::PageView;

pub const BUSY_LABEL: &str = "Отправка...";

/// Field checks in fixed order; the first failing rule wins.
pub fn validate(form: FormKind, request: &BookingRequest) -> Result<(), ValidationError> {
    match form {
        FormKind::Booking => {
            if request.name.is_empty() {
                return Err(ValidationError::MissingName);
            }
            if request.phone.is_empty() {
                return Err(ValidationError::MissingPhone);
            }
        }
        FormKind::QuickBooking => {
            if request.name.is_empty() || request.phone.is_empty() {
                return Err(ValidationError::MissingRequired);
            }
        }
    }

    if !is_valid_phone(&request.phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}

pub struct BookingSubmitter {
    api: Arc<dyn BookingApi>,
    view: Arc<dyn PageView>,
    presenter: Arc<NotificationPresenter>,
    catalog: ServiceCatalog,
    phases: Mutex<HashMap<FormKind, SubmissionPhase>>,
}

impl BookingSubmitter {
    pub fn new(
        api: Arc<dyn BookingApi>,
        view: Arc<dyn PageView>,
        presenter: Arc<NotificationPresenter>,
        catalog: ServiceCatalog,
    ) -> Self {
        Self {
            api,
            view,
            presenter,
            catalog,
            phases: Mutex::new(HashMap::new()),
        }
    }

    pub fn phase(&self, form: FormKind) -> SubmissionPhase {
        self.phases
            .lock()
            .unwrap()
            .get(&form)
            .copied()
            .unwrap_or_default()
    }

    fn set_phase(&self, form: FormKind, phase: SubmissionPhase) {
        tracing::debug!(form = form.as_str(), phase = phase.as_str(), "submission phase");
        self.phases.lock().unwrap().insert(form, phase);
    }

    /// Runs one submit cycle for `form`. A validation failure is reported to
    /// the visitor and returned without any network I/O; transport and server
    /// failures come back as [`SubmissionOutcome::Failure`].
    pub async fn submit(&self, form: FormKind) -> Result<SubmissionOutcome, ValidationError> {
        self.set_phase(form, SubmissionPhase::Validating);

        let fields = self.view.read_form(form);
        let mut request = BookingRequest::from_fields(&fields, &self.catalog);

        if let Err(e) = validate(form, &request) {
            tracing::info!(form = form.as_str(), error = %e, "booking form rejected");
            self.presenter.present(&e.to_string(), NotificationKind::Error);
            self.set_phase(form, SubmissionPhase::Idle);
            return Err(e);
        }

        request.phone = normalize_phone(&request.phone);

        let _busy = BusyGuard::engage(self, form);
        self.set_phase(form, SubmissionPhase::Submitting);

        let outcome = match self.api.submit(form, &request).await {
            Ok(booking_id) => {
                tracing::info!(form = form.as_str(), booking_id = %booking_id, "booking created");
                self.presenter
                    .present(form.success_message(), NotificationKind::Success);
                self.view.reset_form(form);
                self.set_phase(form, SubmissionPhase::Succeeded);
                SubmissionOutcome::Success { booking_id }
            }
            Err(e) => {
                tracing::error!(form = form.as_str(), error = %e, "failed to submit booking");
                let message = e.user_message();
                self.presenter.present(&message, NotificationKind::Error);
                self.set_phase(form, SubmissionPhase::Failed);
                SubmissionOutcome::Failure { message }
            }
        };

        Ok(outcome)
    }
}

/// Disables the submit button while a request is in flight and puts it back
/// on drop, whichever way the submission ends.
struct BusyGuard<'a> {
    submitter: &'a BookingSubmitter,
    form: FormKind,
    original_label: String,
}

impl<'a> BusyGuard<'a> {
    fn engage(submitter: &'a BookingSubmitter, form: FormKind) -> Self {
        let original_label = submitter.view.submit_label(form);
        submitter.view.set_submit_button(form, BUSY_LABEL, false);
        Self {
            submitter,
            form,
            original_label,
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.submitter
            .view
            .set_submit_button(self.form, &self.original_label, true);
        self.submitter.set_phase(self.form, SubmissionPhase::Idle);
    }
}
