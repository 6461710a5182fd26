use std::sync::Arc;

use crate::models::ModalState;
use crate::state::AppState;

pub fn open_modal(state: &Arc<AppState>, modal_id: &str) {
    if !state.view.has_modal(modal_id) {
        tracing::warn!(modal = modal_id, "modal not found");
        return;
    }

    let mut modal = state.modal.lock().unwrap();
    if let Some(previous) = modal.open.take().filter(|id| id != modal_id) {
        state.view.set_modal_visible(&previous, false);
    }
    *modal = ModalState::default().opened(modal_id);
    state.view.set_modal_visible(modal_id, true);
    state.view.set_scroll_locked(true);
}

/// Hides `modal_id` if it is the open one; otherwise nothing happens.
pub fn close_modal(state: &Arc<AppState>, modal_id: &str) {
    let mut modal = state.modal.lock().unwrap();
    if !modal.is_open(modal_id) {
        return;
    }
    *modal = modal.clone().closed(modal_id);
    state.view.set_modal_visible(modal_id, false);
    state.view.set_scroll_locked(false);
}

pub fn close_open_modal(state: &Arc<AppState>) {
    let open = state.modal.lock().unwrap().open.clone();
    if let Some(id) = open {
        close_modal(state, &id);
    }
}
