pub mod forms;
pub mod modal;
pub mod navigation;

use std::sync::Arc;

use crate::models::{FormKind, NavLink, NotificationId};
use crate::state::AppState;

/// Element a key press was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTarget {
    TextInput,
    SubmitInput,
    TextArea,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PageLoaded,
    Submit(FormKind),
    PhoneInput { form: FormKind, value: String },
    KeyDown { key: String, target: KeyTarget },
    BurgerClick,
    NavLinkClick(NavLink),
    DocumentClick { inside_menu: bool },
    MenuSwipe { dx: f64, dy: f64 },
    Resize { width: u32 },
    ModalBackdropClick(String),
    ModalCloseClick(String),
    NotificationCloseClick(NotificationId),
}

/// What the caller should do with the original page event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    pub prevent_default: bool,
}

impl EventResponse {
    pub fn prevent_default() -> Self {
        Self {
            prevent_default: true,
        }
    }
}

pub async fn dispatch(state: &Arc<AppState>, event: Event) -> EventResponse {
    match event {
        Event::PageLoaded => {
            forms::init_forms(state);
            EventResponse::default()
        }
        Event::Submit(form) => forms::submit(state, form).await,
        Event::PhoneInput { form, value } => forms::phone_input(state, form, &value),
        Event::KeyDown { key, target } => {
            if key == "Escape" {
                modal::close_open_modal(state);
                navigation::escape(state);
                return EventResponse::default();
            }
            forms::key_down(&key, target)
        }
        Event::BurgerClick => navigation::burger_click(state),
        Event::NavLinkClick(link) => navigation::link_click(state, &link),
        Event::DocumentClick { inside_menu } => navigation::document_click(state, inside_menu),
        Event::MenuSwipe { dx, dy } => navigation::swipe(state, dx, dy),
        Event::Resize { width } => navigation::resize(state, width),
        Event::ModalBackdropClick(id) | Event::ModalCloseClick(id) => {
            modal::close_modal(state, &id);
            EventResponse::default()
        }
        Event::NotificationCloseClick(id) => {
            state.presenter.dismiss(id);
            EventResponse::default()
        }
    }
}
