use std::sync::Arc;

use super::{modal, EventResponse};
use crate::models::{MenuEvent, NavLink, NavTarget};
use crate::state::AppState;

fn apply(state: &Arc<AppState>, event: MenuEvent) {
    let (before, after) = {
        let mut menu = state.menu.lock().unwrap();
        let before = *menu;
        *menu = before.apply(event, state.config.mobile_breakpoint_px);
        (before, *menu)
    };

    if before != after {
        tracing::debug!(open = after.open, ?event, "mobile menu");
        state.view.set_menu_open(after.open);
        state.view.set_scroll_locked(after.open);
    }
}

pub fn burger_click(state: &Arc<AppState>) -> EventResponse {
    apply(state, MenuEvent::Toggle);
    EventResponse::prevent_default()
}

pub fn link_click(state: &Arc<AppState>, link: &NavLink) -> EventResponse {
    match link.target() {
        Some(NavTarget::Modal(id)) => {
            apply(state, MenuEvent::LinkFollowed);
            modal::open_modal(state, id);
            EventResponse::prevent_default()
        }
        Some(NavTarget::Section(section)) => {
            apply(state, MenuEvent::LinkFollowed);
            if !state.view.scroll_to_section(&section) {
                tracing::debug!(section = %section, "nav target not on page");
            }
            EventResponse::prevent_default()
        }
        // external links navigate normally
        None => EventResponse::default(),
    }
}

pub fn document_click(state: &Arc<AppState>, inside_menu: bool) -> EventResponse {
    apply(state, MenuEvent::DocumentClick { inside_menu });
    EventResponse::default()
}

pub fn escape(state: &Arc<AppState>) {
    apply(state, MenuEvent::Escape);
}

pub fn resize(state: &Arc<AppState>, width: u32) -> EventResponse {
    apply(state, MenuEvent::Resize { width });
    EventResponse::default()
}

pub fn swipe(state: &Arc<AppState>, dx: f64, dy: f64) -> EventResponse {
    apply(state, MenuEvent::Swipe { dx, dy });
    EventResponse::default()
}
