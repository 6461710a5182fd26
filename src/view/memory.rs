use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::models::{FormFields, FormKind, Notification, NotificationId};

use super::PageView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Default)]
struct Surface {
    forms: HashMap<FormKind, FormFields>,
    buttons: HashMap<FormKind, SubmitButton>,
    date_min: Option<String>,
    visible: Vec<Notification>,
    rendered: Vec<Notification>,
    menu_open: bool,
    scroll_locked: bool,
    sections: HashSet<String>,
    scrolled_to: Vec<String>,
    modals: HashSet<String>,
    visible_modals: HashSet<String>,
}

/// In-memory page: keeps form values, button state and notifications in
/// plain data. Backs the console front-end and the tests.
#[derive(Debug)]
pub struct MemoryView {
    surface: Mutex<Surface>,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryView {
    pub fn new() -> Self {
        let mut surface = Surface::default();
        surface.buttons.insert(
            FormKind::Booking,
            SubmitButton {
                label: "Отправить заявку".to_string(),
                enabled: true,
            },
        );
        surface.buttons.insert(
            FormKind::QuickBooking,
            SubmitButton {
                label: "Записаться".to_string(),
                enabled: true,
            },
        );
        for modal in ["portfolioModal", "blogModal"] {
            surface.modals.insert(modal.to_string());
        }
        for section in ["about", "services", "events", "reviews", "contacts", "booking"] {
            surface.sections.insert(section.to_string());
        }
        Self {
            surface: Mutex::new(surface),
        }
    }

    pub fn fill_form(&self, form: FormKind, fields: FormFields) {
        self.surface.lock().unwrap().forms.insert(form, fields);
    }

    pub fn form(&self, form: FormKind) -> FormFields {
        self.read_form(form)
    }

    pub fn button(&self, form: FormKind) -> Option<SubmitButton> {
        self.surface.lock().unwrap().buttons.get(&form).cloned()
    }

    pub fn date_min(&self) -> Option<String> {
        self.surface.lock().unwrap().date_min.clone()
    }

    /// Notifications currently on screen.
    pub fn visible_notifications(&self) -> Vec<Notification> {
        self.surface.lock().unwrap().visible.clone()
    }

    /// Every notification ever rendered, in order.
    pub fn rendered_notifications(&self) -> Vec<Notification> {
        self.surface.lock().unwrap().rendered.clone()
    }

    pub fn menu_open(&self) -> bool {
        self.surface.lock().unwrap().menu_open
    }

    pub fn scroll_locked(&self) -> bool {
        self.surface.lock().unwrap().scroll_locked
    }

    pub fn scrolled_to(&self) -> Vec<String> {
        self.surface.lock().unwrap().scrolled_to.clone()
    }

    pub fn modal_visible(&self, modal_id: &str) -> bool {
        self.surface.lock().unwrap().visible_modals.contains(modal_id)
    }
}

impl PageView for MemoryView {
    fn read_form(&self, form: FormKind) -> FormFields {
        self.surface
            .lock()
            .unwrap()
            .forms
            .get(&form)
            .cloned()
            .unwrap_or_default()
    }

    fn reset_form(&self, form: FormKind) {
        self.surface.lock().unwrap().forms.remove(&form);
    }

    fn set_phone_value(&self, form: FormKind, value: &str) {
        let mut surface = self.surface.lock().unwrap();
        surface.forms.entry(form).or_default().phone = Some(value.to_string());
    }

    fn set_date_min(&self, date: &str) {
        self.surface.lock().unwrap().date_min = Some(date.to_string());
    }

    fn submit_label(&self, form: FormKind) -> String {
        self.surface
            .lock()
            .unwrap()
            .buttons
            .get(&form)
            .map(|b| b.label.clone())
            .unwrap_or_default()
    }

    fn set_submit_button(&self, form: FormKind, label: &str, enabled: bool) {
        self.surface.lock().unwrap().buttons.insert(
            form,
            SubmitButton {
                label: label.to_string(),
                enabled,
            },
        );
    }

    fn render_notification(&self, notification: &Notification) {
        tracing::info!(
            id = notification.id,
            kind = notification.kind.as_str(),
            "{}",
            notification.message
        );
        let mut surface = self.surface.lock().unwrap();
        surface.visible.push(notification.clone());
        surface.rendered.push(notification.clone());
    }

    fn remove_notification(&self, id: NotificationId) {
        self.surface.lock().unwrap().visible.retain(|n| n.id != id);
    }

    fn set_menu_open(&self, open: bool) {
        self.surface.lock().unwrap().menu_open = open;
    }

    fn set_scroll_locked(&self, locked: bool) {
        self.surface.lock().unwrap().scroll_locked = locked;
    }

    fn scroll_to_section(&self, section_id: &str) -> bool {
        let mut surface = self.surface.lock().unwrap();
        if !surface.sections.contains(section_id) {
            return false;
        }
        surface.scrolled_to.push(section_id.to_string());
        true
    }

    fn has_modal(&self, modal_id: &str) -> bool {
        self.surface.lock().unwrap().modals.contains(modal_id)
    }

    fn set_modal_visible(&self, modal_id: &str, visible: bool) {
        let mut surface = self.surface.lock().unwrap();
        if visible {
            surface.visible_modals.insert(modal_id.to_string());
        } else {
            surface.visible_modals.remove(modal_id);
        }
    }
}
