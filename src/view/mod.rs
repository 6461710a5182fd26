pub mod memory;

use crate::models::{FormFields, FormKind, Notification, NotificationId};

/// The rendering surface. Handlers never touch page elements directly; every
/// visible side effect goes through this trait.
pub trait PageView: Send + Sync {
    fn read_form(&self, form: FormKind) -> FormFields;
    fn reset_form(&self, form: FormKind);
    fn set_phone_value(&self, form: FormKind, value: &str);
    fn set_date_min(&self, date: &str);

    fn submit_label(&self, form: FormKind) -> String;
    fn set_submit_button(&self, form: FormKind, label: &str, enabled: bool);

    fn render_notification(&self, notification: &Notification);
    fn remove_notification(&self, id: NotificationId);

    fn set_menu_open(&self, open: bool);
    fn set_scroll_locked(&self, locked: bool);
    /// Returns false when no section with this id exists.
    fn scroll_to_section(&self, section_id: &str) -> bool;

    fn has_modal(&self, modal_id: &str) -> bool;
    fn set_modal_visible(&self, modal_id: &str, visible: bool);
}
