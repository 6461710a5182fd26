use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::models::{Notification, NotificationId, NotificationKind};
use crate::view::PageView;

struct ActiveNotification {
    id: NotificationId,
    auto_dismiss: Option<JoinHandle<()>>,
}

/// Shows one notification at a time. A new one evicts the current one; each
/// removes itself after `dismiss_after` unless closed first.
pub struct NotificationPresenter {
    view: Arc<dyn PageView>,
    dismiss_after: Duration,
    next_id: AtomicU64,
    active: Arc<Mutex<Option<ActiveNotification>>>,
}

impl NotificationPresenter {
    pub fn new(view: Arc<dyn PageView>, dismiss_after: Duration) -> Self {
        Self {
            view,
            dismiss_after,
            next_id: AtomicU64::new(1),
            active: Arc::new(Mutex::new(None)),
        }
    }

    pub fn present(&self, message: &str, kind: NotificationKind) -> NotificationId {
        let notification = Notification {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            message: message.to_string(),
            kind,
        };

        let mut active = self.active.lock().unwrap();
        if let Some(previous) = active.take() {
            if let Some(timer) = previous.auto_dismiss {
                timer.abort();
            }
            self.view.remove_notification(previous.id);
        }

        self.view.render_notification(&notification);
        *active = Some(ActiveNotification {
            id: notification.id,
            auto_dismiss: self.schedule_dismiss(notification.id),
        });

        notification.id
    }

    /// Explicit close. Removing a notification that is already gone is a no-op.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        remove_if_current(&self.active, self.view.as_ref(), id, true)
    }

    pub fn current(&self) -> Option<NotificationId> {
        self.active.lock().unwrap().as_ref().map(|a| a.id)
    }

    fn schedule_dismiss(&self, id: NotificationId) -> Option<JoinHandle<()>> {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(id, "no async runtime, notification will not auto-dismiss");
            return None;
        };

        let active = Arc::clone(&self.active);
        let view = Arc::clone(&self.view);
        let delay = self.dismiss_after;

        Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            remove_if_current(&active, view.as_ref(), id, false);
        }))
    }
}

fn remove_if_current(
    active: &Mutex<Option<ActiveNotification>>,
    view: &dyn PageView,
    id: NotificationId,
    cancel_timer: bool,
) -> bool {
    let mut guard = active.lock().unwrap();
    if guard.as_ref().map(|a| a.id) != Some(id) {
        return false;
    }

    if let Some(current) = guard.take() {
        if cancel_timer {
            if let Some(timer) = current.auto_dismiss {
                timer.abort();
            }
        }
        view.remove_notification(id);
        tracing::debug!(id, "notification dismissed");
    }
    true
}
