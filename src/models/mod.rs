pub mod booking;
pub mod catalog;
pub mod navigation;
pub mod notification;

pub use booking::{
    BookingId, BookingRequest, BookingResponse, FormFields, FormKind, SubmissionOutcome,
    SubmissionPhase,
};
pub use catalog::ServiceCatalog;
pub use navigation::{MenuEvent, MenuState, ModalState, NavLink, NavTarget};
pub use notification::{Notification, NotificationId, NotificationKind};
