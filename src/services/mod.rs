pub mod api;
pub mod notifier;
pub mod phone;
pub mod submitter;
