//! Prowl public API endpoint implementations.

mod add;

pub use add::add_notification;
