//! Data models for Prowl notifications and API responses.

mod notification;
mod response;

pub use notification::Notification;
pub use response::{ProwlErrorBody, ProwlResponse, ProwlSuccess, parse_response};
