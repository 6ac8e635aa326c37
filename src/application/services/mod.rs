pub mod converter_form;
pub mod notification_manager;

pub use converter_form::{ConverterForm, parse_amount};
pub use notification_manager::NotificationManager;
