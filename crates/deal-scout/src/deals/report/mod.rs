mod locale;
mod message;
mod views;

pub use locale::LocaleProfile;
pub use message::format_message;
pub use views::NotificationView;

#[cfg(test)]
pub(crate) use locale::group_digits_for_tests;
