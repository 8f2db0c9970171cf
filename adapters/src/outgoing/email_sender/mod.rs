pub mod console_email_sender;
pub mod smtp_email_sender;
pub mod templates;
