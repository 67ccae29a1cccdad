//! Domain layer types for the mock mail data.
//!
//! Accounts own inboxes; mails carry sender info, read state and labels.

mod account;
mod inbox;
mod label;
mod mail;
mod types;

pub use account::Account;
pub use inbox::Inbox;
pub use label::known_labels;
pub use mail::Mail;
pub use types::{AccountId, InboxId, LabelId, MailId};
