//! Core identifier types for domain entities.
//!
//! These newtype wrappers keep account, inbox, mail and label ids from
//! being mixed up. Each serializes as its bare string.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

string_id!(
    /// Unique identifier for an email account.
    AccountId
);

string_id!(
    /// Unique identifier for an inbox.
    InboxId
);

string_id!(
    /// Unique identifier for a mail message.
    MailId
);

string_id!(
    /// A free-text tag attached to a mail ("work", "personal", ...).
    LabelId
);
