//! Account domain types.
//!
//! An account owns one or more inboxes and is shown in the sidebar with
//! its name and icon.

use serde::{Deserialize, Serialize};

use super::AccountId;

/// A mailbox owner shown in the account switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for this account.
    pub id: AccountId,
    /// Display name shown in the UI.
    pub name: String,
    /// Email address for this account.
    pub email: String,
    /// Icon set reference for the UI glyph, e.g. `lucide:mail`.
    pub icon: String,
}

impl Account {
    /// Creates a new account.
    pub fn new(
        id: impl Into<AccountId>,
        name: impl Into<String>,
        email: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            icon: icon.into(),
        }
    }
}
