//! Inbox domain types.

use serde::{Deserialize, Serialize};

use super::{Account, AccountId, InboxId};

/// A mailbox address belonging to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inbox {
    /// Unique identifier for this inbox.
    pub id: InboxId,
    /// Account that owns this inbox.
    pub account_id: AccountId,
    /// Address mail is delivered to.
    pub email: String,
}

impl Inbox {
    /// Returns true if this inbox is owned by `account`.
    pub fn belongs_to(&self, account: &Account) -> bool {
        self.account_id == account.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbox_uses_account_id_wire_name() {
        let inbox = Inbox {
            id: InboxId::from("inbox-1"),
            account_id: AccountId::from("1"),
            email: "personal@example.com".to_string(),
        };

        let json = serde_json::to_string(&inbox).unwrap();
        assert!(json.contains(r#""accountId":"1""#));

        let deserialized: Inbox = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, inbox);
    }

    #[test]
    fn belongs_to_matches_owner() {
        let personal = Account::new("1", "Personal", "personal@example.com", "lucide:mail");
        let work = Account::new("2", "Work", "work@example.com", "lucide:briefcase");
        let inbox = Inbox {
            id: InboxId::from("inbox-1"),
            account_id: AccountId::from("1"),
            email: "personal@example.com".to_string(),
        };

        assert!(inbox.belongs_to(&personal));
        assert!(!inbox.belongs_to(&work));
    }
}
