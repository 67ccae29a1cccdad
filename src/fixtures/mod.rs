//! Fixture data for seeding the client prototype.
//!
//! The built-in set is assembled from constant literals. A set can also be
//! read from a JSON document of the form
//! `{"accounts": [...], "inboxes": [...], "mails": [...]}`.

mod mock;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::FixtureSettings;
use crate::domain::{Account, AccountId, Inbox, Mail, MailId};

pub use mock::{mock_accounts, mock_inboxes, mock_mails};

/// Errors that can occur while loading or checking fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid fixture document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate {collection} id: {id}")]
    DuplicateId { collection: &'static str, id: String },

    #[error("{collection} {id} has an empty {field}")]
    EmptyField {
        collection: &'static str,
        id: String,
        field: &'static str,
    },

    #[error("mail {id} has an empty label")]
    EmptyLabel { id: String },
}

/// Result type for fixture operations.
pub type Result<T> = std::result::Result<T, FixtureError>;

/// The three fixture collections, in their declared order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Mailbox owners.
    pub accounts: Vec<Account>,
    /// Inboxes keyed to accounts.
    #[serde(default)]
    pub inboxes: Vec<Inbox>,
    /// Sample messages.
    pub mails: Vec<Mail>,
}

impl FixtureSet {
    /// Returns the built-in sample data.
    pub fn builtin() -> Self {
        Self {
            accounts: mock_accounts(),
            inboxes: mock_inboxes(),
            mails: mock_mails(),
        }
    }

    /// Parses a fixture document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a fixture document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let set = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            accounts = set.accounts.len(),
            mails = set.mails.len(),
            "Loaded fixtures"
        );
        Ok(set)
    }

    /// Picks the fixture source: `override_path` first, then the
    /// configured path, then the built-in data. Loaded documents are
    /// validated when `settings.validate` is set.
    pub fn from_settings(
        override_path: Option<&Path>,
        settings: &FixtureSettings,
    ) -> Result<Self> {
        let Some(path) = override_path.or(settings.path.as_deref()) else {
            tracing::debug!("Using built-in fixtures");
            return Ok(Self::builtin());
        };

        let set = Self::load(path)?;
        if settings.validate {
            set.validate()?;
        }
        tracing::info!(path = %path.display(), "Loaded fixture document");
        Ok(set)
    }

    /// Serializes the whole set.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Looks up an account by ID.
    pub fn account(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| &a.id == id)
    }

    /// Looks up a mail by ID.
    pub fn mail(&self, id: &MailId) -> Option<&Mail> {
        self.mails.iter().find(|m| &m.id == id)
    }

    /// Checks ids are unique, account fields are non-empty and labels are
    /// non-empty.
    ///
    /// Stops at the first violation.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for account in &self.accounts {
            let id = account.id.to_string();
            for (field, value) in [
                ("id", &account.id.0),
                ("name", &account.name),
                ("email", &account.email),
                ("icon", &account.icon),
            ] {
                if value.is_empty() {
                    return Err(FixtureError::EmptyField {
                        collection: "account",
                        id,
                        field,
                    });
                }
            }
            if !seen.insert(id.clone()) {
                return Err(FixtureError::DuplicateId {
                    collection: "account",
                    id,
                });
            }
        }

        let mut seen = HashSet::new();
        for inbox in &self.inboxes {
            if !seen.insert(&inbox.id) {
                return Err(FixtureError::DuplicateId {
                    collection: "inbox",
                    id: inbox.id.to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for mail in &self.mails {
            if !seen.insert(&mail.id) {
                return Err(FixtureError::DuplicateId {
                    collection: "mail",
                    id: mail.id.to_string(),
                });
            }
            if mail.labels.iter().any(|label| label.0.is_empty()) {
                return Err(FixtureError::EmptyLabel {
                    id: mail.id.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InboxId, LabelId};
    use std::path::PathBuf;

    #[test]
    fn builtin_is_valid() {
        FixtureSet::builtin().validate().unwrap();
    }

    #[test]
    fn lookup_by_id() {
        let set = FixtureSet::builtin();

        let work = set.account(&AccountId::from("2")).unwrap();
        assert_eq!(work.name, "Work");

        let mail = set.mail(&MailId::from("1")).unwrap();
        assert_eq!(mail.subject, "Project Update");

        assert!(set.mail(&MailId::from("99")).is_none());
    }

    #[test]
    fn json_roundtrip() {
        let set = FixtureSet::builtin();
        for pretty in [true, false] {
            let json = set.to_json(pretty).unwrap();
            assert_eq!(FixtureSet::from_json(&json).unwrap(), set);
        }
    }

    #[test]
    fn inboxes_default_to_empty() {
        let set = FixtureSet::from_json(r#"{"accounts": [], "mails": []}"#).unwrap();
        assert!(set.inboxes.is_empty());
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = FixtureSet::from_json(r#"{"accounts": 3}"#).unwrap_err();
        assert!(matches!(err, FixtureError::Json(_)));
    }

    #[test]
    fn duplicate_account_id() {
        let mut set = FixtureSet::builtin();
        set.accounts[1].id = AccountId::from("1");

        let err = set.validate().unwrap_err();
        assert!(matches!(
            err,
            FixtureError::DuplicateId { collection: "account", ref id } if id == "1"
        ));
    }

    #[test]
    fn duplicate_mail_id() {
        let mut set = FixtureSet::builtin();
        set.mails[2].id = MailId::from("2");

        let err = set.validate().unwrap_err();
        assert_eq!(err.to_string(), "duplicate mail id: 2");
    }

    #[test]
    fn empty_account_icon() {
        let mut set = FixtureSet::builtin();
        set.accounts[0].icon.clear();

        let err = set.validate().unwrap_err();
        assert_eq!(err.to_string(), "account 1 has an empty icon");
    }

    #[test]
    fn empty_label() {
        let mut set = FixtureSet::builtin();
        set.mails[0].labels.push(LabelId::from(""));

        let err = set.validate().unwrap_err();
        assert!(matches!(err, FixtureError::EmptyLabel { ref id } if id == "1"));
    }

    #[test]
    fn mail_without_labels_is_valid() {
        let mut set = FixtureSet::builtin();
        set.mails[0].labels.clear();
        set.validate().unwrap();
    }

    #[test]
    fn duplicate_inbox_id() {
        let mut set = FixtureSet::builtin();
        for account in ["1", "2"] {
            set.inboxes.push(Inbox {
                id: InboxId::from("inbox-1"),
                account_id: AccountId::from(account),
                email: "shared@example.com".to_string(),
            });
        }

        let err = set.validate().unwrap_err();
        assert_eq!(err.to_string(), "duplicate inbox id: inbox-1");
    }

    #[test]
    fn inbox_owner_is_not_checked() {
        let mut set = FixtureSet::builtin();
        set.inboxes.push(Inbox {
            id: InboxId::from("inbox-1"),
            account_id: AccountId::from("7"),
            email: "ghost@example.com".to_string(),
        });
        set.validate().unwrap();
    }

    fn write_set(dir: &Path, name: &str, set: &FixtureSet) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, set.to_json(false).unwrap()).unwrap();
        path
    }

    fn single_account_set(name: &str) -> FixtureSet {
        FixtureSet {
            accounts: vec![Account::new("1", name, "solo@example.com", "lucide:user")],
            ..FixtureSet::default()
        }
    }

    #[test]
    fn from_settings_without_paths_is_builtin() {
        let set = FixtureSet::from_settings(None, &FixtureSettings::default()).unwrap();
        assert_eq!(set, FixtureSet::builtin());
    }

    #[test]
    fn from_settings_uses_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let configured = write_set(
            dir.path(),
            "configured.json",
            &single_account_set("Configured"),
        );

        let settings = FixtureSettings {
            path: Some(configured),
            validate: true,
        };
        let set = FixtureSet::from_settings(None, &settings).unwrap();
        assert_eq!(set.accounts[0].name, "Configured");
    }

    #[test]
    fn override_path_wins_over_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let configured = write_set(
            dir.path(),
            "configured.json",
            &single_account_set("Configured"),
        );
        let chosen = write_set(dir.path(), "chosen.json", &single_account_set("Chosen"));

        let settings = FixtureSettings {
            path: Some(configured),
            validate: true,
        };
        let set = FixtureSet::from_settings(Some(&chosen), &settings).unwrap();
        assert_eq!(set.accounts[0].name, "Chosen");
    }

    #[test]
    fn loaded_fixtures_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let mut invalid = FixtureSet::builtin();
        invalid.mails[1].id = MailId::from("1");
        let path = write_set(dir.path(), "invalid.json", &invalid);

        let err =
            FixtureSet::from_settings(Some(&path), &FixtureSettings::default()).unwrap_err();
        assert_eq!(err.to_string(), "duplicate mail id: 1");
    }

    #[test]
    fn validation_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut invalid = FixtureSet::builtin();
        invalid.mails[1].id = MailId::from("1");
        let path = write_set(dir.path(), "invalid.json", &invalid);

        let settings = FixtureSettings {
            path: None,
            validate: false,
        };
        let set = FixtureSet::from_settings(Some(&path), &settings).unwrap();
        assert_eq!(set, invalid);
    }
}
