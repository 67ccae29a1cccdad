//! Mail domain types.
//!
//! Represents a single message as listed in the message pane.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LabelId, MailId};

/// A mail message with sender info, body and read state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mail {
    /// Unique identifier for this mail.
    pub id: MailId,
    /// Sender display name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub text: String,
    /// Date and time the mail was sent.
    #[serde(with = "iso_instant")]
    pub date: DateTime<Utc>,
    /// Whether the mail has been read.
    pub read: bool,
    /// Labels applied to this mail. Order is not significant.
    pub labels: Vec<LabelId>,
}

impl Mail {
    /// Returns the sender as "Name <email>", or just the email when the
    /// name is blank.
    pub fn sender(&self) -> String {
        if self.name.trim().is_empty() {
            self.email.clone()
        } else {
            format!("{} <{}>", self.name, self.email)
        }
    }

    /// Returns true if `label` is applied to this mail.
    pub fn has_label(&self, label: &LabelId) -> bool {
        self.labels.contains(label)
    }

    /// Returns true if the mail has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}

/// Timestamps in the `2024-12-09T00:00:00.000Z` form produced by
/// `Date.toISOString()`. Sub-millisecond precision is written out in full.
/// Any RFC 3339 offset is accepted on input.
pub(crate) mod iso_instant {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let format = if date.timestamp_subsec_nanos() % 1_000_000 == 0 {
            SecondsFormat::Millis
        } else {
            SecondsFormat::AutoSi
        };
        serializer.serialize_str(&date.to_rfc3339_opts(format, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|date| date.with_timezone(&Utc))
            .map_err(|e| de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
    }
}
