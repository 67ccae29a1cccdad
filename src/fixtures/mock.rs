//! Built-in sample accounts and mails.

use chrono::{TimeZone, Utc};

use crate::domain::{known_labels, Account, Inbox, Mail, MailId};

/// Returns the sample accounts, in display order.
pub fn mock_accounts() -> Vec<Account> {
    vec![
        Account::new("1", "Personal", "personal@example.com", "lucide:mail"),
        Account::new("2", "Work", "work@example.com", "lucide:briefcase"),
    ]
}

/// Returns the sample inboxes. None are defined.
pub fn mock_inboxes() -> Vec<Inbox> {
    Vec::new()
}

/// Returns the sample mails, in list order.
pub fn mock_mails() -> Vec<Mail> {
    // 2024-12-09T00:00:00Z
    let date = Utc.timestamp_nanos(1_733_702_400_000_000_000);

    vec![
        Mail {
            id: MailId::from("1"),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            subject: "Project Update".to_string(),
            text: "Hi, I wanted to give you a quick update on the project. Everything is going well and we're on track to meet our deadlines...".to_string(),
            date,
            read: false,
            labels: vec![known_labels::work()],
        },
        Mail {
            id: MailId::from("2"),
            name: "Alice Smith".to_string(),
            email: "alice@example.com".to_string(),
            subject: "Weekend Plans".to_string(),
            text: "Hey! Are you free this weekend? I was thinking we could grab coffee and catch up...".to_string(),
            date,
            read: true,
            labels: vec![known_labels::personal()],
        },
        Mail {
            id: MailId::from("3"),
            name: "Bob Wilson".to_string(),
            email: "bob@example.com".to_string(),
            subject: "Meeting Notes".to_string(),
            text: "Here are the notes from today's meeting. Please review and let me know if I missed anything important...".to_string(),
            date,
            read: false,
            labels: vec![known_labels::work(), known_labels::important()],
        },
    ]
}
