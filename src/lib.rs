//! mockmail - Fixture accounts and mails for an email client prototype
//!
//! This crate provides the domain types for accounts, inboxes and mails,
//! the built-in sample data, and settings for the `mockmail` command.

pub mod config;
pub mod domain;
pub mod fixtures;

pub use fixtures::FixtureSet;
