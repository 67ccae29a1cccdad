//! Label vocabulary.
//!
//! Labels are free text; these are the ones the sample data uses.

/// Well-known label IDs.
pub mod known_labels {
    use crate::domain::LabelId;

    /// Returns the work label ID.
    pub fn work() -> LabelId {
        LabelId::from("work")
    }

    /// Returns the personal label ID.
    pub fn personal() -> LabelId {
        LabelId::from("personal")
    }

    /// Returns the important label ID.
    pub fn important() -> LabelId {
        LabelId::from("important")
    }

    /// Returns every well-known label.
    pub fn all() -> Vec<LabelId> {
        vec![work(), personal(), important()]
    }
}
