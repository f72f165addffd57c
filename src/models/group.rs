//! Student group model.

use serde::{Deserialize, Serialize};

use super::Shift;

/// A student group attending a set of subjects in one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Shift the group attends.
    #[serde(default)]
    pub shift: Shift,
    /// Subjects the group takes.
    #[serde(default)]
    pub subject_ids: Vec<String>,
}

impl Group {
    /// Creates a morning group with no subjects.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            shift: Shift::Morning,
            subject_ids: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the shift.
    pub fn with_shift(mut self, shift: Shift) -> Self {
        self.shift = shift;
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_ids.push(subject_id.into());
        self
    }

    /// Whether the group lists the subject.
    pub fn takes(&self, subject_id: &str) -> bool {
        self.subject_ids.iter().any(|s| s == subject_id)
    }
}
