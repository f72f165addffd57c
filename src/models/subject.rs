//! Subject model.

use serde::{Deserialize, Serialize};

/// Weekly hours assumed when a subject does not declare any.
pub const DEFAULT_WEEKLY_HOURS: u32 = 4;

/// A subject (course) requiring a number of weekly teaching blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning career / degree programme.
    #[serde(default)]
    pub career_id: String,
    /// Required blocks per week. `None` = [`DEFAULT_WEEKLY_HOURS`].
    #[serde(default)]
    pub weekly_hours: Option<u32>,
    /// Four-month term the subject belongs to.
    #[serde(default)]
    pub term: Option<u32>,
}

impl Subject {
    /// Creates a subject with default weekly hours.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            career_id: String::new(),
            weekly_hours: None,
            term: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the career.
    pub fn with_career(mut self, career_id: impl Into<String>) -> Self {
        self.career_id = career_id.into();
        self
    }

    /// Sets the required weekly hours.
    pub fn with_weekly_hours(mut self, hours: u32) -> Self {
        self.weekly_hours = Some(hours);
        self
    }

    /// Sets the term.
    pub fn with_term(mut self, term: u32) -> Self {
        self.term = Some(term);
        self
    }

    /// Hours the engine tries to place.
    #[inline]
    pub fn required_hours(&self) -> u32 {
        self.weekly_hours.unwrap_or(DEFAULT_WEEKLY_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_hours_default() {
        assert_eq!(Subject::new("S1").required_hours(), 4);
        assert_eq!(Subject::new("S1").with_weekly_hours(6).required_hours(), 6);
    }

    #[test]
    fn test_deserialize_minimal() {
        let s: Subject = serde_json::from_str(r#"{"id": "S1", "name": "Math"}"#).unwrap();
        assert_eq!(s.weekly_hours, None);
        assert_eq!(s.required_hours(), DEFAULT_WEEKLY_HOURS);
    }
}
