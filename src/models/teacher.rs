//! Teacher model.
//!
//! A teacher is authorized for a list of subjects and declares which weekly
//! cells (weekday × block) they can teach in.
//!
//! # Availability Keys
//! Availability is stored the way the administrative forms write it: a map
//! from `"<weekday-index>-<global-block-index>"` to a flag. Weekday index is
//! [`Weekday::index`] (Monday = 0); block index is the position in
//! [`Calendar::all_blocks_ordered`](super::Calendar::all_blocks_ordered).
//! Keys that do not parse are ignored (treated as unavailable).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Weekday;

/// Contract category of a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    /// Hourly / per-course contract.
    ByHour,
    /// Domain-specific category.
    Custom(String),
}

/// Declared availability cells of a teacher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability(BTreeMap<String, bool>);

impl Availability {
    /// Empty availability (teacher is never open).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the storage key for a cell.
    pub fn key(day: Weekday, block_index: usize) -> String {
        format!("{}-{}", day.index(), block_index)
    }

    /// Parses a storage key into `(weekday, block_index)`.
    ///
    /// Returns `None` for malformed keys or unknown weekday indices.
    pub fn parse_key(key: &str) -> Option<(Weekday, usize)> {
        let (d, b) = key.split_once('-')?;
        let day = Weekday::from_index(d.trim().parse().ok()?)?;
        let block = b.trim().parse().ok()?;
        Some((day, block))
    }

    /// Sets one cell.
    pub fn set(&mut self, day: Weekday, block_index: usize, open: bool) {
        self.0.insert(Self::key(day, block_index), open);
    }

    /// Inserts a raw key as stored by an external collaborator.
    pub fn set_raw(&mut self, key: impl Into<String>, open: bool) {
        self.0.insert(key.into(), open);
    }

    /// Whether the cell is explicitly marked open. Absent = closed.
    pub fn is_open(&self, day: Weekday, block_index: usize) -> bool {
        self.0
            .get(&Self::key(day, block_index))
            .copied()
            .unwrap_or(false)
    }

    /// Iterates open cells with well-formed keys.
    pub fn open_cells(&self) -> impl Iterator<Item = (Weekday, usize)> + '_ {
        self.0
            .iter()
            .filter(|(_, open)| **open)
            .filter_map(|(k, _)| Self::parse_key(k))
    }

    /// Keys that do not parse.
    pub fn malformed_keys(&self) -> impl Iterator<Item = &str> {
        self.0
            .keys()
            .filter(|k| Self::parse_key(k).is_none())
            .map(String::as_str)
    }

    /// Whether no cell is stored at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contract category.
    #[serde(default)]
    pub employment_type: EmploymentType,
    /// Subjects this teacher may teach, in processing order.
    #[serde(default)]
    pub subject_ids: Vec<String>,
    /// Weekly availability cells.
    #[serde(default)]
    pub availability: Availability,
}

impl Teacher {
    /// Creates a teacher with no subjects and no availability.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            employment_type: EmploymentType::default(),
            subject_ids: Vec::new(),
            availability: Availability::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the employment type.
    pub fn with_employment(mut self, employment_type: EmploymentType) -> Self {
        self.employment_type = employment_type;
        self
    }

    /// Authorizes a subject.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_ids.push(subject_id.into());
        self
    }

    /// Marks one cell open.
    pub fn with_available(mut self, day: Weekday, block_index: usize) -> Self {
        self.availability.set(day, block_index, true);
        self
    }

    /// Marks a range of global block indices open on one day.
    pub fn with_available_range(
        mut self,
        day: Weekday,
        block_indices: impl IntoIterator<Item = usize>,
    ) -> Self {
        for idx in block_indices {
            self.availability.set(day, idx, true);
        }
        self
    }

    /// Whether the teacher may teach the subject.
    pub fn teaches(&self, subject_id: &str) -> bool {
        self.subject_ids.iter().any(|s| s == subject_id)
    }
}
