//! Generation options.
//!
//! Plain serde configuration: every field has a default, so a partial JSON
//! object (or `{}`) deserializes into a usable configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::Calendar;

/// Hours of one subject placed per teacher per day, at most.
pub const DEFAULT_PER_DAY_CAP: usize = 2;

/// How rooms are attached to placed meetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomPolicy {
    /// Seeded pick from the pool. No collision check.
    #[default]
    Random,
    /// First pool room not already in use at the same day/block.
    /// A meeting gets no room when every room is taken.
    ConflictFree,
    /// Never assign rooms.
    Omit,
}

/// Options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerOptions {
    /// Max blocks of one subject per teacher per day.
    pub per_day_cap: usize,
    /// Labels of non-teaching blocks. `Some` replaces the calendar's labels;
    /// `None` keeps them.
    pub non_teaching_labels: Option<BTreeSet<String>>,
    /// Rooms available for meetings, in preference order.
    pub room_pool: Vec<String>,
    /// Room selection strategy.
    pub room_policy: RoomPolicy,
    /// Seed for [`RoomPolicy::Random`].
    pub seed: u64,
    /// Drop repeated subject ids from a teacher's list (first one kept).
    pub dedupe_subjects: bool,
    /// Only place a subject in blocks of its group's shift.
    pub restrict_to_group_shift: bool,
    /// Refuse cells where the resolved group already meets another teacher.
    pub prevent_group_clashes: bool,
    /// Teacher-wide ceiling of placed blocks per day.
    pub max_hours_per_day: Option<usize>,
    /// Teacher-wide ceiling of placed blocks per week.
    pub max_hours_per_week: Option<usize>,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            per_day_cap: DEFAULT_PER_DAY_CAP,
            non_teaching_labels: None,
            room_pool: vec!["Aula 1".into(), "Aula 2".into(), "Aula 3".into()],
            room_policy: RoomPolicy::Random,
            seed: 0,
            dedupe_subjects: true,
            restrict_to_group_shift: false,
            prevent_group_clashes: true,
            max_hours_per_day: None,
            max_hours_per_week: None,
        }
    }
}

impl SchedulerOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-day cap.
    pub fn with_per_day_cap(mut self, cap: usize) -> Self {
        self.per_day_cap = cap;
        self
    }

    /// Replaces the non-teaching labels.
    pub fn with_non_teaching_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.non_teaching_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the room pool.
    pub fn with_room_pool<I, S>(mut self, rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.room_pool = rooms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the room policy.
    pub fn with_room_policy(mut self, policy: RoomPolicy) -> Self {
        self.room_policy = policy;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables subject de-duplication.
    pub fn with_dedupe_subjects(mut self, dedupe: bool) -> Self {
        self.dedupe_subjects = dedupe;
        self
    }

    /// Enables or disables group-shift restriction.
    pub fn with_group_shift_restriction(mut self, restrict: bool) -> Self {
        self.restrict_to_group_shift = restrict;
        self
    }

    /// Enables or disables group clash prevention.
    pub fn with_group_clash_prevention(mut self, prevent: bool) -> Self {
        self.prevent_group_clashes = prevent;
        self
    }

    /// Sets the teacher daily ceiling.
    pub fn with_max_hours_per_day(mut self, hours: usize) -> Self {
        self.max_hours_per_day = Some(hours);
        self
    }

    /// Sets the teacher weekly ceiling.
    pub fn with_max_hours_per_week(mut self, hours: usize) -> Self {
        self.max_hours_per_week = Some(hours);
        self
    }

    /// Effective calendar of a run: `calendar` with these options'
    /// non-teaching labels, when set.
    pub fn apply_to(&self, calendar: &Calendar) -> Calendar {
        let mut cal = calendar.clone();
        if let Some(labels) = &self.non_teaching_labels {
            cal.non_teaching_labels = labels.clone();
        }
        cal
    }
}
