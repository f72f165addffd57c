//! Timetable (solution) model.
//!
//! Canonical ownership is per teacher: each teacher owns a week grid of
//! `weekday → block → Option<Assignment>`. Group views are derived from it
//! (see [`crate::projection`]), never stored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{BlockId, Calendar, Weekday};

/// One class meeting placed into one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Subject taught.
    pub subject_id: String,
    /// Teacher holding the cell.
    pub teacher_id: String,
    /// Group attending (resolved at placement time).
    pub group_id: String,
    /// Room, if one was assigned.
    #[serde(default)]
    pub classroom: Option<String>,
}

impl Assignment {
    /// Creates an assignment without a room.
    pub fn new(
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            teacher_id: teacher_id.into(),
            group_id: group_id.into(),
            classroom: None,
        }
    }

    /// Sets the room.
    pub fn with_classroom(mut self, classroom: impl Into<String>) -> Self {
        self.classroom = Some(classroom.into());
        self
    }
}

/// A weekly grid: `weekday → block → assignment`.
///
/// `None` cells and absent keys both mean "no assignment".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekGrid {
    pub days: BTreeMap<Weekday, BTreeMap<BlockId, Option<Assignment>>>,
}

impl WeekGrid {
    /// Grid with an empty cell for every calendar day × block.
    pub fn empty(calendar: &Calendar) -> Self {
        let mut days = BTreeMap::new();
        for day in &calendar.weekdays {
            let row: BTreeMap<BlockId, Option<Assignment>> =
                calendar.blocks.iter().map(|b| (b.id, None)).collect();
            days.insert(*day, row);
        }
        Self { days }
    }

    /// Assignment in a cell.
    pub fn get(&self, day: Weekday, block: BlockId) -> Option<&Assignment> {
        self.days.get(&day)?.get(&block)?.as_ref()
    }

    /// Whether a cell holds nothing.
    #[inline]
    pub fn is_free(&self, day: Weekday, block: BlockId) -> bool {
        self.get(day, block).is_none()
    }

    /// Writes a cell, returning the previous occupant.
    pub fn set(
        &mut self,
        day: Weekday,
        block: BlockId,
        assignment: Assignment,
    ) -> Option<Assignment> {
        self.days
            .entry(day)
            .or_default()
            .insert(block, Some(assignment))
            .flatten()
    }

    /// Occupied cells in day/block order.
    pub fn cells(&self) -> impl Iterator<Item = (Weekday, BlockId, &Assignment)> {
        self.days.iter().flat_map(|(day, row)| {
            row.iter()
                .filter_map(move |(block, cell)| cell.as_ref().map(|a| (*day, *block, a)))
        })
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells().count()
    }

    /// Occupied cells on one day.
    pub fn occupied_on(&self, day: Weekday) -> usize {
        self.days
            .get(&day)
            .map(|row| row.values().filter(|c| c.is_some()).count())
            .unwrap_or(0)
    }

    /// Cells holding `subject_id` on one day.
    pub fn subject_hours_on(&self, day: Weekday, subject_id: &str) -> usize {
        self.days
            .get(&day)
            .map(|row| {
                row.values()
                    .flatten()
                    .filter(|a| a.subject_id == subject_id)
                    .count()
            })
            .unwrap_or(0)
    }

    /// Cells holding `subject_id` across the week.
    pub fn subject_hours(&self, subject_id: &str) -> usize {
        self.cells().filter(|(_, _, a)| a.subject_id == subject_id).count()
    }
}

/// The canonical timetable: teacher id → week grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    pub schedules: BTreeMap<String, WeekGrid>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a teacher's grid, replacing any previous one.
    pub fn insert(&mut self, teacher_id: impl Into<String>, grid: WeekGrid) {
        self.schedules.insert(teacher_id.into(), grid);
    }

    /// Grid of one teacher.
    pub fn teacher(&self, teacher_id: &str) -> Option<&WeekGrid> {
        self.schedules.get(teacher_id)
    }

    /// Every placed assignment with its owner and cell.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, Weekday, BlockId, &Assignment)> {
        self.schedules.iter().flat_map(|(teacher_id, grid)| {
            grid.cells()
                .map(move |(day, block, a)| (teacher_id.as_str(), day, block, a))
        })
    }

    /// Total placed cells.
    pub fn assignment_count(&self) -> usize {
        self.schedules.values().map(WeekGrid::occupied_count).sum()
    }

    /// Number of teacher grids.
    pub fn teacher_count(&self) -> usize {
        self.schedules.len()
    }
}

/// A rule broken by a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (teacher, room, or group).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
    /// Severity (0-100, higher = worse).
    pub severity: i32,
}

/// Classification of timetable violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Teacher placed on a subject they are not authorized for.
    UnauthorizedSubject,
    /// Teacher placed in a cell they did not declare open.
    TeacherUnavailable,
    /// Assignment in a break/lunch block.
    NonTeachingBlock,
    /// Assignment in a block the calendar does not define.
    UnknownBlock,
    /// More placed hours than the subject requires.
    WeeklyHoursExceeded,
    /// More hours of one subject on one day than the per-day cap.
    DailyCapExceeded,
    /// Same room used by two teachers at the same time.
    RoomDoubleBooked,
    /// Same group attending two meetings at the same time.
    GroupClash,
    /// Cell owner differs from the assignment's teacher.
    OwnerMismatch,
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
        severity: i32,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
            severity,
        }
    }

    /// Creates an unauthorized-subject violation.
    pub fn unauthorized(teacher_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::UnauthorizedSubject, teacher_id, message, 95)
    }

    /// Creates a teacher-unavailable violation.
    pub fn unavailable(teacher_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::TeacherUnavailable, teacher_id, message, 90)
    }

    /// Creates a non-teaching-block violation.
    pub fn non_teaching(teacher_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::NonTeachingBlock, teacher_id, message, 90)
    }

    /// Creates an unknown-block violation.
    pub fn unknown_block(teacher_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::UnknownBlock, teacher_id, message, 90)
    }

    /// Creates a weekly-hours-exceeded violation.
    pub fn hours_exceeded(teacher_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::WeeklyHoursExceeded, teacher_id, message, 70)
    }

    /// Creates a daily-cap-exceeded violation.
    pub fn daily_cap_exceeded(teacher_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::DailyCapExceeded, teacher_id, message, 60)
    }

    /// Creates a room double-booking violation.
    pub fn room_double_booked(room: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::RoomDoubleBooked, room, message, 50)
    }

    /// Creates a group clash violation.
    pub fn group_clash(group_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::GroupClash, group_id, message, 80)
    }

    /// Creates an owner-mismatch violation.
    pub fn owner_mismatch(teacher_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationType::OwnerMismatch, teacher_id, message, 95)
    }
}
