//! Input validation and timetable verification.
//!
//! Three layers of checks:
//! - [`validate_calendar`] / [`validate_options`]: configuration errors.
//!   Generation refuses to start when these fail.
//! - [`validate_input`]: referential integrity of teachers, subjects, and
//!   groups. Findings are informational; generation skips the affected units.
//! - [`check_timetable`]: verifies a produced timetable against the placement
//!   rules (authorization, availability, breaks, hour caps, rooms, groups).

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::models::{
    parse_hhmm, BlockId, Calendar, Group, Subject, Teacher, Timetable, Violation, Weekday,
};
use crate::scheduler::{AvailabilityIndex, SchedulerOptions};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A weekday appears twice in the calendar.
    DuplicateWeekday,
    /// The calendar has no weekdays or no blocks.
    EmptyCalendar,
    /// A block time is not `HH:MM` or does not move forward.
    MalformedTime,
    /// The afternoon split index is beyond the block list.
    InvalidShiftSplit,
    /// Every block is non-teaching.
    NoTeachingBlocks,
    /// An option value is out of range.
    InvalidOption,
    /// A teacher or group lists a subject that doesn't exist.
    UnknownSubject,
    /// A subject requires zero weekly hours.
    ZeroWeeklyHours,
    /// A teacher lists the same subject more than once.
    DuplicateSubject,
    /// A teacher's subject is listed by no group.
    UnlistedSubject,
    /// An availability key does not parse.
    MalformedAvailability,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the calendar configuration.
///
/// Checks:
/// 1. At least one weekday, no repeated weekday
/// 2. At least one block, no duplicate block IDs
/// 3. Every block has well-formed `HH:MM` bounds with end after start
/// 4. The afternoon split index is within the block list
/// 5. At least one teaching block
pub fn validate_calendar(calendar: &Calendar) -> ValidationResult {
    let mut errors = Vec::new();

    if calendar.weekdays.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCalendar,
            "Calendar has no weekdays",
        ));
    }
    let mut days = HashSet::new();
    for day in &calendar.weekdays {
        if !days.insert(*day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateWeekday,
                format!("Weekday '{day}' listed more than once"),
            ));
        }
    }

    if calendar.blocks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCalendar,
            "Calendar has no time blocks",
        ));
    }
    let mut block_ids = HashSet::new();
    for block in &calendar.blocks {
        if !block_ids.insert(block.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate block ID: {}", block.id),
            ));
        }
        let start = parse_hhmm(&block.start);
        let end = parse_hhmm(&block.end);
        match (start, end) {
            (Some(s), Some(e)) if e > s => {}
            (Some(_), Some(_)) => errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!(
                    "Block {} ends ({}) before it starts ({})",
                    block.id, block.end, block.start
                ),
            )),
            _ => errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!(
                    "Block {} has malformed time '{}'-'{}'",
                    block.id, block.start, block.end
                ),
            )),
        }
    }

    if let Some(split) = calendar.afternoon_from {
        if split > calendar.blocks.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidShiftSplit,
                format!(
                    "Afternoon split {} is beyond the {} declared blocks",
                    split,
                    calendar.blocks.len()
                ),
            ));
        }
    }

    if !calendar.blocks.is_empty() && calendar.blocks.iter().all(|b| !calendar.is_teaching(b)) {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoTeachingBlocks,
            "Every block is non-teaching",
        ));
    }

    into_result(errors)
}

/// Validates generation options.
pub fn validate_options(options: &SchedulerOptions) -> ValidationResult {
    let mut errors = Vec::new();

    if options.per_day_cap == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidOption,
            "per_day_cap must be at least 1",
        ));
    }
    if options.max_hours_per_day == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidOption,
            "max_hours_per_day must be at least 1 when set",
        ));
    }
    if options.max_hours_per_week == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidOption,
            "max_hours_per_week must be at least 1 when set",
        ));
    }

    into_result(errors)
}

/// Validates referential integrity of the entity records.
///
/// Checks:
/// 1. No duplicate teacher, subject, or group IDs
/// 2. Every subject a teacher or group lists exists
/// 3. No subject requires zero weekly hours
/// 4. No teacher lists the same subject twice
/// 5. Every subject a teacher teaches is listed by some group
/// 6. Availability keys are well-formed
///
/// None of these stop generation; affected units are skipped.
pub fn validate_input(
    teachers: &[Teacher],
    subjects: &[Subject],
    groups: &[Group],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut subject_ids = HashSet::new();
    for s in subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", s.id),
            ));
        }
        if s.weekly_hours == Some(0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroWeeklyHours,
                format!("Subject '{}' requires zero weekly hours", s.id),
            ));
        }
    }

    let mut group_ids = HashSet::new();
    let mut listed: HashSet<&str> = HashSet::new();
    for g in groups {
        if !group_ids.insert(g.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate group ID: {}", g.id),
            ));
        }
        for sid in &g.subject_ids {
            listed.insert(sid.as_str());
            if !subject_ids.contains(sid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubject,
                    format!("Group '{}' references unknown subject '{}'", g.id, sid),
                ));
            }
        }
    }

    let mut teacher_ids = HashSet::new();
    for t in teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }

        let mut seen = HashSet::new();
        for sid in &t.subject_ids {
            if !seen.insert(sid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSubject,
                    format!("Teacher '{}' lists subject '{}' more than once", t.id, sid),
                ));
                continue;
            }
            if !subject_ids.contains(sid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubject,
                    format!("Teacher '{}' references unknown subject '{}'", t.id, sid),
                ));
            } else if !listed.contains(sid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnlistedSubject,
                    format!(
                        "Teacher '{}' teaches subject '{}' but no group takes it",
                        t.id, sid
                    ),
                ));
            }
        }

        for key in t.availability.malformed_keys() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedAvailability,
                format!("Teacher '{}' has malformed availability key '{}'", t.id, key),
            ));
        }
    }

    into_result(errors)
}

/// Verifies a timetable against the placement rules.
///
/// Returns every violation found; an empty list means the timetable honors
/// authorization, availability, break exclusion, weekly and per-day caps,
/// room exclusivity, and group exclusivity.
///
/// Room and group exclusivity are only guaranteed by the engine under
/// [`RoomPolicy::ConflictFree`](crate::scheduler::RoomPolicy::ConflictFree)
/// and `prevent_group_clashes`; otherwise they are reported here.
pub fn check_timetable(
    timetable: &Timetable,
    teachers: &[Teacher],
    subjects: &[Subject],
    calendar: &Calendar,
    options: &SchedulerOptions,
) -> Vec<Violation> {
    let calendar = options.apply_to(calendar);
    let mut violations = Vec::new();

    let teacher_map: HashMap<&str, &Teacher> =
        teachers.iter().map(|t| (t.id.as_str(), t)).collect();
    let subject_map: HashMap<&str, &Subject> =
        subjects.iter().rev().map(|s| (s.id.as_str(), s)).collect();

    let mut room_use: HashMap<(&str, Weekday, BlockId), &str> = HashMap::new();
    let mut group_use: HashMap<(&str, Weekday, BlockId), &str> = HashMap::new();

    for (owner, grid) in &timetable.schedules {
        let teacher = teacher_map.get(owner.as_str()).copied();
        let index = teacher.map(|t| AvailabilityIndex::build(t, &calendar));
        let mut per_subject: HashMap<&str, usize> = HashMap::new();
        let mut per_day: HashMap<(&str, Weekday), usize> = HashMap::new();

        for (day, block_id, a) in grid.cells() {
            let cell = format!("{day} block {block_id}");

            if a.teacher_id != *owner {
                violations.push(Violation::owner_mismatch(
                    owner.as_str(),
                    format!("{cell} of '{owner}' holds an assignment for '{}'", a.teacher_id),
                ));
            }

            match teacher {
                Some(t) if t.teaches(&a.subject_id) => {}
                _ => violations.push(Violation::unauthorized(
                    owner.as_str(),
                    format!("'{owner}' is not authorized for '{}' ({cell})", a.subject_id),
                )),
            }

            match calendar.block(block_id) {
                None => violations.push(Violation::unknown_block(
                    owner.as_str(),
                    format!("{cell} is not defined by the calendar"),
                )),
                Some(b) if !calendar.is_teaching(b) => violations.push(Violation::non_teaching(
                    owner.as_str(),
                    format!("{cell} is non-teaching ('{}')", b.label),
                )),
                Some(_) => {}
            }

            if !index.as_ref().is_some_and(|i| i.is_open(day, block_id)) {
                violations.push(Violation::unavailable(
                    owner.as_str(),
                    format!("'{owner}' is not available at {cell}"),
                ));
            }

            *per_subject.entry(a.subject_id.as_str()).or_insert(0) += 1;
            *per_day.entry((a.subject_id.as_str(), day)).or_insert(0) += 1;

            if let Some(room) = a.classroom.as_deref() {
                if let Some(other) = room_use.insert((room, day, block_id), owner.as_str()) {
                    violations.push(Violation::room_double_booked(
                        room,
                        format!("'{room}' used by '{other}' and '{owner}' at {cell}"),
                    ));
                }
            }
            let group_cell = (a.group_id.as_str(), day, block_id);
            if let Some(other) = group_use.insert(group_cell, owner.as_str()) {
                violations.push(Violation::group_clash(
                    a.group_id.as_str(),
                    format!(
                        "Group '{}' meets '{other}' and '{owner}' at {cell}",
                        a.group_id
                    ),
                ));
            }
        }

        for (subject_id, placed) in &per_subject {
            if let Some(s) = subject_map.get(subject_id) {
                if *placed > s.required_hours() as usize {
                    violations.push(Violation::hours_exceeded(
                        owner.as_str(),
                        format!(
                            "'{owner}' has {placed} blocks of '{subject_id}', required {}",
                            s.required_hours()
                        ),
                    ));
                }
            }
        }
        for ((subject_id, day), placed) in &per_day {
            if *placed > options.per_day_cap {
                violations.push(Violation::daily_cap_exceeded(
                    owner.as_str(),
                    format!(
                        "'{owner}' has {placed} blocks of '{subject_id}' on {day}, cap {}",
                        options.per_day_cap
                    ),
                ));
            }
        }
    }

    violations
}
