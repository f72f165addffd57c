//! Read-only views over a generated timetable.
//!
//! Display and export collaborators consume week grids keyed by
//! `(weekday, block)`. Teacher views are a lookup; group views are rebuilt on
//! every call by scanning all teacher grids. Nothing is cached.

use std::collections::BTreeMap;

use log::warn;

use crate::models::{BlockId, Calendar, Group, Timetable, WeekGrid, Weekday};

/// Week grid of one teacher, shaped to `calendar`.
///
/// Cells outside the calendar are dropped; an unknown teacher yields an
/// all-empty grid.
pub fn project_for_teacher(
    timetable: &Timetable,
    teacher_id: &str,
    calendar: &Calendar,
) -> WeekGrid {
    let mut grid = WeekGrid::empty(calendar);
    if let Some(source) = timetable.teacher(teacher_id) {
        for (day, block, a) in source.cells() {
            if in_calendar(calendar, day, block) {
                grid.set(day, block, a.clone());
            }
        }
    }
    grid
}

/// Week grid of one group, built from every teacher's cells whose
/// assignment belongs to `group_id`.
///
/// Cells outside the calendar are dropped. Teachers are scanned in id order;
/// a group clash (two teachers holding the group in one cell) cannot be
/// shown in a single grid, so the later teacher's assignment is kept and the
/// clash is logged.
pub fn project_for_group(timetable: &Timetable, group_id: &str, calendar: &Calendar) -> WeekGrid {
    let mut grid = WeekGrid::empty(calendar);
    for (_, day, block, a) in timetable.assignments() {
        if a.group_id != group_id || !in_calendar(calendar, day, block) {
            continue;
        }
        if let Some(prev) = grid.set(day, block, a.clone()) {
            warn!(
                "group {}: clash at {} block {} between {} and {}",
                group_id, day, block, prev.teacher_id, a.teacher_id
            );
        }
    }
    grid
}

fn in_calendar(calendar: &Calendar, day: Weekday, block: BlockId) -> bool {
    calendar.weekdays.contains(&day) && calendar.block(block).is_some()
}

/// Group grids for every group, keyed by group id.
pub fn project_all_groups(
    timetable: &Timetable,
    groups: &[Group],
    calendar: &Calendar,
) -> BTreeMap<String, WeekGrid> {
    groups
        .iter()
        .map(|g| (g.id.clone(), project_for_group(timetable, &g.id, calendar)))
        .collect()
}

/// Occupied cells per teacher (teaching load).
pub fn hours_by_teacher(timetable: &Timetable) -> BTreeMap<String, usize> {
    timetable
        .schedules
        .iter()
        .map(|(id, grid)| (id.clone(), grid.occupied_count()))
        .collect()
}
