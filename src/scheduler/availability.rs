//! Per-teacher availability lookup.
//!
//! Resolves a teacher's stored availability keys against the calendar once,
//! then answers cell queries in O(1). Fail-closed: unknown keys, malformed
//! keys, and indices outside the calendar are all "unavailable".

use std::collections::HashSet;

use log::debug;

use crate::models::{BlockId, Calendar, Teacher, TimeBlock, WeekGrid, Weekday};

/// Open cells of one teacher, resolved to calendar block ids.
#[derive(Debug, Clone)]
pub struct AvailabilityIndex<'a> {
    calendar: &'a Calendar,
    open: HashSet<(Weekday, BlockId)>,
}

impl<'a> AvailabilityIndex<'a> {
    /// Builds the index for a teacher.
    pub fn build(teacher: &Teacher, calendar: &'a Calendar) -> Self {
        let mut open = HashSet::new();
        if teacher.availability.is_empty() {
            debug!("teacher {}: no availability declared", teacher.id);
            return Self { calendar, open };
        }

        let ordered = calendar.all_blocks_ordered();

        for (day, idx) in teacher.availability.open_cells() {
            match ordered.get(idx) {
                Some(block) => {
                    open.insert((day, block.id));
                }
                None => debug!(
                    "teacher {}: availability index {} on {} is outside the calendar",
                    teacher.id, idx, day
                ),
            }
        }

        let malformed = teacher.availability.malformed_keys().count();
        if malformed > 0 {
            debug!(
                "teacher {}: ignored {} malformed availability key(s)",
                teacher.id, malformed
            );
        }

        Self { calendar, open }
    }

    /// Whether the teacher declared the cell open.
    #[inline]
    pub fn is_open(&self, day: Weekday, block: BlockId) -> bool {
        self.open.contains(&(day, block))
    }

    /// Candidate blocks on `day`: teaching, open, and still free in `grid`.
    ///
    /// Keeps the order of `shift_blocks`.
    pub fn open_blocks_on(
        &self,
        day: Weekday,
        shift_blocks: &[&'a TimeBlock],
        grid: &WeekGrid,
    ) -> Vec<&'a TimeBlock> {
        shift_blocks
            .iter()
            .copied()
            .filter(|b| self.calendar.is_teaching(b))
            .filter(|b| self.is_open(day, b.id))
            .filter(|b| grid.is_free(day, b.id))
            .collect()
    }

    /// Number of open cells (teaching or not).
    pub fn open_cell_count(&self) -> usize {
        self.open.len()
    }

    /// Open cells that fall on teaching blocks of a calendar day.
    pub fn teaching_capacity(&self) -> usize {
        self.open
            .iter()
            .filter(|(day, id)| {
                self.calendar.weekdays.contains(day)
                    && self
                        .calendar
                        .block(*id)
                        .is_some_and(|b| self.calendar.is_teaching(b))
            })
            .count()
    }
}
