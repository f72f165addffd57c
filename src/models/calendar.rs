//! Weekly calendar model.
//!
//! Defines the ordered weekdays of a school week and the ordered time
//! blocks of a school day. Blocks are partitioned into shifts (morning /
//! afternoon) and some of them are non-teaching (break, lunch).
//!
//! # Block Order
//! The canonical block order is morning blocks followed by afternoon blocks,
//! each in declaration order. The position of a block in that sequence is its
//! *global index*, used to address availability cells across shifts.
//!
//! # Shift Resolution
//! An explicit `TimeBlock::shift` tag wins. Otherwise a block is afternoon iff
//! its declaration position is at or after `Calendar::afternoon_from`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Block identifier.
pub type BlockId = u32;

/// Labels treated as non-teaching when nothing else is configured.
pub const DEFAULT_NON_TEACHING_LABELS: [&str; 2] = ["Receso", "Almuerzo"];

/// A day of the school week.
///
/// Ordering follows the display order (Monday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Monday through Friday.
    pub const WORK_WEEK: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Fixed day index (Monday = 0). Used in availability keys.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Weekday::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Monday),
            1 => Some(Self::Tuesday),
            2 => Some(Self::Wednesday),
            3 => Some(Self::Thursday),
            4 => Some(Self::Friday),
            5 => Some(Self::Saturday),
            _ => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        };
        f.write_str(name)
    }
}

/// Partition of the daily block sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    #[default]
    Morning,
    Afternoon,
}

/// A fixed time interval of the school day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Unique block identifier.
    pub id: BlockId,
    /// Start time, `HH:MM`.
    pub start: String,
    /// End time, `HH:MM`.
    pub end: String,
    /// Display label (e.g. "Bloque 1", "Receso").
    pub label: String,
    /// Explicit shift tag. `None` = resolved by the calendar split index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<Shift>,
}

impl TimeBlock {
    /// Creates an untagged block.
    pub fn new(
        id: BlockId,
        start: impl Into<String>,
        end: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            start: start.into(),
            end: end.into(),
            label: label.into(),
            shift: None,
        }
    }

    /// Tags the block with an explicit shift.
    pub fn with_shift(mut self, shift: Shift) -> Self {
        self.shift = Some(shift);
        self
    }

    /// Start as minutes after midnight. `None` if malformed.
    pub fn start_minutes(&self) -> Option<u32> {
        parse_hhmm(&self.start)
    }

    /// End as minutes after midnight. `None` if malformed.
    pub fn end_minutes(&self) -> Option<u32> {
        parse_hhmm(&self.end)
    }

    /// Block length in minutes. `None` if either bound is malformed
    /// or the block does not move forward in time.
    pub fn duration_minutes(&self) -> Option<u32> {
        let (s, e) = (self.start_minutes()?, self.end_minutes()?);
        e.checked_sub(s).filter(|d| *d > 0)
    }
}

/// Parses `HH:MM` (24h) into minutes after midnight.
pub(crate) fn parse_hhmm(s: &str) -> Option<u32> {
    let (h, m) = s.trim().split_once(':')?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return None;
    }
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// The weekly calendar: days, blocks, shift split, and non-teaching labels.
///
/// Pure lookup structure; it never changes during a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// Days in display order.
    pub weekdays: Vec<Weekday>,
    /// Blocks in declaration order.
    pub blocks: Vec<TimeBlock>,
    /// Declaration position of the first afternoon block (untagged blocks only).
    #[serde(default)]
    pub afternoon_from: Option<usize>,
    /// Labels marking a block as non-teaching.
    #[serde(default = "default_non_teaching_labels")]
    pub non_teaching_labels: BTreeSet<String>,
}

pub(crate) fn default_non_teaching_labels() -> BTreeSet<String> {
    DEFAULT_NON_TEACHING_LABELS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Calendar {
    /// Creates an empty calendar with the default non-teaching labels.
    pub fn new() -> Self {
        Self {
            weekdays: Vec::new(),
            blocks: Vec::new(),
            afternoon_from: None,
            non_teaching_labels: default_non_teaching_labels(),
        }
    }

    /// The stock Monday-Friday calendar with fourteen blocks.
    ///
    /// 07:00-13:10 morning (with "Receso" at 09:30), "Almuerzo" at 13:10,
    /// 14:00-18:10 afternoon.
    pub fn standard() -> Self {
        let rows: [(&str, &str, &str); 14] = [
            ("07:00", "07:50", "Bloque 1"),
            ("07:50", "08:40", "Bloque 2"),
            ("08:40", "09:30", "Bloque 3"),
            ("09:30", "09:50", "Receso"),
            ("09:50", "10:40", "Bloque 4"),
            ("10:40", "11:30", "Bloque 5"),
            ("11:30", "12:20", "Bloque 6"),
            ("12:20", "13:10", "Bloque 7"),
            ("13:10", "14:00", "Almuerzo"),
            ("14:00", "14:50", "Bloque 8"),
            ("14:50", "15:40", "Bloque 9"),
            ("15:40", "16:30", "Bloque 10"),
            ("16:30", "17:20", "Bloque 11"),
            ("17:20", "18:10", "Bloque 12"),
        ];
        let mut cal = Self::new().with_afternoon_from(9);
        cal.weekdays = Weekday::WORK_WEEK.to_vec();
        for (i, (start, end, label)) in rows.iter().enumerate() {
            cal.blocks
                .push(TimeBlock::new(i as BlockId + 1, *start, *end, *label));
        }
        cal
    }

    /// Appends a weekday.
    pub fn with_weekday(mut self, day: Weekday) -> Self {
        self.weekdays.push(day);
        self
    }

    /// Replaces the weekday list.
    pub fn with_weekdays(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.weekdays = days.into_iter().collect();
        self
    }

    /// Appends a block.
    pub fn with_block(mut self, block: TimeBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Sets the declaration position where the afternoon starts.
    pub fn with_afternoon_from(mut self, position: usize) -> Self {
        self.afternoon_from = Some(position);
        self
    }

    /// Replaces the non-teaching label set.
    pub fn with_non_teaching_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.non_teaching_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Finds a block by id.
    pub fn block(&self, id: BlockId) -> Option<&TimeBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Whether a block receives class meetings.
    #[inline]
    pub fn is_teaching(&self, block: &TimeBlock) -> bool {
        !self.non_teaching_labels.contains(&block.label)
    }

    /// Shift of the block at declaration position `position`.
    fn shift_at(&self, position: usize) -> Shift {
        let block = &self.blocks[position];
        if let Some(shift) = block.shift {
            return shift;
        }
        match self.afternoon_from {
            Some(split) if position >= split => Shift::Afternoon,
            _ => Shift::Morning,
        }
    }

    /// Shift of a block, if it belongs to this calendar.
    pub fn shift_of(&self, id: BlockId) -> Option<Shift> {
        self.blocks
            .iter()
            .position(|b| b.id == id)
            .map(|pos| self.shift_at(pos))
    }

    /// Blocks of one shift in declaration order.
    pub fn blocks_for_shift(&self, shift: Shift) -> Vec<&TimeBlock> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(pos, _)| self.shift_at(*pos) == shift)
            .map(|(_, b)| b)
            .collect()
    }

    /// All blocks, morning first, then afternoon.
    pub fn all_blocks_ordered(&self) -> Vec<&TimeBlock> {
        let mut all = self.blocks_for_shift(Shift::Morning);
        all.extend(self.blocks_for_shift(Shift::Afternoon));
        all
    }

    /// Teaching blocks in global order.
    pub fn teaching_blocks(&self) -> Vec<&TimeBlock> {
        self.all_blocks_ordered()
            .into_iter()
            .filter(|b| self.is_teaching(b))
            .collect()
    }

    /// Position of a block in [`Calendar::all_blocks_ordered`].
    pub fn global_index(&self, id: BlockId) -> Option<usize> {
        self.all_blocks_ordered().iter().position(|b| b.id == id)
    }

    /// Number of teaching cells in one week.
    pub fn teaching_cells_per_week(&self) -> usize {
        self.weekdays.len() * self.teaching_blocks().len()
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}
