//! Greedy first-fit timetable generator.
//!
//! # Algorithm
//!
//! 1. For each teacher, in input order, start from an empty week grid.
//! 2. For each subject in the teacher's list, in list order, resolve the
//!    subject and the group that takes it (lowest group id wins).
//! 3. Walk the weekdays in display order. On each day, collect the teaching
//!    blocks the teacher declared open and that are still free (for the
//!    teacher and, by default, for the group), and fill the first
//!    `min(open, remaining, per_day_cap)` of them.
//! 4. Hours that find no room are left unplaced. No error, no backtracking:
//!    earlier subjects may starve later ones.
//!
//! Deterministic for a given input order, options, and seed.
//!
//! # Complexity
//! O(t * s * d * b) where t=teachers, s=subjects/teacher, d=days, b=blocks.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, info, trace, warn};

use super::{AvailabilityIndex, RoomPicker, SchedulerOptions};
use crate::error::{TimetableError, TimetableResult};
use crate::models::{
    Assignment, BlockId, Calendar, Group, Subject, Teacher, TimeBlock, Timetable, WeekGrid,
    Weekday,
};
use crate::validation::{validate_calendar, validate_options};

/// Owned snapshot of everything one generation run reads.
///
/// Collaborators that keep pushing record updates hand the engine a
/// request built from their current lists; the run never sees later edits.
#[derive(Debug, Clone)]
pub struct TimetableRequest {
    /// Teachers, in processing order.
    pub teachers: Vec<Teacher>,
    /// Subject catalogue.
    pub subjects: Vec<Subject>,
    /// Student groups.
    pub groups: Vec<Group>,
    /// Weekly calendar.
    pub calendar: Calendar,
    /// Run options.
    pub options: SchedulerOptions,
}

impl TimetableRequest {
    /// Creates a request with default options.
    pub fn new(
        teachers: Vec<Teacher>,
        subjects: Vec<Subject>,
        groups: Vec<Group>,
        calendar: Calendar,
    ) -> Self {
        Self {
            teachers,
            subjects,
            groups,
            calendar,
            options: SchedulerOptions::default(),
        }
    }

    /// Sets the options.
    pub fn with_options(mut self, options: SchedulerOptions) -> Self {
        self.options = options;
        self
    }
}

/// Greedy first-fit timetable generator.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Calendar, Group, Subject, Teacher, Weekday};
/// use u_timetable::scheduler::GreedyScheduler;
///
/// let calendar = Calendar::standard();
/// let teachers = vec![
///     Teacher::new("T1")
///         .with_subject("S1")
///         .with_available_range(Weekday::Monday, 0..3),
/// ];
/// let subjects = vec![Subject::new("S1").with_weekly_hours(2)];
/// let groups = vec![Group::new("G1").with_subject("S1")];
///
/// let timetable = GreedyScheduler::new()
///     .generate(&teachers, &subjects, &groups, &calendar)
///     .unwrap();
/// assert_eq!(timetable.assignment_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    options: SchedulerOptions,
}

/// Per-run mutable state. Never shared between runs.
struct RunState<'a> {
    rooms: RoomPicker,
    group_busy: HashSet<(&'a str, Weekday, BlockId)>,
}

impl GreedyScheduler {
    /// Creates a generator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the options.
    pub fn with_options(mut self, options: SchedulerOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub fn options(&self) -> &SchedulerOptions {
        &self.options
    }

    /// Generates a timetable.
    ///
    /// # Errors
    /// [`TimetableError::InvalidOptions`] or [`TimetableError::InvalidCalendar`]
    /// when the configuration is unusable. Missing subjects or groups and
    /// unplaceable hours are not errors.
    pub fn generate(
        &self,
        teachers: &[Teacher],
        subjects: &[Subject],
        groups: &[Group],
        calendar: &Calendar,
    ) -> TimetableResult<Timetable> {
        let options = &self.options;
        validate_options(options).map_err(TimetableError::InvalidOptions)?;
        let calendar = options.apply_to(calendar);
        validate_calendar(&calendar).map_err(TimetableError::InvalidCalendar)?;

        info!(
            "generating timetable: {} teachers, {} subjects, {} groups, {} teaching cells/week",
            teachers.len(),
            subjects.len(),
            groups.len(),
            calendar.teaching_cells_per_week()
        );

        let mut subject_map: HashMap<&str, &Subject> = HashMap::new();
        for s in subjects {
            subject_map.entry(s.id.as_str()).or_insert(s);
        }
        let group_for_subject = resolve_groups(groups);
        let all_blocks = calendar.all_blocks_ordered();

        let mut state = RunState {
            rooms: RoomPicker::new(options.room_policy, options.room_pool.clone(), options.seed),
            group_busy: HashSet::new(),
        };
        let mut timetable = Timetable::new();

        for teacher in teachers {
            if timetable.teacher(&teacher.id).is_some() {
                warn!("teacher {}: duplicate id, later record ignored", teacher.id);
                continue;
            }

            let index = AvailabilityIndex::build(teacher, &calendar);
            let mut grid = WeekGrid::empty(&calendar);

            for subject_id in self.subject_order(teacher) {
                let Some(&subject) = subject_map.get(subject_id) else {
                    warn!("teacher {}: unknown subject {}, skipped", teacher.id, subject_id);
                    continue;
                };
                let Some(&group) = group_for_subject.get(subject_id) else {
                    warn!(
                        "teacher {}: no group takes subject {}, skipped",
                        teacher.id, subject_id
                    );
                    continue;
                };

                let candidates: Vec<&TimeBlock> = if options.restrict_to_group_shift {
                    calendar.blocks_for_shift(group.shift)
                } else {
                    all_blocks.clone()
                };

                let required = subject.required_hours() as usize;
                let placed = self.place_subject(
                    teacher,
                    subject,
                    group,
                    &calendar,
                    &candidates,
                    &index,
                    &mut grid,
                    &mut state,
                    required,
                );

                if placed < required {
                    debug!(
                        "teacher {}: subject {} placed {}/{} hours",
                        teacher.id, subject.id, placed, required
                    );
                }
            }

            timetable.insert(teacher.id.clone(), grid);
        }

        info!(
            "timetable generated: {} assignments across {} teachers",
            timetable.assignment_count(),
            timetable.teacher_count()
        );
        Ok(timetable)
    }

    /// Generates from a request, using the request's options.
    pub fn generate_request(request: &TimetableRequest) -> TimetableResult<Timetable> {
        Self::new().with_options(request.options.clone()).generate(
            &request.teachers,
            &request.subjects,
            &request.groups,
            &request.calendar,
        )
    }

    /// Subject ids in processing order.
    fn subject_order<'t>(&self, teacher: &'t Teacher) -> Vec<&'t str> {
        if !self.options.dedupe_subjects {
            return teacher.subject_ids.iter().map(String::as_str).collect();
        }
        let mut seen = HashSet::new();
        teacher
            .subject_ids
            .iter()
            .map(String::as_str)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Places up to `required` blocks of one subject; returns how many fit.
    #[allow(clippy::too_many_arguments)]
    fn place_subject<'a>(
        &self,
        teacher: &Teacher,
        subject: &Subject,
        group: &'a Group,
        calendar: &Calendar,
        candidates: &[&TimeBlock],
        index: &AvailabilityIndex<'_>,
        grid: &mut WeekGrid,
        state: &mut RunState<'a>,
        required: usize,
    ) -> usize {
        let options = &self.options;
        let mut remaining = required;

        for &day in &calendar.weekdays {
            if remaining == 0 {
                break;
            }

            let mut open = index.open_blocks_on(day, candidates, grid);
            if options.prevent_group_clashes {
                open.retain(|b| !state.group_busy.contains(&(group.id.as_str(), day, b.id)));
            }

            let day_room = options
                .max_hours_per_day
                .map_or(usize::MAX, |m| m.saturating_sub(grid.occupied_on(day)));
            let week_room = options
                .max_hours_per_week
                .map_or(usize::MAX, |m| m.saturating_sub(grid.occupied_count()));

            let take = open
                .len()
                .min(remaining)
                .min(options.per_day_cap)
                .min(day_room)
                .min(week_room);

            for block in open.iter().take(take) {
                let mut assignment = Assignment::new(&subject.id, &teacher.id, &group.id);
                assignment.classroom = state.rooms.pick(day, block.id);
                trace!(
                    "teacher {}: {} {} block {} -> subject {} group {} room {:?}",
                    teacher.id,
                    day,
                    block.label,
                    block.id,
                    subject.id,
                    group.id,
                    assignment.classroom
                );
                grid.set(day, block.id, assignment);
                state.group_busy.insert((group.id.as_str(), day, block.id));
            }
            remaining -= take;
        }

        required - remaining
    }
}

/// Generates a timetable with the given options.
///
/// Convenience wrapper around [`GreedyScheduler::generate`].
pub fn generate_timetable(
    teachers: &[Teacher],
    subjects: &[Subject],
    groups: &[Group],
    calendar: &Calendar,
    options: &SchedulerOptions,
) -> TimetableResult<Timetable> {
    GreedyScheduler::new()
        .with_options(options.clone())
        .generate(teachers, subjects, groups, calendar)
}

/// Maps each subject to the group that takes it, lowest group id first.
fn resolve_groups(groups: &[Group]) -> HashMap<&str, &Group> {
    let mut by_id: BTreeMap<&str, &Group> = BTreeMap::new();
    for g in groups {
        by_id.entry(g.id.as_str()).or_insert(g);
    }
    let mut map: HashMap<&str, &Group> = HashMap::new();
    for g in by_id.values() {
        for sid in &g.subject_ids {
            map.entry(sid.as_str()).or_insert(*g);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shift;
    use crate::scheduler::RoomPolicy;
    use crate::validation::check_timetable;

    /// Monday/Tuesday, four teaching blocks (ids 1-4), no breaks.
    fn four_block_calendar() -> Calendar {
        let times = [
            ("07:00", "07:50"),
            ("07:50", "08:40"),
            ("08:40", "09:30"),
            ("09:50", "10:40"),
        ];
        let mut cal = Calendar::new().with_weekdays([Weekday::Monday, Weekday::Tuesday]);
        for (i, (s, e)) in times.iter().enumerate() {
            let label = format!("Bloque {}", i + 1);
            cal = cal.with_block(TimeBlock::new(i as BlockId + 1, *s, *e, label));
        }
        cal
    }

    fn one_group(subjects: &[&str]) -> Vec<Group> {
        let mut g = Group::new("G1").with_name("1A");
        for s in subjects {
            g = g.with_subject(*s);
        }
        vec![g]
    }

    fn placed_blocks(tt: &Timetable, teacher: &str, day: Weekday) -> Vec<BlockId> {
        tt.teacher(teacher)
            .unwrap()
            .cells()
            .filter(|(d, _, _)| *d == day)
            .map(|(_, b, _)| b)
            .collect()
    }

    #[test]
    fn test_first_fit_with_daily_cap() {
        let cal = four_block_calendar();
        let teachers = vec![Teacher::new("T1")
            .with_subject("S1")
            .with_available_range(Weekday::Monday, 0..4)];
        let subjects = vec![Subject::new("S1").with_weekly_hours(3)];

        let tt = GreedyScheduler::new()
            .generate(&teachers, &subjects, &one_group(&["S1"]), &cal)
            .unwrap();

        // Cap of 2 on Monday, nothing open on Tuesday: third hour unplaced.
        assert_eq!(placed_blocks(&tt, "T1", Weekday::Monday), vec![1, 2]);
        assert_eq!(tt.assignment_count(), 2);
    }

    #[test]
    fn test_remaining_hour_rolls_to_next_day() {
        let cal = four_block_calendar();
        let teachers = vec![Teacher::new("T1")
            .with_subject("S1")
            .with_available_range(Weekday::Monday, 0..4)
            .with_available(Weekday::Tuesday, 2)];
        let subjects = vec![Subject::new("S1").with_weekly_hours(3)];

        let tt = GreedyScheduler::new()
            .generate(&teachers, &subjects, &one_group(&["S1"]), &cal)
            .unwrap();

        assert_eq!(placed_blocks(&tt, "T1", Weekday::Monday), vec![1, 2]);
        assert_eq!(placed_blocks(&tt, "T1", Weekday::Tuesday), vec![3]);
    }

    #[test]
    fn test_no_availability_gives_empty_grid() {
        let cal = Calendar::standard();
        let teachers = vec![Teacher::new("T1").with_subject("S1")];
        let subjects = vec![Subject::new("S1").with_weekly_hours(4)];

        let tt = GreedyScheduler::new()
            .generate(&teachers, &subjects, &one_group(&["S1"]), &cal)
            .unwrap();

        let grid = tt.teacher("T1").unwrap();
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.days.len(), 5);
        assert_eq!(grid.days[&Weekday::Monday].len(), 14);
    }

    #[test]
    fn test_hours_exceed_capacity() {
        let cal = four_block_calendar();
        let teachers = vec![Teacher::new("T1")
            .with_subject("S1")
            .with_available_range(Weekday::Monday, 0..4)
            .with_available_range(Weekday::Tuesday, 0..4)];
        let subjects = vec![Subject::new("S1").with_weekly_hours(10)];

        let tt = GreedyScheduler::new()
            .with_options(SchedulerOptions::new().with_per_day_cap(4))
            .generate(&teachers, &subjects, &one_group(&["S1"]), &cal)
            .unwrap();

        assert_eq!(tt.assignment_count(), 8);
    }

    #[test]
    fn test_default_weekly_hours() {
        let cal = four_block_calendar();
        let teachers = vec![Teacher::new("T1")
            .with_subject("S1")
            .with_available_range(Weekday::Monday, 0..4)
            .with_available_range(Weekday::Tuesday, 0..4)];
        let subjects = vec![Subject::new("S1")];

        let tt = GreedyScheduler::new()
            .generate(&teachers, &subjects, &one_group(&["S1"]), &cal)
            .unwrap();
        assert_eq!(tt.assignment_count(), 4);
    }

    #[test]
    fn test_breaks_never_used() {
        let cal = Calendar::standard();
        // Monday indices 0..9 cover blocks 1-9, including Receso (4) and Almuerzo (9).
        let teachers = vec![Teacher::new("T1")
            .with_subject("S1")
            .with_subject("S2")
            .with_subject("S3")
            .with_available_range(Weekday::Monday, 0..9)];
        let subjects = vec![
            Subject::new("S1").with_weekly_hours(2),
            Subject::new("S2").with_weekly_hours(2),
            Subject::new("S3").with_weekly_hours(4),
        ];
        let tt = GreedyScheduler::new()
            .generate(&teachers, &subjects, &one_group(&["S1", "S2", "S3"]), &cal)
            .unwrap();

        assert_eq!(placed_blocks(&tt, "T1", Weekday::Monday), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_earlier_subject_starves_later() {
        let cal = four_block_calendar();
        let teachers = vec![Teacher::new("T1")
            .with_subject("S1")
            .with_subject("S2")
            .with_available_range(Weekday::Monday, 0..2)];
        let subjects = vec![
            Subject::new("S1").with_weekly_hours(2),
            Subject::new("S2").with_weekly_hours(2),
        ];
        let tt = GreedyScheduler::new()
            .generate(&teachers, &subjects, &one_group(&["S1", "S2"]), &cal)
            .unwrap();

        let grid = tt.teacher("T1").unwrap();
        assert_eq!(grid.subject_hours("S1"), 2);
        assert_eq!(grid.subject_hours("S2"), 0);
    }

    #[test]
    fn test_unknown_subject_and_missing_group_skipped() {
        let cal = four_block_calendar();
        let teachers = vec![Teacher::new("T1")
            .with_subject("GHOST")
            .with_subject("ORPHAN")
            .with_subject("S1")
            .with_available_range(Weekday::Monday, 0..4)];
        let subjects = vec![
            Subject::new("ORPHAN").with_weekly_hours(2),
            Subject::new("S1").with_weekly_hours(2),
        ];
        let tt = GreedyScheduler::new()
            .generate(&teachers, &subjects, &one_group(&["S1"]), &cal)
            .unwrap();

        let grid = tt.teacher("T1").unwrap();
        assert_eq!(grid.subject_hours("ORPHAN"), 0);
        assert_eq!(placed_blocks(&tt, "T1", Weekday::Monday), vec![1, 2]);
    }

    #[test]
    fn test_lowest_group_id_wins() {
        let cal = four_block_calendar();
        let teachers = vec![Teacher::new("T1")
            .with_subject("S1")
            .with_available_range(Weekday::Monday, 0..4)];
        let subjects = vec![Subject::new("S1").with_weekly_hours(1)];
        let groups = vec![
            Group::new("G2").with_subject("S1"),
            Group::new("G1").with_subject("S1"),
        ];
        let tt = GreedyScheduler::new()
            .generate(&teachers, &subjects, &groups, &cal)
            .unwrap();

        let a = tt.teacher("T1").unwrap().get(Weekday::Monday, 1).unwrap();
        assert_eq!(a.group_id, "G1");
    }

    #[test]
    fn test_duplicate_subjects_deduped_by_default() {
        let cal = four_block_calendar();
        let teacher = Teacher::new("T1")
            .with_subject("S1")
            .with_subject("S1")
            .with_available_range(Weekday::Monday, 0..4);
        let subjects = vec![Subject::new("S1").with_weekly_hours(2)];
        let groups = one_group(&["S1"]);

        let tt = GreedyScheduler::new()
            .generate(&[teacher.clone()], &subjects, &groups, &cal)
            .unwrap();
        assert_eq!(tt.assignment_count(), 2);

        let legacy = GreedyScheduler::new()
            .with_options(SchedulerOptions::new().with_dedupe_subjects(false))
            .generate(&[teacher], &subjects, &groups, &cal)
            .unwrap();
        assert_eq!(legacy.assignment_count(), 4);
    }

    #[test]
    fn test_duplicate_teacher_keeps_first() {
        let cal = four_block_calendar();
        let teachers = vec![
            Teacher::new("T1").with_subject("S1").with_available(Weekday::Monday, 0),
            Teacher::new("T1").with_subject("S1").with_available(Weekday::Tuesday, 0),
        ];
        let subjects = vec![Subject::new("S1").with_weekly_hours(1)];
        let tt = GreedyScheduler::new()
            .generate(&teachers, &subjects, &one_group(&["S1"]), &cal)
            .unwrap();
        assert_eq!(tt.teacher_count(), 1);
        assert_eq!(placed_blocks(&tt, "T1", Weekday::Monday), vec![1]);
    }

    #[test]
    fn test_group_shift_restriction() {
        let cal = Calendar::standard();
        // Open on every Monday block (global 0..14).
        let teachers = vec![Teacher::new("T1")
            .with_subject("S1")
            .with_available_range(Weekday::Monday, 0..14)];
        let subjects = vec![Subject::new("S1").with_weekly_hours(2)];
        let groups = vec![Group::new("G1").with_shift(Shift::Afternoon).with_subject("S1")];

        let tt = GreedyScheduler::new()
            .with_options(SchedulerOptions::new().with_group_shift_restriction(true))
            .generate(&teachers, &subjects, &groups, &cal)
            .unwrap();
        assert_eq!(placed_blocks(&tt, "T1", Weekday::Monday), vec![10, 11]);
    }

    #[test]
    fn test_group_clash_prevention() {
        let cal = four_block_calendar();
        let teachers = vec![
            Teacher::new("T1").with_subject("S1").with_available_range(Weekday::Monday, 0..2),
            Teacher::new("T2").with_subject("S2").with_available_range(Weekday::Monday, 0..4),
        ];
        let subjects = vec![
            Subject::new("S1").with_weekly_hours(2),
            Subject::new("S2").with_weekly_hours(2),
        ];
        let groups = one_group(&["S1", "S2"]);

        let tt = GreedyScheduler::new()
            .generate(&teachers, &subjects, &groups, &cal)
            .unwrap();
        assert_eq!(placed_blocks(&tt, "T2", Weekday::Monday), vec![3, 4]);

        let clashing = GreedyScheduler::new()
            .with_options(SchedulerOptions::new().with_group_clash_prevention(false))
            .generate(&teachers, &subjects, &groups, &cal)
            .unwrap();
        assert_eq!(placed_blocks(&clashing, "T2", Weekday::Monday), vec![1, 2]);
    }

    #[test]
    fn test_teacher_daily_and_weekly_ceilings() {
        let cal = four_block_calendar();
        let teachers = vec![Teacher::new("T1")
            .with_subject("S1")
            .with_subject("S2")
            .with_available_range(Weekday::Monday, 0..4)
            .with_available_range(Weekday::Tuesday, 0..4)];
        let subjects = vec![
            Subject::new("S1").with_weekly_hours(4),
            Subject::new("S2").with_weekly_hours(4),
        ];
        let groups = one_group(&["S1", "S2"]);

        let daily = GreedyScheduler::new()
            .with_options(SchedulerOptions::new().with_max_hours_per_day(3))
            .generate(&teachers, &subjects, &groups, &cal)
            .unwrap();
        let grid = daily.teacher("T1").unwrap();
        assert_eq!(grid.occupied_on(Weekday::Monday), 3);
        assert_eq!(grid.occupied_on(Weekday::Tuesday), 3);

        let weekly = GreedyScheduler::new()
            .with_options(SchedulerOptions::new().with_max_hours_per_week(5))
            .generate(&teachers, &subjects, &groups, &cal)
            .unwrap();
        assert_eq!(weekly.assignment_count(), 5);
    }

    #[test]
    fn test_conflict_free_rooms() {
        let cal = four_block_calendar();
        let teachers: Vec<Teacher> = (1..=3)
            .map(|i| {
                Teacher::new(format!("T{i}"))
                    .with_subject(format!("S{i}"))
                    .with_available(Weekday::Monday, 0)
            })
            .collect();
        let subjects: Vec<Subject> = (1..=3)
            .map(|i| Subject::new(format!("S{i}")).with_weekly_hours(1))
            .collect();
        let groups: Vec<Group> = (1..=3)
            .map(|i| Group::new(format!("G{i}")).with_subject(format!("S{i}")))
            .collect();
        let options = SchedulerOptions::new()
            .with_room_policy(RoomPolicy::ConflictFree)
            .with_room_pool(["Aula 1", "Aula 2"]);

        let tt = generate_timetable(&teachers, &subjects, &groups, &cal, &options).unwrap();
        let rooms: Vec<Option<String>> = ["T1", "T2", "T3"]
            .iter()
            .map(|t| {
                let grid = tt.teacher(t).unwrap();
                grid.get(Weekday::Monday, 1).unwrap().classroom.clone()
            })
            .collect();
        assert_eq!(
            rooms,
            vec![Some("Aula 1".to_string()), Some("Aula 2".to_string()), None]
        );
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let teachers = vec![Teacher::new("T1")];
        let err = GreedyScheduler::new()
            .generate(&teachers, &[], &[], &Calendar::new())
            .unwrap_err();
        assert!(matches!(err, TimetableError::InvalidCalendar(_)));

        let err = GreedyScheduler::new()
            .with_options(SchedulerOptions::new().with_per_day_cap(0))
            .generate(&teachers, &[], &[], &Calendar::standard())
            .unwrap_err();
        assert!(matches!(err, TimetableError::InvalidOptions(_)));
        assert!(err.to_string().contains("per_day_cap"));
    }

    #[test]
    fn test_option_labels_override_calendar() {
        let cal = four_block_calendar();
        let teachers = vec![Teacher::new("T1")
            .with_subject("S1")
            .with_available_range(Weekday::Monday, 0..4)];
        let subjects = vec![Subject::new("S1").with_weekly_hours(2)];
        let options = SchedulerOptions::new().with_non_teaching_labels(["Bloque 1"]);

        let groups = one_group(&["S1"]);
        let tt = generate_timetable(&teachers, &subjects, &groups, &cal, &options).unwrap();
        assert_eq!(placed_blocks(&tt, "T1", Weekday::Monday), vec![2, 3]);
    }

    #[test]
    fn test_calendar_labels_honored_by_default() {
        let cal = Calendar::new()
            .with_weekday(Weekday::Monday)
            .with_block(TimeBlock::new(1, "07:00", "07:20", "Break"))
            .with_block(TimeBlock::new(2, "07:20", "08:10", "B2"))
            .with_non_teaching_labels(["Break"]);
        let teachers = vec![Teacher::new("T1")
            .with_subject("S1")
            .with_available_range(Weekday::Monday, 0..2)];
        let subjects = vec![Subject::new("S1").with_weekly_hours(2)];
        let options = SchedulerOptions::default();

        let tt = generate_timetable(&teachers, &subjects, &one_group(&["S1"]), &cal, &options)
            .unwrap();
        assert!(tt.teacher("T1").unwrap().is_free(Weekday::Monday, 1));
        assert_eq!(placed_blocks(&tt, "T1", Weekday::Monday), vec![2]);
        assert!(check_timetable(&tt, &teachers, &subjects, &cal, &options).is_empty());
    }

    fn school_fixture() -> (Vec<Teacher>, Vec<Subject>, Vec<Group>) {
        let subjects: Vec<Subject> = (1..=8)
            .map(|i| Subject::new(format!("S{i}")).with_weekly_hours(2 + (i % 3)))
            .collect();
        let groups = vec![
            Group::new("G1").with_subject("S1").with_subject("S2").with_subject("S3"),
            Group::new("G2").with_subject("S4").with_subject("S5"),
            Group::new("G3")
                .with_shift(Shift::Afternoon)
                .with_subject("S6")
                .with_subject("S7")
                .with_subject("S8"),
        ];
        let mut teachers = Vec::new();
        for t in 0..5usize {
            let mut teacher = Teacher::new(format!("T{t}"));
            for s in 0..3usize {
                teacher = teacher.with_subject(format!("S{}", (t + s * 2) % 8 + 1));
            }
            for (d, day) in Weekday::WORK_WEEK.iter().enumerate() {
                let offset = (t + d) % 4;
                teacher = teacher.with_available_range(*day, offset..offset + 7);
            }
            teachers.push(teacher);
        }
        (teachers, subjects, groups)
    }

    #[test]
    fn test_properties_hold_on_fixture() {
        let cal = Calendar::standard();
        let (teachers, subjects, groups) = school_fixture();
        let options = SchedulerOptions::new()
            .with_room_policy(RoomPolicy::ConflictFree)
            .with_room_pool(["Aula 1", "Aula 2", "Aula 3", "Aula 4", "Aula 5"])
            .with_group_clash_prevention(true);

        let tt = generate_timetable(&teachers, &subjects, &groups, &cal, &options).unwrap();
        assert!(tt.assignment_count() > 0);
        let violations = check_timetable(&tt, &teachers, &subjects, &cal, &options);
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn test_deterministic() {
        let cal = Calendar::standard();
        let (teachers, subjects, groups) = school_fixture();
        let options = SchedulerOptions::new().with_seed(7);

        let a = generate_timetable(&teachers, &subjects, &groups, &cal, &options).unwrap();
        let b = generate_timetable(&teachers, &subjects, &groups, &cal, &options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_request_snapshot() {
        let (teachers, subjects, groups) = school_fixture();
        let request = TimetableRequest::new(
            teachers.clone(),
            subjects.clone(),
            groups.clone(),
            Calendar::standard(),
        )
        .with_options(SchedulerOptions::new().with_seed(3));
        let from_request = GreedyScheduler::generate_request(&request).unwrap();

        let direct = GreedyScheduler::new()
            .with_options(SchedulerOptions::new().with_seed(3))
            .generate(&teachers, &subjects, &groups, &Calendar::standard())
            .unwrap();
        assert_eq!(from_request, direct);
    }
}
