//! Timetable quality metrics (KPIs).
//!
//! Completeness is a quality metric, not an invariant: the engine accepts
//! shortfalls silently, and this module is where they show up.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Hours by teacher | Occupied cells per teacher |
//! | Load ranking | Teachers by ascending hours (ties by id) |
//! | Fulfillment | Placed / required hours per (teacher, subject) |
//! | Fulfillment rate | Total placed / total required |
//! | Utilization | Placed / open teaching cells, per teacher |

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::{Calendar, Subject, Teacher, Timetable};
use crate::projection::hours_by_teacher;
use crate::scheduler::{AvailabilityIndex, SchedulerOptions};

/// Required vs placed hours for one teacher-subject pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectFulfillment {
    pub teacher_id: String,
    pub subject_id: String,
    pub required: usize,
    pub placed: usize,
}

impl SubjectFulfillment {
    /// Hours left unplaced.
    #[inline]
    pub fn shortfall(&self) -> usize {
        self.required.saturating_sub(self.placed)
    }

    /// Whether every required hour was placed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.placed >= self.required
    }
}

/// Timetable performance indicators.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Placed hours per teacher.
    pub hours_by_teacher: BTreeMap<String, usize>,
    /// Teachers sorted by ascending placed hours, ties by id.
    pub load_ranking: Vec<(String, usize)>,
    /// One entry per known subject in each teacher's list.
    pub fulfillment: Vec<SubjectFulfillment>,
    /// Sum of placed hours over all entries of `fulfillment`.
    pub placed_hours: usize,
    /// Sum of required hours over all entries of `fulfillment`.
    pub required_hours: usize,
    /// placed / required (1.0 when nothing is required).
    pub fulfillment_rate: f64,
    /// Per-teacher placed / open teaching cells (0.0 with no open cells).
    pub utilization_by_teacher: BTreeMap<String, f64>,
}

impl TimetableKpi {
    /// Computes KPIs for a timetable.
    ///
    /// # Arguments
    /// * `timetable` - The generated timetable.
    /// * `teachers` - Teachers (subject lists and availability).
    /// * `subjects` - Subject catalogue (required hours).
    /// * `calendar` - Calendar the timetable was generated against.
    /// * `options` - Options of the run; their label override decides which
    ///   open cells count as teaching capacity.
    pub fn calculate(
        timetable: &Timetable,
        teachers: &[Teacher],
        subjects: &[Subject],
        calendar: &Calendar,
        options: &SchedulerOptions,
    ) -> Self {
        let calendar = options.apply_to(calendar);
        let hours = hours_by_teacher(timetable);

        let mut load_ranking: Vec<(String, usize)> =
            hours.iter().map(|(id, h)| (id.clone(), *h)).collect();
        load_ranking.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let mut subject_map: HashMap<&str, &Subject> = HashMap::new();
        for s in subjects {
            subject_map.entry(s.id.as_str()).or_insert(s);
        }

        let mut fulfillment = Vec::new();
        let mut utilization_by_teacher = BTreeMap::new();
        let mut seen_teachers = HashSet::new();

        for teacher in teachers {
            if !seen_teachers.insert(teacher.id.as_str()) {
                continue;
            }
            let grid = timetable.teacher(&teacher.id);

            let mut seen = HashSet::new();
            for sid in &teacher.subject_ids {
                if !seen.insert(sid.as_str()) {
                    continue;
                }
                let Some(subject) = subject_map.get(sid.as_str()) else {
                    continue;
                };
                fulfillment.push(SubjectFulfillment {
                    teacher_id: teacher.id.clone(),
                    subject_id: sid.clone(),
                    required: subject.required_hours() as usize,
                    placed: grid.map_or(0, |g| g.subject_hours(sid)),
                });
            }

            let capacity = AvailabilityIndex::build(teacher, &calendar).teaching_capacity();
            let placed = hours.get(&teacher.id).copied().unwrap_or(0);
            let util = if capacity == 0 {
                0.0
            } else {
                placed as f64 / capacity as f64
            };
            utilization_by_teacher.insert(teacher.id.clone(), util);
        }

        let placed_hours: usize = fulfillment.iter().map(|f| f.placed.min(f.required)).sum();
        let required_hours: usize = fulfillment.iter().map(|f| f.required).sum();
        let fulfillment_rate = if required_hours == 0 {
            1.0
        } else {
            placed_hours as f64 / required_hours as f64
        };

        Self {
            hours_by_teacher: hours,
            load_ranking,
            fulfillment,
            placed_hours,
            required_hours,
            fulfillment_rate,
            utilization_by_teacher,
        }
    }

    /// Hours left unplaced across all pairs.
    pub fn unfulfilled_hours(&self) -> usize {
        self.fulfillment.iter().map(SubjectFulfillment::shortfall).sum()
    }

    /// Pairs with unplaced hours.
    pub fn incomplete(&self) -> impl Iterator<Item = &SubjectFulfillment> {
        self.fulfillment.iter().filter(|f| !f.is_complete())
    }

    /// Whether the timetable places at least `min_rate` of required hours.
    pub fn meets_threshold(&self, min_rate: f64) -> bool {
        self.fulfillment_rate >= min_rate
    }
}
