//! Timetabling domain models.
//!
//! Provides the input records (teachers, subjects, groups), the weekly
//! calendar they are scheduled against, and the produced timetable.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | Training centre |
//! |-------------|--------|-----------------|
//! | Teacher | Profesor | Instructor |
//! | Subject | Materia | Course |
//! | Group | Grupo | Cohort |
//! | TimeBlock | Bloque | Session slot |
//! | Timetable | Horario | Weekly plan |

mod calendar;
mod group;
mod subject;
mod teacher;
mod timetable;

pub use calendar::{BlockId, Calendar, Shift, TimeBlock, Weekday, DEFAULT_NON_TEACHING_LABELS};
pub(crate) use calendar::parse_hhmm;
pub use group::Group;
pub use subject::{Subject, DEFAULT_WEEKLY_HOURS};
pub use teacher::{Availability, EmploymentType, Teacher};
pub use timetable::{Assignment, Timetable, Violation, ViolationType, WeekGrid};
