//! Weekly school timetable engine.
//!
//! Assigns subject × group × teacher meetings to the time blocks of a weekly
//! calendar, honoring teacher availability, subject weekly hours and a
//! per-day cap, then exposes teacher and group views of the result.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Teacher`, `Subject`, `Group`, `Calendar`,
//!   `TimeBlock`, `Timetable`, `WeekGrid`, `Assignment`, `Violation`
//! - **`scheduler`**: Greedy first-fit generator, options, room picking, KPI
//! - **`projection`**: Teacher and group week views, hours per teacher
//! - **`validation`**: Configuration and input checks, timetable audits
//! - **`error`**: Error type returned by generation
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Calendar, Group, Subject, Teacher, Weekday};
//! use u_timetable::projection::{hours_by_teacher, project_for_group};
//! use u_timetable::{generate_timetable, SchedulerOptions};
//!
//! let calendar = Calendar::standard();
//! let teachers = vec![Teacher::new("T1")
//!     .with_subject("MATH")
//!     .with_available_range(Weekday::Monday, 0..4)
//!     .with_available_range(Weekday::Tuesday, 0..4)];
//! let subjects = vec![Subject::new("MATH").with_weekly_hours(3)];
//! let groups = vec![Group::new("1A").with_subject("MATH")];
//!
//! let timetable =
//!     generate_timetable(&teachers, &subjects, &groups, &calendar, &SchedulerOptions::default())
//!         .unwrap();
//!
//! assert_eq!(hours_by_teacher(&timetable)["T1"], 3);
//! assert_eq!(project_for_group(&timetable, "1A", &calendar).occupied_count(), 3);
//! ```

pub mod error;
pub mod models;
pub mod projection;
pub mod scheduler;
pub mod validation;

pub use error::{TimetableError, TimetableResult};
pub use scheduler::{generate_timetable, GreedyScheduler, SchedulerOptions};
