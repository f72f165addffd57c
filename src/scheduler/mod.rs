//! Timetable generation and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyScheduler` walks teachers in input order and, per subject, fills
//! the earliest open teaching blocks day by day, at most `per_day_cap` per
//! day. It never backtracks and never fails for lack of room; whatever does
//! not fit stays unplaced. Fast and predictable, not optimal.
//!
//! # KPI
//!
//! `TimetableKpi` computes hours per teacher, load ranking, per-subject
//! fulfilment and availability utilization.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

mod availability;
mod greedy;
mod kpi;
mod options;
mod rooms;

pub use availability::AvailabilityIndex;
pub use greedy::{generate_timetable, GreedyScheduler, TimetableRequest};
pub use kpi::{SubjectFulfillment, TimetableKpi};
pub use options::{RoomPolicy, SchedulerOptions, DEFAULT_PER_DAY_CAP};
pub use rooms::RoomPicker;
