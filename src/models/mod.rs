//! Timetable domain models.
//!
//! Plain data with invariants; behaviour lives in `sync`, `validation`
//! and `store`.
//!
//! # Domain Mappings
//!
//! | u-timetable | School office | Wire field |
//! |-------------|---------------|------------|
//! | Session | Lesson on the board | `sessions[]` |
//! | Instructor | Teacher | `instructors[]` |
//! | InstructorAssignment | Teaching duty | `instructors[].assignments[]` |
//! | Slot | Day × period cell | `assignedDay` / `assignedPeriod` |

mod availability;
mod day;
mod instructor;
mod schedule;
mod session;
mod settings;

pub use availability::Availability;
pub use day::{DayOfWeek, Period, Slot};
pub use instructor::{Instructor, InstructorAssignment};
pub use schedule::{ScheduleError, ScheduleErrorType, ScheduleState};
pub use session::Session;
pub use settings::{SchoolSettings, MAX_PERIODS_LIMIT};
