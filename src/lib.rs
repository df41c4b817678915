//! Credit-weighted GPA calculation for academic course records.
//!
//! The crate exposes a small data model ([`Subject`], [`ExistingGpa`]), a
//! structural validator for untyped subject data, two pure reducers over a
//! subject list, and the static [`MAJORS`] catalog. All inputs are supplied
//! by the caller in memory; nothing here performs I/O.

mod calculator;
mod major;
mod subject;

pub use calculator::{calculate_total_credits, calculate_weighted_average, validate_subject_data};
pub use major::{Major, MAJORS};
pub use subject::{ExistingGpa, Subject};
