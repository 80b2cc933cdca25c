//! Calendar clock abstraction.
//!
//! "Today" is an input to the domain service, not an ambient system call,
//! so date-defaulting behavior stays testable.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// The current calendar date (no time-of-day component).
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation using the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
