//! Time source abstraction
//!
//! Services ask a [`Clock`] for "today" so that default dates and the
//! default summary month stay deterministic in tests.

use chrono::NaiveDate;

/// Clock abstracts access to the current calendar date
pub trait Clock {
    /// Returns the current local date
    fn today(&self) -> NaiveDate;
}

/// Real clock backed by the system's local time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
