use crate::domain::model::QuoteSummary;
use crate::utils::error::Result;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Writes a formatted quote somewhere and reports where it went.
pub trait QuoteExporter {
    fn export(&self, summary: &QuoteSummary) -> Result<PathBuf>;
}

/// Source of "today" for the late-booking surcharge.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
