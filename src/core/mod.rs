pub mod calculator;
pub mod form;
pub mod format;
pub mod input;

pub use crate::domain::model::{CleaningType, QuoteInput, QuoteResult, QuoteSummary, ServiceCatalog};
pub use crate::domain::ports::{Clock, FixedClock, QuoteExporter, SystemClock};
pub use crate::utils::error::Result;
