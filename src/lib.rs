pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod export;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{QuoteApp, QuoteOutcome, QuoteRequest};
pub use config::TomlConfig;
pub use core::calculator::{compute_total, QuoteCalculator};
pub use core::form::QuoteForm;
pub use domain::model::{CleaningType, QuoteInput, QuoteResult, QuoteSummary, ServiceCatalog};
pub use export::PdfExporter;
pub use utils::error::{QuoteError, Result};
