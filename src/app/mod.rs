pub mod quote_app;

pub use quote_app::{QuoteApp, QuoteOutcome, QuoteRequest};
