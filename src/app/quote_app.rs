use crate::config::TomlConfig;
use crate::core::form::QuoteForm;
use crate::core::input::{parse_area, parse_date};
use crate::domain::model::{CleaningType, QuoteResult};
use crate::domain::ports::{Clock, QuoteExporter};
use crate::export::PdfExporter;
use crate::utils::error::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

/// Raw values as typed by the user, before any validation.
#[derive(Debug, Clone, Default)]
pub struct QuoteRequest {
    pub area: String,
    pub cleaning_type: Option<String>,
    pub services: Vec<String>,
    pub date: Option<String>,
    pub export: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteOutcome {
    #[serde(flatten)]
    pub result: QuoteResult,
    pub label: String,
    pub exported_to: Option<PathBuf>,
}

/// Fills the form from a request, calculates, and optionally exports.
pub struct QuoteApp<C: Clock> {
    config: TomlConfig,
    clock: C,
}

impl<C: Clock> QuoteApp<C> {
    pub fn new(config: TomlConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn run(&self, request: &QuoteRequest) -> Result<QuoteOutcome> {
        let exporter = PdfExporter::from_config(&self.config.export);
        self.run_with_exporter(request, &exporter)
    }

    pub fn run_with_exporter(
        &self,
        request: &QuoteRequest,
        exporter: &dyn QuoteExporter,
    ) -> Result<QuoteOutcome> {
        let today = self.clock.today();
        let mut form = self.fill_form(request, today)?;

        let result = form.calculate(today)?.clone();
        tracing::info!(
            total = result.total,
            surcharge = result.surcharge,
            delta_days = result.delta_days,
            "Quote calculated"
        );

        let exported_to = if request.export {
            Some(form.export(exporter)?)
        } else {
            None
        };

        Ok(QuoteOutcome {
            result,
            label: form.total_label().to_string(),
            exported_to,
        })
    }

    fn fill_form(&self, request: &QuoteRequest, today: NaiveDate) -> Result<QuoteForm> {
        // Area is reported before any other field.
        parse_area(&request.area)?;

        let mut form = QuoteForm::new(today);
        form.area_text = request.area.clone();

        form.cleaning_type = match request.cleaning_type.as_deref() {
            Some(value) if !value.trim().is_empty() => Some(value.parse::<CleaningType>()?),
            _ => None,
        };

        for service in &request.services {
            form.set_service(service, true);
        }

        if let Some(date) = request.date.as_deref() {
            form.target_date = parse_date(date)?;
        }

        Ok(form)
    }
}
