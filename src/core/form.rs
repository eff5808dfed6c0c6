use crate::core::calculator::QuoteCalculator;
use crate::core::format::{format_amount, format_date, format_total, INITIAL_TOTAL_LABEL};
use crate::domain::model::{CleaningType, QuoteInput, QuoteResult, QuoteSummary, ServiceCatalog};
use crate::domain::ports::QuoteExporter;
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// State of the quote form: raw field values plus the last computed result.
///
/// A failed calculation leaves `result` and `total_label` as they were.
#[derive(Debug, Clone)]
pub struct QuoteForm {
    catalog: &'static ServiceCatalog,
    pub area_text: String,
    pub target_date: NaiveDate,
    pub cleaning_type: Option<CleaningType>,
    selected_services: BTreeSet<String>,
    result: Option<QuoteResult>,
    total_label: String,
}

impl QuoteForm {
    /// Empty form with the date preset to `today` and the regular type selected.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            catalog: ServiceCatalog::standard(),
            area_text: String::new(),
            target_date: today,
            cleaning_type: Some(CleaningType::default()),
            selected_services: BTreeSet::new(),
            result: None,
            total_label: INITIAL_TOTAL_LABEL.to_string(),
        }
    }

    /// Toggles an add-on service. Returns whether it is now selected.
    pub fn toggle_service(&mut self, name: &str) -> bool {
        if self.selected_services.remove(name) {
            false
        } else {
            self.selected_services.insert(name.to_string());
            true
        }
    }

    pub fn set_service(&mut self, name: &str, selected: bool) {
        if selected {
            self.selected_services.insert(name.to_string());
        } else {
            self.selected_services.remove(name);
        }
    }

    pub fn selected_services(&self) -> impl Iterator<Item = &str> {
        self.selected_services.iter().map(String::as_str)
    }

    pub fn result(&self) -> Option<&QuoteResult> {
        self.result.as_ref()
    }

    pub fn total_label(&self) -> &str {
        &self.total_label
    }

    /// Builds the input from the current fields and recalculates.
    pub fn calculate(&mut self, today: NaiveDate) -> Result<&QuoteResult> {
        let input = QuoteInput::builder()
            .area_text(&self.area_text)?
            .maybe_cleaning_type(self.cleaning_type)
            .services(self.selected_services.iter().cloned())
            .target_date(self.target_date)
            .build(self.catalog, today)?;

        let result = QuoteCalculator::new(self.catalog).calculate(&input, today)?;
        self.total_label = format_total(result.total);
        Ok(&*self.result.insert(result))
    }

    pub fn summary(&self) -> QuoteSummary {
        QuoteSummary {
            area: self.area_text.trim().to_string(),
            cleaning_type: self
                .cleaning_type
                .map(|kind| kind.label().to_string())
                .unwrap_or_default(),
            date: format_date(self.target_date),
            total: self
                .result
                .as_ref()
                .map(|result| format_amount(result.total))
                .unwrap_or_else(|| format_amount(0.0)),
        }
    }

    pub fn export(&self, exporter: &dyn QuoteExporter) -> Result<PathBuf> {
        let summary = self.summary();
        let path = exporter.export(&summary)?;
        tracing::info!("Quote exported to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::QuoteError;
    use chrono::Duration;
    use std::cell::RefCell;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
    }

    #[derive(Default)]
    struct RecordingExporter {
        seen: RefCell<Vec<QuoteSummary>>,
    }

    impl QuoteExporter for RecordingExporter {
        fn export(&self, summary: &QuoteSummary) -> Result<PathBuf> {
            self.seen.borrow_mut().push(summary.clone());
            Ok(PathBuf::from("recorded.pdf"))
        }
    }

    #[test]
    fn test_new_form_defaults() {
        let form = QuoteForm::new(today());
        assert_eq!(form.cleaning_type, Some(CleaningType::Regular));
        assert_eq!(form.target_date, today());
        assert_eq!(form.total_label(), "Итого: 0 руб.");
        assert!(form.result().is_none());
    }

    #[test]
    fn test_calculate_updates_label() {
        let mut form = QuoteForm::new(today());
        form.area_text = "50".to_string();
        form.set_service("Мойка окон", true);

        let total = form.calculate(today()).unwrap().total;
        assert!((total - 5040.0).abs() < 1e-9);
        assert_eq!(form.total_label(), "Итого: 5040.00 руб.");
    }

    #[test]
    fn test_failed_calculation_keeps_previous_label() {
        let mut form = QuoteForm::new(today());
        form.area_text = "50".to_string();
        form.target_date = today() + Duration::days(40);
        form.calculate(today()).unwrap();
        assert_eq!(form.total_label(), "Итого: 2500.00 руб.");

        form.area_text = "-5".to_string();
        assert!(matches!(
            form.calculate(today()),
            Err(QuoteError::InvalidArea { .. })
        ));
        assert_eq!(form.total_label(), "Итого: 2500.00 руб.");
        assert_eq!(form.result().map(|r| r.total), Some(2500.0));

        form.area_text = "50".to_string();
        form.target_date = today() - Duration::days(1);
        assert!(matches!(
            form.calculate(today()),
            Err(QuoteError::PastDate { .. })
        ));
        assert_eq!(form.total_label(), "Итого: 2500.00 руб.");
    }

    #[test]
    fn test_missing_cleaning_type() {
        let mut form = QuoteForm::new(today());
        form.area_text = "10".to_string();
        form.cleaning_type = None;
        assert!(matches!(
            form.calculate(today()),
            Err(QuoteError::MissingCleaningTypeSelection)
        ));
    }

    #[test]
    fn test_toggle_service() {
        let mut form = QuoteForm::new(today());
        assert!(form.toggle_service("Эко уборка"));
        assert_eq!(form.selected_services().collect::<Vec<_>>(), vec!["Эко уборка"]);
        assert!(!form.toggle_service("Эко уборка"));
        assert_eq!(form.selected_services().count(), 0);
    }

    #[test]
    fn test_export_passes_formatted_summary() {
        let mut form = QuoteForm::new(today());
        form.area_text = " 42 ".to_string();
        form.cleaning_type = Some(CleaningType::General);
        form.target_date = today() + Duration::days(60);
        form.calculate(today()).unwrap();

        let exporter = RecordingExporter::default();
        let path = form.export(&exporter).unwrap();
        assert_eq!(path, PathBuf::from("recorded.pdf"));

        let seen = exporter.seen.borrow();
        assert_eq!(
            seen[0],
            QuoteSummary {
                area: "42".to_string(),
                cleaning_type: "Генеральный".to_string(),
                date: "01.11.2024".to_string(),
                total: "2940.00 руб.".to_string(),
            }
        );
    }
}
