use crate::core::format::DATE_DISPLAY_FORMAT;
use crate::domain::model::{CleaningType, QuoteInput, ServiceCatalog};
use crate::utils::error::{QuoteError, Result};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Parses the free-text area field. Accepts a decimal comma.
pub fn parse_area(text: &str) -> Result<f64> {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(area) if area.is_finite() && area > 0.0 => Ok(area),
        _ => Err(QuoteError::InvalidArea {
            value: text.to_string(),
        }),
    }
}

/// Parses `dd.mm.yyyy` or ISO `yyyy-mm-dd`.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, DATE_DISPLAY_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map_err(|_| QuoteError::InvalidDate {
            value: text.to_string(),
        })
}

#[derive(Debug, Clone, Default)]
pub struct QuoteInputBuilder {
    area: Option<f64>,
    cleaning_type: Option<CleaningType>,
    services: BTreeSet<String>,
    target_date: Option<NaiveDate>,
}

impl QuoteInput {
    pub fn builder() -> QuoteInputBuilder {
        QuoteInputBuilder::default()
    }
}

impl QuoteInputBuilder {
    pub fn area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    pub fn area_text(self, text: &str) -> Result<Self> {
        let area = parse_area(text)?;
        Ok(self.area(area))
    }

    pub fn cleaning_type(mut self, cleaning_type: CleaningType) -> Self {
        self.cleaning_type = Some(cleaning_type);
        self
    }

    pub fn maybe_cleaning_type(mut self, cleaning_type: Option<CleaningType>) -> Self {
        self.cleaning_type = cleaning_type;
        self
    }

    pub fn service(mut self, name: impl Into<String>) -> Self {
        self.services.insert(name.into());
        self
    }

    pub fn services<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    /// Validates against `catalog`. A missing date defaults to `today`.
    pub fn build(self, catalog: &ServiceCatalog, today: NaiveDate) -> Result<QuoteInput> {
        let area = match self.area {
            Some(area) if area.is_finite() && area > 0.0 => area,
            other => {
                return Err(QuoteError::InvalidArea {
                    value: other.map(|a| a.to_string()).unwrap_or_default(),
                })
            }
        };

        let cleaning_type = self
            .cleaning_type
            .ok_or(QuoteError::MissingCleaningTypeSelection)?;

        if let Some(unknown) = self.services.iter().find(|name| !catalog.contains(name)) {
            return Err(QuoteError::UnknownService {
                name: unknown.clone(),
            });
        }

        Ok(QuoteInput {
            area,
            cleaning_type,
            selected_services: self.services,
            target_date: self.target_date.unwrap_or(today),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_parse_area() {
        assert_eq!(parse_area("50").unwrap(), 50.0);
        assert_eq!(parse_area(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_area("12,5").unwrap(), 12.5);
        for bad in ["", "abc", "-5", "0", "inf", "NaN"] {
            assert!(
                matches!(parse_area(bad), Err(QuoteError::InvalidArea { .. })),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(parse_date("01.07.2024").unwrap(), expected);
        assert_eq!(parse_date("2024-07-01").unwrap(), expected);
        assert!(matches!(
            parse_date("31.02.2024"),
            Err(QuoteError::InvalidDate { .. })
        ));
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    fn test_builder_defaults_date_to_today() {
        let input = QuoteInput::builder()
            .area(30.0)
            .cleaning_type(CleaningType::General)
            .services(["Мойка окон", "Мойка окон", "Глажка белья"])
            .build(ServiceCatalog::standard(), today())
            .unwrap();

        assert_eq!(input.target_date, today());
        assert_eq!(input.selected_services.len(), 2);
    }

    #[test]
    fn test_builder_requires_cleaning_type() {
        let result = QuoteInput::builder()
            .area(30.0)
            .maybe_cleaning_type(None)
            .build(ServiceCatalog::standard(), today());
        assert!(matches!(
            result,
            Err(QuoteError::MissingCleaningTypeSelection)
        ));
    }

    #[test]
    fn test_builder_rejects_missing_area_and_unknown_services() {
        let result = QuoteInput::builder()
            .cleaning_type(CleaningType::Regular)
            .build(ServiceCatalog::standard(), today());
        assert!(matches!(result, Err(QuoteError::InvalidArea { .. })));

        let result = QuoteInput::builder()
            .area(10.0)
            .cleaning_type(CleaningType::Regular)
            .service("Стрижка газона")
            .build(ServiceCatalog::standard(), today());
        assert!(matches!(result, Err(QuoteError::UnknownService { .. })));
    }
}
