use crate::domain::model::{CleaningType, QuoteInput, QuoteResult, ServiceCatalog};
use crate::utils::error::{QuoteError, Result};
use chrono::NaiveDate;

/// Bookings this many days out or closer pay the late-booking surcharge.
pub const SURCHARGE_WINDOW_DAYS: i64 = 30;
/// Surcharge added per day inside the window, as a fraction of the subtotal.
pub const SURCHARGE_RATE_PER_DAY: f64 = 0.02;

pub struct QuoteCalculator<'a> {
    catalog: &'a ServiceCatalog,
}

impl Default for QuoteCalculator<'static> {
    fn default() -> Self {
        Self::new(ServiceCatalog::standard())
    }
}

impl<'a> QuoteCalculator<'a> {
    pub fn new(catalog: &'a ServiceCatalog) -> Self {
        Self { catalog }
    }

    pub fn calculate(&self, input: &QuoteInput, today: NaiveDate) -> Result<QuoteResult> {
        if !(input.area.is_finite() && input.area > 0.0) {
            return Err(QuoteError::InvalidArea {
                value: input.area.to_string(),
            });
        }

        if let Some(unknown) = input
            .selected_services
            .iter()
            .find(|name| !self.catalog.contains(name))
        {
            return Err(QuoteError::UnknownService {
                name: unknown.clone(),
            });
        }

        let base_cost = input.area * input.cleaning_type.rate();

        // Catalog order, not selection order: keeps float sums stable.
        let mut total = base_cost;
        for entry in self.catalog.entries() {
            if input.selected_services.contains(entry.name) {
                total += entry.fee;
            }
        }
        let subtotal = total;

        let delta_days = (input.target_date - today).num_days();
        if delta_days < 0 {
            return Err(QuoteError::PastDate {
                date: input.target_date,
                today,
            });
        }

        let mut surcharge = 0.0;
        if delta_days <= SURCHARGE_WINDOW_DAYS {
            surcharge = (SURCHARGE_WINDOW_DAYS - delta_days) as f64 * SURCHARGE_RATE_PER_DAY * total;
            total += surcharge;
        }

        tracing::debug!(
            area = input.area,
            cleaning_type = input.cleaning_type.keyword(),
            services = input.selected_services.len(),
            delta_days,
            subtotal,
            surcharge,
            total,
            "quote calculated"
        );

        Ok(QuoteResult {
            total,
            base_cost,
            services_cost: subtotal - base_cost,
            subtotal,
            surcharge,
            delta_days,
        })
    }
}

/// Total price for a quote against the standard catalog.
pub fn compute_total<I, S>(
    area: f64,
    cleaning_type: CleaningType,
    selected_services: I,
    target_date: NaiveDate,
    today: NaiveDate,
) -> Result<f64>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let input = QuoteInput {
        area,
        cleaning_type,
        selected_services: selected_services.into_iter().map(Into::into).collect(),
        target_date,
    };
    QuoteCalculator::default()
        .calculate(&input, today)
        .map(|result| result.total)
}
