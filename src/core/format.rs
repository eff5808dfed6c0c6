use chrono::NaiveDate;

pub const DATE_DISPLAY_FORMAT: &str = "%d.%m.%Y";
pub const INITIAL_TOTAL_LABEL: &str = "Итого: 0 руб.";

/// Label shown under the form after a successful calculation.
pub fn format_total(total: f64) -> String {
    format!("Итого: {:.2} руб.", total)
}

pub fn format_amount(total: f64) -> String {
    format!("{:.2} руб.", total)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}
