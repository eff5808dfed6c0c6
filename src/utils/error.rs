use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Invalid area: '{value}' (must be a number greater than 0)")]
    InvalidArea { value: String },

    #[error("Target date {date} is before today ({today})")]
    PastDate { date: NaiveDate, today: NaiveDate },

    #[error("No cleaning type selected")]
    MissingCleaningTypeSelection,

    #[error("Unknown cleaning type: '{value}'")]
    UnknownCleaningType { value: String },

    #[error("Service '{name}' is not in the catalog")]
    UnknownService { name: String },

    #[error("Invalid date: '{value}' (expected dd.mm.yyyy or yyyy-mm-dd)")]
    InvalidDate { value: String },

    #[error("PDF export failed: {message}")]
    ExportFailure { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, QuoteError>;

impl QuoteError {
    /// Errors caused by what the user typed into the form.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QuoteError::InvalidArea { .. }
                | QuoteError::PastDate { .. }
                | QuoteError::MissingCleaningTypeSelection
                | QuoteError::UnknownCleaningType { .. }
                | QuoteError::UnknownService { .. }
                | QuoteError::InvalidDate { .. }
        )
    }

    /// Message shown to the person filling in the quote.
    pub fn user_friendly_message(&self) -> String {
        match self {
            QuoteError::InvalidArea { .. } => "Площадь должна быть больше 0".to_string(),
            QuoteError::PastDate { .. } => "Дата уборки не может быть в прошлом".to_string(),
            QuoteError::MissingCleaningTypeSelection | QuoteError::UnknownCleaningType { .. } => {
                "Выберите тип уборки".to_string()
            }
            QuoteError::UnknownService { name } => format!("Неизвестная услуга: {}", name),
            QuoteError::InvalidDate { .. } => "Введите корректные данные.".to_string(),
            QuoteError::ExportFailure { message } => {
                format!("Ошибка при сохранении PDF: {}", message)
            }
            QuoteError::IoError(e) => format!("Ошибка ввода-вывода: {}", e),
            QuoteError::SerializationError(e) => format!("Ошибка сериализации: {}", e),
            QuoteError::ConfigError { .. } | QuoteError::InvalidConfigValueError { .. } => {
                format!("Ошибка конфигурации: {}", self)
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            e if e.is_validation() => 1,
            QuoteError::ExportFailure { .. }
            | QuoteError::IoError(_)
            | QuoteError::SerializationError(_) => 2,
            _ => 3,
        }
    }
}
