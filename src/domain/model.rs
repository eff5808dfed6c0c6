use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::utils::error::QuoteError;

/// Kind of cleaning ordered. Each variant carries a fixed price per square meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleaningType {
    #[default]
    Regular,
    General,
    PostConstruction,
}

impl CleaningType {
    pub const ALL: [CleaningType; 3] = [
        CleaningType::Regular,
        CleaningType::General,
        CleaningType::PostConstruction,
    ];

    /// Price per square meter.
    pub fn rate(self) -> f64 {
        match self {
            CleaningType::Regular => 50.0,
            CleaningType::General => 70.0,
            CleaningType::PostConstruction => 100.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CleaningType::Regular => "Поддерживающий",
            CleaningType::General => "Генеральный",
            CleaningType::PostConstruction => "Послестроительный",
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            CleaningType::Regular => "regular",
            CleaningType::General => "general",
            CleaningType::PostConstruction => "post-construction",
        }
    }
}

impl fmt::Display for CleaningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CleaningType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('_', "-");
        CleaningType::ALL
            .into_iter()
            .find(|kind| {
                needle == kind.keyword()
                    || needle == kind.label().to_lowercase()
                    || needle == kind.keyword().replace('-', "")
            })
            .ok_or_else(|| QuoteError::UnknownCleaningType {
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ServiceEntry {
    pub name: &'static str,
    pub fee: f64,
}

/// Add-on services with flat fees, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCatalog {
    entries: Vec<ServiceEntry>,
}

const STANDARD_SERVICES: [(&str, f64); 14] = [
    ("Дезинфекция", 2000.0),
    ("Дезинсекция", 2000.0),
    ("Дератизация", 2000.0),
    ("Химчистка мебели", 1600.0),
    ("Химчистка ковров", 1000.0),
    ("Мойка фасадов", 0.0),
    ("Мойка окон", 650.0),
    ("Глажка белья", 600.0),
    ("Мойка духовки", 800.0),
    ("Мойка микроволновки", 300.0),
    ("Мойка холодильника", 600.0),
    ("Освежить шторы парогенератором", 700.0),
    ("Мойка люстр", 600.0),
    ("Эко уборка", 1000.0),
];

static STANDARD_CATALOG: OnceLock<ServiceCatalog> = OnceLock::new();

impl ServiceCatalog {
    /// The process-wide catalog, built on first use.
    pub fn standard() -> &'static ServiceCatalog {
        STANDARD_CATALOG.get_or_init(|| ServiceCatalog {
            entries: STANDARD_SERVICES
                .iter()
                .map(|&(name, fee)| ServiceEntry { name, fee })
                .collect(),
        })
    }

    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    pub fn fee(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.fee)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fee(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteInput {
    pub area: f64,
    pub cleaning_type: CleaningType,
    pub selected_services: BTreeSet<String>,
    pub target_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    pub total: f64,
    pub base_cost: f64,
    pub services_cost: f64,
    pub subtotal: f64,
    pub surcharge: f64,
    pub delta_days: i64,
}

/// Display strings handed to an exporter, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSummary {
    pub area: String,
    pub cleaning_type: String,
    pub date: String,
    pub total: String,
}
