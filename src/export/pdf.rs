use crate::config::ExportConfig;
use crate::domain::model::QuoteSummary;
use crate::domain::ports::QuoteExporter;
use crate::utils::error::{QuoteError, Result};
use printpdf::{Mm, PdfDocument};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const DOCUMENT_TITLE: &str = "Расчёт стоимости уборки";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_HEIGHT_MM: f32 = 10.0;
// Distance from the top of a line cell to the text baseline.
const BASELINE_OFFSET_MM: f32 = 6.7;

/// Lines printed on the page, title first.
pub fn document_lines(summary: &QuoteSummary) -> Vec<String> {
    vec![
        DOCUMENT_TITLE.to_string(),
        format!("Площадь: {} м²", summary.area),
        format!("Тип уборки: {}", summary.cleaning_type),
        format!("Дата уборки: {}", summary.date),
        format!("Итоговая стоимость: {}", summary.total),
    ]
}

/// Renders a single A4 page with `lines` set in the given TTF font.
pub fn render_pdf(lines: &[String], font_bytes: &[u8], font_size: f32) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let font = doc
        .add_external_font(Cursor::new(font_bytes))
        .map_err(|e| QuoteError::ExportFailure {
            message: format!("unusable font: {}", e),
        })?;

    let current_layer = doc.get_page(page).get_layer(layer);
    for (index, line) in lines.iter().enumerate() {
        let y = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM * index as f32 - BASELINE_OFFSET_MM;
        current_layer.use_text(line.as_str(), font_size, Mm(MARGIN_MM), Mm(y), &font);
    }

    doc.save_to_bytes().map_err(|e| QuoteError::ExportFailure {
        message: e.to_string(),
    })
}

#[derive(Debug, Clone)]
pub struct PdfExporter {
    output_path: PathBuf,
    font_path: PathBuf,
    font_size: f32,
}

impl PdfExporter {
    pub fn new(output_path: impl Into<PathBuf>, font_path: impl Into<PathBuf>, font_size: f32) -> Self {
        Self {
            output_path: output_path.into(),
            font_path: font_path.into(),
            font_size,
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.output_path(), &config.font_path, config.font_size)
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn read_font(&self) -> Result<Vec<u8>> {
        fs::read(&self.font_path).map_err(|e| QuoteError::ExportFailure {
            message: format!("cannot read font '{}': {}", self.font_path.display(), e),
        })
    }
}

impl QuoteExporter for PdfExporter {
    fn export(&self, summary: &QuoteSummary) -> Result<PathBuf> {
        let font_bytes = self.read_font()?;
        let bytes = render_pdf(&document_lines(summary), &font_bytes, self.font_size)?;

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| QuoteError::ExportFailure {
                    message: format!("cannot create '{}': {}", parent.display(), e),
                })?;
            }
        }

        fs::write(&self.output_path, &bytes).map_err(|e| QuoteError::ExportFailure {
            message: format!("cannot write '{}': {}", self.output_path.display(), e),
        })?;

        tracing::debug!(
            path = %self.output_path.display(),
            bytes = bytes.len(),
            "PDF written"
        );
        Ok(self.output_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> QuoteSummary {
        QuoteSummary {
            area: "50".to_string(),
            cleaning_type: "Поддерживающий".to_string(),
            date: "01.07.2024".to_string(),
            total: "5040.00 руб.".to_string(),
        }
    }

    #[test]
    fn test_document_lines() {
        assert_eq!(
            document_lines(&summary()),
            vec![
                "Расчёт стоимости уборки",
                "Площадь: 50 м²",
                "Тип уборки: Поддерживающий",
                "Дата уборки: 01.07.2024",
                "Итоговая стоимость: 5040.00 руб.",
            ]
        );
    }

    #[test]
    fn test_missing_font_fails_without_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("cleaning_calculation.pdf");
        let exporter = PdfExporter::new(&output, dir.path().join("missing.ttf"), 14.0);

        let err = exporter.export(&summary()).unwrap_err();
        assert!(matches!(err, QuoteError::ExportFailure { .. }));
        assert!(err.user_friendly_message().starts_with("Ошибка при сохранении PDF: cannot read font"));
        assert!(!output.exists());
    }
}
