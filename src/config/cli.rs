use clap::Parser;
use serde::Serialize;

use super::toml_config::{TomlConfig, DEFAULT_CONFIG_FILE};

#[derive(Debug, Clone, Serialize, Parser)]
#[command(name = "cleaning-quote")]
#[command(about = "Cleaning-service price quote calculator with PDF export")]
pub struct CliConfig {
    /// Area in square meters
    #[arg(long, required_unless_present = "list_services")]
    pub area: Option<String>,

    /// Cleaning type: regular, general or post-construction
    #[arg(long, short = 't', default_value = "regular")]
    pub cleaning_type: String,

    /// Add-on service by catalog name (repeatable)
    #[arg(long = "service", short = 's')]
    pub services: Vec<String>,

    /// Comma-separated add-on services
    #[arg(long = "services", value_delimiter = ',')]
    pub service_list: Vec<String>,

    /// Cleaning date (dd.mm.yyyy or yyyy-mm-dd), defaults to today
    #[arg(long, short = 'd')]
    pub date: Option<String>,

    /// Override today's date used for the late-booking surcharge
    #[arg(long)]
    pub today: Option<String>,

    /// Save the quote as a PDF after calculating
    #[arg(long)]
    pub export: bool,

    /// Directory for the exported PDF
    #[arg(long)]
    pub output_dir: Option<String>,

    /// TTF font used in the exported PDF
    #[arg(long)]
    pub font: Option<String>,

    /// Print the result breakdown as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the add-on service catalog and exit
    #[arg(long)]
    pub list_services: bool,

    /// Path to TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Every selected service from both flags, in the order given.
    pub fn selected_services(&self) -> Vec<String> {
        self.services
            .iter()
            .chain(self.service_list.iter())
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Applies command-line overrides on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(dir) = &self.output_dir {
            config.export.output_dir = dir.clone();
        }
        if let Some(font) = &self.font {
            config.export.font_path = font.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command_line() {
        let cli = CliConfig::try_parse_from([
            "cleaning-quote",
            "--area",
            "50",
            "-t",
            "general",
            "--service",
            "Мойка окон",
            "--services",
            "Глажка белья, Эко уборка",
            "--date",
            "01.07.2024",
            "--export",
        ])
        .unwrap();

        assert_eq!(cli.area.as_deref(), Some("50"));
        assert_eq!(cli.cleaning_type, "general");
        assert_eq!(
            cli.selected_services(),
            vec!["Мойка окон", "Глажка белья", "Эко уборка"]
        );
        assert!(cli.export);
        assert_eq!(cli.config, DEFAULT_CONFIG_FILE);
    }

    #[test]
    fn test_area_required_unless_listing() {
        assert!(CliConfig::try_parse_from(["cleaning-quote"]).is_err());
        let cli = CliConfig::try_parse_from(["cleaning-quote", "--list-services"]).unwrap();
        assert!(cli.list_services);
        assert!(cli.area.is_none());
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let cli = CliConfig::try_parse_from([
            "cleaning-quote",
            "--area",
            "10",
            "--output-dir",
            "/tmp/quotes",
            "--font",
            "DejaVuSans.ttf",
        ])
        .unwrap();

        let mut config = TomlConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.export.output_dir, "/tmp/quotes");
        assert_eq!(config.export.font_path, "DejaVuSans.ttf");
    }
}
