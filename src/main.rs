use anyhow::Context;
use clap::Parser;
use cleaning_quote::core::format::format_amount;
use cleaning_quote::core::input::parse_date;
use cleaning_quote::domain::ports::{Clock, FixedClock, SystemClock};
use cleaning_quote::utils::{logger, validation::Validate};
use cleaning_quote::{CliConfig, QuoteApp, QuoteError, QuoteRequest, ServiceCatalog, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let mut config = match TomlConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            std::process::exit(e.exit_code());
        }
    };
    cli.apply_overrides(&mut config);

    logger::init_cli_logger(cli.verbose, &config.logging.level);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if cli.list_services {
        print_catalog(cli.json)?;
        return Ok(());
    }

    let outcome = match cli.today.as_deref() {
        Some(today) => {
            let today = parse_date(today).unwrap_or_else(|e| fail(&e));
            run(&cli, config, FixedClock(today))
        }
        None => run(&cli, config, SystemClock),
    };

    match outcome {
        Ok(()) => Ok(()),
        Err(e) => fail(&e),
    }
}

fn run<C: Clock>(cli: &CliConfig, config: TomlConfig, clock: C) -> cleaning_quote::Result<()> {
    let request = QuoteRequest {
        area: cli.area.clone().unwrap_or_default(),
        cleaning_type: Some(cli.cleaning_type.clone()),
        services: cli.selected_services(),
        date: cli.date.clone(),
        export: cli.export,
    };

    let outcome = QuoteApp::new(config, clock).run(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.label);
        if let Some(path) = &outcome.exported_to {
            println!("Расчёт сохранён в файл {}", path.display());
        }
    }

    Ok(())
}

fn print_catalog(json: bool) -> anyhow::Result<()> {
    let catalog = ServiceCatalog::standard();
    if json {
        let listing = serde_json::to_string_pretty(catalog.entries())
            .context("failed to serialize the service catalog")?;
        println!("{}", listing);
    } else {
        println!("Дополнительные услуги:");
        for entry in catalog.entries() {
            println!("  {:<32} {}", entry.name, format_amount(entry.fee));
        }
    }
    Ok(())
}

fn fail(e: &QuoteError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
