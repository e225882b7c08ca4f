use anyhow::Context;
use clap::Parser;
use device_catalog::utils::logger::{self, LogFormat};
use device_catalog::{CatalogError, CatalogFile, CliConfig};
use std::io::Write;

fn report(e: &CatalogError) -> ! {
    tracing::error!("❌ Catalog processing failed: {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let log_format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, log_format);

    tracing::info!("Starting device-catalog");
    tracing::debug!("CLI config: {:?}", config);

    let catalog = match CatalogFile::from_file(&config.catalog).and_then(CatalogFile::into_catalog) {
        Ok(catalog) => catalog,
        Err(e) => report(&e),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let renderer = config.format.renderer();
    if let Err(e) = catalog.render(renderer.as_ref(), config.purpose, &mut out) {
        report(&e);
    }

    if config.duplicates {
        for (first, second) in catalog.find_duplicates() {
            tracing::warn!(first, second, "duplicate devices");
            eprintln!("⚠️  device #{} equals device #{}", second, first);
        }
    }

    out.flush().context("flushing stdout")?;
    Ok(())
}
