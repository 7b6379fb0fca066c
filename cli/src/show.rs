use crate::cli::{OutputFormat, ShowArgs};
use crate::error::{CliError, Result};
use crate::progress::LoadingIndicator;
use crate::render;
use crate::ui;
use changelog::ChangelogConfig;
use release_loader::{load_changelog, LoadOutcome, LoaderConfig};
use tokio::runtime::Runtime;

pub fn execute(args: ShowArgs) -> Result<()> {
    let config = resolve_config(&args)?;

    let outcome = if args.offline {
        if args.verbose {
            ui::info_message("Offline mode, showing the bundled changelog");
        }
        LoadOutcome::bundled()
    } else {
        let rt = Runtime::new()
            .map_err(|e| CliError::Io(e).with_context("Failed to start async runtime"))?;
        rt.block_on(fetch(&config, args.format))
    };

    if args.verbose {
        report(&outcome);
    }

    let rendering = rendering_config(&args);
    println!(
        "{}",
        render::render(&outcome, args.format, &config.releases_page, &rendering)?
    );
    Ok(())
}

fn rendering_config(args: &ShowArgs) -> ChangelogConfig {
    ChangelogConfig {
        show_links: !args.no_links,
        ..ChangelogConfig::default()
    }
}

/// Builds the loader configuration from the optional file and command-line overrides
fn resolve_config(args: &ShowArgs) -> Result<LoaderConfig> {
    let mut config = match &args.config {
        Some(path) => LoaderConfig::load_from_file(path)
            .map_err(|e| CliError::from(e).with_context("Failed to read configuration"))?,
        None => LoaderConfig::default(),
    };

    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint.clone());
    }

    config.validate()?;
    Ok(config)
}

async fn fetch(config: &LoaderConfig, format: OutputFormat) -> LoadOutcome {
    // The spinner would end up inside piped JSON or markdown
    let indicator =
        (format == OutputFormat::Text).then(|| LoadingIndicator::start("Loading changelog..."));

    let outcome = load_changelog(config).await;

    if let Some(indicator) = indicator {
        indicator.finish();
    }
    outcome
}

fn report(outcome: &LoadOutcome) {
    if outcome.is_live() {
        ui::info_message(&format!(
            "Showing live changelog with {} releases",
            outcome.entries.len()
        ));
    } else {
        ui::info_message("Live changelog unavailable, showing the bundled changelog");
    }

    for skipped in &outcome.skipped {
        ui::warning_message(&skipped.to_string());
    }
}
