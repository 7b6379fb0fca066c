use crate::cli::OutputFormat;
use crate::error::Result;
use crate::render;
use changelog::ChangelogConfig;
use release_loader::{LoadOutcome, LoaderConfig};

pub fn execute(format: OutputFormat) -> Result<()> {
    let releases_page = LoaderConfig::default().releases_page;
    let output = render::render(
        &LoadOutcome::bundled(),
        format,
        &releases_page,
        &ChangelogConfig::default(),
    )?;
    println!("{output}");
    Ok(())
}
