use anyhow::{Context, Result};
use photo2map::{launcher, Settings};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = Settings::config_path();
    let settings = Settings::load_from(&config_path)?;
    if !config_path.exists() {
        // Give the user a file to edit next time
        if let Err(e) = settings.save_to(&config_path) {
            tracing::warn!("Could not write default config: {:#}", e);
        }
    }
    tracing::info!("Config file: {}", config_path.display());
    tracing::info!(
        "Watching {} for '{}', map goes to {}",
        settings.source_folder.display(),
        settings.extension_glob,
        settings.output_path.display()
    );

    launcher::run(settings)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to start the launcher window")?;

    Ok(())
}
