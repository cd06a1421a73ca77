use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, Notifier, Report, Server};

/// Loads the application configuration.
///
/// This function is the primary entry point for this crate. It reads the
/// optional `config.toml` file, layers `SALESCOPE_*` environment variables on
/// top (e.g. `SALESCOPE_SERVER__PORT=9090`), and deserializes the result into
/// our strongly-typed `Config` struct. Every field has a default, so a missing
/// file is not an error.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`.
        .add_source(config::File::with_name("config.toml").required(false))
        .add_source(
            config::Environment::with_prefix("SALESCOPE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    tracing::debug!(?config, "Configuration loaded.");

    if config.report.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "report.output_dir must not be empty".to_string(),
        ));
    }

    Ok(config)
}
