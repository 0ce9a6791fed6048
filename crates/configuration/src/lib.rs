// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::Settings;

/// Loads the application configuration from an optional `khata.toml` file.
///
/// A missing file is not an error: every setting has a sensible default, so
/// the application runs out of the box.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from("khata")
}

fn load_settings_from(name: &str) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(name).required(false))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    Ok(settings)
}
