use config::{Config, ConfigError, File, FileFormat};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Runtime settings for the client.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Enables debug-level progress logging on stderr.
    pub debug: bool,
}

/// Loads settings from the optional config file, with defaults applied
/// first. The `-d`/`--debug` command-line flag overrides `debug` afterwards.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .set_default("debug", false)?
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false))
        .build()?;

    Ok(Settings {
        debug: settings.get_bool("debug")?,
    })
}
