use std::{env, path::PathBuf};

use super::schema::Settings;

impl Settings {
    /// Load settings from the optional config file and `SETLIST__*`
    /// environment overrides, falling back to struct defaults.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = config_file_path() {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SETLIST")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self
            .scan
            .extension
            .trim()
            .trim_start_matches('.')
            .is_empty()
        {
            return Err("scan.extension must not be empty".to_string());
        }
        if self.manifest.export_name.trim().is_empty() {
            return Err("manifest.export_name must not be empty".to_string());
        }
        if self.manifest.placeholders.is_empty() {
            return Err("manifest.placeholders must contain at least one URL".to_string());
        }
        Ok(())
    }
}

/// Locate the config file.
///
/// `$SETLIST_CONFIG_PATH` wins outright; otherwise the XDG location
/// `$XDG_CONFIG_HOME/setlist/config.toml` is used, with `~/.config` standing
/// in when `XDG_CONFIG_HOME` is unset. `None` means there is no home
/// directory either and the generator runs on defaults alone.
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os("SETLIST_CONFIG_PATH") {
        return Some(PathBuf::from(explicit));
    }

    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from(env::var_os("HOME")?).join(".config")))?;

    Some(config_home.join("setlist").join("config.toml"))
}
