//! Plugin options

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Options controlling where the plugin finds its commands
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PluginOptions {
    /// Root directory scanned for `*.md` command files
    #[serde(default = "default_command_dir")]
    pub command_dir: PathBuf,

    /// Log level used when the plugin installs its own subscriber
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// The `command/` directory shipped alongside this crate
fn default_command_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("command")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            command_dir: default_command_dir(),
            log_level: default_log_level(),
        }
    }
}

impl PluginOptions {
    /// Options with a custom command directory and default everything else
    #[must_use]
    pub fn with_command_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            command_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Global options file: ~/.plugkit/plugkit.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".plugkit").join("plugkit.toml"))
    }

    /// Load options with a layered approach (later layers win):
    /// 1. Built-in defaults
    /// 2. Global file: ~/.plugkit/plugkit.toml (optional)
    /// 3. Local file: ./plugkit.toml (optional)
    /// 4. Environment variables with `PLUGKIT__` prefix, e.g. `PLUGKIT__COMMAND_DIR`
    ///
    /// # Errors
    /// Returns an error if a present config file cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(config::File::from(global).required(false));
        }

        let config = builder
            .add_source(config::File::with_name("plugkit").required(false))
            .add_source(config::Environment::with_prefix("PLUGKIT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_bundled_commands() {
        let options = PluginOptions::default();
        assert!(options.command_dir.ends_with("command"));
        assert!(options.command_dir.join("hello.md").is_file());
        assert_eq!(options.log_level, "info");
    }

    #[test]
    fn test_with_command_dir() {
        let options = PluginOptions::with_command_dir("/tmp/cmds");
        assert_eq!(options.command_dir, PathBuf::from("/tmp/cmds"));
        assert_eq!(options.log_level, "info");
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let options: PluginOptions =
            toml::from_str(r#"log_level = "debug""#).expect("Failed to parse TOML");
        assert_eq!(options.log_level, "debug");
        assert_eq!(options.command_dir, default_command_dir());
    }

    #[test]
    fn test_toml_command_dir() {
        let options: PluginOptions =
            toml::from_str(r#"command_dir = "/srv/commands""#).expect("Failed to parse TOML");
        assert_eq!(options.command_dir, PathBuf::from("/srv/commands"));
    }

    #[test]
    fn test_load_reads_environment() {
        std::env::set_var("PLUGKIT__COMMAND_DIR", "/from/env");
        let options = PluginOptions::load();
        std::env::remove_var("PLUGKIT__COMMAND_DIR");

        let options = options.unwrap();
        assert_eq!(options.command_dir, PathBuf::from("/from/env"));
    }
}
