//! Configuration file loading.
//!
//! `~/.maquette/config.toml`, all sections optional. Delays are accepted in
//! milliseconds so tests and demos can turn the simulated latency down.

use std::path::PathBuf;
use std::time::Duration;
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

use maquette_types::Profile;

use crate::simulator::{Canned, CompletionSimulator};

#[derive(Debug, Default, Deserialize)]
pub struct MaquetteConfig {
    pub app: Option<AppSection>,
    pub simulator: Option<SimulatorSection>,
    pub profile: Option<ProfileSection>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppSection {
    /// Seed assistant greeting shown when the session starts.
    pub greeting: Option<String>,
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable spinner animation.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SimulatorSection {
    pub chat_delay_ms: Option<u64>,
    pub image_delay_ms: Option<u64>,
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileSection {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// UI rendering options derived from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

impl MaquetteConfig {
    /// `~/.maquette/config.toml`, or `MAQUETTE_CONFIG` when set.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        if let Ok(explicit) = env::var("MAQUETTE_CONFIG") {
            return Some(PathBuf::from(explicit));
        }
        dirs::home_dir().map(|home| home.join(".maquette").join("config.toml"))
    }

    /// Load the config file. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        Self::load_from(path)
    }

    pub fn load_from(path: PathBuf) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?;
        Ok(Some(config))
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
            reduced_motion: app.is_some_and(|a| a.reduced_motion),
        }
    }

    #[must_use]
    pub fn greeting(&self) -> Option<&str> {
        self.app.as_ref().and_then(|app| app.greeting.as_deref())
    }

    /// Build the canned simulator with any configured overrides applied.
    #[must_use]
    pub fn simulator(&self) -> Canned {
        let defaults = Canned::default();
        let Some(section) = self.simulator.as_ref() else {
            return defaults;
        };
        Canned::new(
            section
                .chat_delay_ms
                .map_or(defaults.chat_delay(), Duration::from_millis),
            section
                .image_delay_ms
                .map_or(defaults.image_delay(), Duration::from_millis),
            section
                .image_url
                .clone()
                .unwrap_or_else(|| defaults.image_url("")),
        )
    }

    #[must_use]
    pub fn profile(&self) -> Profile {
        let mut profile = Profile::default();
        if let Some(section) = self.profile.as_ref() {
            if let Some(name) = section.name.clone() {
                profile.name = name;
            }
            if let Some(email) = section.email.clone() {
                profile.email = email;
            }
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::simulator::CompletionSimulator;

    use super::MaquetteConfig;

    #[test]
    fn simulator_overrides_apply() {
        let config: MaquetteConfig = toml::from_str(
            r#"
            [simulator]
            chat_delay_ms = 5
            image_url = "https://example.com/x.png"
            "#,
        )
        .expect("valid toml");

        let simulator = config.simulator();
        assert_eq!(simulator.chat_delay(), Duration::from_millis(5));
        assert_eq!(simulator.image_delay(), Duration::from_secs(2));
        assert_eq!(simulator.image_url("anything"), "https://example.com/x.png");
    }

    #[test]
    fn load_from_reads_and_parses_a_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[app]\ngreeting = \"Welcome back\"\n").expect("write config");

        let config = MaquetteConfig::load_from(path)
            .expect("readable config")
            .expect("file exists");
        assert_eq!(config.greeting(), Some("Welcome back"));

        let missing = MaquetteConfig::load_from(dir.path().join("absent.toml")).expect("no error");
        assert!(missing.is_none());
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[app\n").expect("write config");

        let err = MaquetteConfig::load_from(path.clone()).expect_err("parse failure");
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn profile_defaults_fill_missing_fields() {
        let config: MaquetteConfig = toml::from_str(
            r#"
            [profile]
            name = "Ada"
            "#,
        )
        .expect("valid toml");
        let profile = config.profile();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.email, "user@example.com");
    }
}
