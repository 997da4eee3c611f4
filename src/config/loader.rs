//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `--config <PATH>`, or `.menucalc.toml` in the working directory
//! 4. `~/.config/menucalc/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
}

/// How the session draws its output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Emit ANSI styling.
    pub color: bool,
    /// Use the undecorated renderer.
    pub plain: bool,
    /// Text framed at the top of the menu.
    pub header: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            plain: false,
            header: constants::DEFAULT_HEADER.to_string(),
        }
    }
}

/// One config file as written: only the keys it actually sets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    display: DisplayLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DisplayLayer {
    color: Option<bool>,
    plain: Option<bool>,
    header: Option<String>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// An explicit `config_path` must exist. Without one, `.menucalc.toml`
    /// in `working_dir` is used when present.
    pub fn load(
        config_path: Option<&Path>,
        working_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: explicit or local config
        match config_path {
            Some(path) => config.merge(Self::load_file(path)?),
            None => {
                if let Some(dir) = working_dir {
                    let local_path = dir.join(constants::CONFIG_FILENAME);
                    if local_path.exists() {
                        config.merge(Self::load_file(&local_path)?);
                    }
                }
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Apply CLI flag overrides (layer 1). Flags only ever switch styling off.
    pub fn apply_flags(&mut self, plain: bool, no_color: bool) {
        if plain {
            self.display.plain = true;
        }
        if no_color || plain {
            self.display.color = false;
        }
    }

    /// Load a config layer from a specific file.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a file layer into this config. Every key the layer sets wins.
    fn merge(&mut self, layer: ConfigLayer) {
        let display = layer.display;
        if let Some(color) = display.color {
            self.display.color = color;
        }
        if let Some(plain) = display.plain {
            self.display.plain = plain;
        }
        if let Some(header) = display.header {
            self.display.header = header;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        match env.flag(constants::ENV_COLOR) {
            Some(Ok(enabled)) => self.display.color = enabled,
            Some(Err(val)) => {
                tracing::warn!("ignoring invalid {} value: {val}", constants::ENV_COLOR);
            }
            None => {}
        }

        if let Ok(val) = env.var(constants::ENV_HEADER) {
            if val.trim().is_empty() {
                tracing::warn!("ignoring empty {} value", constants::ENV_HEADER);
            } else {
                self.display.header = val;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn no_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.display.color);
        assert!(!config.display.plain);
        assert_eq!(config.display.header, "Simple Calculator");
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[display]
color = false
header = "Pocket Calculator"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(!config.display.color);
        assert!(!config.display.plain);
        assert_eq!(config.display.header, "Pocket Calculator");
    }

    fn layer(toml_str: &str) -> ConfigLayer {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn merge_applies_every_key_the_layer_sets() {
        let mut base = Config::default();
        base.merge(layer(
            "[display]\ncolor = false\nplain = true\nheader = \"Custom\"\n",
        ));

        assert!(!base.display.color);
        assert!(base.display.plain);
        assert_eq!(base.display.header, "Custom");
    }

    #[test]
    fn merge_keeps_base_for_unset_keys() {
        let mut base = Config::default();
        base.display.header = "Kept".to_string();
        base.display.plain = true;

        base.merge(layer(""));
        base.merge(layer("[display]\ncolor = true\n"));

        assert_eq!(base.display.header, "Kept");
        assert!(base.display.plain);
    }

    #[test]
    fn later_layer_can_reenable_color_and_restore_default_header() {
        let mut config = Config::default();
        config.merge(layer("[display]\ncolor = false\nplain = true\nheader = \"Global\"\n"));
        config.merge(layer(
            "[display]\ncolor = true\nplain = false\nheader = \"Simple Calculator\"\n",
        ));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn local_file_overrides_to_default_values() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        std::fs::write(&global, "[display]\ncolor = false\nheader = \"Global\"\n").unwrap();
        let local = dir.path().join("local.toml");
        std::fs::write(&local, "[display]\ncolor = true\nheader = \"Simple Calculator\"\n")
            .unwrap();

        let mut config = Config::default();
        config.merge(Config::load_file(&global).unwrap());
        config.merge(Config::load_file(&local).unwrap());

        assert!(config.display.color);
        assert_eq!(config.display.header, "Simple Calculator");
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let result = Config::load_file(&path);
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let result = Config::load(Some(&missing), None, &no_env());
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn explicit_config_wins_over_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".menucalc.toml"),
            "[display]\nheader = \"Local\"\n",
        )
        .unwrap();
        let explicit = dir.path().join("explicit.toml");
        std::fs::write(&explicit, "[display]\nheader = \"Explicit\"\n").unwrap();

        let config = Config::load(Some(&explicit), Some(dir.path()), &no_env()).unwrap();
        assert_eq!(config.display.header, "Explicit");
    }

    #[test]
    fn load_from_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".menucalc.toml"),
            "[display]\nplain = true\n",
        )
        .unwrap();

        let config = Config::load(None, Some(dir.path()), &no_env()).unwrap();
        assert!(config.display.plain);
    }

    #[test]
    fn apply_env_vars_color_and_header() {
        let env = Env::mock([("MENUCALC_COLOR", "off"), ("MENUCALC_HEADER", "Env Calc")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert!(!config.display.color);
        assert_eq!(config.display.header, "Env Calc");
    }

    #[test]
    fn apply_env_vars_ignores_invalid_values() {
        let env = Env::mock([("MENUCALC_COLOR", "sometimes"), ("MENUCALC_HEADER", "  ")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn env_can_reenable_color() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".menucalc.toml"),
            "[display]\ncolor = false\n",
        )
        .unwrap();
        let env = Env::mock([("MENUCALC_COLOR", "yes")]);

        let config = Config::load(None, Some(dir.path()), &env).unwrap();
        assert!(config.display.color);
    }

    #[test]
    fn plain_flag_also_disables_color() {
        let mut config = Config::default();
        config.apply_flags(true, false);
        assert!(config.display.plain);
        assert!(!config.display.color);

        let mut config = Config::default();
        config.apply_flags(false, true);
        assert!(!config.display.plain);
        assert!(!config.display.color);
    }
}
