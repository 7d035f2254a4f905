use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Style sheet used when no template is configured or it cannot be read.
pub const FALLBACK_CSS: &str = include_str!("fallback.css");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub html_title: String,
    pub css_template_path: Option<PathBuf>,
    pub include_toc: bool,
    pub toc_title: String,
    pub output_suffix: String,
    pub validation: ValidationSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    pub enabled: bool,
    pub strict_mode: bool,
    pub rule_system: String,
    pub custom_skills: Vec<String>,
    pub warning_threshold: usize,
    pub auto_fix: bool,
    pub beginner_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            html_title: "TRPGシナリオ".to_string(),
            css_template_path: None,
            include_toc: true,
            toc_title: "目次".to_string(),
            output_suffix: ".html".to_string(),
            validation: ValidationSettings::default(),
        }
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            strict_mode: false,
            rule_system: "CoC6".to_string(),
            custom_skills: Vec::new(),
            warning_threshold: 10,
            auto_fix: true,
            beginner_mode: false,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the template path
        config.css_template_path = config
            .css_template_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/scriptweaver");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Forgiving settings for first-time authors.
    pub fn beginner() -> Self {
        Self {
            validation: ValidationSettings {
                enabled: true,
                beginner_mode: true,
                strict_mode: false,
                warning_threshold: 20,
                auto_fix: true,
                ..ValidationSettings::default()
            },
            ..Self::default()
        }
    }

    /// Strict severities; conversion is refused on critical issues.
    pub fn strict() -> Self {
        Self {
            validation: ValidationSettings {
                enabled: true,
                strict_mode: true,
                warning_threshold: 5,
                auto_fix: false,
                beginner_mode: false,
                ..ValidationSettings::default()
            },
            ..Self::default()
        }
    }

    /// Applies the beginner preset's validation settings on top of `self`.
    pub fn apply_beginner(&mut self) {
        let preset = Self::beginner().validation;
        self.validation = ValidationSettings {
            rule_system: std::mem::take(&mut self.validation.rule_system),
            custom_skills: std::mem::take(&mut self.validation.custom_skills),
            ..preset
        };
    }

    /// Applies the strict preset's validation settings on top of `self`.
    pub fn apply_strict(&mut self) {
        let preset = Self::strict().validation;
        self.validation = ValidationSettings {
            rule_system: std::mem::take(&mut self.validation.rule_system),
            custom_skills: std::mem::take(&mut self.validation.custom_skills),
            ..preset
        };
    }

    /// The configured style sheet, or [`FALLBACK_CSS`].
    pub fn load_css_template(&self) -> String {
        self.css_template_path
            .as_deref()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .unwrap_or_else(|| FALLBACK_CSS.to_string())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
