//! Settings files in TOML, JSON or YAML

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// A settings file format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format of `path` from its extension (case-insensitive).
    pub fn from_path(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    fn parse<T: DeserializeOwned>(self, text: &str) -> std::result::Result<T, String> {
        match self {
            Self::Toml => toml::from_str(text).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        }
    }

    fn render<T: Serialize>(self, value: &T) -> std::result::Result<String, String> {
        match self {
            Self::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        }
    }
}

/// Loads and saves settings files, whatever their format.
#[derive(Debug, Default)]
pub struct ConfigStore {
    robustness: io::RobustnessConfig,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `robustness` for writes made by [`save`](Self::save).
    pub fn with_robustness(robustness: io::RobustnessConfig) -> Self {
        Self { robustness }
    }

    /// Load settings from `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist. An unknown extension
    /// is an error even then.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<Option<T>> {
        let format = ConfigFormat::from_path(path)?;
        let Some(text) = io::read_text(path)? else {
            return Ok(None);
        };
        format
            .parse(&text)
            .map(Some)
            .map_err(|message| Error::ConfigParse {
                path: path.to_native(),
                format: format.name().into(),
                message,
            })
    }

    /// Save `value` to `path`, replacing the file atomically.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let format = ConfigFormat::from_path(path)?;
        let text = format.render(value).map_err(|message| Error::ConfigSerialize {
            path: path.to_native(),
            format: format.name().into(),
            message,
        })?;
        io::write_atomic(path, text.as_bytes(), self.robustness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_last_extension() {
        let path = NormalizedPath::new("/store/settings.local.YML");
        assert_eq!(ConfigFormat::from_path(&path).unwrap(), ConfigFormat::Yaml);
    }

    #[test]
    fn unknown_extension_is_rejected_before_reading() {
        let path = NormalizedPath::new("/does/not/exist/settings.ini");
        let err = ConfigStore::new().load::<serde_json::Value>(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { extension } if extension == "ini"));
    }
}
