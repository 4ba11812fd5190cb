//! Store configuration
//!
//! Settings can be loaded from TOML, JSON or YAML. Every field is optional.
//!
//! # Example TOML
//!
//! ```toml
//! root = "App_Data/Formulate"
//! include_data_values_in_children = false
//!
//! [forms]
//! directory = "Forms"
//! extension = ".form.json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use store_fs::{ConfigStore, NormalizedPath, RobustnessConfig};
use store_model::EntityKind;

use crate::Result;

/// Where and how one kind is stored. Unset fields use the kind's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// Configuration for an [`EntityStore`](crate::EntityStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Directory that holds one subdirectory per kind
    pub root: PathBuf,
    /// Include data values in child listings
    pub include_data_values_in_children: bool,
    /// Flush entity files to disk before replacing the previous version
    pub fsync: bool,
    pub folders: KindSettings,
    pub forms: KindSettings,
    pub configured_forms: KindSettings,
    pub layouts: KindSettings,
    pub validations: KindSettings,
    pub data_values: KindSettings,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include_data_values_in_children: true,
            fsync: true,
            folders: KindSettings::default(),
            forms: KindSettings::default(),
            configured_forms: KindSettings::default(),
            layouts: KindSettings::default(),
            validations: KindSettings::default(),
            data_values: KindSettings::default(),
        }
    }
}

impl StoreSettings {
    /// Default settings rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load settings from `path`, falling back to defaults when the file
    /// does not exist.
    ///
    /// A relative `root` is resolved against the directory holding the file.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let config_path = NormalizedPath::new(path);
        let mut settings: Self = ConfigStore::new().load(&config_path)?.unwrap_or_default();

        if settings.root.is_relative() {
            if let Some(dir) = path.parent() {
                settings.root = dir.join(&settings.root);
            }
        }
        tracing::debug!(config = %config_path, root = %settings.root.display(), "Loaded store settings");
        Ok(settings)
    }

    /// Save settings to `path` in the format given by its extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        ConfigStore::with_robustness(self.robustness()).save(&NormalizedPath::new(path), self)?;
        Ok(())
    }

    fn kind_settings(&self, kind: EntityKind) -> Option<&KindSettings> {
        match kind {
            EntityKind::Folder => Some(&self.folders),
            EntityKind::Form => Some(&self.forms),
            EntityKind::ConfiguredForm => Some(&self.configured_forms),
            EntityKind::Layout => Some(&self.layouts),
            EntityKind::Validation => Some(&self.validations),
            EntityKind::DataValue => Some(&self.data_values),
            EntityKind::Root => None,
        }
    }

    /// Directory holding entities of `kind`.
    pub fn directory_for(&self, kind: EntityKind) -> PathBuf {
        let directory = self
            .kind_settings(kind)
            .and_then(|k| k.directory.as_deref())
            .unwrap_or_else(|| default_directory(kind));
        self.root.join(directory)
    }

    /// File extension for entities of `kind`, including the leading dot.
    pub fn extension_for(&self, kind: EntityKind) -> &str {
        self.kind_settings(kind)
            .and_then(|k| k.extension.as_deref())
            .unwrap_or_else(|| default_extension(kind))
    }

    pub fn robustness(&self) -> RobustnessConfig {
        RobustnessConfig {
            enable_fsync: self.fsync,
        }
    }
}

fn default_directory(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Folder => "folders",
        EntityKind::Form => "forms",
        EntityKind::ConfiguredForm => "configured-forms",
        EntityKind::Layout => "layouts",
        EntityKind::Validation => "validations",
        EntityKind::DataValue => "data-values",
        EntityKind::Root => "",
    }
}

fn default_extension(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Folder => ".folder.json",
        EntityKind::Form => ".form.json",
        EntityKind::ConfiguredForm => ".conform.json",
        EntityKind::Layout => ".layout.json",
        EntityKind::Validation => ".validation.json",
        EntityKind::DataValue => ".data-value.json",
        EntityKind::Root => ".json",
    }
}
