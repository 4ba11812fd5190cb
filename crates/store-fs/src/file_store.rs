//! One JSON file per entity under a base directory

use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::{Error, NormalizedPath, Result, io};

/// Reads and writes entities as individual JSON files.
///
/// Every entity lives at `<base>/<id><extension>`, where the id is the
/// lowercase 32-digit hex form of its GUID. The base directory is created
/// and canonicalized on construction, so every path handed out is absolute
/// and stable enough to key a cache with.
#[derive(Debug, Clone)]
pub struct FileStore {
    base: NormalizedPath,
    extension: String,
    robustness: io::RobustnessConfig,
}

impl FileStore {
    /// Open a store rooted at `base` for files ending in `extension`
    /// (for example `.form.json`).
    pub fn new(base: impl Into<NormalizedPath>, extension: impl Into<String>) -> Result<Self> {
        Self::with_robustness(base, extension, io::RobustnessConfig::default())
    }

    /// Like [`FileStore::new`] with explicit write durability settings.
    pub fn with_robustness(
        base: impl Into<NormalizedPath>,
        extension: impl Into<String>,
        robustness: io::RobustnessConfig,
    ) -> Result<Self> {
        let base = base.into();
        let extension = extension.into();

        if extension.is_empty() || extension.contains('/') || extension.contains('\\') {
            return Err(Error::InvalidBase {
                path: base.to_native(),
                message: format!("invalid file extension '{}'", extension),
            });
        }

        io::ensure_dir(&base)?;
        let native = base.to_native();
        let canonical = dunce::canonicalize(&native).map_err(|e| Error::io(&native, e))?;
        if !canonical.is_dir() {
            return Err(Error::InvalidBase {
                path: canonical,
                message: "not a directory".into(),
            });
        }

        Ok(Self {
            base: NormalizedPath::new(canonical),
            extension,
            robustness,
        })
    }

    /// The absolute base directory.
    pub fn base(&self) -> &NormalizedPath {
        &self.base
    }

    /// The file extension, including its leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Wildcard pattern matching every entity file of this store.
    pub fn pattern(&self) -> String {
        format!("*{}", self.extension)
    }

    /// Path of the file holding entity `id`.
    pub fn entity_path(&self, id: Uuid) -> NormalizedPath {
        self.base
            .join(&format!("{}{}", id.simple(), self.extension))
    }

    /// Write `contents` to `path`, creating missing directories.
    pub fn write(&self, path: &NormalizedPath, contents: &str) -> Result<()> {
        io::write_atomic(path, contents.as_bytes(), self.robustness)
    }

    /// Read the contents of `path`, or `None` if it does not exist.
    pub fn read(&self, path: &NormalizedPath) -> Result<Option<String>> {
        io::read_text(path)
    }

    /// Serialize `value` as JSON and write it to the file for `id`.
    pub fn save<T: Serialize>(&self, id: Uuid, value: &T) -> Result<NormalizedPath> {
        let path = self.entity_path(id);
        let contents = serde_json::to_string_pretty(value).map_err(|e| Error::Serialize {
            path: path.to_native(),
            message: e.to_string(),
        })?;
        self.write(&path, &contents)?;
        tracing::debug!(path = %path, "Wrote entity file");
        Ok(path)
    }

    /// Read and deserialize the file at `path`.
    ///
    /// A missing file yields `Ok(None)`; malformed JSON yields
    /// [`Error::Deserialize`].
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<Option<T>> {
        let Some(contents) = self.read(path)? else {
            return Ok(None);
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| Error::Deserialize {
                path: path.to_native(),
                message: e.to_string(),
            })
    }

    /// Delete the file for `id`. Deleting an absent entity is a no-op.
    ///
    /// Returns the path that was targeted so callers can evict caches.
    pub fn delete(&self, id: Uuid) -> Result<NormalizedPath> {
        let path = self.entity_path(id);
        if io::remove_file(&path)? {
            tracing::debug!(path = %path, "Deleted entity file");
        }
        Ok(path)
    }

    /// All entity files directly under the base directory.
    pub fn list(&self) -> Result<Vec<NormalizedPath>> {
        io::list_files(&self.base, &self.extension)
    }
}
