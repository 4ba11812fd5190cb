//! [`TestStore`] builder for entity store test scenarios.

use std::path::{Path, PathBuf};

use store_core::{EntityAggregator, EntityStore, StoreSettings};
use store_model::{
    ConfiguredForm, DataValue, EntityKind, EntityPath, EntityRecord, Folder, Form, Layout,
    RootKind, Validation,
};
use tempfile::TempDir;
use uuid::Uuid;

/// An entity store in a temporary directory, with helpers to populate it.
///
/// # Example
///
/// ```rust,no_run
/// use store_model::RootKind;
/// use store_test_utils::TestStore;
///
/// let store = TestStore::new();
/// let folder = store.add_folder(&RootKind::Forms.entity().path, "Marketing");
/// let form = store.add_form(&folder.header.path, "Contact");
/// store.assert_entity_file_exists(store_model::EntityKind::Form, form.header.id);
/// ```
pub struct TestStore {
    temp_dir: TempDir,
    store: EntityStore,
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStore {
    /// Create a store with default settings. Writes skip fsync.
    pub fn new() -> Self {
        Self::with_settings(|_| {})
    }

    /// Create a store after letting `configure` adjust the settings.
    pub fn with_settings(configure: impl FnOnce(&mut StoreSettings)) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let mut settings = StoreSettings::with_root(temp_dir.path().join("store"));
        settings.fsync = false;
        configure(&mut settings);
        let store = EntityStore::open(settings).expect("TestStore: failed to open store");
        Self { temp_dir, store }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn entities(&self) -> &EntityAggregator {
        self.store.entities()
    }

    /// Open a second store on the same directory with its own cache, as
    /// another process would see it.
    pub fn reopen(&self) -> EntityStore {
        EntityStore::open(self.store.settings().clone())
            .expect("TestStore::reopen: failed to open store")
    }

    /// Path of the file backing entity `id` of `kind`.
    pub fn entity_file(&self, kind: EntityKind, id: Uuid) -> PathBuf {
        let settings = self.store.settings();
        settings
            .directory_for(kind)
            .join(format!("{}{}", id.simple(), settings.extension_for(kind)))
    }

    pub fn add_folder(&self, parent: &EntityPath, name: &str) -> Folder {
        let folder = Folder::new(Uuid::new_v4(), parent, name);
        self.entities().folders().persist(&folder).unwrap();
        folder
    }

    pub fn add_form(&self, parent: &EntityPath, name: &str) -> Form {
        let form = Form::new(Uuid::new_v4(), parent, name);
        self.entities().forms().persist(&form).unwrap();
        form
    }

    pub fn add_configured_form(&self, form: &Form, name: &str) -> ConfiguredForm {
        let conform = ConfiguredForm::new(Uuid::new_v4(), form.path(), name);
        self.entities().configured_forms().persist(&conform).unwrap();
        conform
    }

    pub fn add_layout(&self, parent: &EntityPath, name: &str) -> Layout {
        let layout = Layout::new(Uuid::new_v4(), parent, name, Uuid::new_v4());
        self.entities().layouts().persist(&layout).unwrap();
        layout
    }

    pub fn add_validation(&self, parent: &EntityPath, name: &str) -> Validation {
        let validation = Validation::new(Uuid::new_v4(), parent, name, Uuid::new_v4());
        self.entities().validations().persist(&validation).unwrap();
        validation
    }

    pub fn add_data_value(&self, parent: &EntityPath, name: &str) -> DataValue {
        let value = DataValue::new(Uuid::new_v4(), parent, name, Uuid::new_v4());
        self.entities().data_values().persist(&value).unwrap();
        value
    }

    /// Path of a well-known root, for placing top-level entities.
    pub fn root_path(root: RootKind) -> EntityPath {
        root.entity().path
    }

    /// Assert that a file backs entity `id` of `kind`.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file does not exist.
    pub fn assert_entity_file_exists(&self, kind: EntityKind, id: Uuid) {
        let path = self.entity_file(kind, id);
        assert!(path.exists(), "Expected entity file to exist: {}", path.display());
    }

    /// Assert that no file backs entity `id` of `kind`.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file exists.
    pub fn assert_entity_file_not_exists(&self, kind: EntityKind, id: Uuid) {
        let path = self.entity_file(kind, id);
        assert!(!path.exists(), "Expected entity file NOT to exist: {}", path.display());
    }
}
