//! Children listings partition the whole kind

use std::collections::HashSet;

use proptest::prelude::*;
use store_model::{EntityPath, EntityRecord, Folder, RootKind};
use store_test_utils::TestStore;
use uuid::Uuid;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn children_partition_retrieve_all(
        folder_parents in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
        form_parents in prop::collection::vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let store = TestStore::new();
        let root = TestStore::root_path(RootKind::Forms);

        // Each folder goes under the root or an earlier folder
        let mut folders: Vec<Folder> = Vec::new();
        for choice in &folder_parents {
            let slot = choice.index(folders.len() + 1);
            let parent: EntityPath = if slot == 0 { root.clone() } else { folders[slot - 1].path().clone() };
            folders.push(store.add_folder(&parent, "folder"));
        }
        for choice in &form_parents {
            let slot = choice.index(folders.len() + 1);
            let parent = if slot == 0 { root.clone() } else { folders[slot - 1].path().clone() };
            store.add_form(&parent, "form");
        }

        let forms = store.entities().forms();
        let all: HashSet<Uuid> = forms.retrieve_all().unwrap().iter().map(|f| f.id()).collect();

        let mut seen: Vec<Uuid> = forms.retrieve_children(None).unwrap().iter().map(|f| f.id()).collect();
        for folder in &folders {
            let children = forms.retrieve_children(Some(folder.id())).unwrap();
            for child in &children {
                prop_assert_eq!(child.path().parent_id(), Some(folder.id()));
            }
            seen.extend(children.iter().map(|f| f.id()));
        }

        let unique: HashSet<Uuid> = seen.iter().copied().collect();
        prop_assert_eq!(unique.len(), seen.len(), "a form was listed under two parents");
        prop_assert_eq!(unique, all);
        prop_assert_eq!(seen.len(), form_parents.len());
    }
}
