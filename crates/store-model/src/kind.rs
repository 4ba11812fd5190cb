//! Entity kind discriminator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which variant an entity is.
///
/// Never written to entity files; it follows from the file's location and
/// the type it is read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Folder,
    Form,
    ConfiguredForm,
    Layout,
    Validation,
    DataValue,
    /// Synthetic top of a tree, never stored on disk
    Root,
}

impl EntityKind {
    /// Kinds backed by files, in lookup priority order.
    pub const PERSISTED: [EntityKind; 6] = [
        EntityKind::Folder,
        EntityKind::Form,
        EntityKind::ConfiguredForm,
        EntityKind::Layout,
        EntityKind::Validation,
        EntityKind::DataValue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Form => "form",
            Self::ConfiguredForm => "configured-form",
            Self::Layout => "layout",
            Self::Validation => "validation",
            Self::DataValue => "data-value",
            Self::Root => "root",
        }
    }

    /// Default tree icon for entities of this kind.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Folder => "icon-folder",
            Self::Form => "icon-formulate-form",
            Self::ConfiguredForm => "icon-formulate-conform",
            Self::Layout => "icon-formulate-layout",
            Self::Validation => "icon-formulate-validation",
            Self::DataValue => "icon-formulate-value",
            Self::Root => "icon-folder",
        }
    }

    /// Whether entities of this kind can contain other entities of the
    /// same hierarchy level. Only folders nest.
    pub fn nests(&self) -> bool {
        matches!(self, Self::Folder | Self::Root)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "folder" => Ok(Self::Folder),
            "form" => Ok(Self::Form),
            "configured-form" | "conform" => Ok(Self::ConfiguredForm),
            "layout" => Ok(Self::Layout),
            "validation" => Ok(Self::Validation),
            "data-value" | "datavalue" => Ok(Self::DataValue),
            "root" => Ok(Self::Root),
            _ => Err(Error::UnknownKind {
                kind: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("folder", EntityKind::Folder)]
    #[case("Configured_Form", EntityKind::ConfiguredForm)]
    #[case("conform", EntityKind::ConfiguredForm)]
    #[case("data-value", EntityKind::DataValue)]
    #[case("DataValue", EntityKind::DataValue)]
    fn parses_kind_names(#[case] input: &str, #[case] expected: EntityKind) {
        assert_eq!(input.parse::<EntityKind>().unwrap(), expected);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in EntityKind::PERSISTED {
            assert_eq!(kind.to_string().parse::<EntityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_error() {
        assert!("widget".parse::<EntityKind>().is_err());
    }

    #[test]
    fn only_folders_nest() {
        let nesting: Vec<_> = EntityKind::PERSISTED
            .into_iter()
            .filter(EntityKind::nests)
            .collect();
        assert_eq!(nesting, vec![EntityKind::Folder]);
    }
}
