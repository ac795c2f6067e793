//! Sort specifications for report tables

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_label_conversions;

/// Keys whose natural order is alphabetical; every other key defaults to
/// descending (biggest numbers first).
const ASCENDING_BY_DEFAULT: [&str; 2] = ["name", "employee"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl_domain_label_conversions!(SortDirection {
    Asc => "asc" | "ascending",
    Desc => "desc" | "descending",
});

impl SortDirection {
    /// Direction a column gets the first time it is selected
    pub fn default_for(key: &str) -> Self {
        if ASCENDING_BY_DEFAULT.contains(&key) {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Sort key plus direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self { key: key.into(), direction }
    }

    pub fn asc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Key with its default direction
    pub fn natural(key: impl Into<String>) -> Self {
        let key = key.into();
        let direction = SortDirection::default_for(&key);
        Self { key, direction }
    }

    /// Column-header click: same key flips direction, a new key starts at
    /// its default.
    pub fn toggled(&self, key: &str) -> Self {
        if self.key == key {
            Self::new(key, self.direction.reversed())
        } else {
            Self::natural(key)
        }
    }
}

/// Orderings offered by the leave table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub enum LeaveSortMode {
    #[default]
    TotalDesc,
    TotalAsc,
    NameAsc,
    NameDesc,
}

impl_domain_label_conversions!(LeaveSortMode {
    TotalDesc => "totalDesc",
    TotalAsc => "totalAsc",
    NameAsc => "nameAsc",
    NameDesc => "nameDesc",
});
