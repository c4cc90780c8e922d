//! Catalog Category Model

use serde::{Deserialize, Serialize};

/// Catalog category of a basket
///
/// Stored as the legacy display strings so documents written by the
/// previous console keep loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogCategory {
    #[default]
    #[serde(rename = "Romance")]
    Romance,
    #[serde(rename = "Familia & Amigos")]
    FamilyAndFriends,
    #[serde(rename = "Datas Especiais")]
    SpecialDates,
}

impl CatalogCategory {
    /// Every category, in select-box order
    pub const ALL: [CatalogCategory; 3] = [
        CatalogCategory::Romance,
        CatalogCategory::FamilyAndFriends,
        CatalogCategory::SpecialDates,
    ];

    /// Operator-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Romance => "Romance",
            Self::FamilyAndFriends => "Família & Amigos",
            Self::SpecialDates => "Datas Especiais",
        }
    }
}
