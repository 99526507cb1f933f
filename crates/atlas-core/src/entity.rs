use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AtlasError;

macro_rules! table_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

table_id!(
    /// Primary key of the continents table.
    ContinentId
);
table_id!(
    /// Primary key of the regions table.
    RegionId
);
table_id!(
    /// Primary key of the countries table.
    CountryId
);

/// Top-level geographic grouping; root of the region → country hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    /// Unique identifier. Continents are enumerated in ascending id order.
    pub id: ContinentId,
    /// Display name.
    pub name: String,
}

impl Continent {
    /// Create a continent row.
    pub fn new(id: impl Into<ContinentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A region belongs to exactly one continent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Unique identifier.
    pub id: RegionId,
    /// Display name.
    pub name: String,
    /// The continent this region belongs to.
    pub continent_id: ContinentId,
}

impl Region {
    /// Create a region row.
    pub fn new(
        id: impl Into<RegionId>,
        name: impl Into<String>,
        continent_id: impl Into<ContinentId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            continent_id: continent_id.into(),
        }
    }
}

/// A country belongs to exactly one region, and through it to one continent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Unique identifier.
    pub id: CountryId,
    /// Display name.
    pub name: String,
    /// The region this country belongs to.
    pub region_id: RegionId,
}

impl Country {
    /// Create a country row.
    pub fn new(
        id: impl Into<CountryId>,
        name: impl Into<String>,
        region_id: impl Into<RegionId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region_id: region_id.into(),
        }
    }
}

/// One of the three sparse per-country metric tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Net exports (exports minus imports).
    NetExports,
    /// Total government spending.
    GovernmentSpending,
    /// Quality-of-life index.
    QualityOfLife,
}

impl Metric {
    /// All metric tables, in lookup order.
    pub const ALL: [Metric; 3] = [
        Metric::NetExports,
        Metric::GovernmentSpending,
        Metric::QualityOfLife,
    ];

    /// The table name used in snapshots.
    pub fn table_name(self) -> &'static str {
        match self {
            Self::NetExports => "net_exports",
            Self::GovernmentSpending => "government_spending",
            Self::QualityOfLife => "quality_of_life",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

impl FromStr for Metric {
    type Err = AtlasError;

    /// Accepts the table name or a short alias (`exports`, `spending`, `qol`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "net_exports" | "exports" => Ok(Self::NetExports),
            "government_spending" | "spending" => Ok(Self::GovernmentSpending),
            "quality_of_life" | "qol" => Ok(Self::QualityOfLife),
            _ => Err(AtlasError::UnknownMetric(s.to_string())),
        }
    }
}
