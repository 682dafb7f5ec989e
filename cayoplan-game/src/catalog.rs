//! Catalog of heist targets: what can be stolen and what it is worth.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::run::Mode;

/// Errors raised while loading or validating a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog rejected: {0}")]
    Invalid(String),
}

/// Payout range for a secondary item; a run values each stack at the average.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Midpoint of the range, the value assigned to one full stack.
    #[must_use]
    pub fn average(self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Primary target payout per difficulty mode.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ModeValues {
    pub standard: f64,
    pub hard: f64,
}

/// The main score of the heist. Exactly one is selected per run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PrimaryTarget {
    pub id: String,
    pub label: String,
    /// Display metadata carried opaquely for presentation layers.
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    pub value: ModeValues,
}

impl PrimaryTarget {
    /// Payout of this target under the given difficulty mode.
    #[must_use]
    pub fn value_for(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Standard => self.value.standard,
            Mode::Hard => self.value.hard,
        }
    }
}

/// A secondary loot type found around the island.
///
/// `pickup_units` is the cumulative weight obtained after 1..N grabs; it is
/// non-decreasing and its last entry matches `full_table_units`. A malformed
/// schedule degrades to the max-grab estimate rather than failing a run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ItemDefinition {
    pub id: String,
    pub label: String,
    pub value: ValueRange,
    /// Weight units of one full stack.
    pub full_table_units: u32,
    pub pickup_units: Vec<u32>,
}

/// Flat bonus looted from the office safe; not part of bag allocation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct OfficeSafe {
    pub min: f64,
    pub max: f64,
}

impl OfficeSafe {
    #[must_use]
    pub fn average(self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Target lists grouped as in the catalog document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Targets {
    pub primary: Vec<PrimaryTarget>,
    pub secondary: Vec<ItemDefinition>,
    pub office_safe: OfficeSafe,
}

/// Complete catalog configuration.
///
/// Built once at startup and passed immutably into every pipeline stage;
/// there is no ambient global configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Catalog {
    /// Capacity of one loot bag, in weight units.
    pub bag_capacity: u32,
    /// Item ids in the order the allocator should favor them.
    pub priority_order: Vec<String>,
    pub targets: Targets,
}

impl Catalog {
    /// Load a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or fails validation;
    /// no calculation may run against a rejected catalog.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the planner.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded asset is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(include_str!("../assets/catalog.json"))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.bag_capacity == 0 {
            return Err(CatalogError::Invalid("bag_capacity must be positive".into()));
        }
        if self.targets.primary.is_empty() {
            return Err(CatalogError::Invalid("no primary targets defined".into()));
        }
        if self.targets.secondary.is_empty() {
            return Err(CatalogError::Invalid("no secondary items defined".into()));
        }
        for item in &self.targets.secondary {
            if item.full_table_units == 0 {
                return Err(CatalogError::Invalid(format!(
                    "secondary item '{}' has zero stack weight",
                    item.id
                )));
            }
        }
        Ok(())
    }

    /// Find a primary target by ID.
    #[must_use]
    pub fn primary_target(&self, id: &str) -> Option<&PrimaryTarget> {
        self.targets.primary.iter().find(|target| target.id == id)
    }

    /// Find a secondary item by ID.
    #[must_use]
    pub fn secondary_item(&self, id: &str) -> Option<&ItemDefinition> {
        self.targets.secondary.iter().find(|item| item.id == id)
    }

    /// Allocation rank of an item: its index in `priority_order`.
    /// Items missing from the order sort after every listed one.
    #[must_use]
    pub fn priority_rank(&self, id: &str) -> usize {
        self.priority_order
            .iter()
            .position(|entry| entry == id)
            .unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses_and_validates() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.bag_capacity, 1800);
        assert_eq!(catalog.targets.primary.len(), 5);
        assert_eq!(catalog.targets.secondary.len(), 5);
        assert!(catalog.primary_target("pink_diamond").is_some());
        assert!(catalog.secondary_item("weed").is_some());
    }

    #[test]
    fn priority_rank_follows_order_and_pushes_unknowns_last() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.priority_rank("gold"), 0);
        assert_eq!(catalog.priority_rank("paintings"), 4);
        assert_eq!(catalog.priority_rank("bananas"), usize::MAX);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let json = r#"{
            "bag_capacity": 0,
            "priority_order": [],
            "targets": {
                "primary": [{"id":"t","label":"T","value":{"standard":1,"hard":2}}],
                "secondary": [{"id":"s","label":"S","value":{"min":1,"max":2},
                               "full_table_units":10,"pickup_units":[10]}],
                "office_safe": {"min": 0, "max": 0}
            }
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn garbage_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn mode_selects_the_matching_payout() {
        let catalog = Catalog::builtin().unwrap();
        let diamond = catalog.primary_target("pink_diamond").unwrap();
        assert!((diamond.value_for(Mode::Standard) - 1_300_000.0).abs() < f64::EPSILON);
        assert!((diamond.value_for(Mode::Hard) - 1_430_000.0).abs() < f64::EPSILON);
    }
}
