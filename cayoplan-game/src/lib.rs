//! Cayo Planner Core
//!
//! Platform-agnostic loadout and payout logic for the island heist planner.
//! This crate provides the whole calculation pipeline without UI or
//! platform-specific dependencies: a typed catalog loaded from JSON, the
//! grab-schedule quantizer, the loot pool builder, the greedy bag
//! allocator, and the financial valuation.

pub mod allocator;
pub mod catalog;
pub mod numbers;
pub mod pool;
pub mod quantizer;
pub mod run;
pub mod valuation;

// Re-export commonly used types
pub use allocator::{BAG_FULL_SLACK, Bag, allocate};
pub use catalog::{
    Catalog, CatalogError, ItemDefinition, ModeValues, OfficeSafe, PrimaryTarget, Targets,
    ValueRange,
};
pub use numbers::format_usd;
pub use pool::{LootInstance, SOLO_RESTRICTED_IDS, build_pool};
pub use quantizer::{FULL_STACK_SLACK, GrabEstimate, quantize};
pub use run::{
    BagSummary, CalcError, LoadoutNotice, MAX_PLAYERS, MIN_PLAYERS, Mode, RunInput, RunOutput,
    calculate, parse_players, parse_stack_count,
};
pub use valuation::{FENCING_RATE, Financials, PAVEL_RATE, compute_financials};
