//! The calculation pipeline: run input in, display-ready run output out.
//!
//! `calculate` is a pure function of the catalog and the run input. Every
//! invocation rebuilds the pool and the bags from scratch, so repeated runs
//! with identical inputs produce bit-identical output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::allocator::{Bag, allocate};
use crate::catalog::Catalog;
use crate::numbers::round_f64_to_i32;
use crate::pool::build_pool;
use crate::valuation::{Financials, compute_financials};

pub const MIN_PLAYERS: u32 = 1;
pub const MAX_PLAYERS: u32 = 4;

/// Heist difficulty, selecting the primary target payout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Standard,
    Hard,
}

/// Errors that abort a calculation run. Bad numeric input is never an
/// error; it falls back to documented defaults instead.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("unknown primary target '{0}'")]
    UnknownPrimaryTarget(String),
}

/// Raw, form-shaped input for one calculation run. Numeric fields are kept
/// as free text because that is what the adapter receives; parsing with
/// defaults happens inside the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunInput {
    pub primary_id: String,
    pub mode: Mode,
    /// Player count as typed; clamped to 1..=4, default 1.
    pub players: String,
    /// Requested full-stack count per secondary item id, as typed;
    /// missing or malformed entries count as 0.
    pub stack_counts: HashMap<String, String>,
}

/// Why the loadout section has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadoutNotice {
    /// Group run with no secondary stacks requested.
    NoSecondarySelected,
    /// Solo run with an empty pool (gold and cash are restricted solo).
    SoloRestricted,
}

/// Per-bag view of the allocation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BagSummary {
    /// 1-based player number, matching bag creation order.
    pub player: u32,
    pub weight: u32,
    pub capacity: u32,
    /// Fill level in 0.0..=1.0 for gauges.
    pub fill_fraction: f64,
    /// Rounded fill percentage for labels, 0..=100.
    pub fill_percent: u8,
    pub contents: Vec<String>,
}

/// Everything the presentation layer needs for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutput {
    pub financials: Financials,
    pub bags: Vec<BagSummary>,
    /// Set when the run is solo, as an advisory for the player.
    pub solo_warning: bool,
    pub notice: Option<LoadoutNotice>,
}

/// Parse a free-text player count: clamped to 1..=4, default 1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_players(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .map_or(MIN_PLAYERS, |n| n.clamp(i64::from(MIN_PLAYERS), i64::from(MAX_PLAYERS)) as u32)
}

/// Parse a free-text stack count: non-negative, default 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_stack_count(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .map_or(0, |n| n.clamp(0, i64::from(u32::MAX)) as u32)
}

/// Run the full pipeline: pool build, allocation, valuation, summaries.
///
/// # Errors
///
/// Returns an error if the selected primary target is not in the catalog;
/// no partial output is produced in that case.
pub fn calculate(catalog: &Catalog, input: &RunInput) -> Result<RunOutput, CalcError> {
    let players = parse_players(&input.players);
    let primary = catalog
        .primary_target(&input.primary_id)
        .ok_or_else(|| CalcError::UnknownPrimaryTarget(input.primary_id.clone()))?;

    let counts: HashMap<String, u32> = input
        .stack_counts
        .iter()
        .map(|(id, raw)| (id.clone(), parse_stack_count(raw)))
        .collect();

    let pool = build_pool(catalog, &counts, players);
    let notice = if pool.is_empty() {
        Some(if players == 1 {
            LoadoutNotice::SoloRestricted
        } else {
            LoadoutNotice::NoSecondarySelected
        })
    } else {
        None
    };

    let mut bags: Vec<Bag> = (0..players)
        .map(|_| Bag::new(catalog.bag_capacity))
        .collect();
    allocate(catalog, pool, &mut bags);

    let financials =
        compute_financials(primary.value_for(input.mode), &bags, catalog.targets.office_safe);

    let summaries = bags
        .iter()
        .enumerate()
        .map(|(index, bag)| summarize_bag(u32::try_from(index + 1).unwrap_or(u32::MAX), bag))
        .collect();

    Ok(RunOutput {
        financials,
        bags: summaries,
        solo_warning: players == 1,
        notice,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn summarize_bag(player: u32, bag: &Bag) -> BagSummary {
    let fraction = bag.fill_fraction();
    BagSummary {
        player,
        weight: bag.current_weight,
        capacity: bag.capacity,
        fill_fraction: fraction,
        fill_percent: round_f64_to_i32(fraction * 100.0).clamp(0, 100) as u8,
        contents: bag.contents.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(primary: &str, players: &str, counts: &[(&str, &str)]) -> RunInput {
        RunInput {
            primary_id: primary.to_string(),
            mode: Mode::Standard,
            players: players.to_string(),
            stack_counts: counts
                .iter()
                .map(|(id, raw)| ((*id).to_string(), (*raw).to_string()))
                .collect(),
        }
    }

    #[test]
    fn player_parsing_clamps_and_defaults() {
        assert_eq!(parse_players("3"), 3);
        assert_eq!(parse_players(" 2 "), 2);
        assert_eq!(parse_players("0"), 1);
        assert_eq!(parse_players("-5"), 1);
        assert_eq!(parse_players("9"), 4);
        assert_eq!(parse_players(""), 1);
        assert_eq!(parse_players("two"), 1);
    }

    #[test]
    fn stack_count_parsing_defaults_to_zero() {
        assert_eq!(parse_stack_count("3"), 3);
        assert_eq!(parse_stack_count("-1"), 0);
        assert_eq!(parse_stack_count(""), 0);
        assert_eq!(parse_stack_count("lots"), 0);
    }

    #[test]
    fn unknown_primary_target_aborts_the_run() {
        let catalog = Catalog::builtin().unwrap();
        let result = calculate(&catalog, &input("golden_goose", "2", &[]));
        assert!(matches!(result, Err(CalcError::UnknownPrimaryTarget(id)) if id == "golden_goose"));
    }

    #[test]
    fn solo_run_sets_warning_and_restricted_notice() {
        let catalog = Catalog::builtin().unwrap();
        let output = calculate(&catalog, &input("tequila", "1", &[("gold", "3")])).unwrap();
        assert!(output.solo_warning);
        assert_eq!(output.notice, Some(LoadoutNotice::SoloRestricted));
        assert_eq!(output.bags.len(), 1);
        assert_eq!(output.bags[0].weight, 0);
    }

    #[test]
    fn group_run_with_no_requests_notices_empty_selection() {
        let catalog = Catalog::builtin().unwrap();
        let output = calculate(&catalog, &input("tequila", "3", &[])).unwrap();
        assert!(!output.solo_warning);
        assert_eq!(output.notice, Some(LoadoutNotice::NoSecondarySelected));
    }

    #[test]
    fn bag_summary_reports_rounded_fill_percent() {
        let catalog = Catalog::builtin().unwrap();
        let output = calculate(&catalog, &input("tequila", "1", &[("weed", "1")])).unwrap();
        let bag = &output.bags[0];
        assert_eq!(bag.weight, 675);
        assert_eq!(bag.fill_percent, 38); // 675 / 1800 = 37.5%
        assert!(bag.fill_fraction > 0.374 && bag.fill_fraction < 0.376);
        assert!(output.notice.is_none());
    }
}
