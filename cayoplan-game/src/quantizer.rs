//! Grab-schedule quantization: how many pickup actions a partial stack costs.
use crate::catalog::ItemDefinition;
use crate::numbers::round_f64_to_i32;

/// Amounts within this many units of a full stack are reported as full.
pub const FULL_STACK_SLACK: u32 = 10;

/// Human-readable grab estimate for a requested amount of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrabEstimate {
    pub text: String,
    /// Percent of a full stack, rounded and clamped to 0..=100.
    pub percent: u8,
}

/// Estimate the pickup actions needed to collect `amount_needed` units of
/// `item`, where `full_stack_size` is the weight of one untouched stack.
///
/// The schedule scan finds the first cumulative threshold covering the
/// amount; amounts at or beyond the full stack cost every grab. A schedule
/// that never reaches the amount degrades to the max-grab count instead of
/// failing. Single-threshold items are all-or-nothing cuts and always
/// report a full pickup.
#[must_use]
pub fn quantize(item: &ItemDefinition, amount_needed: u32, full_stack_size: u32) -> GrabEstimate {
    let percent = percent_of_stack(amount_needed, full_stack_size);

    let grabs = if amount_needed >= full_stack_size {
        item.pickup_units.len()
    } else {
        item.pickup_units
            .iter()
            .position(|&threshold| threshold >= amount_needed)
            .map_or(item.pickup_units.len(), |index| index + 1)
    };

    if item.pickup_units.len() == 1 {
        return GrabEstimate {
            text: "1 Cut (Full)".to_string(),
            percent: 100,
        };
    }

    if amount_needed >= full_stack_size.saturating_sub(FULL_STACK_SLACK) {
        return GrabEstimate {
            text: "Full Stack".to_string(),
            percent: 100,
        };
    }

    GrabEstimate {
        text: format!("~{grabs} Grabs"),
        percent,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent_of_stack(amount: u32, full: u32) -> u8 {
    if full == 0 {
        return 0;
    }
    let raw = round_f64_to_i32(f64::from(amount) / f64::from(full) * 100.0);
    raw.clamp(0, 100) as u8
}
