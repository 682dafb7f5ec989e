//! Financial breakdown: gross take and the cuts skimmed off it.
use serde::Serialize;

use crate::allocator::Bag;
use crate::catalog::OfficeSafe;

/// Fence's cut of the gross take.
pub const FENCING_RATE: f64 = 0.10;
/// Pavel's cut of the gross take.
pub const PAVEL_RATE: f64 = 0.02;

/// Monetary summary of one run. All fields are unrounded; rounding belongs
/// to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Financials {
    pub primary: f64,
    pub secondary: f64,
    pub safe: f64,
    pub gross: f64,
    pub fencing_fee: f64,
    pub pavel_cut: f64,
    pub net: f64,
}

/// Sum bag values, add the flat safe bonus, and deduct the two cuts.
/// Both deductions are computed independently from gross, not chained.
#[must_use]
pub fn compute_financials(primary_value: f64, bags: &[Bag], safe: OfficeSafe) -> Financials {
    let secondary: f64 = bags.iter().map(|bag| bag.value).sum();
    let safe_value = safe.average();
    let gross = primary_value + secondary + safe_value;
    let fencing_fee = gross * FENCING_RATE;
    let pavel_cut = gross * PAVEL_RATE;

    Financials {
        primary: primary_value,
        secondary,
        safe: safe_value,
        gross,
        fencing_fee,
        pavel_cut,
        net: gross - fencing_fee - pavel_cut,
    }
}
