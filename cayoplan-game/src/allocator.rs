//! Greedy bag filling: first-fit in bag order, splitting stacks as needed.
use serde::Serialize;

use crate::catalog::Catalog;
use crate::pool::LootInstance;
use crate::quantizer::quantize;

/// A bag with this little space left is treated as full for the rest of the
/// run and skipped, even though a few units are arithmetically unused.
pub const BAG_FULL_SLACK: u32 = 10;

/// One player's loot bag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bag {
    pub capacity: u32,
    /// Monotonically increasing; never exceeds `capacity`.
    pub current_weight: u32,
    /// Unrounded accumulated value of the contents.
    pub value: f64,
    /// Human-readable content lines, appended in placement order.
    pub contents: Vec<String>,
}

impl Bag {
    #[must_use]
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            current_weight: 0,
            value: 0.0,
            contents: Vec::new(),
        }
    }

    #[must_use]
    pub fn space_left(&self) -> u32 {
        self.capacity.saturating_sub(self.current_weight)
    }

    /// Whether the bag is past the "basically full" threshold.
    #[must_use]
    pub fn is_basically_full(&self) -> bool {
        self.space_left() <= BAG_FULL_SLACK
    }

    /// Fill level in 0.0..=1.0 for gauges.
    #[must_use]
    pub fn fill_fraction(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (f64::from(self.current_weight) / f64::from(self.capacity)).min(1.0)
    }
}

/// Distribute the ordered pool across the bags.
///
/// Single forward pass per instance, no backtracking: bags are scanned in
/// creation order, a stack that does not fit whole is split and its
/// remainder carried to the next bag, and whatever is left after the last
/// bag is dropped. Dropped weight is logged but intentionally absent from
/// any output figure.
pub fn allocate(catalog: &Catalog, pool: Vec<LootInstance>, bags: &mut [Bag]) {
    for mut item in pool {
        let Some(definition) = catalog.secondary_item(&item.id) else {
            continue;
        };

        for bag in bags.iter_mut() {
            if bag.is_basically_full() {
                continue;
            }
            let space = bag.space_left();

            if item.weight <= space {
                // The whole remaining stack fits here.
                bag.current_weight += item.weight;
                bag.value += item.value;
                if item.is_partial() {
                    let estimate = quantize(definition, item.weight, item.original_weight);
                    bag.contents
                        .push(format!("{}: {} (Remainder)", item.label, estimate.text));
                } else {
                    bag.contents.push(format!("Full Stack of {}", item.label));
                }
                item.weight = 0;
                item.value = 0.0;
                break;
            }

            // Partial fit: take exactly the remaining space, preserving
            // linear value density on the split.
            let taken = space;
            let taken_value = item.value * (f64::from(taken) / f64::from(item.weight));
            let estimate = quantize(definition, taken, item.original_weight);

            bag.current_weight += taken;
            bag.value += taken_value;
            bag.contents.push(format!(
                "{}: {} ({}%)",
                item.label, estimate.text, estimate.percent
            ));

            item.weight -= taken;
            item.value -= taken_value;
        }

        if item.weight > 0 {
            log::warn!(
                "dropping {} units of {}: all bags full",
                item.weight,
                item.id
            );
        }
    }
}
