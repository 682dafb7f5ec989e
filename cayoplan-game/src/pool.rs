//! Loot pool construction: user stack counts expanded into placement order.
use std::collections::HashMap;

use crate::catalog::Catalog;

/// Items that cannot be carried out of the compound by a lone player.
pub const SOLO_RESTRICTED_IDS: [&str; 2] = ["gold", "cash"];

/// One stack of secondary loot awaiting placement. Ephemeral: created per
/// calculation run and consumed by the allocator.
#[derive(Debug, Clone, PartialEq)]
pub struct LootInstance {
    pub id: String,
    pub label: String,
    /// Remaining weight; shrinks as the stack is split across bags.
    pub weight: u32,
    /// Remaining value; shrinks proportionally with the weight.
    pub value: f64,
    /// Weight of the untouched stack, used to detect partial placement.
    pub original_weight: u32,
    /// Lower ranks get first claim on bag space.
    pub priority: usize,
}

impl LootInstance {
    /// Whether part of this stack already went into an earlier bag.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.weight < self.original_weight
    }
}

/// Expand per-item stack counts into an ordered list of loot instances.
///
/// Solo runs skip the restricted items entirely. The result is sorted
/// ascending by catalog priority rank; the sort is stable, so equal ranks
/// keep catalog order. This ordering decides which loot gets bag space
/// first and is load-bearing for the allocator.
#[must_use]
pub fn build_pool(catalog: &Catalog, counts: &HashMap<String, u32>, players: u32) -> Vec<LootInstance> {
    let mut pool = Vec::new();

    for item in &catalog.targets.secondary {
        if players == 1 && SOLO_RESTRICTED_IDS.contains(&item.id.as_str()) {
            continue;
        }

        let count = counts.get(&item.id).copied().unwrap_or(0);
        let stack_value = item.value.average();
        for _ in 0..count {
            pool.push(LootInstance {
                id: item.id.clone(),
                label: item.label.clone(),
                weight: item.full_table_units,
                value: stack_value,
                original_weight: item.full_table_units,
                priority: catalog.priority_rank(&item.id),
            });
        }
    }

    pool.sort_by_key(|instance| instance.priority);
    pool
}
