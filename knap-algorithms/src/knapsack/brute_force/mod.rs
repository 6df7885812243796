use crate::deadline::Deadline;
use itertools::Itertools;
use knap_challenges::{validate_input, Item, KnapsackResult, Solution};

/// Above this many items the 2^n enumeration stops being practical.
pub const MAX_BRUTE_FORCE_ITEMS: usize = 25;

const DEADLINE_CHECK_INTERVAL: u64 = 4096;

/// Tries every combination of items and keeps the most valuable one that fits.
///
/// Combinations are enumerated by increasing size, then in lexicographic
/// index order. The first combination that fits is always taken, even with
/// value 0; after that a candidate replaces the best only if its value is
/// strictly greater, so among equally valuable subsets the first one found is
/// kept. Selected indices are returned in ascending order.
pub fn solve_exact(capacity: i64, items: &[Item]) -> KnapsackResult<Solution> {
    solve_exact_with_deadline(capacity, items, &Deadline::none())
}

pub fn solve_exact_with_deadline(
    capacity: i64,
    items: &[Item],
    deadline: &Deadline,
) -> KnapsackResult<Solution> {
    validate_input(capacity, items)?;
    let num_items = items.len();
    if num_items > MAX_BRUTE_FORCE_ITEMS {
        log::warn!(
            "brute force over {} items enumerates 2^{} combinations",
            num_items,
            num_items
        );
    }

    let check_deadline = !deadline.is_unbounded();
    let mut best: Option<Solution> = None;
    let mut num_checked = 0u64;
    for size in 1..=num_items {
        for combo in (0..num_items).combinations(size) {
            num_checked += 1;
            if check_deadline && num_checked % DEADLINE_CHECK_INTERVAL == 0 {
                deadline.check()?;
            }

            let total_weight: i64 = combo.iter().map(|&i| items[i].weight).sum();
            if total_weight > capacity {
                continue;
            }
            let total_value: i64 = combo.iter().map(|&i| items[i].value).sum();
            if best
                .as_ref()
                .map_or(true, |best| total_value > best.total_value)
            {
                best = Some(Solution {
                    items: combo,
                    total_weight,
                    total_value,
                });
            }
        }
    }
    let best = best.unwrap_or_default();

    log::debug!(
        "brute force: checked {} combinations, best weight {}/{}, value {}",
        num_checked,
        best.total_weight,
        capacity,
        best.total_value
    );
    Ok(best)
}
