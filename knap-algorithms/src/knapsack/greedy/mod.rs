use crate::knapsack::fill::{fill, FillPolicy};
use knap_challenges::{validate_input, Item, KnapsackResult, Solution};
use std::cmp::Ordering;

/// Packs items by value/weight ratio and stops at the first one that does not
/// fit. No optimality guarantee.
pub fn solve_greedy(capacity: i64, items: &[Item]) -> KnapsackResult<Solution> {
    solve(capacity, items, FillPolicy::StopAtFirstRejection)
}

/// Same ordering as [`solve_greedy`], but items that do not fit are skipped.
pub fn solve_greedy_skipping(capacity: i64, items: &[Item]) -> KnapsackResult<Solution> {
    solve(capacity, items, FillPolicy::SkipRejected)
}

/// Value per unit of weight. Weightless items cost nothing and rank first.
pub fn efficiency(item: &Item) -> f64 {
    if item.weight == 0 {
        f64::INFINITY
    } else {
        item.value as f64 / item.weight as f64
    }
}

fn solve(capacity: i64, items: &[Item], policy: FillPolicy) -> KnapsackResult<Solution> {
    validate_input(capacity, items)?;

    // Pair each item index with its ratio
    let mut item_values: Vec<(usize, f64)> = items
        .iter()
        .enumerate()
        .map(|(i, item)| (i, efficiency(item)))
        .collect();

    // Sort the list of ratios in descending order, ties keep input order
    item_values.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let solution = fill(
        capacity,
        items,
        item_values.into_iter().map(|(i, _)| i),
        policy,
    );
    log::debug!(
        "greedy ({:?}): {} of {} items, weight {}/{}, value {}",
        policy,
        solution.items.len(),
        items.len(),
        solution.total_weight,
        capacity,
        solution.total_value
    );
    Ok(solution)
}
