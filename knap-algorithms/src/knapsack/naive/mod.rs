use crate::knapsack::fill::{fill, FillPolicy};
use knap_challenges::{validate_input, Item, KnapsackResult, Solution};

/// Packs the most valuable items first and stops at the first one that does
/// not fit, even if a lighter item further down would.
pub fn solve_naive(capacity: i64, items: &[Item]) -> KnapsackResult<Solution> {
    solve(capacity, items, FillPolicy::StopAtFirstRejection)
}

/// Same ordering as [`solve_naive`], but items that do not fit are skipped.
pub fn solve_naive_skipping(capacity: i64, items: &[Item]) -> KnapsackResult<Solution> {
    solve(capacity, items, FillPolicy::SkipRejected)
}

fn solve(capacity: i64, items: &[Item], policy: FillPolicy) -> KnapsackResult<Solution> {
    validate_input(capacity, items)?;

    // Stable sort keeps the original order among equal values
    let mut sorted_items: Vec<usize> = (0..items.len()).collect();
    sorted_items.sort_by(|&a, &b| items[b].value.cmp(&items[a].value));

    let solution = fill(capacity, items, sorted_items, policy);
    log::debug!(
        "naive ({:?}): {} of {} items, weight {}/{}, value {}",
        policy,
        solution.items.len(),
        items.len(),
        solution.total_weight,
        capacity,
        solution.total_value
    );
    Ok(solution)
}
