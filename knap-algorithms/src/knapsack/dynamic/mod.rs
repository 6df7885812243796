use crate::deadline::Deadline;
use knap_challenges::{validate_input, Item, KnapsackError, KnapsackResult, Solution};

/// Most keep-table cells (items x weights) the solver will allocate.
pub const MAX_DP_CELLS: usize = 1 << 25;

/// O(n * capacity) exact solver over integer weights.
///
/// Finds the same optimal value as [`crate::solve_exact`]; when several
/// subsets share that value the chosen one may differ. An item that fits is
/// taken on equal value, so zero-value items that fit are selected. The table
/// width is capped at the total weight of all items, since no subset can weigh
/// more. Tables above [`MAX_DP_CELLS`] fail with `TableTooLarge`.
pub fn solve_dynamic(capacity: i64, items: &[Item]) -> KnapsackResult<Solution> {
    solve_dynamic_with_deadline(capacity, items, &Deadline::none())
}

pub fn solve_dynamic_with_deadline(
    capacity: i64,
    items: &[Item],
    deadline: &Deadline,
) -> KnapsackResult<Solution> {
    validate_input(capacity, items)?;
    let total_weight: i64 = items.iter().map(|item| item.weight).sum();
    let max_weight = capacity.min(total_weight);
    let too_large = KnapsackError::TableTooLarge {
        num_items: items.len(),
        width: max_weight,
        limit: MAX_DP_CELLS,
    };
    let max_weight = usize::try_from(max_weight).map_err(|_| too_large.clone())?;
    let cells = max_weight
        .checked_add(1)
        .and_then(|width| width.checked_mul(items.len().max(1)));
    if !matches!(cells, Some(cells) if cells <= MAX_DP_CELLS) {
        return Err(too_large);
    }

    let mut dp = vec![0i64; max_weight + 1];
    let mut keep = vec![vec![false; max_weight + 1]; items.len()];

    let check_deadline = !deadline.is_unbounded();
    for (i, item) in items.iter().enumerate() {
        if check_deadline {
            deadline.check()?;
        }
        let weight = match usize::try_from(item.weight) {
            Ok(weight) if weight <= max_weight => weight,
            _ => continue,
        };
        for w in (weight..=max_weight).rev() {
            let candidate = dp[w - weight] + item.value;
            if candidate >= dp[w] {
                dp[w] = candidate;
                keep[i][w] = true;
            }
        }
    }

    let mut selected = Vec::new();
    let mut w = max_weight;
    for i in (0..items.len()).rev() {
        if keep[i][w] {
            selected.push(i);
            w -= items[i].weight as usize;
        }
    }
    selected.reverse();

    let solution = Solution::from_indices(items, selected);
    debug_assert_eq!(solution.total_value, dp[max_weight]);
    log::debug!(
        "dynamic: {}x{} table, weight {}/{}, value {}",
        items.len(),
        max_weight + 1,
        solution.total_weight,
        capacity,
        solution.total_value
    );
    Ok(solution)
}
