use knap_challenges::{Item, Solution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPolicy {
    /// Stop at the first item that no longer fits.
    StopAtFirstRejection,
    /// Skip items that do not fit and keep scanning.
    SkipRejected,
}

/// Packs items in `order` until the knapsack is full under `policy`.
///
/// A weight sum that would overflow counts as not fitting. Value sums are
/// unchecked; `items` must have passed `validate_input`.
pub fn fill<I>(capacity: i64, items: &[Item], order: I, policy: FillPolicy) -> Solution
where
    I: IntoIterator<Item = usize>,
{
    let mut solution = Solution::new();
    for i in order {
        let item = &items[i];
        match solution.total_weight.checked_add(item.weight) {
            Some(total_weight) if total_weight <= capacity => {
                solution.total_weight = total_weight;
                solution.total_value += item.value;
                solution.items.push(i);
            }
            _ if policy == FillPolicy::StopAtFirstRejection => break,
            _ => {}
        }
    }
    solution
}
