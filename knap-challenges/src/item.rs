use crate::error::{KnapsackError, KnapsackResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive};

pub const DEFAULT_NAME_POOL: [&str; 10] = [
    "painting",
    "jewel",
    "coin",
    "statue",
    "treasure chest",
    "gold",
    "silver",
    "sword",
    "goblet",
    "hat",
];

/// A piece of loot. Identity is positional: two items may share a name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub weight: i64,
    pub value: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: i64, value: i64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.weight >= 0 && self.value >= 0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {} lbs, ${}", self.name, self.weight, self.value)
    }
}

pub fn generate_items<R: Rng>(
    rng: &mut R,
    count: usize,
    weight_range: RangeInclusive<i64>,
    value_range: RangeInclusive<i64>,
    name_pool: &[&str],
) -> Vec<Item> {
    (0..count)
        .map(|_| {
            let name = if name_pool.is_empty() {
                "item"
            } else {
                name_pool[rng.gen_range(0..name_pool.len())]
            };
            let weight = rng.gen_range(weight_range.clone());
            let value = rng.gen_range(value_range.clone());
            Item::new(name, weight, value)
        })
        .collect()
}

/// Rejects the whole input if the capacity or any single item is invalid.
///
/// Also rejects inputs whose total weight or total value overflows `i64`.
/// Once this passes, every subset sum fits, so the strategies can add
/// weights and values without checking.
pub fn validate_input(capacity: i64, items: &[Item]) -> KnapsackResult<()> {
    if capacity < 0 {
        return Err(KnapsackError::InvalidCapacity { capacity });
    }
    if let Some(index) = items.iter().position(|item| !item.is_valid()) {
        return Err(KnapsackError::InvalidItem {
            index,
            weight: items[index].weight,
            value: items[index].value,
        });
    }
    if checked_total(items.iter().map(|item| item.weight)).is_none() {
        return Err(KnapsackError::TotalOverflow { field: "weight" });
    }
    if checked_total(items.iter().map(|item| item.value)).is_none() {
        return Err(KnapsackError::TotalOverflow { field: "value" });
    }
    Ok(())
}

/// Sum that returns `None` instead of overflowing.
pub fn checked_total<I: IntoIterator<Item = i64>>(values: I) -> Option<i64> {
    values
        .into_iter()
        .try_fold(0i64, |total, value| total.checked_add(value))
}

/// Splits `items` into the valid ones and the errors describing the rest.
/// Dropped items are logged.
pub fn partition_valid_items(items: Vec<Item>) -> (Vec<Item>, Vec<KnapsackError>) {
    let mut valid = Vec::with_capacity(items.len());
    let mut errors = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        if item.is_valid() {
            valid.push(item);
        } else {
            let err = KnapsackError::InvalidItem {
                index,
                weight: item.weight,
                value: item.value,
            };
            log::warn!("skipping '{}': {}", item.name, err);
            errors.push(err);
        }
    }
    (valid, errors)
}
