use crate::item::{checked_total, generate_items, Item, DEFAULT_NAME_POOL};
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};
use std::{collections::HashSet, fmt, str::FromStr};

pub const DEFAULT_MAX_WEIGHT: i64 = 50;
pub const MIN_ITEM_WEIGHT: i64 = 1;
pub const MAX_ITEM_WEIGHT: i64 = 25;
pub const MIN_ITEM_VALUE: i64 = 1;
pub const MAX_ITEM_VALUE: i64 = 100;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Difficulty {
    pub num_items: usize,
    pub max_weight: i64,
}

impl From<Vec<i32>> for Difficulty {
    fn from(arr: Vec<i32>) -> Self {
        Self {
            num_items: arr[0] as usize,
            max_weight: arr[1] as i64,
        }
    }
}

impl Into<Vec<i32>> for Difficulty {
    fn into(self) -> Vec<i32> {
        vec![self.num_items as i32, self.max_weight as i32]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CaveSize {
    Small,
    Medium,
    Large,
}

impl CaveSize {
    pub const ALL: [CaveSize; 3] = [CaveSize::Small, CaveSize::Medium, CaveSize::Large];

    pub fn num_items(&self) -> usize {
        match self {
            CaveSize::Small => 5,
            CaveSize::Medium => 15,
            CaveSize::Large => 25,
        }
    }

    pub fn difficulty(&self, max_weight: i64) -> Difficulty {
        Difficulty {
            num_items: self.num_items(),
            max_weight,
        }
    }
}

impl fmt::Display for CaveSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CaveSize::Small => "small",
            CaveSize::Medium => "medium",
            CaveSize::Large => "large",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CaveSize {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(CaveSize::Small),
            "medium" => Ok(CaveSize::Medium),
            "large" => Ok(CaveSize::Large),
            _ => Err(anyhow!("Unknown cave size '{}'", s)),
        }
    }
}

/// Indices into the item list, in the order they were packed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub items: Vec<usize>,
    pub total_weight: i64,
    pub total_value: i64,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a solution from `indices`, summing weights and values from `items`.
    /// Panics if an index is out of bounds. The sums are unchecked; `items`
    /// must have passed [`crate::validate_input`].
    pub fn from_indices(items: &[Item], indices: Vec<usize>) -> Self {
        let total_weight = indices.iter().map(|&i| items[i].weight).sum();
        let total_value = indices.iter().map(|&i| items[i].value).sum();
        Self {
            items: indices,
            total_weight,
            total_value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected<'a>(&'a self, items: &'a [Item]) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().map(move |&i| &items[i])
    }
}

impl TryFrom<Map<String, Value>> for Solution {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub difficulty: Difficulty,
    pub items: Vec<Item>,
    pub max_weight: i64,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Challenge> {
        if difficulty.max_weight < 0 {
            return Err(anyhow!(
                "Max weight ({}) must be non-negative",
                difficulty.max_weight
            ));
        }
        let mut rng = SmallRng::from_seed(seed.clone());

        // Weights in [1, 25], values in [1, 100]
        let items = generate_items(
            &mut rng,
            difficulty.num_items,
            MIN_ITEM_WEIGHT..=MAX_ITEM_WEIGHT,
            MIN_ITEM_VALUE..=MAX_ITEM_VALUE,
            &DEFAULT_NAME_POOL,
        );

        Ok(Challenge {
            seed: seed.clone(),
            difficulty: difficulty.clone(),
            items,
            max_weight: difficulty.max_weight,
        })
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<i64> {
        let selected_items: HashSet<usize> = solution.items.iter().cloned().collect();
        if selected_items.len() != solution.items.len() {
            return Err(anyhow!("Duplicate items selected."));
        }

        let weights = selected_items
            .iter()
            .map(|&item| {
                if item >= self.items.len() {
                    return Err(anyhow!("Item ({}) is out of bounds", item));
                }
                Ok(self.items[item].weight)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let total_weight = checked_total(weights)
            .ok_or_else(|| anyhow!("Total weight of selected items overflows"))?;

        if total_weight > self.max_weight {
            return Err(anyhow!(
                "Total weight ({}) exceeded max weight ({})",
                total_weight,
                self.max_weight
            ));
        }
        if total_weight != solution.total_weight {
            return Err(anyhow!(
                "Reported total weight ({}) does not match selected items ({})",
                solution.total_weight,
                total_weight
            ));
        }

        let total_value = calculate_total_value(&solution.items, &self.items)
            .ok_or_else(|| anyhow!("Total value of selected items overflows"))?;
        if total_value != solution.total_value {
            return Err(anyhow!(
                "Reported total value ({}) does not match selected items ({})",
                solution.total_value,
                total_value
            ));
        }
        Ok(total_value)
    }
}

/// `None` if the sum overflows.
pub fn calculate_total_value(indices: &[usize], items: &[Item]) -> Option<i64> {
    checked_total(indices.iter().map(|&i| items[i].value))
}
