use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum KnapsackError {
    Cancelled,
    InvalidCapacity {
        capacity: i64,
    },
    InvalidItem {
        index: usize,
        weight: i64,
        value: i64,
    },
    TableTooLarge {
        num_items: usize,
        width: i64,
        limit: usize,
    },
    Timeout {
        elapsed: Duration,
    },
    TotalOverflow {
        field: &'static str,
    },
}

impl std::fmt::Display for KnapsackError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            KnapsackError::Cancelled => write!(f, "Search was cancelled before completion"),
            KnapsackError::InvalidCapacity { capacity } => write!(
                f,
                "Capacity '{}' is invalid. Expected a non-negative capacity",
                capacity
            ),
            KnapsackError::InvalidItem {
                index,
                weight,
                value,
            } => write!(
                f,
                "Item ({}) is invalid. Weight: '{}', Value: '{}'. Both must be non-negative",
                index, weight, value
            ),
            KnapsackError::TableTooLarge {
                num_items,
                width,
                limit,
            } => write!(
                f,
                "Table of {} items by {} weights is too large. Limit: {} cells",
                num_items, width, limit
            ),
            KnapsackError::Timeout { elapsed } => write!(
                f,
                "Search exceeded its deadline after {:.3} seconds",
                elapsed.as_secs_f64()
            ),
            KnapsackError::TotalOverflow { field } => write!(
                f,
                "Total {} of all items does not fit in a 64-bit integer",
                field
            ),
        }
    }
}

impl std::error::Error for KnapsackError {}

pub type KnapsackResult<T> = std::result::Result<T, KnapsackError>;
