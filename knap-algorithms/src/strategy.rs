use crate::{
    deadline::Deadline, solve_dynamic_with_deadline, solve_exact_with_deadline, solve_greedy,
    solve_greedy_skipping, solve_naive, solve_naive_skipping,
};
use anyhow::{anyhow, Result};
use knap_challenges::{Item, KnapsackResult, Solution};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Naive,
    NaiveSkipping,
    BruteForce,
    Dynamic,
    Greedy,
    GreedySkipping,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Naive,
        Strategy::NaiveSkipping,
        Strategy::BruteForce,
        Strategy::Dynamic,
        Strategy::Greedy,
        Strategy::GreedySkipping,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::NaiveSkipping => "naive_skipping",
            Strategy::BruteForce => "brute_force",
            Strategy::Dynamic => "dynamic",
            Strategy::Greedy => "greedy",
            Strategy::GreedySkipping => "greedy_skipping",
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Strategy::BruteForce | Strategy::Dynamic)
    }

    /// Heuristics ignore `deadline`; they finish in O(n log n).
    pub fn solve(
        &self,
        capacity: i64,
        items: &[Item],
        deadline: &Deadline,
    ) -> KnapsackResult<Solution> {
        match self {
            Strategy::Naive => solve_naive(capacity, items),
            Strategy::NaiveSkipping => solve_naive_skipping(capacity, items),
            Strategy::BruteForce => solve_exact_with_deadline(capacity, items, deadline),
            Strategy::Dynamic => solve_dynamic_with_deadline(capacity, items, deadline),
            Strategy::Greedy => solve_greedy(capacity, items),
            Strategy::GreedySkipping => solve_greedy_skipping(capacity, items),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase().replace('-', "_");
        Strategy::ALL
            .iter()
            .find(|strategy| strategy.name() == s)
            .copied()
            .ok_or_else(|| anyhow!("Unknown strategy '{}'", s))
    }
}
