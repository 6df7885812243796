use knap_algorithms::Strategy;
use knap_challenges::{CaveSize, DEFAULT_MAX_WEIGHT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunSettings {
    pub seed: u64,
    pub capacity: i64,
    pub caves: Vec<CaveSize>,
    pub strategies: Vec<Strategy>,
    pub timeout_ms: Option<u64>,
    pub workers: usize,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            seed: 1337,
            capacity: DEFAULT_MAX_WEIGHT,
            caves: CaveSize::ALL.to_vec(),
            strategies: Strategy::ALL.to_vec(),
            timeout_ms: None,
            workers: 1,
        }
    }
}

impl RunSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
