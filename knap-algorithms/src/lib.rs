pub mod deadline;
pub use deadline::Deadline;
pub mod knapsack;
pub use knapsack::brute_force::{solve_exact, solve_exact_with_deadline, MAX_BRUTE_FORCE_ITEMS};
pub use knapsack::dynamic::{solve_dynamic, solve_dynamic_with_deadline, MAX_DP_CELLS};
pub use knapsack::fill::{fill, FillPolicy};
pub use knapsack::greedy::{efficiency, solve_greedy, solve_greedy_skipping};
pub use knapsack::naive::{solve_naive, solve_naive_skipping};
pub mod strategy;
pub use strategy::Strategy;
