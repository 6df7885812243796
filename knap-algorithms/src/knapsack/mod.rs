pub mod brute_force;
pub mod dynamic;
pub mod fill;
pub mod greedy;
pub mod naive;
