pub mod error;
pub use error::*;
pub mod item;
pub use item::*;
pub mod knapsack;
pub use knapsack::*;
