pub mod settings;
pub use settings::RunSettings;
pub mod worker;
pub use worker::*;
