//! FanC CLI library for testing and reusability.

pub mod pipeline;
pub mod utils;

pub use fanc_utils::Config;
pub use pipeline::{CheckOptions, CheckOutcome};
