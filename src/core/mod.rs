pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::{Month, Time};
pub use config::{AnatomyConfig, OverDamagePolicy};
pub use error::{AnatomyError, Result};
