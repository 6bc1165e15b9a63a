pub mod types;
pub mod classification;

pub use types::ScoutError;
pub use classification::ErrorClassification;
