pub mod cli;
pub mod config;
pub mod errors;
pub mod graphql;
pub mod models;
pub mod reporting;
pub mod scout;
pub mod utils;
