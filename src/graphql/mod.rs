pub mod query;
pub mod transport;
pub mod client;

pub use query::{QueryLoader, QueryTemplate, ScoutQuery};
pub use transport::GraphQlTransport;
pub use client::ScoutClient;
