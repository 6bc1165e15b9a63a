use console::style;

use crate::config::ConfigOverrides;
use crate::errors::ScoutError;
use crate::graphql::{QueryLoader, ScoutQuery};
use super::commands::Cli;

/// Check that a report could run: settings resolve, credentials are present,
/// and both query templates load. Makes no network calls.
pub async fn handle_validate(cli: &Cli) -> Result<(), ScoutError> {
    let overrides = ConfigOverrides {
        organization: cli.org.clone(),
        ..Default::default()
    };
    let config = super::load_config(cli.config.as_deref(), &overrides).await?;
    let organization = config.require_organization()?;
    config.require_token()?;

    let loader = QueryLoader::new(config.queries_dir.clone());
    for query in [ScoutQuery::StreamImages, ScoutQuery::ImageVulnerabilities] {
        loader.load(query)?;
    }

    println!("{} Configuration is valid", style("✓").green());
    println!("  organization: {}", organization);
    println!("  endpoint:     {}", config.endpoint);
    println!("  timeout:      {}s", config.timeout.as_secs());
    println!(
        "  queries:      {}",
        loader
            .queries_dir()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "built-in".to_string())
    );
    Ok(())
}
