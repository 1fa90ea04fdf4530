use clap::{Args, Subcommand};

use pn_core::{Error, Result, ScrapeConfig};

use crate::manager::ScraperManager;
use crate::sources::peru;

#[derive(Args)]
pub struct ScraperArgs {
    #[command(subcommand)]
    pub command: ScraperCommands,
}

#[derive(Subcommand)]
pub enum ScraperCommands {
    /// Scrape one source (e.g. "rpp", "reddit"), or everything when omitted
    Scrape { source: Option<String> },
    /// List available sources
    List,
}

pub async fn handle_command(args: ScraperArgs) -> Result<()> {
    match args.command {
        ScraperCommands::Scrape { source } => {
            let manager = manager_for(source.as_deref())?;
            let articles = manager.run_all().await;
            println!("Found {} articles", articles.len());
            for article in &articles {
                println!("🆕 [{}] {} - {}", article.category, article.title, article.link);
            }
        }
        ScraperCommands::List => {
            println!("Available sources:");
            for spec in peru::sources() {
                println!("  {}", source_slug(&spec.name));
            }
            println!("  reddit");
        }
    }
    Ok(())
}

/// CLI shorthand for a source name ("El Comercio" -> "el-comercio").
pub fn source_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Build a manager scoped to one source slug, or to everything when no
/// slug is given.
pub fn manager_for(source: Option<&str>) -> Result<ScraperManager> {
    let mut config = ScrapeConfig::default();
    match source {
        None => ScraperManager::new(config),
        Some("reddit") => ScraperManager::with_sources(config, Vec::new()),
        Some(slug) => {
            let sources: Vec<_> = peru::sources()
                .into_iter()
                .filter(|s| source_slug(&s.name) == slug)
                .collect();
            if sources.is_empty() {
                return Err(Error::Scraping(format!("Unknown source: {}", slug)));
            }
            config.reddit.communities.clear();
            ScraperManager::with_sources(config, sources)
        }
    }
}
