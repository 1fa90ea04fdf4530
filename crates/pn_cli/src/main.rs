use std::sync::Arc;

use clap::Parser;
use tracing::info;

use pn_core::{ArticleStorage, Result, ScrapeConfig};
use pn_scrapers::cli::{manager_for, source_slug};
use pn_scrapers::ScraperManager;
use pn_storage::MemoryStorage;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the scraping pipeline once and print what was stored
    Scrape {
        /// Source to scrape (e.g. "rpp", "el-comercio", "reddit").
        /// Scrapes everything when omitted.
        source: Option<String>,
    },
    /// Classify a piece of text without scraping anything
    Classify {
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value = "")]
        url: String,
    },
    /// List configured sources
    List,
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape { source } => {
            let manager = manager_for(source.as_deref())?;
            let storage = MemoryStorage::new();
            let articles = manager.run_all().await;
            let report = pn_storage::persist_articles(&storage, &articles).await;
            for article in &articles {
                println!(
                    "🆕 [{}] {} - {}",
                    article.category, article.title, article.link
                );
            }
            info!(
                "💾 {} fetched, {} saved, {} duplicates, {} errors",
                report.fetched, report.saved, report.duplicates, report.errors
            );
        }
        Commands::Classify {
            title,
            content,
            url,
        } => {
            let manager = ScraperManager::new(ScrapeConfig::default())?;
            println!("{}", manager.classify(&title, &content, &url));
        }
        Commands::List => {
            let manager = ScraperManager::new(ScrapeConfig::default())?;
            for name in manager.source_names() {
                println!("{}", source_slug(&name));
            }
        }
        Commands::Serve { port } => {
            let storage: Arc<dyn ArticleStorage> = Arc::new(MemoryStorage::new());
            let manager = Arc::new(ScraperManager::new(ScrapeConfig::default())?);
            let app = pn_web::create_app(pn_web::AppState { storage, manager }).await;

            let addr = format!("0.0.0.0:{}", port);
            info!("🚀 Listening on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
