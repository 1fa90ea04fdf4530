pub mod cli;
pub mod detail;
pub mod extract;
pub mod fetcher;
pub mod manager;
pub mod normalize;
pub mod sources;

pub use cli::{handle_command, ScraperArgs, ScraperCommands};
pub use manager::ScraperManager;

pub mod prelude {
    pub use crate::manager::ScraperManager;
    pub use pn_core::{Article, Error, Result};
}
