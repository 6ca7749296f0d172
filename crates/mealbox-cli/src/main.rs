#[macro_use]
extern crate log;

mod commands;
mod config;
mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mealbox_lib::{client::MealDbClient, favorites::Favorites};

use config::Config;
use store::FileStore;

#[derive(Parser)]
#[clap(version, about = "Look up meals on TheMealDB and keep a list of favourites")]
struct Opts {
    /// Path to config.yml, defaults to $MEALBOX_HOME/config.yml
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Overrides the api url from the config
    #[clap(long, env = "MEALBOX_API_URL")]
    api_url: Option<String>,
    #[clap(subcommand)]
    subcmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search meals by name
    Search { term: String },
    /// Show the full recipe of a meal
    Show { id: String },
    /// Manage favourites
    Favorites {
        #[clap(subcommand)]
        action: FavoritesCommand,
    },
}

#[derive(Subcommand)]
enum FavoritesCommand {
    List,
    Toggle { id: String },
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts: Opts = Opts::parse();

    let config = Config::open(opts.config.as_ref())?;
    let api_url = opts.api_url.unwrap_or_else(|| config.api_url.clone());
    debug!("api url: {}", api_url);

    let client = MealDbClient::new(api_url);
    let favorites = Favorites::new(FileStore::new(&config.favorites_path));
    favorites.ensure_initialized()?;

    match opts.subcmd {
        Command::Search { term } => commands::search(&client, &favorites, &term).await?,
        Command::Show { id } => commands::show(&client, &favorites, &id.into()).await?,
        Command::Favorites { action } => match action {
            FavoritesCommand::List => commands::list_favorites(&client, &favorites).await?,
            FavoritesCommand::Toggle { id } => commands::toggle_favorite(&favorites, &id.into())?,
            FavoritesCommand::Clear => commands::clear_favorites(&favorites)?,
        },
    }

    Ok(())
}
