use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use stay_listings::config::Config;
use stay_listings::view::ViewController;
use stay_listings::{constants, logging, metrics, web};

#[derive(Parser)]
#[command(name = "stay_listings")]
#[command(about = "Filterable property listings with a mock booking action")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to $STAY_CONFIG or config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the listings page
    Serve {
        /// Port to listen on, overrides the configuration
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the cards for a category
    List {
        /// One of: all, apartment, hotel, lodge
        #[arg(long, default_value = constants::ALL_SELECTOR)]
        category: String,
    },
    /// Book a listing by id and print the notification
    Book {
        #[arg(long)]
        id: u32,
    },
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => {
            let mut config = Config::load(path)?;
            config.apply_env_overrides()?;
            config
        }
        None => Config::from_env()?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();
    let mut config = load_config(cli.config)?;
    let catalog = Arc::new(config.build_catalog()?);

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(addr) = config.metrics_addr()? {
                metrics::init_metrics(addr);
            }
            info!("Serving {} properties", catalog.len());
            web::start_server(&config, catalog).await?;
        }
        Commands::List { category } => {
            let mut view = ViewController::new(catalog);
            let cards = view.select(&category);
            if cards.is_empty() {
                println!("No properties match category '{}'", category);
            }
            for card in cards {
                println!("[{}] {} ({}) - {}", card.id, card.title, card.category, card.price);
                println!("    {}", card.location);
                println!("    Amenities: {}", card.amenities.join(", "));
                println!("    Nearby: {}", card.attractions.join("; "));
            }
        }
        Commands::Book { id } => {
            let view = ViewController::new(catalog);
            println!("{}", view.book(id));
        }
    }
    Ok(())
}
