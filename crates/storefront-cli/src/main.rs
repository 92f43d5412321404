mod catalog;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Browse the storefront catalog from the terminal")]
struct Cli {
    /// Product source base URL. Overrides `STOREFRONT_API_BASE_URL`.
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the filtered and sorted catalog view
    Products {
        /// Case-insensitive text matched against title and description
        #[arg(long)]
        search: Option<String>,
        /// Category to include (repeatable; any match passes)
        #[arg(long = "category")]
        categories: Vec<String>,
        #[arg(long)]
        min_price: Option<Decimal>,
        #[arg(long)]
        max_price: Option<Decimal>,
        /// Sort label or slug, e.g. `price-low` or "PRICE : HIGH TO LOW"
        #[arg(long, default_value = "recommended")]
        sort: String,
        /// Attribute selector `GROUP:Option` (repeatable)
        #[arg(long = "attr")]
        attrs: Vec<String>,
        /// Leading catalog entries to load. Overrides `STOREFRONT_DISPLAY_LIMIT`; 0 loads all.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the category list from the product source
    Categories,
    /// Print the sort keys and attribute groups
    Filters,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = storefront_core::load_app_config()?;
    if let Some(api_base) = cli.api_base {
        config.api_base_url = api_base;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Products {
            search,
            categories,
            min_price,
            max_price,
            sort,
            attrs,
            limit,
        }) => {
            let args = catalog::ProductsArgs {
                search,
                categories,
                min_price,
                max_price,
                sort,
                attrs,
                limit,
            };
            catalog::run_products(&config, args).await?;
        }
        Some(Commands::Categories) => catalog::run_categories(&config).await?,
        Some(Commands::Filters) => catalog::run_filters(),
        None => println!("storefront-cli: try `products`, `categories`, or `filters`"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
