mod catalog;
mod display;
mod sort;

use clap::{Parser, Subcommand};
use prodcat_client::{CatalogClient, ListQuery};
use prodcat_core::Format;
use tracing_subscriber::EnvFilter;

use crate::sort::SortSpec;

#[derive(Debug, Parser)]
#[command(name = "prodcat")]
#[command(about = "Browse a product catalog API over JSON or XML")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List one page of products
    List {
        /// 1-based page number
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Page size (defaults to PRODCAT_PAGE_LIMIT)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,
        /// Response format: json or xml (defaults to PRODCAT_FORMAT)
        #[arg(long)]
        format: Option<Format>,
        /// Client-side ordering, e.g. name:asc or price:desc
        #[arg(long, default_value = "name:asc")]
        sort: SortSpec,
        /// Print the response body instead of the product lines
        #[arg(long)]
        raw: bool,
    },
    /// Show one or more products by id
    Show {
        /// Product ids
        #[arg(required = true)]
        ids: Vec<String>,
        /// Response format: json or xml (defaults to PRODCAT_FORMAT)
        #[arg(long)]
        format: Option<Format>,
        /// Print the response body instead of the product fields
        #[arg(long)]
        raw: bool,
    },
}

/// Completes on Ctrl-C. If the signal handler cannot be installed it never
/// completes, so requests are simply not cancellable.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = prodcat_core::load_app_config()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    let client = CatalogClient::new(&config)?;

    match cli.command {
        Commands::List {
            page,
            limit,
            format,
            sort,
            raw,
        } => {
            let query = ListQuery {
                page,
                limit: limit.unwrap_or(config.page_limit),
                format: format.unwrap_or(config.format),
            };
            catalog::run_list(&client, query, sort, raw, ctrl_c()).await
        }
        Commands::Show { ids, format, raw } => {
            let format = format.unwrap_or(config.format);
            catalog::run_show(&client, &ids, format, raw, ctrl_c()).await
        }
    }
}
