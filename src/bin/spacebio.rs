//! spacebio CLI — publication catalog with a JSON REST server.
//!
//! Usage:
//!   spacebio serve [--host addr] [--port N] [--data path]
//!   spacebio <list|show|related|insights|summary|graph> [--data path]

use clap::{Parser, Subcommand};
use serde::Serialize;
use spacebio::server::{self, ServerConfig, DEFAULT_PORT};
use spacebio::{Catalog, CatalogResult, FilterParams, PublicationApi, PublicationQuery};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "spacebio",
    version,
    about = "Space bioscience publication catalog"
)]
struct Cli {
    /// Publication data file (.json, .yaml or .yml); defaults to the built-in sample
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// List publications matching all given filters
    List {
        /// Case-insensitive text in title, keywords or full text
        #[arg(long)]
        search: Option<String>,
        /// Exact publication year
        #[arg(long)]
        year: Option<String>,
        /// Mission the publication is relevant to (e.g. Mars)
        #[arg(long)]
        mission: Option<String>,
        /// Exact risk level (Low, Medium, High)
        #[arg(long)]
        risk: Option<String>,
    },
    /// Show one publication
    Show {
        /// Publication id
        id: String,
    },
    /// List publications related to one publication
    Related {
        /// Publication id
        id: String,
    },
    /// Show heuristic insights for one publication
    Insights {
        /// Publication id
        id: String,
    },
    /// Show catalog-wide statistics
    Summary,
    /// Print the knowledge graph
    Graph,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spacebio=info,warp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_api(data: Option<PathBuf>) -> Result<PublicationApi, String> {
    let catalog = Catalog::load_or_sample(data.as_deref())
        .map_err(|e| format!("Failed to load catalog: {}", e))?;
    Ok(PublicationApi::new(Arc::new(catalog)))
}

/// Print a value as pretty JSON, returning the exit code
fn print_json<T: Serialize + ?Sized>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Print a lookup result, or its error on stderr
fn print_result<T: Serialize>(result: CatalogResult<T>) -> i32 {
    match result {
        Ok(value) => print_json(&value),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_serve(api: PublicationApi, host: IpAddr, port: u16) -> i32 {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to create tokio runtime: {}", e);
            return 1;
        }
    };

    rt.block_on(async {
        match server::serve(ServerConfig::new(host, port), api).await {
            Ok(()) => 0,
            Err(e) => {
                tracing::error!(error = %e, "server failed");
                1
            }
        }
    })
}

fn cmd_list(api: &PublicationApi, params: FilterParams) -> i32 {
    let query = PublicationQuery::from_params(&params);
    print_json(&api.publications(&query))
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let api = match open_api(cli.data) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Serve { host, port } => cmd_serve(api, host, port),
        Commands::List {
            search,
            year,
            mission,
            risk,
        } => cmd_list(
            &api,
            FilterParams {
                search,
                year,
                mission,
                risk,
            },
        ),
        Commands::Show { id } => {
            print_result(api.resolve_id(&id).and_then(|id| api.publication(id)))
        }
        Commands::Related { id } => {
            print_result(api.resolve_id(&id).and_then(|id| api.related(id)))
        }
        Commands::Insights { id } => {
            print_result(api.resolve_id(&id).and_then(|id| api.insights(id)))
        }
        Commands::Summary => print_json(&api.summary()),
        Commands::Graph => print_json(api.knowledge_graph()),
    };
    std::process::exit(code);
}
