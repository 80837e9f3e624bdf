use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use dropbox_api::routes::files::GetMetadataArg;
use dropbox_api::taxonomy::{
    COPY_REFERENCE_GET_SUBTYPES, CopyReferenceGetError, ErrorSubtypeMap, GET_METADATA_SUBTYPES,
    GetMetadataError,
};
use dropbox_api::{ApiClient, ApiError, CallError, ClientConfig, ConfigError};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Query Dropbox routes and inspect their error taxonomies.
///
/// Route commands read the access token from DROPBOX_ACCESS_TOKEN.
///
/// Examples:
///   dbx copy-ref /Homework/math.pdf       # Create a copy reference
///   dbx metadata /Homework --deleted      # Show metadata, including deleted entries
///   dbx errors copy-reference-get         # Print the route's error subtype table
#[derive(Debug, Parser)]
#[command(name = "dbx")]
#[command(version)]
#[command(about = "Query Dropbox routes and inspect their error taxonomies")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a copy reference for a file or folder.
    CopyRef {
        /// Dropbox path, e.g. /Homework/math.pdf.
        path: String,
    },

    /// Show metadata for a file or folder.
    Metadata {
        /// Dropbox path or id:.
        path: String,

        /// Report deleted entries instead of failing with not_found.
        #[arg(long)]
        deleted: bool,
    },

    /// Print the error subtype table of a route.
    Errors {
        /// The route whose taxonomy to print.
        #[arg(value_enum)]
        route: Taxonomy,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Taxonomy {
    CopyReferenceGet,
    GetMetadata,
}

impl Taxonomy {
    fn subtypes(self) -> &'static ErrorSubtypeMap {
        match self {
            Self::CopyReferenceGet => &COPY_REFERENCE_GET_SUBTYPES,
            Self::GetMetadata => &GET_METADATA_SUBTYPES,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("copy_reference/get failed: {0}")]
    CopyReference(#[from] CallError<CopyReferenceGetError>),

    #[error("get_metadata failed: {0}")]
    Metadata(#[from] CallError<GetMetadataError>),
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v` flags.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,dropbox_api=info,dbx=info".to_string(),
            2 => "info,dropbox_api=debug,dbx=debug".to_string(),
            _ => "debug,dropbox_api=trace,dbx=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn client() -> Result<ApiClient, CliError> {
    let config = ClientConfig::from_env()?;
    debug!(?config, "loaded client configuration");
    Ok(ApiClient::from_config(&config)?)
}

fn print_table(table: &ErrorSubtypeMap) {
    println!("{}", table.name());
    for (tag, category) in table.iter() {
        println!("  {tag} -> {category}");
    }
}

async fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::CopyRef { path } => {
            let result = client()?.copy_reference_get(path.as_str()).await?;
            info!(path = %path, "created copy reference");
            println!("{}", result.copy_reference);
            println!("expires: {}", result.expires);
        }
        Commands::Metadata { path, deleted } => {
            let arg = GetMetadataArg::new(path).include_deleted(deleted);
            let metadata = client()?.get_metadata(&arg).await?;
            println!(
                "{} {}",
                metadata.kind(),
                metadata.path_display().unwrap_or(metadata.name())
            );
        }
        Commands::Errors { route } => print_table(route.subtypes()),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
