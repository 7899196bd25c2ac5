//! amule-ec CLI Client
//!
//! Command-line interface for driving an aMule daemon over EC.

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use amule_ec::client::model::{SearchFilters, SearchType};
use amule_ec::{Config, EcClient};

/// amule-ec CLI
#[derive(Parser, Debug)]
#[command(name = "amule-ec-cli")]
#[command(about = "CLI for the aMule External Connection protocol")]
#[command(version)]
struct Args {
    /// Daemon host
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Daemon EC port
    #[arg(long, default_value = "4712")]
    port: u16,

    /// EC password
    #[arg(short, long, default_value = "")]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show daemon statistics
    Stats,

    /// Run a search and print the results
    Search {
        /// The search query
        query: String,

        /// Search scope: local, global, kad, or web
        #[arg(long, default_value = "local")]
        scope: String,

        /// Give up after this many seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },

    /// Show the download queue
    Queue,

    /// Show the shared files list
    Shared,

    /// Show the upload queue
    Uploads,

    /// Show the server list
    Servers,

    /// Show the download categories
    Categories,

    /// Queue a download from an ed2k link
    Add {
        /// The ed2k:// link
        link: String,
    },

    /// Pause a download
    Pause {
        /// File hash (32 hex digits)
        hash: String,
    },

    /// Resume a download
    Resume {
        /// File hash (32 hex digits)
        hash: String,
    },

    /// Stop a download
    Stop {
        /// File hash (32 hex digits)
        hash: String,
    },

    /// Delete a download
    Delete {
        /// File hash (32 hex digits)
        hash: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,amule_ec=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .password(&args.password)
        .build();

    let mut client = EcClient::new(config);

    if let Err(e) = run(&mut client, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(client: &mut EcClient, command: Commands) -> amule_ec::Result<()> {
    match command {
        Commands::Stats => {
            let stats = client.stats()?;
            println!(
                "down {:>8} B/s (limit {})   up {:>8} B/s (limit {})",
                stats.download_speed,
                stats.download_speed_limit,
                stats.upload_speed,
                stats.upload_speed_limit
            );
            println!(
                "ed2k: {} users / {} files   kad: {} users / {} nodes",
                stats.ed2k_users, stats.ed2k_files, stats.kad_users, stats.kad_nodes
            );
            println!(
                "shared files: {}   upload queue: {}",
                stats.shared_file_count, stats.upload_queue_length
            );
            if let Some(server) = &stats.connected_server {
                println!(
                    "connected to {} ({})",
                    server.name.as_deref().unwrap_or("?"),
                    server.addr
                );
            }
        }

        Commands::Search {
            query,
            scope,
            timeout,
        } => {
            let search_type = parse_scope(&scope)?;
            let results = client.search(
                &query,
                search_type,
                &SearchFilters::default(),
                Duration::from_secs(timeout),
            )?;
            for file in &results {
                println!(
                    "{}  {:>12}  {:>4} src  {}",
                    hex::encode(file.hash),
                    file.size,
                    file.source_count,
                    file.name
                );
            }
            println!("{} result(s)", results.len());
        }

        Commands::Queue => {
            for file in client.download_queue()? {
                println!(
                    "{}  {:>12}/{:<12}  {:?}  {}",
                    file.hash.map(hex::encode).unwrap_or_default(),
                    file.size_done,
                    file.size_full,
                    file.status,
                    file.name.as_deref().unwrap_or("?")
                );
            }
        }

        Commands::Shared => {
            for file in client.shared_files()? {
                println!(
                    "{}  {:>12}  {}",
                    file.hash.map(hex::encode).unwrap_or_default(),
                    file.size,
                    file.name.as_deref().unwrap_or("?")
                );
            }
        }

        Commands::Uploads => {
            for client_entry in client.upload_queue()? {
                println!(
                    "{}  {:>8} B/s  {}",
                    client_entry.name.as_deref().unwrap_or("?"),
                    client_entry.upload_speed,
                    client_entry.upload_filename.as_deref().unwrap_or("")
                );
            }
        }

        Commands::Servers => {
            for server in client.server_list()? {
                println!(
                    "{:<24}  {}  {} users",
                    server.name.as_deref().unwrap_or("?"),
                    server
                        .addr
                        .map(|a| a.to_string())
                        .unwrap_or_else(|| "?".to_string()),
                    server.users
                );
            }
        }

        Commands::Categories => {
            for category in client.categories()? {
                println!("{:>3}  {:<20}  {}", category.id, category.name, category.path);
            }
        }

        Commands::Add { link } => {
            client.add_ed2k_link(&link)?;
            println!("queued {}", link);
        }

        Commands::Pause { hash } => client.pause_download(parse_hash(&hash)?)?,
        Commands::Resume { hash } => client.resume_download(parse_hash(&hash)?)?,
        Commands::Stop { hash } => client.stop_download(parse_hash(&hash)?)?,
        Commands::Delete { hash } => client.delete_download(parse_hash(&hash)?)?,
    }

    Ok(())
}

/// Parse a search scope name
fn parse_scope(scope: &str) -> amule_ec::Result<SearchType> {
    match scope {
        "local" => Ok(SearchType::Local),
        "global" => Ok(SearchType::Global),
        "kad" => Ok(SearchType::Kad),
        "web" => Ok(SearchType::Web),
        other => Err(amule_ec::EcError::Format(format!(
            "unknown search scope: {} (expected local, global, kad, or web)",
            other
        ))),
    }
}

/// Parse a 32-hex-digit file hash
fn parse_hash(hash: &str) -> amule_ec::Result<[u8; 16]> {
    let bytes = hex::decode(hash)
        .map_err(|e| amule_ec::EcError::Format(format!("bad hash {:?}: {}", hash, e)))?;
    bytes.try_into().map_err(|_| {
        amule_ec::EcError::Format(format!("bad hash {:?}: expected 16 bytes", hash))
    })
}
