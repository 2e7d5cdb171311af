use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use movied::config::{Config, LogConfig};
use movied::{MovieStore, Server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// In-memory movie CRUD service over HTTP
#[derive(Parser, Debug)]
#[command(name = "movied", version)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Listening address, overrides `server_addr`
    #[arg(short, long)]
    addr: Option<String>,

    /// Start with an empty collection
    #[arg(long)]
    no_seed: bool,
}

impl Args {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(addr) = &self.addr {
            config.server_addr = addr.clone();
        }
        if self.no_seed {
            config.seed = false;
        }
        Ok(config)
    }
}

fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match &log.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file '{}'", path))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.load_config()?;
    init_logging(&config.log)?;

    info!("Starting movied - in-memory movie service");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let movies = if config.seed {
        MovieStore::sample_movies()
    } else {
        Vec::new()
    };
    let store = Arc::new(MovieStore::with_movies(config.store_options(), movies));
    info!(
        "Store ready with {} movies, update order {:?}",
        store.len()?,
        store.options().update_order
    );

    let server = Server::bind(&config.server_addr, store)
        .await
        .with_context(|| format!("Failed to bind {}", config.server_addr))?;
    info!("Server running on {}", server.local_addr());

    server.run().await?;

    Ok(())
}
