//! # Arunika Binary
//!
//! The composition root: loads settings, picks a storage backend, opens the
//! session, and dispatches the parsed command.

mod cli;
mod commands;
mod render;

use clap::Parser;
use configs::{LogFormat, Settings, StorageBackend};
use domains::KeyValueStore;
use services::{LmsSession, StateGateway};
use tracing_subscriber::EnvFilter;

use auth_adapters::FixedCredentialGate;
use storage_adapters::MemoryStore;

use crate::cli::Cli;

pub type Session = LmsSession<Box<dyn KeyValueStore>, FixedCredentialGate>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dotenv = configs::load_dotenv();
    let settings = Settings::load()?;

    init_tracing(&settings, cli.verbose);
    if let Some(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let store = build_store(&settings)?;
    let gateway = StateGateway::with_key(store, settings.storage.key.clone());
    let mut session = LmsSession::open(gateway, FixedCredentialGate::new());

    tracing::debug!(command = ?cli.command, "dispatching command");
    commands::dispatch(cli.command, &mut session, &settings)
}

fn init_tracing(settings: &Settings, verbosity: u8) {
    let level = match verbosity {
        0 => settings.log.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match settings.log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.with_target(false).init(),
    }
}

fn build_store(settings: &Settings) -> anyhow::Result<Box<dyn KeyValueStore>> {
    match settings.storage.backend {
        #[cfg(feature = "storage-file")]
        StorageBackend::File => {
            tracing::info!(dir = %settings.storage.data_dir.display(), "using file storage");
            Ok(Box::new(storage_adapters::FileStore::new(
                settings.storage.data_dir.clone(),
            )))
        }
        #[cfg(not(feature = "storage-file"))]
        StorageBackend::File => {
            anyhow::bail!("file storage requested but this build lacks the `storage-file` feature")
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; changes are discarded on exit");
            Ok(Box::new(MemoryStore::new()))
        }
    }
}
