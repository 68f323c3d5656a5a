// Bastion — CLI Command Handlers
//
// Each function handles one CLI subcommand. `init` prepares the accounts
// database; `serve` opens it once and hands the store to the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::BastionError;
use crate::server::HttpServer;
use crate::store::{Database, SqliteAccountStore};

use super::Commands;

/// Default directory for Bastion data files.
fn data_dir() -> PathBuf {
    let base = dirs_next::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("bastion")
}

/// Default path to the accounts database file.
fn default_db_path() -> PathBuf {
    data_dir().join("bastion.db")
}

/// Execute the parsed CLI command.
pub async fn execute(command: Commands) -> Result<(), BastionError> {
    match command {
        Commands::Init { db_path } => cmd_init(db_path),
        Commands::Serve {
            listen,
            db_path,
            static_dir,
        } => cmd_serve(listen, db_path, static_dir).await,
    }
}

/// Open (or create) the database, creating its parent directory first.
fn open_db(db_path: Option<PathBuf>) -> Result<(Database, PathBuf), BastionError> {
    let path = db_path.unwrap_or_else(default_db_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db = Database::open(&path)?;
    Ok((db, path))
}

fn cmd_init(db_path: Option<PathBuf>) -> Result<(), BastionError> {
    let (_db, path) = open_db(db_path)?;
    println!("✓ Accounts database ready at {}", path.display());
    Ok(())
}

async fn cmd_serve(
    listen: SocketAddr,
    db_path: Option<PathBuf>,
    static_dir: Option<PathBuf>,
) -> Result<(), BastionError> {
    let (db, path) = open_db(db_path)?;
    tracing::info!(db = %path.display(), "Connected to the accounts database");

    let store = Arc::new(SqliteAccountStore::new(Arc::new(db)));
    let server = HttpServer::new(listen, store, static_dir);
    server.run().await
}
