// Bastion — CLI Module
//
// Command-line interface using clap derive macros.
// Subcommands: init, serve.

mod commands;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::execute;

/// Bastion — a minimal username/password credential service.
#[derive(Parser, Debug)]
#[command(name = "bastion")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the accounts database and run migrations.
    Init {
        /// Path to the SQLite database file. Defaults to the platform data dir.
        #[arg(long)]
        db_path: Option<PathBuf>,
    },

    /// Start the HTTP server.
    Serve {
        /// Socket address to listen on.
        #[arg(long, default_value = "127.0.0.1:3000")]
        listen: SocketAddr,

        /// Path to the SQLite database file. Defaults to the platform data dir.
        #[arg(long)]
        db_path: Option<PathBuf>,

        /// Serve static assets from this directory on non-API routes.
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}
