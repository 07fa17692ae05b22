//! `acme-hr` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — start the API server.
//! - `migrate` — create the schema and insert the seed data.

use clap::{Parser, Subcommand};
use tracing::info;

use api::{AppState, LookupMode};

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/acme_hr";

#[derive(Parser)]
#[command(name = "acme-hr", about = "HR directory REST API over Postgres", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,

        #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
        database_url: String,

        /// Reject updates/deletes of missing employees (404) and unknown
        /// department names (422) instead of silently succeeding.
        #[arg(long)]
        strict: bool,
    },
    /// Apply pending database migrations (schema plus seed rows).
    Migrate {
        #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
        database_url: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            host,
            port,
            database_url,
            strict,
        } => {
            let bind = format!("{host}:{port}");
            info!("Starting API server on {bind}");
            let pool = db::pool::create_pool(&database_url, 10)
                .await
                .expect("failed to connect to database");
            let lookup_mode = if strict {
                LookupMode::Strict
            } else {
                LookupMode::Permissive
            };
            let state = AppState { pool, lookup_mode };
            api::serve(&bind, state).await.expect("server error");
        }
        Command::Migrate { database_url } => {
            info!("Running migrations against {database_url}");
            let pool = db::pool::create_pool(&database_url, 2)
                .await
                .expect("failed to connect to database");
            db::pool::run_migrations(&pool)
                .await
                .expect("migration failed");
            info!("Migrations applied successfully");
        }
    }
}
