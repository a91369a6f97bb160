//! User API - HTTP server and database tooling.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service_lib::config::UserServiceConfig;
use user_service_lib::container::{self, Container};
use user_service_lib::MigrateAction;
use web_lib::config::WebConfig;

#[derive(Parser)]
#[command(name = "user-api")]
#[command(about = "User management API")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "WEB_HOST")]
        host: Option<String>,
        #[arg(long, env = "WEB_PORT")]
        port: Option<u16>,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommand,
    },
}

#[derive(Subcommand)]
enum MigrateCommand {
    /// Apply all pending migrations
    Up,
    /// Rollback the last migration
    Down,
    /// Show migration status
    Status,
    /// Drop all tables and re-apply migrations
    Fresh,
}

impl From<MigrateCommand> for MigrateAction {
    fn from(cmd: MigrateCommand) -> Self {
        match cmd {
            MigrateCommand::Up => MigrateAction::Up,
            MigrateCommand::Down => MigrateAction::Down,
            MigrateCommand::Status => MigrateAction::Status,
            MigrateCommand::Fresh => MigrateAction::Fresh,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "debug"
    } else {
        "info,tower_http=debug"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let service_config = UserServiceConfig::from_env();

    match cli.command {
        Commands::Serve { host, port } => {
            let mut web_config = WebConfig::from_env();
            if let Some(host) = host {
                web_config.host = host;
            }
            if let Some(port) = port {
                web_config.port = port;
            }

            container::install(Container::from_config(&service_config).await?);
            web_lib::run_server(web_config).await?;
        }
        Commands::Migrate { action } => {
            user_service_lib::run_migrations(action.into(), &service_config.database).await?;
        }
    }

    Ok(())
}
