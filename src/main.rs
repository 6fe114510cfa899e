use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockroom::api;
use stockroom::config::Settings;
use stockroom::models::Variant;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Session-scoped inventory demo served to the browser")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Stockroom server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port for the HTTP server
        #[arg(short, long)]
        port: Option<u16>,

        /// Which flavour of the demo to serve
        #[arg(short, long, value_enum)]
        variant: Option<Variant>,
    },
    /// Print the effective settings as JSON
    Config,
}

/// Initialize tracing from RUST_LOG
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "stockroom=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(settings: Settings) -> anyhow::Result<()> {
    let state = api::AppState::new(settings.variant, settings.restock_threshold)?;

    // Idle sessions are discarded in the background
    let sessions = state.sessions.clone();
    let ttl = settings.session_ttl;
    let mut ticker = tokio::time::interval(settings.sweep_interval);
    tokio::spawn(async move {
        loop {
            ticker.tick().await;
            let expired = sessions.sweep_idle(ttl);
            if expired > 0 {
                tracing::debug!("{} session(s) still active", sessions.len());
            }
        }
    });

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!(
        "Stockroom ({}) listening on http://{}",
        settings.variant.as_str(),
        settings.bind_addr()
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut settings = Settings::from_env();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            variant,
        }) => {
            settings.apply_overrides(host, port, variant);
            serve(settings).await?;
        }
        Some(Commands::Config) => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        None => {
            // Default: start server
            serve(settings).await?;
        }
    }

    Ok(())
}
