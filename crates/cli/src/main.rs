use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use snipbin_client::ThreadClient;
use snipbin_core::{DEFAULT_PORT, env_parse_with_default};
use snipbin_http::{AppState, create_router};
use snipbin_service::ThreadService;
use snipbin_storage::{MemoryStore, PgStorage, ThreadStore};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snipbin")]
#[command(about = "Paste and share code snippet threads", long_about = None)]
struct Cli {
    /// Base URL of the API server, used by the client subcommands.
    #[arg(long, global = true, default_value = "http://127.0.0.1:3001")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve {
        /// Port to listen on; falls back to SNIPBIN_PORT, then 3001.
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Use the in-memory store instead of DATABASE_URL (state is lost on exit).
        #[arg(long)]
        ephemeral: bool,
    },
    /// Create a thread from a snippet and print its share slug.
    Create {
        content: String,
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Print a thread and its messages.
    Show { slug: String },
    /// Append a snippet to a thread.
    Send {
        slug: String,
        content: String,
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Lock a thread; no further messages will be accepted.
    Lock { slug: String },
    /// Poll a thread every 3 seconds and print new messages as they appear.
    Watch { slug: String },
}

fn database_url() -> Result<String> {
    std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable must be set"))
}

async fn serve(port: Option<u16>, host: String, ephemeral: bool) -> Result<()> {
    let port = port.unwrap_or_else(|| env_parse_with_default("SNIPBIN_PORT", DEFAULT_PORT));
    let store: Arc<dyn ThreadStore> = if ephemeral {
        tracing::warn!("running with in-memory store; threads are lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(PgStorage::new(&database_url()?).await?)
    };
    let state = Arc::new(AppState { thread_service: Arc::new(ThreadService::new(store)) });
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let client = ThreadClient::new(cli.server.clone());

    match cli.command {
        Commands::Serve { port, host, ephemeral } => serve(port, host, ephemeral).await?,
        Commands::Create { content, language } => {
            let created = client.create_thread(&content, language.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        },
        Commands::Show { slug } => {
            let thread = client.fetch_thread(&slug).await?;
            println!("{}", serde_json::to_string_pretty(&thread)?);
        },
        Commands::Send { slug, content, language } => {
            let message = client.send_message(&slug, &content, language.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&message)?);
        },
        Commands::Lock { slug } => {
            let ack = client.lock_thread(&slug).await?;
            println!("{}", serde_json::to_string_pretty(&ack)?);
        },
        Commands::Watch { slug } => {
            let mut printed = 0;
            let finished = snipbin_client::watch_thread(&client, &slug, |thread| {
                for message in &thread.messages[printed..] {
                    println!("[{}] {}", message.language, message.content);
                }
                printed = thread.messages.len();
            })
            .await?;
            println!("thread {} is locked, {} messages", finished.thread.slug, printed);
        },
    }

    Ok(())
}
