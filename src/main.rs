use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use kindred_api::RestApi;
use kindred_storage::load_engine;

/// A fast, in-memory course recommendation service
#[derive(Parser, Debug)]
#[command(name = "kindred")]
#[command(about = "A fast course recommendation service", long_about = None)]
struct Args {
    /// Path to the catalog artifact (JSON)
    #[arg(long, default_value = "models/catalog.json")]
    catalog: PathBuf,

    /// Path to the similarity matrix artifact (bincode)
    #[arg(long, default_value = "models/similarity.bin")]
    matrix: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Number of recommendations per query
    #[arg(long, default_value_t = kindred_core::DEFAULT_TOP_K)]
    top_k: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting kindred v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog artifact: {:?}", args.catalog);
    info!("Matrix artifact: {:?}", args.matrix);
    info!("HTTP API port: {}", args.http_port);

    // Missing or malformed artifacts abort before any request is served.
    let engine = load_engine(&args.catalog, &args.matrix)
        .map_err(|e| anyhow::anyhow!("Failed to load artifacts: {}", e))?;
    let engine = Arc::new(engine.with_top_k(args.top_k));
    info!("Engine initialized with {} courses", engine.catalog().len());

    let engine_http = engine.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(engine_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("kindred started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
