use actix_web::{App, HttpServer};
use clap::Parser;
use software_factory_api::config::{DEFAULT_LOG_FILTER, Overrides, Settings};
use software_factory_api::cors::build_cors;
use software_factory_api::middleware::RequestTracing;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Software Factory API server
#[derive(Parser, Debug)]
#[command(name = "software-factory-api", version, about)]
struct Args {
    /// Address to bind (overrides APP_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides APP_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Deployment environment label (overrides APP_ENV)
    #[arg(short, long)]
    environment: Option<String>,

    /// Number of HTTP workers (overrides APP_WORKERS)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Log level filter (e.g., "software_factory_api=debug,actix_web=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

/// Software Factory API Entry Point
///
/// Loads `.env` (if present), resolves settings with priority
/// CLI > environment > defaults, initializes tracing and starts the
/// Actix-web HTTP server.
///
/// # Endpoints
/// - Health: `/health`
/// - API: `/api/version`, `/api/hello`
/// - Swagger UI: `/docs/`
/// - ReDoc: `/redoc`
/// - OpenAPI document: `/openapi.json`
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let args = Args::parse();

    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&log_filter));
    if args.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let settings = Settings::from_env()?.with_overrides(Overrides {
        host: args.host,
        port: args.port,
        environment: args.environment,
        workers: args.workers,
    })?;

    tracing::info!(
        environment = %settings.environment,
        origins = ?settings.cors_origins,
        "Loaded configuration"
    );

    let bind = settings.bind_address();
    let workers = settings.workers;
    let app_settings = settings.clone();

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&app_settings.cors_origins))
            .wrap(RequestTracing)
            .configure(software_factory_api::configure(app_settings.clone()))
    });
    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    tracing::info!("Starting server at http://{}:{}", bind.0, bind.1);

    server.bind(bind)?.run().await?;

    tracing::info!("Server stopped");
    Ok(())
}
