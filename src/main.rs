use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gst_invoice::companies::CompanyDefaultsRegistry;
use gst_invoice::config::{Config, LogFormat};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting GST invoice calculation service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let registry = match &config.app.company_defaults_path {
        Some(path) => CompanyDefaultsRegistry::load(path)
            .await
            .with_context(|| format!("Failed to load company defaults from {}", path.display()))?,
        None => {
            tracing::warn!("COMPANY_DEFAULTS_PATH not set, no company defaults available");
            CompanyDefaultsRegistry::new()
        }
    };
    let registry = web::Data::new(registry);

    let bind_address = config.server.bind_address();
    let cors_origin = config.server.cors_allowed_origin.clone();
    let server = HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(registry.clone())
            .configure(gst_invoice::configure_routes)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("gst_invoice={},actix_web=info", config.app.log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
