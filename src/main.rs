// src/main.rs
use actix_web::{App, HttpServer, middleware::Logger, web};
use search_backend::{Config, FapshiConfig, SearchModule, db::Database, health};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    tracing::info!("Starting search backend");

    dotenv::dotenv().ok();
    let config = Config::from_env().expect("Failed to load config from environment");

    let fapshi = FapshiConfig::from_env().expect("Failed to load Fapshi config from environment");
    if let Err(e) = fapshi.validate() {
        tracing::error!("Invalid Fapshi configuration: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
    }
    tracing::info!(
        environment = %fapshi.environment(),
        base_url = fapshi.base_url(),
        "Payment gateway configured"
    );

    let database = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to Postgres");

    let search = SearchModule::new(
        database,
        config.search_cache_capacity,
        config.search_cache_ttl(),
    );
    let fapshi = web::Data::new(fapshi);

    HttpServer::new(move || {
        App::new()
            .app_data(fapshi.clone())
            .wrap(Logger::default())
            .configure(|cfg| search.configure(cfg))
            .configure(health::init_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
