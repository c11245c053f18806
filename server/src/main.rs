mod config;
mod db;
mod error;
mod models;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::store::PgChatStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if config.seed_demo_data {
        db::seed::seed_demo_data(&pool).await.expect("demo seed failed");
        tracing::info!("demo data seeded");
    }

    let store = Arc::new(PgChatStore::new(pool));
    let state = state::AppState::new(store, config.upload.clone());

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, upload_dir = %config.upload.dir.display(), "roomchat listening");
    axum::serve(listener, app).await.expect("server failed");
}
