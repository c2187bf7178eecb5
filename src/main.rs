use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use word_drill::{config::Config, db, handlers, state};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_drill=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load();

    let pool = match db::init_db(config.database_path()) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    // No catalog, no traffic: there is no other content source to fall back to
    let app_state = match state::build_state(pool, &config) {
        Ok(app_state) => app_state,
        Err(e) => {
            tracing::error!("Initialization failed: {}", e);
            std::process::exit(1);
        }
    };

    let app = handlers::router(app_state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

    tracing::info!("Server running on http://localhost:{}", config.server_port);

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
