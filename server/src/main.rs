mod db;
mod llm;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    // Initialize LLM client (non-fatal: recommendation endpoints return 503
    // if config is missing).
    let llm = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(std::sync::Arc::new(client) as std::sync::Arc<dyn llm::LlmChat>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured — recommendations disabled");
            None
        }
    };

    let state = state::AppState::new(pool, llm);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "aresafe listening");
    axum::serve(listener, app).await.expect("server failed");
}
