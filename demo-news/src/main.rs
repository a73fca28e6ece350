mod seed;
mod server;

use server::{init_tracing, spawn_http_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("demo_news");

    ya_news_axum::init().await?;

    if std::env::var("YN_DEMO_SEED").is_ok_and(|v| v.eq_ignore_ascii_case("true")) {
        seed::seed_demo_data().await?;
    }

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let app = ya_news_axum::ya_news_router();
    spawn_http_server(port, app).await?;
    Ok(())
}
