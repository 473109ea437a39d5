use std::net::{Ipv4Addr, SocketAddr};

use bountyboard_server::config::AppConfig;
use bountyboard_server::init;
use bountyboard_server::middleware::error::AppResult;
use bountyboard_server::middleware::mw_ctx;

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let ctx_state = mw_ctx::create_ctx_state(&config);
    let routes_all = init::main_router(&ctx_state);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.listen_port));
    println!("->> LISTENING on {addr}\n");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    axum::serve(listener, routes_all.into_make_service())
        .await
        .unwrap();

    Ok(())
}
