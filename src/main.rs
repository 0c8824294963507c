use std::sync::Arc;

use webroot::{config, logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let state = Arc::new(config::AppState::new(&cfg)?);

    // Bind before the banner: a bind failure is fatal and must surface
    // before the serve loop starts
    let listener = server::create_reusable_listener(addr)?;

    logger::log_server_start(cfg.server.port);

    server::run(listener, state).await;
    Ok(())
}
