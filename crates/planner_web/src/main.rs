use planner_web::{cli, server, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = cli::parse()?;
    log::info!(
        "Starting with {} locations and {} roads",
        cfg.network.locations.len(),
        cfg.network.roads.len()
    );

    let addr = cfg.addr;
    server::start_server(addr, AppState::from_cfg(cfg)).await
}
