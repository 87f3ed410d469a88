// main.rs - Terminal Conway's Game of Life

use conway_term::{logging, session, Config, CrosstermTerminal, GameOfLife, LifeError, Terminal};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), LifeError> {
    let config = Config::from_env();
    if let Err(err) = logging::init(config.log_file.as_deref()) {
        eprintln!("conway_term: trace log disabled: {err}");
    }
    for setting in &config.rejected {
        tracing::warn!(%setting, "ignoring malformed setting");
    }

    let mut terminal = CrosstermTerminal::init().inspect_err(|err| {
        tracing::error!(%err, "terminal initialization failed");
    })?;
    tracing::info!(
        frame_ms = config.frame_delay.as_millis() as u64,
        idle_ms = config.idle_frame_delay.as_millis() as u64,
        "starting"
    );

    let mut game = GameOfLife::from_config(&config);
    let result = session::run(&mut terminal, &mut game, &config).await;
    terminal.leave()?;
    tracing::info!("terminal released");
    result
}
