//! DevDay terminal entry point.
//!
//! Plays the welcome banner, then answers a handful of canned commands.
//! `devday --help` lists them. Ctrl+C quits.
//!
//! Usage: `devday [config.toml]` (or set `DEVDAY_CONFIG`).

mod input;
mod setup;

use std::time::{Duration, Instant};

use anyhow::Result;

use devday_backend_term::TermBackend;
use devday_terminal::Interpreter;
use devday_types::backend::InputBackend;
use devday_types::config::DevdayConfig;

use input::InputResult;

fn main() -> Result<()> {
    let path = setup::config_path(
        std::env::args().nth(1),
        std::env::var(setup::CONFIG_ENV).ok(),
    );
    let config = setup::load_config(path)?;
    setup::init_logging(&config)?;
    log::info!(
        "Starting DevDay terminal (frame {}ms, banner {}ms)",
        config.frame_interval_ms,
        config.banner_delay_ms,
    );

    let mut backend = TermBackend::new()?;
    let result = run(&mut backend, &config);
    backend.shutdown()?;
    if let Err(ref e) = result {
        log::error!("Terminal loop failed: {e:#}");
    }
    result?;
    log::info!("DevDay terminal shut down cleanly");
    Ok(())
}

fn run(backend: &mut TermBackend, config: &DevdayConfig) -> Result<()> {
    let frame = Duration::from_millis(u64::from(config.frame_interval_ms));
    let mut interp = Interpreter::new(config);
    interp.start(backend)?;

    let mut last_tick = Instant::now();
    'running: loop {
        for event in backend.poll_events(frame)? {
            if input::handle_event(event, &mut interp, backend) == InputResult::Quit {
                break 'running;
            }
        }

        // Whole milliseconds only; the remainder carries into the next frame.
        let elapsed = last_tick.elapsed().as_millis();
        let dt = u32::try_from(elapsed).unwrap_or(u32::MAX);
        last_tick += Duration::from_millis(u64::from(dt));
        for id in interp.tick(dt, backend) {
            log::debug!("{id} finished");
        }
    }
    Ok(())
}
