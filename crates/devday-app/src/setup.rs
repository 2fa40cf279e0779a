//! Configuration resolution and logger initialization.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};

use devday_types::config::DevdayConfig;

/// Environment variable naming the config file when no CLI argument is given.
pub const CONFIG_ENV: &str = "DEVDAY_CONFIG";

/// Pick the config path: CLI argument first, then the environment.
pub fn config_path(arg: Option<String>, env: Option<String>) -> Option<PathBuf> {
    arg.or(env)
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

/// Load the config at `path`, or the defaults when there is none.
pub fn load_config(path: Option<PathBuf>) -> Result<DevdayConfig> {
    match path {
        Some(path) => DevdayConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(DevdayConfig::default()),
    }
}

/// Route `log` output to the configured file.
///
/// The screen belongs to the terminal UI, so without a log file logging stays
/// off unless `RUST_LOG` asks for it explicitly.
pub fn init_logging(config: &DevdayConfig) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    let mut builder = env_logger::Builder::from_env(env);

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        },
        None if std::env::var_os("RUST_LOG").is_some() => {},
        None => return Ok(()),
    }

    builder.try_init().context("initializing logger")?;
    Ok(())
}
