use crate::error::PartnerFitError;
use tracing_subscriber::EnvFilter;

/// Picks the log filter: `-q` wins, then `-v`/`-vv`, then the configured
/// level, then `warn`.
pub fn level_for(verbose: u8, quiet: bool, configured: Option<&str>) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.unwrap_or("warn").to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Parses a level or directive list such as `info` or `partner_fit=debug`.
pub fn parse_filter(level: &str) -> Result<EnvFilter, PartnerFitError> {
    EnvFilter::try_new(level)
        .map_err(|e| PartnerFitError::InvalidArgument(format!("invalid log level '{level}': {e}")))
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the computed level.
pub fn init(level: &str) -> Result<(), PartnerFitError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(level)?,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init();
    Ok(())
}
