use crate::components::daily_record::{store::open_store, ShiftSession};
use crate::config::Config;
use crate::error::Error;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Locales shipped in `locales/`
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "ja"];

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,redis=warn")),
        )
        // Keep stdout for rendered output
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Select the display locale, falling back to English for unknown names
pub fn apply_locale(locale: &str) {
    if SUPPORTED_LOCALES.contains(&locale) {
        rust_i18n::set_locale(locale);
        info!("Setting locale to {}", locale);
    } else {
        warn!("Unsupported locale '{}', using en", locale);
        rust_i18n::set_locale("en");
    }
}

/// Open the configured store and load the saved history into a new session
pub fn open_session(config: &Config) -> miette::Result<ShiftSession> {
    let store = open_store(config)?;
    let session = ShiftSession::open(store);
    info!("Session ready with {} saved records", session.history().len());
    Ok(session)
}
