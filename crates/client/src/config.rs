//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

use runtime::RuntimeConfig;

/// Everything the binary needs to assemble a session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `bosses.ron` and `builds/`. The
    /// built-in presets are used when unset.
    pub data_dir: Option<PathBuf>,
    /// Build name overriding the one in `config.toml`.
    pub build: Option<String>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    /// Character level the in-memory world starts at.
    pub start_level: u32,
    pub runtime: RuntimeConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            build: None,
            session_id: None,
            log_dir: None,
            start_level: 1,
            runtime: RuntimeConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BOT_DATA_DIR` - Content directory (default: built-in presets)
    /// - `BOT_BUILD` - Build name under `builds/` (default: from `config.toml`)
    /// - `BOT_SESSION_ID` - Session identifier for log files (default: timestamp)
    /// - `BOT_LOG_DIR` - Log root (default: platform cache directory)
    /// - `BOT_START_LEVEL` - Starting level of the simulated character (default: 1)
    ///
    /// Runtime tuning variables are documented on [`RuntimeConfig::from_env`].
    pub fn from_env() -> Self {
        let mut config = Self {
            runtime: RuntimeConfig::from_env(),
            ..Self::default()
        };

        config.data_dir = env::var_os("BOT_DATA_DIR").map(PathBuf::from);
        config.build = env::var("BOT_BUILD").ok().filter(|name| !name.is_empty());
        config.session_id = env::var("BOT_SESSION_ID").ok();
        config.log_dir = env::var_os("BOT_LOG_DIR").map(PathBuf::from);

        if let Some(level) = read_env::<u32>("BOT_START_LEVEL") {
            config.start_level = level.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
