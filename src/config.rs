//! Runtime configuration read from the environment.
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding `weapons_<category>.json` files.
    pub data_dir: PathBuf,
    pub bind: SocketAddr,
    /// Batch worker threads; 0 uses the rayon default.
    pub workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 0,
        }
    }
}

impl AppConfig {
    /// Environment variables:
    /// - `MHRB_DATA_DIR` - reference data directory (default: `data`)
    /// - `MHRB_BIND` - HTTP bind address (default: `127.0.0.1:3000`)
    /// - `MHRB_WORKERS` - batch worker threads, 0 = rayon default (default: 0)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("MHRB_DATA_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(bind) = read_value::<SocketAddr>(&lookup, "MHRB_BIND") {
            config.bind = bind;
        }
        if let Some(workers) = read_value::<usize>(&lookup, "MHRB_WORKERS") {
            config.workers = workers;
        }

        config
    }
}

fn read_value<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "invalid value, using default");
            None
        }
    }
}
