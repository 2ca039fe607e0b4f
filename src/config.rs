use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_address: String,
    pub storage_root: PathBuf,
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Reads settings from the process environment. Call `dotenvy::dotenv()` first
    /// to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = read("UPLOAD_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or_default(read("UPLOAD_PORT"), "UPLOAD_PORT", DEFAULT_PORT);
        let max_body_bytes = parse_or_default(
            read("UPLOAD_MAX_BODY_BYTES"),
            "UPLOAD_MAX_BODY_BYTES",
            DEFAULT_MAX_BODY_BYTES,
        );
        let storage_root = read("UPLOAD_BASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_storage_root);

        Self {
            bind_address: format!("{}:{}", host.trim(), port),
            storage_root,
            max_body_bytes,
        }
    }
}

fn parse_or_default<T>(raw: Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %value, fallback = %default, "ignoring unparsable setting");
            default
        }),
        None => default,
    }
}

fn default_storage_root() -> PathBuf {
    match dirs::data_local_dir() {
        Some(mut base) => {
            base.push("template-upload");
            base
        }
        None => PathBuf::from("uploads"),
    }
}
