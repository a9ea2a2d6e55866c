
use std::env;

use tempfile::TempDir;

/// Every variable `Config::load()` reads.
const OVERRIDE_KEYS: [&str; 11] = [
    "CLIENT_USER_ON_DELETE",
    "CLIENT_IGNORE_USERS",
    "ROSTER_SYNC_DRY_RUN",
    "SUPERSET_BASE_URL",
    "SUPERSET_USERNAME",
    "SUPERSET_PASSWORD",
    "DATABASE_URL",
    "DATABASE_VIEW",
    "ROSTER_SYNC_LOG_LEVEL",
    "ROSTER_SYNC_LOG_COLORED",
    "ROSTER_SYNC_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create an empty temp config directory, point ROSTER_SYNC_CONFIG_DIR at it
/// and clear every override variable.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set(
        "ROSTER_SYNC_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    )];
    guards.extend(OVERRIDE_KEYS.iter().map(|key| EnvGuard::remove(*key)));
    (temp, guards)
}

/// Set the three required Superset variables plus a database URL.
pub(crate) fn required_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("SUPERSET_BASE_URL", "https://superset.example.com"),
        EnvGuard::set("SUPERSET_USERNAME", "sync-bot"),
        EnvGuard::set("SUPERSET_PASSWORD", "s3cret"),
        EnvGuard::set("DATABASE_URL", "sqlite::memory:"),
    ]
}
