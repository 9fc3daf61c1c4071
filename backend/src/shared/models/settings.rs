use std::{env, fs, io, path::{Path, PathBuf}};
use serde::Deserialize;
use thiserror::Error;

const SETTINGS_FILENAME: &str = "settings.json";
const SETTINGS_PATH_VAR: &str = "INTELLITASK_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot parse settings file {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("no settings.json found (set INTELLITASK_SETTINGS or run from the server directory)")]
    NotFound,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    pub database_path: String,
    #[serde(default)]
    pub static_dir: Option<String>,
    pub jwt_secret: String,
    pub jwt_expiration_in_minutes: u32,
    pub default_admin_name: String,
    pub default_admin_email: String,
    pub default_admin_password: String,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "intellitask=info".to_string()
}

impl Settings {
    /// Finds settings.json via $INTELLITASK_SETTINGS, the working directory,
    /// then the directory holding the executable.
    pub fn load() -> Result<Settings, SettingsError> {
        if let Ok(path) = env::var(SETTINGS_PATH_VAR) {
            return Settings::load_from(path);
        }

        let mut candidates = vec![PathBuf::from(SETTINGS_FILENAME)];
        if let Some(dir) = env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
            candidates.push(dir.join(SETTINGS_FILENAME));
        }

        candidates
            .into_iter()
            .find(|p| p.is_file())
            .map(Settings::load_from)
            .unwrap_or(Err(SettingsError::NotFound))
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|source| SettingsError::Read { path: path.to_path_buf(), source })?;
        Settings::parse(&content).map_err(|source| SettingsError::Parse { path: path.to_path_buf(), source })
    }

    pub fn parse(content: &str) -> Result<Settings, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.tcp_socket_binding, self.tcp_socket_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "tcp_socket_binding": "127.0.0.1",
        "tcp_socket_port": 5000,
        "database_path": "test.redb",
        "jwt_secret": "s3cret",
        "jwt_expiration_in_minutes": 60,
        "default_admin_name": "Admin",
        "default_admin_email": "admin@example.com",
        "default_admin_password": "admin"
    }"#;

    #[test]
    fn parses_minimal_settings_with_defaults() {
        let settings = Settings::parse(SAMPLE).unwrap();
        assert_eq!(settings.socket_address(), "127.0.0.1:5000");
        assert_eq!(settings.static_dir, None);
        assert_eq!(settings.log_filter, "intellitask=info");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Settings::load_from("/nonexistent/intellitask/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn bundled_settings_file_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/settings.json");
        let settings = Settings::load_from(path).unwrap();
        assert!(settings.jwt_expiration_in_minutes > 0);
    }
}
