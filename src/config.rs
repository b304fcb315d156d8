//! Configuration file handling for the definition document path.
//!
//! This module provides loading and parsing of `.schema_gen.json`
//! configuration files. The config names the default definition document so
//! repeated invocations in a project directory can omit `--file`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Definition document used when neither `--file` nor a config file names one.
pub const DEFAULT_DEFINITION: &str = "./models.json";

const CONFIG_FILE: &str = ".schema_gen.json";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Path to the model definition document
    pub definition: PathBuf,
}

impl ConfigFile {
    /// Load configuration from `.schema_gen.json` in the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file doesn't exist
    /// - The file cannot be read
    /// - The JSON is invalid
    /// - Required fields are missing
    pub fn load() -> Result<Self, Box<dyn Error>> {
        let config_path = PathBuf::from(CONFIG_FILE);

        if !config_path.exists() {
            return Err(format!(
                "Configuration file not found: {CONFIG_FILE}\n\n\
                 Please create a {CONFIG_FILE} file in the current directory.\n\n\
                 Example:\n\
                 {{\n  \
                   \"definition\": \"./models.json\"\n\
                 }}\n"
            )
            .into());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read {CONFIG_FILE}: {e}"))?;

        let config: ConfigFile = serde_json::from_str(&content)
            .map_err(|e| format!("Invalid JSON in {CONFIG_FILE}: {e}"))?;

        Ok(config)
    }
}

/// Resolve the definition document path for a command invocation.
///
/// Precedence: explicit `--file` argument, then the config file in the
/// current directory, then [`DEFAULT_DEFINITION`]. An absent or malformed
/// config file is ignored here; commands report the missing document when
/// they try to read it.
pub fn resolve_definition_path(cli_file: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_file {
        return path;
    }
    match ConfigFile::load() {
        Ok(config) => config.definition,
        Err(_) => PathBuf::from(DEFAULT_DEFINITION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::OnceLock;

    // Config loading reads the current directory; serialize those tests.
    fn test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    #[test]
    fn test_config_deserialization() {
        let json = r#"{"definition": "./blog.json"}"#;
        let config: ConfigFile = serde_json::from_str(json).unwrap();
        assert_eq!(config.definition, PathBuf::from("./blog.json"));
    }

    #[test]
    fn test_config_rejects_missing_definition() {
        let result: Result<ConfigFile, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let _lock = test_lock().lock();
        let temp_dir = tempfile::tempdir().unwrap();
        let old_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(&temp_dir).unwrap();

        let result = ConfigFile::load();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));

        std::env::set_current_dir(old_dir).unwrap();
    }

    #[test]
    fn test_load_invalid_json() {
        let _lock = test_lock().lock();
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE), "{ invalid json }").unwrap();

        let old_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(&temp_dir).unwrap();

        let result = ConfigFile::load();
        assert!(result.is_err());

        std::env::set_current_dir(old_dir).unwrap();
    }

    #[test]
    fn test_load_valid_file() {
        let _lock = test_lock().lock();
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            r#"{"definition": "./blog.json"}"#,
        )
        .unwrap();

        let old_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(&temp_dir).unwrap();

        let config = ConfigFile::load().unwrap();
        assert_eq!(config.definition, PathBuf::from("./blog.json"));

        std::env::set_current_dir(old_dir).unwrap();
    }

    #[test]
    fn test_resolve_prefers_cli_argument() {
        let _lock = test_lock().lock();
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            r#"{"definition": "./from_config.json"}"#,
        )
        .unwrap();

        let old_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(&temp_dir).unwrap();

        let resolved = resolve_definition_path(Some(PathBuf::from("./from_cli.json")));
        assert_eq!(resolved, PathBuf::from("./from_cli.json"));

        std::env::set_current_dir(old_dir).unwrap();
    }

    #[test]
    fn test_resolve_falls_back_to_config_then_default() {
        let _lock = test_lock().lock();
        let temp_dir = tempfile::tempdir().unwrap();
        let old_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(&temp_dir).unwrap();

        assert_eq!(
            resolve_definition_path(None),
            PathBuf::from(DEFAULT_DEFINITION),
            "No config file: fall back to the default path"
        );

        fs::write(CONFIG_FILE, r#"{"definition": "./from_config.json"}"#).unwrap();
        assert_eq!(resolve_definition_path(None), PathBuf::from("./from_config.json"));

        std::env::set_current_dir(old_dir).unwrap();
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ConfigFile {
            definition: PathBuf::from("./models.json"),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ConfigFile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.definition, config.definition);
    }
}
