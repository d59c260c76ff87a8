use crate::core::ConfigProvider;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackOfficeConfig {
    pub database: DatabaseConfig,
    pub archive: Option<ArchiveConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    pub path: String,
}

impl BackOfficeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ClientError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Default archive location when an `export`/`import` command gives none.
    pub fn archive_path(&self) -> Option<&str> {
        self.archive.as_ref().map(|a| a.path.as_str())
    }
}

impl ConfigProvider for BackOfficeConfig {
    fn db_path(&self) -> &str {
        &self.database.path
    }
}

impl Validate for BackOfficeConfig {
    fn validate(&self) -> Result<()> {
        validate_path("database.path", &self.database.path)?;
        if let Some(archive) = &self.archive {
            validate_path("archive.path", &archive.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[database]
path = "./clients.db"

[archive]
path = "./clients.archive"
"#;

        let config = BackOfficeConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.db_path(), "./clients.db");
        assert_eq!(config.archive_path(), Some("./clients.archive"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_archive_section_is_optional() {
        let config = BackOfficeConfig::from_toml_str("[database]\npath = \"./clients.db\"").unwrap();
        assert_eq!(config.archive_path(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_BACKOFFICE_DB", "/tmp/test-clients.db");

        let toml_content = r#"
[database]
path = "${TEST_BACKOFFICE_DB}"
"#;

        let config = BackOfficeConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.db_path(), "/tmp/test-clients.db");

        std::env::remove_var("TEST_BACKOFFICE_DB");
    }

    #[test]
    fn test_validation_rejects_empty_db_path() {
        let config = BackOfficeConfig::from_toml_str("[database]\npath = \"\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[database]
path = "./clients.db"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = BackOfficeConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.db_path(), "./clients.db");
    }
}
