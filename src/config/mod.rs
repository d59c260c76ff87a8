pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{ClientError, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "rental-backoffice")]
#[command(about = "Back office for the vehicle rental desk")]
pub struct CliConfig {
    /// SQLite database file
    #[arg(long, default_value = "./backoffice.db")]
    pub db: String,

    /// Optional TOML configuration file (overrides --db)
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new client
    Register {
        /// Full name, first name first
        #[arg(long)]
        name: String,

        /// CIN, unique case-insensitively
        #[arg(long)]
        national_id: String,

        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        birth_date: String,

        /// License categories, e.g. A,B
        #[arg(long, value_delimiter = ',')]
        licenses: Vec<String>,
    },

    /// Look up a client by CIN
    Show {
        national_id: String,

        #[arg(long, help = "Print the record as JSON")]
        json: bool,
    },

    /// Delete a client by CIN
    Delete { national_id: String },

    /// Write every client to an archive file
    Export {
        /// Archive file; defaults to the configured [archive] path
        file: Option<String>,
    },

    /// Best-effort import from an archive file
    Import {
        /// Archive file; defaults to the configured [archive] path
        file: Option<String>,
    },
}

impl ConfigProvider for CliConfig {
    fn db_path(&self) -> &str {
        &self.db
    }
}

/// Archive location for `export`/`import`: the command argument wins, then
/// the `[archive]` section of the config file.
pub fn resolve_archive_path(
    file: Option<String>,
    config: Option<&toml_config::BackOfficeConfig>,
) -> Result<String> {
    file.or_else(|| {
        config
            .and_then(|c| c.archive_path())
            .map(str::to_string)
    })
    .ok_or_else(|| ClientError::Config {
        message: "no archive file given and no [archive] path configured".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::BackOfficeConfig;

    #[test]
    fn test_cli_db_path_through_provider() {
        let cli = CliConfig::parse_from([
            "rental-backoffice",
            "--db",
            "./desk.db",
            "show",
            "AB123456",
        ]);
        assert_eq!(cli.db_path(), "./desk.db");
    }

    #[test]
    fn test_resolve_archive_path_prefers_command_argument() {
        let config = BackOfficeConfig::from_toml_str(
            "[database]\npath = \"./clients.db\"\n[archive]\npath = \"./default.archive\"",
        )
        .unwrap();

        let resolved =
            resolve_archive_path(Some("./explicit.archive".to_string()), Some(&config)).unwrap();
        assert_eq!(resolved, "./explicit.archive");
    }

    #[test]
    fn test_resolve_archive_path_falls_back_to_config() {
        let config = BackOfficeConfig::from_toml_str(
            "[database]\npath = \"./clients.db\"\n[archive]\npath = \"./default.archive\"",
        )
        .unwrap();

        let resolved = resolve_archive_path(None, Some(&config)).unwrap();
        assert_eq!(resolved, "./default.archive");
    }

    #[test]
    fn test_resolve_archive_path_fails_without_any_source() {
        let config =
            BackOfficeConfig::from_toml_str("[database]\npath = \"./clients.db\"").unwrap();

        assert!(matches!(
            resolve_archive_path(None, Some(&config)),
            Err(ClientError::Config { .. })
        ));
        assert!(matches!(
            resolve_archive_path(None, None),
            Err(ClientError::Config { .. })
        ));
    }
}
