use anyhow::Context;
use clap::Parser;
use rental_backoffice::config::{resolve_archive_path, CliConfig, Command};
use rental_backoffice::core::ConfigProvider;
use rental_backoffice::utils::{logger, validation::Validate};
use rental_backoffice::{BackOfficeConfig, ClientFileArchive, ClientRepository, SqliteStore};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting rental-backoffice CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let file_config = match &cli.config {
        Some(path) => {
            let file_config = BackOfficeConfig::from_file(path)
                .with_context(|| format!("cannot load config file {}", path))?;
            if let Err(e) = file_config.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Some(file_config)
        }
        None => None,
    };

    let db_path = file_config
        .as_ref()
        .map(|c| c.db_path().to_string())
        .unwrap_or_else(|| cli.db_path().to_string());

    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("cannot open database {}", db_path))?;
    let mut repo = ClientRepository::new(store);

    if let Err(e) = run(&mut repo, cli.command, file_config.as_ref()) {
        tracing::error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(
    repo: &mut ClientRepository<SqliteStore>,
    command: Command,
    file_config: Option<&BackOfficeConfig>,
) -> rental_backoffice::Result<()> {
    match command {
        Command::Register {
            name,
            national_id,
            birth_date,
            licenses,
        } => {
            let record = repo.create(&name, &national_id, &birth_date, &licenses)?;
            tracing::info!(cin = %record.national_id, "client registered");
            println!(
                "✅ Registered client {} (id {})",
                record.national_id,
                record.id.unwrap_or_default()
            );
        }
        Command::Show { national_id, json } => {
            let record = repo.find_by_national_id(&national_id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", record);
                if !record.license_types.is_empty() {
                    let labels: Vec<&str> =
                        record.license_types.iter().map(String::as_str).collect();
                    println!("Licenses: {}", labels.join(", "));
                }
            }
        }
        Command::Delete { national_id } => {
            repo.delete(&national_id)?;
            println!("✅ Deleted client {}", national_id.to_uppercase());
        }
        Command::Export { file } => {
            let file = resolve_archive_path(file, file_config)?;
            let records = repo.all()?;
            ClientFileArchive::new(&file).save(&records)?;
            println!("✅ Exported {} clients to {}", records.len(), file);
        }
        Command::Import { file } => {
            let file = resolve_archive_path(file, file_config)?;
            let restored = ClientFileArchive::new(&file).restore(repo)?;
            println!("✅ Imported {} clients from {}", restored.len(), file);
        }
    }

    Ok(())
}
