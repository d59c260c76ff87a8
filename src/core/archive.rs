use crate::core::{ClientRecord, ClientRepository, ClientStore};
use crate::utils::error::{ClientError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Field separator in archive lines: `name;;cin;;birth;;license1,license2`.
const FIELD_SEPARATOR: &str = ";;";

/// Flat-file export/import of the client set, for best-effort backups.
pub struct ClientFileArchive {
    path: PathBuf,
}

impl ClientFileArchive {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Writes one delimited line per record, overwriting any previous archive.
    pub fn save(&self, records: &[ClientRecord]) -> Result<()> {
        let mut output = String::new();
        for record in records {
            let licenses: Vec<&str> = record.license_types.iter().map(String::as_str).collect();
            output.push_str(&format!(
                "{}{sep}{}{sep}{}{sep}{}\n",
                record.full_name,
                record.national_id,
                record.birth_date,
                licenses.join(","),
                sep = FIELD_SEPARATOR,
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, output)?;
        tracing::info!(path = %self.path.display(), count = records.len(), "archive written");
        Ok(())
    }

    /// Re-registers every parsable line through the repository. Duplicate CINs
    /// and malformed lines are skipped, never propagated; a missing archive
    /// file is a no-op. Returns the records that were actually imported.
    pub fn restore<S: ClientStore>(
        &self,
        repo: &mut ClientRepository<S>,
    ) -> Result<Vec<ClientRecord>> {
        if !self.path.exists() {
            tracing::warn!(path = %self.path.display(), "no archive file, nothing to restore");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut restored = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            if fields.len() != 4 {
                tracing::warn!(line = index + 1, "skipping malformed archive line");
                continue;
            }

            let licenses: Vec<String> = if fields[3].is_empty() {
                Vec::new()
            } else {
                fields[3].split(',').map(str::to_string).collect()
            };

            match repo.create(fields[0], fields[1], fields[2], &licenses) {
                Ok(record) => restored.push(record),
                Err(ClientError::DuplicateId { national_id }) => {
                    tracing::debug!(line = index + 1, cin = %national_id, "duplicate, skipping");
                }
                Err(err) => {
                    tracing::warn!(line = index + 1, error = %err, "skipping archive line");
                }
            }
        }

        tracing::info!(path = %self.path.display(), count = restored.len(), "archive restored");
        Ok(restored)
    }
}
