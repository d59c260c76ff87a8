use crate::utils::error::{ClientError, Result};
use chrono::NaiveDate;
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Names and national ids accept ASCII alphanumerics and spaces, nothing else.
pub fn validate_alphanumeric(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation {
            field: field_name.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }

    let re = Regex::new(r"^[a-zA-Z0-9 ]+$").unwrap();
    if !re.is_match(value) {
        return Err(ClientError::Validation {
            field: field_name.to_string(),
            reason: "only alphanumeric characters and spaces are allowed".to_string(),
        });
    }

    Ok(())
}

pub fn validate_birth_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| ClientError::Validation {
        field: field_name.to_string(),
        reason: format!("expected a YYYY-MM-DD date: {}", e),
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ClientError::Config {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(ClientError::Config {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}
